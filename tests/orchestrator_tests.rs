mod common;
use common::{RecordingStore, ScriptedGenerator, day, init_db_with_data, setup_test_db};
use eventquery::core::orchestrator::ERROR_PREFIX;
use eventquery::core::{Orchestrator, QuerySource};
use eventquery::db::SqliteStore;
use eventquery::db::initialize::init_db;
use eventquery::db::pool::DbPool;
use eventquery::db::queries::insert_event;
use eventquery::models::{EventRecord, NewEvent, TemporalMatch};

fn record(title: &str) -> EventRecord {
    EventRecord {
        title: Some(title.into()),
        ..Default::default()
    }
}

#[test]
fn test_recognized_query_skips_translator() {
    let store = RecordingStore {
        rows: vec![record("Jazz Night")],
        ..Default::default()
    };
    let generator = ScriptedGenerator::replying("SELECT * FROM events LIMIT 10");
    let orch = Orchestrator::new(&store, &generator, 0.0).with_today(day(2025, 11, 15));

    let reply = orch.handle("Music shows next month");

    assert!(reply.contains("*Title:* Jazz Night"));
    assert_eq!(generator.calls(), 0);
    let executed = store.executed.borrow();
    assert_eq!(executed.len(), 1);
    assert!(executed[0].contains("MONTH(") && executed[0].contains("= 12"));
    assert!(executed[0].contains("YEAR(") && executed[0].contains("= 2025"));
}

#[test]
fn test_unrecognized_query_uses_translator_once() {
    let store = RecordingStore::default();
    let generator = ScriptedGenerator::replying("```sql\nSELECT * FROM events WHERE category_id = 6 LIMIT 10;\n```");
    let orch = Orchestrator::new(&store, &generator, 0.0);

    let plan = orch.plan("any jazz concerts?").expect("plan");
    assert_eq!(plan.matched, TemporalMatch::NoMatch);
    assert_eq!(plan.query.source, QuerySource::Translator);
    assert_eq!(generator.calls(), 1);

    let reply = orch.handle("any jazz concerts?");
    assert_eq!(reply, "No matching events found.");
    assert_eq!(generator.calls(), 2);
    assert_eq!(
        store.executed.borrow()[0],
        "SELECT * FROM events WHERE category_id = 6 LIMIT 10"
    );
}

#[test]
fn test_session_released_on_success() {
    let store = RecordingStore::default();
    let generator = ScriptedGenerator::replying("unused");
    let orch = Orchestrator::new(&store, &generator, 0.0).with_today(day(2025, 6, 1));

    orch.handle("what's on this month");

    assert_eq!(store.opened.get(), 1);
    assert_eq!(store.released.get(), 1);
}

#[test]
fn test_session_released_on_translation_failure() {
    let store = RecordingStore::default();
    let generator = ScriptedGenerator::failing("service unavailable");
    let orch = Orchestrator::new(&store, &generator, 0.0);

    let reply = orch.handle("something fun");

    assert!(reply.starts_with(ERROR_PREFIX));
    assert!(reply.contains("service unavailable"));
    assert!(store.executed.borrow().is_empty());
    assert_eq!(store.opened.get(), 1);
    assert_eq!(store.released.get(), 1);
}

#[test]
fn test_session_released_on_retrieval_failure() {
    let store = RecordingStore {
        fail_with: Some("no such column: colour".into()),
        ..Default::default()
    };
    let generator = ScriptedGenerator::replying("unused");
    let orch = Orchestrator::new(&store, &generator, 0.0).with_today(day(2025, 6, 1));

    let reply = orch.handle("events in june");

    assert!(reply.starts_with("⚠️ Error: "));
    assert!(reply.contains("no such column: colour"));
    assert_eq!(store.opened.get(), 1);
    assert_eq!(store.released.get(), 1);
}

#[test]
fn test_unsafe_translation_is_never_executed() {
    let store = RecordingStore::default();
    let generator = ScriptedGenerator::replying("DELETE FROM events");
    let orch = Orchestrator::new(&store, &generator, 0.0);

    let err = orch.fetch("wipe everything").unwrap_err();

    assert!(err.is_translation());
    assert!(!err.is_retrieval());
    assert!(store.executed.borrow().is_empty());
    assert_eq!(store.released.get(), 1);
}

#[test]
fn test_translation_without_limit_is_rejected() {
    let store = RecordingStore::default();
    let generator = ScriptedGenerator::replying("SELECT * FROM events");
    let orch = Orchestrator::new(&store, &generator, 0.0);

    let reply = orch.handle("all the things");

    assert!(reply.starts_with(ERROR_PREFIX));
    assert!(store.executed.borrow().is_empty());
}

// ---------------------------------------------------------------------------
// Against a real SQLite file
// ---------------------------------------------------------------------------

fn sqlite_orchestrator(db: &str) -> Orchestrator<SqliteStore, ScriptedGenerator> {
    Orchestrator::new(
        SqliteStore::new(db),
        ScriptedGenerator::failing("translator must not be called"),
        0.0,
    )
    .with_today(day(2025, 6, 5))
}

fn titles(rows: &[EventRecord]) -> Vec<String> {
    rows.iter().filter_map(|r| r.title.clone()).collect()
}

#[test]
fn test_sqlite_exact_day() {
    let db = setup_test_db("orch_exact_day");
    init_db_with_data(&db);

    let rows = sqlite_orchestrator(&db).fetch("what is on 1 june").expect("rows");

    assert_eq!(titles(&rows), vec!["Jazz Night"]);
    assert_eq!(rows[0].rating.as_deref(), Some("4.5"));
    assert_eq!(rows[0].address.as_deref(), Some("Blue Note, Main St 1"));
}

#[test]
fn test_sqlite_range_includes_late_events_on_end_day() {
    let db = setup_test_db("orch_range_end");
    init_db_with_data(&db);

    let rows = sqlite_orchestrator(&db)
        .fetch("events between 1 June and 10 June")
        .expect("rows");

    let t = titles(&rows);
    assert!(t.contains(&"Jazz Night".to_string()));
    assert!(t.contains(&"Late Show".to_string()));
    assert!(!t.contains(&"Summer Run".to_string()));
    assert_eq!(t.len(), 2);
}

#[test]
fn test_sqlite_month_reads_untidy_date_time() {
    let db = setup_test_db("orch_month");
    init_db_with_data(&db);

    let rows = sqlite_orchestrator(&db).fetch("events in june").expect("rows");

    let t = titles(&rows);
    assert_eq!(t.len(), 4);
    assert!(t.contains(&"Food Market".to_string()));
    assert!(!t.contains(&"Winter Gala".to_string()));
}

#[test]
fn test_sqlite_next_month_with_no_events() {
    let db = setup_test_db("orch_next_month");
    init_db_with_data(&db);

    // today is 2025-06-05: July has nothing
    let reply = sqlite_orchestrator(&db).handle("music next month");
    assert_eq!(reply, "No matching events found.");
}

#[test]
fn test_sqlite_missing_database_is_a_retrieval_error() {
    let db = setup_test_db("orch_missing_db");

    let err = sqlite_orchestrator(&db).fetch("events in june").unwrap_err();
    assert!(err.is_retrieval(), "unexpected error: {}", err);
}

/// 25 events on 20 June 2025.
fn crowded_store(name: &str) -> String {
    let db = setup_test_db(name);
    let pool = DbPool::new(&db).expect("open");
    init_db(&pool.conn).expect("init");
    for i in 1..=25 {
        insert_event(
            &pool.conn,
            &NewEvent::new(&format!("Gig {}", i), "20/06/2025,21:00"),
        )
        .expect("insert");
    }
    db
}

fn translated_reply(db: &str, sql: &str) -> String {
    Orchestrator::new(SqliteStore::new(db), ScriptedGenerator::replying(sql), 0.0)
        .handle("surprise me")
}

#[test]
fn test_negative_limit_from_translator_is_refused() {
    let db = crowded_store("orch_negative_limit");

    let reply = translated_reply(&db, "SELECT * FROM events LIMIT -1");

    assert!(reply.starts_with(ERROR_PREFIX), "{}", reply);
    assert_eq!(reply.matches("📅 *Event").count(), 0);
}

#[test]
fn test_subquery_limit_from_translator_is_refused() {
    let db = crowded_store("orch_subquery_limit");

    let reply = translated_reply(
        &db,
        "SELECT * FROM events WHERE id NOT IN (SELECT id FROM events LIMIT 1)",
    );

    assert!(reply.starts_with(ERROR_PREFIX), "{}", reply);
    assert_eq!(reply.matches("📅 *Event").count(), 0);
}

#[test]
fn test_crowded_day_shows_at_most_ten_events() {
    let db = crowded_store("orch_crowded_day");

    let reply = Orchestrator::new(
        SqliteStore::new(db.as_str()),
        ScriptedGenerator::failing("translator must not be called"),
        0.0,
    )
    .with_today(day(2025, 6, 1))
    .handle("what is on 20 june");

    assert_eq!(reply.matches("📅 *Event").count(), 10);
}
