use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{eq, setup_test_db, test_home};

/// `init` + the sample events, through the CLI.
fn init_with_events(home: &str, db: &str) {
    eq(home)
        .args(["--db", db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let events = [
        ("Jazz Night", "01/06/2025,20:30", Some("music")),
        ("Late Show", "10/06/2025,23:45", Some("art")),
        ("Summer Run", "11/06/2025,08:00", Some("sports")),
        ("Winter Gala", "20/12/2025,19:00", None),
    ];

    for (title, date_time, category) in events {
        let mut cmd = eq(home);
        cmd.args(["--db", db, "add", "--title", title, "--date-time", date_time]);
        if let Some(c) = category {
            cmd.args(["--category", c]);
        }
        cmd.assert().success().stdout(contains("added"));
    }
}

#[test]
fn test_init_creates_database() {
    let home = test_home("cli_init");
    let db = setup_test_db("cli_init");

    eq(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains(db.as_str()));

    assert!(fs::metadata(&db).is_ok());
}

#[test]
fn test_init_writes_config_file() {
    let home = test_home("cli_init_config");

    eq(&home).arg("init").assert().success();

    let conf = std::path::Path::new(&home)
        .join(".eventquery")
        .join("eventquery.conf");
    let content = fs::read_to_string(conf).expect("config written");
    assert!(content.contains("database:"));
    assert!(content.contains("model: gpt-4"));

    eq(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}

#[test]
fn test_ask_range() {
    let home = test_home("cli_ask_range");
    let db = setup_test_db("cli_ask_range");
    init_with_events(&home, &db);

    eq(&home)
        .args([
            "--db",
            &db,
            "ask",
            "--today",
            "2025-06-05",
            "events between 1 June and 10 June",
        ])
        .assert()
        .success()
        .stdout(contains("Jazz Night"))
        .stdout(contains("Late Show"))
        .stdout(contains("Summer Run").not())
        .stdout(contains("📅 *Event 2*"));
}

#[test]
fn test_ask_words_are_joined() {
    let home = test_home("cli_ask_words");
    let db = setup_test_db("cli_ask_words");
    init_with_events(&home, &db);

    eq(&home)
        .args(["--db", &db, "ask", "--today", "2025-11-15", "what", "is", "on", "next", "month"])
        .assert()
        .success()
        .stdout(contains("Winter Gala"))
        .stdout(contains("Jazz Night").not());
}

#[test]
fn test_ask_without_results() {
    let home = test_home("cli_ask_empty");
    let db = setup_test_db("cli_ask_empty");
    init_with_events(&home, &db);

    eq(&home)
        .args(["--db", &db, "ask", "--today", "2025-06-05", "anything in march?"])
        .assert()
        .success()
        .stdout(contains("No matching events found."));
}

#[test]
fn test_ask_without_api_key_reports_translation_error() {
    let home = test_home("cli_ask_nokey");
    let db = setup_test_db("cli_ask_nokey");
    init_with_events(&home, &db);

    eq(&home)
        .args(["--db", &db, "ask", "any good jazz downtown?"])
        .assert()
        .success()
        .stdout(contains("⚠️ Error: "))
        .stdout(contains("OPENAI_API_KEY not set"));
}

#[test]
fn test_ask_rejects_bad_today() {
    let home = test_home("cli_ask_bad_today");
    let db = setup_test_db("cli_ask_bad_today");

    eq(&home)
        .args(["--db", &db, "ask", "--today", "05/06/2025", "events in june"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_sql_shows_plan() {
    let home = test_home("cli_sql");

    eq(&home)
        .args(["sql", "--today", "2025-06-05", "events on 15 june"])
        .assert()
        .success()
        .stdout(contains("match  : day 2025-06-15"))
        .stdout(contains("source : predicate"))
        .stdout(contains("DATE(STR_TO_DATE(date_time, '%d/%m/%Y,%H:%i')) = '2025-06-15' LIMIT 10"));
}

#[test]
fn test_sql_json() {
    let home = test_home("cli_sql_json");

    let out = eq(&home)
        .args(["sql", "--json", "--today", "2025-12-03", "next month"])
        .output()
        .expect("run");
    assert!(out.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json plan");
    assert_eq!(plan["matched"]["kind"], "month_of_year");
    assert_eq!(plan["matched"]["month"], 1);
    assert_eq!(plan["matched"]["year"], 2026);
    assert_eq!(plan["query"]["source"], "predicate");
}

#[test]
fn test_add_rejects_bad_date_time() {
    let home = test_home("cli_add_bad");
    let db = setup_test_db("cli_add_bad");

    eq(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    eq(&home)
        .args(["--db", &db, "add", "--title", "Gig", "--date-time", "2025-06-01 20:00"])
        .assert()
        .failure()
        .stderr(contains("dd/mm/YYYY,HH:MM"));

    eq(&home)
        .args([
            "--db", &db, "add", "--title", "Gig", "--date-time", "01/06/2025,20:00", "--category",
            "opera",
        ])
        .assert()
        .failure()
        .stderr(contains("unknown category"));
}

#[test]
fn test_import_and_log() {
    let home = test_home("cli_import");
    let db = setup_test_db("cli_import");
    let file = std::env::temp_dir().join("cli_import_events.json");
    fs::write(
        &file,
        r#"[
            {"title": "Book Fair", "date_time": "07/09/2025,10:00", "category_id": 5, "rating": 3.5},
            {"title": "Hack Night", "date_time": "12/09/2025,19 : 00", "category_id": 2}
        ]"#,
    )
    .expect("write json");
    let file = file.to_string_lossy().to_string();

    eq(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    eq(&home)
        .args(["--db", &db, "import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Imported 2 events"));

    eq(&home)
        .args(["--db", &db, "ask", "--today", "2025-08-20", "events in september"])
        .assert()
        .success()
        .stdout(contains("Book Fair"))
        .stdout(contains("Hack Night"))
        .stdout(contains("3.5/5"));

    eq(&home)
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("import").and(contains("init")));
}

#[test]
fn test_webhook_fetch_events() {
    let home = test_home("cli_webhook");
    let db = setup_test_db("cli_webhook");
    init_with_events(&home, &db);

    let body = r#"{
        "next_action": "action_fetch_event_data",
        "sender_id": "u1",
        "tracker": {"sender_id": "u1", "latest_message": {"text": "what is on 1 june"}}
    }"#;

    let out = eq(&home)
        .args(["--db", &db, "webhook", "--today", "2025-05-20"])
        .write_stdin(body)
        .output()
        .expect("run");
    assert!(out.status.success());

    let resp: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json response");
    assert_eq!(resp["events"], serde_json::json!([]));
    let text = resp["responses"][0]["text"].as_str().expect("text");
    assert!(text.contains("Jazz Night"));
    assert!(text.contains("• *Location:* N/A"));
}

#[test]
fn test_webhook_fallback_and_unknown_action() {
    let home = test_home("cli_webhook_fallback");
    let db = setup_test_db("cli_webhook_fallback");

    eq(&home)
        .args(["--db", &db, "webhook"])
        .write_stdin(r#"{"next_action": "action_fallback", "tracker": {"latest_message": {"text": "hm"}}}"#)
        .assert()
        .success()
        .stdout(contains(r#""event":"rewind""#))
        .stdout(contains("Could you rephrase it?"));

    eq(&home)
        .args(["--db", &db, "webhook"])
        .write_stdin(r#"{"next_action": "action_dance"}"#)
        .assert()
        .success()
        .stdout(contains(r#""action_name":"action_dance""#));
}
