#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use eventquery::db::initialize::init_db;
use eventquery::db::pool::DbPool;
use eventquery::db::queries::insert_event;
use eventquery::db::{EventStore, StoreSession};
use eventquery::errors::{AppError, AppResult};
use eventquery::llm::TextGenerator;
use eventquery::models::{EventRecord, NewEvent};
use std::cell::{Cell, RefCell};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the developer's config and API key.
pub fn eq(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("eventquery");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("OPENAI_API_KEY")
        .env_remove("EVENTQUERY_DB")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eventquery.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Empty per-test HOME directory
pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eventquery_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Events used by the store and CLI tests (all in 2025).
pub fn sample_events() -> Vec<NewEvent> {
    let mut jazz = NewEvent::new("Jazz Night", "01/06/2025,20:30");
    jazz.address = Some("Blue Note, Main St 1".into());
    jazz.link = Some("https://example.org/jazz".into());
    jazz.rating = Some(4.5);
    jazz.about = Some("Live jazz quartet".into());
    jazz.category_id = Some(6);

    let mut late = NewEvent::new("Late Show", "10/06/2025,23:45");
    late.address = Some("Old Theatre".into());
    late.rating = Some(4.0);
    late.category_id = Some(4);

    let mut untidy = NewEvent::new("Food Market", "15/06/2025,10 : 00");
    untidy.category_id = Some(7);

    let outside = NewEvent::new("Summer Run", "11/06/2025,08:00");
    let december = NewEvent::new("Winter Gala", "20/12/2025,19:00");

    vec![jazz, late, untidy, outside, december]
}

/// Initialize the schema and insert `sample_events()` through the library.
pub fn init_db_with_data(db_path: &str) {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    for ev in sample_events() {
        insert_event(&pool.conn, &ev).expect("insert event");
    }
}

/// Text generator returning a canned completion and recording prompts.
pub struct ScriptedGenerator {
    reply: Result<String, String>,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: Err(msg.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn complete(&self, prompt: &str, _temperature: f32) -> AppResult<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.reply.clone().map_err(AppError::Translation)
    }
}

/// In-memory store that records executed SQL and counts open/close.
#[derive(Default)]
pub struct RecordingStore {
    pub rows: Vec<EventRecord>,
    pub fail_with: Option<String>,
    pub opened: Cell<usize>,
    pub released: Cell<usize>,
    pub executed: RefCell<Vec<String>>,
}

pub struct RecordingSession<'a> {
    store: &'a RecordingStore,
}

impl StoreSession for RecordingSession<'_> {
    fn fetch(&mut self, sql: &str) -> AppResult<Vec<EventRecord>> {
        self.store.executed.borrow_mut().push(sql.to_string());
        match &self.store.fail_with {
            Some(msg) => Err(AppError::QuerySyntax(msg.clone())),
            None => Ok(self.store.rows.clone()),
        }
    }
}

impl Drop for RecordingSession<'_> {
    fn drop(&mut self) {
        self.store.released.set(self.store.released.get() + 1);
    }
}

impl EventStore for RecordingStore {
    fn open(&self) -> AppResult<Box<dyn StoreSession + '_>> {
        self.opened.set(self.opened.get() + 1);
        Ok(Box::new(RecordingSession { store: self }))
    }
}
