//! Action orchestrator: recognize → (build | translate) → guard → execute →
//! present.
//!
//! The store session is opened at the start of a request and lives in the
//! request's scope, so it is released on every exit path.

use crate::config::Config;
use crate::core::guard;
use crate::core::predicate::{self, GeneratedQuery};
use crate::core::presenter;
use crate::core::recognizer::recognize;
use crate::core::translator::Translator;
use crate::db::{EventStore, SqliteStore};
use crate::errors::AppResult;
use crate::llm::{OpenAiClient, TextGenerator};
use crate::models::{EventRecord, TemporalMatch};
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

/// Prefix of the reply sent when translation or retrieval fails.
pub const ERROR_PREFIX: &str = "⚠️ Error: ";

/// What the pipeline decided to run for one query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPlan {
    pub matched: TemporalMatch,
    pub query: GeneratedQuery,
}

pub struct Orchestrator<S, G> {
    store: S,
    translator: Translator<G>,
    today: Option<NaiveDate>,
}

impl Orchestrator<SqliteStore, OpenAiClient> {
    /// Production wiring from the loaded configuration.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let client = OpenAiClient::new(&cfg.llm)?;
        Ok(Self::new(
            SqliteStore::new(cfg.database.clone()),
            client,
            cfg.llm.translate_temperature,
        ))
    }
}

impl<S: EventStore, G: TextGenerator> Orchestrator<S, G> {
    pub fn new(store: S, generator: G, translate_temperature: f32) -> Self {
        Self {
            store,
            translator: Translator::new(generator, translate_temperature),
            today: None,
        }
    }

    /// Pin the current date (tests, `--today`).
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(date::today)
    }

    /// Decide which SQL answers `text`. The translator is only consulted
    /// when no temporal rule matched. The query is not validated here.
    pub fn plan(&self, text: &str) -> AppResult<QueryPlan> {
        let matched = recognize(text, self.today());

        let query = match predicate::build(&matched) {
            Some(q) => q,
            None => self.translator.translate(text)?,
        };

        info!(source = query.source.as_str(), matched = %matched, "query planned");
        Ok(QueryPlan { matched, query })
    }

    /// Run the full retrieval for `text`.
    pub fn fetch(&self, text: &str) -> AppResult<Vec<EventRecord>> {
        let mut session = self.store.open()?;

        let plan = self.plan(text)?;
        guard::validate(&plan.query.sql)?;

        let rows = session.fetch(&plan.query.sql)?;
        info!(rows = rows.len(), "events fetched");
        Ok(rows)
    }

    /// Reply text for `text`: the presented events, or the error message.
    pub fn handle(&self, text: &str) -> String {
        match self.fetch(text) {
            Ok(rows) => presenter::present(&rows),
            Err(e) => {
                warn!(error = %e, retrieval = e.is_retrieval(), translation = e.is_translation(), "query failed");
                format!("{}{}", ERROR_PREFIX, e)
            }
        }
    }
}
