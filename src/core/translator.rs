//! Fallback translator: hands queries the recognizer could not place to the
//! text-generation service and cleans up what comes back.
//!
//! The returned SQL is untrusted; the orchestrator passes it through
//! [`crate::core::guard::validate`] before execution.

use crate::core::predicate::{GeneratedQuery, QuerySource, ROW_CAP};
use crate::errors::{AppError, AppResult};
use crate::llm::TextGenerator;
use crate::models::Category;
use tracing::debug;

/// Columns of the `events` table, in schema order.
pub const EVENT_COLUMNS: [&str; 19] = [
    "id",
    "title",
    "address",
    "lat",
    "long",
    "date_time",
    "about",
    "category_id",
    "rating",
    "user_id",
    "created_at",
    "link",
    "visible_date",
    "recurring",
    "end_date",
    "weekdays",
    "dates",
    "all_time",
    "selected_weeks",
];

/// The fixed instruction template with `query` as the task input.
pub fn build_prompt(query: &str) -> String {
    let categories: String = Category::ALL
        .iter()
        .map(|c| format!("    • {} → {}\n", c.name(), c.id()))
        .collect();

    format!(
        r#"You are an AI that converts natural language questions into MySQL SELECT queries.

The database has a table named `events` with the following columns:
{columns}.

Formatting rules:
- `date_time` is a string like '20/06/2025,20 : 30'
- Use STR_TO_DATE(date_time, '%d/%m/%Y,%H : %i') for comparisons
- Use:
    STR_TO_DATE(date_time, '%d/%m/%Y,%H : %i') >= ...
    AND STR_TO_DATE(date_time, '%d/%m/%Y,%H : %i') < ...
- Category mappings (category_id):
{categories}
Return only a valid SELECT query.
No markdown, no comments.
Always use LIMIT {cap}.

User query: "{query}"
"#,
        columns = EVENT_COLUMNS.join(", "),
        categories = categories,
        cap = ROW_CAP,
        query = query.trim(),
    )
}

/// Remove code fences and a trailing `;` from a completion.
pub fn strip_markup(raw: &str) -> String {
    raw.trim()
        .replace("```sql", "")
        .replace("```SQL", "")
        .replace("```", "")
        .trim()
        .trim_end_matches(';')
        .trim()
        .to_string()
}

pub struct Translator<G> {
    generator: G,
    temperature: f32,
}

impl<G: TextGenerator> Translator<G> {
    pub fn new(generator: G, temperature: f32) -> Self {
        Self {
            generator,
            temperature,
        }
    }

    /// One service call per invocation; failures are never retried.
    pub fn translate(&self, query: &str) -> AppResult<GeneratedQuery> {
        let prompt = build_prompt(query);
        let raw = self.generator.complete(&prompt, self.temperature)?;
        let sql = strip_markup(&raw);

        if sql.is_empty() {
            return Err(AppError::Translation("service returned empty text".into()));
        }

        debug!(sql = %sql, "translated query");
        Ok(GeneratedQuery::new(sql, QuerySource::Translator))
    }
}
