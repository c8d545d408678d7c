pub mod date_phrase;
pub mod guard;
pub mod orchestrator;
pub mod predicate;
pub mod presenter;
pub mod recognizer;
pub mod translator;

pub use orchestrator::{Orchestrator, QueryPlan};
pub use predicate::{GeneratedQuery, QuerySource, ROW_CAP};
pub use recognizer::recognize;
