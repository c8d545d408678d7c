use crate::actions::{Action, ActionReply};
use crate::core::Orchestrator;
use crate::db::EventStore;
use crate::llm::TextGenerator;

/// Answer an event question from the store.
pub struct FetchEventData<S, G> {
    orchestrator: Orchestrator<S, G>,
}

impl<S, G> FetchEventData<S, G> {
    pub fn new(orchestrator: Orchestrator<S, G>) -> Self {
        Self { orchestrator }
    }
}

impl<S: EventStore, G: TextGenerator> Action for FetchEventData<S, G> {
    fn name(&self) -> &'static str {
        "action_fetch_event_data"
    }

    fn run(&self, text: &str) -> ActionReply {
        ActionReply::text(self.orchestrator.handle(text))
    }
}
