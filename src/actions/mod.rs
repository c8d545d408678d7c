//! Host-facing actions. Each action receives the latest user utterance and
//! returns the messages to send back plus any conversation events.

pub mod fallback;
pub mod fetch_events;
pub mod general_info;
pub mod webhook;

pub use fallback::Fallback;
pub use fetch_events::FetchEventData;
pub use general_info::GeneralInfo;
pub use webhook::{ActionRegistry, ActionRequest, ActionResponse};

use serde::{Deserialize, Serialize};

/// Conversation events understood by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum HostEvent {
    /// Drop the last user utterance from the conversation history.
    #[serde(rename = "rewind")]
    UserUtteranceReverted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionReply {
    pub messages: Vec<String>,
    pub events: Vec<HostEvent>,
}

impl ActionReply {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: HostEvent) -> Self {
        self.events.push(event);
        self
    }
}

pub trait Action {
    fn name(&self) -> &'static str;
    fn run(&self, text: &str) -> ActionReply;
}
