//! JSON shapes of the action webhook and the name → action dispatch.

use crate::actions::{Action, HostEvent};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub latest_message: LatestMessage,
}

/// Body of an action call. Only the fields the actions use are read;
/// the rest (`domain`, slots, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
}

impl ActionRequest {
    pub fn text(&self) -> &str {
        self.tracker.latest_message.text.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<HostEvent>,
    pub responses: Vec<ResponseMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionError {
    pub error: String,
    pub action_name: String,
}

/// The actions served by one process.
#[derive(Default)]
pub struct ActionRegistry<'a> {
    actions: Vec<Box<dyn Action + 'a>>,
}

impl<'a> ActionRegistry<'a> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub fn register(mut self, action: impl Action + 'a) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.name()).collect()
    }

    pub fn dispatch(&self, request: &ActionRequest) -> Result<ActionResponse, ActionError> {
        let Some(action) = self.actions.iter().find(|a| a.name() == request.next_action) else {
            warn!(action = %request.next_action, "unknown action");
            return Err(ActionError {
                error: format!(
                    "No registered action found for name '{}'.",
                    request.next_action
                ),
                action_name: request.next_action.clone(),
            });
        };

        let sender = request
            .sender_id
            .as_deref()
            .or(request.tracker.sender_id.as_deref())
            .unwrap_or("-");
        debug!(action = action.name(), sender = sender, "running action");

        let reply = action.run(request.text());
        Ok(ActionResponse {
            events: reply.events,
            responses: reply
                .messages
                .into_iter()
                .map(|text| ResponseMessage { text })
                .collect(),
        })
    }
}
