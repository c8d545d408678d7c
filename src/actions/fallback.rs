use crate::actions::{Action, ActionReply, HostEvent};

pub const FALLBACK_MESSAGE: &str = "I'm sorry, I didn't understand that. \
Could you rephrase it?\n\n\
Try something like:\n• Show events happening in June\n\
• Events between 5th and 10th July\n• Music shows next month 🎶";

/// Reply to an utterance nothing else understood and ask the host to
/// forget it.
pub struct Fallback;

impl Action for Fallback {
    fn name(&self) -> &'static str {
        "action_fallback"
    }

    fn run(&self, _text: &str) -> ActionReply {
        ActionReply::text(FALLBACK_MESSAGE).with_event(HostEvent::UserUtteranceReverted)
    }
}
