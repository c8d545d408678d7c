use crate::actions::{Action, ActionReply};
use crate::errors::AppResult;
use crate::llm::TextGenerator;
use tracing::warn;

pub const INFO_ERROR_PREFIX: &str = "⚠️ Error fetching info: ";

pub fn build_info_prompt(question: &str) -> String {
    format!(
        "You are an assistant that answers general questions about events.\n\
         Answer clearly in 3–4 lines only.\n\n\
         Question: \"{}\"\n",
        question.trim()
    )
}

/// Free-form answers to general questions about events.
pub struct GeneralInfo<G> {
    generator: G,
    temperature: f32,
}

impl<G: TextGenerator> GeneralInfo<G> {
    pub fn new(generator: G, temperature: f32) -> Self {
        Self {
            generator,
            temperature,
        }
    }

    pub fn answer(&self, question: &str) -> AppResult<String> {
        let raw = self
            .generator
            .complete(&build_info_prompt(question), self.temperature)?;
        Ok(raw.trim().to_string())
    }
}

impl<G: TextGenerator> Action for GeneralInfo<G> {
    fn name(&self) -> &'static str {
        "action_general_info"
    }

    fn run(&self, text: &str) -> ActionReply {
        match self.answer(text) {
            Ok(answer) => ActionReply::text(answer),
            Err(e) => {
                warn!(error = %e, "general info failed");
                ActionReply::text(format!("{}{}", INFO_ERROR_PREFIX, e))
            }
        }
    }
}
