use crate::actions::{Action, GeneralInfo};
use crate::cli::commands::utterance;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::llm::OpenAiClient;

/// Run `action_general_info` on the given question.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Info { text } = cmd {
        let text = utterance(text)?;

        let client = OpenAiClient::new(&cfg.llm)?;
        let reply = GeneralInfo::new(client, cfg.llm.info_temperature).run(&text);
        for message in reply.messages {
            println!("{}", message);
        }
    }
    Ok(())
}
