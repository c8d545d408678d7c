use crate::actions::{Action, FetchEventData};
use crate::cli::commands::{today_override, utterance};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Orchestrator;
use crate::errors::AppResult;

/// Run `action_fetch_event_data` on the given question and print the reply.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ask { text, today } = cmd {
        let text = utterance(text)?;

        let mut orchestrator = Orchestrator::from_config(cfg)?;
        if let Some(d) = today_override(today)? {
            orchestrator = orchestrator.with_today(d);
        }

        let reply = FetchEventData::new(orchestrator).run(&text);
        for message in reply.messages {
            println!("{}", message);
        }
    }
    Ok(())
}
