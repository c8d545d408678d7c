use crate::actions::{ActionRegistry, ActionRequest, Fallback, FetchEventData, GeneralInfo};
use crate::cli::commands::today_override;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Orchestrator;
use crate::errors::AppResult;
use crate::llm::OpenAiClient;
use std::fs;
use std::io::{self, Read};

/// Read one action request, dispatch it and write the JSON response to
/// stdout. Unknown actions produce an error object, not a failure exit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Webhook { file, today } = cmd {
        let body = match file {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let request: ActionRequest = serde_json::from_str(&body)?;

        let mut orchestrator = Orchestrator::from_config(cfg)?;
        if let Some(d) = today_override(today)? {
            orchestrator = orchestrator.with_today(d);
        }

        let registry = ActionRegistry::new()
            .register(FetchEventData::new(orchestrator))
            .register(GeneralInfo::new(
                OpenAiClient::new(&cfg.llm)?,
                cfg.llm.info_temperature,
            ))
            .register(Fallback);

        let out = match registry.dispatch(&request) {
            Ok(response) => serde_json::to_string(&response)?,
            Err(error) => serde_json::to_string(&error)?,
        };
        println!("{}", out);
    }
    Ok(())
}
