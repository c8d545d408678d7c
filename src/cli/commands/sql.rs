use crate::cli::commands::{today_override, utterance};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Orchestrator, guard};
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Print the recognized match and the SQL that `ask` would run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sql { text, today, json } = cmd {
        let text = utterance(text)?;

        let mut orchestrator = Orchestrator::from_config(cfg)?;
        if let Some(d) = today_override(today)? {
            orchestrator = orchestrator.with_today(d);
        }

        let plan = orchestrator.plan(&text)?;
        let verdict = guard::validate(&plan.query.sql);

        if *json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            println!("match  : {}", plan.matched);
            println!("source : {}", plan.query.source.as_str());
            println!("sql    : {}", plan.query.sql);
        }

        if let Err(e) = verdict {
            warning(format!("This query would be rejected: {}", e));
        }
    }
    Ok(())
}
