use crate::cli::commands::util::{create_timer, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `day` command: print the daily time-worked report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let d = resolve_date(date.as_ref())?;
        let timer = create_timer(cfg);
        let report = timer.daily_report(d)?;
        println!("{}", report);
    }
    Ok(())
}
