use crate::cli::commands::util::create_timer;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `start` command: put the user on the clock.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let timer = create_timer(cfg);
    let msg = timer.start()?;
    println!("{}", msg);
    Ok(())
}
