use crate::cli::commands::util::create_timer;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `stop` command: take the user off the clock.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let timer = create_timer(cfg);
    let msg = timer.stop()?;
    println!("{}", msg);
    Ok(())
}
