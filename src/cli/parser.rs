use clap::{Parser, Subcommand};

/// Command-line interface definition for worktimer
/// CLI application to track time spent at work with SQLite
#[derive(Parser)]
#[command(
    name = "worktimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "WorkTimer: Simple tracker of time spent at work",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the work timer
    Start,

    /// Stop the work timer
    Stop,

    /// Display detailed time worked on a given day
    Day {
        #[arg(
            short = 'd',
            long = "date",
            help = "The date to display, in YYYY-MM-DD format  [default: today's date]"
        )]
        date: Option<String>,
    },

    /// Display time worked on each day in a given week
    Week {
        #[arg(
            short = 'd',
            long = "date",
            help = "A date within the week to display, in YYYY-MM-DD format  [default: today's date]"
        )]
        date: Option<String>,
    },
}
