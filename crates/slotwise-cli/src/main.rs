use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "slotwise-cli", version, about = "Slotwise CLI")]
struct Cli {
    /// Schedule endpoint URL (falls back to SCHEDULE_API_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View busy time slots for a date
    Busy {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// View free time slots for a date
    Free {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Check time slot availability
    Check {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,
    },
    /// Find first available slot for a duration
    Find {
        /// Duration in minutes
        minutes: u32,
    },
    /// Dump the fetched schedule snapshot as JSON
    Dump,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Busy { date } => commands::busy::run(cli.url, &date).await,
        Commands::Free { date } => commands::free::run(cli.url, &date).await,
        Commands::Check { date, start, end } => {
            commands::check::run(cli.url, &date, &start, &end).await
        }
        Commands::Find { minutes } => commands::find::run(cli.url, minutes).await,
        Commands::Dump => commands::dump::run(cli.url).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
