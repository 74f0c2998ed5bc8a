/// Main entry point for the Habit Tracker MCP server
///
/// This file sets up logging, parses command line arguments, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use clap::Parser;
use tracing::info;

use habit_tracker::{parse_day, HabitTrackerServer};

/// Command line arguments for the Habit Tracker MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Treat this day (YYYY-MM-DD) as "today" instead of the local date
    #[arg(long, value_parser = parse_today)]
    today: Option<chrono::NaiveDate>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_today(s: &str) -> Result<chrono::NaiveDate, String> {
    parse_day(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting Habit Tracker MCP server");
    if let Some(day) = args.today {
        info!("Using {} as today", day);
    }

    let server = HabitTrackerServer::new(args.today);
    server.run().await?;

    info!("Habit Tracker MCP server shutdown complete");
    Ok(())
}
