//! Jobseek CLI
//!
//! Launches the job-search bar in the terminal. Search requests emitted
//! while the widget runs are logged, and printed as JSON lines on exit
//! when `--json` is given.

use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;

use jobseek::tui::app::App;

/// Jobseek - a job-search bar for the terminal
#[derive(Parser)]
#[command(name = "jobseek")]
#[command(author = "Jobseek Contributors")]
#[command(version)]
#[command(about = "Job-search bar with autocomplete and filter dropdowns", long_about = None)]
struct Cli {
    /// How long a suggestion list stays up after its field loses focus,
    /// in milliseconds. Best-effort grace window for suggestion clicks.
    #[arg(long, default_value = "200")]
    blur_delay_ms: u64,

    /// Event-loop tick interval in milliseconds
    #[arg(long, default_value = "50")]
    tick_rate_ms: u64,

    /// Print emitted search requests as JSON lines on exit
    #[arg(long)]
    json: bool,
}

fn main() {
    jobseek::logging::init();
    jobseek::logging::info("MAIN", "jobseek starting up");

    let cli = Cli::parse();

    let (search_tx, search_rx) = mpsc::channel();
    let mut app = App::new(search_tx);
    app.set_blur_delay(Duration::from_millis(cli.blur_delay_ms));

    let result = jobseek::tui::run(&mut app, Duration::from_millis(cli.tick_rate_ms));

    // The widget never executes searches itself; surface what it emitted
    for request in search_rx.try_iter() {
        if cli.json {
            match serde_json::to_string(&request) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("failed to serialize search request: {}", e),
            }
        }
    }

    if let Err(e) = result {
        jobseek::logging::error("MAIN", &format!("fatal: {}", e));
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    jobseek::logging::info("MAIN", "jobseek exiting");
}
