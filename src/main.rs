use cbenchdec::{Result, log, model, render};
use clap::Parser;
use std::io::{self, BufRead};
use tracing::Level;

/// Reads render logs on stdin and prints per-(version, job) run times:
///
/// <version> <job>\t<secs> <secs> ...
#[derive(Parser, Debug)]
#[command(name = "cbenchdec", version, about, long_about = None)]
struct Cli {
    /// Extra logging on stderr (-v: dropped headers, counts; -vv: every record)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(log_level(cli.verbose))
        .init();
    tracing::debug!(?cli, "parsed CLI arguments");

    // 1) Extract records from stdin.
    let stdin = io::stdin();
    let records = log::extract_records(stdin.lock().lines())?;

    // 2) Group by (version, job).
    let table = model::aggregate(records)?;
    tracing::debug!(keys = table.len(), "aggregated records");

    // 3) Render.
    render::write_table(&table, io::stdout().lock())?;

    Ok(())
}
