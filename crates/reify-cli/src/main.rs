//! Reify CLI - Rebuild named asset trees from a hashed object store

mod prompt;
mod session;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use reify_asset::MaterializeReport;
use reify_core::LayoutConfig;
use session::{RunStatus, Session};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

/// Exit status for fatal errors (`-1` as seen by the shell)
const FATAL_EXIT: u8 = 255;

#[derive(Parser)]
#[command(name = "reify")]
#[command(about = "Copy hashed assets out of an object store into named files", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding `indexes/` and `objects/` (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// No diagnostics on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error(&format!("{e:#}"));
            ExitCode::from(FATAL_EXIT)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::OFF,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, _) => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let root = match cli.root {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    let layout = LayoutConfig::load(&root)?;
    let session = Session::new(layout.workspace(&root), io::stdin().lock(), io::stdout());

    match session.run()? {
        RunStatus::NoManifests => {
            println!("No index files found, please ensure you are running this in the correct directory");
        }
        RunStatus::Finished(report) => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &MaterializeReport) {
    println!();
    ui::success(&format!(
        "Process finished with {} file(s) successfully copied!",
        report.copied
    ));
    println!(
        "All copied resources are located in {}",
        report.output_dir.display()
    );

    if !report.is_complete() || report.unhashed > 0 {
        ui::dim_err(&format!(
            "Skipped: {} missing, {} failed, {} rejected, {} without hash",
            report.missing, report.failed, report.rejected, report.unhashed
        ));
    }
}
