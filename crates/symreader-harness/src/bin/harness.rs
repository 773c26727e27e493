//! CLI entrypoint for the symreader conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use symreader_harness::checks;
use symreader_harness::error::HarnessError;
use symreader_harness::report::ConformanceReport;

/// Conformance tooling for the symbol-reader interop protocol.
#[derive(Debug, Parser)]
#[command(name = "symreader-harness")]
#[command(about = "Conformance harness for the symbol-reader interop protocol")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the conformance matrix.
    Run {
        /// Campaign name recorded in the report.
        #[arg(long, default_value = "default")]
        campaign: String,
        /// Also write the JSON report to this path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the checks in the matrix.
    List,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("harness: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, HarnessError> {
    match cli.command {
        Command::Run { campaign, output } => {
            let report = ConformanceReport::new(campaign, checks::run_all());
            print!("{}", report.render_text());
            if let Some(path) = output {
                report.write_json(&path)?;
            }
            Ok(if report.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::List => {
            for name in checks::names() {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
