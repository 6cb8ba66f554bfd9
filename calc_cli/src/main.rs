//! # Vectorial CLI Application
//!
//! Terminal front-end for the vector mechanics engine. It owns everything
//! the engine leaves out: parsing typed text into numbers, fixed-decimal
//! formatting, and the interactive force list.
//!
//! ## Usage
//!
//! ```text
//! calc_cli                       # interactive session
//! calc_cli solve scenario.json   # solve a scenario file
//! calc_cli solve scenario.json --json
//! ```

mod input;
mod interactive;
mod render;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use log::info;

use calc_core::scenario::Scenario;

use crate::input::Prompter;
use crate::render::Renderer;

/// Vector force calculator: resultants, moments, work and body dynamics.
#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about)]
struct Cli {
    /// Print debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Decimals shown for every number
    #[arg(long, default_value_t = 3, global = true)]
    precision: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (default)
    Interactive,
    /// Solve a JSON scenario file
    Solve {
        /// Scenario file with `forces` and an optional `body`
        path: PathBuf,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Install the global logger.
///
/// `RUST_LOG` wins when set. Otherwise prompts only share the terminal with
/// warnings, and `--verbose` adds engine debug output tagged by module.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    // already installed when called twice (tests)
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(verbose)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let renderer = Renderer::new(cli.precision);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            println!("Vectorial - Force, Moment, Work and Dynamics Calculator");
            println!("=======================================================");
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            let session = interactive::run(&mut prompter, renderer)?;
            info!("session ended with {} forces", session.len());
        }
        Command::Solve { path, json } => {
            let scenario = Scenario::from_file(&path)
                .with_context(|| format!("loading scenario {}", path.display()))?;
            let report = scenario.solve();

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            for (index, force) in report.forces.iter().enumerate() {
                println!("{}", renderer.force(index, force));
            }
            println!("System");
            println!("------");
            println!("{}", renderer.resultant(report.resultant.as_ref()));
            if let Some(dynamics) = &report.dynamics {
                println!("Body");
                println!("----");
                println!("{}", renderer.dynamics(dynamics));
            }
        }
    }

    Ok(())
}
