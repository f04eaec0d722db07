//! # Tip50 Command Line
//!
//! Terminal front-end for the `tip-core` engine.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        tip50 (this crate)                               │
//! │                                                                         │
//! │  main.rs ─────► tip_cli::run()                                          │
//! │                                                                         │
//! │  lib.rs ──────► logging, config, dispatch, exit codes                   │
//! │                                                                         │
//! │  cli.rs ──────► clap definitions, BillArgs → BillState                  │
//! │                                                                         │
//! │  commands.rs ─► compute, share, split, presets, config                  │
//! │                                                                         │
//! │  session.rs ──► interactive editing, recompute on every change          │
//! │                                                                         │
//! │  config.rs ───► AppConfig (TOML file + TIP50_* env)                     │
//! │                                                                         │
//! │  error.rs ────► CliError {code, message}                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                                  │
//!                                  ▼
//!                 tip-core: engine, validation, money, share
//! ```
//!
//! ## Output Streams
//! Results go to stdout. Logs and errors go to stderr so `--json` output can
//! be piped straight into another tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::AppConfig;
use error::CliResult;
use session::{run_session, Session};

/// Runs the `tip50` binary and returns its exit code.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG` or `warn`)
/// 2. Parse the command line
/// 3. Load configuration
/// 4. Run the command and print its output
pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = ?err.code, "{}", err.message);
            if cli.json {
                match serde_json::to_string(&err) {
                    Ok(body) => eprintln!("{}", body),
                    Err(_) => eprintln!("error: {}", err.message),
                }
            } else {
                eprintln!("error: {}", err.message);
            }
            ExitCode::from(err.exit_code())
        }
    }
}

/// Loads config and dispatches to the chosen subcommand.
pub fn execute(cli: &Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let output = match &cli.command {
        Command::Compute(args) => commands::compute(args, &config, cli.json)?,
        Command::Share(args) => commands::share(args, &config, cli.json)?,
        Command::Split { selection, other } => commands::split(selection, other, cli.json)?,
        Command::Presets => commands::presets(cli.json)?,
        Command::Config => commands::show_config(&config, cli.json)?,
        Command::Session => {
            let mut session = Session::new(config);
            return run_session(&mut session, io::stdin().lock(), io::stdout().lock());
        }
    };

    println!("{}", output);
    Ok(())
}

/// Logs to stderr. Quiet by default; `RUST_LOG=tip_cli=debug` for detail.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
