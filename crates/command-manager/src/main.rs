//! Command Manager binary entry point.
//!
//! Usage: command-manager [--config <path>] [--no-demo] [--script <path>]

use clap::Parser;
use command_manager::{Config, Console, ConsoleResult};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;

/// Command Manager: decode wind tunnel control messages from the console.
#[derive(Parser, Debug)]
#[command(name = "command-manager")]
#[command(about = "Decode Command Manager messages typed on the console")]
struct Args {
    /// Path to a JSON config file.
    #[arg(long, env = "COMMAND_MANAGER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config.
    #[arg(long)]
    log_level: Option<String>,

    /// Skip the example messages.
    #[arg(long)]
    no_demo: bool,

    /// Read messages from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> ConsoleResult<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if args.no_demo {
        config.run_demo = false;
    }

    observability::init_with_config(observability::LogConfig {
        service_name: "command-manager".into(),
        default_level: config.log_level.clone(),
        log_path: config.log_path.clone(),
        ..Default::default()
    })?;

    info!(
        run_demo = config.run_demo,
        exit_keyword = %config.exit_keyword,
        script = ?args.script,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), config.exit_keyword.clone());

    if config.run_demo {
        console.run_demo()?;
    }

    match args.script {
        Some(path) => {
            let file = File::open(&path)?;
            console.run_lines(BufReader::new(file))?;
        }
        None => {
            let stdin = io::stdin();
            console.run_interactive(stdin.lock())?;
        }
    }

    let stats = console.stats();
    info!(
        received = stats.received,
        discarded = stats.discarded,
        recorded = stats.recorded,
        "Session finished"
    );

    Ok(())
}
