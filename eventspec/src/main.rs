//! Event filter checks and handler selection from the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eventspec::core::event_spec::EventSpec;
use eventspec::exit_codes;
use eventspec::io::config::{DEFAULT_CONFIG_PATH, load_config, write_config};
use eventspec::logging;
use eventspec::registry::default_registry;
use eventspec::select::{SelectOutcome, select_from_path};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "eventspec",
    version,
    about = "Event-name filters for named-event dispatch"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether an event passes an `on` filter.
    Applies {
        /// Filter entries; repeatable, each value may be comma-separated.
        #[arg(long = "on", value_name = "EVENTS")]
        on: Vec<String>,
        event: String,
    },
    /// Print the registered handlers that apply to an event.
    Select {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Print a JSON array instead of one name per line.
        #[arg(long)]
        json: bool,
        event: String,
    },
    /// Report registry filters whose behavior is easy to misread.
    Lint {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Write an example registry.
    Init {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Overwrite an existing registry.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Applies { on, event } => Ok(cmd_applies(&on, &event)),
        Command::Select {
            config,
            json,
            event,
        } => cmd_select(&config, json, &event),
        Command::Lint { config } => cmd_lint(&config),
        Command::Init { config, force } => cmd_init(&config, force),
    }
}

fn cmd_applies(on: &[String], event: &str) -> i32 {
    let spec = EventSpec::parse(&on.join(","));
    for warning in spec.lint() {
        warn!(filter = %spec, "{}", warning);
    }
    let applies = spec.applies(event);
    debug!(filter = %spec, event, applies, "filter evaluated");
    println!("{}", applies);
    if applies {
        exit_codes::OK
    } else {
        exit_codes::NOT_APPLICABLE
    }
}

fn cmd_select(config: &Path, json: bool, event: &str) -> Result<i32> {
    let outcome = select_from_path(config, event)?;
    let names: &[String] = match &outcome {
        SelectOutcome::Matched(names) => names.as_slice(),
        SelectOutcome::NoneApplicable => &[],
    };
    if json {
        println!(
            "{}",
            serde_json::to_string(names).context("serialize handler names")?
        );
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(match outcome {
        SelectOutcome::Matched(_) => exit_codes::OK,
        SelectOutcome::NoneApplicable => exit_codes::NOT_APPLICABLE,
    })
}

fn cmd_lint(config: &Path) -> Result<i32> {
    let cfg = load_config(config)?;
    let warnings = cfg.lint();
    for warning in &warnings {
        println!("{}", warning);
    }
    if warnings.is_empty() {
        return Ok(exit_codes::OK);
    }
    Ok(exit_codes::INVALID)
}

fn cmd_init(config: &Path, force: bool) -> Result<i32> {
    if !force && config.exists() {
        info!(path = %config.display(), "registry exists; skipping");
        return Ok(exit_codes::OK);
    }
    write_config(config, &default_registry())
        .with_context(|| format!("write {}", config.display()))?;
    info!(path = %config.display(), "registry written");
    Ok(exit_codes::OK)
}
