mod command;
mod helper;
mod render;
mod repl;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use medicare_application::AppBootstrap;
use medicare_core::config::AppConfig;
use medicare_infrastructure::ConfigService;

use crate::command::Command;
use crate::helper::CliHelper;
use crate::repl::Outcome;

#[derive(Parser)]
#[command(name = "medicare")]
#[command(about = "MediCare Pro - healthcare administration shell", long_about = None)]
struct Cli {
    /// Path to a config.toml (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pin "today" to a date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Skip the simulated network delays
    #[arg(long)]
    no_delay: bool,
}

impl Cli {
    fn load_config(&self) -> Result<AppConfig> {
        let service = match &self.config {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new().context("Failed to locate the config directory")?,
        };
        let mut config = service
            .get_config()
            .with_context(|| format!("Failed to load {}", service.path().display()))?;

        if let Some(today) = self.today {
            config.today = Some(today);
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.no_delay {
            config = config.without_delays();
        }
        Ok(config)
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the MediCare Pro REPL.
///
/// Loads configuration, wires the shell onto the simulated backend and reads
/// commands until `quit` or end of input.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config.log_level);
    info!(
        "[Repl] Starting (today: {:?}, delays: {}ms/{}ms)",
        config.today, config.login_delay_ms, config.submit_delay_ms
    );

    let AppBootstrap { mut shell, .. } = AppBootstrap::from_config(config)?;

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== MediCare Pro ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands or 'quit' to exit.".bright_black());
    println!();
    println!("{}", repl::redraw(&mut shell));

    loop {
        let prompt = match shell.session().role() {
            Some(role) => format!("{}> ", role),
            None => "login> ".to_string(),
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                debug!("[Repl] > {}", trimmed);

                let outcome = match Command::parse(trimmed) {
                    Ok(command) => repl::execute(&mut shell, command).await,
                    Err(err) => Err(err),
                };

                match outcome {
                    Ok(Outcome::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Ok(Outcome::Print(text)) => println!("{}", text),
                    Ok(Outcome::Redraw) => println!("{}", repl::redraw(&mut shell)),
                    Err(err) => {
                        warn!("[Repl] Command failed: {}", err);
                        for notification in shell.drain_notifications() {
                            println!("{}", render::notification(&notification));
                        }
                        eprintln!("{}", format!("Error: {}", err).red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    info!("[Repl] Session ended");
    Ok(())
}
