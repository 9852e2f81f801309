// Copyright (c) 2024 SURF. All rights reserved.

mod config;
mod consts;
mod content;
mod events;
mod logging;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::ui::MIN_TICK_RATE_MS;
use crate::session::messages::SessionMessage;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Animated SURF agency showcase for the terminal
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the showcase: splash loader, then the landing page
    Start {
        /// How long the splash screen holds, in milliseconds
        #[arg(long, value_name = "MS")]
        splash_ms: Option<u64>,

        /// Disable background colors
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_background: bool,

        /// Frame period of the UI loop, in milliseconds
        #[arg(long, value_name = "MS")]
        tick_ms: Option<u64>,
    },
    /// Print the loader timeline without a terminal UI
    Timeline {
        /// How long the splash screen holds, in milliseconds
        #[arg(long, value_name = "MS")]
        splash_ms: Option<u64>,
    },
    /// Delete the saved configuration file
    ResetConfig,
}

/// Loads the saved configuration. An unreadable file falls back to defaults.
fn load_config() -> Result<Config, Box<dyn Error>> {
    let config_path = get_config_path()?;
    match Config::load_or_default(&config_path) {
        Ok(config) => Ok(config),
        Err(e) => {
            SessionMessage::warn(format!(
                "Ignoring {}: {}",
                config_path.display(),
                e
            ))
            .print();
            Ok(Config::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            splash_ms,
            no_background,
            tick_ms,
        } => {
            let mut config = load_config()?;
            if let Some(ms) = splash_ms {
                config.splash_duration_ms = ms;
            }
            if no_background {
                config.with_background_color = false;
            }
            if let Some(ms) = tick_ms {
                config.tick_rate_ms = ms;
            }
            config.tick_rate_ms = config.tick_rate_ms.max(MIN_TICK_RATE_MS);

            let session = setup_session(config)?;
            run_tui_mode(session).await
        }
        Command::Timeline { splash_ms } => {
            let mut config = load_config()?;
            if let Some(ms) = splash_ms {
                config.splash_duration_ms = ms;
            }
            config.tick_rate_ms = config.tick_rate_ms.max(MIN_TICK_RATE_MS);

            let session = setup_session(config)?;
            run_headless_mode(session).await
        }
        Command::ResetConfig => {
            let config_path = get_config_path()?;
            println!("Removing configuration file {}...", config_path.display());
            Config::clear(&config_path)?;
            SessionMessage::success("Configuration reset to defaults").print();
            Ok(())
        }
    }
}
