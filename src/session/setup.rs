//! Session setup and initialization

use crate::config::Config;
use crate::consts::cli_consts::ui::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::logging;
use std::error::Error;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Receives every log record as an event
    pub event_receiver: mpsc::Receiver<Event>,
    /// Resolved configuration, command-line overrides applied
    pub config: Config,
}

/// Sets up a session
///
/// This function handles the setup shared by TUI and headless modes:
/// 1. Creates the bounded event channel
/// 2. Installs the event logger as the global `log` backend
///
/// # Arguments
/// * `config` - Resolved configuration
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - A logger was already installed
pub fn setup_session(config: Config) -> Result<SessionData, Box<dyn Error>> {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    logging::init(event_sender)?;

    Ok(SessionData {
        event_receiver,
        config,
    })
}
