//! Headless mode execution
//!
//! Runs the loader timeline without a terminal UI and prints every log event
//! until the loading gate opens.

use super::{
    SessionData,
    messages::{SessionMessage, print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::gate::LoadingGate;
use crate::ui::hero::{TerminalVideo, autoplay};
use crate::ui::loader::StageSequencer;
use std::error::Error;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. Driving the loader and gate on a fixed tick
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    let config = session.config.clone();
    print_session_starting("headless", config.splash_duration_ms);

    let start = Instant::now().into_std();
    let mut gate = LoadingGate::new(start, Duration::from_millis(config.splash_duration_ms));
    let mut loader = StageSequencer::new(start);

    let mut ticker = tokio::time::interval(Duration::from_millis(config.tick_rate_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // Event loop: log events to console until the gate opens or Ctrl+C
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                println!("{}", event);
            }
            tick = ticker.tick() => {
                let now = tick.into_std();
                if gate.poll(now) {
                    break;
                }
                loader.update(now);
                loader.frame();
            }
            _ = &mut ctrl_c => {
                SessionMessage::warn("Interrupted before the gate opened").print();
                break;
            }
        }
    }
    // Unmounting the loader stops its waves.
    drop(loader);

    if gate.is_open() {
        let mut video = TerminalVideo::new(config.background_media.clone(), config.autoplay);
        let playback = autoplay(&mut video, config.background_muted).await;
        SessionMessage::info(format!("Background video: {:?}", playback)).print();
    }

    // Print whatever the last steps logged
    while let Ok(event) = session.event_receiver.try_recv() {
        println!("{}", event);
    }

    print_session_shutdown();
    print_session_exit_success();

    Ok(())
}
