//! Main application state and UI loop
//!
//! Contains the App struct: the loading gate, the splash loader while the gate
//! is closed and the site once it opens.

use crate::consts::cli_consts::ui::MAX_ACTIVITY_LOGS;
use crate::events::Event as LogEvent;
use crate::ui::gate::LoadingGate;
use crate::ui::hero::{TerminalVideo, autoplay};
use crate::ui::loader::StageSequencer;
use crate::ui::site::{SiteState, render_site};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use log::info;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Frame period of the render loop.
    pub tick_rate: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, tick_rate: Duration) -> Self {
        Self {
            with_background_color,
            tick_rate,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Staged loader shown while the gate is closed.
    Splash(Box<StageSequencer>),
    /// The landing page: hero and services.
    Site(Box<SiteState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Decides when the splash gives way to the site.
    gate: LoadingGate,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives log events from the logger.
    event_receiver: mpsc::Receiver<LogEvent>,

    /// Events received before the site was mounted.
    pending_events: VecDeque<LogEvent>,

    ui_config: UIConfig,

    /// Hero background loop, started when the site mounts.
    video: TerminalVideo,

    /// Whether the background loop should start muted.
    muted: bool,
}

impl App {
    /// Creates a new instance of the application, mounted at `now`.
    pub fn new(
        now: Instant,
        splash_duration: Duration,
        event_receiver: mpsc::Receiver<LogEvent>,
        ui_config: UIConfig,
        video: TerminalVideo,
        muted: bool,
    ) -> Self {
        Self {
            gate: LoadingGate::new(now, splash_duration),
            current_screen: Screen::Splash(Box::new(StageSequencer::new(now))),
            event_receiver,
            pending_events: VecDeque::new(),
            ui_config,
            video,
            muted,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.current_screen
    }

    pub fn tick_rate(&self) -> Duration {
        self.ui_config.tick_rate
    }

    /// Queues all incoming log events for the status bar.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match &mut self.current_screen {
                Screen::Site(state) => state.add_event(event),
                Screen::Splash(_) => {
                    self.pending_events.push_back(event);
                    if self.pending_events.len() > MAX_ACTIVITY_LOGS {
                        self.pending_events.pop_front();
                    }
                }
            }
        }
    }

    /// Advances one frame. Opens the gate and mounts the site when due.
    pub async fn update(&mut self, now: Instant, area: Rect) {
        self.drain_events();

        if self.gate.poll(now) {
            self.mount_site(now).await;
        }

        match &mut self.current_screen {
            Screen::Splash(loader) => {
                loader.update(now);
                loader.frame();
            }
            Screen::Site(state) => state.update(now, area),
        }
    }

    /// Replaces the loader with the site. Dropping the loader stops its waves.
    async fn mount_site(&mut self, now: Instant) {
        let mut state = SiteState::new(now, &self.ui_config);
        for event in self.pending_events.drain(..) {
            state.add_event(event);
        }
        self.current_screen = Screen::Site(Box::new(state));

        let playback = autoplay(&mut self.video, self.muted).await;
        if let Screen::Site(state) = &mut self.current_screen {
            state.hero.set_playback(playback);
        }
    }

    /// Input is ignored until the site is mounted.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if let Screen::Site(state) = &mut self.current_screen {
            state.handle_key(key, now);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if let Screen::Site(state) = &mut self.current_screen {
            state.handle_mouse(mouse, now);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        let now = Instant::now();
        let size = terminal.size()?;
        app.update(now, Rect::new(0, 0, size.width, size.height))
            .await;
        terminal.draw(|f| render(f, &app, now))?;

        // Poll for input until the next frame is due
        if event::poll(app.tick_rate())? {
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }

                    // Handle exit events
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                        info!("Quit requested");
                        return Ok(());
                    }
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App, now: Instant) {
    match &app.current_screen {
        Screen::Splash(loader) => {
            render_splash(f, loader, now, app.ui_config.with_background_color)
        }
        Screen::Site(state) => render_site(f, state, now),
    }
}
