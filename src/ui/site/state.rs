//! Site state management
//!
//! Everything shown after the loading gate opens: hero, services gallery,
//! scroll position and the event log feeding the status bar.

use super::layout::PageLayout;
use crate::consts::cli_consts::ui::MAX_ACTIVITY_LOGS;
use crate::content::SERVICES;
use crate::events::Event;
use crate::ui::app::UIConfig;
use crate::ui::gallery::ServiceGallery;
use crate::ui::hero::HeroState;
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::time::Instant;

/// Rows at the bottom of the terminal kept for the status bar.
pub const STATUS_ROWS: u16 = 1;

#[derive(Debug)]
pub struct SiteState {
    pub hero: HeroState,

    pub gallery: ServiceGallery,

    /// First page row shown in the viewport.
    pub scroll: u16,

    /// Terminal area of the last update.
    pub area: Rect,

    pub layout: PageLayout,

    /// Last pointer position in terminal coordinates.
    pub pointer: Option<(u16, u16)>,

    /// Recent displayable log events, newest last.
    pub events: VecDeque<Event>,

    pub with_background_color: bool,

    pub tick: u64,
}

impl SiteState {
    pub fn new(mounted_at: Instant, ui_config: &UIConfig) -> Self {
        Self {
            hero: HeroState::new(mounted_at),
            gallery: ServiceGallery::new(&SERVICES),
            scroll: 0,
            area: Rect::default(),
            layout: PageLayout::default(),
            pointer: None,
            events: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
        }
    }

    /// Rows of the terminal showing the page.
    pub fn viewport_height(&self) -> u16 {
        self.area.height.saturating_sub(STATUS_ROWS)
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.height.saturating_sub(self.viewport_height())
    }

    /// Page coordinates of a terminal position inside the viewport.
    pub fn to_page(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        (row < self.viewport_height()).then(|| (column, row.saturating_add(self.scroll)))
    }

    pub fn add_event(&mut self, event: Event) {
        if !event.should_display() {
            return;
        }
        self.events.push_back(event);
        if self.events.len() > MAX_ACTIVITY_LOGS {
            self.events.pop_front();
        }
    }

    pub fn latest_event(&self) -> Option<&Event> {
        self.events.back()
    }
}
