//! Site main renderer
//!
//! Draws the whole page into an off-screen buffer, then copies the scrolled
//! window into the frame and pins the status bar below it.

use super::components::{footer, hero, services};
use super::state::{STATUS_ROWS, SiteState};
use super::utils::blit;
use crate::ui::palette::BACKGROUND;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::widgets::{Block, Widget};
use std::time::Instant;

pub fn render_site(f: &mut Frame, state: &SiteState, now: Instant) {
    let area = f.area();
    let page_area = Rect::new(0, 0, state.layout.width, state.layout.height);
    let mut page = Buffer::empty(page_area);
    if state.with_background_color {
        Block::default()
            .style(Style::default().bg(BACKGROUND))
            .render(page_area, &mut page);
    }

    hero::render_hero(&mut page, state, now);
    services::render_services(&mut page, state, now);
    footer::render_footer(&mut page, state);

    let viewport = Rect::new(
        area.x,
        area.y,
        area.width.min(page_area.width),
        state.viewport_height(),
    );
    blit(&page, state.scroll, f.buffer_mut(), viewport);

    let status = Rect::new(
        area.x,
        area.bottom().saturating_sub(STATUS_ROWS),
        area.width,
        STATUS_ROWS,
    );
    footer::render_status_bar(f, status, state);
}
