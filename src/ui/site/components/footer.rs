//! Site footer and status bar
//!
//! The footer closes the page; the status bar is pinned to the bottom row of
//! the terminal with key hints and the latest log event.

use super::super::state::SiteState;
use super::super::utils::{faded, format_compact_timestamp, put};
use super::hero::playback_label;
use crate::content::loader::SENTENCE;
use crate::logging::LogLevel;
use crate::ui::palette::{CYAN, MUTED, VIOLET};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

pub fn render_footer(buf: &mut Buffer, state: &SiteState) {
    let area = state.layout.footer;
    let tagline: String = SENTENCE.iter().map(|segment| segment.text).collect();
    Paragraph::new(vec![
        Line::from(Span::styled(
            "S U R F",
            Style::default().fg(VIOLET).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tagline, faded(MUTED, 1.0))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick)
            .border_style(faded(MUTED, 0.5)),
    )
    .render(area, buf);
    let year = chrono::Local::now().format("%Y").to_string();
    let copyright = format!("© {} SURF. All rights reserved.", year);
    let x = area.x as i32 + (area.width as i32 - copyright.chars().count() as i32).max(0) / 2;
    put(buf, x, area.bottom() as i32 - 1, &copyright, faded(MUTED, 0.6));
}

/// Render the status bar.
pub fn render_status_bar(f: &mut Frame, area: Rect, state: &SiteState) {
    let hints = "[Q] Quit | [↑↓/Wheel] Scroll | [Tab] Next service | [Enter] Toggle";
    let mut spans = vec![Span::styled(
        hints,
        Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(
        format!(" | {}", playback_label(state.hero.playback())),
        Style::default().fg(Color::Gray),
    ));
    if let Some(event) = state.latest_event() {
        let color = match event.log_level {
            LogLevel::Error => Color::Red,
            LogLevel::Warn => Color::Yellow,
            _ => Color::Gray,
        };
        spans.push(Span::styled(
            format!(
                " | {} {} {}",
                format_compact_timestamp(&event.timestamp),
                event.source,
                event.msg
            ),
            Style::default().fg(color),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
