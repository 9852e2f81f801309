//! Services section component
//!
//! Heading, expandable service cards and the detail panel.

use super::super::layout::CardLayout;
use super::super::state::SiteState;
use super::super::utils::{faded, offset_rect, put, wrap_words};
use super::button::render_button;
use crate::consts::cli_consts::ui::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::content::services::{CTA, HEADING, SUBHEADING};
use crate::ui::gallery::ServiceCard;
use crate::ui::motion::{px_to_cols, px_to_rows};
use crate::ui::palette::{BLUE, CYAN, MUTED, SOFT, TEXT, VIOLET, gradient, mix};
use crate::ui::tilt::Light;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};
use std::time::Instant;

/// Decorative marks of the panel's parallax layers, farthest first.
const LAYER_MARKS: [&str; 3] = ["·", "◇", "◆"];

pub fn render_services(buf: &mut Buffer, state: &SiteState, now: Instant) {
    render_heading(buf, state);
    let cards = state.gallery.cards();
    for (layout, card) in state.layout.cards.iter().zip(cards) {
        render_card(buf, state, layout, card, now);
    }
    render_panel(buf, state, now);
}

fn render_heading(buf: &mut Buffer, state: &SiteState) {
    let area = state.layout.heading;
    let letters = HEADING.chars().count();
    let x = area.x as i32 + (area.width as i32 - letters as i32).max(0) / 2;
    for (i, c) in HEADING.chars().enumerate() {
        let style = Style::default()
            .fg(gradient(i, letters))
            .add_modifier(Modifier::BOLD);
        put(buf, x + i as i32, area.y as i32 + 1, &c.to_string(), style);
    }
    let sub = SUBHEADING.chars().count() as i32;
    put(
        buf,
        area.x as i32 + (area.width as i32 - sub).max(0) / 2,
        area.y as i32 + 3,
        SUBHEADING,
        faded(MUTED, 1.0),
    );
}

fn render_card(
    buf: &mut Buffer,
    state: &SiteState,
    layout: &CardLayout,
    card: &ServiceCard,
    now: Instant,
) {
    let pose = card.entrance_pose(now);
    if !card.has_entered() || pose.opacity <= 0.0 {
        return;
    }
    let entry = &state.gallery.entries()[card.index];
    let selection = state.gallery.selection();
    let expanded = selection.is_expanded(card.index);

    // Scale shrinks the card around its centre; rotation has no cell equivalent.
    let element = layout.element;
    let width = ((element.width as f64 * pose.scale).round() as u16).clamp(4, element.width.max(4));
    let scaled = Rect::new(
        element.x + (element.width.saturating_sub(width)) / 2,
        element.y,
        width,
        element.height,
    );
    let Some(rect) = offset_rect(scaled, pose.dx_px, pose.dy_px, buf.area) else {
        return;
    };

    let border = if expanded {
        VIOLET
    } else if card.tilt.is_hovered() {
        BLUE
    } else {
        MUTED
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(faded(border, pose.opacity))
        .render(rect, buf);

    if let Light::Glow {
        x,
        y,
        intensity,
        radius,
    } = card.tilt.light()
    {
        render_glow(buf, rect, (x, y), intensity, radius);
    }

    let (x, y) = (rect.x as i32 + 2, rect.y as i32 + 1);
    let title_style = faded(if expanded { TEXT } else { SOFT }, pose.opacity).add_modifier(Modifier::BOLD);
    put(buf, x, y, entry.icon.glyph(), faded(CYAN, pose.opacity));
    put(buf, x + 2, y, entry.title, title_style);
    let chevron = if expanded { "▾" } else { "▸" };
    put(buf, rect.right() as i32 - 3, y, chevron, faded(VIOLET, pose.opacity));

    let body_style = faded(MUTED, pose.opacity);
    for (row, line) in layout.lines.iter().enumerate().take(layout.shown_rows as usize) {
        put(buf, x, y + 1 + row as i32, line, body_style);
    }
    if let Some(cta) = layout.cta {
        let dx = rect.x as i32 - scaled.x as i32;
        let dy = rect.y as i32 - scaled.y as i32;
        if let Some(cta) = offset_rect(
            cta,
            dx as f64 * CELL_WIDTH_PX,
            dy as f64 * CELL_HEIGHT_PX,
            buf.area,
        ) {
            render_button(buf, cta, CTA, &card.cta, pose.opacity);
        }
    }
}

/// Radial glow around the pointer, in px relative to `rect`.
fn render_glow(buf: &mut Buffer, rect: Rect, centre: (f64, f64), intensity: f64, radius: f64) {
    if radius <= 0.0 {
        return;
    }
    for row in rect.y + 1..rect.bottom().saturating_sub(1) {
        for column in rect.x + 1..rect.right().saturating_sub(1) {
            let px = (column - rect.x) as f64 * CELL_WIDTH_PX + CELL_WIDTH_PX / 2.0;
            let py = (row - rect.y) as f64 * CELL_HEIGHT_PX + CELL_HEIGHT_PX / 2.0;
            let distance = (px - centre.0).hypot(py - centre.1);
            if distance >= radius {
                continue;
            }
            if let Some(cell) = buf.cell_mut((column, row)) {
                let strength = intensity * (1.0 - distance / radius) * 0.5;
                cell.set_bg(mix(cell.bg, VIOLET, strength));
            }
        }
    }
}

fn render_panel(buf: &mut Buffer, state: &SiteState, now: Instant) {
    let panel = state.gallery.panel();
    let (opacity, offset_px) = panel.entrance(now);
    if opacity <= 0.0 {
        return;
    }
    let Some(rect) = offset_rect(state.layout.panel, 0.0, offset_px, buf.area) else {
        return;
    };
    let entry = state.gallery.detail();
    let title = format!(" {} {} ", entry.icon.glyph(), entry.title);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(faded(VIOLET, opacity))
        .title(title)
        .title_style(faded(TEXT, opacity).add_modifier(Modifier::BOLD))
        .render(rect, buf);

    // Parallax layers drift with the pointer; deeper layers move further.
    for (depth, (&(dx, dy), mark)) in panel.scene.offsets().iter().zip(LAYER_MARKS).enumerate() {
        let style = faded(gradient(depth, LAYER_MARKS.len()), opacity * 0.6);
        for k in 0..4u16 {
            let base_x = rect.x as i32 + 3 + ((k * 7 + depth as u16 * 5) % rect.width.max(1)) as i32;
            let base_y = rect.y as i32 + 1 + ((k * 3 + depth as u16 * 2) % rect.height.max(1)) as i32;
            let x = base_x + px_to_cols(dx);
            let y = base_y + px_to_rows(dy);
            let inside_x = x > rect.x as i32 && x < rect.right() as i32 - 1;
            let inside_y = y > rect.y as i32 && y < rect.bottom() as i32 - 1;
            if inside_x && inside_y {
                put(buf, x, y, mark, style);
            }
        }
    }

    let inner_width = rect.width.saturating_sub(4);
    let mut y = rect.y as i32 + 2;
    for line in wrap_words(entry.description, inner_width) {
        put(buf, rect.x as i32 + 2, y, &line, faded(SOFT, opacity));
        y += 1;
    }
    y += 1;
    let meta = faded(MUTED, opacity);
    put(buf, rect.x as i32 + 2, y, &format!("image  {}", entry.image), meta);
    put(buf, rect.x as i32 + 2, y + 1, &format!("video  {}", entry.video), meta);
}
