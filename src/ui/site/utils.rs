//! Site utility functions
//!
//! Text wrapping, buffer copying and small geometry helpers shared by the
//! site components.

use crate::ui::motion::{px_to_cols, px_to_rows};
use crate::ui::palette::{BACKGROUND, fade};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Copies the page rows starting at `top` into `area` of the frame buffer.
pub fn blit(page: &Buffer, top: u16, target: &mut Buffer, area: Rect) {
    for row in 0..area.height {
        for column in 0..area.width {
            let Some(source) = page.cell((column, top.saturating_add(row))) else {
                continue;
            };
            if let Some(cell) = target.cell_mut((area.x + column, area.y + row)) {
                *cell = source.clone();
            }
        }
    }
}

/// Moves `rect` by a pixel offset, then clips it to `bounds`. `None` when
/// nothing is left on screen.
pub fn offset_rect(rect: Rect, dx_px: f64, dy_px: f64, bounds: Rect) -> Option<Rect> {
    let x = rect.x as i32 + px_to_cols(dx_px);
    let y = rect.y as i32 + px_to_rows(dy_px);
    let left = x.max(bounds.x as i32);
    let top = y.max(bounds.y as i32);
    let right = (x + rect.width as i32).min(bounds.right() as i32);
    let bottom = (y + rect.height as i32).min(bounds.bottom() as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Writes `text` at `(x, y)`, clipped to the buffer. Positions outside the
/// buffer are ignored.
pub fn put(buf: &mut Buffer, x: i32, y: i32, text: &str, style: Style) {
    let area = buf.area;
    if y < area.y as i32 || y >= area.bottom() as i32 || x >= area.right() as i32 {
        return;
    }
    // Drop the part left of the buffer.
    let skip = (area.x as i32 - x).max(0) as usize;
    let x = x.max(area.x as i32) as u16;
    let visible: String = text.chars().skip(skip).collect();
    let width = (area.right() - x) as usize;
    buf.set_stringn(x, y as u16, visible, width, style);
}

/// Foreground style for `color` at `opacity` over the page background.
pub fn faded(color: Color, opacity: f64) -> Style {
    Style::default().fg(fade(color, opacity, BACKGROUND))
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
