//! Tilting call-to-action button
//!
//! Lift shows as a brighter, bold face; the pointer light as a highlight cell.

use super::super::utils::put;
use crate::ui::palette::{BACKGROUND, BLUE, PURPLE, TEXT, fade, mix};
use crate::ui::tilt::{Light, TiltSurface};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

pub fn render_button(buf: &mut Buffer, area: Rect, label: &str, surface: &TiltSurface, opacity: f64) {
    if area.width == 0 || opacity <= 0.0 {
        return;
    }
    let lifted = surface.transform().translate_z > 0.0;
    let face = if lifted { mix(PURPLE, BLUE, 0.4) } else { PURPLE };
    let mut style = Style::default()
        .bg(fade(face, opacity, BACKGROUND))
        .fg(fade(TEXT, opacity, BACKGROUND));
    if lifted {
        style = style.add_modifier(Modifier::BOLD);
    }

    let text = format!(" {} → ", label);
    let padded = format!("{:^width$}", text, width = area.width as usize);
    put(buf, area.x as i32, area.y as i32, &padded, style);

    if let Light::Position { x_percent, .. } = surface.light() {
        let column = area.x as f64 + (x_percent / 100.0 * area.width as f64).floor();
        let column = (column as u16).min(area.right().saturating_sub(1));
        if let Some(cell) = buf.cell_mut((column, area.y)) {
            cell.set_bg(mix(face, TEXT, 0.35 * opacity));
        }
    }
}
