//! Brand colours and colour blending.

use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0, 0, 0);
pub const NAVY: Color = Color::Rgb(11, 25, 47);
pub const BLUE: Color = Color::Rgb(96, 165, 250);
pub const VIOLET: Color = Color::Rgb(167, 139, 250);
pub const PURPLE: Color = Color::Rgb(147, 51, 234);
pub const CYAN: Color = Color::Rgb(44, 229, 255);
pub const PARTICLE: Color = Color::Rgb(180, 155, 255);
pub const TEXT: Color = Color::Rgb(255, 255, 255);
pub const MUTED: Color = Color::Rgb(156, 163, 175);
pub const SOFT: Color = Color::Rgb(209, 213, 219);

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::White => (255, 255, 255),
        Color::Gray => (128, 128, 128),
        Color::DarkGray => (64, 64, 64),
        Color::Cyan => (0, 205, 205),
        _ => (255, 255, 255),
    }
}

/// Linear blend from `from` to `to`.
pub fn mix(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (r1, g1, b1) = rgb(from);
    let (r2, g2, b2) = rgb(to);
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
}

/// `color` drawn at `opacity` over `background`.
pub fn fade(color: Color, opacity: f64, background: Color) -> Color {
    mix(background, color, opacity)
}

/// Colour `i` of `n` along the blue-to-purple brand gradient.
pub fn gradient(i: usize, n: usize) -> Color {
    if n <= 1 {
        return BLUE;
    }
    mix(BLUE, PURPLE, i as f64 / (n - 1) as f64)
}
