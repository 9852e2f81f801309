//! Hero section component
//!
//! Renders the backdrop, particle field, staged content, wordmark and scroll
//! indicator into the page buffer.

use super::super::state::SiteState;
use super::super::utils::{faded, offset_rect, put, wrap_words};
use super::button::render_button;
use crate::consts::cli_consts::ui::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::content::hero::{BADGE, CTA, DESCRIPTION, SCROLL_HINT, WORDMARK};
use crate::ui::glyphs::{GLYPH_ROWS, GLYPH_WIDTH, block_letter};
use crate::ui::hero::Playback;
use crate::ui::motion::px_to_rows;
use crate::ui::palette::{BACKGROUND, MUTED, NAVY, PARTICLE, PURPLE, SOFT, TEXT, VIOLET, fade, gradient, mix};
use crate::ui::reveal::{RevealText, SplitBy};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use std::time::Instant;

/// Blur above this renders tokens as shade blocks; above `SOFT_BLUR` as dim.
const HEAVY_BLUR: f64 = 6.0;
const SOFT_BLUR: f64 = 2.0;

pub fn render_hero(buf: &mut Buffer, state: &SiteState, now: Instant) {
    let area = state.layout.hero;
    render_backdrop(buf, area, state, now);
    render_particles(buf, area, state);

    let hero = &state.hero;
    let content = &state.layout.hero_content;
    for (index, rect) in content.iter().enumerate() {
        let (opacity, offset_px) = hero.content_pose(index, now);
        if opacity <= 0.0 {
            continue;
        }
        let Some(rect) = offset_rect(*rect, 0.0, offset_px, area) else {
            continue;
        };
        match index {
            0 => render_centered(buf, rect, &format!("✦ {} ✦", BADGE), faded(VIOLET, opacity)),
            1 => render_reveal(buf, rect, &hero.headline, now, opacity, TEXT, true),
            2 => render_reveal(buf, rect, &hero.subheading, now, opacity, SOFT, false),
            3 => {
                for (row, line) in wrap_words(DESCRIPTION, rect.width).iter().enumerate() {
                    let line_rect = Rect::new(rect.x, rect.y + row as u16, rect.width, 1);
                    render_centered(buf, line_rect, line, faded(MUTED, opacity));
                }
            }
            _ => render_button(buf, rect, CTA, &hero.cta, opacity),
        }
    }

    render_wordmark(buf, state, now);
    render_indicator(buf, state, now);
}

fn render_backdrop(buf: &mut Buffer, area: Rect, state: &SiteState, now: Instant) {
    if !state.with_background_color {
        return;
    }
    let backdrop = state.hero.backdrop(now);
    let playing = state.hero.playback().is_some_and(|p| p.is_playing());
    for row in 0..area.height {
        let base = fade(NAVY, backdrop.opacity, BACKGROUND);
        let color = if playing {
            // Slow vertical bands stand in for the looping video.
            let phase = row as f64 / area.height.max(1) as f64 * backdrop.scale * 6.0
                + state.tick as f64 * 0.03;
            mix(base, PURPLE, (phase.sin().max(0.0) * 0.25) * backdrop.opacity)
        } else {
            base
        };
        buf.set_style(
            Rect::new(area.x, area.y + row, area.width, 1),
            Style::default().bg(color),
        );
    }
}

fn render_particles(buf: &mut Buffer, area: Rect, state: &SiteState) {
    let opacity = state.hero.particle_opacity();
    if opacity <= 0.0 || !state.hero.particles.is_running() || area.width < 2 || area.height < 2 {
        return;
    }
    let aspect = (area.width as f64 * CELL_WIDTH_PX) / (area.height as f64 * CELL_HEIGHT_PX);
    let style = Style::default().fg(fade(PARTICLE, (opacity * 1.6).min(1.0), BACKGROUND));
    for (x, y) in state.hero.particles.project(aspect) {
        let column = ((x + 1.0) / 2.0 * (area.width - 1) as f64).round() as u16;
        let row = ((1.0 - y) / 2.0 * (area.height - 1) as f64).round() as u16;
        if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
            cell.set_symbol("·").set_style(style);
        }
    }
}

fn render_centered(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    let width = text.chars().count() as i32;
    let x = rect.x as i32 + (rect.width as i32 - width).max(0) / 2;
    put(buf, x, rect.y as i32, text, style);
}

/// Draws reveal tokens flowed over the rows of `rect`, each line centred.
/// Token offsets move whole rows; blur is approximated with shading.
fn render_reveal(
    buf: &mut Buffer,
    rect: Rect,
    reveal: &RevealText,
    now: Instant,
    opacity: f64,
    color: Color,
    bold: bool,
) {
    let gap = match reveal.split() {
        SplitBy::Words => 1,
        SplitBy::Chars => 0,
    };
    let mut lines: Vec<Vec<usize>> = vec![Vec::new()];
    let mut used = 0usize;
    for token in reveal.tokens() {
        let width = token.text.chars().count();
        let started = lines.last().is_some_and(|l| !l.is_empty());
        if started && used + gap + width > rect.width as usize {
            lines.push(Vec::new());
            used = 0;
        }
        if let Some(line) = lines.last_mut() {
            if !line.is_empty() {
                used += gap;
            }
            line.push(token.index);
            used += width;
        }
    }

    let tokens = reveal.tokens();
    for (row, line) in lines.iter().enumerate().take(rect.height as usize) {
        let width: usize = line.iter().map(|&i| tokens[i].text.chars().count()).sum::<usize>()
            + gap * line.len().saturating_sub(1);
        let mut x = rect.x as i32 + (rect.width as i32 - width as i32).max(0) / 2;
        for &index in line {
            let token = &tokens[index];
            let style = reveal.style(index, now);
            let alpha = style.opacity * opacity;
            let len = token.text.chars().count();
            if alpha > 0.0 {
                let text = if style.blur > HEAVY_BLUR {
                    "░".repeat(len)
                } else {
                    token.text.clone()
                };
                let mut paint = faded(color, alpha);
                if style.blur > SOFT_BLUR {
                    paint = paint.add_modifier(Modifier::DIM);
                }
                if bold {
                    paint = paint.add_modifier(Modifier::BOLD);
                }
                let y = rect.y as i32 + row as i32 + px_to_rows(style.offset_px);
                put(buf, x, y, &text, paint);
            }
            x += (len + gap) as i32;
        }
    }
}

fn render_wordmark(buf: &mut Buffer, state: &SiteState, now: Instant) {
    let Some(pose) = state.hero.wordmark_pose(now) else {
        return;
    };
    if pose.opacity <= 0.0 {
        return;
    }
    let hero = state.layout.hero;
    let letters: Vec<char> = WORDMARK.chars().collect();
    // Scale narrows the letter spacing while the mark grows in.
    let spacing = (GLYPH_WIDTH as f64 * pose.scale).round().max(1.0) as i32;
    let total = spacing * letters.len() as i32;
    let left = hero.x as i32 + (hero.width as i32 - total) / 2;
    let top = state.layout.indicator.y as i32 - GLYPH_ROWS as i32 - 1 + px_to_rows(pose.offset_px);

    for (i, &letter) in letters.iter().enumerate() {
        let style = faded(gradient(i, letters.len()), pose.opacity).add_modifier(Modifier::BOLD);
        for (row, line) in block_letter(letter).iter().enumerate() {
            put(buf, left + spacing * i as i32, top + row as i32, line, style);
        }
    }
}

fn render_indicator(buf: &mut Buffer, state: &SiteState, now: Instant) {
    let rect = state.layout.indicator;
    let offset = px_to_rows(state.hero.indicator_offset(now));
    let style = faded(MUTED, 0.8);
    render_centered(buf, Rect::new(rect.x, rect.y, rect.width, 1), SCROLL_HINT, style);
    put(
        buf,
        rect.x as i32 + rect.width as i32 / 2,
        rect.y as i32 + 1 + offset,
        "↓",
        style.add_modifier(Modifier::BOLD),
    );
}

/// Playback label for the status bar.
pub fn playback_label(playback: Option<Playback>) -> &'static str {
    match playback {
        None => "video: loading",
        Some(Playback::Playing { muted: true }) => "video: muted",
        Some(Playback::Playing { muted: false }) => "video: playing",
        Some(Playback::Failed) => "video: static",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app::UIConfig;
    use std::time::Duration;

    fn page(state: &SiteState) -> Buffer {
        Buffer::empty(Rect::new(0, 0, state.layout.width, state.layout.height))
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn headline_appears_after_the_reveal() {
        let now = Instant::now();
        let mut state = SiteState::new(now, &UIConfig::new(true, Duration::from_millis(33)));
        state.update(now, Rect::new(0, 0, 120, 41));
        let later = now + Duration::from_secs(5);
        state.update(later, Rect::new(0, 0, 120, 41));

        let mut buf = page(&state);
        render_hero(&mut buf, &state, later);
        let headline = row_text(&buf, state.layout.headline().y);
        for word in ["Crafting", "Responsive", "digital", "experiences"] {
            assert!(headline.contains(word), "missing {word} in {headline:?}");
        }
        assert!(row_text(&buf, state.layout.hero_cta().y).contains("Explore Solutions"));
    }

    #[test]
    fn nothing_but_backdrop_before_content_delay() {
        let now = Instant::now();
        let mut state = SiteState::new(now, &UIConfig::new(false, Duration::from_millis(33)));
        state.update(now, Rect::new(0, 0, 120, 41));

        let mut buf = page(&state);
        render_hero(&mut buf, &state, now);
        let headline = state.layout.headline();
        assert!(!row_text(&buf, headline.y).contains("Crafting"));
    }

    #[test]
    fn playback_labels() {
        assert_eq!(playback_label(None), "video: loading");
        assert_eq!(playback_label(Some(Playback::Failed)), "video: static");
    }
}
