//! Splash screen rendering module.
//!
//! Draws the loader in its current stage: the cycling "We are ..." word, the
//! bouncing acronym over the waves, then the tagline with its progress bar.

use crate::consts::cli_consts::wave::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::content::loader::{ACRONYM, PREFIX, SENTENCE};
use crate::ui::glyphs::{GLYPH_ROWS, GLYPH_WIDTH, block_letter};
use crate::ui::loader::{GlyphPose, LoaderStage, StageSequencer};
use crate::ui::motion::{px_to_cols, px_to_rows};
use crate::ui::palette::{BACKGROUND, BLUE, CYAN, MUTED, PURPLE, TEXT, VIOLET, gradient};
use crate::ui::site::utils::{faded, put};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Gauge};
use std::time::Instant;

/// Rows of the wave canvas under the acronym.
const WAVE_ROWS: u16 = 8;

pub fn render_splash(f: &mut Frame, loader: &StageSequencer, now: Instant, with_background: bool) {
    if with_background {
        f.render_widget(
            Block::default().style(Style::default().bg(BACKGROUND)),
            f.area(),
        );
    }
    match loader.stage() {
        LoaderStage::Spelling => render_spelling(f, loader, now),
        LoaderStage::Acronym => render_acronym(f, loader, now),
        LoaderStage::Tagline => render_tagline(f, loader, now),
    }
}

/// Vertically centres a block of `height` rows.
fn centered_rows(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(area.height.saturating_sub(height + 1) / 2),
        ])
        .split(area);
    chunks[1]
}

fn render_spelling(f: &mut Frame, loader: &StageSequencer, now: Instant) {
    let area = centered_rows(f.area(), 1);
    let word = loader.word();
    let pose = loader.word_pose(now);
    let width = (PREFIX.chars().count() + word.chars().count()) as i32;
    let x = area.x as i32 + (area.width as i32 - width).max(0) / 2;
    let y = area.y as i32;

    let buf = f.buffer_mut();
    put(buf, x, y, PREFIX, faded(MUTED, 1.0));
    if pose.opacity > 0.0 {
        let style = faded(VIOLET, pose.opacity).add_modifier(Modifier::BOLD);
        put(
            buf,
            x + PREFIX.chars().count() as i32,
            y + px_to_rows(pose.offset_px),
            word,
            style,
        );
    }
}

/// Draws the acronym as block letters with one pose per letter.
fn render_letters(f: &mut Frame, top: u16, poses: &[GlyphPose]) {
    let area = f.area();
    let spacing = |pose: &GlyphPose| (GLYPH_WIDTH as f64 * pose.scale).round().max(1.0) as i32;
    let total: i32 = poses.iter().map(spacing).sum();
    let mut x = area.x as i32 + (area.width as i32 - total).max(0) / 2;
    let buf = f.buffer_mut();
    for (i, (pose, &letter)) in poses.iter().zip(ACRONYM.iter()).enumerate() {
        if pose.opacity > 0.0 {
            let style = faded(gradient(i, ACRONYM.len()), pose.opacity).add_modifier(Modifier::BOLD);
            let y = top as i32 + px_to_rows(pose.offset_px);
            for (row, line) in block_letter(letter).iter().enumerate() {
                put(buf, x, y + row as i32, line, style);
            }
        }
        x += spacing(pose);
    }
}

fn render_acronym(f: &mut Frame, loader: &StageSequencer, now: Instant) {
    let block = centered_rows(f.area(), GLYPH_ROWS as u16 + 3 + WAVE_ROWS);
    let poses: Vec<GlyphPose> = (0..loader.letter_count())
        .map(|i| loader.letter_pose(i, now))
        .collect();
    render_letters(f, block.y + 1, &poses);

    let divider_cols = px_to_cols(loader.divider_width(now)).max(0) as u16;
    if divider_cols > 0 {
        let x = block.x as i32 + (block.width as i32 - divider_cols as i32).max(0) / 2;
        let line = "━".repeat(divider_cols as usize);
        put(
            f.buffer_mut(),
            x,
            (block.y + GLYPH_ROWS as u16 + 2) as i32,
            &line,
            Style::default().fg(CYAN),
        );
    }

    let Some(frame) = loader.wave().last_frame() else {
        return;
    };
    // Canvas y grows upwards, wave points grow downwards.
    let flip = |points: &[(f64, f64)]| -> Vec<(f64, f64)> {
        points
            .iter()
            .map(|&(x, y)| (x, CANVAS_HEIGHT as f64 - y))
            .collect()
    };
    let primary = flip(&frame.primary);
    let secondary = flip(&frame.secondary);
    let wave_area = Rect::new(
        block.x,
        block.bottom().saturating_sub(WAVE_ROWS),
        block.width,
        WAVE_ROWS,
    );
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH as f64])
        .y_bounds([0.0, CANVAS_HEIGHT as f64])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &secondary,
                color: PURPLE,
            });
            ctx.draw(&Points {
                coords: &primary,
                color: BLUE,
            });
        });
    f.render_widget(canvas, wave_area);
}

fn render_tagline(f: &mut Frame, loader: &StageSequencer, now: Instant) {
    let stage = loader.tagline_pose(now);
    let block = centered_rows(f.area(), GLYPH_ROWS as u16 + 6);
    let shift = px_to_rows(stage.offset_px);
    let top = (block.y as i32 + shift).max(0) as u16;

    let poses: Vec<GlyphPose> = (0..loader.letter_count())
        .map(|i| {
            let mut pose = loader.tagline_letter_pose(i, now);
            pose.opacity *= stage.opacity;
            pose
        })
        .collect();
    render_letters(f, top, &poses);

    let sentence_y = top as i32 + GLYPH_ROWS as i32 + 1;
    let width: i32 = SENTENCE.iter().map(|s| s.text.chars().count() as i32).sum();
    let mut x = block.x as i32 + (block.width as i32 - width).max(0) / 2;
    for (i, segment) in SENTENCE.iter().enumerate() {
        let opacity = loader.segment_opacity(i, now) * stage.opacity;
        if opacity > 0.0 {
            let style = if segment.highlight {
                faded(VIOLET, opacity).add_modifier(Modifier::BOLD)
            } else {
                faded(TEXT, opacity)
            };
            put(f.buffer_mut(), x, sentence_y, segment.text, style);
        }
        x += segment.text.chars().count() as i32;
    }

    let ratio = loader.progress(now).clamp(0.0, 1.0);
    let gauge_width = block.width.min(40);
    let gauge_area = Rect::new(
        block.x + (block.width - gauge_width) / 2,
        (sentence_y + 2).max(0) as u16,
        gauge_width,
        1,
    )
    .intersection(f.area());
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(VIOLET).bg(BACKGROUND))
        .ratio(ratio)
        .label("");
    f.render_widget(gauge, gauge_area);
}
