//! Timed stage machine behind the splash loader.

use super::wave::{WaveFrame, WaveRenderer};
use crate::consts::cli_consts::loader::*;
use crate::content::loader::{ACRONYM, FULL_FORM, SENTENCE};
use crate::ui::motion::{ease_in_out, ease_out, elapsed, lerp, progress};
use crate::ui::timer::{Interval, Timeout};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Stages of the splash sequence. Strictly advances, never goes back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum LoaderStage {
    Spelling,
    Acronym,
    Tagline,
}

/// Pose of one animated glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPose {
    pub opacity: f64,
    /// Vertical offset in px, negative is up.
    pub offset_px: f64,
    pub scale: f64,
}

impl GlyphPose {
    const HIDDEN: GlyphPose = GlyphPose {
        opacity: 0.0,
        offset_px: 0.0,
        scale: 1.0,
    };
}

#[derive(Debug)]
pub struct StageSequencer {
    stage: LoaderStage,
    stage_started: Instant,
    word_index: usize,
    word_changed: Instant,
    /// Only present during Spelling.
    word_timer: Option<Interval>,
    /// Deadline of the next stage change. `None` in the final stage.
    stage_timer: Option<Timeout>,
    wave: WaveRenderer,
}

impl StageSequencer {
    pub fn new(mounted_at: Instant) -> Self {
        info!("Loader stage: {}", LoaderStage::Spelling);
        Self {
            stage: LoaderStage::Spelling,
            stage_started: mounted_at,
            word_index: 0,
            word_changed: mounted_at,
            word_timer: Some(Interval::new(
                mounted_at,
                Duration::from_millis(WORD_CYCLE_MS),
            )),
            stage_timer: Some(Timeout::new(
                mounted_at,
                Duration::from_millis(SPELLING_STAGE_MS),
            )),
            wave: WaveRenderer::new(),
        }
    }

    pub fn stage(&self) -> LoaderStage {
        self.stage
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn word(&self) -> &'static str {
        FULL_FORM[self.word_index]
    }

    pub fn wave(&self) -> &WaveRenderer {
        &self.wave
    }

    /// Fires every due timer up to `now`. Returns the newest stage if it changed.
    pub fn update(&mut self, now: Instant) -> Option<LoaderStage> {
        let mut changed = None;
        loop {
            // Word ticks are only counted up to the stage deadline, the interval
            // dies with the Spelling stage.
            let horizon = match &self.stage_timer {
                Some(timer) if timer.deadline() <= now => timer.deadline(),
                _ => now,
            };
            if let Some(words) = self.word_timer.as_mut() {
                let ticks = words.poll(horizon) as usize;
                if ticks > 0 {
                    self.word_index = (self.word_index + ticks) % FULL_FORM.len();
                    self.word_changed = horizon;
                }
            }

            match self.stage_timer.as_mut().and_then(|timer| timer.poll(now)) {
                Some(deadline) => {
                    self.advance(deadline);
                    changed = Some(self.stage);
                }
                None => break,
            }
        }
        changed
    }

    fn advance(&mut self, deadline: Instant) {
        match self.stage {
            LoaderStage::Spelling => {
                self.stage = LoaderStage::Acronym;
                self.word_timer = None;
                self.stage_timer = Some(Timeout::new(
                    deadline,
                    Duration::from_millis(ACRONYM_STAGE_MS),
                ));
                self.wave.start();
            }
            LoaderStage::Acronym => {
                self.stage = LoaderStage::Tagline;
                self.stage_timer = None;
                self.wave.stop();
            }
            LoaderStage::Tagline => return,
        }
        self.stage_started = deadline;
        info!("Loader stage: {}", self.stage);
    }

    /// Per-frame callback. Draws a wave frame while the Acronym stage runs.
    pub fn frame(&mut self) -> Option<&WaveFrame> {
        self.wave.frame()
    }

    fn stage_elapsed(&self, now: Instant) -> Duration {
        elapsed(self.stage_started, now)
    }

    /// Entrance of the current word: drops in from 20px above over 400ms.
    pub fn word_pose(&self, now: Instant) -> GlyphPose {
        let t = progress(
            self.word_changed,
            now,
            Duration::ZERO,
            Duration::from_millis(400),
        );
        GlyphPose {
            opacity: t,
            offset_px: lerp(-20.0, 0.0, t),
            scale: 1.0,
        }
    }

    /// Bouncing acronym letter `index` during the Acronym stage.
    pub fn letter_pose(&self, index: usize, now: Instant) -> GlyphPose {
        let delay = Duration::from_millis(LETTER_STAGGER_MS * index as u64);
        let since_stage = self.stage_elapsed(now);
        if since_stage < delay {
            return GlyphPose::HIDDEN;
        }
        let local = (since_stage - delay).as_millis() as u64;
        let opacity = (local as f64 / BOUNCE_MS as f64).min(1.0);
        let total = BOUNCE_MS * (1 + BOUNCE_REPEATS as u64);
        let offset_px = if local >= total {
            0.0
        } else {
            // Keyframes 0 -> -h -> 0, eased per half.
            let p = (local % BOUNCE_MS) as f64 / BOUNCE_MS as f64;
            let rise = if p < 0.5 {
                ease_in_out(p * 2.0)
            } else {
                1.0 - ease_in_out((p - 0.5) * 2.0)
            };
            -BOUNCE_HEIGHT_PX * rise
        };
        GlyphPose {
            opacity,
            offset_px,
            scale: 1.0,
        }
    }

    /// Width in px of the divider under the bouncing acronym.
    pub fn divider_width(&self, now: Instant) -> f64 {
        let t = progress(
            self.stage_started,
            now,
            Duration::from_millis(DIVIDER_DELAY_MS),
            Duration::from_millis(DIVIDER_GROW_MS),
        );
        DIVIDER_WIDTH_PX * t
    }

    /// Fade/slide of the whole tagline stage.
    pub fn tagline_pose(&self, now: Instant) -> GlyphPose {
        let t = ease_out(progress(
            self.stage_started,
            now,
            Duration::ZERO,
            Duration::from_millis(TAGLINE_ENTER_MS),
        ));
        GlyphPose {
            opacity: t,
            offset_px: TAGLINE_ENTER_OFFSET_PX * (1.0 - t),
            scale: 1.0,
        }
    }

    /// Acronym letter scaling in during the Tagline stage.
    pub fn tagline_letter_pose(&self, index: usize, now: Instant) -> GlyphPose {
        let t = progress(
            self.stage_started,
            now,
            Duration::from_millis(TAGLINE_LETTER_STAGGER_MS * index as u64),
            Duration::from_millis(TAGLINE_LETTER_MS),
        );
        GlyphPose {
            opacity: t,
            offset_px: 0.0,
            scale: lerp(0.8, 1.0, t),
        }
    }

    /// Opacity of tagline sentence segment `index`.
    pub fn segment_opacity(&self, index: usize, now: Instant) -> f64 {
        debug_assert!(index < SENTENCE.len());
        progress(
            self.stage_started,
            now,
            Duration::from_millis(SENTENCE_STAGGER_MS * index as u64),
            Duration::from_millis(SENTENCE_FADE_MS),
        )
    }

    /// Fill of the progress bar in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.stage != LoaderStage::Tagline {
            return 0.0;
        }
        progress(
            self.stage_started,
            now,
            Duration::from_millis(PROGRESS_DELAY_MS),
            Duration::from_millis(PROGRESS_FILL_MS),
        )
    }

    pub fn letter_count(&self) -> usize {
        ACRONYM.len()
    }
}

impl Drop for StageSequencer {
    fn drop(&mut self) {
        self.wave.stop();
        debug!(
            "Loader unmounted in stage {} after {} wave frames",
            self.stage,
            self.wave.frames_drawn()
        );
    }
}
