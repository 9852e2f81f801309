//! Hero section: particle backdrop, background video, staged content and the
//! scroll-driven wordmark.

pub mod media;
pub mod particles;

pub use media::{Playback, TerminalVideo, autoplay};
pub use particles::ParticleField;

use crate::consts::cli_consts::hero::*;
use crate::content::hero::{HEADLINE, SUBHEADING};
use crate::ui::motion::{back_out, ease_in_out, ease_out, elapsed, expo_out, lerp, progress};
use crate::ui::reveal::{Direction, RevealText, SplitBy};
use crate::ui::tilt::{TiltConfig, TiltSurface};
use log::info;
use std::time::{Duration, Instant};

/// Children of the hero content block, in entrance order: badge, headline,
/// subheading, description, call to action.
pub const CONTENT_CHILDREN: usize = 5;

/// Opacity and scale of the background layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordmarkPose {
    pub opacity: f64,
    pub offset_px: f64,
    pub scale: f64,
}

#[derive(Debug)]
pub struct HeroState {
    mounted_at: Instant,
    scroll_progress: f64,
    wordmark_at: Option<Instant>,
    playback: Option<Playback>,
    pub particles: ParticleField,
    pub headline: RevealText,
    pub subheading: RevealText,
    pub cta: TiltSurface,
}

impl HeroState {
    pub fn new(mounted_at: Instant) -> Self {
        let token_delay = Duration::from_millis(REVEAL_TOKEN_DELAY_MS);
        let mut particles = ParticleField::with_default_count(PARTICLE_SEED);
        particles.start();
        Self {
            mounted_at,
            scroll_progress: 0.0,
            wordmark_at: None,
            playback: None,
            particles,
            headline: RevealText::new(HEADLINE, SplitBy::Words)
                .direction(Direction::Top)
                .token_delay(token_delay),
            subheading: RevealText::new(SUBHEADING, SplitBy::Words)
                .direction(Direction::Bottom)
                .token_delay(token_delay),
            cta: TiltSurface::new(TiltConfig::button()),
        }
    }

    /// Updates scroll progress through the hero. Crossing 20% plays the
    /// wordmark reveal the first time only.
    pub fn set_scroll(&mut self, scroll_rows: u16, hero_rows: u16, now: Instant) {
        self.scroll_progress = if hero_rows == 0 {
            1.0
        } else {
            (scroll_rows as f64 / hero_rows as f64).clamp(0.0, 1.0)
        };
        // The cloud is fully transparent once the hero is scrolled past.
        if self.scroll_progress >= 1.0 {
            self.particles.stop();
        } else {
            self.particles.start();
        }
        if self.scroll_progress > WORDMARK_TRIGGER && self.wordmark_at.is_none() {
            info!("Wordmark revealed");
            self.wordmark_at = Some(now);
        }
    }

    pub fn playback(&self) -> Option<Playback> {
        self.playback
    }

    pub fn set_playback(&mut self, playback: Playback) {
        self.playback = Some(playback);
    }

    /// Advances per-frame effects: particles and both reveals.
    pub fn tick(&mut self, scroll_px: f64, now: Instant) {
        self.particles.frame(scroll_px);
        self.headline.update(now);
        self.subheading.update(now);
    }

    pub fn backdrop(&self, now: Instant) -> Backdrop {
        let fade = ease_out(progress(
            self.mounted_at,
            now,
            Duration::ZERO,
            Duration::from_millis(BACKDROP_FADE_MS),
        ));
        let p = self.scroll_progress;
        Backdrop {
            opacity: fade * (1.0 - p * 0.5),
            scale: lerp(BACKDROP_START_SCALE, 1.0, fade) * (1.0 + p * 0.2),
        }
    }

    pub fn particle_opacity(&self) -> f64 {
        0.5 - self.scroll_progress * 0.5
    }

    /// Opacity and downward offset (px) of content child `index`.
    pub fn content_pose(&self, index: usize, now: Instant) -> (f64, f64) {
        let delay = CONTENT_DELAY_MS + CONTENT_STAGGER_MS * index as u64;
        let t = expo_out(progress(
            self.mounted_at,
            now,
            Duration::from_millis(delay),
            Duration::from_millis(CONTENT_ENTER_MS),
        ));
        (t, CONTENT_OFFSET_PX * (1.0 - t))
    }

    /// `None` until the wordmark has been triggered.
    pub fn wordmark_pose(&self, now: Instant) -> Option<WordmarkPose> {
        let at = self.wordmark_at?;
        let t = progress(
            at,
            now,
            Duration::ZERO,
            Duration::from_millis(WORDMARK_REVEAL_MS),
        );
        let eased = back_out(t);
        Some(WordmarkPose {
            opacity: t,
            offset_px: lerp(WORDMARK_OFFSET_PX, 0.0, eased),
            scale: lerp(0.9, 1.0, eased),
        })
    }

    /// Downward offset (px) of the scroll indicator, bobbing back and forth.
    pub fn indicator_offset(&self, now: Instant) -> f64 {
        let since = elapsed(self.mounted_at, now);
        let delay = Duration::from_millis(INDICATOR_DELAY_MS);
        if since < delay {
            return 0.0;
        }
        let period = INDICATOR_PERIOD_MS as u128;
        let phase = (since - delay).as_millis() % (period * 2);
        let t = if phase <= period {
            phase as f64 / period as f64
        } else {
            (period * 2 - phase) as f64 / period as f64
        };
        INDICATOR_TRAVEL_PX * ease_in_out(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn wordmark_triggers_once_past_twenty_percent() {
        let now = Instant::now();
        let mut hero = HeroState::new(now);

        hero.set_scroll(4, 20, now);
        assert!(hero.wordmark_pose(now).is_none());

        hero.set_scroll(5, 20, now + ms(100));
        let pose = hero.wordmark_pose(now + ms(100)).unwrap();
        assert_eq!(pose.opacity, 0.0);
        assert!((pose.offset_px - WORDMARK_OFFSET_PX).abs() < 1e-9);

        hero.set_scroll(0, 20, now + ms(500));
        hero.set_scroll(10, 20, now + ms(900));
        let settled = hero.wordmark_pose(now + ms(100 + WORDMARK_REVEAL_MS)).unwrap();
        assert_eq!(settled.opacity, 1.0);
        assert_eq!(settled.scale, 1.0);
    }

    #[test]
    fn scroll_dims_backdrop_and_particles() {
        let now = Instant::now();
        let mut hero = HeroState::new(now);
        let later = now + ms(BACKDROP_FADE_MS);
        assert_eq!(hero.backdrop(later), Backdrop { opacity: 1.0, scale: 1.0 });
        assert_eq!(hero.particle_opacity(), 0.5);

        hero.set_scroll(30, 20, later);
        assert_eq!(hero.scroll_progress, 1.0);
        assert_eq!(hero.backdrop(later), Backdrop { opacity: 0.5, scale: 1.2 });
        assert_eq!(hero.particle_opacity(), 0.0);
    }

    #[test]
    fn backdrop_fades_in_from_enlarged() {
        let now = Instant::now();
        let hero = HeroState::new(now);
        assert_eq!(
            hero.backdrop(now),
            Backdrop {
                opacity: 0.0,
                scale: BACKDROP_START_SCALE
            }
        );
    }

    #[test]
    fn content_children_stagger_in() {
        let now = Instant::now();
        let hero = HeroState::new(now);

        assert_eq!(hero.content_pose(0, now + ms(400)), (0.0, CONTENT_OFFSET_PX));
        let at = now + ms(600);
        assert!(hero.content_pose(0, at).0 > 0.0);
        assert_eq!(hero.content_pose(1, at).0, 0.0);
        assert_eq!(hero.content_pose(4, now + ms(500 + 600 + 1000)), (1.0, 0.0));
    }

    #[test]
    fn indicator_waits_then_bobs() {
        let now = Instant::now();
        let hero = HeroState::new(now);
        assert_eq!(hero.indicator_offset(now + ms(1999)), 0.0);
        assert!((hero.indicator_offset(now + ms(2000 + 1800)) - INDICATOR_TRAVEL_PX).abs() < 1e-9);
        assert!(hero.indicator_offset(now + ms(2000 + 3600)).abs() < 1e-9);
    }

    #[test]
    fn reveals_come_from_opposite_sides() {
        let now = Instant::now();
        let hero = HeroState::new(now);
        assert_eq!(hero.headline.tokens().len(), 4);
        assert!(hero.headline.initial_style().offset_px < 0.0);
        assert!(hero.subheading.initial_style().offset_px > 0.0);
        assert!(hero.particles.is_running());
    }

    #[test]
    fn particles_pause_while_hero_is_scrolled_past() {
        let now = Instant::now();
        let mut hero = HeroState::new(now);

        hero.set_scroll(20, 20, now);
        assert!(!hero.particles.is_running());
        assert!(!hero.particles.frame(0.0));

        hero.set_scroll(10, 20, now);
        assert!(hero.particles.is_running());
        assert!(hero.particles.frame(0.0));
    }
}
