//! One-shot visibility triggers.
//!
//! A trigger starts `Armed`, moves to `Fired` the first time its element is
//! visible past the threshold and then ignores every later observation.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Armed,
    Fired { at: Instant },
}

#[derive(Debug, Clone, Copy)]
pub struct VisibilityTrigger {
    threshold: f64,
    state: TriggerState,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: TriggerState::Armed,
        }
    }

    pub fn fired_at(&self) -> Option<Instant> {
        match self.state {
            TriggerState::Armed => None,
            TriggerState::Fired { at } => Some(at),
        }
    }

    pub fn is_fired(&self) -> bool {
        matches!(self.state, TriggerState::Fired { .. })
    }

    /// Feeds the current visible ratio. Returns true only on the observation
    /// that fires the trigger.
    pub fn observe(&mut self, visible_ratio: f64, now: Instant) -> bool {
        if self.is_fired() {
            return false;
        }
        if visible_ratio > 0.0 && visible_ratio >= self.threshold {
            self.state = TriggerState::Fired { at: now };
            return true;
        }
        false
    }
}

/// Fraction of an element spanning `height` rows from page row `top` that lies
/// inside the viewport starting at `viewport_top`.
pub fn visible_ratio(top: u16, height: u16, viewport_top: u16, viewport_height: u16) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let start = top.max(viewport_top) as u32;
    let end = (top as u32 + height as u32).min(viewport_top as u32 + viewport_height as u32);
    if end <= start {
        return 0.0;
    }
    (end - start) as f64 / height as f64
}
