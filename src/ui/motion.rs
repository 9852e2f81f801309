//! Easing curves and tween helpers shared by the animated components.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use crate::consts::cli_consts::ui::{CELL_HEIGHT_PX, CELL_WIDTH_PX};

pub fn linear(t: f64) -> f64 {
    t
}

pub fn ease_in_out(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn expo_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Overshooting ease-out, used for springy entrances.
pub fn back_out(t: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C3: f64 = C1 + 1.0;
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Time since `start`, zero if `now` is earlier.
pub fn elapsed(start: Instant, now: Instant) -> Duration {
    now.saturating_duration_since(start)
}

/// Linear progress in `[0, 1]` of a tween that starts `delay` after `start`
/// and lasts `duration`.
pub fn progress(start: Instant, now: Instant, delay: Duration, duration: Duration) -> f64 {
    let elapsed = elapsed(start, now);
    if elapsed < delay {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    ((elapsed - delay).as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Converts a vertical pixel offset into whole terminal rows.
pub fn px_to_rows(px: f64) -> i32 {
    (px / CELL_HEIGHT_PX).round() as i32
}

/// Converts a horizontal pixel offset into whole terminal columns.
pub fn px_to_cols(px: f64) -> i32 {
    (px / CELL_WIDTH_PX).round() as i32
}
