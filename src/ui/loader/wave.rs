//! Two phase-shifted sine waves painted under the acronym.

use crate::consts::cli_consts::wave::{
    CANVAS_HEIGHT, CANVAS_WIDTH, FREQUENCY, PRIMARY_AMPLITUDE, SECONDARY_AMPLITUDE,
    SECONDARY_PHASE, TIME_STEP,
};

/// Height of a wave at column `x` for phase `t`.
pub fn wave_y(x: f64, t: f64, amplitude: f64, phase: f64) -> f64 {
    amplitude * (x * FREQUENCY + t + phase).sin() + CANVAS_HEIGHT as f64 / 2.0
}

/// Points of both waves for one frame, in canvas coordinates (y grows down).
#[derive(Debug, Clone, PartialEq)]
pub struct WaveFrame {
    pub t: f64,
    pub primary: Vec<(f64, f64)>,
    pub secondary: Vec<(f64, f64)>,
}

impl WaveFrame {
    fn draw(t: f64) -> Self {
        let xs = (0..CANVAS_WIDTH).map(f64::from);
        let primary = xs
            .clone()
            .map(|x| (x, wave_y(x, t, PRIMARY_AMPLITUDE, 0.0)))
            .collect();
        let secondary = xs
            .map(|x| (x, wave_y(x, t, SECONDARY_AMPLITUDE, SECONDARY_PHASE)))
            .collect();
        Self {
            t,
            primary,
            secondary,
        }
    }
}

/// Frame loop for the waves.
///
/// `frame` is the per-frame callback. It checks `running` before drawing, so
/// after `stop` the loop schedules nothing further.
#[derive(Debug, Default)]
pub struct WaveRenderer {
    running: bool,
    t: f64,
    frames: u64,
    last: Option<WaveFrame>,
}

impl WaveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh loop at `t = 0`.
    pub fn start(&mut self) {
        self.running = true;
        self.t = 0.0;
        self.frames = 0;
        self.last = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Phase the next frame will be drawn with.
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&WaveFrame> {
        self.last.as_ref()
    }

    /// Draws one frame and advances the phase. Returns `None` once stopped.
    pub fn frame(&mut self) -> Option<&WaveFrame> {
        if !self.running {
            return None;
        }
        let frame = WaveFrame::draw(self.t);
        self.t += TIME_STEP;
        self.frames += 1;
        self.last = Some(frame);
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_advances_by_fixed_step_per_frame() {
        let mut wave = WaveRenderer::new();
        wave.start();

        let mut previous: Option<f64> = None;
        for _ in 0..20 {
            let t = wave.frame().map(|f| f.t).unwrap();
            if let Some(prev) = previous {
                assert!(t > prev);
                assert!((t - prev - TIME_STEP).abs() < 1e-9);
            }
            previous = Some(t);
        }
        assert_eq!(wave.frames_drawn(), 20);
    }

    #[test]
    fn stopped_loop_draws_nothing() {
        let mut wave = WaveRenderer::new();
        wave.start();
        wave.frame();
        wave.frame();
        wave.stop();

        assert!(wave.frame().is_none());
        assert!(wave.frame().is_none());
        assert_eq!(wave.frames_drawn(), 2);
        assert!(wave.last_frame().is_none());
    }

    #[test]
    fn frame_covers_canvas_width_around_midline() {
        let mut wave = WaveRenderer::new();
        wave.start();
        let frame = wave.frame().unwrap().clone();

        assert_eq!(frame.primary.len(), CANVAS_WIDTH as usize);
        assert_eq!(frame.secondary.len(), CANVAS_WIDTH as usize);
        assert!((frame.primary[0].1 - 40.0).abs() < 1e-9);
        for (_, y) in frame.primary.iter().chain(frame.secondary.iter()) {
            assert!((25.0..=55.0).contains(y));
        }
    }

    #[test]
    fn secondary_wave_is_phase_shifted_and_flatter() {
        let y = wave_y(0.0, 0.0, SECONDARY_AMPLITUDE, SECONDARY_PHASE);
        assert!((y - (10.0 * 1f64.sin() + 40.0)).abs() < 1e-9);
    }
}
