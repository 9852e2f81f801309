//! Rotating particle cloud behind the hero.

use crate::consts::cli_consts::hero::{
    CAMERA_Z, PARALLAX_DAMPING, PARALLAX_FACTOR, PARTICLE_COUNT, PARTICLE_SPREAD, ROTATION_STEP_X,
    ROTATION_STEP_Y,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertical field of view of the projection, degrees.
const FOV_DEG: f64 = 75.0;
/// Points closer to the camera than this are not drawn.
const NEAR_PLANE: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct ParticleField {
    points: Vec<[f64; 3]>,
    rotation_x: f64,
    rotation_y: f64,
    z: f64,
    running: bool,
}

impl ParticleField {
    /// Scatters `count` points uniformly in a cube centred on the origin.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = PARTICLE_SPREAD / 2.0;
        let points = (0..count)
            .map(|_| {
                [
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ]
            })
            .collect();
        Self {
            points,
            rotation_x: 0.0,
            rotation_y: 0.0,
            z: 0.0,
            running: false,
        }
    }

    pub fn with_default_count(seed: u64) -> Self {
        Self::new(PARTICLE_COUNT, seed)
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances one frame: spins the cloud and eases its depth toward the
    /// scroll-driven target. Does nothing once stopped.
    pub fn frame(&mut self, scroll_px: f64) -> bool {
        if !self.running {
            return false;
        }
        self.rotation_x += ROTATION_STEP_X;
        self.rotation_y += ROTATION_STEP_Y;
        let target = -scroll_px * PARALLAX_FACTOR;
        self.z += (target - self.z) * PARALLAX_DAMPING;
        true
    }

    /// Projects the cloud onto normalized screen space (`[-1, 1]` on both axes,
    /// y up) for a viewport with the given width/height ratio. Points behind
    /// the camera or off screen are dropped.
    pub fn project(&self, aspect: f64) -> Vec<(f64, f64)> {
        let focal = 1.0 / (FOV_DEG.to_radians() / 2.0).tan();
        let (sin_x, cos_x) = self.rotation_x.sin_cos();
        let (sin_y, cos_y) = self.rotation_y.sin_cos();

        self.points
            .iter()
            .filter_map(|&[x, y, z]| {
                // Rotate around x, then around y.
                let (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);
                let (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);
                let depth = CAMERA_Z - (z + self.z);
                if depth < NEAR_PLANE {
                    return None;
                }
                let sx = x * focal / depth / aspect;
                let sy = y * focal / depth;
                (sx.abs() <= 1.0 && sy.abs() <= 1.0).then_some((sx, sy))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::hero::PARTICLE_SEED;

    #[test]
    fn points_fill_the_cube_deterministically() {
        let field = ParticleField::with_default_count(PARTICLE_SEED);
        let again = ParticleField::with_default_count(PARTICLE_SEED);

        assert_eq!(field.points.len(), PARTICLE_COUNT);
        assert_eq!(field.points, again.points);
        assert!(
            field
                .points
                .iter()
                .flatten()
                .all(|c| c.abs() <= PARTICLE_SPREAD / 2.0)
        );
    }

    #[test]
    fn frames_only_advance_while_running() {
        let mut field = ParticleField::new(10, 1);
        assert!(!field.frame(0.0));
        assert_eq!((field.rotation_x, field.rotation_y), (0.0, 0.0));

        field.start();
        assert!(field.frame(0.0));
        assert!(field.frame(0.0));
        let (x, y) = (field.rotation_x, field.rotation_y);
        assert!((x - 2.0 * ROTATION_STEP_X).abs() < 1e-12);
        assert!((y - 2.0 * ROTATION_STEP_Y).abs() < 1e-12);

        field.stop();
        assert!(!field.frame(0.0));
        assert_eq!((field.rotation_x, field.rotation_y), (x, y));
    }

    #[test]
    fn depth_eases_toward_scroll_target() {
        let mut field = ParticleField::new(1, 1);
        field.start();
        field.frame(100.0);
        assert!((field.z - (-3.0 * 0.1)).abs() < 1e-9);
        for _ in 0..200 {
            field.frame(100.0);
        }
        assert!((field.z + 3.0).abs() < 1e-6);
    }

    #[test]
    fn projection_stays_on_screen() {
        let field = ParticleField::with_default_count(PARTICLE_SEED);
        let projected = field.project(2.0);
        assert!(!projected.is_empty());
        assert!(projected.len() <= PARTICLE_COUNT);
        assert!(projected.iter().all(|(x, y)| x.abs() <= 1.0 && y.abs() <= 1.0));
    }
}
