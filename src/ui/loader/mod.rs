//! Splash loader logic: stage machine and wave loop.

pub mod sequencer;
pub mod wave;

pub use sequencer::{GlyphPose, LoaderStage, StageSequencer};
