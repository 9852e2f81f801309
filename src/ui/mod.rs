// Module declarations
mod app;
pub mod gallery;
pub mod gate;
pub mod glyphs;
pub mod hero;
pub mod loader;
pub mod motion;
pub mod palette;
pub mod reveal;
pub mod site;
pub mod splash;
pub mod tilt;
pub mod timer;
pub mod visibility;
// Re-exports for external use
pub use app::{App, UIConfig, run};
