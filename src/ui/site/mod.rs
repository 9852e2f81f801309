//! Scrollable site shown once the loading gate opens
//!
//! Split into state, layout, updaters and rendering components.

pub mod components;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_site;
pub use state::SiteState;
