//! Expandable service cards with a shared detail panel.

pub mod selection;
pub mod state;

pub use state::{ServiceCard, ServiceGallery};
