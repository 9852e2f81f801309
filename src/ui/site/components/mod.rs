//! Site component modules
//!
//! Contains all individual rendering components

pub mod button;
pub mod footer;
pub mod hero;
pub mod services;
