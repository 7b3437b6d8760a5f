//! Utility modules for the view helpers
//!
//! This module contains string helpers shared by the renderers and
//! the view helpers.

pub mod inflector;

// Re-export commonly used functions
pub use inflector::{camelize, parameterize, transliterate, truncate};
