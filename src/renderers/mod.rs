//! Renderers module for the view helpers
//!
//! This module contains the markup-producing collaborators the helpers
//! delegate to: the tag builder, the icon registry, and the partial
//! renderer.

pub mod html;
pub mod icons;
pub mod partials;

// Re-export commonly used types
pub use html::{escape, link_to, Html, Tag};
pub use icons::IconRegistry;
pub use partials::PartialRenderer;
