//! View helpers WASM API
//!
//! JavaScript-facing entry points for rendering view fragments in the
//! browser.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, JS value conversion, environment access
//! - `render`: rendering operations (viewer container, snippets, help text)

pub mod helpers;
pub mod render;

pub use render::*;
