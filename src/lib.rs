//! Geospatial Catalog View Helpers
//!
//! Presentation-layer helpers for a geospatial discovery catalog: download
//! links, item map viewer selection, snippets, localized labels, help text
//! popovers, and metadata/web service partials. Helpers are methods on a
//! request-scoped [`ViewContext`] that borrows explicit settings, locale
//! catalog, icons, and partials from a [`ViewEnvironment`].

pub mod config;
pub mod errors;
pub mod helpers;
pub mod i18n;
pub mod models;
pub mod renderers;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use config::{CatalogConfig, Routes, Settings};
pub use errors::{ConfigError, IconNotFound, MetadataError, RenderError, ViewError};
pub use helpers::{ViewContext, ViewEnvironment};
pub use i18n::Translations;
pub use models::{GeoDocument, Metadata, Reference, ReferenceType, References, SolrDocument, XmlMetadata};
pub use renderers::{Html, IconRegistry, PartialRenderer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Geospatial catalog view helpers WASM module initialized");
}
