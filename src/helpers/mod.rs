//! View helpers
//!
//! Every helper is a method on [`ViewContext`], grouped by concern:
//!
//! - `access`: availability, downloadability, sidebar map and help text checks
//! - `downloads`: download link markup
//! - `labels`: snippets, abstracts, and localized format/reference labels
//! - `icons`: icon lookup with placeholder fallback
//! - `help_text`: help text popovers
//! - `metadata`: metadata, web service, and reference URL partials
//! - `viewer`: item map viewer selection
//!
//! ```
//! use geoblacklight_views::{SolrDocument, Settings, Translations, ViewEnvironment};
//! use serde_json::json;
//!
//! let settings = Settings::from_yaml_str("INSTITUTION: Stanford").unwrap();
//! let document = SolrDocument::from_value(
//!     json!({"id": "stanford-abc", "dct_accessRights_s": "Public"}),
//!     &settings,
//! );
//! let env = ViewEnvironment::new(settings, Translations::empty("en")).unwrap();
//! let ctx = env.context().with_document(&document);
//!
//! assert!(ctx.document_available());
//! assert!(ctx.viewer_container().unwrap().as_str().starts_with("<div id=\"map\""));
//! ```

pub mod access;
pub mod context;
pub mod downloads;
pub mod help_text;
pub mod icons;
pub mod labels;
pub mod metadata;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{ViewContext, ViewEnvironment};
pub use labels::{join_field_values, SNIPPET_LENGTH};
pub use viewer::{LEAFLET_CONTAINER_ID, OPENLAYERS_CONTAINER_ID};
