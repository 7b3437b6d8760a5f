//! Record models consumed by the view helpers
//!
//! This module defines the document accessor contract, references,
//! geometry, and metadata documents.

pub mod document;
pub mod geometry;
pub mod metadata;
pub mod references;

// Re-export commonly used types
pub use document::{GeoDocument, ItemViewer, SolrDocument};
pub use geometry::Geometry;
pub use metadata::{Metadata, XmlMetadata};
pub use references::{Reference, ReferenceLocals, ReferenceType, References};
