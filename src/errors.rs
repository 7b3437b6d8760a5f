//! Error types for view rendering
//!
//! Only a few failures are recoverable inside a helper (missing partial,
//! missing icon, metadata that cannot be transformed). Configuration errors
//! surface to whoever loads the environment.

use thiserror::Error;

/// Loading settings, locale catalogs, or icon sets failed
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML is malformed or does not match the expected shape
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Locale catalog has no top-level entry for the requested locale
    #[error("Locale '{0}' not found in catalog")]
    MissingLocale(String),
}

/// Partial rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// No partial registered under this name
    #[error("Missing partial: {0}")]
    MissingTemplate(String),

    /// Partial failed to compile or render
    #[error("Template error: {0}")]
    Template(#[from] mustache::Error),
}

/// Icon lookup miss
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Icon not found: {0}")]
pub struct IconNotFound(pub String);

/// Metadata rendering errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// Metadata body exists but could not be transformed to HTML
    #[error("Metadata transform failed: {0}")]
    Transform(String),

    /// Metadata body could not be obtained at all
    #[error("Metadata unavailable: {0}")]
    Unavailable(String),
}

/// Any failure while producing a helper's primary output
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
