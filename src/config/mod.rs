//! Configuration passed into the view helpers
//!
//! - `settings`: application settings loaded from YAML
//! - [`CatalogConfig`]: catalog display options (basemap)
//! - [`Routes`]: URL builders for the catalog and download endpoints

pub mod settings;

pub use settings::{FieldNames, Settings};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

// Paths are encoded against a throwaway origin; only path and query are kept
static ROUTE_BASE: Lazy<Url> = Lazy::new(|| {
    Url::parse("http://localhost/").expect("unreachable error: failed to parse route base URL")
});

/// Basemap used when the catalog does not configure one
pub const DEFAULT_BASEMAP: &str = "positron";

/// Catalog display options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Basemap provider name for map displays
    #[serde(default)]
    pub basemap_provider: Option<String>,
}

/// URL builders for routes the helpers link to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Routes {
    /// Prefix for every generated path (e.g. a mount point)
    #[serde(default)]
    pub mount: String,
}

impl Routes {
    pub fn with_mount<S: Into<String>>(mount: S) -> Self {
        Self {
            mount: mount.into().trim_end_matches('/').to_string(),
        }
    }

    /// `/catalog`
    pub fn search_catalog_path(&self) -> String {
        format!("{}/catalog", self.mount)
    }

    /// `/download/hgl/:id`
    pub fn download_hgl_path(&self, id: &str) -> String {
        self.path(&["download", "hgl", id], None)
    }

    /// `/download/:id?type=:type`
    pub fn download_path(&self, id: &str, download_type: &str) -> String {
        self.path(&["download", id], Some(("type", download_type)))
    }

    /// Mounted path built from percent-encoded segments and an optional query pair
    fn path(&self, segments: &[&str], query: Option<(&str, &str)>) -> String {
        let mut url = ROUTE_BASE.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments);
        }
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }

        match url.query() {
            Some(query) => format!("{}{}?{}", self.mount, url.path(), query),
            None => format!("{}{}", self.mount, url.path()),
        }
    }
}
