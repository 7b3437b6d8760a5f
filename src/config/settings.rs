//! Application settings
//!
//! Settings are read from a YAML file whose top-level keys are upper case
//! (`INSTITUTION`, `HELP_TEXT`, `LEAFLET`, ...). The typed fields cover what
//! the view helpers consume; [`Settings::get`] reads any other value by
//! dotted path.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Solr field names used by the document accessors and helpers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldNames {
    #[serde(rename = "ID", default = "FieldNames::default_id")]
    pub id: String,

    #[serde(rename = "ACCESS_RIGHTS", default = "FieldNames::default_access_rights")]
    pub access_rights: String,

    #[serde(rename = "PROVIDER", default = "FieldNames::default_provider")]
    pub provider: String,

    #[serde(rename = "GEOMETRY", default = "FieldNames::default_geometry")]
    pub geometry: String,

    #[serde(rename = "GEOM_TYPE", default = "FieldNames::default_geom_type")]
    pub geom_type: String,

    #[serde(rename = "WXS_IDENTIFIER", default = "FieldNames::default_wxs_identifier")]
    pub wxs_identifier: String,

    #[serde(rename = "REFERENCES", default = "FieldNames::default_references")]
    pub references: String,
}

impl FieldNames {
    fn default_id() -> String {
        "id".to_string()
    }
    fn default_access_rights() -> String {
        "dct_accessRights_s".to_string()
    }
    fn default_provider() -> String {
        "schema_provider_s".to_string()
    }
    fn default_geometry() -> String {
        "locn_geometry".to_string()
    }
    fn default_geom_type() -> String {
        "gbl_resourceType_sm".to_string()
    }
    fn default_wxs_identifier() -> String {
        "gbl_wxsIdentifier_s".to_string()
    }
    fn default_references() -> String {
        "dct_references_s".to_string()
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            id: Self::default_id(),
            access_rights: Self::default_access_rights(),
            provider: Self::default_provider(),
            geometry: Self::default_geometry(),
            geom_type: Self::default_geom_type(),
            wxs_identifier: Self::default_wxs_identifier(),
            references: Self::default_references(),
        }
    }
}

/// Settings consumed by the view helpers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Institution whose restricted records signed-in users may see
    #[serde(rename = "INSTITUTION", default)]
    pub institution: String,

    /// Features with help text popovers, mapped to the keys that have entries
    #[serde(rename = "HELP_TEXT", default)]
    pub help_text: HashMap<String, Vec<String>>,

    /// Viewer protocols that get a static map in the item sidebar
    #[serde(rename = "SIDEBAR_STATIC_MAP", default)]
    pub sidebar_static_map: Option<Vec<String>>,

    /// Leaflet plugin options passed through to the map viewer
    #[serde(rename = "LEAFLET", default)]
    pub leaflet: serde_json::Value,

    #[serde(rename = "FIELDS", default)]
    pub fields: FieldNames,

    /// Use the record's geometry type for relation icons instead of a fixed icon
    #[serde(rename = "USE_GEOM_FOR_RELATIONS_ICON", default)]
    pub use_geom_for_relations_icon: bool,

    #[serde(skip)]
    raw: Option<serde_yaml::Value>,
}

impl Settings {
    /// Parse settings from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if raw.is_null() {
            return Ok(Self::default());
        }
        let mut settings: Settings = serde_yaml::from_value(raw.clone())?;
        settings.raw = Some(raw);
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_yaml_str(&yaml)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read any setting by dotted path, e.g. `LEAFLET.LAYERS.DETECT_RETINA`
    pub fn get(&self, path: &str) -> Option<&serde_yaml::Value> {
        let root = self.raw.as_ref()?;
        path.split('.')
            .try_fold(root, |node, segment| node.get(segment))
    }

    /// Whether `HELP_TEXT.<feature>` lists `key`
    pub fn help_text_includes(&self, feature: &str, key: &str) -> bool {
        self.help_text
            .get(feature)
            .map(|keys| keys.iter().any(|k| k == key))
            .unwrap_or(false)
    }

    /// Whether `SIDEBAR_STATIC_MAP` lists `protocol`
    pub fn sidebar_static_map_includes(&self, protocol: &str) -> bool {
        self.sidebar_static_map
            .as_ref()
            .map(|protocols| protocols.iter().any(|p| p == protocol))
            .unwrap_or(false)
    }
}
