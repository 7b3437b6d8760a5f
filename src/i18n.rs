//! Locale catalog lookups
//!
//! Catalogs use the usual YAML layout with the locale as the top-level key:
//!
//! ```yaml
//! en:
//!   geoblacklight:
//!     download:
//!       download_link: "Original %{download_format}"
//! ```
//!
//! Keys are dotted paths below the locale. `%{name}` placeholders are
//! filled from the interpolation pairs passed to [`Translations::t`].

use crate::errors::ConfigError;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Translations {
    locale: String,
    root: Value,
}

impl Translations {
    /// Catalog with no entries; every lookup misses
    pub fn empty(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            root: Value::Null,
        }
    }

    /// Parse a catalog and select `locale` from it
    pub fn from_yaml_str(locale: &str, yaml: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_yaml::from_str(yaml)?;
        let root = document
            .get(locale)
            .cloned()
            .ok_or_else(|| ConfigError::MissingLocale(locale.to_string()))?;
        Ok(Self {
            locale: locale.to_string(),
            root,
        })
    }

    /// Load a catalog file and select `locale` from it
    pub fn from_path<P: AsRef<Path>>(locale: &str, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(locale, &yaml)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Raw catalog node at `key` (a leaf string or a nested mapping)
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
            .filter(|node| !node.is_null())
    }

    /// Whether the catalog has any entry at `key`
    pub fn exists(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Translate `key`, filling `%{name}` placeholders from `vars`
    ///
    /// A missing key (or a key that names a subtree rather than a string)
    /// yields `translation missing: <locale>.<key>`.
    pub fn t(&self, key: &str, vars: &[(&str, &str)]) -> String {
        let template = match self.lookup(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => {
                log::debug!("Translation missing: {}.{}", self.locale, key);
                return format!("translation missing: {}.{}", self.locale, key);
            }
        };

        vars.iter().fold(template, |text, (name, value)| {
            text.replace(&format!("%{{{}}}", name), value)
        })
    }

    /// String value of `field` inside the subtree at `key`
    pub fn entry_field(&self, key: &str, field: &str) -> Option<&str> {
        self.lookup(key)?.get(field)?.as_str()
    }
}
