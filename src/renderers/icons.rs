//! SVG icon registry
//!
//! Icons are inline SVG documents keyed by parameterized name. A lookup miss
//! is an [`IconNotFound`] error; the view helpers turn that into an empty
//! placeholder.

use crate::errors::{ConfigError, IconNotFound};
use crate::renderers::html::{Html, Tag};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: HashMap<String, String>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an icon's SVG markup
    pub fn insert<N: Into<String>, S: Into<String>>(&mut self, name: N, svg: S) {
        self.icons.insert(name.into(), svg.into());
    }

    /// Load every `*.svg` file in `dir`, keyed by file stem
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let io_err = |source| ConfigError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut registry = Self::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("svg") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let svg = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            registry.insert(stem, svg.trim());
        }

        log::debug!("Loaded {} icons from {}", registry.len(), dir.display());
        Ok(registry)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Render an icon wrapped in its container span
    ///
    /// `classes` are appended to the container's class list.
    pub fn icon(&self, name: &str, classes: &[&str]) -> Result<Html, IconNotFound> {
        let svg = self
            .icons
            .get(name)
            .ok_or_else(|| IconNotFound(name.to_string()))?;

        let mut class = format!("blacklight-icons blacklight-icon-{}", name);
        for extra in classes {
            class.push(' ');
            class.push_str(extra);
        }

        Ok(Tag::new("span")
            .class(&class)
            .attr("aria-hidden", "true")
            .html(&Html::from_trusted(svg.as_str()))
            .build())
    }
}
