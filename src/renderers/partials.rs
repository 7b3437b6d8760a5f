//! Mustache partial rendering
//!
//! Partials are looked up by name (`web_services_wms`,
//! `catalog/metadata/content`, ...). The built-in set covers every partial
//! the view helpers ask for; applications register their own markup over it
//! with [`PartialRenderer::register`].
//!
//! ## Built-in partials
//!
//! | Name | Locals |
//! |---|---|
//! | `web_services_default` | `reference.{type,name,endpoint}` |
//! | `web_services_wms`, `web_services_wfs` | `reference`, `layer_id`, `has_layer_id` |
//! | `web_services_iiif` | `reference` |
//! | `catalog/metadata/content` | `content` (trusted HTML) |
//! | `catalog/metadata/markup` | `content` (raw XML, escaped) |
//! | `catalog/metadata/missing` | `message` |

use crate::errors::RenderError;
use crate::renderers::html::Html;
use mustache::Template;
use serde::Serialize;
use std::collections::HashMap;

pub const WEB_SERVICES_DEFAULT: &str = "web_services_default";
pub const METADATA_CONTENT: &str = "catalog/metadata/content";
pub const METADATA_MARKUP: &str = "catalog/metadata/markup";
pub const METADATA_MISSING: &str = "catalog/metadata/missing";

/// Get built-in partial sources
pub fn builtin_partials() -> [(&'static str, &'static str); 7] {
    [
        (WEB_SERVICES_DEFAULT, include_str!("templates/web_services_default.html.mustache")),
        ("web_services_wms", include_str!("templates/web_services_wms.html.mustache")),
        ("web_services_wfs", include_str!("templates/web_services_wfs.html.mustache")),
        ("web_services_iiif", include_str!("templates/web_services_iiif.html.mustache")),
        (METADATA_CONTENT, include_str!("templates/metadata_content.html.mustache")),
        (METADATA_MARKUP, include_str!("templates/metadata_markup.html.mustache")),
        (METADATA_MISSING, include_str!("templates/metadata_missing.html.mustache")),
    ]
}

/// Named, compiled partials
pub struct PartialRenderer {
    templates: HashMap<String, Template>,
}

impl PartialRenderer {
    /// Renderer with the built-in partials
    pub fn new() -> Result<Self, RenderError> {
        let mut renderer = Self::empty();
        for (name, source) in builtin_partials() {
            renderer.register(name, source)?;
        }
        Ok(renderer)
    }

    /// Renderer with no partials at all
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Compile and register a partial, replacing any existing one
    pub fn register(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        let template = mustache::compile_str(source)?;
        self.templates.insert(name.to_string(), template);
        Ok(())
    }

    pub fn has_partial(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Render the partial `name` with `locals`
    pub fn render<T: Serialize>(&self, name: &str, locals: &T) -> Result<Html, RenderError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| RenderError::MissingTemplate(name.to_string()))?;
        let rendered = template.render_to_string(locals)?;
        Ok(Html::from_trusted(rendered.trim_end()))
    }
}

impl std::fmt::Debug for PartialRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.templates.keys().collect();
        names.sort();
        f.debug_struct("PartialRenderer").field("partials", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtins_compile() {
        let renderer = PartialRenderer::new().unwrap();
        for (name, _) in builtin_partials() {
            assert!(renderer.has_partial(name), "missing builtin {}", name);
        }
    }

    #[test]
    fn test_missing_partial() {
        let renderer = PartialRenderer::empty();
        let result = renderer.render("web_services_wcs", &json!({}));
        assert!(matches!(result, Err(RenderError::MissingTemplate(name)) if name == "web_services_wcs"));
    }

    #[test]
    fn test_register_overrides_builtin() {
        let mut renderer = PartialRenderer::new().unwrap();
        renderer
            .register(METADATA_MISSING, "<p>{{message}}</p>")
            .unwrap();
        let html = renderer
            .render(METADATA_MISSING, &json!({"message": "gone"}))
            .unwrap();
        assert_eq!(html.as_str(), "<p>gone</p>");
    }

    #[test]
    fn test_markup_partial_escapes_content() {
        let renderer = PartialRenderer::new().unwrap();
        let html = renderer
            .render(METADATA_MARKUP, &json!({"content": "<gmd:MD_Metadata/>"}))
            .unwrap();
        assert!(html.as_str().contains("&lt;gmd:MD_Metadata"));
        assert!(!html.as_str().contains("<gmd:"));
    }

    #[test]
    fn test_content_partial_keeps_html() {
        let renderer = PartialRenderer::new().unwrap();
        let html = renderer
            .render(METADATA_CONTENT, &json!({"content": "<dl></dl>"}))
            .unwrap();
        assert_eq!(html.as_str(), "<div class=\"metadata-body\"><dl></dl></div>");
    }
}
