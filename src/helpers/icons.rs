//! Icon helpers

use crate::helpers::context::ViewContext;
use crate::models::GeoDocument;
use crate::renderers::html::{Html, Tag};
use crate::utils::inflector::parameterize;
use serde_json::Value;

impl<'a> ViewContext<'a> {
    /// Icon for `name` (parameterized), or an empty placeholder span when
    /// the registry has no such icon
    pub fn geoblacklight_icon(&self, name: Option<&str>, classes: &[&str]) -> Html {
        let icon_name = match name {
            Some(name) => parameterize(name, "-"),
            None => "none".to_string(),
        };

        self.env()
            .icons
            .icon(&icon_name, classes)
            .unwrap_or_else(|e| {
                log::debug!("{}", e);
                Tag::new("span").class("icon-missing geoblacklight-none").build()
            })
    }

    /// Icon for a related record
    ///
    /// With `USE_GEOM_FOR_RELATIONS_ICON` the record's geometry type field
    /// picks the icon (falling back to `icon` when blank) and the icon gets
    /// tooltip styling.
    pub fn relations_icon(&self, document: &dyn GeoDocument, icon: &str) -> Html {
        let settings = self.settings();
        if !settings.use_geom_for_relations_icon {
            return self.geoblacklight_icon(Some(icon), &[]);
        }

        let geom_type = document
            .field(&settings.fields.geom_type)
            .and_then(|value| match value {
                Value::String(s) => Some(s.as_str()),
                Value::Array(items) => items.first().and_then(Value::as_str),
                _ => None,
            })
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(icon);

        self.geoblacklight_icon(Some(geom_type), &["svg_tooltip"])
    }
}
