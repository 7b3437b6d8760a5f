//! Field value formatting and localized labels

use crate::helpers::context::ViewContext;
use crate::renderers::html::{escape, Html, Tag};
use crate::utils::inflector::{parameterize, truncate};
use serde_json::Value;

/// Maximum length of a search result snippet, omission included
pub const SNIPPET_LENGTH: usize = 150;

/// Join a field value (string, number, or arbitrarily nested list) with
/// single spaces
pub fn join_field_values(value: &Value) -> String {
    let mut parts = Vec::new();
    collect_values(value, &mut parts);
    parts.join(" ")
}

fn collect_values(value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::String(s) => parts.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_values(item, parts)),
        other => parts.push(other.to_string()),
    }
}

impl<'a> ViewContext<'a> {
    /// Search result snippet: all values joined and capped at
    /// [`SNIPPET_LENGTH`] characters, then escaped
    pub fn snippit(&self, value: &Value) -> String {
        escape(&truncate(&join_field_values(value), SNIPPET_LENGTH))
    }

    /// Abstract wrapped for client-side "read more" truncation
    pub fn render_value_as_truncate_abstract(&self, value: &Value) -> Html {
        Tag::new("div")
            .class("truncate-abstract")
            .text(&join_field_values(value))
            .build()
    }

    /// Display name for a file format
    pub fn proper_case_format(&self, format: &str) -> String {
        self.t(
            &format!("geoblacklight.formats.{}", parameterize(format, "_")),
            &[],
        )
    }

    /// Export-specific label for a file format
    pub fn export_format_label(&self, format: &str) -> String {
        self.t(
            &format!("geoblacklight.download.export_{}_link", parameterize(format, "_")),
            &[],
        )
    }

    /// Display name for a reference type
    pub fn formatted_name_reference(&self, reference: &str) -> String {
        self.t(&format!("geoblacklight.references.{}", reference), &[])
    }

    /// "Original <format>" download label
    pub fn download_text(&self, format: &str) -> Html {
        let download_format = self.proper_case_format(format);
        Html::from_trusted(self.t(
            "geoblacklight.download.download_link",
            &[("download_format", download_format.as_str())],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::test_support::*;
    use serde_json::json;

    #[test]
    fn test_join_field_values_flattens() {
        assert_eq!(join_field_values(&json!(["a", ["b", "c"], null, 4])), "a b c 4");
        assert_eq!(join_field_values(&json!("single")), "single");
        assert_eq!(join_field_values(&json!(null)), "");
    }

    #[test]
    fn test_snippit_joins_and_truncates() {
        let env = environment();
        let ctx = env.context();
        assert_eq!(ctx.snippit(&json!(["Roads", "of", "Palo Alto"])), "Roads of Palo Alto");

        let long = vec!["abcdefghij"; 30];
        let snippet = ctx.snippit(&json!(long));
        assert_eq!(snippet.chars().count(), SNIPPET_LENGTH);
        assert!(snippet.ends_with("..."));
        assert!(snippet.starts_with("abcdefghij abcdefghij"));
    }

    #[test]
    fn test_snippit_escapes() {
        let env = environment();
        assert_eq!(env.context().snippit(&json!("A & B")), "A &amp; B");
    }

    #[test]
    fn test_truncate_abstract() {
        let env = environment();
        let html = env
            .context()
            .render_value_as_truncate_abstract(&json!(["First.", "Second."]));
        assert_eq!(html.as_str(), "<div class=\"truncate-abstract\">First. Second.</div>");
    }

    #[test]
    fn test_format_labels() {
        let env = environment();
        let ctx = env.context();
        assert_eq!(ctx.proper_case_format("Shapefile"), "Shapefile");
        assert_eq!(ctx.proper_case_format("Esri Geodatabase"), "Geodatabase");
        assert_eq!(ctx.proper_case_format("Esri Géodatabase"), "Geodatabase");
        assert_eq!(ctx.export_format_label("kmz"), "KMZ");
        assert_eq!(
            ctx.proper_case_format("LAS"),
            "translation missing: en.geoblacklight.formats.las"
        );
    }

    #[test]
    fn test_reference_name_and_download_text() {
        let env = environment();
        let ctx = env.context();
        assert_eq!(ctx.formatted_name_reference("wms"), "Web Map Service (WMS)");
        assert_eq!(ctx.download_text("JPG").as_str(), "Original JPG");
    }
}
