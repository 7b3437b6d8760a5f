//! Help text popovers

use crate::helpers::context::ViewContext;
use crate::renderers::html::{Html, Tag};

impl<'a> ViewContext<'a> {
    /// Popover trigger for `geoblacklight.help_text.<feature>.<key>`, or a
    /// placeholder span when the catalog has no such entry
    pub fn render_help_text_entry(&self, feature: &str, key: &str) -> Html {
        let translation_key = format!("geoblacklight.help_text.{}.{}", feature, key);
        let translations = &self.env().translations;

        if !translations.exists(&translation_key) {
            return Tag::new("span")
                .class("help-text translation-missing")
                .build();
        }

        let title = translations
            .entry_field(&translation_key, "title")
            .unwrap_or_default();
        let content = translations
            .entry_field(&translation_key, "content")
            .unwrap_or_default();

        let trigger = Tag::new("a")
            .data("toggle", "popover")
            .data("title", title)
            .data("content", content)
            .text(title)
            .build();

        Tag::new("h3")
            .class("help-text viewer_protocol h6")
            .html(&trigger)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::test_support::*;

    #[test]
    fn test_existing_entry_renders_popover() {
        let env = environment();
        let html = env.context().render_help_text_entry("viewer_protocol", "wms");
        assert_eq!(
            html.as_str(),
            "<h3 class=\"help-text viewer_protocol h6\"><a data-toggle=\"popover\" data-title=\"Web Map Service (WMS)\" data-content=\"Images of the layer served by a map server\">Web Map Service (WMS)</a></h3>"
        );
    }

    #[test]
    fn test_missing_entry_renders_placeholder() {
        let env = environment();
        let html = env.context().render_help_text_entry("viewer_protocol", "tms");
        assert_eq!(html.as_str(), "<span class=\"help-text translation-missing\"></span>");
        assert!(!html.as_str().contains("popover"));
    }
}
