//! HTML fragment building
//!
//! A small tag builder in the spirit of server-side view helpers: attributes
//! keep insertion order, `data` attributes are dasherized, non-string data
//! values are JSON encoded, and text content is always escaped unless it is
//! already [`Html`].

use serde_json::Value;
use std::fmt;

/// Markup that is safe to embed without further escaping
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Html(String);

impl Html {
    /// Wrap markup produced by a trusted source (a template, an icon file)
    pub fn from_trusted<S: Into<String>>(markup: S) -> Self {
        Html(markup.into())
    }

    /// Escape plain text into markup
    pub fn text(text: &str) -> Self {
        Html(escape(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}

/// Escape special HTML characters
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Builder for a single element
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    attributes: Vec<(String, String)>,
    body: String,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            body: String::new(),
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Set an attribute, replacing an earlier value with the same name
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Set `data-<key>`; underscores in `key` become dashes.
    ///
    /// Strings are written as-is, `null` drops the attribute, and every
    /// other JSON value is written in its JSON form.
    pub fn data<V: Into<Value>>(self, key: &str, value: V) -> Self {
        let name = format!("data-{}", key.replace('_', "-"));
        match value.into() {
            Value::Null => self,
            Value::String(s) => self.attr(&name, &s),
            other => self.attr(&name, &other.to_string()),
        }
    }

    /// Append escaped text content
    pub fn text(mut self, text: &str) -> Self {
        self.body.push_str(&escape(text));
        self
    }

    /// Append trusted markup
    pub fn html(mut self, html: &Html) -> Self {
        self.body.push_str(html.as_str());
        self
    }

    pub fn build(self) -> Html {
        let mut out = format!("<{}", self.name);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        out.push('>');
        out.push_str(&self.body);
        out.push_str(&format!("</{}>", self.name));
        Html(out)
    }
}

/// Start an anchor pointing at `href`
pub fn link_to(href: &str) -> Tag {
    Tag::new("a").attr("href", href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_empty_div() {
        let html = Tag::new("div").id("map").build();
        assert_eq!(html.as_str(), "<div id=\"map\"></div>");
    }

    #[test]
    fn test_data_attributes() {
        let html = Tag::new("div")
            .data("download_type", "direct")
            .data("available", true)
            .data("options", json!({"a": 1}))
            .data("skipped", Value::Null)
            .build();
        assert_eq!(
            html.as_str(),
            "<div data-download-type=\"direct\" data-available=\"true\" data-options=\"{&quot;a&quot;:1}\"></div>"
        );
    }

    #[test]
    fn test_link_to_escapes_text() {
        let html = link_to("/x?a=1&b=2").text("Tom & Jerry").build();
        assert_eq!(html.as_str(), "<a href=\"/x?a=1&amp;b=2\">Tom &amp; Jerry</a>");
    }

    #[test]
    fn test_attr_replaces_existing() {
        let html = Tag::new("span").class("a").class("b").build();
        assert_eq!(html.as_str(), "<span class=\"b\"></span>");
    }

    #[test]
    fn test_trusted_html_not_escaped() {
        let inner = Html::from_trusted("<svg></svg>");
        let html = Tag::new("span").html(&inner).build();
        assert_eq!(html.as_str(), "<span><svg></svg></span>");
    }
}
