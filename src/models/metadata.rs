//! Metadata documents attached to a record
//!
//! A metadata reference (ISO 19139, FGDC, MODS, HTML) points at a document
//! the application fetches; [`XmlMetadata`] holds the fetched body and turns
//! it into display HTML.

use crate::errors::MetadataError;
use crate::models::references::{Reference, ReferenceType};
use crate::renderers::html::{escape, Html};

/// A metadata document that can be shown on the item page
pub trait Metadata {
    /// Format of this metadata (`iso19139`, `fgdc`, ...)
    fn kind(&self) -> &ReferenceType;

    /// Display HTML for the document
    fn transform(&self) -> Result<Html, MetadataError>;

    /// The document's raw markup
    fn to_xml(&self) -> Result<String, MetadataError>;
}

/// Metadata with an already-fetched body
#[derive(Debug, Clone)]
pub struct XmlMetadata {
    reference: Reference,
    body: Option<String>,
}

impl XmlMetadata {
    pub fn new(reference: Reference, body: Option<String>) -> Self {
        Self { reference, body }
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    fn body(&self) -> Result<&str, MetadataError> {
        self.body
            .as_deref()
            .filter(|body| !body.trim().is_empty())
            .ok_or_else(|| {
                MetadataError::Unavailable(format!(
                    "no {} metadata body for {}",
                    self.reference.type_name(),
                    self.reference.endpoint
                ))
            })
    }
}

impl Metadata for XmlMetadata {
    fn kind(&self) -> &ReferenceType {
        &self.reference.kind
    }

    fn transform(&self) -> Result<Html, MetadataError> {
        let body = self.body()?;
        match self.reference.kind {
            ReferenceType::Html => Ok(Html::from_trusted(body)),
            ReferenceType::Iso19139 | ReferenceType::Fgdc | ReferenceType::Mods => {
                let doc = roxmltree::Document::parse(body)
                    .map_err(|e| MetadataError::Transform(e.to_string()))?;
                let mut out = String::from("<dl class=\"metadata\">");
                render_node(doc.root_element(), &mut out);
                out.push_str("</dl>");
                Ok(Html::from_trusted(out))
            }
            ref other => Err(MetadataError::Transform(format!(
                "no transform for {} metadata",
                other.as_str()
            ))),
        }
    }

    fn to_xml(&self) -> Result<String, MetadataError> {
        self.body().map(str::to_string)
    }
}

/// Emit one `<dt>/<dd>` pair per element; nested elements get a nested list
fn render_node(node: roxmltree::Node, out: &mut String) {
    let children: Vec<_> = node.children().filter(|c| c.is_element()).collect();
    out.push_str(&format!("<dt>{}</dt>", escape(node.tag_name().name())));

    if children.is_empty() {
        let text = node.text().map(str::trim).unwrap_or_default();
        out.push_str(&format!("<dd>{}</dd>", escape(text)));
    } else {
        out.push_str("<dd><dl>");
        for child in children {
            render_node(child, out);
        }
        out.push_str("</dl></dd>");
    }
}
