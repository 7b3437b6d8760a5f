//! Metadata, web service, and reference URL rendering

use crate::errors::{MetadataError, RenderError, ViewError};
use crate::helpers::context::ViewContext;
use crate::models::{GeoDocument, Metadata, Reference, ReferenceLocals};
use crate::renderers::html::{link_to, Html};
use crate::renderers::partials::{
    METADATA_CONTENT, METADATA_MARKUP, METADATA_MISSING, WEB_SERVICES_DEFAULT,
};
use serde::Serialize;

#[derive(Serialize)]
struct ContentLocals<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct MissingLocals {
    message: String,
}

#[derive(Serialize)]
struct WebServiceLocals {
    reference: ReferenceLocals,
    layer_id: String,
    has_layer_id: bool,
}

impl<'a> ViewContext<'a> {
    /// Render a metadata document for the metadata modal
    ///
    /// Falls back to the raw markup when the transform fails, and to the
    /// "missing" partial on any other failure. Failures are logged, never
    /// returned.
    pub fn render_transformed_metadata(&self, metadata: &dyn Metadata) -> Html {
        match self.render_metadata_content(metadata) {
            Ok(html) => html,
            Err(ViewError::Metadata(MetadataError::Transform(message))) => {
                log::warn!("Metadata transform failed: {}", message);
                self.render_metadata_markup(metadata).unwrap_or_else(|e| {
                    log::warn!("{}", e);
                    self.render_metadata_missing()
                })
            }
            Err(e) => {
                log::warn!("{}", e);
                self.render_metadata_missing()
            }
        }
    }

    fn render_metadata_content(&self, metadata: &dyn Metadata) -> Result<Html, ViewError> {
        let content = metadata.transform()?;
        let html = self.env().partials.render(
            METADATA_CONTENT,
            &ContentLocals {
                content: content.as_str(),
            },
        )?;
        Ok(html)
    }

    fn render_metadata_markup(&self, metadata: &dyn Metadata) -> Result<Html, ViewError> {
        let xml = metadata.to_xml()?;
        let html = self
            .env()
            .partials
            .render(METADATA_MARKUP, &ContentLocals { content: &xml })?;
        Ok(html)
    }

    fn render_metadata_missing(&self) -> Html {
        let locals = MissingLocals {
            message: self.t("geoblacklight.metadata.missing", &[]),
        };
        self.env()
            .partials
            .render(METADATA_MISSING, &locals)
            .unwrap_or_else(|e| {
                log::warn!("{}", e);
                Html::default()
            })
    }

    /// Whether `metadata` is the first metadata reference shown for `document`
    pub fn first_metadata(&self, document: &dyn GeoDocument, metadata: &dyn Metadata) -> bool {
        document
            .references()
            .shown_metadata()
            .first()
            .map(|first| &first.kind == metadata.kind())
            .unwrap_or(false)
    }

    /// Render the web services modal entry for `reference`
    ///
    /// Uses `web_services_<type>` when registered, else `web_services_default`.
    pub fn render_web_services(&self, reference: &Reference) -> Result<Html, RenderError> {
        let layer_id = self
            .document()
            .map(|d| d.wxs_identifier().to_string())
            .unwrap_or_default();
        let locals = WebServiceLocals {
            reference: ReferenceLocals {
                kind: reference.type_name().to_string(),
                name: self.formatted_name_reference(reference.type_name()),
                endpoint: reference.endpoint.clone(),
            },
            has_layer_id: !layer_id.is_empty(),
            layer_id,
        };

        let partial = format!("web_services_{}", reference.type_name());
        match self.env().partials.render(&partial, &locals) {
            Err(RenderError::MissingTemplate(name)) => {
                log::debug!("No partial {}, using {}", name, WEB_SERVICES_DEFAULT);
                self.env().partials.render(WEB_SERVICES_DEFAULT, &locals)
            }
            other => other,
        }
    }

    /// Link to the record's landing page URL, `None` without one
    pub fn render_references_url(&self, document: Option<&dyn GeoDocument>) -> Option<Html> {
        let url = document?.references().url()?;
        Some(link_to(&url.endpoint).text(&url.endpoint).build())
    }
}
