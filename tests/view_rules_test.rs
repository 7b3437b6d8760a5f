// Business rules for the catalog view helpers
//
// Availability gating, snippet truncation, metadata fallbacks, viewer
// selection, and help text rendering, checked through the public API.

use geoblacklight_views::helpers::SNIPPET_LENGTH;
use geoblacklight_views::{
    Html, Metadata, MetadataError, PartialRenderer, ReferenceType, Settings, SolrDocument,
    Translations, ViewEnvironment,
};
use serde_json::json;

fn environment() -> ViewEnvironment {
    let settings = Settings::from_yaml_str("INSTITUTION: Stanford\n").unwrap();
    let translations = Translations::from_yaml_str(
        "en",
        r#"
en:
  geoblacklight:
    metadata:
      missing: No metadata
    help_text:
      viewer_protocol:
        wms:
          title: WMS
          content: Web Map Service
"#,
    )
    .unwrap();
    ViewEnvironment::new(settings, translations).unwrap()
}

fn record(env: &ViewEnvironment, fields: serde_json::Value) -> SolrDocument {
    SolrDocument::from_value(fields, &env.settings)
}

struct StubMetadata {
    kind: ReferenceType,
    transform: Result<Html, MetadataError>,
}

impl Metadata for StubMetadata {
    fn kind(&self) -> &ReferenceType {
        &self.kind
    }

    fn transform(&self) -> Result<Html, MetadataError> {
        self.transform.clone()
    }

    fn to_xml(&self) -> Result<String, MetadataError> {
        Ok("<metadata/>".to_string())
    }
}

fn stub(transform: Result<Html, MetadataError>) -> StubMetadata {
    StubMetadata {
        kind: ReferenceType::Fgdc,
        transform,
    }
}

#[test]
fn test_public_record_available_regardless_of_authentication() {
    let env = environment();
    let doc = record(&env, json!({"id": "a", "dct_accessRights_s": "Public", "schema_provider_s": "Tufts"}));
    for signed_in in [false, true] {
        assert!(env.context().with_document(&doc).signed_in(signed_in).document_available());
    }
}

#[test]
fn test_private_same_institution_record_needs_authentication() {
    let env = environment();
    let doc = record(&env, json!({"id": "a", "dct_accessRights_s": "Restricted", "schema_provider_s": "Stanford"}));
    assert!(!env.context().with_document(&doc).signed_in(false).document_available());
    assert!(env.context().with_document(&doc).signed_in(true).document_available());
}

#[test]
fn test_snippet_joins_with_single_space_and_caps_length() {
    let env = environment();
    let ctx = env.context();
    assert_eq!(ctx.snippit(&json!(["one", "two", "three"])), "one two three");

    let words: Vec<String> = (0..100).map(|i| format!("word{}", i)).collect();
    let snippet = ctx.snippit(&json!(words));
    assert_eq!(snippet.chars().count(), SNIPPET_LENGTH);
    assert!(snippet.starts_with("word0 word1 word2"));
}

#[test]
fn test_metadata_fallback_chain() {
    let env = environment();
    let ctx = env.context();

    let ok = stub(Ok(Html::from_trusted("<p>ok</p>")));
    assert_eq!(
        ctx.render_transformed_metadata(&ok).as_str(),
        "<div class=\"metadata-body\"><p>ok</p></div>"
    );

    let transform_failed = stub(Err(MetadataError::Transform("bad xsl".to_string())));
    assert!(ctx
        .render_transformed_metadata(&transform_failed)
        .as_str()
        .contains("metadata-markup"));

    let other_failure = stub(Err(MetadataError::Unavailable("404".to_string())));
    assert_eq!(
        ctx.render_transformed_metadata(&other_failure).as_str(),
        "<div class=\"alert alert-danger metadata-missing\">No metadata</div>"
    );
}

#[test]
fn test_viewer_selection() {
    let env = environment();
    let cog = record(
        &env,
        json!({"id": "c", "dct_references_s": {"https://github.com/cogeotiff/cog-spec": "https://example.com/a.tif"}}),
    );
    let wms = record(
        &env,
        json!({"id": "w", "dct_references_s": {"http://www.opengis.net/def/serviceType/ogc/wms": "https://example.com/wms"}}),
    );

    let cog_viewer = env.context().with_document(&cog).viewer_container().unwrap();
    let wms_viewer = env.context().with_document(&wms).viewer_container().unwrap();
    assert!(cog_viewer.as_str().starts_with("<div id=\"ol-map\""));
    assert!(wms_viewer.as_str().starts_with("<div id=\"map\""));
}

#[test]
fn test_help_text_rendering() {
    let env = environment();
    let ctx = env.context();

    let present = ctx.render_help_text_entry("viewer_protocol", "wms");
    assert!(present.as_str().contains("data-title=\"WMS\""));
    assert!(present.as_str().contains("data-content=\"Web Map Service\""));

    let missing = ctx.render_help_text_entry("viewer_protocol", "xyz_tiles");
    assert_eq!(missing.as_str(), "<span class=\"help-text translation-missing\"></span>");
}

#[test]
fn test_custom_web_services_partial_overrides_default() {
    let mut partials = PartialRenderer::new().unwrap();
    partials
        .register("web_services_wcs", "<p class=\"wcs\">{{{reference.endpoint}}}</p>")
        .unwrap();
    let env = environment().with_partials(partials);

    let reference = geoblacklight_views::Reference::new(ReferenceType::Wcs, "https://example.com/wcs");
    let html = env.context().render_web_services(&reference).unwrap();
    assert_eq!(html.as_str(), "<p class=\"wcs\">https://example.com/wcs</p>");
}
