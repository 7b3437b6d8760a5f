//! Fixtures shared by the helper unit tests

use crate::config::Settings;
use crate::helpers::context::ViewEnvironment;
use crate::i18n::Translations;
use crate::models::SolrDocument;
use crate::renderers::IconRegistry;
use serde_json::Value;

pub const SETTINGS: &str = r#"
INSTITUTION: Stanford
HELP_TEXT:
  viewer_protocol:
    - wms
    - dynamic_map_layer
SIDEBAR_STATIC_MAP:
  - iiif
  - iiif_manifest
LEAFLET:
  MAP:
    maxZoom: 18
"#;

pub const LOCALE: &str = r#"
en:
  geoblacklight:
    download:
      download_link: "Original %{download_format}"
      export_link: "Export %{download_format}"
      export_shapefile_link: Shapefile
      export_kmz_link: KMZ
    formats:
      jpg: JPG
      shapefile: Shapefile
      esri_geodatabase: Geodatabase
    references:
      wms: Web Map Service (WMS)
      wfs: Web Feature Service (WFS)
      iiif: International Image Interoperability Framework (IIIF) Image API
    metadata:
      missing: Metadata is unavailable
    help_text:
      viewer_protocol:
        wms:
          title: Web Map Service (WMS)
          content: Images of the layer served by a map server
"#;

pub fn settings() -> Settings {
    Settings::from_yaml_str(SETTINGS).expect("fixture settings")
}

pub fn environment() -> ViewEnvironment {
    let translations = Translations::from_yaml_str("en", LOCALE).expect("fixture locale");
    let mut icons = IconRegistry::new();
    icons.insert("polygon", "<svg class=\"polygon\"></svg>");
    icons.insert("paper-map", "<svg class=\"paper-map\"></svg>");
    icons.insert("none", "<svg class=\"none\"></svg>");
    ViewEnvironment::new(settings(), translations)
        .expect("builtin partials")
        .with_icons(icons)
}

/// Record with `fields` merged over a minimal public record
pub fn document(fields: Value) -> SolrDocument {
    let mut record = serde_json::json!({
        "id": "stanford-cz128vq0535",
        "dct_accessRights_s": "Public",
        "schema_provider_s": "Stanford",
        "gbl_wxsIdentifier_s": "druid:cz128vq0535",
        "locn_geometry": "ENVELOPE(-122.5, -122.3, 37.9, 37.7)"
    });
    if let (Some(base), Value::Object(extra)) = (record.as_object_mut(), fields) {
        base.extend(extra);
    }
    SolrDocument::from_value(record, &settings())
}

/// JSON-encoded references field
pub fn references(pairs: &[(&str, &str)]) -> String {
    let map: serde_json::Map<String, Value> = pairs
        .iter()
        .map(|(uri, endpoint)| (uri.to_string(), Value::String(endpoint.to_string())))
        .collect();
    Value::Object(map).to_string()
}
