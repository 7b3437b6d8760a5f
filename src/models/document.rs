//! Indexed geospatial records
//!
//! [`GeoDocument`] is the read-only accessor contract the view helpers rely
//! on. [`SolrDocument`] implements it over a JSON record as returned by the
//! search index.

use crate::config::{FieldNames, Settings};
use crate::models::geometry::Geometry;
use crate::models::references::{ReferenceType, References};
use serde_json::{Map, Value};

/// Viewer protocol used when no reference can drive a map
pub const DEFAULT_VIEWER_PROTOCOL: &str = "map";

/// Which map widget a record's item view needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemViewer {
    pub protocol: String,
    pub endpoint: String,
    pmtiles: bool,
    cog: bool,
}

impl ItemViewer {
    pub fn from_references(references: &References) -> Self {
        let (protocol, endpoint) = match references.viewer_reference() {
            Some(reference) => (reference.type_name().to_string(), reference.endpoint.clone()),
            None => (DEFAULT_VIEWER_PROTOCOL.to_string(), String::new()),
        };

        Self {
            protocol,
            endpoint,
            pmtiles: references.get(&ReferenceType::Pmtiles).is_some(),
            cog: references.get(&ReferenceType::Cog).is_some(),
        }
    }

    /// Record has a PMTiles archive, whichever reference drives the viewer
    pub fn pmtiles(&self) -> bool {
        self.pmtiles
    }

    /// Record has a cloud-optimized GeoTIFF, whichever reference drives the viewer
    pub fn cog(&self) -> bool {
        self.cog
    }
}

/// Accessors the view helpers need from a record
pub trait GeoDocument {
    fn id(&self) -> &str;

    fn is_public(&self) -> bool;

    /// Record comes from the same institution as this catalog
    fn is_same_institution(&self) -> bool;

    fn is_downloadable(&self) -> bool;

    /// Record's features can be inspected in an attribute table
    fn is_inspectable(&self) -> bool;

    fn references(&self) -> &References;

    fn item_viewer(&self) -> ItemViewer {
        ItemViewer::from_references(self.references())
    }

    fn viewer_protocol(&self) -> String {
        self.item_viewer().protocol
    }

    fn viewer_endpoint(&self) -> String {
        self.item_viewer().endpoint
    }

    /// Layer name for OGC / ArcGIS services
    fn wxs_identifier(&self) -> &str;

    /// Footprint as GeoJSON, `None` when the record has no usable geometry
    fn geometry_geojson(&self) -> Option<String>;

    /// Raw field access
    fn field(&self, name: &str) -> Option<&Value>;
}

/// A record from the search index
#[derive(Debug, Clone)]
pub struct SolrDocument {
    fields: Map<String, Value>,
    references: References,
    field_names: FieldNames,
    institution: String,
}

impl SolrDocument {
    /// Wrap a JSON record using the field names and institution in `settings`
    ///
    /// A references field that does not parse is logged and treated as empty.
    pub fn new(fields: Map<String, Value>, settings: &Settings) -> Self {
        let field_names = settings.fields.clone();
        let references = match fields.get(&field_names.references) {
            Some(value) => References::from_field(value).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed references on {:?}: {}", fields.get(&field_names.id), e);
                References::default()
            }),
            None => References::default(),
        };

        Self {
            fields,
            references,
            field_names,
            institution: settings.institution.clone(),
        }
    }

    /// Build from a JSON value; non-object values yield an empty record
    pub fn from_value(value: Value, settings: &Settings) -> Self {
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(fields, settings)
    }

    fn string_field(&self, name: &str) -> Option<&str> {
        match self.fields.get(name)? {
            Value::String(s) => Some(s.as_str()),
            Value::Array(items) => items.first().and_then(Value::as_str),
            _ => None,
        }
    }
}

impl GeoDocument for SolrDocument {
    fn id(&self) -> &str {
        self.string_field(&self.field_names.id).unwrap_or_default()
    }

    fn is_public(&self) -> bool {
        self.string_field(&self.field_names.access_rights)
            .map(|rights| rights.eq_ignore_ascii_case("public"))
            .unwrap_or(false)
    }

    fn is_same_institution(&self) -> bool {
        match self.string_field(&self.field_names.provider) {
            Some(provider) => provider.to_lowercase() == self.institution.to_lowercase(),
            None => false,
        }
    }

    fn is_downloadable(&self) -> bool {
        self.references.download().is_some() || self.references.iiif().is_some()
    }

    fn is_inspectable(&self) -> bool {
        [
            ReferenceType::Wms,
            ReferenceType::FeatureLayer,
            ReferenceType::DynamicMapLayer,
        ]
        .iter()
        .any(|kind| self.references.get(kind).is_some())
    }

    fn references(&self) -> &References {
        &self.references
    }

    fn wxs_identifier(&self) -> &str {
        self.string_field(&self.field_names.wxs_identifier)
            .unwrap_or_default()
    }

    fn geometry_geojson(&self) -> Option<String> {
        let raw = self.string_field(&self.field_names.geometry)?;
        Geometry::parse(raw).map(|geometry| geometry.geojson())
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.institution = "Stanford".to_string();
        settings
    }

    fn record(access: &str, provider: &str, references: Value) -> SolrDocument {
        SolrDocument::from_value(
            json!({
                "id": "stanford-cz128vq0535",
                "dct_accessRights_s": access,
                "schema_provider_s": provider,
                "dct_references_s": references.to_string(),
                "gbl_wxsIdentifier_s": "druid:cz128vq0535",
                "locn_geometry": "ENVELOPE(-122.5, -122.3, 37.9, 37.7)"
            }),
            &settings(),
        )
    }

    #[test]
    fn test_accessors() {
        let doc = record(
            "Public",
            "Stanford",
            json!({"http://www.opengis.net/def/serviceType/ogc/wms": "https://geo.example.edu/wms"}),
        );
        assert_eq!(doc.id(), "stanford-cz128vq0535");
        assert!(doc.is_public());
        assert!(doc.is_same_institution());
        assert!(doc.is_inspectable());
        assert!(!doc.is_downloadable());
        assert_eq!(doc.viewer_protocol(), "wms");
        assert_eq!(doc.viewer_endpoint(), "https://geo.example.edu/wms");
        assert_eq!(doc.wxs_identifier(), "druid:cz128vq0535");
        assert!(doc.geometry_geojson().unwrap().contains("Polygon"));
    }

    #[test]
    fn test_restricted_other_institution() {
        let doc = record("Restricted", "Princeton", json!({}));
        assert!(!doc.is_public());
        assert!(!doc.is_same_institution());
    }

    #[test]
    fn test_institution_match_ignores_case() {
        let doc = record("Restricted", "STANFORD", json!({}));
        assert!(doc.is_same_institution());
    }

    #[test]
    fn test_item_viewer_flags() {
        let doc = record(
            "Public",
            "Stanford",
            json!({"https://github.com/cogeotiff/cog-spec": "https://example.com/a.tif"}),
        );
        let viewer = doc.item_viewer();
        assert!(viewer.cog());
        assert!(!viewer.pmtiles());
    }

    #[test]
    fn test_item_viewer_flags_follow_references_not_protocol() {
        let doc = record(
            "Public",
            "Stanford",
            json!({
                "https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames": "https://example.com/{z}/{x}/{y}.png",
                "https://github.com/protomaps/PMTiles": "https://example.com/parcels.pmtiles"
            }),
        );
        let viewer = doc.item_viewer();
        assert_eq!(viewer.protocol, "xyz_tiles");
        assert!(viewer.pmtiles());
        assert!(!viewer.cog());
    }

    #[test]
    fn test_default_viewer_protocol() {
        let doc = record("Public", "Stanford", json!({}));
        assert_eq!(doc.viewer_protocol(), DEFAULT_VIEWER_PROTOCOL);
        assert_eq!(doc.viewer_endpoint(), "");
    }

    #[test]
    fn test_malformed_references_are_empty() {
        let doc = SolrDocument::from_value(
            json!({"id": "x", "dct_references_s": "{oops"}),
            &settings(),
        );
        assert!(doc.references().is_empty());
    }

    #[test]
    fn test_downloadable_via_download_reference() {
        let doc = record(
            "Public",
            "Stanford",
            json!({"http://schema.org/downloadUrl": "https://example.com/data.zip"}),
        );
        assert!(doc.is_downloadable());
    }
}
