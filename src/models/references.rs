//! External service and resource references
//!
//! A record's references field is a JSON object mapping a reference URI
//! (a schema or service-type identifier) to an endpoint. Download
//! references may instead hold a list of `{url, label}` objects; the first
//! URL is the endpoint.

use serde::Serialize;
use serde_json::Value;

/// Reference kinds recognised by the viewer and download helpers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    Cog,
    DynamicMapLayer,
    Download,
    FeatureLayer,
    Fgdc,
    Html,
    Iiif,
    IiifManifest,
    ImageMapLayer,
    IndexMap,
    Iso19139,
    Mods,
    Oembed,
    Pmtiles,
    Thumbnail,
    TiledMapLayer,
    Tilejson,
    Tms,
    Url,
    Wcs,
    Wfs,
    Wms,
    Wmts,
    XyzTiles,
    /// A URI this crate does not know; keeps the original URI
    Unknown(String),
}

/// URI / short-name / variant table
const KNOWN_REFERENCES: &[(&str, &str)] = &[
    ("https://github.com/cogeotiff/cog-spec", "cog"),
    ("urn:x-esri:serviceType:ArcGIS#DynamicMapLayer", "dynamic_map_layer"),
    ("http://schema.org/downloadUrl", "download"),
    ("urn:x-esri:serviceType:ArcGIS#FeatureLayer", "feature_layer"),
    ("http://www.opengis.net/cat/csw/csdgm", "fgdc"),
    ("http://www.w3.org/1999/xhtml", "html"),
    ("http://iiif.io/api/image", "iiif"),
    ("http://iiif.io/api/presentation#manifest", "iiif_manifest"),
    ("urn:x-esri:serviceType:ArcGIS#ImageMapLayer", "image_map_layer"),
    ("https://openindexmaps.org", "index_map"),
    ("http://www.isotc211.org/schemas/2005/gmd/", "iso19139"),
    ("http://www.loc.gov/mods/v3", "mods"),
    ("https://oembed.com", "oembed"),
    ("https://github.com/protomaps/PMTiles", "pmtiles"),
    ("http://schema.org/thumbnailUrl", "thumbnail"),
    ("urn:x-esri:serviceType:ArcGIS#TiledMapLayer", "tiled_map_layer"),
    ("https://github.com/mapbox/tilejson-spec", "tilejson"),
    ("https://wiki.osgeo.org/wiki/Tile_Map_Service_Specification", "tms"),
    ("http://schema.org/url", "url"),
    ("http://www.opengis.net/def/serviceType/ogc/wcs", "wcs"),
    ("http://www.opengis.net/def/serviceType/ogc/wfs", "wfs"),
    ("http://www.opengis.net/def/serviceType/ogc/wms", "wms"),
    ("http://www.opengis.net/def/serviceType/ogc/wmts", "wmts"),
    ("https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames", "xyz_tiles"),
];

impl ReferenceType {
    /// Classify a reference URI
    pub fn from_uri(uri: &str) -> Self {
        KNOWN_REFERENCES
            .iter()
            .find(|(known, _)| *known == uri)
            .and_then(|(_, name)| Self::from_name(name))
            .unwrap_or_else(|| ReferenceType::Unknown(uri.to_string()))
    }

    /// Parse a short name (`wms`, `iiif_manifest`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "cog" => ReferenceType::Cog,
            "dynamic_map_layer" => ReferenceType::DynamicMapLayer,
            "download" => ReferenceType::Download,
            "feature_layer" => ReferenceType::FeatureLayer,
            "fgdc" => ReferenceType::Fgdc,
            "html" => ReferenceType::Html,
            "iiif" => ReferenceType::Iiif,
            "iiif_manifest" => ReferenceType::IiifManifest,
            "image_map_layer" => ReferenceType::ImageMapLayer,
            "index_map" => ReferenceType::IndexMap,
            "iso19139" => ReferenceType::Iso19139,
            "mods" => ReferenceType::Mods,
            "oembed" => ReferenceType::Oembed,
            "pmtiles" => ReferenceType::Pmtiles,
            "thumbnail" => ReferenceType::Thumbnail,
            "tiled_map_layer" => ReferenceType::TiledMapLayer,
            "tilejson" => ReferenceType::Tilejson,
            "tms" => ReferenceType::Tms,
            "url" => ReferenceType::Url,
            "wcs" => ReferenceType::Wcs,
            "wfs" => ReferenceType::Wfs,
            "wms" => ReferenceType::Wms,
            "wmts" => ReferenceType::Wmts,
            "xyz_tiles" => ReferenceType::XyzTiles,
            _ => return None,
        };
        Some(kind)
    }

    /// Short name used in partial names, translation keys, and viewer protocols
    pub fn as_str(&self) -> &str {
        match self {
            ReferenceType::Cog => "cog",
            ReferenceType::DynamicMapLayer => "dynamic_map_layer",
            ReferenceType::Download => "download",
            ReferenceType::FeatureLayer => "feature_layer",
            ReferenceType::Fgdc => "fgdc",
            ReferenceType::Html => "html",
            ReferenceType::Iiif => "iiif",
            ReferenceType::IiifManifest => "iiif_manifest",
            ReferenceType::ImageMapLayer => "image_map_layer",
            ReferenceType::IndexMap => "index_map",
            ReferenceType::Iso19139 => "iso19139",
            ReferenceType::Mods => "mods",
            ReferenceType::Oembed => "oembed",
            ReferenceType::Pmtiles => "pmtiles",
            ReferenceType::Thumbnail => "thumbnail",
            ReferenceType::TiledMapLayer => "tiled_map_layer",
            ReferenceType::Tilejson => "tilejson",
            ReferenceType::Tms => "tms",
            ReferenceType::Url => "url",
            ReferenceType::Wcs => "wcs",
            ReferenceType::Wfs => "wfs",
            ReferenceType::Wms => "wms",
            ReferenceType::Wmts => "wmts",
            ReferenceType::XyzTiles => "xyz_tiles",
            ReferenceType::Unknown(_) => "unknown",
        }
    }

    /// Metadata document formats
    pub fn is_metadata(&self) -> bool {
        matches!(
            self,
            ReferenceType::Iso19139 | ReferenceType::Mods | ReferenceType::Fgdc | ReferenceType::Html
        )
    }
}

/// Display order for metadata references
pub const SHOWN_METADATA_ORDER: [ReferenceType; 4] = [
    ReferenceType::Iso19139,
    ReferenceType::Mods,
    ReferenceType::Fgdc,
    ReferenceType::Html,
];

/// Viewer protocol priority: the first reference present drives the item map
pub const VIEWER_PRIORITY: [ReferenceType; 15] = [
    ReferenceType::Oembed,
    ReferenceType::IndexMap,
    ReferenceType::Tilejson,
    ReferenceType::XyzTiles,
    ReferenceType::Wmts,
    ReferenceType::Tms,
    ReferenceType::Pmtiles,
    ReferenceType::Cog,
    ReferenceType::IiifManifest,
    ReferenceType::Iiif,
    ReferenceType::FeatureLayer,
    ReferenceType::TiledMapLayer,
    ReferenceType::DynamicMapLayer,
    ReferenceType::ImageMapLayer,
    ReferenceType::Wms,
];

/// A named external resource for a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceType,
    pub endpoint: String,
}

impl Reference {
    pub fn new(kind: ReferenceType, endpoint: impl Into<String>) -> Self {
        Self {
            kind,
            endpoint: endpoint.into(),
        }
    }

    /// Short type name (`wms`, `iso19139`, ...)
    pub fn type_name(&self) -> &str {
        self.kind.as_str()
    }
}

/// Serialized shape handed to partials as `reference`
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLocals {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub endpoint: String,
}

/// All references of one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    refs: Vec<Reference>,
}

impl References {
    pub fn new(refs: Vec<Reference>) -> Self {
        Self { refs }
    }

    /// Parse the references field, which is either a JSON object or a
    /// string holding one
    pub fn from_field(value: &Value) -> Result<Self, serde_json::Error> {
        let parsed;
        let object = match value {
            Value::String(encoded) => {
                parsed = serde_json::from_str::<Value>(encoded)?;
                &parsed
            }
            other => other,
        };

        let refs = match object.as_object() {
            Some(map) => map
                .iter()
                .filter_map(|(uri, target)| {
                    endpoint_of(target).map(|endpoint| Reference::new(ReferenceType::from_uri(uri), endpoint))
                })
                .collect(),
            None => Vec::new(),
        };
        Ok(Self { refs })
    }

    pub fn get(&self, kind: &ReferenceType) -> Option<&Reference> {
        self.refs.iter().find(|r| &r.kind == kind)
    }

    pub fn iiif(&self) -> Option<&Reference> {
        self.get(&ReferenceType::Iiif)
    }

    pub fn url(&self) -> Option<&Reference> {
        self.get(&ReferenceType::Url)
    }

    pub fn download(&self) -> Option<&Reference> {
        self.get(&ReferenceType::Download)
    }

    /// Metadata references in display order
    pub fn shown_metadata(&self) -> Vec<&Reference> {
        SHOWN_METADATA_ORDER
            .iter()
            .filter_map(|kind| self.get(kind))
            .collect()
    }

    /// Reference that drives the item viewer, by protocol priority
    pub fn viewer_reference(&self) -> Option<&Reference> {
        VIEWER_PRIORITY.iter().find_map(|kind| self.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.refs.iter()
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

fn endpoint_of(target: &Value) -> Option<String> {
    match target {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => map.get("url").and_then(Value::as_str).map(str::to_string),
            _ => None,
        }),
        _ => None,
    }
}
