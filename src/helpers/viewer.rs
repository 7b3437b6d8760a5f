//! Item map viewer selection
//!
//! Records carrying a PMTiles or cloud-optimized GeoTIFF reference need the
//! OpenLayers viewer, even when another reference drives the map; everything else uses the Leaflet viewer. Both
//! containers carry the same data attributes and differ only in element id.

use crate::config::DEFAULT_BASEMAP;
use crate::helpers::context::ViewContext;
use crate::models::GeoDocument;
use crate::renderers::html::{Html, Tag};
use crate::utils::inflector::camelize;
use serde_json::Value;

pub const LEAFLET_CONTAINER_ID: &str = "map";
pub const OPENLAYERS_CONTAINER_ID: &str = "ol-map";

impl<'a> ViewContext<'a> {
    /// Basemap provider for map displays
    pub fn geoblacklight_basemap(&self) -> &'a str {
        self.env()
            .catalog
            .basemap_provider
            .as_deref()
            .unwrap_or(DEFAULT_BASEMAP)
    }

    /// Leaflet plugin options passed to the viewer
    pub fn leaflet_options(&self) -> &'a Value {
        &self.settings().leaflet
    }

    /// `data-map` value selecting the results map's JS behaviour
    pub fn results_js_map_selector(&self, controller_name: &str) -> &'static str {
        match controller_name {
            "bookmarks" => "bookmarks",
            _ => "index",
        }
    }

    /// Whether the current record needs the OpenLayers viewer
    pub fn openlayers_container(&self) -> bool {
        match self.document() {
            Some(document) => {
                let viewer = document.item_viewer();
                viewer.pmtiles() || viewer.cog()
            }
            None => false,
        }
    }

    /// Map container for the current record, `None` without a record
    pub fn viewer_container(&self) -> Option<Html> {
        if self.openlayers_container() {
            self.ol_viewer()
        } else {
            self.leaflet_viewer()
        }
    }

    pub fn leaflet_viewer(&self) -> Option<Html> {
        self.map_viewer(LEAFLET_CONTAINER_ID)
    }

    pub fn ol_viewer(&self) -> Option<Html> {
        self.map_viewer(OPENLAYERS_CONTAINER_ID)
    }

    fn map_viewer(&self, container_id: &str) -> Option<Html> {
        let document = self.document()?;
        let viewer = document.item_viewer();

        Some(
            Tag::new("div")
                .id(container_id)
                .data("map", "item")
                .data("protocol", camelize(&viewer.protocol))
                .data("url", viewer.endpoint)
                .data("layer_id", document.wxs_identifier())
                .data("map_geom", document.geometry_geojson())
                .data("catalog_path", self.env().routes.search_catalog_path())
                .data("available", self.document_available())
                .data("basemap", self.geoblacklight_basemap())
                .data("leaflet_options", self.leaflet_options().clone())
                .build(),
        )
    }
}
