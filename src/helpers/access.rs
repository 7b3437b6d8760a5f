//! Visibility and capability checks for the current record

use crate::helpers::context::ViewContext;
use crate::models::GeoDocument;

impl<'a> ViewContext<'a> {
    /// Public records are always available; restricted records from this
    /// institution are available to signed-in users.
    pub fn document_available(&self) -> bool {
        match self.document() {
            Some(document) => {
                document.is_public() || (document.is_same_institution() && self.user_signed_in())
            }
            None => false,
        }
    }

    pub fn document_downloadable(&self) -> bool {
        self.document_available()
            && self.document().map(|d| d.is_downloadable()).unwrap_or(false)
    }

    /// Whether the item view includes the attribute table
    pub fn show_attribute_table(&self) -> bool {
        self.document_available()
            && self.document().map(|d| d.is_inspectable()).unwrap_or(false)
    }

    /// Whether the item view renders the sidebar static map
    pub fn render_sidebar_map(&self, document: &dyn GeoDocument) -> bool {
        self.settings()
            .sidebar_static_map_includes(&document.viewer_protocol())
    }

    /// Whether `feature` has a help text popover for `key`
    pub fn show_help_text(&self, feature: &str, key: &str) -> bool {
        self.settings().help_text_includes(feature, key)
    }
}
