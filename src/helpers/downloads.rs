//! Download link markup
//!
//! Every download link carries `data-download="trigger"` so the client-side
//! download controller can pick it up.

use crate::helpers::context::ViewContext;
use crate::models::GeoDocument;
use crate::renderers::html::{link_to, Html};

const IIIF_INFO: &str = "info.json";
const IIIF_FULL_JPG: &str = "full/full/0/default.jpg";

impl<'a> ViewContext<'a> {
    /// Full-size JPEG URL derived from the record's IIIF image endpoint
    pub fn iiif_jpg_url(&self) -> Option<String> {
        let iiif = self.document()?.references().iiif()?;
        Some(iiif.endpoint.replacen(IIIF_INFO, IIIF_FULL_JPG, 1))
    }

    /// Direct link to a file
    pub fn download_link_file(&self, label: &str, id: &str, url: &str) -> Html {
        link_to(url)
            .attr("contentUrl", url)
            .data("download", "trigger")
            .data("download_type", "direct")
            .data("download_id", id)
            .text(label)
            .build()
    }

    /// Link that opens the HGL request form in a modal
    pub fn download_link_hgl(&self, text: &str, document: &dyn GeoDocument) -> Html {
        link_to(&self.env().routes.download_hgl_path(document.id()))
            .data("blacklight_modal", "trigger")
            .data("download", "trigger")
            .data("download_type", "harvard-hgl")
            .data("download_id", document.id())
            .text(text)
            .build()
    }

    /// Link to the IIIF full-size JPEG, `None` without an IIIF reference
    pub fn download_link_iiif(&self) -> Option<Html> {
        let url = self.iiif_jpg_url()?;
        Some(
            link_to(&url)
                .attr("contentUrl", &url)
                .data("download", "trigger")
                .html(&self.download_text("JPG"))
                .build(),
        )
    }

    /// Link that asks the server to generate an export of `download_type`
    pub fn download_link_generated(&self, download_type: &str, document: &dyn GeoDocument) -> Html {
        let format = self.export_format_label(download_type);
        let label = self.t(
            "geoblacklight.download.export_link",
            &[("download_format", format.as_str())],
        );
        link_to("")
            .data(
                "download_path",
                self.env().routes.download_path(document.id(), download_type),
            )
            .data("download", "trigger")
            .data("download_type", download_type)
            .data("download_id", document.id())
            .text(&label)
            .build()
    }
}
