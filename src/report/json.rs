use serde::Serialize;

use crate::catalog::{OverlayCatalog, SelectOption};
use crate::panel::PanelView;
use crate::panel::buttons::ReadButton;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracksReport<'a> {
    pub buttons: &'a [ReadButton],
    /// `null` when the panel is closed or the family has no samples.
    pub panel: Option<&'a PanelView>,
}

#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub gtex: Vec<SelectOption>,
    pub mappability: Vec<SelectOption>,
}

impl CatalogReport {
    pub fn build() -> Self {
        Self {
            gtex: OverlayCatalog::Gtex.options(),
            mappability: OverlayCatalog::Mappability.options(),
        }
    }
}

pub fn render_tracks_json(
    buttons: &[ReadButton],
    panel: Option<&PanelView>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TracksReport { buttons, panel })
}

pub fn render_catalog_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CatalogReport::build())
}
