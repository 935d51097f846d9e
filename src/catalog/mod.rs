pub mod defs;
pub mod par;
pub mod reference;

use serde::Serialize;

use crate::model::track::{AnnotationTrack, CoverageTrack, JunctionTrack, MergedTrack, TrackConfig};
use defs::{RefSource, RefSourceKind, RefTrackDef, gtex_tracks, mappability_tracks};

/// Selectable checkbox entry shown in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCatalog {
    Gtex,
    Mappability,
}

impl OverlayCatalog {
    pub fn defs(&self) -> &'static [RefTrackDef] {
        match self {
            OverlayCatalog::Gtex => gtex_tracks(),
            OverlayCatalog::Mappability => mappability_tracks(),
        }
    }

    pub fn options(&self) -> Vec<SelectOption> {
        ref_track_options(self.defs())
    }

    pub fn resolve<S: AsRef<str>>(&self, selected: &[S]) -> Vec<TrackConfig> {
        resolve_ref_tracks(self.defs(), selected)
    }
}

pub fn ref_track_options(defs: &[RefTrackDef]) -> Vec<SelectOption> {
    defs.iter()
        .map(|def| SelectOption {
            value: def.text,
            text: def.text,
            description: Some(def.description),
        })
        .collect()
}

fn tabix_index(url: &str) -> Option<String> {
    if url.ends_with(".gz") || url.ends_with(".bgz") {
        Some(format!("{}.tbi", url))
    } else {
        None
    }
}

pub fn source_track(source: &RefSource) -> TrackConfig {
    let url = source.url.to_string();
    let index_url = tabix_index(source.url);
    match source.kind {
        RefSourceKind::Coverage => TrackConfig::Coverage(CoverageTrack {
            name: None,
            url,
            format: "bigWig",
            height: None,
            index_url,
        }),
        RefSourceKind::Junctions => TrackConfig::Junction(JunctionTrack {
            name: None,
            url,
            format: "bed",
            index_url,
            height: None,
            display: None,
        }),
        RefSourceKind::Gtf => TrackConfig::Annotation(AnnotationTrack {
            name: None,
            url,
            format: "gtf",
            index_url,
        }),
    }
}

pub fn resolve_ref_track(def: &RefTrackDef) -> TrackConfig {
    match def.data {
        [single] => source_track(single).with_name(def.text.to_string()),
        sources => TrackConfig::Merged(MergedTrack {
            name: def.text.to_string(),
            height: None,
            tracks: sources.iter().map(source_track).collect(),
        }),
    }
}

/// Tracks for the selected labels, in catalog order. Labels not present in
/// the catalog are ignored.
pub fn resolve_ref_tracks<S: AsRef<str>>(defs: &[RefTrackDef], selected: &[S]) -> Vec<TrackConfig> {
    for label in selected {
        if !defs.iter().any(|d| d.text == label.as_ref()) {
            tracing::debug!(label = label.as_ref(), "ignoring unknown reference track label");
        }
    }
    defs.iter()
        .filter(|def| selected.iter().any(|s| s.as_ref() == def.text))
        .map(resolve_ref_track)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/mod.rs"]
mod tests;
