pub mod buttons;
pub mod options;

use serde::Serialize;

use crate::catalog::reference::{ReferenceGenome, reference_for_version};
use crate::catalog::{OverlayCatalog, SelectOption};
use crate::input::{InputError, Snapshot};
use crate::model::sample::TrackType;
use crate::model::track::TrackConfig;
use crate::model::variant::Variant;
use crate::tracks::build_sample_tracks;
use options::{
    DNA_TRACK_TYPE_OPTIONS, IgvOptions, RNA_TRACK_TYPE_OPTIONS, available_options, is_dna_request,
};

/// Bases shown on either side of the variant position.
pub const LOCUS_FLANK: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenPanel {
    pub family_guid: String,
    pub dna_types: Vec<TrackType>,
    pub rna_types: Vec<TrackType>,
    pub gtex_refs: Vec<String>,
    pub mappability_refs: Vec<String>,
}

impl OpenPanel {
    /// DNA selections first, then RNA, as the track list is built.
    pub fn sample_types(&self) -> Vec<TrackType> {
        self.dna_types.iter().chain(&self.rna_types).copied().collect()
    }
}

/// At most one family panel is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open(OpenPanel),
}

/// Replacement of one selection set of the open panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    DnaTypes(Vec<TrackType>),
    RnaTypes(Vec<TrackType>),
    GtexRefs(Vec<String>),
    MappabilityRefs(Vec<String>),
}

/// A single checkbox flip within one selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    DnaType(TrackType),
    RnaType(TrackType),
    GtexRef(String),
    MappabilityRef(String),
}

fn toggle_item<T: PartialEq>(set: &mut Vec<T>, item: T) {
    match set.iter().position(|v| *v == item) {
        Some(idx) => {
            set.remove(idx);
        }
        None => set.push(item),
    }
}

fn dedup_types(types: &[TrackType]) -> Vec<TrackType> {
    let mut out = Vec::with_capacity(types.len());
    for t in types {
        if !out.contains(t) {
            out.push(*t);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgvView {
    pub tracks: Vec<TrackConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<&'static ReferenceGenome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locus: Option<String>,
    #[serde(flatten)]
    pub options: IgvOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub family_guid: String,
    pub dna_options: Vec<SelectOption>,
    pub rna_options: Vec<SelectOption>,
    pub gtex_options: Vec<SelectOption>,
    pub mappability_options: Vec<SelectOption>,
    pub igv: IgvView,
}

/// `chr<chrom>:<pos-100>-<pos+100>`, preferring the lifted-over position
/// when the variant was called on another build than the project's.
pub fn variant_locus(variant: &Variant, project_genome_version: Option<&str>) -> String {
    let pos = match (project_genome_version, variant.lifted_over_pos) {
        (Some(project), Some(lifted)) if project != variant.genome_version => lifted,
        _ => variant.pos,
    };
    format!(
        "chr{}:{}-{}",
        variant.bare_chrom(),
        pos.saturating_sub(LOCUS_FLANK),
        pos + LOCUS_FLANK
    )
}

/// Sole owner of the panel selection state.
#[derive(Debug, Clone, Default)]
pub struct PanelController {
    state: PanelState,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn open_family(&self) -> Option<&str> {
        match &self.state {
            PanelState::Open(open) => Some(open.family_guid.as_str()),
            PanelState::Closed => None,
        }
    }

    /// Opens `family_guid` with `types` selected, closing any other family.
    pub fn show_reads(&mut self, family_guid: &str, types: &[TrackType]) {
        let types = dedup_types(types);
        let mut open = OpenPanel {
            family_guid: family_guid.to_string(),
            ..OpenPanel::default()
        };
        if is_dna_request(&types) {
            open.dna_types = types;
        } else {
            open.rna_types = types;
        }
        if let PanelState::Open(prev) = &self.state {
            if prev.family_guid != family_guid {
                tracing::debug!(
                    closed = prev.family_guid.as_str(),
                    opened = family_guid,
                    "switching open family"
                );
            }
        }
        self.state = PanelState::Open(open);
    }

    pub fn hide_reads(&mut self) {
        self.state = PanelState::Closed;
    }

    /// Replaces the targeted set; no-op while closed.
    pub fn update_selection(&mut self, selection: Selection) {
        let PanelState::Open(open) = &mut self.state else {
            return;
        };
        match selection {
            Selection::DnaTypes(types) => open.dna_types = dedup_types(&types),
            Selection::RnaTypes(types) => open.rna_types = dedup_types(&types),
            Selection::GtexRefs(refs) => open.gtex_refs = refs,
            Selection::MappabilityRefs(refs) => open.mappability_refs = refs,
        }
    }

    pub fn toggle(&mut self, toggle: Toggle) {
        let PanelState::Open(open) = &mut self.state else {
            return;
        };
        match toggle {
            Toggle::DnaType(t) => toggle_item(&mut open.dna_types, t),
            Toggle::RnaType(t) => toggle_item(&mut open.rna_types, t),
            Toggle::GtexRef(label) => toggle_item(&mut open.gtex_refs, label),
            Toggle::MappabilityRef(label) => toggle_item(&mut open.mappability_refs, label),
        }
    }

    /// Recomputes the options and viewer tracks of the open family. `None`
    /// while closed or when the family has no samples at all.
    pub fn render(
        &self,
        snapshot: &Snapshot,
        variant: Option<&Variant>,
    ) -> Result<Option<PanelView>, InputError> {
        let PanelState::Open(open) = &self.state else {
            return Ok(None);
        };
        let family = snapshot.family(&open.family_guid)?;
        let samples = snapshot.family_samples(&family.family_guid);
        if samples.is_empty() {
            tracing::debug!(
                family_guid = family.family_guid.as_str(),
                "family has no samples to show"
            );
            return Ok(None);
        }

        let project = snapshot.project(family);
        if project.is_none() {
            tracing::warn!(
                project_guid = family.project_guid.as_str(),
                "project missing from snapshot"
            );
        }
        let genome_version = project.map(|p| p.genome_version.as_str());
        let reference = genome_version.and_then(|version| match reference_for_version(version) {
            Ok(reference) => Some(reference),
            Err(err) => {
                tracing::warn!("{err}; viewer has no reference genome");
                None
            }
        });

        let mut tracks =
            build_sample_tracks(&samples, &snapshot.individuals_by_guid, &open.sample_types());
        tracks.extend(OverlayCatalog::Mappability.resolve(&open.mappability_refs));
        tracks.extend(OverlayCatalog::Gtex.resolve(&open.gtex_refs));

        Ok(Some(PanelView {
            family_guid: family.family_guid.clone(),
            dna_options: available_options(DNA_TRACK_TYPE_OPTIONS, &samples),
            rna_options: available_options(RNA_TRACK_TYPE_OPTIONS, &samples),
            gtex_options: OverlayCatalog::Gtex.options(),
            mappability_options: OverlayCatalog::Mappability.options(),
            igv: IgvView {
                tracks,
                reference,
                locus: variant.map(|v| variant_locus(v, genome_version)),
                options: IgvOptions::default_v1(),
            },
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/panel/mod.rs"]
mod tests;
