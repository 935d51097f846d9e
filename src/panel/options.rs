use serde::Serialize;

use crate::catalog::SelectOption;
use crate::model::sample::{FamilySamples, TrackType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackTypeOption {
    pub value: TrackType,
    pub text: &'static str,
    pub description: Option<&'static str>,
}

pub const DNA_TRACK_TYPE_OPTIONS: &[TrackTypeOption] = &[
    TrackTypeOption {
        value: TrackType::Alignment,
        text: "Alignment",
        description: Some("BAMs/CRAMs"),
    },
    TrackTypeOption {
        value: TrackType::Gcnv,
        text: "gCNV",
        description: None,
    },
];

pub const RNA_TRACK_TYPE_OPTIONS: &[TrackTypeOption] = &[
    TrackTypeOption {
        value: TrackType::Junction,
        text: "Splice Junctions",
        description: None,
    },
    TrackTypeOption {
        value: TrackType::Coverage,
        text: "Coverage",
        description: Some("RNASeq coverage"),
    },
];

pub fn is_dna_request(types: &[TrackType]) -> bool {
    DNA_TRACK_TYPE_OPTIONS
        .iter()
        .any(|opt| types.contains(&opt.value))
}

/// Options whose track type actually has samples in the family.
pub fn available_options(
    options: &[TrackTypeOption],
    samples: &FamilySamples,
) -> Vec<SelectOption> {
    options
        .iter()
        .filter(|opt| samples.has_type(opt.value))
        .map(|opt| SelectOption {
            value: opt.value.key(),
            text: opt.text,
            description: opt.description,
        })
        .collect()
}

/// Static options of the embedded genome viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgvOptions {
    pub load_default_genomes: bool,
    pub show_karyo: bool,
    pub show_ideogram: bool,
    pub show_navigation: bool,
    pub show_ruler: bool,
    pub show_center_guide: bool,
    pub show_cursor_tracking_guide: bool,
    pub show_command_bar: bool,
}

impl IgvOptions {
    pub fn default_v1() -> Self {
        Self {
            load_default_genomes: false,
            show_karyo: false,
            show_ideogram: true,
            show_navigation: true,
            show_ruler: true,
            show_center_guide: true,
            show_cursor_tracking_guide: true,
            show_command_bar: true,
        }
    }
}
