use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CramProxy {
    pub source_type: &'static str,
    pub alignment_file: &'static str,
    pub reference_file: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentTrack {
    pub name: String,
    pub url: String,
    pub format: &'static str,
    pub alignment_shading: &'static str,
    pub show_soft_clips: bool,
    #[serde(rename = "indexURL", skip_serializing_if = "Option::is_none")]
    pub index_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(flatten)]
    pub proxy: Option<CramProxy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageTrack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub url: String,
    pub format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(rename = "indexURL", skip_serializing_if = "Option::is_none")]
    pub index_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JunctionDisplay {
    pub min_uniquely_mapped_reads: u32,
    pub min_total_reads: u32,
    pub max_fraction_multi_mapped_reads: u32,
    pub min_spliced_alignment_overhang: u32,
    pub color_by: &'static str,
    pub label_unique_read_count: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JunctionTrack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub url: String,
    pub format: &'static str,
    #[serde(rename = "indexURL", skip_serializing_if = "Option::is_none")]
    pub index_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(flatten)]
    pub display: Option<JunctionDisplay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GcnvTrack {
    pub name: String,
    pub url: String,
    pub format: &'static str,
    #[serde(rename = "indexURL")]
    pub index_url: String,
    pub height: u32,
    pub min: u32,
    pub max: u32,
    pub autoscale: bool,
    pub only_handle_clicks_for_highlighted_samples: bool,
    pub highlight_samples: BTreeMap<String, HighlightColor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationTrack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub url: String,
    pub format: &'static str,
    #[serde(rename = "indexURL", skip_serializing_if = "Option::is_none")]
    pub index_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedTrack {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub tracks: Vec<TrackConfig>,
}

/// One entry of the list handed to the genome viewer. The variant decides
/// the serialized `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TrackConfig {
    #[serde(rename = "alignment")]
    Alignment(AlignmentTrack),
    #[serde(rename = "wig")]
    Coverage(CoverageTrack),
    #[serde(rename = "spliceJunctions")]
    Junction(JunctionTrack),
    #[serde(rename = "gcnv")]
    Gcnv(GcnvTrack),
    #[serde(rename = "annotation")]
    Annotation(AnnotationTrack),
    #[serde(rename = "merged")]
    Merged(MergedTrack),
}

impl TrackConfig {
    pub fn name(&self) -> Option<&str> {
        match self {
            TrackConfig::Alignment(t) => Some(&t.name),
            TrackConfig::Coverage(t) => t.name.as_deref(),
            TrackConfig::Junction(t) => t.name.as_deref(),
            TrackConfig::Gcnv(t) => Some(&t.name),
            TrackConfig::Annotation(t) => t.name.as_deref(),
            TrackConfig::Merged(t) => Some(&t.name),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TrackConfig::Alignment(t) => Some(&t.url),
            TrackConfig::Coverage(t) => Some(&t.url),
            TrackConfig::Junction(t) => Some(&t.url),
            TrackConfig::Gcnv(t) => Some(&t.url),
            TrackConfig::Annotation(t) => Some(&t.url),
            TrackConfig::Merged(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TrackConfig::Alignment(_) => "alignment",
            TrackConfig::Coverage(_) => "wig",
            TrackConfig::Junction(_) => "spliceJunctions",
            TrackConfig::Gcnv(_) => "gcnv",
            TrackConfig::Annotation(_) => "annotation",
            TrackConfig::Merged(_) => "merged",
        }
    }

    pub fn with_name(self, name: String) -> Self {
        match self {
            TrackConfig::Alignment(t) => TrackConfig::Alignment(AlignmentTrack { name, ..t }),
            TrackConfig::Coverage(t) => TrackConfig::Coverage(CoverageTrack {
                name: Some(name),
                ..t
            }),
            TrackConfig::Junction(t) => TrackConfig::Junction(JunctionTrack {
                name: Some(name),
                ..t
            }),
            TrackConfig::Gcnv(t) => TrackConfig::Gcnv(GcnvTrack { name, ..t }),
            TrackConfig::Annotation(t) => TrackConfig::Annotation(AnnotationTrack {
                name: Some(name),
                ..t
            }),
            TrackConfig::Merged(t) => TrackConfig::Merged(MergedTrack { name, ..t }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/track.rs"]
mod tests;
