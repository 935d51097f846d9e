use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrackType {
    Alignment,
    Coverage,
    Junction,
    Gcnv,
}

pub const TRACK_TYPES: &[TrackType] = &[
    TrackType::Alignment,
    TrackType::Coverage,
    TrackType::Junction,
    TrackType::Gcnv,
];

impl TrackType {
    /// Key used by the backend sample map and the viewer `type` field.
    pub fn key(&self) -> &'static str {
        match self {
            TrackType::Alignment => "alignment",
            TrackType::Coverage => "wig",
            TrackType::Junction => "spliceJunctions",
            TrackType::Gcnv => "gcnv",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        TRACK_TYPES.iter().copied().find(|t| t.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDescriptor {
    pub file_path: String,
    #[serde(default)]
    pub sample_id: Option<String>,
    pub project_guid: String,
}

impl SampleDescriptor {
    pub fn is_cram(&self) -> bool {
        self.file_path.ends_with(".cram")
    }

    pub fn is_remote(&self) -> bool {
        self.file_path.starts_with("gs://")
    }
}

/// Samples of one family: track type -> individual guid -> descriptor,
/// both levels in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilySamples {
    pub by_type: IndexMap<TrackType, IndexMap<String, SampleDescriptor>>,
}

impl FamilySamples {
    pub fn samples(&self, track_type: TrackType) -> Option<&IndexMap<String, SampleDescriptor>> {
        self.by_type.get(&track_type).filter(|m| !m.is_empty())
    }

    pub fn has_type(&self, track_type: TrackType) -> bool {
        self.samples(track_type).is_some()
    }

    pub fn sample(
        &self,
        track_type: TrackType,
        individual_guid: &str,
    ) -> Option<&SampleDescriptor> {
        self.by_type.get(&track_type)?.get(individual_guid)
    }

    pub fn track_types(&self) -> impl Iterator<Item = TrackType> + '_ {
        self.by_type
            .iter()
            .filter(|(_, samples)| !samples.is_empty())
            .map(|(t, _)| *t)
    }

    pub fn is_empty(&self) -> bool {
        self.track_types().next().is_none()
    }
}
