use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::model::null_as_default;
use crate::model::pedigree::Individual;
use crate::model::sample::{FamilySamples, SampleDescriptor, TrackType};
use crate::model::variant::Variant;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub family_guid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub family_id: String,
    pub project_guid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub individual_guids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_guid: String,
    pub genome_version: String,
}

/// family guid -> track type key -> individual guid -> sample.
pub type RawSampleMap = IndexMap<String, IndexMap<String, IndexMap<String, SampleDescriptor>>>;

/// Read-only backend state handed to the core for one render.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub individuals_by_guid: IndexMap<String, Individual>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub families_by_guid: IndexMap<String, Family>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects_by_guid: IndexMap<String, Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub igv_samples_by_family_sample_individual: RawSampleMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<Variant>,
}

impl Snapshot {
    pub fn family(&self, family_guid: &str) -> Result<&Family, InputError> {
        self.families_by_guid
            .get(family_guid)
            .ok_or_else(|| InputError::NotFound(format!("family {family_guid}")))
    }

    pub fn project(&self, family: &Family) -> Option<&Project> {
        self.projects_by_guid.get(&family.project_guid)
    }

    pub fn variant(&self, variant_id: &str) -> Result<&Variant, InputError> {
        self.variants
            .iter()
            .find(|v| v.variant_id == variant_id)
            .ok_or_else(|| InputError::NotFound(format!("variant {variant_id}")))
    }

    /// Samples of a family keyed by track type. Unknown type keys are skipped.
    pub fn family_samples(&self, family_guid: &str) -> FamilySamples {
        let mut out = FamilySamples::default();
        let Some(by_key) = self.igv_samples_by_family_sample_individual.get(family_guid) else {
            return out;
        };
        for (key, samples) in by_key {
            let Some(track_type) = TrackType::from_key(key) else {
                tracing::warn!(family_guid, key = key.as_str(), "skipping unknown sample type");
                continue;
            };
            out.by_type
                .entry(track_type)
                .or_default()
                .extend(samples.iter().map(|(guid, s)| (guid.clone(), s.clone())));
        }
        out
    }

    /// Members of a family in the family's listed order; unknown guids skipped.
    pub fn family_members(&self, family: &Family) -> Vec<&Individual> {
        family
            .individual_guids
            .iter()
            .filter_map(|guid| {
                let individual = self.individuals_by_guid.get(guid);
                if individual.is_none() {
                    tracing::debug!(
                        individual_guid = guid.as_str(),
                        "family member missing from snapshot"
                    );
                }
                individual
            })
            .collect()
    }
}

fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = BufReader::new(File::open(path)?);
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot, InputError> {
    let reader = open_maybe_gz(path)?;
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    tracing::info!(
        path = %path.display(),
        individuals = snapshot.individuals_by_guid.len(),
        families = snapshot.families_by_guid.len(),
        variants = snapshot.variants.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
