pub mod options;

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::model::pedigree::Individual;
use crate::model::sample::{FamilySamples, SampleDescriptor, TrackType};
use crate::model::track::{
    AlignmentTrack, CoverageTrack, GcnvTrack, HighlightColor, JunctionTrack, MergedTrack,
    TrackConfig,
};
use options::{
    ALIGNMENT_FORMAT_BAM, ALIGNMENT_FORMAT_CRAM, ALIGNMENT_SHADING, COVERAGE_DEFAULTS,
    CRAM_INDEX_SUFFIX, CRAM_PROXY, GCNV_DEFAULTS, JUNCTION_DEFAULTS, TABIX_INDEX_SUFFIX,
    sample_url, track_name,
};

/// gCNV samples grouped by shared source file, members in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GcnvBatches {
    pub by_file: IndexMap<String, Vec<(String, Option<String>)>>,
}

impl GcnvBatches {
    /// Members missing from `individuals` are left out, so the lead is
    /// always an individual that can be rendered.
    pub fn from_samples(
        samples: &FamilySamples,
        individuals: &IndexMap<String, Individual>,
    ) -> Self {
        let mut by_file: IndexMap<String, Vec<(String, Option<String>)>> = IndexMap::new();
        if let Some(gcnv) = samples.samples(TrackType::Gcnv) {
            for (individual_guid, sample) in gcnv {
                if !individuals.contains_key(individual_guid) {
                    tracing::warn!(
                        individual_guid = individual_guid.as_str(),
                        "gCNV batch member missing from snapshot"
                    );
                    continue;
                }
                by_file
                    .entry(sample.file_path.clone())
                    .or_default()
                    .push((individual_guid.clone(), sample.sample_id.clone()));
            }
        }
        Self { by_file }
    }

    pub fn members(&self, file_path: &str) -> &[(String, Option<String>)] {
        self.by_file.get(file_path).map(Vec::as_slice).unwrap_or_default()
    }

    /// Lexicographically first individual guid of the batch.
    pub fn lead(&self, file_path: &str) -> Option<&str> {
        self.members(file_path)
            .iter()
            .map(|(guid, _)| guid.as_str())
            .min()
    }
}

/// Everything the per-type resolvers read while building one track list.
pub struct TrackContext<'a> {
    pub samples: &'a FamilySamples,
    pub individuals: &'a IndexMap<String, Individual>,
    pub sample_types: &'a [TrackType],
    pub gcnv_batches: GcnvBatches,
}

impl<'a> TrackContext<'a> {
    pub fn new(
        samples: &'a FamilySamples,
        individuals: &'a IndexMap<String, Individual>,
        sample_types: &'a [TrackType],
    ) -> Self {
        Self {
            samples,
            individuals,
            sample_types,
            gcnv_batches: GcnvBatches::from_samples(samples, individuals),
        }
    }

    fn selected_sample(
        &self,
        track_type: TrackType,
        individual_guid: &str,
    ) -> Option<&'a SampleDescriptor> {
        if !self.sample_types.contains(&track_type) {
            return None;
        }
        self.samples.sample(track_type, individual_guid)
    }
}

/// Track for one sample with the type defaults applied, before any
/// cross-sample merging or suppression.
pub fn build_track(
    track_type: TrackType,
    sample: &SampleDescriptor,
    individual: &Individual,
) -> TrackConfig {
    let url = sample_url(sample);
    let name = track_name(individual);
    match track_type {
        TrackType::Alignment => TrackConfig::Alignment(alignment_track(name, url, sample)),
        TrackType::Coverage => TrackConfig::Coverage(CoverageTrack {
            name: Some(name),
            url,
            format: COVERAGE_DEFAULTS.format,
            height: Some(COVERAGE_DEFAULTS.height),
            index_url: None,
        }),
        TrackType::Junction => TrackConfig::Junction(JunctionTrack {
            name: Some(name),
            index_url: Some(format!("{}{}", url, TABIX_INDEX_SUFFIX)),
            url,
            format: JUNCTION_DEFAULTS.format,
            height: Some(JUNCTION_DEFAULTS.height),
            display: Some(JUNCTION_DEFAULTS.display),
        }),
        TrackType::Gcnv => {
            let mut highlight_samples = BTreeMap::new();
            highlight_samples.insert(
                highlight_key(sample, individual),
                highlight_color(individual),
            );
            TrackConfig::Gcnv(GcnvTrack {
                name,
                index_url: format!("{}{}", url, TABIX_INDEX_SUFFIX),
                url,
                format: GCNV_DEFAULTS.format,
                height: GCNV_DEFAULTS.height,
                min: GCNV_DEFAULTS.min,
                max: GCNV_DEFAULTS.max,
                autoscale: GCNV_DEFAULTS.autoscale,
                only_handle_clicks_for_highlighted_samples: GCNV_DEFAULTS
                    .only_handle_clicks_for_highlighted_samples,
                highlight_samples,
            })
        }
    }
}

fn alignment_track(name: String, url: String, sample: &SampleDescriptor) -> AlignmentTrack {
    let mut track = AlignmentTrack {
        name,
        url,
        format: ALIGNMENT_FORMAT_CRAM,
        alignment_shading: ALIGNMENT_SHADING,
        show_soft_clips: true,
        index_url: None,
        indexed: None,
        proxy: None,
    };
    if sample.is_cram() {
        if sample.is_remote() {
            track.index_url = Some(format!("{}{}", track.url, CRAM_INDEX_SUFFIX));
        } else {
            track.proxy = Some(CRAM_PROXY);
        }
    } else {
        track.format = ALIGNMENT_FORMAT_BAM;
        track.indexed = Some(true);
    }
    track
}

fn highlight_key(sample: &SampleDescriptor, individual: &Individual) -> String {
    sample
        .sample_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| individual.individual_id.clone())
}

fn highlight_color(individual: &Individual) -> HighlightColor {
    if individual.is_affected() {
        HighlightColor::Red
    } else {
        HighlightColor::Blue
    }
}

/// Resolves one (type, individual) pair. `None` means the sample is not
/// rendered on its own: subsumed into a merged junction track, a non-lead
/// gCNV batch member, or an individual missing from the snapshot.
pub fn resolve_sample_track(
    ctx: &TrackContext<'_>,
    track_type: TrackType,
    individual_guid: &str,
    sample: &SampleDescriptor,
) -> Option<TrackConfig> {
    let Some(individual) = ctx.individuals.get(individual_guid) else {
        tracing::warn!(
            individual_guid,
            track_type = track_type.key(),
            "sample references an unknown individual; skipping"
        );
        return None;
    };
    match track_type {
        TrackType::Alignment => Some(build_track(track_type, sample, individual)),
        TrackType::Coverage => resolve_coverage(ctx, individual_guid, sample, individual),
        TrackType::Junction => Some(resolve_junction(ctx, individual_guid, sample, individual)),
        TrackType::Gcnv => resolve_gcnv(ctx, individual_guid, sample, individual),
    }
}

fn resolve_coverage(
    ctx: &TrackContext<'_>,
    individual_guid: &str,
    sample: &SampleDescriptor,
    individual: &Individual,
) -> Option<TrackConfig> {
    if ctx.selected_sample(TrackType::Junction, individual_guid).is_some() {
        tracing::debug!(individual_guid, "coverage shown inside merged junction track");
        return None;
    }
    Some(build_track(TrackType::Coverage, sample, individual))
}

fn resolve_junction(
    ctx: &TrackContext<'_>,
    individual_guid: &str,
    sample: &SampleDescriptor,
    individual: &Individual,
) -> TrackConfig {
    let junction = build_track(TrackType::Junction, sample, individual);
    let Some(coverage_sample) = ctx.selected_sample(TrackType::Coverage, individual_guid) else {
        return junction;
    };
    let coverage = build_track(TrackType::Coverage, coverage_sample, individual);
    let name = junction.name().unwrap_or_default().to_string();
    TrackConfig::Merged(MergedTrack {
        name,
        height: Some(JUNCTION_DEFAULTS.height),
        tracks: vec![coverage, junction],
    })
}

fn resolve_gcnv(
    ctx: &TrackContext<'_>,
    individual_guid: &str,
    sample: &SampleDescriptor,
    individual: &Individual,
) -> Option<TrackConfig> {
    let batches = &ctx.gcnv_batches;
    if batches.lead(&sample.file_path) != Some(individual_guid) {
        return None;
    }
    let TrackConfig::Gcnv(mut track) = build_track(TrackType::Gcnv, sample, individual) else {
        return None;
    };

    let members = batches.members(&sample.file_path);
    let mut highlight_samples = BTreeMap::new();
    for (member_guid, sample_id) in members {
        let Some(member) = ctx.individuals.get(member_guid) else {
            continue;
        };
        let key = sample_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| member.individual_id.clone());
        highlight_samples.entry(key).or_insert_with(|| highlight_color(member));
    }
    track.highlight_samples = highlight_samples;

    if members.len() > 1 {
        let mut guids: Vec<&str> = members.iter().map(|(guid, _)| guid.as_str()).collect();
        guids.sort_unstable();
        track.name = guids
            .iter()
            .filter_map(|guid| ctx.individuals.get(*guid))
            .map(|member| member.display_label())
            .collect::<Vec<_>>()
            .join(", ");
    }
    Some(TrackConfig::Gcnv(track))
}

/// Builds the per-sample tracks of one family for the selected track types,
/// in encounter order of (type, individual).
pub fn build_sample_tracks(
    samples: &FamilySamples,
    individuals: &IndexMap<String, Individual>,
    sample_types: &[TrackType],
) -> Vec<TrackConfig> {
    let ctx = TrackContext::new(samples, individuals, sample_types);
    let mut out = Vec::new();
    for (track_type, by_individual) in &samples.by_type {
        if !sample_types.contains(track_type) {
            continue;
        }
        for (individual_guid, sample) in by_individual {
            if let Some(track) = resolve_sample_track(&ctx, *track_type, individual_guid, sample) {
                tracing::debug!(
                    individual_guid = individual_guid.as_str(),
                    kind = track.kind(),
                    url = track.url().unwrap_or("-"),
                    "resolved sample track"
                );
                out.push(track);
            }
        }
    }
    tracing::debug!(n_tracks = out.len(), "built sample tracks");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/tracks/mod.rs"]
mod tests;
