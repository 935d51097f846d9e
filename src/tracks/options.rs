use crate::model::pedigree::Individual;
use crate::model::sample::SampleDescriptor;
use crate::model::track::{CramProxy, JunctionDisplay};

pub const ALIGNMENT_SHADING: &str = "strand";
pub const ALIGNMENT_FORMAT_CRAM: &str = "cram";
pub const ALIGNMENT_FORMAT_BAM: &str = "bam";
pub const CRAM_INDEX_SUFFIX: &str = ".crai";
pub const TABIX_INDEX_SUFFIX: &str = ".tbi";

pub const CRAM_PROXY: CramProxy = CramProxy {
    source_type: "pysam",
    alignment_file: "/placeholder.cram",
    reference_file: "/placeholder.fa",
};

#[derive(Debug, Clone, Copy)]
pub struct CoverageDefaults {
    pub format: &'static str,
    pub height: u32,
}

pub const COVERAGE_DEFAULTS: CoverageDefaults = CoverageDefaults {
    format: "bigwig",
    height: 170,
};

#[derive(Debug, Clone, Copy)]
pub struct JunctionDefaults {
    pub format: &'static str,
    pub height: u32,
    pub display: JunctionDisplay,
}

pub const JUNCTION_DEFAULTS: JunctionDefaults = JunctionDefaults {
    format: "bed",
    height: 170,
    display: JunctionDisplay {
        min_uniquely_mapped_reads: 0,
        min_total_reads: 1,
        max_fraction_multi_mapped_reads: 1,
        min_spliced_alignment_overhang: 0,
        color_by: "isAnnotatedJunction",
        label_unique_read_count: true,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct GcnvDefaults {
    pub format: &'static str,
    pub height: u32,
    pub min: u32,
    pub max: u32,
    pub autoscale: bool,
    pub only_handle_clicks_for_highlighted_samples: bool,
}

pub const GCNV_DEFAULTS: GcnvDefaults = GcnvDefaults {
    format: "gcnv",
    height: 200,
    min: 0,
    max: 5,
    autoscale: true,
    only_handle_clicks_for_highlighted_samples: true,
};

/// Percent-encodes everything except the characters `encodeURIComponent`
/// leaves untouched.
pub fn encode_uri_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

pub fn sample_url(sample: &SampleDescriptor) -> String {
    format!(
        "/api/project/{}/igv_track/{}",
        sample.project_guid,
        encode_uri_component(&sample.file_path)
    )
}

pub fn track_name(individual: &Individual) -> String {
    format!("{} {}", individual.pedigree_glyph(), individual.display_label())
}

#[cfg(test)]
#[path = "../../tests/src_inline/tracks/options.rs"]
mod tests;
