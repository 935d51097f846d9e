#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSourceKind {
    Coverage,
    Junctions,
    Gtf,
}

#[derive(Debug, Clone, Copy)]
pub struct RefSource {
    pub kind: RefSourceKind,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RefTrackDef {
    pub text: &'static str,
    pub description: &'static str,
    pub data: &'static [RefSource],
}

macro_rules! gtex_sources {
    ($coverage:literal, $junctions:literal) => {
        &[
            RefSource {
                kind: RefSourceKind::Coverage,
                url: concat!(
                    "https://storage.googleapis.com/tgg-viewer/ref/GRCh38/gtex_v8/",
                    $coverage
                ),
            },
            RefSource {
                kind: RefSourceKind::Junctions,
                url: concat!(
                    "https://storage.googleapis.com/tgg-viewer/ref/GRCh38/gtex_v8/",
                    $junctions
                ),
            },
        ]
    };
}

macro_rules! mappability_source {
    ($kind:expr, $path:literal) => {
        &[RefSource {
            kind: $kind,
            url: concat!("https://storage.googleapis.com/tgg-viewer/ref/GRCh38/", $path),
        }]
    };
}

const GTEX_TRACKS: &[RefTrackDef] = &[
    RefTrackDef {
        text: "GTEx Muscle",
        description: "All splice junctions from all 803 GTEx v3 muscle samples. The junction-spanning read counts and read coverage are summed across all samples.",
        data: gtex_sources!(
            "GTEX_muscle.803_samples.bigWig",
            "GTEX_muscle.803_samples.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "GTEx Blood",
        description: "All splice junctions from all 755 GTEx v3 blood samples. The junction-spanning read counts and read coverage are summed across all samples.",
        data: gtex_sources!(
            "GTEX_blood.755_samples.bigWig",
            "GTEX_blood.755_samples.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "GTEx Fibs",
        description: "All splice junctions from all 504 GTEx v3 fibroblast samples. The junction-spanning read counts and read coverage are summed across all samples.",
        data: gtex_sources!(
            "GTEX_fibs.504_samples.bigWig",
            "GTEX_fibs.504_samples.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "GTEx Lymph",
        description: "All splice junctions from all 174 GTEx v3 lymphocyte samples. The junction-spanning read counts and read coverage are summed across all samples.",
        data: gtex_sources!(
            "GTEX_lymphocytes.174_samples.bigWig",
            "GTEX_lymphocytes.174_samples.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "GTEx Brain: Cortex",
        description: "All splice junctions from all 255 GTEx v3 cortex samples. The junction-spanning read counts and read coverage are summed across all samples.",
        data: gtex_sources!(
            "GTEX_brain_cortex.255_samples.bigWig",
            "GTEX_brain_cortex.255_samples.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "GTEx Brain: Front. Cortex",
        description: "All splice junctions from all 209 GTEx v3 frontal cortex samples. The junction-spanning read counts and read coverage are summed across all samples.",
        data: gtex_sources!(
            "GTEX_frontal_cortex.209_samples.bigWig",
            "GTEX_frontal_cortex.209_samples.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "Norm. GTEx Muscle",
        description: "Highly expressed junctions from all 803 GTEx v3 muscle samples. The junction-spanning read counts are normalized to represent the average spanning read count per-sample (see formula below). Only junctions with rounded normalized spanning read count > 0 are included in this track.\n\n  average_unique_reads_per_muscle_sample = (total_unqiue_reads_in_all_muscle_samples / number_of_muscle_samples)\n per_sample_normalized_read_count = raw_read_count * average_unique_reads_per_muscle_sample / total_unqiue_reads_in_this_sample\n normalized read count for junction = sum(per_sample_normalized_read_counts) / number_of_muscle_samples",
        data: gtex_sources!(
            "GTEX_muscle.803_samples.bigWig",
            "GTEX_muscle.803_samples.normalized.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "Norm. GTEx Blood",
        description: "Highly expressed junctions from all 755 GTEx v3 blood samples.\n The junction-spanning read counts are normalized to represent the average spanning read count per-sample (see formula below). Only junctions with rounded normalized spanning read count > 0 are included in this track.\n \n average_unique_reads_per_blood_sample = (total_unqiue_reads_in_all_blood_samples / number_of_blood_samples)\n per_sample_normalized_read_count = raw_read_count * average_unique_reads_per_blood_sample / total_unqiue_reads_in_this_sample\n normalized read count for junction = sum(per_sample_normalized_read_counts) / number_of_blood_samples",
        data: gtex_sources!(
            "GTEX_blood.755_samples.bigWig",
            "GTEX_blood.755_samples.normalized.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "Norm. GTEx Fibs",
        description: "Highly expressed junctions from all 504 GTEx v3 fibroblast samples.\n The junction-spanning read counts are normalized to represent the average spanning read count per-sample (see formula below). Only junctions with rounded normalized spanning read count > 0 are included in this track.\n \n average_unique_reads_per_fibs_sample = (total_unqiue_reads_in_all_fibs_samples / number_of_fibs_samples)\n per_sample_normalized_read_count = raw_read_count * average_unique_reads_per_fibs_sample / total_unqiue_reads_in_this_sample\n normalized read count for junction = sum(per_sample_normalized_read_counts) / number_of_fibs_samples",
        data: gtex_sources!(
            "GTEX_fibs.504_samples.bigWig",
            "GTEX_fibs.504_samples.normalized.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "Norm. GTEx Lymph",
        description: "Highly expressed junctions from all 174 GTEx v3 lymphocyte samples.\n The junction-spanning read counts are normalized to represent the average spanning read count per-sample (see formula below). Only junctions with rounded normalized spanning read count > 0 are included in this track.\n \n average_unique_reads_per_lymph_sample = (total_unqiue_reads_in_all_lymph_samples / number_of_lymph_samples)\n per_sample_normalized_read_count = raw_read_count * average_unique_reads_per_lymph_sample / total_unqiue_reads_in_this_sample\n normalized read count for junction = sum(per_sample_normalized_read_counts) / number_of_lymph_samples",
        data: gtex_sources!(
            "GTEX_lymphocytes.174_samples.bigWig",
            "GTEX_lymphocytes.174_samples.normalized.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "Norm. GTEx Brain: Cortex",
        description: "Highly expressed junctions from all 255 GTEx v3 brain cortex samples.\n The junction-spanning read counts are normalized to represent the average spanning read count per-sample (see formula below).\n Only junctions with rounded normalized spanning read count > 0 are included in this track.\n \n average_unique_reads_per_cortex_sample = (total_unqiue_reads_in_all_cortex_samples / number_of_cortex_samples)\n per_sample_normalized_read_count = raw_read_count * average_unique_reads_per_cortex_sample / total_unqiue_reads_in_this_sample\n normalized read count for junction = sum(per_sample_normalized_read_counts) / number_of_cortex_samples",
        data: gtex_sources!(
            "GTEX_brain_cortex.255_samples.bigWig",
            "GTEX_brain_cortex.255_samples.normalized.junctions.bed.gz"
        ),
    },
    RefTrackDef {
        text: "Norm. GTEx Brain: Front. Cortex",
        description: "Highly expressed junctions from all 209 GTEx v3 brain frontal cortex samples.\n The junction-spanning read counts are normalized to represent the average spanning read count per-sample (see formula below).\n Only junctions with rounded normalized spanning read count > 0 are included in this track.\n \n average_unique_reads_per_cortex_sample = (total_unqiue_reads_in_all_cortex_samples / number_of_cortex_samples)\n per_sample_normalized_read_count = raw_read_count * average_unique_reads_per_cortex_sample / total_unqiue_reads_in_this_sample\n normalized read count for junction = sum(per_sample_normalized_read_counts) / number_of_cortex_samples",
        data: gtex_sources!(
            "GTEX_frontal_cortex.209_samples.bigWig",
            "GTEX_frontal_cortex.209_samples.normalized.junctions.bed.gz"
        ),
    },
];

const MAPPABILITY_TRACKS: &[RefTrackDef] = &[
    RefTrackDef {
        text: "36-mer mappability",
        description: "Mappability of 36-mers allowing for 2 mismatches. Generated using the same pipeline as the UCSC hg19 mappability tracks.",
        data: mappability_source!(
            RefSourceKind::Coverage,
            "mappability/GRCh38_no_alt_analysis_set_GCA_000001405.15-k36_m2.bw"
        ),
    },
    RefTrackDef {
        text: "50-mer mappability",
        description: "Mappability of 50-mers allowing for 2 mismatches. Generated using the same pipeline as the UCSC hg19 mappability tracks.",
        data: mappability_source!(
            RefSourceKind::Coverage,
            "mappability/GRCh38_no_alt_analysis_set_GCA_000001405.15-k50_m2.bw"
        ),
    },
    RefTrackDef {
        text: "75-mer mappability",
        description: "Mappability of 75-mers allowing for 2 mismatches. Generated using the same pipeline as the UCSC hg19 mappability tracks.",
        data: mappability_source!(
            RefSourceKind::Coverage,
            "mappability/GRCh38_no_alt_analysis_set_GCA_000001405.15-k75_m2.bw"
        ),
    },
    RefTrackDef {
        text: "100-mer mappability",
        description: "Mappability of 100-mers allowing for 2 mismatches. Generated using the same pipeline as the UCSC hg19 mappability tracks.",
        data: mappability_source!(
            RefSourceKind::Coverage,
            "mappability/GRCh38_no_alt_analysis_set_GCA_000001405.15-k100_m2.bw"
        ),
    },
    RefTrackDef {
        text: "SegDups >1000 bases",
        description: "Duplications of >1000 Bases of Non-RepeatMasked Sequence downloaded from UCSC",
        data: mappability_source!(RefSourceKind::Gtf, "segdups/segdups.gtf.gz"),
    },
];

pub fn gtex_tracks() -> &'static [RefTrackDef] {
    GTEX_TRACKS
}

pub fn mappability_tracks() -> &'static [RefTrackDef] {
    MAPPABILITY_TRACKS
}
