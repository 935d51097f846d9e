use std::sync::LazyLock;

use serde::Serialize;

use crate::model::build::{GenomeBuild, LookupFailure};

const BASE_REFERENCE_URL: &str = "/api/igv_genomes";

#[derive(Debug, Clone, Copy)]
struct BuildPaths {
    grch37: &'static str,
    grch38: &'static str,
}

impl BuildPaths {
    fn get(&self, build: GenomeBuild) -> &'static str {
        match build {
            GenomeBuild::Grch37 => self.grch37,
            GenomeBuild::Grch38 => self.grch38,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ReferenceTrackDef {
    name: &'static str,
    base_url: &'static str,
    path: BuildPaths,
    index_postfix: Option<&'static str>,
    format: &'static str,
    visibility_window: Option<i64>,
    order: u32,
}

const FASTA: (&str, BuildPaths) = (
    "/api/igv_genomes/broadinstitute.org/genomes/seq",
    BuildPaths {
        grch37: "hg19/hg19.fasta",
        grch38: "hg38/hg38.fa",
    },
);

const CYTOBAND: (&str, BuildPaths) = (
    BASE_REFERENCE_URL,
    BuildPaths {
        grch37: "broadinstitute.org/genomes/seq/hg19/cytoBand.txt",
        grch38: "org.genomes/hg38/annotations/cytoBandIdeo.txt.gz",
    },
);

const ALIAS: (&str, BuildPaths) = (
    "/api/igv_genomes/org.genomes",
    BuildPaths {
        grch37: "hg19/hg19_alias.tab",
        grch38: "hg38/hg38_alias.tab",
    },
);

const REFERENCE_TRACKS: &[ReferenceTrackDef] = &[
    ReferenceTrackDef {
        name: "Gencode v32",
        base_url: "https://storage.googleapis.com/seqr-reference-data",
        path: BuildPaths {
            grch37: "GRCh37/gencode/gencode.v32lift37.annotation.sorted.bed.gz",
            grch38: "GRCh38/gencode/gencode_v32_knownGene.sorted.txt.gz",
        },
        index_postfix: Some("tbi"),
        format: "refgene",
        visibility_window: None,
        order: 1000,
    },
    ReferenceTrackDef {
        name: "Refseq",
        base_url: "/api/igv_genomes/org.genomes",
        path: BuildPaths {
            grch37: "hg19/refGene.sorted.txt.gz",
            grch38: "hg38/refGene.sorted.txt.gz",
        },
        index_postfix: Some("tbi"),
        format: "refgene",
        visibility_window: Some(-1),
        order: 1001,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTrack {
    pub name: &'static str,
    pub url: String,
    #[serde(rename = "indexURL")]
    pub index_url: Option<String>,
    pub format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_window: Option<i64>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceGenome {
    pub id: &'static str,
    #[serde(rename = "fastaURL")]
    pub fasta_url: String,
    #[serde(rename = "cytobandURL")]
    pub cytoband_url: String,
    #[serde(rename = "aliasURL")]
    pub alias_url: String,
    pub tracks: Vec<ReferenceTrack>,
}

struct ReferenceLookup {
    grch37: ReferenceGenome,
    grch38: ReferenceGenome,
}

static REFERENCE_LOOKUP: LazyLock<ReferenceLookup> = LazyLock::new(|| ReferenceLookup {
    grch37: build_reference(GenomeBuild::Grch37),
    grch38: build_reference(GenomeBuild::Grch38),
});

fn build_reference(build: GenomeBuild) -> ReferenceGenome {
    let join = |(base, paths): (&str, BuildPaths)| format!("{}/{}", base, paths.get(build));
    let tracks = REFERENCE_TRACKS
        .iter()
        .map(|def| {
            let url = format!("{}/{}", def.base_url, def.path.get(build));
            ReferenceTrack {
                name: def.name,
                index_url: def.index_postfix.map(|postfix| format!("{}.{}", url, postfix)),
                url,
                format: def.format,
                visibility_window: def.visibility_window,
                order: def.order,
            }
        })
        .collect();
    ReferenceGenome {
        id: build.display_id(),
        fasta_url: join(FASTA),
        cytoband_url: join(CYTOBAND),
        alias_url: join(ALIAS),
        tracks,
    }
}

pub fn reference_for(build: GenomeBuild) -> &'static ReferenceGenome {
    match build {
        GenomeBuild::Grch37 => &REFERENCE_LOOKUP.grch37,
        GenomeBuild::Grch38 => &REFERENCE_LOOKUP.grch38,
    }
}

pub fn reference_for_version(
    genome_version: &str,
) -> Result<&'static ReferenceGenome, LookupFailure> {
    Ok(reference_for(GenomeBuild::parse(genome_version)?))
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/reference.rs"]
mod tests;
