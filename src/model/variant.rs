use indexmap::IndexMap;
use serde::Deserialize;

use crate::model::null_as_default;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genotype {
    #[serde(default)]
    pub num_alt: Option<i32>,
    #[serde(default)]
    pub cn: Option<i32>,
    #[serde(default)]
    pub sample_type: Option<String>,
    #[serde(default)]
    pub ad: Option<String>,
    #[serde(default)]
    pub dp: Option<i64>,
    #[serde(default)]
    pub gq: Option<i64>,
    #[serde(default)]
    pub ab: Option<f64>,
    #[serde(default)]
    pub pl: Option<String>,
    #[serde(default)]
    pub qs: Option<f64>,
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub end: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub defragged: bool,
    #[serde(default)]
    pub other_sample: Option<Box<Genotype>>,
}

impl Genotype {
    pub fn has_snp_call(&self) -> bool {
        self.num_alt.is_some_and(|n| n >= 0)
    }

    pub fn has_copy_number(&self) -> bool {
        self.cn.is_some_and(|cn| cn >= 0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default, deserialize_with = "null_as_default")]
    pub variant_id: String,
    pub chrom: String,
    pub pos: u64,
    #[serde(default)]
    pub end: Option<u64>,
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub ref_allele: String,
    #[serde(rename = "alt", default, deserialize_with = "null_as_default")]
    pub alt_allele: String,
    pub genome_version: String,
    #[serde(default)]
    pub lifted_over_pos: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub family_guids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genotypes: IndexMap<String, Genotype>,
    #[serde(default)]
    pub sv_type: Option<String>,
    #[serde(default)]
    pub original_alt_alleles: Option<Vec<String>>,
    #[serde(default)]
    pub genotype_filters: Option<String>,
}

impl Variant {
    pub fn is_structural(&self) -> bool {
        self.sv_type.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn genotype(&self, individual_guid: &str) -> Option<&Genotype> {
        self.genotypes.get(individual_guid)
    }

    /// Chromosome without a `chr` prefix, as used by the PAR table.
    pub fn bare_chrom(&self) -> &str {
        self.chrom.strip_prefix("chr").unwrap_or(&self.chrom)
    }
}
