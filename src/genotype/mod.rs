pub mod alleles;
pub mod details;
pub mod rules;

use indexmap::IndexMap;

use crate::catalog::par::is_hemi_x_variant;
use crate::model::pedigree::Individual;
use crate::model::variant::{Genotype, Variant};
use crate::model::warnings::GenotypeWarning;
use alleles::{AlleleDisplay, copy_number, snp_alleles};
use details::{DetailField, format_allelic_balance, genotype_details};
use rules::{WarningInputs, classify_warning};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherSampleSummary {
    pub conflicting: bool,
    pub details: Vec<DetailField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalledGenotype {
    pub alleles: AlleleDisplay,
    pub warning: Option<GenotypeWarning>,
    pub quality: String,
    /// Present for allele-count calls only; `-` when no balance was recorded.
    pub allelic_balance: Option<String>,
    pub filters: Option<String>,
    pub details: Vec<DetailField>,
    pub other_sample: Option<OtherSampleSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenotypeCall {
    NoCall,
    Called(CalledGenotype),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualRow {
    pub individual_guid: String,
    pub glyph: char,
    pub name: String,
    pub features: Vec<String>,
    pub call: Option<GenotypeCall>,
}

pub fn hemizygous_display(variant: &Variant, individual: &Individual) -> bool {
    match is_hemi_x_variant(variant, individual) {
        Ok(hemi) => hemi,
        Err(err) => {
            tracing::warn!(
                variant_id = variant.variant_id.as_str(),
                "{err}; showing diploid alleles"
            );
            false
        }
    }
}

pub fn is_called(genotype: &Genotype, variant: &Variant) -> bool {
    genotype.has_snp_call() || (variant.is_structural() && genotype.has_copy_number())
}

fn quality_text(genotype: &Genotype) -> String {
    if let Some(gq) = genotype.gq.filter(|v| *v != 0) {
        return gq.to_string();
    }
    if let Some(qs) = genotype.qs.filter(|v| *v != 0.0 && !v.is_nan()) {
        return qs.to_string();
    }
    "-".to_string()
}

/// Formats the genotype of `individual` for `variant`. `None` when the
/// variant carries no genotype for that individual.
pub fn format_genotype(
    variant: &Variant,
    individual: &Individual,
    individuals: &IndexMap<String, Individual>,
    is_compound_het: bool,
) -> Option<GenotypeCall> {
    let genotype = variant.genotype(&individual.individual_guid)?;
    if !is_called(genotype, variant) {
        return Some(GenotypeCall::NoCall);
    }

    let is_hemi = hemizygous_display(variant, individual);
    let warning = classify_warning(&WarningInputs {
        genotype,
        variant,
        individual,
        individuals,
        is_hemi,
        is_compound_het,
    });

    let alleles = match genotype.num_alt.filter(|n| *n >= 0) {
        Some(num_alt) => snp_alleles(num_alt, variant, is_hemi),
        None => copy_number(genotype.cn.unwrap_or_default(), is_hemi),
    };
    let allelic_balance = genotype.has_snp_call().then(|| {
        genotype
            .ab
            .filter(|ab| *ab != 0.0 && !ab.is_nan())
            .map(format_allelic_balance)
            .unwrap_or_else(|| "-".to_string())
    });

    let other_sample = genotype.other_sample.as_deref().map(|other| {
        let conflicting = other.num_alt != genotype.num_alt;
        OtherSampleSummary {
            conflicting,
            details: genotype_details(other, variant, conflicting, is_hemi),
        }
    });

    Some(GenotypeCall::Called(CalledGenotype {
        alleles,
        warning,
        quality: quality_text(genotype),
        allelic_balance,
        filters: variant
            .genotype_filters
            .clone()
            .filter(|f| !f.is_empty()),
        details: genotype_details(genotype, variant, false, is_hemi),
        other_sample,
    }))
}

/// One row per family member for the variant, in the given order.
pub fn individual_rows(
    variant: &Variant,
    members: &[&Individual],
    individuals: &IndexMap<String, Individual>,
    is_compound_het: bool,
) -> Vec<IndividualRow> {
    members
        .iter()
        .map(|individual| IndividualRow {
            individual_guid: individual.individual_guid.clone(),
            glyph: individual.pedigree_glyph(),
            name: individual.display_label().to_string(),
            features: individual
                .feature_labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            call: format_genotype(variant, individual, individuals, is_compound_het),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/genotype/mod.rs"]
mod tests;
