use serde::Serialize;

use crate::genotype::alleles::snp_alleles;
use crate::model::variant::{Genotype, Variant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy)]
pub struct DetailSpec {
    pub title: &'static str,
    pub value: fn(&Genotype, &Variant) -> Option<String>,
    pub hide: fn(&Genotype, &Variant) -> bool,
}

pub const GENOTYPE_TITLE: &str = "Genotype";

fn never(_: &Genotype, _: &Variant) -> bool {
    false
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn non_zero_int(value: Option<i64>) -> Option<String> {
    value.filter(|v| *v != 0).map(|v| v.to_string())
}

fn non_zero_float(value: Option<f64>) -> Option<String> {
    value.filter(|v| *v != 0.0 && !v.is_nan()).map(|v| v.to_string())
}

fn raw_alt_alleles(_: &Genotype, variant: &Variant) -> Option<String> {
    variant.original_alt_alleles.as_ref().map(|alleles| alleles.join(", "))
}

fn hide_raw_alt_alleles(_: &Genotype, variant: &Variant) -> bool {
    match variant.original_alt_alleles.as_deref().unwrap_or_default() {
        [] => true,
        [only] => *only == variant.alt_allele,
        _ => false,
    }
}

fn hide_filters(_: &Genotype, variant: &Variant) -> bool {
    variant.genotype_filters.as_deref().unwrap_or_default().is_empty()
}

fn sample_type(g: &Genotype, _: &Variant) -> Option<String> {
    non_empty(g.sample_type.as_deref())
}

fn allelic_depth(g: &Genotype, _: &Variant) -> Option<String> {
    non_empty(g.ad.as_deref())
}

fn read_depth(g: &Genotype, _: &Variant) -> Option<String> {
    non_zero_int(g.dp)
}

fn genotype_quality(g: &Genotype, _: &Variant) -> Option<String> {
    non_zero_int(g.gq)
}

fn allelic_balance(g: &Genotype, _: &Variant) -> Option<String> {
    g.ab.filter(|ab| *ab != 0.0 && !ab.is_nan())
        .map(format_allelic_balance)
}

fn filters(_: &Genotype, v: &Variant) -> Option<String> {
    non_empty(v.genotype_filters.as_deref())
}

fn phred_likelihoods(g: &Genotype, _: &Variant) -> Option<String> {
    non_empty(g.pl.as_deref())
}

fn quality_score(g: &Genotype, _: &Variant) -> Option<String> {
    non_zero_float(g.qs)
}

fn start(g: &Genotype, _: &Variant) -> Option<String> {
    g.start.filter(|v| *v != 0).map(|v| v.to_string())
}

fn end(g: &Genotype, _: &Variant) -> Option<String> {
    g.end.filter(|v| *v != 0).map(|v| v.to_string())
}

const GENOTYPE_DETAILS: &[DetailSpec] = &[
    DetailSpec {
        title: "Sample Type",
        value: sample_type,
        hide: never,
    },
    DetailSpec {
        title: "Raw Alt. Alleles",
        value: raw_alt_alleles,
        hide: hide_raw_alt_alleles,
    },
    DetailSpec {
        title: "Allelic Depth",
        value: allelic_depth,
        hide: never,
    },
    DetailSpec {
        title: "Read Depth",
        value: read_depth,
        hide: never,
    },
    DetailSpec {
        title: "Genotype Quality",
        value: genotype_quality,
        hide: never,
    },
    DetailSpec {
        title: "Allelic Balance",
        value: allelic_balance,
        hide: never,
    },
    DetailSpec {
        title: "Filter",
        value: filters,
        hide: hide_filters,
    },
    DetailSpec {
        title: "Phred Likelihoods",
        value: phred_likelihoods,
        hide: never,
    },
    DetailSpec {
        title: "Quality Score",
        value: quality_score,
        hide: never,
    },
    DetailSpec {
        title: "Start",
        value: start,
        hide: never,
    },
    DetailSpec {
        title: "End",
        value: end,
        hide: never,
    },
];

pub fn detail_specs() -> &'static [DetailSpec] {
    GENOTYPE_DETAILS
}

/// Number formatted with `digits` significant digits. Values of magnitude
/// >= 10^digits are printed as plain integers, not in exponent form.
pub fn to_precision(value: f64, digits: u32) -> String {
    let digits = digits.max(1) as i32;
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", (digits - 1) as usize, value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let rounded = format!("{:.*}", decimals, value);
    let bumped = rounded
        .parse::<f64>()
        .map(|r| r != 0.0 && r.abs().log10().floor() as i32 > magnitude)
        .unwrap_or(false);
    if bumped && decimals > 0 {
        format!("{:.*}", decimals - 1, value)
    } else {
        rounded
    }
}

pub fn format_allelic_balance(ab: f64) -> String {
    to_precision(ab, 2)
}

/// Ordered detail rows for one genotype. The genotype row itself is only
/// present when `include_genotype` is set and the call has an allele count.
pub fn genotype_details(
    genotype: &Genotype,
    variant: &Variant,
    include_genotype: bool,
    is_hemi: bool,
) -> Vec<DetailField> {
    let mut out = Vec::with_capacity(GENOTYPE_DETAILS.len() + 1);
    if include_genotype {
        if let Some(num_alt) = genotype.num_alt {
            out.push(DetailField {
                title: GENOTYPE_TITLE,
                value: snp_alleles(num_alt, variant, is_hemi).to_string(),
            });
        }
    }
    for spec in GENOTYPE_DETAILS {
        let Some(value) = (spec.value)(genotype, variant) else {
            continue;
        };
        if (spec.hide)(genotype, variant) {
            continue;
        }
        out.push(DetailField {
            title: spec.title,
            value,
        });
    }
    out
}
