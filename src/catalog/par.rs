use crate::model::build::{GenomeBuild, LookupFailure};
use crate::model::pedigree::{Individual, Sex};
use crate::model::variant::Variant;

/// Inclusive `[start, end]` pseudoautosomal interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParInterval {
    pub start: u64,
    pub end: u64,
}

impl ParInterval {
    pub fn contains(&self, pos: u64) -> bool {
        pos >= self.start && pos <= self.end
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ParTable {
    pub build: GenomeBuild,
    pub x: &'static [ParInterval],
    pub y: &'static [ParInterval],
}

const PAR_37_X: &[ParInterval] = &[
    ParInterval { start: 60001, end: 2699521 },
    ParInterval { start: 154931044, end: 155260561 },
];
const PAR_37_Y: &[ParInterval] = &[
    ParInterval { start: 10001, end: 2649521 },
    ParInterval { start: 59034050, end: 59363567 },
];
const PAR_38_X: &[ParInterval] = &[
    ParInterval { start: 10001, end: 2781480 },
    ParInterval { start: 155701383, end: 156030896 },
];
const PAR_38_Y: &[ParInterval] = &[
    ParInterval { start: 10001, end: 2781480 },
    ParInterval { start: 56887903, end: 57217416 },
];

const PAR_TABLES: &[ParTable] = &[
    ParTable {
        build: GenomeBuild::Grch37,
        x: PAR_37_X,
        y: PAR_37_Y,
    },
    ParTable {
        build: GenomeBuild::Grch38,
        x: PAR_38_X,
        y: PAR_38_Y,
    },
];

pub fn par_table(build: GenomeBuild) -> Result<&'static ParTable, LookupFailure> {
    PAR_TABLES
        .iter()
        .find(|t| t.build == build)
        .ok_or_else(|| LookupFailure::UnsupportedBuild(build.version().to_string()))
}

/// PAR intervals of a sex chromosome; `None` for any other chromosome.
pub fn par_intervals(
    build: GenomeBuild,
    chrom: &str,
) -> Result<Option<&'static [ParInterval]>, LookupFailure> {
    let table = par_table(build)?;
    Ok(match chrom.strip_prefix("chr").unwrap_or(chrom) {
        "X" => Some(table.x),
        "Y" => Some(table.y),
        _ => None,
    })
}

pub fn is_hemizygous(
    chrom: &str,
    pos: u64,
    genome_version: &str,
    sex: Sex,
) -> Result<bool, LookupFailure> {
    let chrom = chrom.strip_prefix("chr").unwrap_or(chrom);
    if sex != Sex::Male || (chrom != "X" && chrom != "Y") {
        return Ok(false);
    }
    let build = GenomeBuild::parse(genome_version)?;
    let intervals = par_intervals(build, chrom)?.unwrap_or_default();
    Ok(intervals.iter().all(|region| !region.contains(pos)))
}

pub fn is_hemi_x_variant(
    variant: &Variant,
    individual: &Individual,
) -> Result<bool, LookupFailure> {
    is_hemizygous(
        &variant.chrom,
        variant.pos,
        &variant.genome_version,
        individual.sex,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/par.rs"]
mod tests;
