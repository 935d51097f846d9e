use indexmap::IndexMap;

use crate::model::pedigree::Individual;
use crate::model::variant::{Genotype, Variant};
use crate::model::warnings::{GenotypeWarning, warning_priority};

#[derive(Debug, Clone, Copy)]
pub struct WarningInputs<'a> {
    pub genotype: &'a Genotype,
    pub variant: &'a Variant,
    pub individual: &'a Individual,
    pub individuals: &'a IndexMap<String, Individual>,
    pub is_hemi: bool,
    pub is_compound_het: bool,
}

impl WarningInputs<'_> {
    fn parent_has_no_alt(&self, parent_guid: Option<&str>) -> bool {
        parent_guid
            .and_then(|guid| self.variant.genotype(guid))
            .is_some_and(|g| g.num_alt == Some(0))
    }

    fn parent_unaffected(&self, parent_guid: Option<&str>) -> bool {
        parent_guid.is_some_and(|guid| {
            !self
                .individuals
                .get(guid)
                .is_some_and(|parent| parent.is_affected())
        })
    }

    fn parents_without_alt(&self, require_unaffected: bool) -> bool {
        self.individual.parent_guids().iter().all(|&parent| {
            self.parent_has_no_alt(parent)
                && (!require_unaffected || self.parent_unaffected(parent))
        })
    }
}

pub fn rule_matches(warning: GenotypeWarning, inputs: &WarningInputs<'_>) -> bool {
    match warning {
        GenotypeWarning::Defragged => inputs.genotype.defragged,
        GenotypeWarning::PotentialUpd => {
            !inputs.is_hemi
                && inputs.genotype.num_alt == Some(2)
                && inputs.parents_without_alt(true)
        }
        GenotypeWarning::AbsentInParents => {
            inputs.is_compound_het && inputs.parents_without_alt(false)
        }
    }
}

pub fn classify_warning(inputs: &WarningInputs<'_>) -> Option<GenotypeWarning> {
    warning_priority()
        .iter()
        .copied()
        .find(|warning| rule_matches(*warning, inputs))
}
