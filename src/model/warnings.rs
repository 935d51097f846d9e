#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenotypeWarning {
    Defragged,
    PotentialUpd,
    AbsentInParents,
}

impl GenotypeWarning {
    pub fn label(&self) -> &'static str {
        match self {
            GenotypeWarning::Defragged => "Defragged",
            GenotypeWarning::PotentialUpd => "Potential UPD/Hemizygosity",
            GenotypeWarning::AbsentInParents => "Variant absent in parents",
        }
    }
}

/// Evaluation order of the warning rules; the first rule that matches wins.
pub fn warning_priority() -> &'static [GenotypeWarning] {
    &[
        GenotypeWarning::Defragged,
        GenotypeWarning::PotentialUpd,
        GenotypeWarning::AbsentInParents,
    ]
}
