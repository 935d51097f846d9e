use std::fmt;

use crate::model::variant::Variant;

const ALLELE_DISPLAY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allele {
    pub text: String,
    pub is_alt: bool,
}

impl Allele {
    pub fn new(variant: &Variant, is_alt: bool) -> Self {
        let allele = if is_alt {
            &variant.alt_allele
        } else {
            &variant.ref_allele
        };
        Self {
            text: allele_text(allele),
            is_alt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlleleDisplay {
    /// `second` is `None` for hemizygous calls, shown as `-`.
    Snp { first: Allele, second: Option<Allele> },
    CopyNumber { cn: i32, abnormal: bool },
}

pub fn allele_text(allele: &str) -> String {
    let mut chars = allele.chars();
    let mut text: String = chars.by_ref().take(ALLELE_DISPLAY_LEN).collect();
    if chars.next().is_some() {
        text.push_str("...");
    }
    text
}

pub fn snp_alleles(num_alt: i32, variant: &Variant, is_hemi: bool) -> AlleleDisplay {
    let first = Allele::new(variant, num_alt > if is_hemi { 0 } else { 1 });
    let second = if is_hemi {
        None
    } else {
        Some(Allele::new(variant, num_alt > 0))
    };
    AlleleDisplay::Snp { first, second }
}

pub fn copy_number(cn: i32, is_hemi: bool) -> AlleleDisplay {
    let expected = if is_hemi { 1 } else { 2 };
    AlleleDisplay::CopyNumber {
        cn,
        abnormal: cn != expected,
    }
}

impl fmt::Display for AlleleDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlleleDisplay::Snp { first, second } => {
                let second = second.as_ref().map(|a| a.text.as_str()).unwrap_or("-");
                write!(f, "{}/{}", first.text, second)
            }
            AlleleDisplay::CopyNumber { cn, .. } => write!(f, "CN: {}", cn),
        }
    }
}
