use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    #[error("unsupported genome build: {0}")]
    UnsupportedBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GenomeBuild {
    Grch37,
    Grch38,
}

pub const SUPPORTED_BUILDS: &[GenomeBuild] = &[GenomeBuild::Grch37, GenomeBuild::Grch38];

impl GenomeBuild {
    pub fn parse(version: &str) -> Result<Self, LookupFailure> {
        match version.trim() {
            "37" | "GRCh37" => Ok(GenomeBuild::Grch37),
            "38" | "GRCh38" => Ok(GenomeBuild::Grch38),
            other => Err(LookupFailure::UnsupportedBuild(other.to_string())),
        }
    }

    /// Short version key used by the backend and the asset path tables.
    pub fn version(&self) -> &'static str {
        match self {
            GenomeBuild::Grch37 => "37",
            GenomeBuild::Grch38 => "38",
        }
    }

    pub fn display_id(&self) -> &'static str {
        match self {
            GenomeBuild::Grch37 => "GRCh37",
            GenomeBuild::Grch38 => "GRCh38",
        }
    }
}

impl fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_id())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/build.rs"]
mod tests;
