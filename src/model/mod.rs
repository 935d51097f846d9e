pub mod build;
pub mod pedigree;
pub mod sample;
pub mod track;
pub mod variant;
pub mod warnings;

use serde::{Deserialize, Deserializer};

pub use build::{GenomeBuild, LookupFailure};
pub use pedigree::{Affected, Individual, Sex};
pub use sample::{FamilySamples, SampleDescriptor, TrackType};
pub use track::TrackConfig;
pub use variant::{Genotype, Variant};

/// Backend records send `null` for unset fields; read those as the default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
