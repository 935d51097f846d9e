use serde::Deserialize;

use crate::model::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl From<Option<String>> for Sex {
    fn from(value: Option<String>) -> Self {
        value.map(Sex::from).unwrap_or_default()
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        match value.trim() {
            "M" | "male" => Sex::Male,
            "F" | "female" => Sex::Female,
            _ => Sex::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Affected {
    Affected,
    Unaffected,
    #[default]
    Unknown,
}

impl From<Option<String>> for Affected {
    fn from(value: Option<String>) -> Self {
        value.map(Affected::from).unwrap_or_default()
    }
}

impl From<String> for Affected {
    fn from(value: String) -> Self {
        match value.trim() {
            "A" => Affected::Affected,
            "N" => Affected::Unaffected,
            _ => Affected::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhenotypeFeature {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    pub individual_guid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub individual_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub affected: Affected,
    #[serde(default)]
    pub maternal_guid: Option<String>,
    #[serde(default)]
    pub paternal_guid: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<PhenotypeFeature>>,
}

impl Individual {
    pub fn display_label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.individual_id
        } else {
            &self.display_name
        }
    }

    pub fn is_affected(&self) -> bool {
        self.affected == Affected::Affected
    }

    /// Maternal then paternal reference; lookups happen by guid.
    pub fn parent_guids(&self) -> [Option<&str>; 2] {
        [self.maternal_guid.as_deref(), self.paternal_guid.as_deref()]
    }

    pub fn pedigree_glyph(&self) -> char {
        pedigree_glyph(self.sex, self.affected)
    }

    pub fn feature_labels(&self) -> Vec<&str> {
        self.features
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|f| f.label.as_deref().unwrap_or(f.id.as_str()))
            .collect()
    }
}

pub fn pedigree_glyph(sex: Sex, affected: Affected) -> char {
    let filled = affected == Affected::Affected;
    match (sex, filled) {
        (Sex::Male, true) => '■',
        (Sex::Male, false) => '□',
        (Sex::Female, true) => '●',
        (Sex::Female, false) => '○',
        (Sex::Unknown, true) => '◆',
        (Sex::Unknown, false) => '◇',
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/pedigree.rs"]
mod tests;
