use super::*;

fn individual(value: serde_json::Value) -> Individual {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_sex_and_affected_codes() {
    let ind = individual(serde_json::json!({
        "individualGuid": "I1",
        "individualId": "NA19675",
        "sex": "M",
        "affected": "A",
    }));
    assert_eq!(ind.sex, Sex::Male);
    assert!(ind.is_affected());
    assert_eq!(ind.pedigree_glyph(), '■');

    let other = individual(serde_json::json!({
        "individualGuid": "I2",
        "sex": "X",
        "affected": "N",
    }));
    assert_eq!(other.sex, Sex::Unknown);
    assert_eq!(other.affected, Affected::Unaffected);
    assert_eq!(other.pedigree_glyph(), '◇');
}

#[test]
fn test_display_label_falls_back_to_individual_id() {
    let named = individual(serde_json::json!({
        "individualGuid": "I1",
        "individualId": "NA19675",
        "displayName": "Proband",
    }));
    assert_eq!(named.display_label(), "Proband");

    let blank = individual(serde_json::json!({
        "individualGuid": "I1",
        "individualId": "NA19675",
        "displayName": "  ",
    }));
    assert_eq!(blank.display_label(), "NA19675");
}

#[test]
fn test_missing_optional_fields_default() {
    let ind = individual(serde_json::json!({ "individualGuid": "I1" }));
    assert_eq!(ind.sex, Sex::Unknown);
    assert_eq!(ind.affected, Affected::Unknown);
    assert_eq!(ind.parent_guids(), [None, None]);
    assert!(ind.feature_labels().is_empty());
}

#[test]
fn test_feature_labels_prefer_label() {
    let ind = individual(serde_json::json!({
        "individualGuid": "I1",
        "features": [
            { "id": "HP:0001250", "label": "Seizures" },
            { "id": "HP:0000252" },
        ],
    }));
    assert_eq!(ind.feature_labels(), vec!["Seizures", "HP:0000252"]);
}

#[test]
fn test_null_fields_read_as_defaults() {
    let ind: Individual = serde_json::from_value(serde_json::json!({
        "individualGuid": "I1",
        "individualId": "NA19675",
        "displayName": null,
        "sex": null,
        "affected": null,
        "maternalGuid": null,
        "features": null,
    }))
    .unwrap();
    assert_eq!(ind.sex, Sex::Unknown);
    assert_eq!(ind.affected, Affected::Unknown);
    assert_eq!(ind.display_label(), "NA19675");
    assert_eq!(ind.pedigree_glyph(), '◇');
    assert!(ind.feature_labels().is_empty());
}
