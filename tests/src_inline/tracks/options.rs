use super::*;

#[test]
fn test_encode_uri_component_matches_browser_rules() {
    assert_eq!(
        encode_uri_component("gs://bucket/sample 1.cram"),
        "gs%3A%2F%2Fbucket%2Fsample%201.cram"
    );
    assert_eq!(encode_uri_component("a-b_c.d!~*'()"), "a-b_c.d!~*'()");
    assert_eq!(encode_uri_component("é"), "%C3%A9");
}

#[test]
fn test_sample_url_uses_project_and_encoded_path() {
    let sample = SampleDescriptor {
        file_path: "/readviz/NA19675.cram".to_string(),
        sample_id: None,
        project_guid: "R0001_1kg".to_string(),
    };
    assert_eq!(
        sample_url(&sample),
        "/api/project/R0001_1kg/igv_track/%2Freadviz%2FNA19675.cram"
    );
}

#[test]
fn test_track_name_combines_glyph_and_label() {
    let individual: Individual = serde_json::from_value(serde_json::json!({
        "individualGuid": "I1",
        "individualId": "NA19675",
        "sex": "F",
        "affected": "A",
    }))
    .unwrap();
    assert_eq!(track_name(&individual), "● NA19675");
}
