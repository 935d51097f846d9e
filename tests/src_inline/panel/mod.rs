use serde_json::json;

use super::buttons::read_buttons;
use super::*;

fn snapshot() -> Snapshot {
    serde_json::from_value(json!({
        "individualsByGuid": {
            "I1": { "individualGuid": "I1", "individualId": "NA19675", "sex": "M", "affected": "A" },
            "I2": { "individualGuid": "I2", "individualId": "NA19679", "sex": "F", "affected": "N" },
            "I4": { "individualGuid": "I4", "individualId": "HG00731", "sex": "F", "affected": "A" },
        },
        "familiesByGuid": {
            "F1": { "familyGuid": "F1", "familyId": "1", "projectGuid": "P1", "individualGuids": ["I1", "I2"] },
            "F2": { "familyGuid": "F2", "familyId": "2", "projectGuid": "P2", "individualGuids": ["I4"] },
            "F3": { "familyGuid": "F3", "familyId": "3", "projectGuid": "P1" },
        },
        "projectsByGuid": {
            "P1": { "projectGuid": "P1", "genomeVersion": "37" },
            "P2": { "projectGuid": "P2", "genomeVersion": "19" },
        },
        "igvSamplesByFamilySampleIndividual": {
            "F1": {
                "alignment": {
                    "I1": { "filePath": "/data/I1.bam", "projectGuid": "P1" },
                },
                "spliceJunctions": {
                    "I2": { "filePath": "gs://rna/I2.junctions.bed.gz", "projectGuid": "P1" },
                },
                "wig": {
                    "I2": { "filePath": "gs://rna/I2.bigWig", "projectGuid": "P1" },
                },
            },
            "F2": {
                "alignment": {
                    "I4": { "filePath": "gs://dna/I4.cram", "projectGuid": "P2" },
                },
                "gcnv": {
                    "I4": { "filePath": "gs://gcnv/batch.bed.gz", "sampleId": "HG00731_1", "projectGuid": "P2" },
                },
            },
        },
    }))
    .unwrap()
}

fn open(controller: &PanelController) -> &OpenPanel {
    match controller.state() {
        PanelState::Open(open) => open,
        PanelState::Closed => panic!("panel should be open"),
    }
}

#[test]
fn test_show_reads_classifies_dna_request() {
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Alignment]);
    let state = open(&controller);
    assert_eq!(state.family_guid, "F1");
    assert_eq!(state.dna_types, vec![TrackType::Alignment]);
    assert!(state.rna_types.is_empty());
    assert!(state.gtex_refs.is_empty());
    assert!(state.mappability_refs.is_empty());
}

#[test]
fn test_show_reads_classifies_rna_request_and_resets_other_sets() {
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Alignment]);
    controller.update_selection(Selection::GtexRefs(vec!["GTEx Muscle".to_string()]));
    controller.show_reads("F1", &[TrackType::Junction, TrackType::Coverage]);
    let state = open(&controller);
    assert!(state.dna_types.is_empty());
    assert_eq!(state.rna_types, vec![TrackType::Junction, TrackType::Coverage]);
    assert!(state.gtex_refs.is_empty());
}

#[test]
fn test_opening_second_family_replaces_first() {
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Alignment]);
    controller.show_reads("F2", &[TrackType::Gcnv]);
    assert_eq!(controller.open_family(), Some("F2"));
    assert_eq!(open(&controller).dna_types, vec![TrackType::Gcnv]);
}

#[test]
fn test_selection_updates_only_target_set() {
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Alignment]);
    controller.update_selection(Selection::MappabilityRefs(vec!["36-mer mappability".to_string()]));
    controller.toggle(Toggle::RnaType(TrackType::Junction));
    controller.toggle(Toggle::DnaType(TrackType::Alignment));
    controller.toggle(Toggle::GtexRef("GTEx Blood".to_string()));
    let state = open(&controller);
    assert!(state.dna_types.is_empty());
    assert_eq!(state.rna_types, vec![TrackType::Junction]);
    assert_eq!(state.gtex_refs, vec!["GTEx Blood".to_string()]);
    assert_eq!(state.mappability_refs, vec!["36-mer mappability".to_string()]);
}

#[test]
fn test_selection_ignored_while_closed() {
    let mut controller = PanelController::new();
    controller.toggle(Toggle::DnaType(TrackType::Alignment));
    controller.update_selection(Selection::GtexRefs(vec!["GTEx Blood".to_string()]));
    assert_eq!(controller.state(), &PanelState::Closed);
}

#[test]
fn test_close_from_any_open_state_clears_everything() {
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Junction, TrackType::Coverage]);
    controller.toggle(Toggle::DnaType(TrackType::Alignment));
    controller.toggle(Toggle::GtexRef("GTEx Blood".to_string()));
    controller.toggle(Toggle::MappabilityRef("SegDups >1000 bases".to_string()));
    controller.hide_reads();
    assert_eq!(controller.state(), &PanelState::Closed);
    assert_eq!(controller.open_family(), None);

    controller.show_reads("F2", &[TrackType::Junction]);
    let state = open(&controller);
    assert!(state.dna_types.is_empty());
    assert!(state.gtex_refs.is_empty());
    assert!(state.mappability_refs.is_empty());
}

#[test]
fn test_render_closed_is_none() {
    let controller = PanelController::new();
    assert!(controller.render(&snapshot(), None).unwrap().is_none());
}

#[test]
fn test_render_family_without_samples_is_none() {
    let mut controller = PanelController::new();
    controller.show_reads("F3", &[TrackType::Alignment]);
    assert!(controller.render(&snapshot(), None).unwrap().is_none());
}

#[test]
fn test_render_unknown_family_is_not_found() {
    let mut controller = PanelController::new();
    controller.show_reads("F9", &[TrackType::Alignment]);
    assert!(matches!(
        controller.render(&snapshot(), None),
        Err(InputError::NotFound(_))
    ));
}

#[test]
fn test_render_filters_type_options_by_available_samples() {
    let snap = snapshot();
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Alignment]);
    let view = controller.render(&snap, None).unwrap().unwrap();
    let dna: Vec<_> = view.dna_options.iter().map(|o| o.value).collect();
    let rna: Vec<_> = view.rna_options.iter().map(|o| o.value).collect();
    assert_eq!(dna, vec!["alignment"]);
    assert_eq!(rna, vec!["spliceJunctions", "wig"]);
    assert_eq!(view.gtex_options.len(), 12);
    assert_eq!(view.mappability_options.len(), 5);
}

#[test]
fn test_render_orders_sample_then_mappability_then_gtex_tracks() {
    let snap = snapshot();
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Junction, TrackType::Coverage]);
    controller.toggle(Toggle::DnaType(TrackType::Alignment));
    controller.toggle(Toggle::GtexRef("GTEx Muscle".to_string()));
    controller.toggle(Toggle::MappabilityRef("36-mer mappability".to_string()));
    let view = controller.render(&snap, None).unwrap().unwrap();
    let kinds: Vec<_> = view.igv.tracks.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec!["alignment", "merged", "wig", "merged"]);
    assert_eq!(view.igv.tracks[3].name(), Some("GTEx Muscle"));
    assert_eq!(view.igv.reference.unwrap().id, "GRCh37");
    assert_eq!(view.igv.options, IgvOptions::default_v1());
}

#[test]
fn test_render_unsupported_build_has_no_reference() {
    let snap = snapshot();
    let mut controller = PanelController::new();
    controller.show_reads("F2", &[TrackType::Alignment, TrackType::Gcnv]);
    let view = controller.render(&snap, None).unwrap().unwrap();
    assert!(view.igv.reference.is_none());
    assert_eq!(view.igv.tracks.len(), 2);
}

#[test]
fn test_locus_uses_lifted_over_position_across_builds() {
    let variant: Variant = serde_json::from_value(json!({
        "variantId": "v1", "chrom": "1", "pos": 248367227, "genomeVersion": "38", "liftedOverPos": 248530529,
    }))
    .unwrap();
    assert_eq!(variant_locus(&variant, Some("37")), "chr1:248530429-248530629");
    assert_eq!(variant_locus(&variant, Some("38")), "chr1:248367127-248367327");
    assert_eq!(variant_locus(&variant, None), "chr1:248367127-248367327");

    let snap = snapshot();
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Alignment]);
    let view = controller.render(&snap, Some(&variant)).unwrap().unwrap();
    assert_eq!(view.igv.locus.as_deref(), Some("chr1:248530429-248530629"));
}

#[test]
fn test_view_serializes_viewer_options_inline() {
    let snap = snapshot();
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Alignment]);
    let view = controller.render(&snap, None).unwrap().unwrap();
    let value = serde_json::to_value(&view.igv).unwrap();
    assert_eq!(value["showKaryo"], json!(false));
    assert_eq!(value["loadDefaultGenomes"], json!(false));
    assert_eq!(value["showCommandBar"], json!(true));
    assert!(value.get("locus").is_none());
    assert_eq!(value["reference"]["id"], json!("GRCh37"));
}

#[test]
fn test_single_family_buttons() {
    let snap = snapshot();
    let buttons = read_buttons(&snap, &["F1".to_string()]);
    let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["SHOW READS", "SHOW RNASeq"]);
    assert_eq!(buttons[1].types, vec![TrackType::Junction, TrackType::Coverage]);
    assert!(buttons.iter().all(|b| b.family_guid.as_deref() == Some("F1")));
}

#[test]
fn test_multi_family_buttons_group_by_type() {
    let snap = snapshot();
    let buttons = read_buttons(&snap, &["F1".to_string(), "F2".to_string(), "F3".to_string()]);
    let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["SHOW READS", "| 1", "| 2", "SHOW RNASeq", "| 1", "SHOW gCNV", "| 2"]
    );
    assert_eq!(buttons[0].family_guid, None);
    assert_eq!(buttons[2].family_guid.as_deref(), Some("F2"));
    assert_eq!(buttons[2].icon, None);
}

#[test]
fn test_no_buttons_without_samples() {
    let snap = snapshot();
    assert!(read_buttons(&snap, &["F3".to_string()]).is_empty());
}
