use super::*;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_parse_args_tracks_subcommand() {
    let parsed = parse_args(&args(&[
        "tracks",
        "--snapshot",
        "snapshot.json",
        "--family",
        "F1",
        "--types",
        "spliceJunctions,wig",
        "--gtex",
        "GTEx Muscle",
        "--gtex",
        "GTEx Blood",
    ]))
    .unwrap();
    assert!(!parsed.verbose);
    match parsed.command {
        Command::Tracks(tracks) => {
            assert_eq!(tracks.family, "F1");
            assert_eq!(tracks.types, vec![TrackType::Junction, TrackType::Coverage]);
            assert_eq!(tracks.gtex, vec!["GTEx Muscle".to_string(), "GTEx Blood".to_string()]);
            assert!(tracks.out.is_none());
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_parse_args_rejects_unknown_track_type() {
    let err = parse_args(&args(&[
        "tracks",
        "--snapshot",
        "s.json",
        "--family",
        "F1",
        "--types",
        "bam",
    ]))
    .unwrap_err();
    assert!(err.contains("invalid track type bam"));
}

#[test]
fn test_parse_args_requires_types() {
    assert!(parse_args(&args(&["tracks", "--snapshot", "s.json", "--family", "F1"])).is_err());
}

#[test]
fn test_parse_args_genotypes_with_global_verbose() {
    let parsed = parse_args(&args(&[
        "genotypes",
        "--snapshot",
        "s.json.gz",
        "--variant",
        "1-100-A-T",
        "--compound-het",
        "-v",
    ]))
    .unwrap();
    assert!(parsed.verbose);
    match parsed.command {
        Command::Genotypes(g) => {
            assert_eq!(g.variant, "1-100-A-T");
            assert!(g.compound_het);
            assert!(g.family.is_none());
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_parse_args_missing_command() {
    assert!(parse_args(&[]).is_err());
}

#[test]
fn test_added_types_toggle_into_matching_set() {
    let mut controller = PanelController::new();
    controller.show_reads("F1", &[TrackType::Junction, TrackType::Coverage]);
    apply_added_types(
        &mut controller,
        &[TrackType::Alignment, TrackType::Alignment, TrackType::Coverage],
    );
    match controller.state() {
        PanelState::Open(open) => {
            assert_eq!(open.dna_types, vec![TrackType::Alignment]);
            assert_eq!(open.rna_types, vec![TrackType::Junction, TrackType::Coverage]);
        }
        PanelState::Closed => panic!("panel should stay open"),
    }
}
