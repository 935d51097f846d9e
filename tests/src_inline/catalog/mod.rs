use super::*;

#[test]
fn test_catalog_options_use_label_as_value() {
    let options = OverlayCatalog::Gtex.options();
    assert_eq!(options.len(), gtex_tracks().len());
    assert_eq!(options[0].value, "GTEx Muscle");
    assert_eq!(options[0].text, "GTEx Muscle");
    assert!(options[0].description.unwrap().contains("803"));

    let mappability = OverlayCatalog::Mappability.options();
    assert_eq!(mappability.last().unwrap().value, "SegDups >1000 bases");
}

#[test]
fn test_two_source_label_resolves_to_merged_in_declared_order() {
    for def in gtex_tracks() {
        let tracks = OverlayCatalog::Gtex.resolve(&[def.text]);
        assert_eq!(tracks.len(), 1);
        match &tracks[0] {
            TrackConfig::Merged(merged) => {
                assert_eq!(merged.name, def.text);
                assert_eq!(merged.tracks.len(), 2);
                assert_eq!(merged.tracks[0], source_track(&def.data[0]));
                assert_eq!(merged.tracks[1], source_track(&def.data[1]));
                assert_eq!(merged.tracks[0].kind(), "wig");
                assert_eq!(merged.tracks[1].kind(), "spliceJunctions");
            }
            other => panic!("expected merged track, got {:?}", other),
        }
    }
}

#[test]
fn test_single_source_label_resolves_to_named_track() {
    for def in mappability_tracks() {
        let tracks = OverlayCatalog::Mappability.resolve(&[def.text]);
        assert_eq!(tracks.len(), 1);
        let expected = source_track(&def.data[0]).with_name(def.text.to_string());
        assert_eq!(tracks[0], expected);
    }
}

#[test]
fn test_source_track_formats_and_index() {
    let bigwig = RefSource {
        kind: RefSourceKind::Coverage,
        url: "https://x/cov.bigWig",
    };
    match source_track(&bigwig) {
        TrackConfig::Coverage(t) => {
            assert_eq!(t.format, "bigWig");
            assert_eq!(t.index_url, None);
        }
        other => panic!("unexpected {:?}", other),
    }

    let gtf = RefSource {
        kind: RefSourceKind::Gtf,
        url: "https://x/segdups.gtf.gz",
    };
    match source_track(&gtf) {
        TrackConfig::Annotation(t) => {
            assert_eq!(t.format, "gtf");
            assert_eq!(t.index_url.as_deref(), Some("https://x/segdups.gtf.gz.tbi"));
        }
        other => panic!("unexpected {:?}", other),
    }

    let bgz = RefSource {
        kind: RefSourceKind::Junctions,
        url: "https://x/j.bed.bgz",
    };
    match source_track(&bgz) {
        TrackConfig::Junction(t) => {
            assert_eq!(t.format, "bed");
            assert_eq!(t.index_url.as_deref(), Some("https://x/j.bed.bgz.tbi"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_resolution_follows_catalog_order_and_skips_unknown() {
    let tracks = OverlayCatalog::Mappability.resolve(&[
        "SegDups >1000 bases",
        "not a track",
        "36-mer mappability",
    ]);
    let names: Vec<_> = tracks.iter().map(|t| t.name().unwrap()).collect();
    assert_eq!(names, vec!["36-mer mappability", "SegDups >1000 bases"]);
}

#[test]
fn test_empty_selection_resolves_nothing() {
    let none: [&str; 0] = [];
    assert!(OverlayCatalog::Gtex.resolve(&none).is_empty());
}

#[test]
fn test_normalized_gtex_descriptions_carry_formula() {
    let normalized: Vec<_> = gtex_tracks()
        .iter()
        .filter(|def| def.text.starts_with("Norm. "))
        .collect();
    assert_eq!(normalized.len(), 6);
    for def in normalized {
        assert!(def.description.contains("(see formula below)"), "{}", def.text);
        assert!(
            def.description
                .contains("\n normalized read count for junction = sum(per_sample_normalized_read_counts)"),
            "{}",
            def.text
        );
    }
}
