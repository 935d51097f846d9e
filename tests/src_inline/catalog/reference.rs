use super::*;

#[test]
fn test_grch38_reference_urls() {
    let reference = reference_for_version("38").unwrap();
    assert_eq!(reference.id, "GRCh38");
    assert_eq!(
        reference.fasta_url,
        "/api/igv_genomes/broadinstitute.org/genomes/seq/hg38/hg38.fa"
    );
    assert_eq!(
        reference.cytoband_url,
        "/api/igv_genomes/org.genomes/hg38/annotations/cytoBandIdeo.txt.gz"
    );
    assert_eq!(
        reference.alias_url,
        "/api/igv_genomes/org.genomes/hg38/hg38_alias.tab"
    );
}

#[test]
fn test_grch37_annotation_tracks() {
    let reference = reference_for(GenomeBuild::Grch37);
    assert_eq!(reference.id, "GRCh37");
    assert_eq!(reference.tracks.len(), 2);
    let gencode = &reference.tracks[0];
    assert_eq!(gencode.name, "Gencode v32");
    assert_eq!(
        gencode.url,
        "https://storage.googleapis.com/seqr-reference-data/GRCh37/gencode/gencode.v32lift37.annotation.sorted.bed.gz"
    );
    assert_eq!(
        gencode.index_url.as_deref(),
        Some("https://storage.googleapis.com/seqr-reference-data/GRCh37/gencode/gencode.v32lift37.annotation.sorted.bed.gz.tbi")
    );
    assert_eq!(reference.tracks[1].visibility_window, Some(-1));
    assert_eq!(reference.tracks[1].order, 1001);
}

#[test]
fn test_unsupported_build_lookup_failure() {
    assert_eq!(
        reference_for_version("36"),
        Err(LookupFailure::UnsupportedBuild("36".to_string()))
    );
}

#[test]
fn test_reference_lookup_is_shared() {
    let a = reference_for_version("37").unwrap();
    let b = reference_for(GenomeBuild::Grch37);
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_serialized_keys() {
    let value = serde_json::to_value(reference_for(GenomeBuild::Grch38)).unwrap();
    assert!(value.get("fastaURL").is_some());
    assert!(value.get("cytobandURL").is_some());
    assert!(value.get("aliasURL").is_some());
    assert!(value["tracks"][0].get("visibilityWindow").is_none());
    assert_eq!(value["tracks"][1]["visibilityWindow"], -1);
}
