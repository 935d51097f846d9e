use super::*;

#[test]
fn test_male_x_outside_par_is_hemizygous() {
    assert_eq!(is_hemizygous("X", 3_000_000, "37", Sex::Male), Ok(true));
    assert_eq!(is_hemizygous("chrX", 3_000_000, "37", Sex::Male), Ok(true));
}

#[test]
fn test_par_boundaries_are_inclusive() {
    assert_eq!(is_hemizygous("X", 60001, "37", Sex::Male), Ok(false));
    assert_eq!(is_hemizygous("X", 2699521, "37", Sex::Male), Ok(false));
    assert_eq!(is_hemizygous("X", 60000, "37", Sex::Male), Ok(true));
    assert_eq!(is_hemizygous("X", 2699522, "37", Sex::Male), Ok(true));
    assert_eq!(is_hemizygous("Y", 56887903, "38", Sex::Male), Ok(false));
    assert_eq!(is_hemizygous("Y", 57217417, "38", Sex::Male), Ok(true));
}

#[test]
fn test_female_and_autosomes_never_hemizygous() {
    assert_eq!(is_hemizygous("X", 3_000_000, "37", Sex::Female), Ok(false));
    assert_eq!(is_hemizygous("X", 3_000_000, "37", Sex::Unknown), Ok(false));
    assert_eq!(is_hemizygous("1", 3_000_000, "37", Sex::Male), Ok(false));
}

#[test]
fn test_short_circuit_skips_build_lookup() {
    assert_eq!(is_hemizygous("1", 100, "19", Sex::Male), Ok(false));
    assert_eq!(is_hemizygous("X", 100, "19", Sex::Female), Ok(false));
}

#[test]
fn test_unsupported_build_is_lookup_failure() {
    assert_eq!(
        is_hemizygous("X", 3_000_000, "19", Sex::Male),
        Err(LookupFailure::UnsupportedBuild("19".to_string()))
    );
}

#[test]
fn test_matches_interval_scan_for_all_builds() {
    let positions = [
        1u64, 10000, 10001, 60001, 2649521, 2699521, 2781480, 2781481, 56887903, 59034050,
        59363567, 154931044, 155260561, 155701383, 156030896, 200_000_000,
    ];
    for build in crate::model::build::SUPPORTED_BUILDS {
        let table = par_table(*build).unwrap();
        for (chrom, intervals) in [("X", table.x), ("Y", table.y)] {
            for &pos in &positions {
                let outside = intervals.iter().all(|r| pos < r.start || pos > r.end);
                assert_eq!(
                    is_hemizygous(chrom, pos, build.version(), Sex::Male),
                    Ok(outside),
                    "build {} chrom {} pos {}",
                    build,
                    chrom,
                    pos
                );
            }
        }
    }
}
