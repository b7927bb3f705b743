// core/tests/test_profile.rs

use elevationgrapher_core::errors::ProfileError;
use elevationgrapher_core::profile::{build_profile, profile_for_markers};
use elevationgrapher_core::resample::{resample, RESAMPLE_POINTS};
use elevationgrapher_core::{StaticElevationProvider, Waypoint};

fn straight_line() -> Vec<Waypoint> {
    vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 10.0)]
}

#[test]
fn test_distance_from_start_is_exact() {
    let path = resample(&straight_line()).expect("resample feilet");
    let provider = StaticElevationProvider {
        elevations: vec![7.0; RESAMPLE_POINTS],
    };

    let profile = build_profile(&path, &provider).expect("build feilet");

    assert_eq!(profile.samples.len(), RESAMPLE_POINTS);
    for (i, s) in profile.samples.iter().enumerate() {
        // Eksakt, ikke tilnærmet: distance = spacing·(i+1)
        assert_eq!(
            s.distance_from_start,
            path.spacing * (i + 1) as f64,
            "feil distanse for sample {i}"
        );
    }
}

#[test]
fn test_max_and_distance_at_max_agree() {
    let path = resample(&straight_line()).expect("resample feilet");

    // Kjent maks på indeks 42
    let mut elevations = vec![10.0; RESAMPLE_POINTS];
    elevations[42] = 312.5;
    let provider = StaticElevationProvider { elevations };

    let profile = build_profile(&path, &provider).expect("build feilet");

    assert_eq!(profile.max_elevation, 312.5);
    assert_eq!(profile.distance_at_max, path.spacing * 43.0);

    // De to skalarene skal peke på samme sample
    let at_max = profile
        .samples
        .iter()
        .find(|s| s.distance_from_start == profile.distance_at_max)
        .expect("fant ikke sample ved distance_at_max");
    assert_eq!(at_max.elevation, profile.max_elevation);
}

#[test]
fn test_ordering_is_preserved() {
    let path = resample(&straight_line()).expect("resample feilet");
    let elevations: Vec<f64> = (0..RESAMPLE_POINTS).map(|i| i as f64).collect();
    let provider = StaticElevationProvider {
        elevations: elevations.clone(),
    };

    let profile = build_profile(&path, &provider).expect("build feilet");

    for (i, s) in profile.samples.iter().enumerate() {
        assert_eq!(s.elevation, elevations[i], "rekkefølgen byttet om sample {i}");
    }
}

#[test]
fn test_short_results_is_malformed_response() {
    // 99 av 100 høyder: skal feile som MalformedResponse, ikke trunkere
    let path = resample(&straight_line()).expect("resample feilet");
    let provider = StaticElevationProvider {
        elevations: vec![1.0; RESAMPLE_POINTS - 1],
    };

    let err = build_profile(&path, &provider).unwrap_err();
    assert!(matches!(err, ProfileError::MalformedResponse(_)));
}

#[test]
fn test_profile_for_markers_full_pipeline() {
    let provider = StaticElevationProvider {
        elevations: vec![100.0; RESAMPLE_POINTS],
    };

    let profile = profile_for_markers(&straight_line(), &provider).expect("pipeline feilet");
    assert_eq!(profile.samples.len(), RESAMPLE_POINTS);
    assert_eq!(profile.max_elevation, 100.0);

    // Etikettene grafskjermen viser
    assert!(profile.highest_point_label().starts_with("Highest point:"));
    assert!(profile.distance_at_max_label().starts_with("At distance:"));
}

#[test]
fn test_profile_for_markers_insufficient_waypoints() {
    let provider = StaticElevationProvider::default();
    let err = profile_for_markers(&[Waypoint::new(0.0, 0.0)], &provider).unwrap_err();
    assert!(matches!(err, ProfileError::InsufficientWaypoints(1)));
}
