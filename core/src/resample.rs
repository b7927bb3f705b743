use std::f64::consts::PI;

use crate::errors::ProfileError;
use crate::models::Waypoint;

/// Antall punkter stien alltid resamples til.
pub const RESAMPLE_POINTS: usize = 100;

/// Resultatet av en resampling: nøyaktig 100 punkter pluss avstanden
/// mellom dem, slik at profilbyggingen får samme spacing som kurven.
#[derive(Debug, Clone)]
pub struct ResampledPath {
    pub points: Vec<Waypoint>,
    pub spacing: f64,
    pub total_distance: f64,
}

/// Planar avstand mellom to veipunkter: sqrt(dLat² + dLon²).
/// Bevisst IKKE geodetisk – kurveformen er kontrakten, ikke meter.
pub fn distance_between(a: &Waypoint, b: &Waypoint) -> f64 {
    ((b.longitude - a.longitude).powi(2) + (b.latitude - a.latitude).powi(2)).sqrt()
}

/// Avstander mellom alle nabopar i original rekkefølge.
fn segment_distances(waypoints: &[Waypoint]) -> Vec<f64> {
    waypoints
        .windows(2)
        .map(|w| distance_between(&w[0], &w[1]))
        .collect()
}

/// Total stilengde = sum av nabopar-avstandene.
pub fn total_distance(waypoints: &[Waypoint]) -> f64 {
    segment_distances(waypoints).iter().sum()
}

/// sin av "grader" i appens egen konvensjon: sin(π·d/180).
fn sin_deg(d: f64) -> f64 {
    (d * PI / 180.0).sin()
}

/// cos av "grader" i appens egen konvensjon: cos(π·d/180).
fn cos_deg(d: f64) -> f64 {
    (d * PI / 180.0).cos()
}

/// Pseudo-peiling: atan((Δlat/Δlon)·(π/180)).
/// Ikke en ekte geografisk peiling, men selvkonsistent sammen med
/// sin_deg/cos_deg over – formelen skal bevares, ikke "rettes".
/// 0/0-tilfellet (sammenfallende punkter) gir 0.0, aldri NaN.
fn pseudo_bearing(dlon: f64, dlat: f64) -> f64 {
    if dlon == 0.0 && dlat == 0.0 {
        return 0.0;
    }
    ((dlat / dlon) * (PI / 180.0)).atan()
}

/// Finn indeksen til veipunktet den neste resamplingen skal sikte mot:
/// det første hvis kumulative distanse når eller passerer `target`.
/// Stopper ved siste segment, så indeksen kan aldri gå utenfor stien
/// selv når flyttallsdrift gjør target > total lengde.
fn next_waypoint(distances: &[f64], target: f64) -> usize {
    let mut covered = 0.0;
    let mut next = 0;
    for (i, d) in distances.iter().enumerate() {
        if covered >= target {
            break;
        }
        covered += d;
        next = i + 1;
    }
    next
}

/// Resample stien til nøyaktig 100 jevnt fordelte punkter (etter kumulativ
/// planar distanse). Punkt 0 er alltid første veipunkt; hvert videre punkt
/// er forrige resamplede punkt pluss en vektor med lengde `spacing` rettet
/// mot neste veipunkt via pseudo-peilingen.
pub fn resample(waypoints: &[Waypoint]) -> Result<ResampledPath, ProfileError> {
    if waypoints.len() < 2 {
        return Err(ProfileError::InsufficientWaypoints(waypoints.len()));
    }

    let distances = segment_distances(waypoints);
    let total: f64 = distances.iter().sum();
    let spacing = total / RESAMPLE_POINTS as f64;

    let mut points = Vec::with_capacity(RESAMPLE_POINTS);
    points.push(waypoints[0]);

    for i in 1..RESAMPLE_POINTS {
        let target = i as f64 * spacing;
        let k = next_waypoint(&distances, target);

        // Peiling regnes fra forrige RESAMPLEDE punkt, ikke fra et veipunkt.
        let prev = points[i - 1];
        let dlon = prev.longitude - waypoints[k].longitude;
        let dlat = prev.latitude - waypoints[k].latitude;
        let bearing = pseudo_bearing(dlon, dlat);

        points.push(Waypoint {
            latitude: prev.latitude + spacing * sin_deg(bearing),
            longitude: prev.longitude + spacing * cos_deg(bearing),
        });
    }

    Ok(ResampledPath {
        points,
        spacing,
        total_distance: total,
    })
}
