use ordered_float::OrderedFloat;

use crate::elevation::ElevationProvider;
use crate::errors::ProfileError;
use crate::metrics::{self, resample_total};
use crate::models::{ElevationSample, PathProfile, Waypoint};
use crate::resample::{resample, ResampledPath};

/// Bygg høydeprofilen for en ferdig resamplet sti: hent én høyde per punkt,
/// par den med kumulativ distanse `spacing·(i+1)`, og regn ut maks-høyden og
/// distansen der den inntreffer (samme indeks for begge).
pub fn build_profile(
    path: &ResampledPath,
    provider: &dyn ElevationProvider,
) -> Result<PathProfile, ProfileError> {
    let elevations = provider.elevations(&path.points)?;

    // Tilbyderen skal levere én høyde per punkt – alt annet er et ødelagt svar.
    if elevations.len() != path.points.len() {
        return Err(ProfileError::MalformedResponse(format!(
            "ventet {} høyder, fikk {}",
            path.points.len(),
            elevations.len()
        )));
    }

    let samples: Vec<ElevationSample> = elevations
        .iter()
        .enumerate()
        .map(|(i, &elevation)| ElevationSample {
            distance_from_start: path.spacing * (i + 1) as f64,
            elevation,
        })
        .collect();

    let (index_of_max, &max_elevation) = elevations
        .iter()
        .enumerate()
        .max_by_key(|(_, e)| OrderedFloat(**e))
        .ok_or_else(|| ProfileError::MalformedResponse("tom results-liste".into()))?;

    Ok(PathProfile {
        samples,
        max_elevation,
        distance_at_max: path.spacing * (index_of_max + 1) as f64,
    })
}

/// Hele flyten grafskjermen trigger per besøk: veipunkter → resample →
/// elevation-oppslag → profil. Ett forsøk; feil propageres til kalleren,
/// som stopper lasteindikatoren og viser tom graf. Er visningen borte når
/// svaret kommer, kaster kalleren bare resultatet.
pub fn profile_for_markers(
    markers: &[Waypoint],
    provider: &dyn ElevationProvider,
) -> Result<PathProfile, ProfileError> {
    let path = resample(markers)?;
    resample_total(metrics::global()).inc();
    build_profile(&path, provider)
}
