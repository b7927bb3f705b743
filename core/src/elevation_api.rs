// core/src/elevation_api.rs
use serde::Deserialize;
use ureq::Agent;

use crate::elevation::ElevationProvider;
use crate::errors::ProfileError;
use crate::metrics::{self, elevation_lookup_error_total, elevation_lookup_total};
use crate::models::Waypoint;

const BASE_URL: &str = "https://api.open-elevation.com/api/v1/lookup";

#[derive(Debug, Clone, Deserialize)]
struct LookupResp {
    results: Vec<LookupResult>,
}

// Ukjente felter (latitude/longitude m.m.) ignoreres av serde.
#[derive(Debug, Clone, Deserialize)]
struct LookupResult {
    elevation: f64,
}

/// Open-Elevation-klient – enkel blocking-versjon (ureq).
/// Ett batchet kall per profilbygging, ingen retries, ingen cache.
pub struct OpenElevationClient {
    agent: Agent,
}

impl OpenElevationClient {
    pub fn new() -> Self {
        // En enkel agent; ureq bruker rustls når "tls" er aktivert
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(10))
            .build();
        Self { agent }
    }
}

impl Default for OpenElevationClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipe-separert `lat,long`-liste slik API-et forventer.
fn locations_query(points: &[Waypoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.latitude, p.longitude))
        .collect::<Vec<_>>()
        .join("|")
}

impl ElevationProvider for OpenElevationClient {
    fn elevations(&self, points: &[Waypoint]) -> Result<Vec<f64>, ProfileError> {
        let m = metrics::global();
        elevation_lookup_total(m).inc();

        // .query() prosent-enkoder verdien (`|` og `,` i locations-lista)
        let resp = self
            .agent
            .get(BASE_URL)
            .query("locations", &locations_query(points))
            .call()
            .map_err(|e| {
                elevation_lookup_error_total(m).inc();
                log::warn!("elevation-oppslag feilet: {e}");
                ProfileError::Network(e.to_string())
            })?;

        // serde_path_to_error gir JSON-stien i feilmeldingen når svaret
        // mangler felter, f.eks. `results[3].elevation`.
        let de = &mut serde_json::Deserializer::from_reader(resp.into_reader());
        let body: LookupResp = serde_path_to_error::deserialize(de).map_err(|e| {
            elevation_lookup_error_total(m).inc();
            log::warn!("elevation-svar kunne ikke tolkes: {e}");
            ProfileError::MalformedResponse(e.to_string())
        })?;

        if body.results.len() != points.len() {
            elevation_lookup_error_total(m).inc();
            return Err(ProfileError::MalformedResponse(format!(
                "ventet {} results, fikk {}",
                points.len(),
                body.results.len()
            )));
        }

        println!(
            "[OpenElevation] {} punkter => {:.1}..{:.1} m",
            body.results.len(),
            body.results
                .iter()
                .map(|r| r.elevation)
                .fold(f64::INFINITY, f64::min),
            body.results
                .iter()
                .map(|r| r.elevation)
                .fold(f64::NEG_INFINITY, f64::max),
        );

        Ok(body.results.into_iter().map(|r| r.elevation).collect())
    }
}
