use serde::{Deserialize, Serialize};

/// Brukerplassert punkt (lat/long) fra kartskjermen.
/// Resamplede punkter har samme form og gjenbruker typen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub latitude: f64,  // grader
    pub longitude: f64, // grader
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Ett punkt i høydeprofilen: kumulativ distanse fra start + høyde.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub distance_from_start: f64,
    pub elevation: f64, // meter
}

/// Ferdig høydeprofil for grafskjermen: 100 samples i stigende distanse,
/// pluss de to oppsummeringsverdiene grafen viser som tekst.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathProfile {
    pub samples: Vec<ElevationSample>,
    pub max_elevation: f64,
    pub distance_at_max: f64,
}

impl PathProfile {
    /// Tekst for "høyeste punkt"-etiketten.
    pub fn highest_point_label(&self) -> String {
        format!("Highest point: {:.1} m", self.max_elevation)
    }

    /// Tekst for "distanse ved høyeste punkt"-etiketten.
    pub fn distance_at_max_label(&self) -> String {
        format!("At distance: {:.2}", self.distance_at_max)
    }
}
