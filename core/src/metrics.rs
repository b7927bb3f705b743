use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Tellere for kjernen. Egen Registry slik at verts-appen kan eksponere
/// dem der den vil (eller la være).
pub struct Metrics {
    pub registry: Registry,
    elevation_lookup_total: IntCounter,
    elevation_lookup_error_total: IntCounter,
    resample_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let elevation_lookup_total = IntCounter::new(
            "elevation_lookup_total",
            "Antall elevation-oppslag mot API-et",
        )
        .unwrap();
        let elevation_lookup_error_total = IntCounter::new(
            "elevation_lookup_error_total",
            "Antall feilede elevation-oppslag (transport eller parse)",
        )
        .unwrap();
        let resample_total =
            IntCounter::new("resample_total", "Antall gjennomførte resamplinger").unwrap();

        registry
            .register(Box::new(elevation_lookup_total.clone()))
            .unwrap();
        registry
            .register(Box::new(elevation_lookup_error_total.clone()))
            .unwrap();
        registry.register(Box::new(resample_total.clone())).unwrap();

        Self {
            registry,
            elevation_lookup_total,
            elevation_lookup_error_total,
            resample_total,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Delt global instans (kjernen har én prosess, ett registry).
pub fn global() -> &'static Metrics {
    static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);
    &METRICS
}

pub fn elevation_lookup_total(m: &Metrics) -> &IntCounter {
    &m.elevation_lookup_total
}

pub fn elevation_lookup_error_total(m: &Metrics) -> &IntCounter {
    &m.elevation_lookup_error_total
}

pub fn resample_total(m: &Metrics) -> &IntCounter {
    &m.resample_total
}
