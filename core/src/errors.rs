use thiserror::Error;

/// Feilkinder for resample + profilbygging. Ingen automatiske retries:
/// alle feil er terminale for dette skjermbesøket, brukeren må åpne
/// grafskjermen på nytt for å prøve igjen.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Færre enn 2 veipunkter – det finnes ingen sti å resample.
    #[error("minst 2 veipunkter kreves, fikk {0}")]
    InsufficientWaypoints(usize),

    /// Transportfeil mot elevation-API-et.
    #[error("nettverksfeil ved elevation-oppslag: {0}")]
    Network(String),

    /// Svar fra elevation-API-et mangler forventede felter eller lengde.
    #[error("ugyldig svar fra elevation-API: {0}")]
    MalformedResponse(String),
}
