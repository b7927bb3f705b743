use crate::errors::ProfileError;
use crate::models::Waypoint;

/// Sømmen mot høydedata: gitt punktene i rekkefølge, returner én høyde
/// (meter) per punkt, i samme rekkefølge.
/// Prod: OpenElevationClient. Test: StaticElevationProvider.
pub trait ElevationProvider {
    fn elevations(&self, points: &[Waypoint]) -> Result<Vec<f64>, ProfileError>;
}

/// Statisk tilbyder for tester – returnerer en forhåndsbestemt liste
/// uavhengig av punktene.
#[derive(Debug, Clone, Default)]
pub struct StaticElevationProvider {
    pub elevations: Vec<f64>,
}

impl ElevationProvider for StaticElevationProvider {
    fn elevations(&self, _points: &[Waypoint]) -> Result<Vec<f64>, ProfileError> {
        Ok(self.elevations.clone())
    }
}
