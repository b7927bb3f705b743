pub mod elevation;
pub mod elevation_api;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod profile;
pub mod resample;
pub mod storage;

pub use elevation::{ElevationProvider, StaticElevationProvider};
pub use elevation_api::OpenElevationClient;
pub use errors::ProfileError;
pub use models::{ElevationSample, PathProfile, Waypoint};
pub use profile::{build_profile, profile_for_markers};
pub use resample::{distance_between, resample, total_distance, ResampledPath, RESAMPLE_POINTS};
pub use storage::MarkerStore;
