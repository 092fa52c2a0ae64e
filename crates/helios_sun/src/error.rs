//! Error types for solar position queries.

use helios_time::TimeError;
use thiserror::Error;

/// Errors from solar position computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SunError {
    /// Invalid instant.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Latitude outside [-90, 90] or a non-finite coordinate.
    #[error("invalid location: longitude {longitude_deg}, latitude {latitude_deg}")]
    InvalidLocation {
        longitude_deg: f64,
        latitude_deg: f64,
    },
}
