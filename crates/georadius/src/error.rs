//! Error types for radius query construction.

/// Errors produced while building radius queries.
///
/// Unit resolution is the only fallible step: coordinates and distances are
/// plain `f64`s and pass through unchecked, matching the permissive contract
/// documented on [`crate::DistanceCalculator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoRadiusError {
    /// The requested unit key is not in the measurement table.
    #[error("invalid measurement unit: {0:?}")]
    InvalidMeasurement(String),
}

pub type Result<T> = std::result::Result<T, GeoRadiusError>;
