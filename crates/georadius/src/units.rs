//! Measurement units and the mean-Earth-radius table.
//!
//! Every unit maps to a fixed mean Earth radius expressed at that unit's
//! scale, so `distance / radius` yields an angle in radians without any
//! cross-unit conversion. The table is the contract: callers pick a unit,
//! and every length the calculator touches (input distance, output ranges,
//! evaluated distances) is in that unit.

use strum::IntoStaticStr;

use crate::error::{GeoRadiusError, Result};

/// Units of distance accepted by radius queries.
///
/// Keys parse case-insensitively (`"KM"` == `"km"`). `Display` and
/// [`as_key`](MeasurementUnit::as_key) render the canonical long key, so an
/// alias on the way in (`"m"`, `"km"`) normalizes on the way out.
///
/// `"m"` is a historical alias for *miles*, not meters — callers wanting
/// meters must spell it out.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasurementUnit {
    /// Statute miles. The default unit when none is given.
    #[default]
    #[strum(to_string = "miles", serialize = "m")]
    #[cfg_attr(feature = "serde", serde(alias = "m"))]
    Miles,
    #[strum(to_string = "kilometers", serialize = "km")]
    #[cfg_attr(feature = "serde", serde(alias = "km"))]
    Kilometers,
    Meters,
    Feet,
    NauticalMiles,
}

impl MeasurementUnit {
    /// Mean Earth radius expressed in this unit.
    pub fn mean_earth_radius(self) -> f64 {
        match self {
            Self::Miles => 3959.0,
            Self::Kilometers => 6371.0,
            Self::Meters => 6_371_000.0,
            Self::Feet => 20_902_231.0,
            Self::NauticalMiles => 3440.06479,
        }
    }

    /// Parse a unit key (case-insensitive, aliases accepted).
    ///
    /// This is the one place radius queries can fail.
    pub fn from_key(key: &str) -> Result<Self> {
        key.parse()
            .map_err(|_| GeoRadiusError::InvalidMeasurement(key.to_string()))
    }

    /// The canonical key for this unit (`"miles"`, `"kilometers"`, ...).
    pub fn as_key(self) -> &'static str {
        self.into()
    }
}

/// Look up the mean Earth radius for an optional unit key.
///
/// `None` resolves the default unit (miles). Unknown keys fail with
/// [`GeoRadiusError::InvalidMeasurement`].
pub fn resolve_mean_radius(key: Option<&str>) -> Result<f64> {
    let unit = match key {
        Some(key) => MeasurementUnit::from_key(key)?,
        None => MeasurementUnit::default(),
    };
    Ok(unit.mean_earth_radius())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_table_constants() {
        assert_eq!(resolve_mean_radius(Some("miles")).unwrap(), 3959.0);
        assert_eq!(resolve_mean_radius(Some("m")).unwrap(), 3959.0);
        assert_eq!(resolve_mean_radius(Some("kilometers")).unwrap(), 6371.0);
        assert_eq!(resolve_mean_radius(Some("km")).unwrap(), 6371.0);
        assert_eq!(resolve_mean_radius(Some("meters")).unwrap(), 6_371_000.0);
        assert_eq!(resolve_mean_radius(Some("feet")).unwrap(), 20_902_231.0);
        assert_eq!(
            resolve_mean_radius(Some("nautical_miles")).unwrap(),
            3440.06479
        );
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        assert_eq!(
            MeasurementUnit::from_key("KM").unwrap(),
            MeasurementUnit::Kilometers
        );
        assert_eq!(
            MeasurementUnit::from_key("Miles").unwrap(),
            MeasurementUnit::Miles
        );
        assert_eq!(
            MeasurementUnit::from_key("NAUTICAL_MILES").unwrap(),
            MeasurementUnit::NauticalMiles
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = MeasurementUnit::from_key("furlongs").unwrap_err();
        assert_eq!(err, GeoRadiusError::InvalidMeasurement("furlongs".into()));
        assert!(resolve_mean_radius(Some("")).is_err());
    }

    #[test]
    fn test_default_unit_is_miles() {
        assert_eq!(MeasurementUnit::default(), MeasurementUnit::Miles);
        assert_eq!(
            resolve_mean_radius(None).unwrap(),
            resolve_mean_radius(Some("miles")).unwrap()
        );
    }

    #[test]
    fn test_canonical_keys_round_trip() {
        for unit in MeasurementUnit::iter() {
            assert_eq!(MeasurementUnit::from_key(unit.as_key()).unwrap(), unit);
            assert_eq!(unit.to_string(), unit.as_key());
        }
    }

    #[test]
    fn test_aliases_normalize_to_canonical_keys() {
        assert_eq!(MeasurementUnit::from_key("m").unwrap().as_key(), "miles");
        assert_eq!(
            MeasurementUnit::from_key("km").unwrap().as_key(),
            "kilometers"
        );
    }
}
