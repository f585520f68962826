//! The distance calculator and its query results.

use geo_types::Point;

use crate::expression::DistanceExpression;
use crate::spatial::{bounding_box, BoundingBox};
use crate::units::MeasurementUnit;

/// Builds bounding boxes and exact distance expressions for
/// "records near a point" queries.
///
/// State is configuration only: the latitude/longitude column names the
/// expressions reference (defaults `"lat"`/`"lng"`) and an optional stored
/// reference point for callers issuing several queries around one origin.
/// Construction goes through consuming builder methods, so a configured
/// calculator is immutable and freely shareable.
///
/// Coordinates and distances are plain `f64`s and pass through unchecked:
/// out-of-range latitudes, negative distances and an unset origin (treated
/// as `(0, 0)`) are the caller's to validate. The only failure the crate
/// reports is an unknown unit key at string resolution
/// ([`crate::resolve_mean_radius`] / [`MeasurementUnit::from_key`]).
///
/// ```
/// use georadius::{DistanceCalculator, MeasurementUnit, Point};
///
/// let calc = DistanceCalculator::new();
/// let query = calc.within(
///     50.0,
///     Some(MeasurementUnit::Kilometers),
///     Some(Point::new(116.397477, 39.908692)),
/// );
///
/// let (min_lat, max_lat) = query.bounds.lat_range();
/// assert!(min_lat < 39.46 && max_lat > 40.35);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceCalculator {
    lat_column: String,
    lng_column: String,
    origin: Option<Point<f64>>,
}

impl Default for DistanceCalculator {
    fn default() -> Self {
        Self {
            lat_column: Self::DEFAULT_LAT_COLUMN.to_string(),
            lng_column: Self::DEFAULT_LNG_COLUMN.to_string(),
            origin: None,
        }
    }
}

/// Result of a [`within`](DistanceCalculator::within) computation: the cheap
/// bounding-box pre-filter plus the exact distance expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusQuery {
    pub expression: DistanceExpression,
    pub bounds: BoundingBox,
    /// The query radius, in `unit`.
    pub distance: f64,
    pub unit: MeasurementUnit,
}

/// Result of an [`outside`](DistanceCalculator::outside) computation.
///
/// Carries no bounding box: a rectangle cannot pre-filter "farther than"
/// without excluding the inner disc, so callers apply the expression alone
/// as a `distance > threshold` predicate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutsideQuery {
    pub expression: DistanceExpression,
    /// The query radius, in `unit`.
    pub distance: f64,
    pub unit: MeasurementUnit,
}

impl DistanceCalculator {
    const DEFAULT_LAT_COLUMN: &'static str = "lat";
    const DEFAULT_LNG_COLUMN: &'static str = "lng";

    /// A calculator with default column names and no stored origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latitude/longitude column names referenced by expressions.
    pub fn with_columns(mut self, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        self.lat_column = lat.into();
        self.lng_column = lng.into();
        self
    }

    /// Store a reference point used when a query passes `None` for its
    /// origin.
    pub fn with_origin(mut self, origin: Point<f64>) -> Self {
        self.origin = Some(origin);
        self
    }

    /// The configured latitude column name.
    pub fn lat_column(&self) -> &str {
        &self.lat_column
    }

    /// The configured longitude column name.
    pub fn lng_column(&self) -> &str {
        &self.lng_column
    }

    /// The stored reference point, if any.
    pub fn origin(&self) -> Option<Point<f64>> {
        self.origin
    }

    /// An explicit origin always wins, zeros included; `(0, 0)` stands in
    /// when neither an argument nor stored state provides one.
    fn resolve_origin(&self, origin: Option<Point<f64>>) -> Point<f64> {
        origin
            .or(self.origin)
            .unwrap_or_else(|| Point::new(0.0, 0.0))
    }

    fn expression(&self, origin: Point<f64>, mean_radius: f64) -> DistanceExpression {
        DistanceExpression::new(self.lat_column(), self.lng_column(), origin, mean_radius)
    }

    /// Build a "within `distance` of a point" query.
    ///
    /// Returns the degree-space bounding box for cheap range pre-filtering
    /// and the exact distance expression for the refine step. `unit`
    /// defaults to miles; `origin` falls back to the stored reference point.
    pub fn within(
        &self,
        distance: f64,
        unit: Option<MeasurementUnit>,
        origin: Option<Point<f64>>,
    ) -> RadiusQuery {
        let unit = unit.unwrap_or_default();
        let origin = self.resolve_origin(origin);
        let mean_radius = unit.mean_earth_radius();

        RadiusQuery {
            expression: self.expression(origin, mean_radius),
            bounds: bounding_box(origin, distance, mean_radius),
            distance,
            unit,
        }
    }

    /// Build a "farther than `distance` from a point" query.
    ///
    /// Same expression as [`within`](Self::within), no bounding box.
    pub fn outside(
        &self,
        distance: f64,
        unit: Option<MeasurementUnit>,
        origin: Option<Point<f64>>,
    ) -> OutsideQuery {
        let unit = unit.unwrap_or_default();
        let origin = self.resolve_origin(origin);

        OutsideQuery {
            expression: self.expression(origin, unit.mean_earth_radius()),
            distance,
            unit,
        }
    }
}

impl RadiusQuery {
    /// The two BETWEEN range checks for the bounding-box pre-filter,
    /// with the bounds embedded as literals.
    pub fn prefilter_sql(&self) -> String {
        format!(
            "{lat_col} BETWEEN {min_lat} AND {max_lat} \
             AND {lng_col} BETWEEN {min_lng} AND {max_lng}",
            lat_col = self.expression.lat_column(),
            lng_col = self.expression.lng_column(),
            min_lat = self.bounds.min_lat,
            max_lat = self.bounds.max_lat,
            min_lng = self.bounds.min_lng,
            max_lng = self.bounds.max_lng,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_within_beijing_50km() {
        let calc = DistanceCalculator::new();
        let query = calc.within(
            50.0,
            Some(MeasurementUnit::Kilometers),
            Some(Point::new(116.397477, 39.908692)),
        );

        assert_abs_diff_eq!(query.bounds.min_lat, 39.459, epsilon = 1e-3);
        assert_abs_diff_eq!(query.bounds.max_lat, 40.358, epsilon = 1e-3);
        assert_eq!(query.distance, 50.0);
        assert_eq!(query.unit, MeasurementUnit::Kilometers);

        let sql = query.expression.to_string();
        assert!(sql.contains("radians(lat)"));
        assert!(sql.contains("radians(lng)"));
        assert!(sql.contains("39.908692"));
        assert!(sql.contains("116.397477"));
    }

    #[test]
    fn test_outside_has_no_bounds() {
        let calc = DistanceCalculator::new();
        let query = calc.outside(
            10.0,
            Some(MeasurementUnit::Miles),
            Some(Point::new(0.0, 0.0)),
        );

        assert_eq!(query.distance, 10.0);
        assert_eq!(query.unit, MeasurementUnit::Miles);
        assert_eq!(query.expression.mean_radius(), 3959.0);
        assert_eq!(query.expression.evaluate(Point::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_omitted_unit_defaults_to_miles() {
        let calc = DistanceCalculator::new();
        let origin = Some(Point::new(-74.0060, 40.7128));

        let implicit = calc.within(10.0, None, origin);
        let explicit = calc.within(10.0, Some(MeasurementUnit::Miles), origin);
        assert_eq!(implicit, explicit);

        let implicit = calc.outside(10.0, None, origin);
        let explicit = calc.outside(10.0, Some(MeasurementUnit::Miles), origin);
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_stored_origin_is_the_fallback() {
        let calc = DistanceCalculator::new().with_origin(Point::new(116.397477, 39.908692));

        let query = calc.within(50.0, Some(MeasurementUnit::Kilometers), None);
        assert_eq!(query.expression.origin(), Point::new(116.397477, 39.908692));
    }

    #[test]
    fn test_explicit_zero_origin_overrides_stored_origin() {
        // (0, 0) is a real point on the equator and prime meridian, not a
        // missing argument.
        let calc = DistanceCalculator::new().with_origin(Point::new(116.397477, 39.908692));

        let query = calc.within(
            50.0,
            Some(MeasurementUnit::Kilometers),
            Some(Point::new(0.0, 0.0)),
        );
        assert_eq!(query.expression.origin(), Point::new(0.0, 0.0));
        assert_abs_diff_eq!(query.bounds.max_lat, 0.4497, epsilon = 1e-4);
    }

    #[test]
    fn test_unset_origin_coerces_to_zero() {
        let calc = DistanceCalculator::new();
        let query = calc.within(50.0, None, None);
        assert_eq!(query.expression.origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_configured_columns_reach_the_sql() {
        let calc = DistanceCalculator::new().with_columns("latitude", "longitude");
        let query = calc.within(5.0, None, Some(Point::new(2.3522, 48.8566)));

        assert!(query.expression.to_string().contains("radians(latitude)"));
        assert!(query.prefilter_sql().starts_with("latitude BETWEEN"));
        assert!(query.prefilter_sql().contains("AND longitude BETWEEN"));
    }

    #[test]
    fn test_prefilter_sql_embeds_the_bounds() {
        let calc = DistanceCalculator::new();
        let query = calc.within(
            50.0,
            Some(MeasurementUnit::Kilometers),
            Some(Point::new(116.397477, 39.908692)),
        );

        let sql = query.prefilter_sql();
        assert!(sql.contains(&query.bounds.min_lat.to_string()));
        assert!(sql.contains(&query.bounds.max_lng.to_string()));
        assert!(query.bounds.contains(Point::new(116.397477, 39.908692)));
    }
}
