//! Bounding boxes and great-circle distance.
//!
//! The first-cut bounding box turns a linear radius into degree spans on a
//! sphere of the chosen mean Earth radius. The exact distance uses the
//! spherical law of cosines, structurally identical to the SQL expression
//! rendered by [`crate::DistanceExpression`].

use geo_types::Point;

/// A latitude/longitude rectangle over-approximating a disc.
///
/// Produced by [`bounding_box`]; consumed as a cheap range pre-filter before
/// the exact distance expression is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// The latitude range as `(min, max)`.
    pub fn lat_range(&self) -> (f64, f64) {
        (self.min_lat, self.max_lat)
    }

    /// The longitude range as `(min, max)`.
    pub fn lng_range(&self) -> (f64, f64) {
        (self.min_lng, self.max_lng)
    }

    /// Whether `point` falls inside the box (edges inclusive).
    pub fn contains(&self, point: Point<f64>) -> bool {
        let (lat, lng) = (point.y(), point.x());
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Compute the degree-space bounding box of a disc.
///
/// `distance` and `mean_radius` must share a unit; their ratio is the
/// angular radius in radians. The longitude span is widened by
/// `1 / cos(lat)` to compensate for meridian convergence, so the box always
/// covers the disc. At the poles `cos(lat)` vanishes and the longitude span
/// becomes astronomically large; the box stays an over-approximation and is
/// not special-cased.
pub fn bounding_box(origin: Point<f64>, distance: f64, mean_radius: f64) -> BoundingBox {
    let (lat, lng) = (origin.y(), origin.x());
    let lat_delta = (distance / mean_radius).to_degrees();
    let lng_delta = (distance / mean_radius / lat.to_radians().cos()).to_degrees();

    BoundingBox {
        min_lat: lat - lat_delta,
        max_lat: lat + lat_delta,
        min_lng: lng - lng_delta,
        max_lng: lng + lng_delta,
    }
}

/// Great-circle distance between two points via the spherical law of cosines.
///
/// Returns a length in the unit of `mean_radius`. The cosine is clamped to
/// `[-1, 1]` so coincident points yield exactly `0.0` instead of a NaN from
/// floating-point drift pushing the acos argument out of domain.
pub fn great_circle_distance(from: Point<f64>, to: Point<f64>, mean_radius: f64) -> f64 {
    let (lat1, lng1) = (from.y().to_radians(), from.x().to_radians());
    let (lat2, lng2) = (to.y().to_radians(), to.x().to_radians());

    let cos_angle = lat1.cos() * lat2.cos() * (lng2 - lng1).cos() + lat1.sin() * lat2.sin();
    mean_radius * cos_angle.clamp(-1.0, 1.0).acos()
}
