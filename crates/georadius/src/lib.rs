//! # georadius
//!
//! Bounding-box and great-circle distance expressions for
//! "find records near a point" SQL queries.
//!
//! ## Features
//!
//! - **Bounding-box pre-filter**: a degree-space rectangle over-approximating
//!   the search disc, for cheap indexed range checks
//! - **Exact distance**: the spherical law of cosines over two coordinate
//!   columns and a fixed origin, as literal SQL, parameterized SQL, or an
//!   in-process evaluator
//! - **Unit table**: miles, kilometers, meters, feet and nautical miles, each
//!   with its mean Earth radius, parsed case-insensitively
//!
//! The crate builds query *pieces*; executing them against a data store is
//! the caller's job. The intended embedding is range filter first, exact
//! expression second:
//!
//! ```sql
//! SELECT *, <distance expression> AS distance
//! FROM places
//! WHERE lat BETWEEN :min_lat AND :max_lat
//!   AND lng BETWEEN :min_lng AND :max_lng
//! HAVING distance <= :radius
//! ORDER BY distance
//! ```
//!
//! ## Example
//!
//! ```
//! use georadius::{BindStyle, DistanceCalculator, MeasurementUnit, Point};
//!
//! let calc = DistanceCalculator::new().with_columns("latitude", "longitude");
//!
//! // Everything within 50 km of central Beijing.
//! let query = calc.within(
//!     50.0,
//!     Some(MeasurementUnit::Kilometers),
//!     Some(Point::new(116.397477, 39.908692)),
//! );
//!
//! let (min_lat, max_lat) = query.bounds.lat_range();
//! assert!((min_lat - 39.459).abs() < 1e-3);
//! assert!((max_lat - 40.358).abs() < 1e-3);
//!
//! // Parameterized SQL; the caller binds the values.
//! let (sql, params) = query.expression.to_sql(BindStyle::Numbered);
//! assert!(sql.contains("radians(latitude)"));
//! assert_eq!(params[0], 6371.0);
//!
//! // Or evaluate the same formula in-process.
//! let tiananmen = Point::new(116.3913, 39.9075);
//! assert!(query.expression.evaluate(tiananmen) < 1.0);
//! ```
//!
//! Coordinate and distance inputs are deliberately unvalidated `f64`s; the
//! one error the crate raises is [`GeoRadiusError::InvalidMeasurement`] for
//! an unknown unit key. For callers ingesting untyped text there is
//! [`lenient_f64`], which coerces junk to `0.0` instead of failing.

pub mod calculator;
pub mod coerce;
pub mod error;
pub mod expression;
pub mod spatial;
pub mod units;

// Re-exports for convenience
pub use calculator::{DistanceCalculator, OutsideQuery, RadiusQuery};
pub use coerce::lenient_f64;
pub use error::{GeoRadiusError, Result};
pub use expression::{BindStyle, DistanceExpression};
pub use spatial::{bounding_box, great_circle_distance, BoundingBox};
pub use units::{resolve_mean_radius, MeasurementUnit};

pub use geo_types::Point;
