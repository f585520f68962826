//! Structured great-circle distance expressions.
//!
//! Instead of an interpolated SQL string, the calculator hands callers a
//! [`DistanceExpression`] value holding the column names, the origin and the
//! mean radius. The caller chooses the rendition: a numeric evaluator for
//! in-process filtering, `Display` for literal SQL, or a parameterized
//! template where the driver binds the origin and radius.

use std::fmt;

use geo_types::Point;

use crate::spatial::great_circle_distance;

/// Placeholder style for parameterized SQL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindStyle {
    /// `$1`, `$2`, ... — numbered placeholders that may repeat, as in
    /// PostgreSQL wire protocol drivers.
    Numbered,
    /// `?` — anonymous placeholders; every occurrence consumes a fresh
    /// parameter, as in SQLite and MySQL drivers.
    Question,
}

/// The exact spherical-law-of-cosines distance over two coordinate columns
/// and a fixed origin:
///
/// ```text
/// R * acos(cos(rad(lat)) * cos(rad(col_lat))
///          * cos(rad(col_lng) - rad(lng))
///          + sin(rad(lat)) * sin(rad(col_lat)))
/// ```
///
/// `R` is the mean Earth radius in the query's unit, so the expression
/// evaluates to a length in that unit. Column names are developer
/// configuration, not end-user input; they are spliced verbatim into the SQL
/// renditions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceExpression {
    lat_column: String,
    lng_column: String,
    origin: Point<f64>,
    mean_radius: f64,
}

impl DistanceExpression {
    pub(crate) fn new(
        lat_column: impl Into<String>,
        lng_column: impl Into<String>,
        origin: Point<f64>,
        mean_radius: f64,
    ) -> Self {
        Self {
            lat_column: lat_column.into(),
            lng_column: lng_column.into(),
            origin,
            mean_radius,
        }
    }

    /// The latitude column the expression references.
    pub fn lat_column(&self) -> &str {
        &self.lat_column
    }

    /// The longitude column the expression references.
    pub fn lng_column(&self) -> &str {
        &self.lng_column
    }

    /// The fixed reference point embedded in the expression.
    pub fn origin(&self) -> Point<f64> {
        self.origin
    }

    /// Mean Earth radius in the query's unit.
    pub fn mean_radius(&self) -> f64 {
        self.mean_radius
    }

    /// Evaluate the expression at a candidate point.
    ///
    /// This is the same formula the SQL renditions spell out, computed
    /// in-process; the result is in the query's unit.
    pub fn evaluate(&self, point: Point<f64>) -> f64 {
        great_circle_distance(self.origin, point, self.mean_radius)
    }

    /// Render parameterized SQL plus the parameter values the caller binds.
    ///
    /// Parameters cover the origin and radius; column names stay inline.
    /// With [`BindStyle::Numbered`] the parameters are
    /// `[mean_radius, lat, lng]` and the latitude placeholder repeats; with
    /// [`BindStyle::Question`] each placeholder is distinct and the values
    /// repeat instead.
    pub fn to_sql(&self, style: BindStyle) -> (String, Vec<f64>) {
        let (lat, lng) = (self.origin.y(), self.origin.x());
        match style {
            BindStyle::Numbered => {
                let sql = format!(
                    "$1 * acos(cos(radians($2)) * cos(radians({lat_col})) \
                     * cos(radians({lng_col}) - radians($3)) \
                     + sin(radians($2)) * sin(radians({lat_col})))",
                    lat_col = self.lat_column,
                    lng_col = self.lng_column,
                );
                (sql, vec![self.mean_radius, lat, lng])
            }
            BindStyle::Question => {
                let sql = format!(
                    "? * acos(cos(radians(?)) * cos(radians({lat_col})) \
                     * cos(radians({lng_col}) - radians(?)) \
                     + sin(radians(?)) * sin(radians({lat_col})))",
                    lat_col = self.lat_column,
                    lng_col = self.lng_column,
                );
                (sql, vec![self.mean_radius, lat, lng, lat])
            }
        }
    }
}

/// Literal SQL with the origin and radius embedded as numeric literals.
impl fmt::Display for DistanceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, lng) = (self.origin.y(), self.origin.x());
        write!(
            f,
            "{radius} * acos(cos(radians({lat})) * cos(radians({lat_col})) \
             * cos(radians({lng_col}) - radians({lng})) \
             + sin(radians({lat})) * sin(radians({lat_col})))",
            radius = self.mean_radius,
            lat_col = self.lat_column,
            lng_col = self.lng_column,
        )
    }
}
