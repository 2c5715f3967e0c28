//! Geometric primitives for chart positioning.
//!
//! This module provides the coordinate types used throughout Starchart,
//! from the three-dimensional position of a star system to the planar
//! points that labels and links are placed at.
//!
//! # Overview
//!
//! - [`Cartesian`] - A position in space, in the same unit as catalog distances
//! - [`Point`] - A 2D coordinate in chart space (the x/y plane of [`Cartesian`])
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Chart space is the equatorial frame seen from above the celestial north
//! pole:
//!
//! ```text
//!          +Y (RA 6h)
//!           ▲
//!           │
//!           │
//!   ────────┼────────► +X (RA 0h)
//!           │
//!           │
//! ```
//!
//! - **X-axis**: Towards right ascension 0h on the celestial equator
//! - **Y-axis**: Towards right ascension 6h on the celestial equator
//! - **Z-axis**: Towards the celestial north pole (the "depth" shown on labels)
//!
//! Unlike SVG, +Y points up; exporters flip it when mapping to the canvas.

use serde::Deserialize;

/// A 2D point in chart space.
///
/// # Examples
///
/// ```
/// # use starchart_core::geometry::Point;
/// let p1 = Point::new(0.0, 0.0);
/// let p2 = Point::new(3.0, 4.0);
///
/// assert_eq!(p1.distance_to(p2), 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 1.5);
/// assert_eq!(mid.y(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use starchart_core::geometry::Point;
    /// let anchor = Point::new(1.0, 2.0);
    /// let offset = Point::new(0.25, -0.5);
    ///
    /// let callout = anchor.add_point(offset);
    /// assert_eq!(callout.x(), 1.25);
    /// assert_eq!(callout.y(), 1.5);
    /// ```
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Calculates the planar Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f64 {
        other.sub_point(self).hypot()
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A position in three-dimensional space.
///
/// Components share the unit of the distance they were derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cartesian {
    x: f64,
    y: f64,
    z: f64,
}

impl Cartesian {
    /// Creates a new position from its components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts spherical coordinates to a Cartesian position.
    ///
    /// `longitude` is measured in the x/y plane from +X towards +Y, and
    /// `latitude` from that plane towards +Z. Both are in radians.
    ///
    /// # Examples
    ///
    /// ```
    /// # use starchart_core::geometry::Cartesian;
    /// let position = Cartesian::from_spherical(0.0, 0.0, 4.2);
    /// assert_eq!(position, Cartesian::new(4.2, 0.0, 0.0));
    /// ```
    pub fn from_spherical(longitude: f64, latitude: f64, radius: f64) -> Self {
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let (sin_lon, cos_lon) = longitude.sin_cos();
        Self {
            x: radius * cos_lat * cos_lon,
            y: radius * cos_lat * sin_lon,
            z: radius * sin_lat,
        }
    }

    /// Returns the x component
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y component
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the z component
    pub fn z(self) -> f64 {
        self.z
    }

    /// Returns the height above or below the chart plane (the z component)
    pub fn depth(self) -> f64 {
        self.z
    }

    /// Projects onto the chart plane by dropping the z component
    pub fn planar(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Calculates the Euclidean distance from the origin
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// A rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a zero-sized bounds located at a single point
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Returns the smallest bounds covering every point, or `None` if empty
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, Self::include))
    }

    /// Grows the bounds to include a point
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Merges two bounds into the smallest bounds covering both
    pub fn merge(&self, other: &Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns the horizontal extent
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the vertical extent
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn angle_strategy() -> impl Strategy<Value = (f64, f64)> {
        (
            0.0f64..std::f64::consts::TAU,
            -std::f64::consts::FRAC_PI_2..=std::f64::consts::FRAC_PI_2,
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The length of a spherical conversion equals its radius.
    fn check_spherical_preserves_radius(
        (longitude, latitude): (f64, f64),
        radius: f64,
    ) -> Result<(), TestCaseError> {
        let position = Cartesian::from_spherical(longitude, latitude, radius);
        let squared = position.x().powi(2) + position.y().powi(2) + position.z().powi(2);

        prop_assert!(approx_eq!(f64, squared, radius * radius, epsilon = 1e-9 * (1.0 + radius * radius)));
        Ok(())
    }

    /// The midpoint is equally distant from both endpoints.
    fn check_midpoint_is_equidistant(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let mid = p1.midpoint(p2);

        prop_assert!(approx_eq!(
            f64,
            mid.distance_to(p1),
            mid.distance_to(p2),
            epsilon = 1e-9
        ));
        Ok(())
    }

    /// Distance is symmetric.
    fn check_distance_is_symmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        prop_assert!(approx_eq!(f64, p1.distance_to(p2), p2.distance_to(p1)));
        Ok(())
    }

    // ===================
    // Property Tests
    // ===================

    proptest! {
        #[test]
        fn spherical_preserves_radius(angles in angle_strategy(), radius in 0.0f64..100.0) {
            check_spherical_preserves_radius(angles, radius)?;
        }

        #[test]
        fn midpoint_is_equidistant(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_equidistant(p1, p2)?;
        }

        #[test]
        fn distance_is_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_distance_is_symmetric(p1, p2)?;
        }
    }
}
