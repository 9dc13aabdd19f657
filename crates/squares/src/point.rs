//! Named points in the Euclidean plane.

use std::fmt;

use nalgebra::Vector2;

use crate::util::round2;

/// A point `(x, y)` carrying a name that never changes for the life of the value.
///
/// Transforms do not mutate a point; they return a new one with the same name.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    name: String,
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Coordinate-only equality; names are not compared.
    #[inline]
    pub fn equals_ignoring_name(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Same name, new coordinates.
    #[inline]
    pub fn moved_to(&self, x: f64, y: f64) -> Point {
        Point::new(self.name.clone(), x, y)
    }

    /// Same name, shifted by `(dx, dy)` and rounded to 2 decimals.
    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        self.moved_to(self.x + dx, self.y + dy).rounded()
    }

    #[inline]
    pub(crate) fn rounded(&self) -> Point {
        self.moved_to(round2(self.x), round2(self.y))
    }
}

/// `(name, x.xx, y.yy)`
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.2}, {:.2})", self.name, self.x, self.y)
    }
}
