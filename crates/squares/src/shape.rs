//! Traits for shapes with rigid motions and for their symmetry enumerators.

use std::fmt::Display;

use crate::point::Point;

/// A planar shape that supports rigid motions.
///
/// Implementations return new values; `self` is never mutated.
pub trait Shape: Clone + Display {
    /// Rotate counterclockwise by `degrees` about [`Shape::center`].
    fn rotate_by(&self, degrees: i32) -> Self;
    /// Shift every vertex by `(dx, dy)`.
    fn translate_by(&self, dx: f64, dy: f64) -> Self;
    fn center(&self) -> Point;
}

/// Enumerates the symmetry group of a shape type.
pub trait Symmetries<S: Shape> {
    /// All images of `shape` under the group, in a fixed order.
    fn symmetries_of(&self, shape: &S) -> Vec<S>;
    /// Whether `s2` is (name-insensitively) one of the images of `s1`.
    fn are_symmetric(&self, s1: &S, s2: &S) -> bool;
}
