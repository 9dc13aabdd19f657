//! Squares as four owned, labeled points in canonical slot order.
//!
//! Purpose
//! - Hold four [`Point`]s whose slot order encodes which physical corner is
//!   which (slot 0 top-right-ish, then counterclockwise).
//! - Keep the shape invariant (see `validity`) from construction on; every
//!   transform returns a new `Square` built from fresh point values.
//!
//! Rounding
//! - `translate_by` and `rotate_by` round coordinates to 2 decimals so that
//!   trigonometric drift does not break the exact side-length comparison.
//! - Construction keeps the caller's coordinates as given.

mod validity;

use std::fmt;

use nalgebra::Rotation2;

use crate::cfg::{CENTER_NAME, SLOTS};
use crate::error::SquareError;
use crate::point::Point;
use crate::shape::Shape;

use validity::{canonical_relabeling, is_degenerate, is_valid};

/// Four labeled points forming a square (or the degenerate single-point square).
///
/// Invariants:
/// - `points` satisfies the shape invariant, except after a `rotate_by` whose
///   angle leaves no cyclic relabeling valid (non-multiples of 90°).
/// - No point is shared with another `Square`.
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    points: [Point; SLOTS],
}

impl Square {
    /// Build from the first four of `points` (deep copies, input order kept).
    pub fn new(points: &[Point]) -> Result<Self, SquareError> {
        if points.len() < SLOTS {
            return Err(SquareError::InvalidArity { got: points.len() });
        }
        let candidate: [Point; SLOTS] = std::array::from_fn(|k| points[k].clone());
        Self::from_array(candidate)
    }

    fn from_array(points: [Point; SLOTS]) -> Result<Self, SquareError> {
        if is_valid(&points) {
            Ok(Self { points })
        } else {
            Err(SquareError::InvalidShape)
        }
    }

    /// Whether `points`, in this order, satisfy the shape invariant.
    #[inline]
    pub fn is_valid(points: &[Point; SLOTS]) -> bool {
        is_valid(points)
    }

    #[inline]
    pub fn points(&self) -> &[Point; SLOTS] {
        &self.points
    }

    #[inline]
    pub fn point(&self, slot: usize) -> Option<&Point> {
        self.points.get(slot)
    }

    #[inline]
    pub fn into_points(self) -> [Point; SLOTS] {
        self.points
    }

    /// All four points coordinate-identical.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(&self.points)
    }

    /// Midpoint of the slot 1/3 span in x and of the slot 2/0 span in y.
    ///
    /// Relies on canonical slot order; this is not a generic centroid.
    pub fn center(&self) -> Point {
        let [p0, p1, p2, p3] = &self.points;
        Point::new(
            CENTER_NAME,
            p1.x() + (p3.x() - p1.x()) / 2.0,
            p2.y() + (p0.y() - p2.y()) / 2.0,
        )
    }

    /// Shift every point by `(dx, dy)`, rounding to 2 decimals.
    pub fn translate_by(&self, dx: f64, dy: f64) -> Square {
        Square {
            points: std::array::from_fn(|k| self.points[k].translated(dx, dy)),
        }
    }

    /// Rotate counterclockwise by `degrees` about [`Square::center`].
    ///
    /// After rotating, slot 0 may no longer hold the top-right corner; the first
    /// valid cyclic relabeling is adopted. If none is valid (angles that are not
    /// multiples of 90°) the rotated order is kept as is.
    pub fn rotate_by(&self, degrees: i32) -> Square {
        let center = self.center();
        let theta = std::f64::consts::PI * f64::from(degrees) / 180.0;
        let rot = Rotation2::new(theta);

        let at_origin = self.translate_by(-center.x(), -center.y());
        let turned = Square {
            points: std::array::from_fn(|k| {
                let p = &at_origin.points[k];
                let v = rot * p.coords();
                p.moved_to(v.x, v.y)
            }),
        };
        let back = turned.translate_by(center.x(), center.y());
        let unordered: [Point; SLOTS] = back.points.map(|p| p.rounded());

        match canonical_relabeling(&unordered) {
            Some(points) => Square { points },
            None => {
                if !is_valid(&unordered) {
                    tracing::debug!(
                        degrees,
                        "no cyclic relabeling satisfies the shape invariant; keeping rotated order"
                    );
                }
                Square { points: unordered }
            }
        }
    }

    /// Exchange the labels at slots `i` and `j`, leaving each slot's coordinates.
    ///
    /// Done in two phases on a copy: the two points trade coordinates, then the
    /// two points trade slots.
    pub fn swap_points(&self, i: usize, j: usize) -> Result<Square, SquareError> {
        if i >= SLOTS || j >= SLOTS {
            return Err(SquareError::IndexOutOfRange { i, j });
        }
        Ok(self.swapped(i, j))
    }

    /// `swap_points` for indices already known to be in range.
    pub(crate) fn swapped(&self, i: usize, j: usize) -> Square {
        debug_assert!(i < SLOTS && j < SLOTS);
        let (pi, pj) = (&self.points[i], &self.points[j]);
        let mut points = self.points.clone();
        points[j] = pj.moved_to(pi.x(), pi.y());
        points[i] = pi.moved_to(pj.x(), pj.y());
        points.swap(i, j);
        Square { points }
    }

    /// Slot-wise coordinate equality; names are not compared.
    pub fn equals_ignoring_names(&self, other: &Square) -> bool {
        self.points
            .iter()
            .zip(other.points.iter())
            .all(|(p, q)| p.equals_ignoring_name(q))
    }
}

impl TryFrom<[Point; SLOTS]> for Square {
    type Error = SquareError;

    fn try_from(points: [Point; SLOTS]) -> Result<Self, Self::Error> {
        Self::from_array(points)
    }
}

impl TryFrom<Vec<Point>> for Square {
    type Error = SquareError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(&points)
    }
}

impl Shape for Square {
    #[inline]
    fn rotate_by(&self, degrees: i32) -> Self {
        Square::rotate_by(self, degrees)
    }
    #[inline]
    fn translate_by(&self, dx: f64, dy: f64) -> Self {
        Square::translate_by(self, dx, dy)
    }
    #[inline]
    fn center(&self) -> Point {
        Square::center(self)
    }
}

/// `[(n, x.xx, y.yy); (n, x.xx, y.yy); (n, x.xx, y.yy); (n, x.xx, y.yy)]`
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, p) in self.points.iter().enumerate() {
            if k > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
