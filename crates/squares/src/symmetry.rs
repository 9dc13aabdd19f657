//! The dihedral group of the square as 8 fixed transform recipes.
//!
//! Purpose
//! - Enumerate the symmetry orbit of a [`Square`] deterministically: four
//!   rotations about the center, then four reflections expressed as slot swaps.
//! - Decide whether two squares are related by one of these symmetries,
//!   comparing coordinates only.
//!
//! Every recipe is applied to the input square itself; no orbit element is
//! derived from another.

use crate::cfg::ORBIT_LEN;
use crate::shape::Symmetries;
use crate::square::Square;

/// One element of the symmetry group, in orbit order.
///
/// Reflection names refer to canonical slot positions (0 top-right, 1 top-left,
/// 2 bottom-left, 3 bottom-right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SquareSymmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Swap slots 0↔3 and 1↔2.
    ReflectHorizontal,
    /// Swap slots 0↔1 and 2↔3.
    ReflectVertical,
    /// Swap slots 1↔3; fixes the diagonal through slots 0 and 2.
    ReflectDiagonal,
    /// Swap slots 0↔2; fixes the diagonal through slots 1 and 3.
    ReflectAntiDiagonal,
}

impl SquareSymmetry {
    /// The group in orbit order.
    pub const ALL: [SquareSymmetry; ORBIT_LEN] = [
        SquareSymmetry::Identity,
        SquareSymmetry::Rotate90,
        SquareSymmetry::Rotate180,
        SquareSymmetry::Rotate270,
        SquareSymmetry::ReflectHorizontal,
        SquareSymmetry::ReflectVertical,
        SquareSymmetry::ReflectDiagonal,
        SquareSymmetry::ReflectAntiDiagonal,
    ];

    #[inline]
    pub fn is_rotation(self) -> bool {
        matches!(
            self,
            SquareSymmetry::Identity
                | SquareSymmetry::Rotate90
                | SquareSymmetry::Rotate180
                | SquareSymmetry::Rotate270
        )
    }

    pub fn apply(self, square: &Square) -> Square {
        match self {
            SquareSymmetry::Identity => square.rotate_by(0),
            SquareSymmetry::Rotate90 => square.rotate_by(90),
            SquareSymmetry::Rotate180 => square.rotate_by(180),
            SquareSymmetry::Rotate270 => square.rotate_by(270),
            SquareSymmetry::ReflectHorizontal => square.swapped(0, 3).swapped(1, 2),
            SquareSymmetry::ReflectVertical => square.swapped(0, 1).swapped(2, 3),
            SquareSymmetry::ReflectDiagonal => square.swapped(1, 3),
            SquareSymmetry::ReflectAntiDiagonal => square.swapped(0, 2),
        }
    }
}

/// Stateless enumerator of square symmetries.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquareSymmetries;

impl SquareSymmetries {
    /// The 8 images of `square`, in [`SquareSymmetry::ALL`] order.
    pub fn orbit(&self, square: &Square) -> [Square; ORBIT_LEN] {
        tracing::trace!(%square, "enumerating symmetry orbit");
        SquareSymmetry::ALL.map(|g| g.apply(square))
    }

    /// First symmetry `g` with `g(s1)` coordinate-equal to `s2`, names ignored.
    pub fn symmetry_between(&self, s1: &Square, s2: &Square) -> Option<SquareSymmetry> {
        SquareSymmetry::ALL
            .into_iter()
            .find(|g| g.apply(s1).equals_ignoring_names(s2))
    }
}

impl Symmetries<Square> for SquareSymmetries {
    fn symmetries_of(&self, square: &Square) -> Vec<Square> {
        self.orbit(square).into()
    }

    fn are_symmetric(&self, s1: &Square, s2: &Square) -> bool {
        self.symmetry_between(s1, s2).is_some()
    }
}
