//! Labeled squares in the plane, their rigid motions, and the dihedral group D4.
//!
//! A [`Square`] owns four named [`Point`]s in a fixed slot order (slot 0 is the
//! top-right-ish corner, continuing counterclockwise). Every transform returns
//! a fresh `Square`; nothing is mutated in place and no point is shared between
//! two squares.
//!
//! Layout
//! - `point`: named coordinate pair with name-aware and name-blind equality.
//! - `square`: construction, shape invariant, `center`, `translate_by`,
//!   `rotate_by`, `swap_points`.
//! - `symmetry`: the 8 fixed symmetry recipes and orbit comparison.
//! - `shape`: `Shape` and `Symmetries` traits the above implement.
//! - `rand`: reproducible random valid squares for tests and benches.

pub(crate) mod cfg;
pub mod error;
pub mod point;
pub mod rand;
pub mod shape;
pub mod square;
pub mod symmetry;
mod util;

pub use error::SquareError;
pub use point::Point;
pub use shape::{Shape, Symmetries};
pub use square::Square;
pub use symmetry::{SquareSymmetries, SquareSymmetry};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_square, square_from_offset, ReplayToken, SquareCfg};
    pub use crate::{
        Point, Shape, Square, SquareError, SquareSymmetries, SquareSymmetry, Symmetries,
    };
}
