//! Random valid squares (quarter lattice + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of squares in general position for
//!   property tests and benchmarks.
//!
//! Model
//! - A square is fixed by its center `c` and the offset `o = (ox, oy)` from `c`
//!   to the slot-0 corner. The remaining corners are `c + o⊥`, `c − o`, `c − o⊥`
//!   with `o⊥ = (−oy, ox)`. Canonical slot order needs `ox > 0, oy >= 0`.
//! - Centers and offsets are drawn on the quarter lattice: such values are exact
//!   in binary and at 2 decimals, so side lengths compare exactly and rotations
//!   by multiples of 90° land back on the lattice after rounding.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SquareError;
use crate::point::Point;
use crate::square::Square;

/// Corner names, in slot order.
pub const CORNER_NAMES: [&str; 4] = ["A", "B", "C", "D"];

const QUARTER: f64 = 0.25;

/// Sampler configuration, in quarter units.
#[derive(Clone, Copy, Debug)]
pub struct SquareCfg {
    /// Center coordinates are drawn from `[-bound, bound]` quarters.
    pub center_bound_quarters: i32,
    /// Offset components are drawn from `1..=max` (x) and `0..=max` (y) quarters.
    pub max_offset_quarters: i32,
}

impl Default for SquareCfg {
    fn default() -> Self {
        Self {
            center_bound_quarters: 400,
            max_offset_quarters: 40,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Square with center `(cx, cy)` and slot-0 corner `(cx + ox, cy + oy)`.
///
/// Fails with `InvalidShape` unless `ox > 0, oy >= 0` (or both are zero), or
/// when the coordinates do not yield exactly equal side lengths.
pub fn square_from_offset(cx: f64, cy: f64, ox: f64, oy: f64) -> Result<Square, SquareError> {
    let corners = [(ox, oy), (-oy, ox), (-ox, -oy), (oy, -ox)];
    let points: Vec<Point> = CORNER_NAMES
        .iter()
        .zip(corners)
        .map(|(name, (dx, dy))| Point::new(*name, cx + dx, cy + dy))
        .collect();
    Square::new(&points)
}

/// Draw a random non-degenerate square on the quarter lattice.
pub fn draw_square(cfg: SquareCfg, tok: ReplayToken) -> Result<Square, SquareError> {
    let mut rng = tok.to_std_rng();
    let bound = cfg.center_bound_quarters.max(0);
    let max_off = cfg.max_offset_quarters.max(1);
    let cx = rng.gen_range(-bound..=bound);
    let cy = rng.gen_range(-bound..=bound);
    let ox = rng.gen_range(1..=max_off);
    let oy = rng.gen_range(0..=max_off);
    let q = |v: i32| f64::from(v) * QUARTER;
    square_from_offset(q(cx), q(cy), q(ox), q(oy))
}
