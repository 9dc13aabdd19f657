//! The shape invariant and the post-rotation slot search.
//!
//! Invariant (for `(a, b, c, d) = (p0, p1, p2, p3)`):
//! - all four points coordinate-identical (degenerate square), or
//! - equal sides `|ab| == |bc| == |cd| == |da|` (exact), and
//!   `a.x > b.x`, `a.x > c.x`, `a.y >= c.y`, `a.y > d.y`,
//!   `b.x <= d.x`, `b.y > d.y`, `c.x <= d.x`.
//!
//! The strict/non-strict mix breaks ties for axis-aligned layouts: for a square
//! whose slot-0 corner sits at angle φ from the center, the inequalities hold
//! exactly when φ ∈ [0°, 90°), so at most one cyclic relabeling is valid.

use crate::cfg::SLOTS;
use crate::point::Point;
use crate::util::distance;

/// All four points share the same coordinates.
#[inline]
pub(crate) fn is_degenerate(v: &[Point; SLOTS]) -> bool {
    v.windows(2).all(|w| w[0].equals_ignoring_name(&w[1]))
}

pub(crate) fn is_valid(v: &[Point; SLOTS]) -> bool {
    if is_degenerate(v) {
        return true;
    }
    let [a, b, c, d] = v;
    let side = |p: &Point, q: &Point| distance(p.x(), p.y(), q.x(), q.y());
    let (ab, bc, cd, da) = (side(a, b), side(b, c), side(c, d), side(d, a));
    ab == bc
        && bc == cd
        && cd == da
        && a.x() > b.x()
        && a.x() > c.x()
        && a.y() >= c.y()
        && a.y() > d.y()
        && b.x() <= d.x()
        && b.y() > d.y()
        && c.x() <= d.x()
}

/// First of `(p3,p0,p1,p2)`, `(p2,p3,p0,p1)`, `(p1,p2,p3,p0)` that is valid.
///
/// The identity order is not tried; callers keep `unordered` on `None`.
pub(crate) fn canonical_relabeling(unordered: &[Point; SLOTS]) -> Option<[Point; SLOTS]> {
    (1..SLOTS).find_map(|shift| {
        let mut candidate = unordered.clone();
        candidate.rotate_right(shift);
        is_valid(&candidate).then_some(candidate)
    })
}
