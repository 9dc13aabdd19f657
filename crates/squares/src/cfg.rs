//! Fixed numeric constants (internal).
//!
//! Policy
//! - Values are constants rather than runtime knobs; the rounding scale is part
//!   of the observable behaviour (debug strings, equality after transforms).

/// Decimal places kept after every transform.
pub(crate) const ROUND_DECIMALS: u32 = 2;
/// Number of vertex slots in a square.
pub(crate) const SLOTS: usize = 4;
/// Order of the dihedral group of the square.
pub(crate) const ORBIT_LEN: usize = 8;
/// Name carried by the synthetic point returned from `Square::center`.
pub(crate) const CENTER_NAME: &str = "center";
