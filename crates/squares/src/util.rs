use rust_decimal::{Decimal, RoundingStrategy};

use super::cfg::ROUND_DECIMALS;

/// Round to 2 decimals, ties away from zero; `-0.0` comes back as `+0.0`.
///
/// Rounds the exact binary value, so `1.115` (stored as `1.11499…`) gives `1.11`.
/// Non-finite values and magnitudes beyond `Decimal` range are returned unchanged.
#[inline]
pub(crate) fn round2(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let Some(d) = Decimal::from_f64_retain(v) else {
        // below Decimal's smallest step rounds to zero; above its range, keep as is
        return if v.abs() < 1.0 { 0.0 } else { v };
    };
    let r = d.round_dp_with_strategy(ROUND_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    // mantissa / 10^scale is a single correctly rounded division.
    let out = r.mantissa() as f64 / 10f64.powi(r.scale() as i32);
    // Adding +0.0 turns a negative zero into a positive one.
    out + 0.0
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub(crate) fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_half_up_and_negative_zero() {
        assert_eq!(round2(1.456), 1.46);
        assert_eq!(round2(1.454), 1.45);
        assert_eq!(round2(-1.456), -1.46);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(1.5e-17), 0.0);
        assert!(round2(-1.5e-17).is_sign_positive());
        assert!(round2(-0.0).is_sign_positive());
        assert!(round2(-0.001).is_sign_positive());
    }

    #[test]
    fn round2_uses_exact_binary_value() {
        assert_eq!(round2(1.115), 1.11);
        assert_eq!(round2(0.015), 0.01);
    }

    #[test]
    fn round2_near_ties() {
        // (input, value of the exact binary expansion rounded half away from zero)
        let cases = [
            (0.015, 0.01),
            (-0.015, -0.01),
            (0.045, 0.04),
            (0.075, 0.07),
            (1.005, 1.0),
            (1.115, 1.11),
            (2.675, 2.67),
            (-2.675, -2.67),
            // exact binary ties
            (0.125, 0.13),
            (-0.125, -0.13),
            (0.375, 0.38),
            (10.625, 10.63),
        ];
        for (v, expected) in cases {
            assert_eq!(round2(v), expected, "round2({v})");
        }
    }

    #[test]
    fn round2_passes_through_non_finite() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert_eq!(round2(1e-300), 0.0);
    }

    #[test]
    fn distance_axis_and_diagonal() {
        assert_eq!(distance(0.0, 0.0, 3.0, 0.0), 3.0);
        assert_eq!(distance(1.0, 1.0, 4.0, 5.0), 5.0);
    }
}
