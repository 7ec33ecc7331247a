//! Fixed-point scalar (Q7.24 format)
//!
//! Q7.24 fixed-point representation:
//! - 1 sign bit, 7 integer bits
//! - 24 fractional bits
//! - Range: approximately ±127.99999994
//! - Precision: 1/16777216 ≈ 0.00000006
//!
//! Add, subtract and negate are plain integer operations on the storage word
//! and wrap on overflow. Multiply and divide go through an `i64` intermediate
//! and wrap when narrowing back. Nothing here saturates or reports overflow.
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Fixed-point scalar with 24 fractional bits stored in an `i32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q24(i32);

impl Q24 {
    /// Number of fractional bits
    pub const FRACTIONAL_BITS: u32 = 24;
    /// Scaling factor: 2^24 = 16777216
    const SCALE: i32 = 1 << Self::FRACTIONAL_BITS;

    /// 0.0
    pub const ZERO: Q24 = Q24(0);
    /// 1.0
    pub const ONE: Q24 = Q24(Self::SCALE);
    /// Smallest representable value (-128.0)
    pub const MIN: Q24 = Q24(i32::MIN);
    /// Largest representable value (just under 128.0)
    pub const MAX: Q24 = Q24(i32::MAX);

    /// Wrap a raw storage value
    pub const fn from_raw(raw: i32) -> Self {
        Q24(raw)
    }

    /// Raw storage value (the represented number times 2^24)
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Create from integer. Exact for `-128..=127`, wraps outside that.
    pub const fn from_i32(n: i32) -> Self {
        Q24(n.wrapping_shl(Self::FRACTIONAL_BITS))
    }

    /// Create from float, truncating toward zero.
    ///
    /// Lossy. Values outside the Q7.24 range saturate at `MIN`/`MAX` and NaN
    /// becomes zero.
    pub fn from_f32(f: f32) -> Self {
        Q24((f * Self::SCALE as f32) as i32)
    }

    /// Create from a double, truncating toward zero. Same caveats as
    /// [`Q24::from_f32`].
    pub fn from_f64(f: f64) -> Self {
        Q24((f * Self::SCALE as f64) as i32)
    }

    /// Convert to float. Inverse of [`Q24::from_f32`].
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }

    /// Convert to double (exact: every Q24 value fits an f64 mantissa)
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Project onto an integer with `scale` units per 1.0.
    ///
    /// `Q24::ONE.to_int_scaled(1000) == 1000`. The divisor is `2^24 / scale`
    /// in integer arithmetic, so scales that do not divide 2^24 round the
    /// step size down.
    ///
    /// `scale` must be within `1..=2^24`.
    ///
    /// # Panics
    /// When `scale` is zero or larger than 2^24 (the divisor becomes zero),
    /// and for negative scales that turn the divide into `i32::MIN / -1`.
    /// Other negative scales return a meaningless sign-flipped projection.
    pub fn to_int_scaled(self, scale: i32) -> i32 {
        self.0 / (Self::SCALE / scale)
    }

    /// Division that returns `None` instead of panicking on a zero divisor
    pub fn checked_div(self, rhs: Q24) -> Option<Q24> {
        if rhs.0 == 0 {
            return None;
        }
        Some(self / rhs)
    }

    /// Absolute value (`MIN` stays `MIN`)
    pub fn abs(self) -> Self {
        Q24(self.0.wrapping_abs())
    }
}

impl Add for Q24 {
    type Output = Q24;

    fn add(self, rhs: Q24) -> Q24 {
        Q24(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Q24 {
    type Output = Q24;

    fn sub(self, rhs: Q24) -> Q24 {
        Q24(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Q24 {
    type Output = Q24;

    fn neg(self) -> Q24 {
        Q24(self.0.wrapping_neg())
    }
}

impl Mul for Q24 {
    type Output = Q24;

    /// `(a * b) >> 24` in 64 bits. The shift floors, so results are biased
    /// toward negative infinity by at most one LSB.
    fn mul(self, rhs: Q24) -> Q24 {
        let product = (self.0 as i64) * (rhs.0 as i64);
        Q24((product >> Self::FRACTIONAL_BITS) as i32)
    }
}

impl Div for Q24 {
    type Output = Q24;

    /// `(a << 24) / b` in 64 bits, truncating toward zero.
    ///
    /// # Panics
    /// When `rhs` is zero. Use [`Q24::checked_div`] to avoid that.
    fn div(self, rhs: Q24) -> Q24 {
        let dividend = (self.0 as i64) << Self::FRACTIONAL_BITS;
        Q24((dividend / rhs.0 as i64) as i32)
    }
}

impl AddAssign for Q24 {
    fn add_assign(&mut self, rhs: Q24) {
        *self = *self + rhs;
    }
}

impl SubAssign for Q24 {
    fn sub_assign(&mut self, rhs: Q24) {
        *self = *self - rhs;
    }
}

impl MulAssign for Q24 {
    fn mul_assign(&mut self, rhs: Q24) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Q24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1.0 / (1 << 24) as f64;

    #[test]
    fn test_from_i32() {
        assert_eq!(Q24::from_i32(1), Q24::ONE);
        assert_eq!(Q24::from_i32(-3).raw(), -3 << 24);
        assert_eq!(Q24::from_i32(0), Q24::ZERO);
    }

    #[test]
    fn test_float_roundtrip() {
        for f in [0.25f32, 1.0, 10.0, 0.125, -7.5, 127.0] {
            assert_eq!(Q24::from_f32(f).to_f32(), f, "roundtrip of {}", f);
        }
        for f in [0.1f64, -0.8320503, 0.5547002, 3.14159] {
            let back = Q24::from_f64(f).to_f64();
            assert!((back - f).abs() < EPS, "roundtrip of {} gave {}", f, back);
        }
    }

    #[test]
    fn test_from_float_truncates_toward_zero() {
        // 1.5 LSB
        let f = 1.5 / (1 << 24) as f64;
        assert_eq!(Q24::from_f64(f).raw(), 1);
        assert_eq!(Q24::from_f64(-f).raw(), -1);
    }

    #[test]
    fn test_from_float_saturates_and_nan() {
        assert_eq!(Q24::from_f32(1000.0), Q24::MAX);
        assert_eq!(Q24::from_f32(-1000.0), Q24::MIN);
        assert_eq!(Q24::from_f32(f32::NAN), Q24::ZERO);
    }

    #[test]
    fn test_add_sub_neg() {
        let a = Q24::from_f32(1.5);
        let b = Q24::from_f32(2.25);
        assert_eq!(a + b, Q24::from_f32(3.75));
        assert_eq!(a - b, Q24::from_f32(-0.75));
        assert_eq!(-a, Q24::from_f32(-1.5));
    }

    #[test]
    fn test_add_wraps() {
        let sum = Q24::MAX + Q24::from_raw(1);
        assert_eq!(sum, Q24::MIN);
        assert_eq!(-Q24::MIN, Q24::MIN);
    }

    #[test]
    fn test_mul() {
        assert_eq!(Q24::from_f32(0.25) * Q24::from_f32(4.0), Q24::ONE);
        assert_eq!(Q24::from_f32(-2.0) * Q24::from_f32(3.5), Q24::from_f32(-7.0));
        let p = Q24::from_f64(0.3) * Q24::from_f64(0.7);
        assert!((p.to_f64() - 0.21).abs() < 3.0 * EPS);
    }

    #[test]
    fn test_mul_floors() {
        // 1 LSB * 0.5 = 0.5 LSB; the shift floors toward negative infinity
        let half = Q24::from_f32(0.5);
        assert_eq!((Q24::from_raw(1) * half).raw(), 0);
        assert_eq!((Q24::from_raw(-1) * half).raw(), -1);
    }

    #[test]
    fn test_mul_needs_wide_intermediate() {
        // 100 * 1.25: the raw product is far beyond i32
        let p = Q24::from_i32(100) * Q24::from_f32(1.25);
        assert_eq!(p, Q24::from_i32(125));
    }

    #[test]
    fn test_div() {
        assert_eq!(Q24::from_i32(1) / Q24::from_i32(4), Q24::from_f32(0.25));
        assert_eq!(Q24::from_f32(-7.0) / Q24::from_f32(2.0), Q24::from_f32(-3.5));
        let q = Q24::from_f64(1.0) / Q24::from_f64(3.0);
        assert!((q.to_f64() - 1.0 / 3.0).abs() < 2.0 * EPS);
    }

    #[test]
    #[should_panic]
    fn test_div_by_zero_panics() {
        let _ = Q24::ONE / Q24::ZERO;
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(Q24::ONE.checked_div(Q24::ZERO), None);
        assert_eq!(
            Q24::ONE.checked_div(Q24::from_i32(2)),
            Some(Q24::from_f32(0.5))
        );
    }

    #[test]
    fn test_to_int_scaled() {
        assert_eq!(Q24::ONE.to_int_scaled(1000), 1000);
        assert_eq!(Q24::from_f32(0.5).to_int_scaled(1 << 16), 1 << 15);
        assert_eq!(Q24::from_f32(-2.0).to_int_scaled(1 << 8), -512);
        assert_eq!(Q24::from_f32(3.75).to_int_scaled(1), 3);
    }

    #[test]
    #[should_panic]
    fn test_to_int_scaled_zero_scale_panics() {
        let _ = Q24::ONE.to_int_scaled(0);
    }

    #[test]
    #[should_panic]
    fn test_to_int_scaled_above_range_panics() {
        let _ = Q24::ONE.to_int_scaled((1 << 24) + 1);
    }

    #[test]
    #[should_panic]
    fn test_to_int_scaled_negative_full_scale_panics() {
        // divisor is -1, so MIN / -1 overflows
        let _ = Q24::MIN.to_int_scaled(-(1 << 24));
    }

    #[test]
    fn test_assign_ops() {
        let mut x = Q24::from_i32(2);
        x += Q24::ONE;
        x *= Q24::from_f32(0.5);
        x -= Q24::from_f32(0.25);
        assert_eq!(x, Q24::from_f32(1.25));
    }

    #[test]
    fn test_abs_and_display() {
        assert_eq!(Q24::from_f32(-1.5).abs(), Q24::from_f32(1.5));
        assert_eq!(Q24::from_f32(0.25).to_string(), "0.250000");
    }
}
