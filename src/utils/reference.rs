//! Double-precision mirror of the fixed-point vector and quaternion math.
//!
//! Same formulas, same operation order, no rounding beyond f64. Used as the
//! oracle when measuring how far the Q24 path drifts.
use std::ops::Mul;

/// 3D vector in double precision
pub type RefVec3 = [f64; 3];

/// Componentwise sum
pub fn add(a: &RefVec3, b: &RefVec3) -> RefVec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Multiply every component by `c`
pub fn scale(a: &RefVec3, c: f64) -> RefVec3 {
    [a[0] * c, a[1] * c, a[2] * c]
}

/// Dot product
pub fn dot(a: &RefVec3, b: &RefVec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Cross product (`a × b`)
pub fn cross(a: &RefVec3, b: &RefVec3) -> RefVec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Largest absolute componentwise difference
pub fn max_abs_diff(a: &RefVec3, b: &RefVec3) -> f64 {
    (0..3).map(|i| (a[i] - b[i]).abs()).fold(0.0f64, f64::max)
}

/// Quaternion in double precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefQuat {
    /// Real part
    pub w: f64,
    /// Imaginary part
    pub v: RefVec3,
}

impl RefQuat {
    /// No rotation
    pub const IDENTITY: RefQuat = RefQuat {
        w: 1.0,
        v: [0.0; 3],
    };

    /// Create from real and imaginary parts
    pub fn new(w: f64, v: RefVec3) -> Self {
        Self { w, v }
    }

    /// First-order rotation increment, `w = 1 - |v|²/2`
    pub fn from_small_rotation(v: RefVec3) -> Self {
        Self::new(1.0 - 0.5 * dot(&v, &v), v)
    }

    /// `w² + x² + y² + z²`
    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + dot(&self.v, &self.v)
    }

    /// Rotate `v` with `v + 2w(q × v) + 2q × (q × v)`
    pub fn rotate(&self, v: &RefVec3) -> RefVec3 {
        let c = cross(&self.v, v);
        add(
            &add(v, &scale(&c, 2.0 * self.w)),
            &cross(&scale(&self.v, 2.0), &c),
        )
    }
}

impl Mul for RefQuat {
    type Output = RefQuat;

    fn mul(self, rhs: RefQuat) -> RefQuat {
        RefQuat::new(
            self.w * rhs.w - dot(&self.v, &rhs.v),
            add(
                &add(&cross(&self.v, &rhs.v), &scale(&rhs.v, self.w)),
                &scale(&self.v, rhs.w),
            ),
        )
    }
}
