use super::{Q24, Vec3Q24};
use std::ops::Mul;

/// Quaternion `w + xi + yj + zk` with Q24 components
///
/// Unit quaternions represent rotations. Normalization is never enforced:
/// repeated multiplication lets the norm drift, and [`QuatQ24::rotate`]
/// stretches its output when the quaternion is not unit length.
/// Use [`QuatQ24::norm_squared`] to watch for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuatQ24 {
    /// Real part
    pub w: Q24,
    /// Imaginary part
    pub v: Vec3Q24,
}

impl QuatQ24 {
    /// No rotation
    pub const IDENTITY: QuatQ24 = QuatQ24::new(Q24::ONE, Vec3Q24::ZERO);

    /// Create from real and imaginary parts
    pub const fn new(w: Q24, v: Vec3Q24) -> Self {
        Self { w, v }
    }

    /// The identity quaternion
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// First-order rotation increment around `v`, with `w = 1 - |v|²/2`.
    ///
    /// For a rotation by a small angle θ around unit axis `a`, pass `a·θ/2`.
    /// The result is unit length up to a `|v|⁴/4` error term.
    pub fn from_small_rotation(v: Vec3Q24) -> Self {
        let half = Q24::from_f32(0.5);
        Self::new(Q24::ONE - half * v.dot(&v), v)
    }

    /// Real part
    pub fn w(&self) -> Q24 {
        self.w
    }

    /// I component
    pub fn x(&self) -> Q24 {
        self.v.x
    }

    /// J component
    pub fn y(&self) -> Q24 {
        self.v.y
    }

    /// K component
    pub fn z(&self) -> Q24 {
        self.v.z
    }

    /// Conjugate (inverse rotation for unit quaternions)
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.v)
    }

    /// `w² + x² + y² + z²`
    pub fn norm_squared(&self) -> Q24 {
        self.w * self.w + self.v.dot(&self.v)
    }

    /// Rotate `v` by the rotation this quaternion represents.
    ///
    /// Uses `v + 2w(q × v) + 2q × (q × v)` instead of `q v q*`, which saves
    /// the conjugate and one Hamilton product. Only correct for (near) unit
    /// quaternions.
    pub fn rotate(&self, v: &Vec3Q24) -> Vec3Q24 {
        let two = Q24::from_i32(2);
        let cross = self.v.cross(v);
        *v + cross.scale(two * self.w) + self.v.scale(two).cross(&cross)
    }
}

impl Default for QuatQ24 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for QuatQ24 {
    type Output = QuatQ24;

    /// Hamilton product. `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: QuatQ24) -> QuatQ24 {
        QuatQ24::new(
            self.w * rhs.w - self.v.dot(&rhs.v),
            self.v.cross(&rhs.v) + rhs.v.scale(self.w) + self.v.scale(rhs.w),
        )
    }
}
