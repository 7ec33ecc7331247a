use super::Q24;
use std::ops::{Add, Mul, Neg, Sub};

/// 3D vector with Q24 components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec3Q24 {
    /// X component
    pub x: Q24,
    /// Y component
    pub y: Q24,
    /// Z component
    pub z: Q24,
}

impl Vec3Q24 {
    /// Zero vector
    pub const ZERO: Vec3Q24 = Vec3Q24::new(Q24::ZERO, Q24::ZERO, Q24::ZERO);

    /// Create a new vector
    pub const fn new(x: Q24, y: Q24, z: Q24) -> Self {
        Self { x, y, z }
    }

    /// Create from float components (each truncated, see [`Q24::from_f32`])
    pub fn from_f32(x: f32, y: f32, z: f32) -> Self {
        Self::new(Q24::from_f32(x), Q24::from_f32(y), Q24::from_f32(z))
    }

    /// Create from double components
    pub fn from_f64(x: f64, y: f64, z: f64) -> Self {
        Self::new(Q24::from_f64(x), Q24::from_f64(y), Q24::from_f64(z))
    }

    /// Components as floats
    pub fn to_f32(self) -> [f32; 3] {
        [self.x.to_f32(), self.y.to_f32(), self.z.to_f32()]
    }

    /// Components as doubles
    pub fn to_f64(self) -> [f64; 3] {
        [self.x.to_f64(), self.y.to_f64(), self.z.to_f64()]
    }

    /// Multiply every component by `c`
    pub fn scale(&self, c: Q24) -> Self {
        Self::new(self.x * c, self.y * c, self.z * c)
    }

    /// Dot product
    pub fn dot(&self, other: &Vec3Q24) -> Q24 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (`self × other`)
    pub fn cross(&self, other: &Vec3Q24) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for Vec3Q24 {
    type Output = Vec3Q24;

    fn add(self, rhs: Vec3Q24) -> Vec3Q24 {
        Vec3Q24::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3Q24 {
    type Output = Vec3Q24;

    fn sub(self, rhs: Vec3Q24) -> Vec3Q24 {
        Vec3Q24::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3Q24 {
    type Output = Vec3Q24;

    fn neg(self) -> Vec3Q24 {
        Vec3Q24::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Q24> for Vec3Q24 {
    type Output = Vec3Q24;

    fn mul(self, c: Q24) -> Vec3Q24 {
        self.scale(c)
    }
}
