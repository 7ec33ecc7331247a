pub mod q24;
pub mod quat;
pub mod vec3;

pub use q24::Q24;
pub use quat::QuatQ24;
pub use vec3::Vec3Q24;
