pub mod vec3;

pub use vec3::Vec3;

pub type Point3 = Vec3;
pub type Vector3 = Vec3;
