//! Minimal 3D math for the camera and rasterizer.

mod mat3;
mod vec3;

pub use mat3::Mat3;
pub use vec3::Vec3;
