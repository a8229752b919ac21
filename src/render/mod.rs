//! Software rasterizer writing into an RGBA screen buffer.

mod camera;
mod color;
mod draw;
mod mesh;
mod projection;
mod screen_buffer;

pub use camera::Camera;
pub use color::{Color, ColorRamp};
pub use draw::{Draw3d, DrawCounters};
pub use mesh::{Mesh, Triangle};
pub use projection::{ProjectedTriangles, Projection, ScreenPoint};
pub use screen_buffer::{ScreenBuffer, BYTES_PER_PIXEL};
