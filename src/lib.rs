pub mod camera;
pub mod demo;
pub mod error;
pub mod marcher;
pub mod math;
pub mod render;
pub mod scene;
pub mod shader;

pub use camera::{build_camera, pixel_to_ray, Camera, CameraDescription, Screen};
pub use error::SceneError;
pub use marcher::primitives::{Material, Plane, Primitive, Projection, Renderable, SmoothGroup, Sphere};
pub use marcher::{march, MarchConfig, MarchResult};
pub use render::{render_image, render_pixel, RenderSettings};
pub use scene::{build_scene, PrimitiveDescription, Scene, SceneDescription};
pub use shader::{shade, to_rgba, LightMode, ShadeConfig};
