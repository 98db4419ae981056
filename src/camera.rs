use crate::error::SceneError;
use crate::math::{add, cross, norm, normalize, scale, sub, try_normalize, Ray, V3};
use tracing::debug;

/// Pixel dimensions of the target framebuffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Result<Screen, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidScreen(width, height));
        }
        Ok(Screen { width, height })
    }

    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: V3,
    look_at: V3,
    up: V3,
    /// Vertical field of view in radians. `None` is the plain planar
    /// projection, equivalent to 90 degrees.
    fov: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraDescription {
    pub position: V3,
    pub look_at: V3,
    pub up: V3,
    /// Degrees.
    pub fov: Option<f64>,
}

impl Camera {
    pub fn new(position: V3, look_at: V3, up: V3) -> Result<Camera, SceneError> {
        if norm(&sub(&look_at, &position)) == 0. {
            return Err(SceneError::DegenerateCamera("looks at its own position"));
        }
        let forward = normalize(&sub(&look_at, &position));
        if try_normalize(&cross(&forward, &up)).is_none() {
            return Err(SceneError::DegenerateCamera("up is parallel to the view direction"));
        }
        Ok(Camera {
            position,
            look_at,
            up,
            fov: None,
        })
    }

    pub fn with_fov_degrees(mut self, degrees: f64) -> Result<Camera, SceneError> {
        if !(degrees > 0. && degrees < 180.) {
            return Err(SceneError::InvalidFov(degrees));
        }
        self.fov = Some(degrees.to_radians());
        Ok(self)
    }

    pub fn forward(&self) -> V3 {
        normalize(&sub(&self.look_at, &self.position))
    }

    fn plane_scale(&self) -> f64 {
        match self.fov {
            Some(fov) => (fov * 0.5).tan(),
            None => 1.,
        }
    }
}

pub fn build_camera(desc: &CameraDescription) -> Result<Camera, SceneError> {
    let mut camera = Camera::new(desc.position, desc.look_at, desc.up)?;
    if let Some(fov) = desc.fov {
        camera = camera.with_fov_degrees(fov)?;
    }
    debug!(position = ?camera.position, look_at = ?camera.look_at, fov = ?desc.fov, "built camera");
    Ok(camera)
}

/// Ray through `pixel` (x right, y down) on a plane one unit in front of the
/// camera. `up` is used as given, so a non-unit or tilted up vector stretches
/// or skews the image.
pub fn pixel_to_ray(pixel: (f64, f64), screen: &Screen, camera: &Camera) -> Ray {
    let u = pixel.0 / screen.width as f64;
    let w = pixel.1 / screen.height as f64;
    let k = camera.plane_scale();
    let forward = camera.forward();
    let right = cross(&forward, &camera.up);
    let horizontal = scale((u - 0.5) * screen.aspect() * k, &right);
    let vertical = scale((0.5 - w) * k, &camera.up);
    let direction = normalize(&add(&forward, &add(&horizontal, &vertical)));
    Ray::new(camera.position, direction)
}
