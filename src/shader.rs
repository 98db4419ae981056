use crate::marcher::MarchResult;
use crate::math::{dot, scale, Ray, V3};

/// How the light term `-dot(direction, normal)` is turned into a scale factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LightMode {
    /// `max(0, light)`.
    #[default]
    Clamped,
    /// Raw light term. Back-facing hits scale the material color by a
    /// negative factor.
    Unclamped,
    /// Material color only.
    Flat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShadeConfig {
    pub light: LightMode,
}

pub fn shade(ray: &Ray, result: &MarchResult<'_>, ambient: V3, config: &ShadeConfig) -> V3 {
    match result {
        MarchResult::Hit { projection, .. } => {
            let light = -dot(&ray.direction, &projection.normal);
            let light = match config.light {
                LightMode::Clamped => light.max(0.),
                LightMode::Unclamped => light,
                LightMode::Flat => 1.,
            };
            scale(light, &projection.material.color)
        }
        MarchResult::Miss { .. } => ambient,
    }
}

fn channel(c: f64) -> u8 {
    // `as` saturates, NaN becomes 0
    c.round() as u8
}

/// Framebuffer bytes for `color`, always fully opaque.
pub fn to_rgba(color: V3) -> [u8; 4] {
    [channel(color.x), channel(color.y), channel(color.z), 255]
}
