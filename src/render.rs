use crate::camera::{pixel_to_ray, Camera, Screen};
use crate::marcher::{march, MarchConfig};
use crate::math::V3;
use crate::scene::Scene;
use crate::shader::{shade, to_rgba, ShadeConfig};
use image::{ImageBuffer, Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderSettings {
    pub march: MarchConfig,
    pub shade: ShadeConfig,
}

/// Color of one pixel. Pure in its inputs, so pixels can be rendered in any
/// order or in parallel.
pub fn render_pixel(
    pixel: (u32, u32),
    screen: &Screen,
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
) -> V3 {
    let mut ray = pixel_to_ray((pixel.0 as f64, pixel.1 as f64), screen, camera);
    let result = march(&mut ray, scene, &settings.march);
    shade(&ray, &result, scene.ambient, &settings.shade)
}

pub fn render_image(
    scene: &Scene,
    camera: &Camera,
    screen: &Screen,
    settings: &RenderSettings,
) -> RgbaImage {
    let w = screen.width as usize;
    let h = screen.height as usize;
    debug!(w, h, ?settings, "rendering");
    let pixels: Vec<[u8; 4]> = (0usize..(w * h))
        .into_par_iter()
        .map(|i| ((i % w) as u32, (i / w) as u32))
        .map(|pixel| to_rgba(render_pixel(pixel, screen, scene, camera, settings)))
        .collect();
    let mut img: RgbaImage = ImageBuffer::new(screen.width, screen.height);
    for (x, y, p) in img.enumerate_pixels_mut() {
        *p = Rgba(pixels[x as usize + y as usize * w]);
    }
    img
}
