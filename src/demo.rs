//! Hard-coded scenes for the `sdf-march` binary.

use crate::camera::{build_camera, Camera, CameraDescription};
use crate::error::SceneError;
use crate::math::{normalize, v, B2, O};
use crate::scene::{build_scene, PrimitiveDescription, Scene, SceneDescription};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoScene {
    /// Red sphere cut by a tilted blue plane.
    RayMarcher,
    /// Lone red sphere on magenta.
    Intersection,
    /// Two softly blended spheres over a floor.
    Blend,
}

pub fn description(scene: DemoScene) -> SceneDescription {
    match scene {
        DemoScene::RayMarcher => SceneDescription {
            primitives: vec![
                PrimitiveDescription::Sphere {
                    center: v(0., 0., -5.),
                    radius: 1.,
                    color: v(255., 0., 0.),
                },
                PrimitiveDescription::Plane {
                    point: v(0.4, 0., -5.),
                    normal: normalize(&v(-1., 0., 1.)),
                    color: v(0., 0., 255.),
                },
            ],
            ambient: v(50., 50., 50.),
        },
        DemoScene::Intersection => SceneDescription {
            primitives: vec![PrimitiveDescription::Sphere {
                center: v(0., 0., -5.),
                radius: 1.,
                color: v(255., 0., 0.),
            }],
            ambient: v(255., 0., 255.),
        },
        DemoScene::Blend => SceneDescription {
            primitives: vec![
                PrimitiveDescription::SmoothGroup {
                    children: vec![
                        PrimitiveDescription::Sphere {
                            center: v(-0.8, 0., -5.),
                            radius: 1.,
                            color: O,
                        },
                        PrimitiveDescription::Sphere {
                            center: v(0.9, 0.3, -5.),
                            radius: 0.8,
                            color: O,
                        },
                    ],
                    smoothing: 0.6,
                    color: v(40., 220., 90.),
                },
                PrimitiveDescription::Plane {
                    point: v(0., -1.5, 0.),
                    normal: B2,
                    color: v(180., 180., 180.),
                },
            ],
            ambient: v(50., 50., 50.),
        },
    }
}

pub fn build(scene: DemoScene) -> Result<Scene, SceneError> {
    build_scene(&description(scene))
}

pub fn camera_description() -> CameraDescription {
    CameraDescription {
        position: v(0., 0., 5.),
        look_at: O,
        up: B2,
        fov: None,
    }
}

pub fn camera() -> Result<Camera, SceneError> {
    build_camera(&camera_description())
}
