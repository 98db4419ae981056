use crate::error::SceneError;
use crate::marcher::primitives::{Material, Plane, Primitive, Projection, Renderable, SmoothGroup, Sphere};
use crate::math::V3;
use tracing::debug;

/// Top-level primitives plus the color used for rays that hit nothing.
/// Never empty.
#[derive(Clone, Debug)]
pub struct Scene {
    primitives: Vec<Primitive>,
    pub ambient: V3,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>, ambient: V3) -> Result<Scene, SceneError> {
        if primitives.is_empty() {
            return Err(SceneError::EmptyScene);
        }
        Ok(Scene {
            primitives,
            ambient,
        })
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Projection onto the closest top-level primitive. On ties the earliest
    /// primitive wins.
    pub fn nearest(&self, x: &V3) -> Projection<'_> {
        // non-empty by construction
        self.primitives[1..]
            .iter()
            .fold(self.primitives[0].project(x), |best, primitive| {
                let p = primitive.project(x);
                if p.distance < best.distance {
                    p
                } else {
                    best
                }
            })
    }
}

impl Renderable for Scene {
    fn project(&self, x: &V3) -> Projection<'_> {
        self.nearest(x)
    }
}

/// In-memory description of one primitive, validated by [`build_scene`].
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveDescription {
    Sphere {
        center: V3,
        radius: f64,
        color: V3,
    },
    Plane {
        point: V3,
        normal: V3,
        color: V3,
    },
    SmoothGroup {
        children: Vec<PrimitiveDescription>,
        smoothing: f64,
        color: V3,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneDescription {
    pub primitives: Vec<PrimitiveDescription>,
    pub ambient: V3,
}

pub fn build_primitive(desc: &PrimitiveDescription) -> Result<Primitive, SceneError> {
    Ok(match desc {
        PrimitiveDescription::Sphere {
            center,
            radius,
            color,
        } => Sphere::new(*center, *radius, Material { color: *color })?.into(),
        PrimitiveDescription::Plane {
            point,
            normal,
            color,
        } => Plane::new(*point, *normal, Material { color: *color })?.into(),
        PrimitiveDescription::SmoothGroup {
            children,
            smoothing,
            color,
        } => {
            let children = children
                .iter()
                .map(build_primitive)
                .collect::<Result<Vec<_>, _>>()?;
            SmoothGroup::new(children, *smoothing, Material { color: *color })?.into()
        }
    })
}

pub fn build_scene(desc: &SceneDescription) -> Result<Scene, SceneError> {
    let primitives = desc
        .primitives
        .iter()
        .map(build_primitive)
        .collect::<Result<Vec<_>, _>>()?;
    let scene = Scene::new(primitives, desc.ambient)?;
    debug!(
        primitives = scene.primitives.len(),
        ambient = ?scene.ambient,
        "built scene"
    );
    Ok(scene)
}
