use crate::error::SceneError;
use crate::math::{dot, norm, sub, try_normalize, B2, V3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: V3,
}

/// Signed distance from a query point to one primitive, together with the
/// material that was hit and a normal estimate at the query point.
#[derive(Clone, Copy, Debug)]
pub struct Projection<'a> {
    pub distance: f64,
    pub material: &'a Material,
    pub normal: V3,
}

pub trait Renderable {
    fn project(&self, x: &V3) -> Projection<'_>;

    fn sdf(&self, x: &V3) -> f64 {
        self.project(x).distance
    }
}

#[derive(Clone, Debug)]
pub struct Sphere {
    center: V3,
    radius: f64,
    material: Material,
}

#[derive(Clone, Debug)]
pub struct Plane {
    point: V3,
    normal: V3,
    material: Material,
}

/// Soft union of its children. Blending is defined pairwise; longer child
/// lists are folded left to right.
#[derive(Clone, Debug)]
pub struct SmoothGroup {
    children: Vec<Primitive>,
    smoothing: f64,
    material: Material,
}

#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    SmoothGroup(SmoothGroup),
}

impl Sphere {
    pub fn new(center: V3, radius: f64, material: Material) -> Result<Sphere, SceneError> {
        if !(radius > 0. && radius.is_finite()) {
            return Err(SceneError::NonPositiveRadius(radius));
        }
        Ok(Sphere {
            center,
            radius,
            material,
        })
    }
}

impl Plane {
    /// `normal` does not need to be unit length, it is normalized here.
    pub fn new(point: V3, normal: V3, material: Material) -> Result<Plane, SceneError> {
        let normal = try_normalize(&normal).ok_or(SceneError::DegenerateNormal("plane normal"))?;
        Ok(Plane {
            point,
            normal,
            material,
        })
    }

    pub fn normal(&self) -> V3 {
        self.normal
    }
}

impl SmoothGroup {
    pub fn new(
        children: Vec<Primitive>,
        smoothing: f64,
        material: Material,
    ) -> Result<SmoothGroup, SceneError> {
        if children.len() < 2 {
            return Err(SceneError::SmoothGroupArity(children.len()));
        }
        if !(smoothing >= 0. && smoothing.is_finite()) {
            return Err(SceneError::InvalidSmoothing(smoothing));
        }
        Ok(SmoothGroup {
            children,
            smoothing,
            material,
        })
    }

    pub fn children(&self) -> &[Primitive] {
        &self.children
    }
}

impl Renderable for Sphere {
    fn project(&self, x: &V3) -> Projection<'_> {
        let rel = sub(x, &self.center);
        Projection {
            distance: norm(&rel) - self.radius,
            material: &self.material,
            // direction is undefined at the centre
            normal: try_normalize(&rel).unwrap_or(B2),
        }
    }
}

impl Renderable for Plane {
    fn project(&self, x: &V3) -> Projection<'_> {
        Projection {
            distance: dot(&sub(x, &self.point), &self.normal),
            material: &self.material,
            normal: self.normal,
        }
    }
}

/// `min(da, db)` pulled inward by `max(0, k - max(da, db))^2`, or exactly
/// `min(da, db)` when `k` is zero. The normal is the normalized sum of both
/// normals, not the gradient of the blended field.
pub fn smooth_union(da: f64, na: V3, db: f64, nb: V3, k: f64) -> (f64, V3) {
    let real_distance = da.min(db);
    let overlap = if k > 0. { (k - da.max(db)).max(0.) } else { 0. };
    let blend_distance = real_distance - overlap * overlap;
    let normal = match try_normalize(&(na + nb)) {
        Some(n) => n,
        // opposite normals cancel out
        None if da <= db => na,
        None => nb,
    };
    (blend_distance, normal)
}

impl Renderable for SmoothGroup {
    fn project(&self, x: &V3) -> Projection<'_> {
        let mut children = self.children.iter();
        let (mut distance, mut normal) = match children.next() {
            Some(first) => {
                let p = first.project(x);
                (p.distance, p.normal)
            }
            None => (f64::INFINITY, crate::math::O),
        };
        for child in children {
            let p = child.project(x);
            (distance, normal) = smooth_union(distance, normal, p.distance, p.normal, self.smoothing);
        }
        Projection {
            distance,
            material: &self.material,
            normal,
        }
    }
}

impl Renderable for Primitive {
    fn project(&self, x: &V3) -> Projection<'_> {
        match self {
            Primitive::Sphere(s) => s.project(x),
            Primitive::Plane(p) => p.project(x),
            Primitive::SmoothGroup(g) => g.project(x),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Primitive::Plane(p)
    }
}

impl From<SmoothGroup> for Primitive {
    fn from(g: SmoothGroup) -> Self {
        Primitive::SmoothGroup(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{add, dist, normalize, scale, v, B1, B2, B3, O};
    use rand::{thread_rng, Rng};

    const TOL: f64 = 1e-9;

    fn red() -> Material {
        Material {
            color: v(255., 0., 0.),
        }
    }

    fn random_direction(rng: &mut impl Rng) -> V3 {
        loop {
            let d = v(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if let Some(n) = try_normalize(&d) {
                return n;
            }
        }
    }

    #[test]
    fn sphere_distance_is_exact() {
        let mut rng = thread_rng();
        let r = 1.5;
        let s = Sphere::new(O, r, red()).unwrap();
        for _ in 0..500 {
            let d: f64 = rng.gen_range(0.01..50.0);
            let dir = random_direction(&mut rng);
            let p = s.project(&scale(d, &dir));
            assert!((p.distance - (d - r)).abs() < TOL);
            assert!(dist(&p.normal, &dir) < TOL);
        }
    }

    #[test]
    fn sphere_rejects_bad_radius() {
        assert_eq!(
            Sphere::new(O, 0., red()).unwrap_err(),
            SceneError::NonPositiveRadius(0.)
        );
        assert!(Sphere::new(O, -1., red()).is_err());
        assert!(Sphere::new(O, f64::NAN, red()).is_err());
    }

    #[test]
    fn plane_distance_is_linear() {
        let mut rng = thread_rng();
        for _ in 0..200 {
            let point = v(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let n = random_direction(&mut rng);
            let plane = Plane::new(point, n, red()).unwrap();
            assert!((plane.sdf(&add(&point, &n)) - 1.).abs() < TOL);
            assert!(plane.sdf(&point).abs() < TOL);
            assert!((plane.sdf(&sub(&point, &n)) + 1.).abs() < TOL);
            assert_eq!(plane.project(&O).normal, plane.normal());
        }
    }

    #[test]
    fn plane_normalizes_its_normal() {
        let plane = Plane::new(O, v(0., 3., 0.), red()).unwrap();
        assert_eq!(plane.normal(), B2);
        assert_eq!(
            Plane::new(O, O, red()).unwrap_err(),
            SceneError::DegenerateNormal("plane normal")
        );
    }

    fn two_spheres(smoothing: f64) -> SmoothGroup {
        let a = Sphere::new(v(-1., 0., 0.), 1., red()).unwrap();
        let b = Sphere::new(v(1.5, 0., 0.), 1., red()).unwrap();
        SmoothGroup::new(
            vec![a.into(), b.into()],
            smoothing,
            Material {
                color: v(0., 255., 0.),
            },
        )
        .unwrap()
    }

    #[test]
    fn zero_smoothing_is_plain_union() {
        let g = two_spheres(0.);
        let mut rng = thread_rng();
        for _ in 0..200 {
            let x = v(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            let pa = g.children()[0].project(&x);
            let pb = g.children()[1].project(&x);
            let p = g.project(&x);
            assert_eq!(p.distance, pa.distance.min(pb.distance));
            if let Some(n) = try_normalize(&(pa.normal + pb.normal)) {
                assert!(dist(&p.normal, &n) < TOL);
            }
        }
    }

    #[test]
    fn zero_smoothing_inside_overlapping_children_is_min() {
        let a = Sphere::new(v(-0.5, 0., 0.), 1., red()).unwrap();
        let b = Sphere::new(v(0.5, 0., 0.), 1., red()).unwrap();
        let g = SmoothGroup::new(vec![a.into(), b.into()], 0., red()).unwrap();
        for x in [O, v(0., 0.3, 0.), v(0.2, -0.1, 0.4)] {
            let da = g.children()[0].sdf(&x);
            let db = g.children()[1].sdf(&x);
            assert!(da < 0. && db < 0.);
            assert_eq!(g.sdf(&x), da.min(db));
        }
        assert_eq!(g.sdf(&O), -0.5);
    }

    #[test]
    fn sphere_normal_at_centre_is_finite() {
        let s = Sphere::new(v(1., 2., 3.), 1., red()).unwrap();
        let p = s.project(&v(1., 2., 3.));
        assert_eq!(p.distance, -1.);
        assert_eq!(p.normal, B2);
    }

    #[test]
    fn smoothing_pulls_the_seam_inward() {
        let x = v(0.25, 1.2, 0.);
        let hard = two_spheres(0.).project(&x).distance;
        let soft = two_spheres(1.).project(&x).distance;
        assert!(soft < hard);

        // far from the seam both children are beyond the smoothing radius
        let far = v(0., 0., 20.);
        assert_eq!(
            two_spheres(1.).project(&far).distance,
            two_spheres(0.).project(&far).distance
        );
    }

    #[test]
    fn smooth_union_formula() {
        let (d, n) = smooth_union(0.2, B1, 0.5, B2, 1.);
        assert!((d - (0.2 - 0.25)).abs() < TOL);
        assert!(dist(&n, &normalize(&v(1., 1., 0.))) < TOL);

        let (_, n) = smooth_union(0.1, B3, 0.3, -B3, 1.);
        assert_eq!(n, B3);
    }

    #[test]
    fn group_reports_its_own_material() {
        let g = two_spheres(0.5);
        assert_eq!(g.project(&O).material.color, v(0., 255., 0.));
    }

    #[test]
    fn group_folds_more_than_two_children() {
        let m = red();
        let children: Vec<Primitive> = [-3., 0., 3.]
            .iter()
            .map(|x| Sphere::new(v(*x, 0., 0.), 1., m).unwrap().into())
            .collect();
        let g = SmoothGroup::new(children, 0., m).unwrap();
        assert!((g.sdf(&v(3., 0., 2.)) - 1.).abs() < TOL);
        assert!((g.sdf(&v(-3., 0., -2.)) - 1.).abs() < TOL);
    }

    #[test]
    fn group_needs_two_children() {
        let s: Primitive = Sphere::new(O, 1., red()).unwrap().into();
        assert_eq!(
            SmoothGroup::new(vec![s.clone()], 0.5, red()).unwrap_err(),
            SceneError::SmoothGroupArity(1)
        );
        assert_eq!(
            SmoothGroup::new(vec![s.clone(), s], -0.5, red()).unwrap_err(),
            SceneError::InvalidSmoothing(-0.5)
        );
    }
}
