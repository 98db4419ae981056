use std::ops;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct V3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A marching ray. `origin` and `direction` never change once built; only
/// `head` moves as the marcher advances.
#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: V3,
    pub direction: V3,
    pub head: V3,
}

impl Ray {
    /// `direction` must already be unit length.
    pub fn new(origin: V3, direction: V3) -> Ray {
        Ray {
            origin,
            direction,
            head: origin,
        }
    }

    /// Moves the head `t` units along the direction.
    pub fn advance(&mut self, t: f64) {
        self.head = add(&self.head, &scale(t, &self.direction));
    }
}

pub fn v(x: f64, y: f64, z: f64) -> V3 {
    V3 { x, y, z }
}

pub fn add(x: &V3, y: &V3) -> V3 {
    V3 {
        x: x.x + y.x,
        y: x.y + y.y,
        z: x.z + y.z,
    }
}

pub fn sub(x: &V3, y: &V3) -> V3 {
    V3 {
        x: x.x - y.x,
        y: x.y - y.y,
        z: x.z - y.z,
    }
}

pub fn scale(scalar: f64, x: &V3) -> V3 {
    V3 {
        x: x.x * scalar,
        y: x.y * scalar,
        z: x.z * scalar,
    }
}

pub fn dot(x: &V3, y: &V3) -> f64 {
    x.x * y.x + x.y * y.y + x.z * y.z
}

pub fn cross(v1: &V3, v2: &V3) -> V3 {
    v(
        v1.y * v2.z - v1.z * v2.y,
        v1.z * v2.x - v1.x * v2.z,
        v1.x * v2.y - v1.y * v2.x,
    )
}

pub fn norm2(x: &V3) -> f64 {
    dot(x, x)
}

pub fn norm(x: &V3) -> f64 {
    norm2(x).sqrt()
}

pub fn dist(x: &V3, y: &V3) -> f64 {
    norm(&sub(x, y))
}

/// Undefined for the zero vector; see [`try_normalize`].
pub fn normalize(x: &V3) -> V3 {
    scale(1. / norm(x), x)
}

/// Like [`normalize`] but returns `None` when the length is zero or not finite.
pub fn try_normalize(x: &V3) -> Option<V3> {
    let n = norm(x);
    if n > 0. && n.is_finite() {
        Some(scale(1. / n, x))
    } else {
        None
    }
}

impl ops::Add<V3> for V3 {
    type Output = V3;

    fn add(self, rhs: V3) -> V3 {
        add(&self, &rhs)
    }
}

impl ops::Sub<V3> for V3 {
    type Output = V3;

    fn sub(self, rhs: V3) -> V3 {
        sub(&self, &rhs)
    }
}

impl ops::Neg for V3 {
    type Output = V3;

    fn neg(self) -> V3 {
        scale(-1., &self)
    }
}

impl ops::Mul<V3> for f64 {
    type Output = V3;

    fn mul(self, rhs: V3) -> Self::Output {
        scale(self, &rhs)
    }
}

impl ops::Mul<f64> for V3 {
    type Output = V3;

    fn mul(self, rhs: f64) -> Self::Output {
        scale(rhs, &self)
    }
}

pub const B1: V3 = V3 {
    x: 1.,
    y: 0.,
    z: 0.,
};

pub const B2: V3 = V3 {
    x: 0.,
    y: 1.,
    z: 0.,
};

pub const B3: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 1.,
};

pub const O: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 0.,
};
