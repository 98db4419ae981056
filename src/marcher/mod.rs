use crate::math::Ray;
use tracing::trace;

pub mod primitives;

use primitives::{Projection, Renderable};

const EPS: f64 = 0.1;
const MAX_STEPS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchConfig {
    /// A step whose distance falls below this counts as a hit.
    pub epsilon: f64,
    /// Steps taken before giving up. At least one step is always taken.
    pub max_steps: u32,
    /// Total distance the head may travel before the ray counts as escaped.
    pub max_distance: Option<f64>,
}

impl Default for MarchConfig {
    fn default() -> Self {
        MarchConfig {
            epsilon: EPS,
            max_steps: MAX_STEPS,
            max_distance: None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum MarchResult<'a> {
    Hit { projection: Projection<'a>, steps: u32 },
    Miss { steps: u32 },
}

impl<'a> MarchResult<'a> {
    pub fn steps(&self) -> u32 {
        match self {
            MarchResult::Hit { steps, .. } | MarchResult::Miss { steps } => *steps,
        }
    }

    pub fn projection(&self) -> Option<&Projection<'a>> {
        match self {
            MarchResult::Hit { projection, .. } => Some(projection),
            MarchResult::Miss { .. } => None,
        }
    }
}

/// Sphere traces `ray` through `r`, moving `ray.head` by the projected
/// distance every step. The head is advanced on the converging step too.
/// Misses once `max_steps` is used up or the travelled distance reaches
/// `max_distance`.
pub fn march<'a>(ray: &mut Ray, r: &'a impl Renderable, config: &MarchConfig) -> MarchResult<'a> {
    let mut steps = 0;
    let mut travelled = 0.;
    loop {
        let projection = r.project(&ray.head);
        ray.advance(projection.distance);
        travelled += projection.distance;
        steps += 1;
        if projection.distance < config.epsilon {
            trace!(steps, distance = projection.distance, "hit");
            return MarchResult::Hit { projection, steps };
        }
        if steps >= config.max_steps {
            trace!(steps, "miss");
            return MarchResult::Miss { steps };
        }
        if config.max_distance.is_some_and(|max| travelled >= max) {
            trace!(steps, travelled, "escaped");
            return MarchResult::Miss { steps };
        }
    }
}
