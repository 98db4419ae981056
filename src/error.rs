use thiserror::Error;

/// Rejected scene or camera descriptions. Marching itself never fails, so
/// these only come out of the `build_*` functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("{0} has zero or non-finite length")]
    DegenerateNormal(&'static str),

    #[error("smooth group needs at least two children, got {0}")]
    SmoothGroupArity(usize),

    #[error("smoothing must be finite and non-negative, got {0}")]
    InvalidSmoothing(f64),

    #[error("scene has no primitives")]
    EmptyScene,

    #[error("camera {0}")]
    DegenerateCamera(&'static str),

    #[error("screen size must be positive, got {0}x{1}")]
    InvalidScreen(u32, u32),

    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f64),
}
