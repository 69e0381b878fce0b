//! Framerate-independent easing. Every animated quantity moves toward its
//! target by `damp`, which covers a fixed fraction of the remaining distance
//! per unit time regardless of how the frames are sliced.

use crate::math::{Color, Vec3};

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fraction of the remaining distance covered after `dt` seconds with
/// smoothing time `lambda`. Always in [0, 1], so damping never overshoots.
fn decay(lambda: f32, dt: f32) -> f32 {
    if lambda <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt.max(0.0) / lambda).exp()
}

/// Moves `current` toward `target`. Larger `lambda` means a slower chase;
/// `lambda <= 0` snaps. `dt == 0` returns `current` unchanged.
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    lerp(current, target, decay(lambda, dt))
}

pub fn damp_vec3(current: Vec3, target: Vec3, lambda: f32, dt: f32) -> Vec3 {
    current.lerp(target, decay(lambda, dt))
}

pub fn damp_color(current: Color, target: Color, lambda: f32, dt: f32) -> Color {
    current.lerp(target, decay(lambda, dt))
}
