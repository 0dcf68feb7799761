//! Easing curves shared by the acts.
//!
//! All functions map a normalized input in [0, 1] to a normalized output;
//! out-of-range input is clamped, never rejected.

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn cubic_out(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x).powi(3)
}

#[inline]
pub fn quad_in_out(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

#[inline]
pub fn quart_out(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x).powi(4)
}

/// Overshoot-then-settle. Exceeds 1.0 on approach; endpoints are exact.
#[inline]
pub fn back_out(x: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let x = x.clamp(0.0, 1.0);
    1.0 + C3 * (x - 1.0).powi(3) + C1 * (x - 1.0).powi(2)
}

/// Local progress of a staggered entity.
///
/// Returns 0 while global progress has not reached `stagger`, 1 once it has
/// covered the entity's `window`, and the linear ramp in between.
#[inline]
pub fn stagger_progress(progress: f32, stagger: f32, window: f32) -> f32 {
    if window <= 0.0 {
        return if progress >= stagger { 1.0 } else { 0.0 };
    }
    ((progress - stagger) / window).clamp(0.0, 1.0)
}
