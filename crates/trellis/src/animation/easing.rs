//! Easing functions: mappings from normalized elapsed time to normalized
//! progress, shaping animation velocity. All functions map 0 to 0 and 1
//! to 1; all except [`back_out`] are monotonic.

/// An easing function. Pure mapping from `[0, 1]` to progress.
pub type Function = fn(f32) -> f32;

/// Constant velocity.
pub fn linear(t: f32) -> f32 {
    t
}

/// Accelerate from rest.
pub fn quadratic_in(t: f32) -> f32 {
    t * t
}

/// Decelerate to rest.
pub fn quadratic_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Accelerate, then decelerate.
pub fn quadratic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Sharper deceleration than quadratic.
pub fn cubic_out(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Overshoot the target, then settle back. Not monotonic: progress exceeds 1
/// near the end of the run.
pub fn back_out(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    const FUNCTIONS: &[Function] = &[
        linear,
        quadratic_in,
        quadratic_out,
        quadratic_in_out,
        cubic_out,
        back_out,
    ];

    #[test]
    fn endpoints() {
        for f in FUNCTIONS {
            assert!((f(0.0)).abs() < 1e-6);
            assert!((f(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn monotonic_functions_increase() {
        for f in &FUNCTIONS[..5] {
            let mut prev = f(0.0);
            for i in 1..=100 {
                let v = f(i as f32 / 100.0);
                assert!(v >= prev, "not monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn back_out_overshoots() {
        assert!(back_out(0.8) > 1.0);
    }
}
