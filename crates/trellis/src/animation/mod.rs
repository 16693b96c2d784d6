//! The animation driver: time-driven interpolation of visual properties
//! between discrete user events.
//!
//! Advancement is frame-driven: the host supplies the elapsed time for each
//! frame through [`Params`], and components forward it to their animators
//! from `Component::on_animation`. There is no independent timer.

pub mod easing;

use std::time::Duration;

/// Per-frame animation parameters handed down the component tree.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Time elapsed since the previous frame.
    frame: Duration,
}

impl Params {
    /// Parameters for a frame that took `frame` to arrive.
    pub fn new(frame: Duration) -> Self {
        Self { frame }
    }

    /// Time elapsed since the previous frame.
    pub fn frame(&self) -> Duration {
        self.frame
    }
}

/// Interpolates one scalar from a start value to a target value over a
/// duration, after an optional start delay, shaped by an easing function.
///
/// Retargeting is replace-not-mutate: [`Animator::retarget`] discards the
/// animator and seeds its replacement with the current interpolated value,
/// so there is never a value discontinuity at redirection.
///
/// For monotonic easing functions the value never leaves
/// `[min(start, target), max(start, target)]`; overshoot functions such as
/// [`easing::back_out`] intentionally relax that bound.
#[derive(Debug, Clone)]
pub struct Animator {
    /// Current interpolated value.
    value: f32,
    /// Value at the start of the run.
    start: f32,
    /// Value at the end of the run.
    target: f32,
    /// Run length, excluding the delay.
    duration: Duration,
    /// Hold at `start` for this long before moving.
    delay: Duration,
    /// Progress shaping function.
    easing: easing::Function,
    /// Time accumulated since construction.
    elapsed: Duration,
}

impl Animator {
    /// Construct an animator moving from `start` to `target`.
    pub fn new(
        start: f32,
        target: f32,
        duration: Duration,
        easing: easing::Function,
        delay: Duration,
    ) -> Self {
        Self {
            value: start,
            start,
            target,
            duration,
            delay,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    /// An animator already at rest at `value`.
    pub fn resting(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, easing::linear, Duration::ZERO)
    }

    /// Replace this animator with one moving from the current interpolated
    /// value to `target`, resetting the clock.
    pub fn retarget(
        &mut self,
        target: f32,
        duration: Duration,
        easing: easing::Function,
        delay: Duration,
    ) {
        *self = Self::new(self.value, target, duration, easing, delay);
    }

    /// Advance the animator by one frame's elapsed time. Returns whether the
    /// animator is still in motion. A zero duration resolves to at rest at
    /// the target on the first call; once `delay + duration` has
    /// accumulated, the value snaps exactly to the target.
    pub fn advance(&mut self, frame: Duration) -> bool {
        self.elapsed += frame;
        if self.elapsed < self.delay {
            self.value = self.start;
            return true;
        }
        let run = self.elapsed - self.delay;
        if run >= self.duration {
            self.value = self.target;
            return false;
        }
        let t = run.as_secs_f32() / self.duration.as_secs_f32();
        self.value = self.start + (self.target - self.start) * (self.easing)(t);
        true
    }

    /// The current interpolated value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value this animator is moving toward. Used for retarget
    /// detection.
    pub fn to(&self) -> f32 {
        self.target
    }

    /// The configured run length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The configured start delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
