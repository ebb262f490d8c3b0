// SPDX-License-Identifier: MPL-2.0
//! Timed transitions for the activation scalar and the bounce scale.
//!
//! A [`Transition`] eases a single `f32` from wherever it currently is toward
//! a target over a fixed wall-clock duration. Asking for a new target while
//! one is in flight starts the new leg from the current value, so the output
//! never jumps. The [`AnimationDriver`] wraps one transition in the [0, 1]
//! activation space and picks the duration matching the direction.

use crate::domain::Activation;
use std::time::{Duration, Instant};

// =============================================================================
// Easing
// =============================================================================

/// Easing curves used by the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Symmetric ease-in-out built from `cubic-bezier(0.42, 0, 1, 1)`.
    #[default]
    Standard,
    /// Cubic ease-out: fast start, slow finish.
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in [0, 1] to eased progress in [0, 1].
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Standard => {
                if t < 0.5 {
                    ease(t * 2.0) / 2.0
                } else {
                    1.0 - ease((1.0 - t) * 2.0) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// `cubic-bezier(0.42, 0, 1, 1)` evaluated at `x`.
fn ease(x: f32) -> f32 {
    CubicBezier::new(0.42, 0.0, 1.0, 1.0).solve(x)
}

/// A CSS-style cubic Bézier timing curve anchored at (0,0) and (1,1).
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const NEWTON_ITERATIONS: usize = 8;
    const BISECTION_ITERATIONS: usize = 24;
    const EPSILON: f32 = 1e-6;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Finds the curve parameter whose x equals `x`, then returns its y.
    fn solve(self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < Self::EPSILON {
                return Self::sample(self.y1, self.y2, t);
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < Self::EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Newton did not converge, fall back to bisection.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..Self::BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

// =============================================================================
// Transition
// =============================================================================

/// One eased leg from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// A transition resting at `value`.
    #[must_use]
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Uses a different easing curve for subsequent legs.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The value the transition is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Samples the transition at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    /// Returns true while the value is still moving at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started| now.saturating_duration_since(started) < self.duration)
    }

    /// Heads toward `to`, starting from the value sampled at `now`.
    ///
    /// Returns `false` and leaves the clock untouched when `to` is already
    /// the target.
    pub fn retarget(&mut self, to: f32, duration: Duration, now: Instant) -> bool {
        if self.to == to {
            return false;
        }
        self.from = self.value(now);
        self.to = to;
        self.started_at = Some(now);
        self.duration = duration;
        true
    }
}

// =============================================================================
// Animation Driver
// =============================================================================

/// Durations for each direction of the activation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Toward the active look.
    pub activate: Duration,
    /// Toward the inactive look.
    pub deactivate: Duration,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            activate: Duration::from_millis(crate::config::DEFAULT_ACTIVATE_MS),
            deactivate: Duration::from_millis(crate::config::DEFAULT_DEACTIVATE_MS),
        }
    }
}

/// Owns the activation scalar of one switch.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    transition: Transition,
    durations: Durations,
}

impl AnimationDriver {
    /// Creates a driver resting at `initial`.
    #[must_use]
    pub fn new(initial: Activation, durations: Durations) -> Self {
        Self {
            transition: Transition::settled(initial.value()),
            durations,
        }
    }

    /// Eases the scalar to 0 over the deactivation duration.
    pub fn animate_to_inactive(&mut self, now: Instant) -> bool {
        self.transition.retarget(
            Activation::INACTIVE.value(),
            self.durations.deactivate,
            now,
        )
    }

    /// Eases the scalar to 1 over the activation duration.
    pub fn animate_to_active(&mut self, now: Instant) -> bool {
        self.transition
            .retarget(Activation::ACTIVE.value(), self.durations.activate, now)
    }

    /// Eases the scalar toward the endpoint matching `is_active`.
    ///
    /// Returns `true` when a new leg was started.
    pub fn animate_toward(&mut self, is_active: bool, now: Instant) -> bool {
        if is_active {
            self.animate_to_active(now)
        } else {
            self.animate_to_inactive(now)
        }
    }

    /// Current activation at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> Activation {
        Activation::new(self.transition.value(now))
    }

    /// Endpoint the scalar is heading to.
    #[must_use]
    pub fn target(&self) -> Activation {
        Activation::new(self.transition.target())
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_animating(now)
    }
}
