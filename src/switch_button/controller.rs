// SPDX-License-Identifier: MPL-2.0
//! Press handling: gating, long-press detection, bounce feedback and the
//! next-state decision.

use super::animation::{Easing, Transition};
use crate::config::{
    BOUNCE_IN_MS, BOUNCE_OUT_MS, BOUNCE_PRESSED_SCALE, MAX_LONG_PRESS_MS, MIN_LONG_PRESS_MS,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Which activation flag drives the animation and the press report.
///
/// The change report always carries the freshly computed state. Older
/// hook-based versions of this widget animated and reported the press with
/// the flag read *before* the toggle, so the visuals lagged one step behind
/// whenever the host did not immediately feed the new value back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PressOrdering {
    /// Animate and report the press with the new state.
    #[default]
    Resolved,
    /// Animate, swap the icon and report the press with the pre-press
    /// state. Only the change report carries the new state.
    Legacy,
}

/// Outcome of an accepted press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    /// New canonical state, for the change callback.
    pub change: bool,
    /// Flag reported to the press callback.
    pub press: bool,
    /// Endpoint the animation heads to.
    pub animate_toward: bool,
}

impl PressOrdering {
    /// Decides the outcome of a press while the switch shows `current`.
    #[must_use]
    pub fn toggle(self, current: bool) -> Toggle {
        let next = !current;
        let reported = match self {
            PressOrdering::Resolved => next,
            PressOrdering::Legacy => current,
        };
        Toggle {
            change: next,
            press: reported,
            animate_toward: reported,
        }
    }
}

/// What a finished gesture amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Nothing to report.
    None,
    /// A short press completed.
    Press,
    /// The hold crossed the long-press delay.
    LongPress,
}

/// Tracks one pointer hold on the switch.
#[derive(Debug, Clone)]
pub struct Controller {
    long_press_delay: Duration,
    pressed_at: Option<Instant>,
    long_press_fired: bool,
    bounce: Transition,
}

impl Controller {
    /// The delay is clamped to the same range the config accepts.
    #[must_use]
    pub fn new(long_press_delay: Duration) -> Self {
        Self {
            long_press_delay: long_press_delay.clamp(
                Duration::from_millis(MIN_LONG_PRESS_MS),
                Duration::from_millis(MAX_LONG_PRESS_MS),
            ),
            pressed_at: None,
            long_press_fired: false,
            bounce: Transition::settled(1.0).with_easing(Easing::EaseOutCubic),
        }
    }

    /// Pointer went down on the switch.
    pub fn press_in(&mut self, now: Instant) {
        self.pressed_at = Some(now);
        self.long_press_fired = false;
        self.bounce.retarget(
            BOUNCE_PRESSED_SCALE,
            Duration::from_millis(BOUNCE_IN_MS),
            now,
        );
    }

    /// Pointer went up. A hold that already produced a long press, or one
    /// that never started on the switch, yields [`Gesture::None`].
    pub fn press_out(&mut self, now: Instant) -> Gesture {
        self.release_bounce(now);
        let Some(pressed_at) = self.pressed_at.take() else {
            return Gesture::None;
        };
        if self.long_press_fired {
            self.long_press_fired = false;
            return Gesture::None;
        }
        if now.saturating_duration_since(pressed_at) >= self.long_press_delay {
            return Gesture::LongPress;
        }
        Gesture::Press
    }

    /// Pointer left the switch while held; the hold is abandoned.
    pub fn cancel(&mut self, now: Instant) {
        self.pressed_at = None;
        self.long_press_fired = false;
        self.release_bounce(now);
    }

    /// Frame tick while held. Fires the long press once the delay elapses.
    pub fn tick(&mut self, now: Instant) -> Gesture {
        match self.pressed_at {
            Some(pressed_at)
                if !self.long_press_fired
                    && now.saturating_duration_since(pressed_at) >= self.long_press_delay =>
            {
                self.long_press_fired = true;
                Gesture::LongPress
            }
            _ => Gesture::None,
        }
    }

    fn release_bounce(&mut self, now: Instant) {
        self.bounce
            .retarget(1.0, Duration::from_millis(BOUNCE_OUT_MS), now);
    }

    /// Current bounce scale, 1.0 at rest.
    #[must_use]
    pub fn scale(&self, now: Instant) -> f32 {
        self.bounce.value(now)
    }

    /// Whether a pointer is currently held on the switch.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Whether the controller needs frame ticks at `now`.
    #[must_use]
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.bounce.is_animating(now) || (self.is_held() && !self.long_press_fired)
    }
}
