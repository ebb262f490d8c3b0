// SPDX-License-Identifier: MPL-2.0
//! Animated switch button.
//!
//! A round bounce region holding a state icon, optionally followed by a
//! label. Pressing it toggles between the inactive and active looks; the
//! background, icon tint and (optionally) label color cross-fade over a
//! timed, eased transition.
//!
//! The switch is a nested TEA sub-component: the host owns a [`State`],
//! forwards [`Message`]s to [`State::handle`], turns the returned [`Effect`]
//! into its own messages (see [`Callbacks`]) and feeds its canonical
//! activation flag back with [`Message::ActiveChanged`].
//!
//! ## Architecture
//!
//! ```text
//! mod.rs (orchestrator)
//!     ├── animation    - Eased, retargetable transitions
//!     ├── controller   - Press gating, long press, bounce
//!     ├── presentation - Per-frame colors and element tree
//!     ├── style        - Style fragments
//!     ├── options      - Construction options
//!     └── callbacks    - Effect to host message mapping
//! ```
//!
//! # Example
//!
//! ```
//! use iced_switch_button::switch_button::{Effect, Message, Options, State};
//!
//! let mut switch = State::new(Options::new().text("Notifications"));
//! switch.handle(Message::PressIn);
//! let effect = switch.handle(Message::PressOut);
//!
//! assert_eq!(effect, Effect::Toggled { change: true, press: true });
//! assert!(switch.is_active());
//! ```

pub mod animation;
pub mod callbacks;
pub mod controller;
pub mod options;
pub mod presentation;
pub mod style;

pub use animation::{AnimationDriver, Durations, Easing};
pub use callbacks::Callbacks;
pub use controller::PressOrdering;
pub use options::{ColorConfiguration, Options, Timings};
pub use presentation::VisualStyleSet;

use crate::domain::Activation;
use controller::{Controller, Gesture};
use iced::{window, Element, Subscription};
use presentation::Hooks;
use std::time::Instant;

/// Messages for the switch sub-component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer went down on the bounce region.
    PressIn,
    /// Pointer went up on the bounce region.
    PressOut,
    /// Pointer left the bounce region.
    PressCancel,
    /// Animation frame.
    Tick(Instant),
    /// The host's canonical activation flag (new or repeated).
    ActiveChanged(bool),
}

/// Effects produced by switch interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// An accepted press.
    Toggled {
        /// New canonical state for the change callback.
        change: bool,
        /// Flag for the press callback.
        press: bool,
    },
    /// An accepted long press. Never changes state.
    LongPressed,
}

/// Switch state owned by the host.
#[derive(Debug, Clone)]
pub struct State {
    options: Options,
    /// Optimistic shadow of the host's flag.
    active: bool,
    /// Last flag the host reported.
    observed: Option<bool>,
    driver: AnimationDriver,
    controller: Controller,
    /// Time of the last handled message, used when drawing.
    now: Instant,
}

impl State {
    /// Creates a switch and runs the mount-time sync with `options.is_active`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::new_at(options, Instant::now())
    }

    /// Same as [`State::new`] with an explicit clock.
    #[must_use]
    pub fn new_at(options: Options, now: Instant) -> Self {
        let is_active = options.is_active;
        let mut state = Self {
            driver: AnimationDriver::new(Activation::INACTIVE, options.timings.durations),
            controller: Controller::new(options.timings.long_press),
            active: is_active,
            observed: None,
            now,
            options,
        };
        state.sync(is_active, now);
        state
    }

    /// Handle a switch message at the current time.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        let now = match msg {
            Message::Tick(at) => at,
            _ => Instant::now(),
        };
        self.handle_at(msg, now)
    }

    /// Handle a switch message at `now`.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_at(&mut self, msg: Message, now: Instant) -> Effect {
        self.now = self.now.max(now);
        match msg {
            Message::PressIn => {
                if self.options.disabled {
                    log::debug!("switch disabled, ignoring press");
                    return Effect::None;
                }
                self.controller.press_in(now);
                Effect::None
            }
            Message::PressOut => {
                if self.options.disabled {
                    return Effect::None;
                }
                match self.controller.press_out(now) {
                    Gesture::Press => self.toggle(now),
                    Gesture::LongPress => Self::long_press(),
                    Gesture::None => Effect::None,
                }
            }
            Message::PressCancel => {
                self.controller.cancel(now);
                Effect::None
            }
            Message::Tick(_) => {
                if self.options.disabled {
                    return Effect::None;
                }
                match self.controller.tick(now) {
                    Gesture::LongPress => Self::long_press(),
                    Gesture::Press | Gesture::None => Effect::None,
                }
            }
            Message::ActiveChanged(is_active) => {
                self.sync(is_active, now);
                Effect::None
            }
        }
    }

    fn toggle(&mut self, now: Instant) -> Effect {
        let toggle = self.options.press_ordering.toggle(self.active);
        self.active = toggle.change;
        self.driver.animate_toward(toggle.animate_toward, now);
        log::debug!(
            "switch toggled: change={} press={}",
            toggle.change,
            toggle.press
        );
        Effect::Toggled {
            change: toggle.change,
            press: toggle.press,
        }
    }

    fn long_press() -> Effect {
        log::debug!("switch long-pressed");
        Effect::LongPressed
    }

    /// Reconciles with the host's canonical flag and animates toward it.
    ///
    /// Returns `true` when the flag differs from the last one the host
    /// reported (always the case on the first call).
    pub fn sync(&mut self, is_active: bool, now: Instant) -> bool {
        let changed = self.observed != Some(is_active);
        self.observed = Some(is_active);
        self.active = is_active;
        self.driver.animate_toward(is_active, now);
        if changed {
            log::debug!("switch host flag changed to {is_active}");
        }
        changed
    }

    /// Optimistic activation flag, reconciled with the host on every sync.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the active icon is shown. Follows the animation target, so
    /// under [`PressOrdering::Legacy`] it lags with the colors.
    #[must_use]
    pub fn shows_active(&self) -> bool {
        self.driver.target() == Activation::ACTIVE
    }

    /// Animation progress at the last handled message.
    #[must_use]
    pub fn activation(&self) -> Activation {
        self.activation_at(self.now)
    }

    #[must_use]
    pub fn activation_at(&self, now: Instant) -> Activation {
        self.driver.value(now)
    }

    /// Colors of the frame at `now`.
    #[must_use]
    pub fn visuals_at(&self, now: Instant) -> VisualStyleSet {
        presentation::derive(
            &self.options.colors,
            self.activation_at(now),
            self.options.same_text_color,
        )
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether the switch needs animation frames at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.driver.is_animating(now) || self.controller.needs_frames(now)
    }

    /// Frame subscription, active only while something moves or a press is held.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating(self.now) {
            window::frames().map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Render the switch.
    pub fn view(&self) -> Element<'_, Message> {
        let frame = presentation::frame(
            &self.options,
            self.shows_active(),
            self.activation(),
            self.controller.scale(self.now),
        );
        let hooks = (!self.options.disabled).then_some(Hooks {
            press_in: Message::PressIn,
            press_out: Message::PressOut,
            cancel: Message::PressCancel,
        });
        presentation::compose(frame, hooks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn press(state: &mut State, at: Instant) -> Effect {
        state.handle_at(Message::PressIn, at);
        state.handle_at(Message::PressOut, at + ms(50))
    }

    #[test]
    fn mount_with_active_flag_animates_to_active() {
        let start = Instant::now();
        let state = State::new_at(Options::new().is_active(true), start);

        assert!(state.is_active());
        assert!(state.is_animating(start));
        assert_eq!(state.activation_at(start), Activation::INACTIVE);
        assert_eq!(state.activation_at(start + ms(450)), Activation::ACTIVE);
    }

    #[test]
    fn mount_inactive_is_settled() {
        let start = Instant::now();
        let state = State::new_at(Options::new(), start);
        assert!(!state.is_active());
        assert!(!state.is_animating(start));
    }

    #[test]
    fn accepted_press_toggles_and_animates() {
        let start = Instant::now();
        let mut state = State::new_at(Options::new(), start);

        let effect = press(&mut state, start);
        assert_eq!(
            effect,
            Effect::Toggled {
                change: true,
                press: true
            }
        );
        assert!(state.is_active());
        assert!(state.shows_active());
        assert_eq!(state.activation_at(start + ms(600)), Activation::ACTIVE);
    }

    #[test]
    fn disabled_switch_swallows_everything() {
        let start = Instant::now();
        let mut state = State::new_at(Options::new().disabled(true), start);

        assert_eq!(press(&mut state, start), Effect::None);
        state.handle_at(Message::PressIn, start);
        assert_eq!(state.handle_at(Message::Tick(start + ms(900)), start + ms(900)), Effect::None);
        assert!(!state.is_active());
        assert!(!state.is_animating(start + ms(1000)));
    }

    #[test]
    fn long_press_does_not_toggle() {
        let start = Instant::now();
        let mut state = State::new_at(Options::new(), start);

        state.handle_at(Message::PressIn, start);
        let tick = start + ms(520);
        assert_eq!(state.handle_at(Message::Tick(tick), tick), Effect::LongPressed);
        assert_eq!(state.handle_at(Message::PressOut, tick + ms(100)), Effect::None);
        assert!(!state.is_active());
        assert_eq!(state.activation_at(tick + ms(1000)), Activation::INACTIVE);
    }

    #[test]
    fn sync_reports_each_change_once() {
        let start = Instant::now();
        let mut state = State::new_at(Options::new(), start);

        assert!(!state.sync(false, start));
        assert!(state.sync(true, start + ms(10)));
        assert!(!state.sync(true, start + ms(20)));
        assert!(state.sync(false, start + ms(30)));
    }

    #[test]
    fn host_rejection_reconciles_shadow() {
        let start = Instant::now();
        let mut state = State::new_at(Options::new(), start);

        press(&mut state, start);
        assert!(state.is_active());

        // Host keeps its old value and says so.
        state.handle_at(Message::ActiveChanged(false), start + ms(100));
        assert!(!state.is_active());
        assert_eq!(state.activation_at(start + ms(600)), Activation::INACTIVE);
    }

    #[test]
    fn host_echo_does_not_restart_animation() {
        let start = Instant::now();
        let mut state = State::new_at(Options::new(), start);

        press(&mut state, start);
        let pressed_at = start + ms(50);
        state.handle_at(Message::ActiveChanged(true), start + ms(300));
        assert_eq!(state.activation_at(pressed_at + ms(450)), Activation::ACTIVE);
    }

    #[test]
    fn legacy_ordering_animates_with_previous_flag() {
        let start = Instant::now();
        let mut state = State::new_at(
            Options::new().press_ordering(PressOrdering::Legacy),
            start,
        );

        let effect = press(&mut state, start);
        assert_eq!(
            effect,
            Effect::Toggled {
                change: true,
                press: false
            }
        );
        // Without the host feeding `true` back, the visuals stay behind.
        assert!(state.is_active());
        assert!(!state.shows_active());
        assert_eq!(state.activation_at(start + ms(600)), Activation::INACTIVE);

        state.handle_at(Message::ActiveChanged(true), start + ms(600));
        assert!(state.shows_active());
        assert_eq!(state.activation_at(start + ms(1100)), Activation::ACTIVE);
    }

    #[test]
    fn visuals_follow_scalar() {
        let start = Instant::now();
        let state = State::new_at(Options::new().is_active(true), start);
        let colors = state.options().colors;

        assert_eq!(state.visuals_at(start).background, colors.original);
        assert_eq!(state.visuals_at(start + ms(450)).background, colors.main);
    }

    #[test]
    fn animation_stops_requesting_frames_when_settled() {
        let start = Instant::now();
        let mut state = State::new_at(Options::new(), start);
        press(&mut state, start);

        assert!(state.is_animating(start + ms(100)));
        assert!(!state.is_animating(start + ms(1000)));
    }
}
