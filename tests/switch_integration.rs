// SPDX-License-Identifier: MPL-2.0
//! Integration tests driving the switch through its public message API.

use iced_switch_button::domain::color::{parse_hex, to_hex};
use iced_switch_button::domain::Activation;
use iced_switch_button::switch_button::presentation::{self, LabelNode};
use iced_switch_button::switch_button::{
    Callbacks, ColorConfiguration, Effect, Message, Options, PressOrdering, State, Timings,
};
use std::time::{Duration, Instant};

const SHORT: Duration = Duration::from_millis(40);
const SETTLE: Duration = Duration::from_millis(1_000);

#[derive(Debug, Clone, PartialEq)]
enum Host {
    Changed(bool),
    Pressed(bool),
    LongPressed,
}

fn callbacks() -> Callbacks<'static, Host> {
    Callbacks::new()
        .on_change(Host::Changed)
        .on_press(Host::Pressed)
        .on_long_press(|| Host::LongPressed)
}

/// Press and release `SHORT` apart, returning the host messages.
fn tap(state: &mut State, at: Instant) -> Vec<Host> {
    state.handle_at(Message::PressIn, at);
    let effect = state.handle_at(Message::PressOut, at + SHORT);
    callbacks().dispatch(effect)
}

#[test]
fn accepted_press_fires_change_and_press_once() {
    let t0 = Instant::now();
    let mut state = State::new_at(Options::new(), t0);

    assert_eq!(
        tap(&mut state, t0),
        vec![Host::Changed(true), Host::Pressed(true)]
    );
    assert_eq!(
        tap(&mut state, t0 + SETTLE),
        vec![Host::Changed(false), Host::Pressed(false)]
    );
}

#[test]
fn disabled_switch_fires_nothing() {
    let t0 = Instant::now();
    let mut state = State::new_at(Options::new().disabled(true), t0);

    assert!(tap(&mut state, t0).is_empty());
    assert!(!state.is_active());

    let mut via_alias = State::new_at(Options::new().disabled_on_click(true), t0);
    assert!(tap(&mut via_alias, t0).is_empty());
}

#[test]
fn interrupted_transitions_stay_in_range_and_converge() {
    let t0 = Instant::now();
    let mut state = State::new_at(Options::new(), t0);

    // Flip every 100ms, well inside both durations.
    let mut at = t0;
    for _ in 0..7 {
        let messages = tap(&mut state, at);
        assert_eq!(messages.len(), 2);
        for step in 0..10 {
            let value = state.activation_at(at + Duration::from_millis(step * 10)).value();
            assert!((0.0..=1.0).contains(&value));
        }
        at += Duration::from_millis(100);
    }

    // Seven flips from inactive end on active.
    assert!(state.is_active());
    assert_eq!(state.activation_at(at + SETTLE), Activation::ACTIVE);
}

#[test]
fn background_endpoints_match_configured_colors() {
    let colors = ColorConfiguration {
        main: parse_hex("#111111").expect("valid main"),
        original: parse_hex("#fff").expect("valid original"),
        ..ColorConfiguration::default()
    };

    let inactive = presentation::derive(&colors, Activation::INACTIVE, false);
    let active = presentation::derive(&colors, Activation::ACTIVE, false);

    assert_eq!(to_hex(inactive.background), "#ffffff");
    assert_eq!(to_hex(active.background), "#111111");
}

#[test]
fn host_flag_change_animates_without_press() {
    let t0 = Instant::now();
    let mut state = State::new_at(Options::new(), t0);
    assert_eq!(state.activation_at(t0 + SETTLE), Activation::INACTIVE);

    let t1 = t0 + SETTLE;
    let effect = state.handle_at(Message::ActiveChanged(true), t1);

    assert_eq!(effect, Effect::None);
    assert!(state.is_active());
    assert!(state.is_animating(t1 + SHORT));
    let mid = state.activation_at(t1 + Duration::from_millis(200)).value();
    assert!(mid > 0.0 && mid < 1.0);
    assert_eq!(state.activation_at(t1 + SETTLE), Activation::ACTIVE);
}

#[test]
fn mounting_active_animates_toward_active() {
    let t0 = Instant::now();
    let state = State::new_at(Options::new().is_active(true), t0);

    assert!(state.is_animating(t0));
    assert_eq!(state.activation_at(t0 + SETTLE), Activation::ACTIVE);
}

#[test]
fn disabled_text_produces_no_label() {
    let options = Options::new().text("Wi-Fi").disable_text(true);
    let frame = presentation::frame(&options, false, Activation::INACTIVE, 1.0);
    assert!(frame.label.is_none());

    let options = Options::new().text("Wi-Fi");
    let frame = presentation::frame(&options, false, Activation::INACTIVE, 1.0);
    assert!(matches!(frame.label, Some(LabelNode::Static { ref text, .. }) if text == "Wi-Fi"));
}

#[test]
fn label_color_tracks_scalar_only_when_enabled() {
    let animated = Options::new().text("Dark mode").same_text_color(true);
    let colors = animated.colors;

    for value in [0.0, 0.25, 0.5, 1.0] {
        let activation = Activation::new(value);
        let frame = presentation::frame(&animated, false, activation, 1.0);
        let visuals = presentation::derive(&colors, activation, true);
        match frame.label {
            Some(LabelNode::Animated { text_style, .. }) => {
                assert_eq!(text_style.color, visuals.text);
            }
            other => panic!("expected animated label, got {other:?}"),
        }
    }

    let fixed = Options::new().text("Dark mode");
    let at_start = presentation::frame(&fixed, false, Activation::INACTIVE, 1.0);
    let at_end = presentation::frame(&fixed, true, Activation::ACTIVE, 1.0);
    assert_eq!(at_start.label, at_end.label);
    assert!(matches!(at_start.label, Some(LabelNode::Static { .. })));
}

#[test]
fn long_press_keeps_state_and_skips_change_callbacks() {
    let t0 = Instant::now();
    let mut state = State::new_at(Options::new(), t0);

    state.handle_at(Message::PressIn, t0);
    let t1 = t0 + Duration::from_millis(600);
    let held = state.handle_at(Message::Tick(t1), t1);
    assert_eq!(callbacks().dispatch(held), vec![Host::LongPressed]);

    let released = state.handle_at(Message::PressOut, t0 + Duration::from_millis(700));
    assert_eq!(released, Effect::None);
    assert!(!state.is_active());
    assert_eq!(state.activation_at(t0 + SETTLE), Activation::INACTIVE);
}

#[test]
fn legacy_ordering_reports_previous_state() {
    let t0 = Instant::now();
    let mut state = State::new_at(Options::new().press_ordering(PressOrdering::Legacy), t0);

    assert_eq!(
        tap(&mut state, t0),
        vec![Host::Changed(true), Host::Pressed(false)]
    );
    // Icon and colors both stay on the pre-press flag until the host echoes.
    assert!(!state.shows_active());
    state.handle_at(Message::ActiveChanged(true), t0 + SHORT);
    assert!(state.shows_active());
}

#[test]
fn host_echo_does_not_restart_animation() {
    let t0 = Instant::now();
    let mut state = State::new_at(Options::new(), t0);
    let t1 = t0 + SETTLE;

    tap(&mut state, t1);
    let mid = t1 + Duration::from_millis(200);
    let before = state.activation_at(mid);

    state.handle_at(Message::ActiveChanged(true), t1 + Duration::from_millis(100));
    assert_eq!(state.activation_at(mid), before);
}

#[test]
fn zero_long_press_delay_still_toggles() {
    let t0 = Instant::now();
    let timings = Timings {
        long_press: Duration::ZERO,
        ..Timings::default()
    };
    let mut state = State::new_at(Options::new().timings(timings), t0);

    state.handle_at(Message::PressIn, t0);
    let effect = state.handle_at(Message::PressOut, t0);

    assert_eq!(
        callbacks().dispatch(effect),
        vec![Host::Changed(true), Host::Pressed(true)]
    );
    assert!(state.is_active());
}
