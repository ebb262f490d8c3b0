// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Colors**: Color endpoints of the cross-fade
//! - **Animation**: Transition durations
//! - **Gestures**: Long-press delay and bounce feedback

// ==========================================================================
// Color Defaults
// ==========================================================================

/// Background color of the active state.
pub const DEFAULT_MAIN_COLOR: &str = "#f1bb7b";

/// Background color of the inactive state.
pub const DEFAULT_ORIGINAL_COLOR: &str = "#fff";

/// Icon tint of the inactive state.
pub const DEFAULT_TINT_COLOR: &str = "#f1bb7b";

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the transition toward the active look (in milliseconds).
pub const DEFAULT_ACTIVATE_MS: u64 = 450;

/// Duration of the transition toward the inactive look (in milliseconds).
pub const DEFAULT_DEACTIVATE_MS: u64 = 350;

/// Upper bound accepted for any configured duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Hold time before a press turns into a long press (in milliseconds).
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;

/// Minimum long-press delay (in milliseconds).
pub const MIN_LONG_PRESS_MS: u64 = 100;

/// Maximum long-press delay (in milliseconds).
pub const MAX_LONG_PRESS_MS: u64 = 5_000;

/// Scale applied while the switch is held down.
pub const BOUNCE_PRESSED_SCALE: f32 = 0.93;

/// Duration of the press-in bounce (in milliseconds).
pub const BOUNCE_IN_MS: u64 = 100;

/// Duration of the release bounce (in milliseconds).
pub const BOUNCE_OUT_MS: u64 = 150;
