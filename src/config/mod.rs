// SPDX-License-Identifier: MPL-2.0
//! This module handles switch configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[colors]` - Color endpoints of the cross-fade (hex strings)
//! - `[label]` - Label text and label color behavior
//! - `[behavior]` - Initial state, press gating, long-press delay
//! - `[animation]` - Transition durations
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_switch_button::config;
//! use std::path::Path;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.colors.main = Some("#111111".to_string());
//!
//! // Save the modified configuration
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::switch_button::PressOrdering;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning returned by [`load`] when the file exists but cannot be read.
pub const LOAD_WARNING: &str = "settings.toml could not be read, defaults are in use";

// =============================================================================
// Section Structs
// =============================================================================

/// Color endpoints, as CSS-style hex strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColorsConfig {
    /// Background of the active state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,

    /// Background of the inactive state (and tint of the active state).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,

    /// Icon tint of the inactive state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<String>,
}

/// Label settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_text: Option<bool>,

    /// Whether the label color follows the animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_text_color: Option<bool>,
}

/// Interaction settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_press_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_ordering: Option<PressOrdering>,
}

/// Transition durations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "default_activate_ms", skip_serializing_if = "Option::is_none")]
    pub activate_ms: Option<u64>,

    #[serde(
        default = "default_deactivate_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub deactivate_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            activate_ms: default_activate_ms(),
            deactivate_ms: default_deactivate_ms(),
        }
    }
}

/// Complete switch configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub label: LabelConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_activate_ms() -> Option<u64> {
    Some(DEFAULT_ACTIVATE_MS)
}

fn default_deactivate_ms() -> Option<u64> {
    Some(DEFAULT_DEACTIVATE_MS)
}

impl AnimationConfig {
    /// Duration toward the active look, capped at [`MAX_TRANSITION_MS`].
    #[must_use]
    pub fn activate(&self) -> Duration {
        Duration::from_millis(
            self.activate_ms
                .unwrap_or(DEFAULT_ACTIVATE_MS)
                .min(MAX_TRANSITION_MS),
        )
    }

    /// Duration toward the inactive look, capped at [`MAX_TRANSITION_MS`].
    #[must_use]
    pub fn deactivate(&self) -> Duration {
        Duration::from_millis(
            self.deactivate_ms
                .unwrap_or(DEFAULT_DEACTIVATE_MS)
                .min(MAX_TRANSITION_MS),
        )
    }
}

impl BehaviorConfig {
    /// Long-press delay, clamped to the supported range.
    #[must_use]
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(
            self.long_press_ms
                .unwrap_or(DEFAULT_LONG_PRESS_MS)
                .clamp(MIN_LONG_PRESS_MS, MAX_LONG_PRESS_MS),
        )
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default config ({}): {err}", path.display());
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
