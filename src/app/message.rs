// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::switch_button;

/// Top-level messages consumed by `App::update`. The variants forward
/// switch messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the switch at the given index.
    Switch(usize, switch_button::Message),
    /// Change callback of a switch: the host adopts the new state.
    Changed(usize, bool),
    /// Press callback of a switch.
    Pressed(usize, bool),
    /// Long-press callback of a switch.
    LongPressed(usize),
    /// Flip a switch from the host side, without pressing it.
    ToggleFromHost(usize),
    /// Empty the callback log.
    ClearLog,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Start the configured switch in the active state (`--active`).
    pub active: bool,
    /// Disable the configured switch (`--disabled`).
    pub disabled: bool,
}
