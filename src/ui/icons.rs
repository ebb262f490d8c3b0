// SPDX-License-Identifier: MPL-2.0
//! Bundled SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. They are drawn in a single solid color so the
//! switch can recolor them with its animated tint.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let options = Options::new()
//!     .active_image(icons::bell())
//!     .inactive_image(icons::bell_off());
//! ```

use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(check, "check.svg", "Check mark: default active icon.");
define_icon!(cross, "cross.svg", "Diagonal cross: default inactive icon.");
define_icon!(bell, "bell.svg", "Bell: notifications on.");
define_icon!(bell_off, "bell_off.svg", "Crossed-out bell: notifications off.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_cached() {
        assert_eq!(check().id(), check().id());
        assert_ne!(check().id(), cross().id());
    }
}
