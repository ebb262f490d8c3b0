// SPDX-License-Identifier: MPL-2.0
//! Visual primitives shared by the switch and the demo gallery.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Bundled SVG icons

pub mod design_tokens;
pub mod icons;
