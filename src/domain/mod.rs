// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Value types the switch is built from.
//!
//! # Modules
//!
//! - [`activation`]: Animation progress ([`Activation`])
//! - [`color`]: Hex color parsing and interpolation

pub mod activation;
pub mod color;

pub use activation::Activation;
