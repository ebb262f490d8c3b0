// SPDX-License-Identifier: MPL-2.0
//! `iced_switch_button` is an animated switch button for the Iced GUI framework.
//!
//! The switch cross-fades its colors between an inactive and an active look,
//! swaps its icon, bounces while pressed and reports presses, long presses
//! and state changes to the host application, which owns the canonical
//! activation flag.

#![doc(html_root_url = "https://docs.rs/iced_switch_button/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod switch_button;
pub mod ui;
