// SPDX-License-Identifier: MPL-2.0
//! Construction options for a switch.

use super::animation::Durations;
use super::controller::PressOrdering;
use super::style::{ContainerFragment, ImageFragment, TextContainerFragment, TextFragment};
use crate::config::{self, Config};
use crate::domain::color;
use crate::error::Result;
use crate::ui::icons;
use iced::widget::svg;
use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Caller adjustment applied after the computed style fragment.
pub type Override<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// The three color endpoints of the cross-fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConfiguration {
    /// Background of the active state.
    pub main: Color,
    /// Background of the inactive state, tint of the active state.
    pub original: Color,
    /// Tint of the inactive state.
    pub tint: Color,
}

impl Default for ColorConfiguration {
    fn default() -> Self {
        // The defaults are compile-time literals covered by tests.
        let parse = |hex: &str| color::parse_hex(hex).unwrap_or(Color::WHITE);
        Self {
            main: parse(config::DEFAULT_MAIN_COLOR),
            original: parse(config::DEFAULT_ORIGINAL_COLOR),
            tint: parse(config::DEFAULT_TINT_COLOR),
        }
    }
}

/// Timing knobs of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub durations: Durations,
    pub long_press: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            durations: Durations::default(),
            long_press: Duration::from_millis(config::DEFAULT_LONG_PRESS_MS),
        }
    }
}

/// Everything a host configures on a switch.
///
/// # Example
///
/// ```
/// use iced_switch_button::switch_button::Options;
/// use iced::Color;
///
/// let options = Options::new()
///     .text("Notifications")
///     .main_color(Color::from_rgb8(0x11, 0x11, 0x11))
///     .same_text_color(true);
/// assert!(!options.is_active);
/// ```
#[derive(Clone)]
pub struct Options {
    pub is_active: bool,
    pub active_image: svg::Handle,
    pub inactive_image: svg::Handle,
    pub text: Option<String>,
    pub disable_text: bool,
    pub colors: ColorConfiguration,
    pub same_text_color: bool,
    pub disabled: bool,
    pub press_ordering: PressOrdering,
    pub timings: Timings,
    pub style: Option<Override<ContainerFragment>>,
    pub image_style: Option<Override<ImageFragment>>,
    pub text_style: Option<Override<TextFragment>>,
    pub text_container_style: Option<Override<TextContainerFragment>>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("is_active", &self.is_active)
            .field("text", &self.text)
            .field("disable_text", &self.disable_text)
            .field("colors", &self.colors)
            .field("same_text_color", &self.same_text_color)
            .field("disabled", &self.disabled)
            .field("press_ordering", &self.press_ordering)
            .field("timings", &self.timings)
            .finish_non_exhaustive()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            is_active: false,
            active_image: icons::check(),
            inactive_image: icons::cross(),
            text: None,
            disable_text: false,
            colors: ColorConfiguration::default(),
            same_text_color: false,
            disabled: false,
            press_ordering: PressOrdering::default(),
            timings: Timings::default(),
            style: None,
            image_style: None,
            text_style: None,
            text_container_style: None,
        }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves options from a loaded configuration.
    ///
    /// Fails when one of the configured colors is not a valid hex color.
    pub fn from_config(config: &Config) -> Result<Self> {
        let defaults = ColorConfiguration::default();
        let resolve = |value: &Option<String>, fallback: Color| -> Result<Color> {
            match value {
                Some(hex) => Ok(color::parse_hex(hex)?),
                None => Ok(fallback),
            }
        };
        let colors = ColorConfiguration {
            main: resolve(&config.colors.main, defaults.main)?,
            original: resolve(&config.colors.original, defaults.original)?,
            tint: resolve(&config.colors.tint, defaults.tint)?,
        };

        Ok(Self {
            is_active: config.behavior.is_active.unwrap_or(false),
            text: config.label.text.clone(),
            disable_text: config.label.disable_text.unwrap_or(false),
            colors,
            same_text_color: config.label.same_text_color.unwrap_or(false),
            disabled: config.behavior.disabled.unwrap_or(false),
            press_ordering: config.behavior.press_ordering.unwrap_or_default(),
            timings: Timings {
                durations: Durations {
                    activate: config.animation.activate(),
                    deactivate: config.animation.deactivate(),
                },
                long_press: config.behavior.long_press(),
            },
            ..Self::default()
        })
    }

    #[must_use]
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    #[must_use]
    pub fn active_image(mut self, handle: svg::Handle) -> Self {
        self.active_image = handle;
        self
    }

    #[must_use]
    pub fn inactive_image(mut self, handle: svg::Handle) -> Self {
        self.inactive_image = handle;
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn disable_text(mut self, disable_text: bool) -> Self {
        self.disable_text = disable_text;
        self
    }

    #[must_use]
    pub fn main_color(mut self, color: Color) -> Self {
        self.colors.main = color;
        self
    }

    #[must_use]
    pub fn original_color(mut self, color: Color) -> Self {
        self.colors.original = color;
        self
    }

    #[must_use]
    pub fn tint_color(mut self, color: Color) -> Self {
        self.colors.tint = color;
        self
    }

    #[must_use]
    pub fn same_text_color(mut self, same_text_color: bool) -> Self {
        self.same_text_color = same_text_color;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Same as [`Options::disabled`]; kept for hosts using the click-only name.
    #[must_use]
    pub fn disabled_on_click(self, disabled: bool) -> Self {
        self.disabled(disabled)
    }

    #[must_use]
    pub fn press_ordering(mut self, ordering: PressOrdering) -> Self {
        self.press_ordering = ordering;
        self
    }

    #[must_use]
    pub fn timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn style(
        mut self,
        style: impl Fn(ContainerFragment) -> ContainerFragment + Send + Sync + 'static,
    ) -> Self {
        self.style = Some(Arc::new(style));
        self
    }

    #[must_use]
    pub fn image_style(
        mut self,
        style: impl Fn(ImageFragment) -> ImageFragment + Send + Sync + 'static,
    ) -> Self {
        self.image_style = Some(Arc::new(style));
        self
    }

    #[must_use]
    pub fn text_style(
        mut self,
        style: impl Fn(TextFragment) -> TextFragment + Send + Sync + 'static,
    ) -> Self {
        self.text_style = Some(Arc::new(style));
        self
    }

    #[must_use]
    pub fn text_container_style(
        mut self,
        style: impl Fn(TextContainerFragment) -> TextContainerFragment + Send + Sync + 'static,
    ) -> Self {
        self.text_container_style = Some(Arc::new(style));
        self
    }
}
