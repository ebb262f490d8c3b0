// SPDX-License-Identifier: MPL-2.0
//! Style fragments for the switch.
//!
//! Each fragment merges static layout values from the design tokens with
//! the color interpolated for the current frame. Fragments are plain data,
//! so callers can adjust them before they become iced styles.

use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use iced::widget::{container as container_widget, svg, text as text_widget};
use iced::{Background, Border, Color, Shadow, Theme};

/// The round bounce region behind the icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerFragment {
    /// Side of the region at rest.
    pub size: f32,
    /// Bounce scale applied on top of `size`.
    pub scale: f32,
    pub radius: f32,
    pub background: Color,
    pub border: Option<(f32, Color)>,
    pub shadow: Shadow,
}

impl ContainerFragment {
    /// Side of the region for this frame.
    #[must_use]
    pub fn scaled_size(&self) -> f32 {
        self.size * self.scale
    }

    #[must_use]
    pub fn to_style(&self) -> container_widget::Style {
        let border = self.border.map_or_else(
            || Border {
                radius: self.radius.into(),
                ..Border::default()
            },
            |(width, color)| Border {
                color,
                width,
                radius: self.radius.into(),
            },
        );
        container_widget::Style {
            background: Some(Background::Color(self.background)),
            border,
            shadow: self.shadow,
            ..container_widget::Style::default()
        }
    }
}

/// The state icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFragment {
    pub size: f32,
    pub scale: f32,
    pub tint: Color,
}

impl ImageFragment {
    #[must_use]
    pub fn scaled_size(&self) -> f32 {
        self.size * self.scale
    }

    #[must_use]
    pub fn to_style(&self) -> svg::Style {
        svg::Style {
            color: Some(self.tint),
        }
    }
}

/// The label text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFragment {
    pub size: f32,
    /// `None` keeps the theme's text color.
    pub color: Option<Color>,
}

impl TextFragment {
    #[must_use]
    pub fn to_style(&self) -> text_widget::Style {
        text_widget::Style { color: self.color }
    }
}

/// The box around the label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextContainerFragment {
    /// Gap between the bounce region and the label.
    pub padding_left: f32,
    /// Background behind the label, transparent by default.
    pub background: Option<Color>,
}

impl TextContainerFragment {
    #[must_use]
    pub fn to_style(&self) -> container_widget::Style {
        container_widget::Style {
            background: self.background.map(Background::Color),
            ..container_widget::Style::default()
        }
    }
}

/// Bounce region style for the given background and bounce scale.
#[must_use]
pub fn container(background: Color, scale: f32) -> ContainerFragment {
    ContainerFragment {
        size: sizing::SWITCH,
        scale,
        radius: radius::FULL,
        background,
        border: None,
        shadow: shadow::SM,
    }
}

/// Icon style for the given tint and bounce scale.
#[must_use]
pub fn image(tint: Color, scale: f32) -> ImageFragment {
    ImageFragment {
        size: sizing::SWITCH_ICON,
        scale,
        tint,
    }
}

/// Label style; `color` is set only when the label animates.
#[must_use]
pub fn text(color: Option<Color>) -> TextFragment {
    TextFragment {
        size: typography::BODY,
        color,
    }
}

#[must_use]
pub fn text_container() -> TextContainerFragment {
    TextContainerFragment {
        padding_left: spacing::XS,
        background: None,
    }
}

/// Adapts a fragment style into the closure form iced widgets expect.
pub fn container_style(fragment: ContainerFragment) -> impl Fn(&Theme) -> container_widget::Style {
    move |_theme: &Theme| fragment.to_style()
}

/// Adapts an icon fragment into the closure form iced's `svg` expects.
pub fn image_style(fragment: ImageFragment) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| fragment.to_style()
}

/// Adapts a label fragment into the closure form iced's `text` expects.
pub fn text_style(fragment: TextFragment) -> impl Fn(&Theme) -> text_widget::Style {
    move |_theme: &Theme| fragment.to_style()
}

/// Adapts a label box fragment into the closure form iced's `container` expects.
pub fn text_container_style(
    fragment: TextContainerFragment,
) -> impl Fn(&Theme) -> container_widget::Style {
    move |_theme: &Theme| fragment.to_style()
}
