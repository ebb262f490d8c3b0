// SPDX-License-Identifier: MPL-2.0
//! Derives per-frame colors from the activation scalar and composes the
//! switch's element tree.
//!
//! Two independent strategies coexist here: the colors follow the scalar
//! continuously, while the icon swaps discretely on the activation flag.

use super::options::{ColorConfiguration, Options};
use super::style::{self, ContainerFragment, ImageFragment, TextContainerFragment, TextFragment};
use crate::domain::{color, Activation};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, svg, Container, Row, Svg, Text};
use iced::{mouse, Alignment, Color, Element, Length};

/// Colors of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualStyleSet {
    pub background: Color,
    pub tint: Color,
    /// Set only when the label color animates.
    pub text: Option<Color>,
}

/// Interpolates the frame colors at `activation`.
#[must_use]
pub fn derive(
    colors: &ColorConfiguration,
    activation: Activation,
    same_text_color: bool,
) -> VisualStyleSet {
    let s = activation.value();
    VisualStyleSet {
        background: color::lerp(colors.original, colors.main, s),
        tint: color::lerp(colors.tint, colors.original, s),
        text: same_text_color.then(|| color::lerp(colors.tint, colors.main, s)),
    }
}

/// Label to render beside the bounce region.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelNode {
    /// Color follows the animation.
    Animated {
        text: String,
        text_style: TextFragment,
        container_style: TextContainerFragment,
    },
    /// Color comes from the theme and never changes.
    Static {
        text: String,
        text_style: TextFragment,
        container_style: TextContainerFragment,
    },
}

/// Everything needed to draw one frame, with caller overrides applied.
#[derive(Debug, Clone)]
pub struct Frame {
    pub container: ContainerFragment,
    pub image: ImageFragment,
    pub image_source: svg::Handle,
    pub label: Option<LabelNode>,
}

/// Builds the frame for the given activation flag, scalar and bounce scale.
#[must_use]
pub fn frame(options: &Options, is_active: bool, activation: Activation, scale: f32) -> Frame {
    let visuals = derive(&options.colors, activation, options.same_text_color);

    let mut container = style::container(visuals.background, scale);
    if let Some(adjust) = &options.style {
        container = adjust(container);
    }

    let mut image = style::image(visuals.tint, scale);
    if let Some(adjust) = &options.image_style {
        image = adjust(image);
    }

    let image_source = if is_active {
        options.active_image.clone()
    } else {
        options.inactive_image.clone()
    };

    Frame {
        container,
        image,
        image_source,
        label: label(options, visuals.text),
    }
}

fn label(options: &Options, animated_color: Option<Color>) -> Option<LabelNode> {
    if options.disable_text {
        return None;
    }
    let text = options.text.clone().unwrap_or_default();

    let mut text_style = style::text(animated_color);
    if let Some(adjust) = &options.text_style {
        text_style = adjust(text_style);
    }
    if let Some(color) = animated_color {
        // The animated color wins over any caller override.
        text_style.color = Some(color);
    }

    let mut container_style = style::text_container();
    if let Some(adjust) = &options.text_container_style {
        container_style = adjust(container_style);
    }

    Some(if animated_color.is_some() {
        LabelNode::Animated {
            text,
            text_style,
            container_style,
        }
    } else {
        LabelNode::Static {
            text,
            text_style,
            container_style,
        }
    })
}

/// Interaction hooks wired onto the bounce region.
#[derive(Debug, Clone)]
pub struct Hooks<Message> {
    pub press_in: Message,
    pub press_out: Message,
    pub cancel: Message,
}

/// Composes the element tree for one frame.
///
/// `hooks` is `None` for a disabled switch, which then ignores the pointer.
pub fn compose<'a, Message: Clone + 'a>(
    frame: Frame,
    hooks: Option<Hooks<Message>>,
) -> Element<'a, Message> {
    let icon_size = frame.image.scaled_size();
    let icon = Svg::new(frame.image_source)
        .width(Length::Fixed(icon_size))
        .height(Length::Fixed(icon_size))
        .style(style::image_style(frame.image));

    let region_size = frame.container.scaled_size();
    let region = Container::new(icon)
        .width(Length::Fixed(region_size))
        .height(Length::Fixed(region_size))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(style::container_style(frame.container));

    // Reserve the resting size so the bounce does not shift the layout.
    let slot = Container::new(region)
        .width(Length::Fixed(frame.container.size))
        .height(Length::Fixed(frame.container.size))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let bounceable: Element<'a, Message> = match hooks {
        Some(hooks) => mouse_area(slot)
            .on_press(hooks.press_in)
            .on_release(hooks.press_out)
            .on_exit(hooks.cancel)
            .interaction(mouse::Interaction::Pointer)
            .into(),
        None => slot.into(),
    };

    let mut row = Row::new().push(bounceable).align_y(Alignment::Center);

    if let Some(label) = frame.label {
        row = row.push(compose_label(label));
    }

    row.into()
}

fn compose_label<'a, Message: 'a>(label: LabelNode) -> Element<'a, Message> {
    let (text, text_style, container_style) = match label {
        LabelNode::Animated {
            text,
            text_style,
            container_style,
        }
        | LabelNode::Static {
            text,
            text_style,
            container_style,
        } => (text, text_style, container_style),
    };

    let content = Text::new(text)
        .size(text_style.size)
        .style(style::text_style(text_style));

    Container::new(content)
        .padding(iced::Padding {
            left: container_style.padding_left,
            ..iced::Padding::ZERO
        })
        .style(style::text_container_style(container_style))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> ColorConfiguration {
        ColorConfiguration {
            main: color::parse_hex("#111111").unwrap(),
            original: color::parse_hex("#fff").unwrap(),
            tint: color::parse_hex("#f1bb7b").unwrap(),
        }
    }

    #[test]
    fn background_runs_from_original_to_main() {
        let colors = colors();
        let start = derive(&colors, Activation::INACTIVE, false);
        let end = derive(&colors, Activation::ACTIVE, false);
        assert_eq!(color::to_hex(start.background), "#ffffff");
        assert_eq!(color::to_hex(end.background), "#111111");
    }

    #[test]
    fn tint_runs_from_tint_to_original() {
        let colors = colors();
        assert_eq!(derive(&colors, Activation::INACTIVE, false).tint, colors.tint);
        assert_eq!(derive(&colors, Activation::ACTIVE, false).tint, colors.original);
    }

    #[test]
    fn text_color_only_with_same_text_color() {
        let colors = colors();
        assert_eq!(derive(&colors, Activation::new(0.3), false).text, None);

        let half = derive(&colors, Activation::new(0.5), true);
        assert_eq!(half.text, Some(color::lerp(colors.tint, colors.main, 0.5)));
    }

    #[test]
    fn disable_text_removes_label() {
        let options = Options::new().text("Hidden").disable_text(true);
        let frame = frame(&options, false, Activation::INACTIVE, 1.0);
        assert!(frame.label.is_none());
    }

    #[test]
    fn static_label_ignores_scalar() {
        let options = Options::new().text("Wi-Fi");
        let first = frame(&options, false, Activation::INACTIVE, 1.0);
        let second = frame(&options, true, Activation::new(0.7), 1.0);
        assert_eq!(first.label, second.label);
        assert!(matches!(first.label, Some(LabelNode::Static { .. })));
    }

    #[test]
    fn animated_label_tracks_scalar() {
        let options = Options::new().text("Wi-Fi").same_text_color(true);
        let frame = frame(&options, false, Activation::ACTIVE, 1.0);
        match frame.label {
            Some(LabelNode::Animated { text_style, .. }) => {
                assert_eq!(text_style.color, Some(options.colors.main));
            }
            other => panic!("expected animated label, got {other:?}"),
        }
    }

    #[test]
    fn image_swaps_on_flag_not_on_scalar() {
        let options = Options::new();
        let active = frame(&options, true, Activation::INACTIVE, 1.0);
        let inactive = frame(&options, false, Activation::ACTIVE, 1.0);
        assert_eq!(active.image_source.id(), options.active_image.id());
        assert_eq!(inactive.image_source.id(), options.inactive_image.id());
    }

    #[test]
    fn overrides_apply_after_computed_styles() {
        let options = Options::new()
            .text("Label")
            .style(|mut fragment| {
                fragment.radius = 4.0;
                fragment
            })
            .image_style(|mut fragment| {
                fragment.size = 12.0;
                fragment
            })
            .text_style(|mut fragment| {
                fragment.size = 20.0;
                fragment
            })
            .text_container_style(|mut fragment| {
                fragment.padding_left = 0.0;
                fragment
            });

        let frame = frame(&options, false, Activation::INACTIVE, 1.0);
        assert_eq!(frame.container.radius, 4.0);
        assert_eq!(frame.container.background, Color::WHITE);
        assert_eq!(frame.image.size, 12.0);
        assert_eq!(frame.image.tint, options.colors.tint);
        match frame.label {
            Some(LabelNode::Static {
                text_style,
                container_style,
                ..
            }) => {
                assert_eq!(text_style.size, 20.0);
                assert_eq!(container_style.padding_left, 0.0);
            }
            other => panic!("expected static label, got {other:?}"),
        }
    }
}
