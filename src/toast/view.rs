// SPDX-License-Identifier: MPL-2.0
//! Toast widgets.
//!
//! Toasts render as small cards with a status-colored accent border and a
//! dismiss button. Each card is wrapped in a sensor so its real size flows
//! back to the provider's [`Layout`](super::stacking::Layout) as a
//! [`Message::Measured`].

use super::provider::Message;
use super::request::{ContainerStyle, Position, TextStyle, Toast};
use crate::ui::design_tokens::{
    border, opacity as tokens, palette, radius, shadow, spacing, typography,
};
use iced::widget::{button, container, sensor, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Duration;

/// Opacity of a toast `age` into its `duration`.
///
/// Fades in over the first `fade` and out over the last `fade`, so the exit
/// animation ends as the suspension timer fires. Toasts shorter than two
/// fades split their lifetime evenly between the two ramps.
#[must_use]
pub fn opacity(age: Duration, duration: Duration, fade: Duration) -> f32 {
    let fade = fade.min(duration / 2);
    if fade.is_zero() {
        return tokens::OPAQUE;
    }

    let fade_secs = fade.as_secs_f32();
    let fade_in = age.as_secs_f32() / fade_secs;
    let fade_out = duration.saturating_sub(age).as_secs_f32() / fade_secs;
    fade_in.min(fade_out).clamp(tokens::TRANSPARENT, tokens::OPAQUE)
}

/// Renders a plain-text toast body.
pub fn message_text<'a>(message: &'a str, style: &TextStyle, alpha: f32) -> Element<'a, Message> {
    let color = style.color;
    Text::new(message)
        .size(style.size.unwrap_or(typography::BODY))
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(color.unwrap_or(theme.palette().text), alpha)),
        })
        .into()
}

/// Renders one toast card around an already-resolved body.
pub fn toast<'a>(
    toast: &Toast,
    body: Element<'a, Message>,
    alpha: f32,
    width: f32,
) -> Element<'a, Message> {
    let id = toast.id();
    let accent = toast.status().color();
    let overrides = toast.style().container;

    let dismiss_button = button(Text::new("×").size(typography::BODY))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [body] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    let card = Container::new(content)
        .width(Length::Fixed(width))
        .padding(overrides.padding.unwrap_or(spacing::SM))
        .style(move |theme: &Theme| toast_container_style(theme, accent, &overrides, alpha));

    sensor(card)
        .on_show(move |size| Message::Measured(id, size))
        .on_resize(move |size| Message::Measured(id, size))
        .into()
}

/// Places a toast card `distance` pixels away from its screen edge.
pub fn anchored<'a>(
    unit: Element<'a, Message>,
    position: Position,
    distance: f32,
) -> Element<'a, Message> {
    let (vertical, padding) = match position {
        Position::Top => (
            alignment::Vertical::Top,
            Padding {
                top: distance,
                ..Padding::ZERO
            },
        ),
        Position::Bottom => (
            alignment::Vertical::Bottom,
            Padding {
                bottom: distance,
                ..Padding::ZERO
            },
        ),
    };

    Container::new(unit)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(vertical)
        .padding(padding)
        .into()
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(
    theme: &Theme,
    accent: Color,
    overrides: &ContainerStyle,
    alpha: f32,
) -> container::Style {
    let background = overrides.background.unwrap_or(Color {
        a: tokens::SURFACE,
        ..theme.extended_palette().background.base.color
    });

    container::Style {
        background: Some(iced::Background::Color(faded(background, alpha))),
        border: iced::Border {
            color: faded(overrides.border_color.unwrap_or(accent), alpha),
            width: border::WIDTH_MD,
            radius: overrides.border_radius.unwrap_or(radius::MD).into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, alpha * tokens::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let highlight = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => highlight(tokens::OVERLAY_SUBTLE),
        button::Status::Pressed => highlight(tokens::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: faded(base.text, tokens::OVERLAY_MEDIUM),
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
