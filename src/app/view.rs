// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::{Message, Progress};
use crate::toast::{self, Content, Position, Provider, Status};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, progress_bar, stack, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Duration;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a Provider,
    pub position: Position,
    pub service_running: bool,
    pub default_duration: Duration,
}

/// Renders the controls with the toast overlay layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay = ctx.toasts.view(&render_content).map(Message::Toast);
    stack![controls(&ctx), overlay].into()
}

fn controls<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let statuses = [
        (Status::Default, "Default"),
        (Status::Success, "Success"),
        (Status::Info, "Info"),
        (Status::Warning, "Warning"),
        (Status::Error, "Error"),
    ];
    let status_row = statuses
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (status, label)| {
            row.push(button(Text::new(label)).on_press(Message::ShowStatus(status)))
        });

    let position_row = [(Position::Top, "Top"), (Position::Bottom, "Bottom")]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (position, label)| {
            let selected = ctx.position == position;
            let style: fn(&Theme, button::Status) -> button::Style = if selected {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                button(Text::new(label))
                    .style(style)
                    .on_press(Message::SelectPosition(position)),
            )
        });

    let service_label = if ctx.service_running {
        "Stop background service"
    } else {
        "Start background service"
    };

    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Toast demo").size(typography::TITLE_MD))
        .push(status_row)
        .push(position_row)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(button(Text::new("Progress toast")).on_press(Message::ShowProgress))
                .push(button(Text::new("Dismiss all")).on_press(Message::DismissAll))
                .push(button(Text::new(service_label)).on_press(Message::ToggleService)),
        )
        .push(
            Text::new(format!(
                "Default duration: {} ms",
                ctx.default_duration.as_millis()
            ))
            .size(typography::CAPTION),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Renders the demo's custom toast payloads.
fn render_content<'a>(content: &Content) -> Element<'a, toast::Message> {
    match content.downcast_ref::<Progress>() {
        Some(progress) => Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(format!("{} ({:.0}%)", progress.label, progress.percent))
                    .size(typography::BODY),
            )
            .push(progress_bar(0.0..=100.0, progress.percent))
            .into(),
        None => Text::new("Unsupported content").size(typography::CAPTION).into(),
    }
}
