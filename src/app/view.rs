// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.

use super::{App, Entry, Message};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::{
    widget::{button, container, text, Column, Container, Row, Space, Text},
    Alignment, Border, Element, Length,
};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut switches = Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Switch buttons").size(typography::TITLE_MD));

        if let Some(warning) = &self.config_warning {
            switches = switches.push(
                Text::new(warning.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );
        }

        for (index, entry) in self.entries.iter().enumerate() {
            switches = switches.push(view_entry(index, entry));
        }

        let content = Row::new()
            .spacing(spacing::LG)
            .push(Container::new(switches).width(Length::Fill))
            .push(self.view_log());

        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_log(&self) -> Element<'_, Message> {
        let header = Row::new()
            .align_y(Alignment::Center)
            .push(Text::new("Callbacks").size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(button(text("Clear").size(typography::CAPTION)).on_press(Message::ClearLog));

        let lines = self.log().fold(Column::new().spacing(spacing::XXS), |column, line| {
            column.push(
                Text::new(line)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_900),
            )
        });

        let column = Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(lines);

        Container::new(column)
            .width(Length::Fixed(sizing::LOG_WIDTH))
            .height(Length::Fill)
            .padding(spacing::SM)
            .style(|_theme| container::Style {
                background: Some(palette::GRAY_100.into()),
                border: Border {
                    radius: radius::MD.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
            .into()
    }
}

fn view_entry(index: usize, entry: &Entry) -> Element<'_, Message> {
    let switch = entry
        .switch
        .view()
        .map(move |message| Message::Switch(index, message));

    let host = Text::new(format!("host: {}", if entry.host_active { "on" } else { "off" }))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(entry.title.as_str()).size(typography::CAPTION))
        .push(switch);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(Container::new(details).width(Length::Fill))
        .push(host)
        .push(
            button(text("Toggle from host").size(typography::CAPTION))
                .on_press(Message::ToggleFromHost(index)),
        )
        .into()
}
