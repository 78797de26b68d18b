// Result card: emoji + capitalized label, tinted per sentiment
use iced::widget::{Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::theme::sentiment_style;
use crate::client::models::messages::Message;

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn view(label: &str) -> Element<'_, Message> {
    let style = sentiment_style(label);

    let card_appearance = move |_: &iced::Theme| iced::widget::container::Appearance {
        background: Some(iced::Background::Color(style.background)),
        text_color: Some(style.text),
        border: iced::Border {
            width: 2.0,
            color: style.border,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    };

    let headline = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new(style.emoji).font(EMOJI_FONT).size(36))
        .push(
            Column::new()
                .spacing(2)
                .push(
                    Text::new(capitalize(label))
                        .font(BOLD_FONT)
                        .size(26)
                        .style(style.text),
                )
                .push(Text::new("Sentiment detected").size(13).style(style.text)),
        );

    Container::new(
        Column::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(headline)
            .push(
                Text::new(format!(
                    "Your comment has been classified as {} sentiment.",
                    label.to_lowercase()
                ))
                .size(14)
                .style(style.text),
            ),
    )
    .width(Length::Fill)
    .padding(24)
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}
