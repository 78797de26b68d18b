// Alert bar for user-visible errors
use iced::widget::{Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::theme::{ERROR_BG, ERROR_BORDER, ERROR_TEXT};
use crate::client::models::messages::Message;

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn alert_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ERROR_BG)),
        text_color: Some(ERROR_TEXT),
        border: iced::Border {
            width: 1.0,
            color: ERROR_BORDER,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(msg: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("⚠️").font(EMOJI_FONT).size(16))
            .push(Text::new(msg).size(14).style(ERROR_TEXT)),
    )
    .width(Length::Fill)
    .padding(12)
    .style(iced::theme::Container::Custom(Box::new(alert_appearance)))
    .into()
}
