use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::theme::{
    BG_MAIN, CARD_BG, INPUT_BG, INPUT_BORDER, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::client::gui::widgets::{alert, result_card};
use crate::client::models::app_state::AnalyzerState;
use crate::client::models::messages::Message;

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: INPUT_BORDER,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(state: &AnalyzerState) -> Element<Message> {
    let loading = state.loading;
    let submit_enabled = state.can_submit();

    // Header
    let title_row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new("🧠").font(EMOJI_FONT).size(36))
        .push(
            Text::new("Sentiment Analyzer")
                .size(38)
                .font(BOLD_FONT)
                .style(TEXT_PRIMARY),
        );

    let subtitle = Text::new("Enter your comment below and discover its emotional tone")
        .size(16)
        .style(TEXT_SECONDARY);

    // Input section
    let input_label = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("💬").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
        .push(Text::new("Your Comment").size(14).style(TEXT_SECONDARY));

    let mut comment_input = TextInput::new(
        "Type your comment here... (e.g., 'I love this new feature!')",
        &state.input_text,
    )
    .width(Length::Fill)
    .padding(12)
    .size(14);

    // No edits and no enter-to-submit while a request is in flight
    if !loading {
        comment_input = comment_input.on_input(Message::InputChanged).on_submit(
            if submit_enabled {
                Message::SubmitAnalysis
            } else {
                Message::None
            },
        );
    }

    let input_field = Column::new()
        .spacing(8)
        .push(input_label)
        .push(
            Container::new(comment_input)
                .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // Submit button: active only when there is text and no request in flight
    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("🚀").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new("Analyze Sentiment")
                            .font(BOLD_FONT)
                            .size(16)
                            .style(Color::WHITE),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitAnalysis)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(14)
    } else {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new(if loading { "Analyzing..." } else { "Analyze Sentiment" })
                            .size(16)
                            .style(TEXT_SECONDARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(14)
    };

    // Result and error slots (at most one is populated at a time)
    let result_element: Element<Message> = match &state.result {
        Some(label) => result_card::view(label),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let error_element: Element<Message> = match &state.error_message {
        Some(msg) => alert::view(msg),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let card_content = Column::new()
        .width(Length::Fixed(560.0))
        .spacing(20)
        .padding(32)
        .push(input_field)
        .push(submit_button)
        .push(result_element)
        .push(error_element);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let footer = Text::new("Powered by Cardiff NLP Twitter RoBERTa sentiment model")
        .size(13)
        .style(TEXT_SECONDARY);

    let page = Column::new()
        .spacing(24)
        .align_items(Alignment::Center)
        .push(Space::new(Length::Fill, Length::Fixed(24.0)))
        .push(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(title_row)
                .push(subtitle),
        )
        .push(card)
        .push(footer);

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
