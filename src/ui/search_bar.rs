//! Search section widget
//!
//! Label, query input, and the explicit search trigger.

use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding};

use super::theme::DarkTheme;

/// Search section: submitting the input and pressing the button both
/// fire `on_search`; `on_input` only edits the query.
pub fn search_section<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_search: Message,
) -> Element<'a, Message> {
    let label = text("Search Product:").size(14).color(DarkTheme::TEXT_MUTED);

    let input = text_input("Enter product name", value)
        .id(text_input::Id::new("search"))
        .on_input(on_input)
        .on_submit(on_search.clone())
        .padding(Padding::new(10.0))
        .size(16)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(DarkTheme::SURFACE),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });

    let trigger = button(text("Search").size(14))
        .on_press(on_search)
        .padding(Padding::from([10.0, 18.0]))
        .style(|_theme, _status| button::Style {
            background: Some(Background::Color(DarkTheme::PRIMARY)),
            text_color: Color::WHITE,
            border: Border::default().rounded(8),
            ..button::Style::default()
        });

    container(
        row![label, input, trigger]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .into()
}
