//! Product card widget
//!
//! One rendered catalog entry: image (or placeholder glyph) next to the
//! product details.

use iced::widget::{column, container, image, row, text};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;
use crate::catalog::types::Product;

/// Render one product. `handle` is the cached image if its fetch has
/// resolved; otherwise the card shows a placeholder glyph.
pub fn product_card<'a, Message: 'a>(
    product: &'a Product,
    handle: Option<&image::Handle>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => container(image(handle.clone()).width(56).height(56))
            .width(72)
            .center_x(72)
            .into(),
        None => container(text("◻").size(32).color(DarkTheme::TEXT_MUTED))
            .width(72)
            .center_x(72)
            .into(),
    };

    let details = column![
        detail("ID:", product.id.to_string()),
        detail("Name:", product.name.clone()),
        detail("Price:", format!("${}", product.price)),
        detail("Category:", product.category.clone()),
    ]
    .spacing(4);

    container(
        row![picture, details]
            .spacing(14)
            .align_y(Alignment::Center),
    )
    .padding(Padding::from([12.0, 14.0]))
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Color(DarkTheme::SURFACE)),
        border: Border {
            color: DarkTheme::BORDER,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    })
    .into()
}

fn detail<'a, Message: 'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(12).color(DarkTheme::TEXT_MUTED).width(70),
        text(value).size(13).color(DarkTheme::TEXT),
    ]
    .spacing(6)
    .into()
}
