// SPDX-License-Identifier: MPL-2.0
//! Gallery tile: one image thumbnail with a selection highlight.
//!
//! A tile renders whatever thumbnail bytes have arrived so far, or a labeled
//! placeholder while the fetch is pending. Whether the tile is highlighted is
//! derived from the selection set at render time, so there is no per-tile
//! selected flag to keep in sync.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, text, Container, Stack};
use iced::{alignment, ContentFit, Element, Length};

/// Renders one gallery tile.
///
/// `on_press` is emitted with the image identifier when the tile is clicked;
/// the caller maps it to a selection toggle.
pub fn view<'a, Message: Clone + 'a>(
    identifier: &'a str,
    thumbnail: Option<&'a Handle>,
    selected: bool,
    tile_size: f32,
    on_press: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(tile_size))
            .height(Length::Fixed(tile_size))
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(identifier, tile_size),
    };

    let content: Element<'a, Message> = if selected {
        Stack::new()
            .push(content)
            .push(
                Container::new(text("✓").size(typography::TITLE_MD))
                    .width(Length::Fixed(tile_size))
                    .height(Length::Fixed(tile_size))
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Top)
                    .padding(spacing::XXS)
                    .style(styles::container::tile_scrim),
            )
            .into()
    } else {
        content
    };

    let framed = Container::new(content)
        .width(Length::Fixed(tile_size))
        .height(Length::Fixed(tile_size))
        .clip(true)
        .style(styles::container::tile(selected));

    mouse_area(framed)
        .on_press(on_press(identifier.to_string()))
        .into()
}

/// Placeholder shown while a thumbnail has not arrived (or failed to).
fn placeholder<'a, Message: 'a>(identifier: &'a str, tile_size: f32) -> Element<'a, Message> {
    Container::new(
        text(identifier)
            .size(typography::CAPTION)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(tile_size))
    .height(Length::Fixed(tile_size))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .padding(spacing::XS)
    .style(container::transparent)
    .into()
}
