// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The layout is a single screen: the gallery grid on top, the control rows
//! (delete, upload, brightness, power) underneath, with the busy scrim and the
//! toast overlay stacked on top of everything.

use super::{App, Message};
use crate::config::{BRIGHTNESS_STEP, MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::styles;
use crate::ui::tile;
use iced::widget::{button, scrollable, slider, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Font, Length};

/// Renders the application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(header(app))
        .push(gallery(app))
        .push(controls(app));

    let mut layers = Stack::new().push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if app.gallery.is_deleting() {
        layers = layers.push(busy_overlay());
    }

    layers = layers.push(Toast::view_overlay(&app.notifications).map(Message::Notification));

    layers.into()
}

fn header(app: &App) -> Element<'_, Message> {
    let title = Text::new("Photo Frame").size(typography::TITLE_MD);

    let refresh = button(text("Refresh").size(typography::BODY))
        .on_press_maybe((!app.gallery.is_loading()).then_some(Message::RefreshPressed))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(refresh)
        .into()
}

fn gallery(app: &App) -> Element<'_, Message> {
    if app.gallery.is_loading() && app.gallery.images().is_empty() {
        return centered_label("Loading images…");
    }
    if app.gallery.images().is_empty() {
        return centered_label("No images found.");
    }

    let mut grid = Column::new().spacing(spacing::SM);
    for chunk in app.gallery.images().chunks(app.columns) {
        let mut row = Row::new().spacing(spacing::SM);
        for identifier in chunk {
            row = row.push(tile::view(
                identifier,
                app.thumbnails.get(identifier),
                app.gallery.is_selected(identifier),
                app.tile_size,
                Message::TileToggled,
            ));
        }
        grid = grid.push(row);
    }

    scrollable(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn centered_label(label: &str) -> Element<'_, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn controls(app: &App) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(delete_row(app))
        .push(upload_row(app))
        .push(brightness_row(app))
        .push(power_row());

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn delete_row(app: &App) -> Element<'_, Message> {
    let can_delete = app.gallery.has_selection() && !app.gallery.is_deleting();
    let label = if app.gallery.has_selection() {
        format!("Delete selected ({})", app.gallery.selection_len())
    } else {
        "Delete selected".to_string()
    };

    button(text(label).size(typography::BODY))
        .on_press_maybe(can_delete.then_some(Message::DeletePressed))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::danger)
        .into()
}

fn upload_row(app: &App) -> Element<'_, Message> {
    let choose = button(text("Choose image…").size(typography::BODY))
        .on_press(Message::ChooseUploadFile)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    let chosen_label = app
        .upload_file
        .as_deref()
        .and_then(|path| path.file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("No file chosen");

    let can_upload = app.upload_file.is_some() && !app.gallery.is_uploading();
    let upload_label = if app.gallery.is_uploading() {
        "Uploading…"
    } else {
        "Upload"
    };
    let upload = button(text(upload_label).size(typography::BODY))
        .on_press_maybe(can_upload.then_some(Message::UploadPressed))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(choose)
        .push(
            Container::new(Text::new(chosen_label).size(typography::CAPTION))
                .width(Length::Fill),
        )
        .push(upload)
        .into()
}

fn brightness_row(app: &App) -> Element<'_, Message> {
    let value = app.brightness.live();

    let slider_widget = slider(
        MIN_BRIGHTNESS..=MAX_BRIGHTNESS,
        value,
        Message::BrightnessChanged,
    )
    .step(BRIGHTNESS_STEP)
    .on_release(Message::BrightnessReleased)
    .width(Length::Fixed(sizing::SLIDER_WIDTH));

    let percent = Text::new(format!("{value}%"))
        .size(typography::BODY_LG)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Brightness").size(typography::BODY))
        .push(slider_widget)
        .push(percent)
        .into()
}

fn power_row() -> Element<'static, Message> {
    let turn_on = button(text("Turn on").size(typography::BODY))
        .on_press(Message::PowerOn)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    let turn_off = button(text("Turn off").size(typography::BODY))
        .on_press(Message::PowerOff)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .push(turn_on)
        .push(turn_off)
        .into()
}

fn busy_overlay() -> Element<'static, Message> {
    Container::new(Text::new("Deleting…").size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::busy_overlay)
        .into()
}
