// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Style for a gallery tile.
///
/// Selection is visual only here; whether a tile is selected is derived from
/// the selection set, so there is no per-tile flag to keep in sync. Selected
/// tiles get an accent border, unselected ones a thin neutral frame.
pub fn tile(selected: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: if selected {
            Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                color: palette::GRAY_700,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            }
        },
        ..Default::default()
    }
}

/// Semi-transparent scrim drawn over a selected tile.
#[must_use]
pub fn tile_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        })),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Fullscreen scrim shown while a deletion is in flight.
#[must_use]
pub fn busy_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Generic panel surface for the control rows under the gallery.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_tile_gets_accent_border() {
        let theme = Theme::Dark;
        let style = tile(true)(&theme);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn unselected_tile_gets_neutral_border() {
        let theme = Theme::Dark;
        let style = tile(false)(&theme);
        assert_eq!(style.border.color, palette::GRAY_700);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }
}
