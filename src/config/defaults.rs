// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

/// Backend base address used when neither the config file nor the CLI
/// provides one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Number of tile columns in the gallery grid.
pub const DEFAULT_GALLERY_COLUMNS: usize = 4;

/// Edge length of a square gallery tile, in logical pixels.
pub const DEFAULT_TILE_SIZE: f32 = 160.0;

/// Brightness shown before the user touches the slider. The backend has no
/// read endpoint, so this is a starting point, not a mirror of device state.
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Slider increment for the brightness control.
pub const BRIGHTNESS_STEP: u8 = 5;

pub const MIN_BRIGHTNESS: u8 = 0;
pub const MAX_BRIGHTNESS: u8 = 100;
