// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::notifications;
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Completion variants carry the
/// backend's answer so the update loop mutates whatever the state is when the
/// answer arrives, never a stale snapshot captured at dispatch time.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the gallery listing request.
    GalleryLoaded(Result<Vec<String>, Error>),
    /// A gallery tile was clicked.
    TileToggled(String),
    /// Result of one thumbnail fetch.
    ThumbnailFetched {
        identifier: String,
        result: Result<Handle, Error>,
    },
    /// The refresh button was pressed.
    RefreshPressed,
    /// The delete button was pressed.
    DeletePressed,
    /// Result of the deletion request.
    DeleteCompleted(Result<Vec<String>, Error>),
    /// Open the file dialog to pick an image for upload.
    ChooseUploadFile,
    /// Result from the upload file dialog.
    UploadFileChosen(Option<PathBuf>),
    /// The upload button was pressed.
    UploadPressed,
    /// Result of the upload request.
    UploadCompleted(Result<String, Error>),
    /// The brightness slider moved during a drag.
    BrightnessChanged(u8),
    /// The brightness slider was released.
    BrightnessReleased,
    /// Result of the brightness request.
    BrightnessCommitted(Result<(), Error>),
    /// The power-on button was pressed.
    PowerOn,
    /// The power-off button was pressed.
    PowerOff,
    /// Result of a power request.
    PowerCompleted { on: bool, result: Result<(), Error> },
    /// Toast dismissal and housekeeping.
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional backend base address override, e.g. `http://192.168.1.20:5000`.
    /// Takes precedence over the config file.
    pub server: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FRAME_REMOTE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
