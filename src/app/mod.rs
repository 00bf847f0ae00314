// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the backend client, the gallery state, and
//! the notification manager, and translates messages into backend requests.
//! This file keeps policy decisions (window size, startup configuration, base
//! address precedence) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::FrameClient;
use crate::config;
use crate::gallery::brightness::Brightness;
use crate::gallery::Gallery;
use crate::ui::notifications;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state bridging the backend client and UI components.
pub struct App {
    /// Client for the configured backend.
    client: Arc<FrameClient>,
    /// Image list, selection set, and in-flight operation flags.
    gallery: Gallery,
    /// Brightness slider state (live vs. committed value).
    brightness: Brightness,
    /// Fetched thumbnails, keyed by image identifier.
    thumbnails: HashMap<String, Handle>,
    /// File picked for the next upload, if any.
    upload_file: Option<PathBuf>,
    /// Number of tile columns in the gallery grid.
    columns: usize,
    /// Edge length of a square gallery tile, in logical pixels.
    tile_size: f32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("base_url", &self.client.base_url())
            .field("images", &self.gallery.images().len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            client: Arc::new(FrameClient::new(config::DEFAULT_BASE_URL)),
            gallery: Gallery::new(),
            brightness: Brightness::default(),
            thumbnails: HashMap::new(),
            upload_file: None,
            columns: config::DEFAULT_GALLERY_COLUMNS,
            tile_size: config::DEFAULT_TILE_SIZE,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the config file, and
    /// kicks off the initial gallery listing.
    ///
    /// Base address precedence: CLI flag, then config file, then the built-in
    /// default.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(
            flags.config_dir.as_ref().map(PathBuf::from),
        );

        let base_url = flags
            .server
            .or(config.server.base_url)
            .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());

        let mut app = App {
            client: Arc::new(FrameClient::new(base_url)),
            brightness: Brightness::new(
                config.brightness.initial.unwrap_or(config::DEFAULT_BRIGHTNESS),
            ),
            columns: config
                .gallery
                .columns
                .filter(|columns| *columns > 0)
                .unwrap_or(config::DEFAULT_GALLERY_COLUMNS),
            tile_size: config
                .gallery
                .tile_size
                .filter(|size| *size > 0.0)
                .unwrap_or(config::DEFAULT_TILE_SIZE),
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        tracing::info!(base_url = app.client.base_url(), "starting up");

        let task = update::refresh_gallery(&mut app);
        (app, task)
    }

    fn title(&self) -> String {
        String::from("Frame Remote")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn loaded_app(images: &[&str]) -> App {
        let mut app = App::default();
        let _ = app.update(Message::GalleryLoaded(Ok(images
            .iter()
            .map(|s| s.to_string())
            .collect())));
        app
    }

    fn image_names(app: &App) -> Vec<&str> {
        app.gallery.images().iter().map(String::as_str).collect()
    }

    #[test]
    fn gallery_loaded_replaces_image_list() {
        let app = loaded_app(&["a.jpg", "b.jpg"]);
        assert_eq!(image_names(&app), ["a.jpg", "b.jpg"]);
        assert!(!app.gallery.is_loading());
    }

    #[test]
    fn gallery_load_failure_keeps_previous_list() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.update(Message::RefreshPressed);
        let _ = app.update(Message::GalleryLoaded(Err(Error::Http(
            "connection refused".into(),
        ))));

        assert_eq!(image_names(&app), ["a.jpg"]);
        assert!(!app.gallery.is_loading());
        assert!(app.notifications.has_notifications(), "failure shows a toast");
    }

    #[test]
    fn tile_toggle_is_a_symmetric_difference() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);

        let _ = app.update(Message::TileToggled("a.jpg".into()));
        let _ = app.update(Message::TileToggled("b.jpg".into()));
        let _ = app.update(Message::TileToggled("a.jpg".into()));

        assert!(!app.gallery.is_selected("a.jpg"));
        assert!(app.gallery.is_selected("b.jpg"));
    }

    #[test]
    fn delete_with_empty_selection_is_a_no_op() {
        let mut app = loaded_app(&["a.jpg"]);

        let _ = app.update(Message::DeletePressed);

        assert!(!app.gallery.is_deleting());
        assert_eq!(image_names(&app), ["a.jpg"]);
    }

    #[test]
    fn delete_completion_removes_only_confirmed_identifiers() {
        let mut app = loaded_app(&["a.jpg", "b.jpg", "c.jpg"]);
        let _ = app.update(Message::TileToggled("a.jpg".into()));
        let _ = app.update(Message::TileToggled("b.jpg".into()));
        let _ = app.update(Message::DeletePressed);
        assert!(app.gallery.is_deleting());

        let _ = app.update(Message::DeleteCompleted(Ok(vec!["a.jpg".into()])));

        assert_eq!(image_names(&app), ["b.jpg", "c.jpg"]);
        assert!(app.gallery.is_selected("b.jpg"), "unconfirmed stays selected");
        assert!(!app.gallery.is_deleting());
    }

    #[test]
    fn delete_failure_leaves_list_and_selection_unchanged() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);
        let _ = app.update(Message::TileToggled("a.jpg".into()));
        let _ = app.update(Message::DeletePressed);

        let _ = app.update(Message::DeleteCompleted(Err(Error::Http("500".into()))));

        assert_eq!(image_names(&app), ["a.jpg", "b.jpg"]);
        assert!(app.gallery.is_selected("a.jpg"));
        assert!(!app.gallery.is_deleting());
    }

    #[test]
    fn upload_without_chosen_file_is_a_no_op() {
        let mut app = loaded_app(&["a.jpg"]);

        let _ = app.update(Message::UploadPressed);

        assert!(!app.gallery.is_uploading());
        assert_eq!(image_names(&app), ["a.jpg"]);
    }

    #[test]
    fn upload_completion_appends_backend_identifier() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.update(Message::UploadFileChosen(Some(PathBuf::from(
            "/tmp/holiday.png",
        ))));
        let _ = app.update(Message::UploadPressed);
        assert!(app.gallery.is_uploading());

        let _ = app.update(Message::UploadCompleted(Ok("holiday.png".into())));

        assert_eq!(image_names(&app), ["a.jpg", "holiday.png"]);
        assert!(app.upload_file.is_none(), "chosen file is consumed");
        assert!(!app.gallery.is_uploading());
    }

    #[test]
    fn duplicate_upload_identifier_is_appended_verbatim() {
        let mut app = loaded_app(&["a.jpg"]);
        let _ = app.update(Message::UploadFileChosen(Some(PathBuf::from("/tmp/a.jpg"))));
        let _ = app.update(Message::UploadPressed);
        let _ = app.update(Message::UploadCompleted(Ok("a.jpg".into())));

        assert_eq!(image_names(&app), ["a.jpg", "a.jpg"]);
    }

    #[test]
    fn dialog_cancel_keeps_previous_choice() {
        let mut app = App::default();
        let _ = app.update(Message::UploadFileChosen(Some(PathBuf::from("/tmp/x.png"))));
        let _ = app.update(Message::UploadFileChosen(None));

        assert_eq!(app.upload_file, Some(PathBuf::from("/tmp/x.png")));
    }

    #[test]
    fn brightness_drag_does_not_commit() {
        let mut app = App::default();

        let _ = app.update(Message::BrightnessChanged(55));
        let _ = app.update(Message::BrightnessChanged(70));

        assert_eq!(app.brightness.live(), 70);
        assert_eq!(app.brightness.committed(), config::DEFAULT_BRIGHTNESS);
    }

    #[test]
    fn brightness_release_commits_final_value() {
        let mut app = App::default();

        let _ = app.update(Message::BrightnessChanged(80));
        let _ = app.update(Message::BrightnessReleased);

        assert_eq!(app.brightness.committed(), 80);
    }

    #[test]
    fn thumbnail_fetch_failure_keeps_placeholder() {
        let mut app = loaded_app(&["a.jpg"]);

        let _ = app.update(Message::ThumbnailFetched {
            identifier: "a.jpg".into(),
            result: Err(Error::Http("404".into())),
        });

        assert!(app.thumbnails.is_empty());
        assert!(
            !app.notifications.has_notifications(),
            "thumbnail failures do not toast"
        );
    }

    #[test]
    fn power_failure_surfaces_a_toast() {
        let mut app = App::default();

        let _ = app.update(Message::PowerCompleted {
            on: true,
            result: Err(Error::Http("timeout".into())),
        });

        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn end_to_end_session_state_transitions() {
        let mut app = App::default();

        // Initial listing arrives.
        let _ = app.update(Message::GalleryLoaded(Ok(vec![
            "a.jpg".into(),
            "b.jpg".into(),
            "c.jpg".into(),
        ])));

        // Select two images and delete them; backend confirms both.
        let _ = app.update(Message::TileToggled("a.jpg".into()));
        let _ = app.update(Message::TileToggled("c.jpg".into()));
        let _ = app.update(Message::DeletePressed);
        let _ = app.update(Message::DeleteCompleted(Ok(vec![
            "a.jpg".into(),
            "c.jpg".into(),
        ])));
        assert_eq!(image_names(&app), ["b.jpg"]);
        assert!(!app.gallery.has_selection());

        // Upload a new image.
        let _ = app.update(Message::UploadFileChosen(Some(PathBuf::from("/tmp/d.png"))));
        let _ = app.update(Message::UploadPressed);
        let _ = app.update(Message::UploadCompleted(Ok("d.png".into())));
        assert_eq!(image_names(&app), ["b.jpg", "d.png"]);

        // Adjust brightness and release once.
        let _ = app.update(Message::BrightnessChanged(65));
        let _ = app.update(Message::BrightnessReleased);
        assert_eq!(app.brightness.committed(), 65);
    }
}
