// SPDX-License-Identifier: MPL-2.0
//! Update logic: message dispatch and backend side effects.
//!
//! Every backend call follows the same pattern: a `begin_*` transition on the
//! gallery state, a `Task::perform` that runs the request, and a completion
//! message that applies the answer. Failures are logged, surfaced as an error
//! toast, and leave the gallery state exactly as it was.

use super::message::Message;
use super::App;
use crate::api::FrameClient;
use crate::error::Error;
use crate::ui::notifications::Notification;
use iced::widget::image::Handle;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::GalleryLoaded(result) => handle_gallery_loaded(app, result),
        Message::TileToggled(identifier) => {
            app.gallery.toggle(&identifier);
            Task::none()
        }
        Message::ThumbnailFetched { identifier, result } => {
            handle_thumbnail_fetched(app, identifier, result)
        }
        Message::RefreshPressed => refresh_gallery(app),
        Message::DeletePressed => handle_delete_pressed(app),
        Message::DeleteCompleted(result) => handle_delete_completed(app, result),
        Message::ChooseUploadFile => pick_upload_file(),
        Message::UploadFileChosen(path) => {
            if path.is_some() {
                app.upload_file = path;
            }
            Task::none()
        }
        Message::UploadPressed => handle_upload_pressed(app),
        Message::UploadCompleted(result) => handle_upload_completed(app, result),
        Message::BrightnessChanged(value) => {
            app.brightness.drag(value);
            Task::none()
        }
        Message::BrightnessReleased => handle_brightness_released(app),
        Message::BrightnessCommitted(result) => {
            if let Err(error) = result {
                report_failure(app, "set brightness", &error);
            }
            Task::none()
        }
        Message::PowerOn => power_task(app, true),
        Message::PowerOff => power_task(app, false),
        Message::PowerCompleted { on, result } => handle_power_completed(app, on, result),
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

/// Kicks off a gallery listing request unless one is already in flight.
pub(super) fn refresh_gallery(app: &mut App) -> Task<Message> {
    if app.gallery.is_loading() {
        return Task::none();
    }
    app.gallery.set_loading();

    let client = Arc::clone(&app.client);
    Task::perform(
        async move { client.list_images().await },
        Message::GalleryLoaded,
    )
}

fn handle_gallery_loaded(app: &mut App, result: Result<Vec<String>, Error>) -> Task<Message> {
    match result {
        Ok(images) => {
            app.gallery.finish_load(images);

            // Drop thumbnails for identifiers no longer listed, then fetch
            // whatever is missing.
            let images = app.gallery.images().to_vec();
            app.thumbnails.retain(|id, _| images.contains(id));

            let fetches: Vec<Task<Message>> = images
                .into_iter()
                .filter(|id| !app.thumbnails.contains_key(id))
                .map(|id| fetch_thumbnail(Arc::clone(&app.client), id))
                .collect();
            Task::batch(fetches)
        }
        Err(error) => {
            app.gallery.fail_load();
            report_failure(app, "load gallery", &error);
            Task::none()
        }
    }
}

/// Fetches one image's bytes and wraps them in an Iced handle.
fn fetch_thumbnail(client: Arc<FrameClient>, identifier: String) -> Task<Message> {
    Task::perform(
        async move {
            let result = client
                .fetch_image(&identifier)
                .await
                .map(Handle::from_bytes);
            (identifier, result)
        },
        |(identifier, result)| Message::ThumbnailFetched { identifier, result },
    )
}

fn handle_thumbnail_fetched(
    app: &mut App,
    identifier: String,
    result: Result<Handle, Error>,
) -> Task<Message> {
    match result {
        Ok(handle) => {
            app.thumbnails.insert(identifier, handle);
        }
        Err(error) => {
            // The tile keeps its placeholder; no toast for individual
            // thumbnails, a dead backend would spam one per image.
            tracing::warn!(%identifier, %error, "thumbnail fetch failed");
        }
    }
    Task::none()
}

fn handle_delete_pressed(app: &mut App) -> Task<Message> {
    let Some(filenames) = app.gallery.begin_delete() else {
        return Task::none();
    };

    let client = Arc::clone(&app.client);
    Task::perform(
        async move { client.delete_images(filenames).await },
        Message::DeleteCompleted,
    )
}

fn handle_delete_completed(app: &mut App, result: Result<Vec<String>, Error>) -> Task<Message> {
    match result {
        Ok(deleted) => {
            app.gallery.finish_delete(&deleted);
            for identifier in &deleted {
                app.thumbnails.remove(identifier);
            }
            app.notifications.push(Notification::success(format!(
                "Deleted {} image(s)",
                deleted.len()
            )));
        }
        Err(error) => {
            app.gallery.fail_delete();
            report_failure(app, "delete images", &error);
        }
    }
    Task::none()
}

fn pick_upload_file() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Choose an image to upload")
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
                .pick_file()
                .await
                .map(|file| PathBuf::from(file.path()))
        },
        Message::UploadFileChosen,
    )
}

fn handle_upload_pressed(app: &mut App) -> Task<Message> {
    // No file picked yet: nothing to send, nothing changes.
    let Some(path) = app.upload_file.clone() else {
        return Task::none();
    };
    if !app.gallery.begin_upload() {
        return Task::none();
    }

    let client = Arc::clone(&app.client);
    Task::perform(
        async move { client.upload_image(path).await },
        Message::UploadCompleted,
    )
}

fn handle_upload_completed(app: &mut App, result: Result<String, Error>) -> Task<Message> {
    match result {
        Ok(filename) => {
            app.gallery.finish_upload(filename.clone());
            app.upload_file = None;
            app.notifications
                .push(Notification::success(format!("Uploaded {filename}")));

            // The stored identifier may differ from the local file name, so
            // always (re)fetch its thumbnail.
            fetch_thumbnail(Arc::clone(&app.client), filename)
        }
        Err(error) => {
            app.gallery.fail_upload();
            report_failure(app, "upload image", &error);
            Task::none()
        }
    }
}

fn handle_brightness_released(app: &mut App) -> Task<Message> {
    let value = app.brightness.release();
    let client = Arc::clone(&app.client);
    Task::perform(
        async move { client.set_brightness(value).await },
        Message::BrightnessCommitted,
    )
}

fn power_task(app: &mut App, on: bool) -> Task<Message> {
    let client = Arc::clone(&app.client);
    Task::perform(
        async move {
            let result = if on {
                client.turn_on().await
            } else {
                client.turn_off().await
            };
            (on, result)
        },
        |(on, result)| Message::PowerCompleted { on, result },
    )
}

fn handle_power_completed(app: &mut App, on: bool, result: Result<(), Error>) -> Task<Message> {
    match result {
        Ok(()) => {
            let state = if on { "on" } else { "off" };
            app.notifications
                .push(Notification::info(format!("Frame turned {state}")));
        }
        Err(error) => {
            let context = if on { "turn on frame" } else { "turn off frame" };
            report_failure(app, context, &error);
        }
    }
    Task::none()
}

/// Logs a failed backend call and surfaces it as an error toast.
fn report_failure(app: &mut App, context: &str, error: &Error) {
    tracing::error!(context, %error, "backend request failed");
    app.notifications
        .push(Notification::error(format!("Could not {context}: {error}")));
}
