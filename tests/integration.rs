// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests over the library crate: a full gallery session at the
//! state-machine level, plus configuration persistence.

use frame_remote::api::FrameClient;
use frame_remote::config::{self, BrightnessConfig, Config, GalleryConfig, ServerConfig};
use frame_remote::gallery::brightness::Brightness;
use frame_remote::gallery::Gallery;
use tempfile::tempdir;

#[test]
fn full_session_against_a_cooperative_backend() {
    let mut gallery = Gallery::new();
    let mut brightness = Brightness::new(50);

    // Startup: listing request goes out, answer arrives.
    gallery.set_loading();
    gallery.finish_load(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()]);
    assert_eq!(gallery.images().len(), 3);

    // The user picks two images and deletes them; the backend confirms both.
    gallery.toggle("a.jpg");
    gallery.toggle("c.jpg");
    let filenames = gallery.begin_delete().expect("two images are selected");
    assert_eq!(filenames, ["a.jpg", "c.jpg"]);
    gallery.finish_delete(&filenames);
    assert_eq!(gallery.images(), ["b.jpg"]);
    assert!(!gallery.has_selection());

    // An upload follows; the backend reports the stored identifier.
    assert!(gallery.begin_upload());
    gallery.finish_upload("d.png".into());
    assert_eq!(gallery.images(), ["b.jpg", "d.png"]);

    // Brightness is dragged across several stops but committed once.
    brightness.drag(55);
    brightness.drag(60);
    brightness.drag(65);
    assert_eq!(brightness.committed(), 50);
    assert_eq!(brightness.release(), 65);
    assert_eq!(brightness.committed(), 65);
}

#[test]
fn partial_delete_confirmation_keeps_unconfirmed_images() {
    let mut gallery = Gallery::new();
    gallery.finish_load(vec!["a.jpg".into(), "b.jpg".into()]);
    gallery.toggle("a.jpg");
    gallery.toggle("b.jpg");

    gallery.begin_delete().expect("selection is non-empty");
    // The backend only managed to remove one of the two.
    gallery.finish_delete(&["b.jpg".to_string()]);

    assert_eq!(gallery.images(), ["a.jpg"]);
    assert!(gallery.is_selected("a.jpg"));
}

#[test]
fn refresh_after_external_changes_prunes_selection() {
    let mut gallery = Gallery::new();
    gallery.finish_load(vec!["a.jpg".into(), "b.jpg".into()]);
    gallery.toggle("a.jpg");
    gallery.toggle("b.jpg");

    // Another client removed a.jpg in the meantime.
    gallery.set_loading();
    gallery.finish_load(vec!["b.jpg".into(), "new.jpg".into()]);

    assert!(!gallery.is_selected("a.jpg"));
    assert!(gallery.is_selected("b.jpg"));
}

#[test]
fn configured_base_url_flows_into_request_urls() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        server: ServerConfig {
            base_url: Some("http://192.168.1.20:5000".to_string()),
        },
        gallery: GalleryConfig::default(),
        brightness: BrightnessConfig { initial: Some(70) },
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let base_url = loaded.server.base_url.expect("base_url was saved");

    let client = FrameClient::new(base_url);
    assert_eq!(
        client.image_url("photo.jpg"),
        "http://192.168.1.20:5000/images/photo.jpg"
    );

    let brightness = Brightness::new(loaded.brightness.initial.unwrap_or(50));
    assert_eq!(brightness.committed(), 70);

    dir.close().expect("Failed to close temporary directory");
}
