// SPDX-License-Identifier: MPL-2.0
//! Wire types for the photo-frame backend's JSON bodies.

use serde::{Deserialize, Serialize};

/// Response of `GET /images`.
///
/// A missing `images` field deserializes to an empty list; the caller treats
/// that the same as an empty gallery.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ImageList {
    #[serde(default)]
    pub images: Vec<String>,
}

/// Request body of `DELETE /delete_image`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeleteRequest {
    pub filenames: Vec<String>,
}

/// Response of `DELETE /delete_image`. Lists only the identifiers the backend
/// actually removed; anything absent here is still on the frame.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub deleted: Vec<String>,
}

/// Response of `POST /upload_image`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub filename: String,
}

/// Request body of `POST /set_brightness`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BrightnessRequest {
    pub brightness: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_list_parses_identifiers() {
        let list: ImageList = serde_json::from_str(r#"{"images":["a.jpg","b.jpg"]}"#).unwrap();
        assert_eq!(list.images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn image_list_missing_field_is_empty() {
        let list: ImageList = serde_json::from_str("{}").unwrap();
        assert!(list.images.is_empty());
    }

    #[test]
    fn image_list_rejects_non_string_entries() {
        let result = serde_json::from_str::<ImageList>(r#"{"images":[1,2]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn delete_request_serializes_filenames_field() {
        let body = DeleteRequest {
            filenames: vec!["a.jpg".to_string()],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"filenames":["a.jpg"]}"#);
    }

    #[test]
    fn delete_response_parses_confirmed_subset() {
        let response: DeleteResponse = serde_json::from_str(r#"{"deleted":["a.jpg"]}"#).unwrap();
        assert_eq!(response.deleted, vec!["a.jpg"]);
    }

    #[test]
    fn delete_response_requires_deleted_field() {
        assert!(serde_json::from_str::<DeleteResponse>("{}").is_err());
    }

    #[test]
    fn upload_response_parses_filename() {
        let response: UploadResponse = serde_json::from_str(r#"{"filename":"x.png"}"#).unwrap();
        assert_eq!(response.filename, "x.png");
    }

    #[test]
    fn brightness_request_serializes_value() {
        let body = BrightnessRequest { brightness: 80 };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"brightness":80}"#
        );
    }
}
