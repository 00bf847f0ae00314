// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the photo-frame backend.
//!
//! One async method per backend operation. Every method is independent and
//! best-effort: a failure maps into [`Error`] and leaves no client-side state
//! behind, and nothing here retries. The caller decides what (if anything) to
//! do with a failure.

pub mod types;

use crate::error::{Error, Result};
use std::path::PathBuf;
use types::{BrightnessRequest, DeleteRequest, DeleteResponse, ImageList, UploadResponse};

const USER_AGENT: &str = concat!("FrameRemote/", env!("CARGO_PKG_VERSION"));

/// Client for one configured backend origin.
///
/// Cheap to clone behind an `Arc`; the inner `reqwest::Client` pools
/// connections.
#[derive(Debug, Clone)]
pub struct FrameClient {
    base_url: String,
    http: reqwest::Client,
}

impl FrameClient {
    /// Creates a client for the given base address.
    ///
    /// Trailing slashes on `base_url` are stripped so path joining stays
    /// uniform.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Returns the configured backend base address.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the fetch URL for one image's bytes.
    #[must_use]
    pub fn image_url(&self, identifier: &str) -> String {
        format!("{}/images/{}", self.base_url, identifier)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /images` - lists the identifiers the frame currently holds.
    pub async fn list_images(&self) -> Result<Vec<String>> {
        let response = self.http.get(self.endpoint("/images")).send().await?;
        let response = check_status(response)?;
        let list: ImageList = response
            .json()
            .await
            .map_err(|e| Error::Api(e.to_string()))?;
        Ok(list.images)
    }

    /// `GET /images/{identifier}` - fetches one image's raw bytes.
    pub async fn fetch_image(&self, identifier: &str) -> Result<Vec<u8>> {
        let response = self.http.get(self.image_url(identifier)).send().await?;
        let response = check_status(response)?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// `DELETE /delete_image` - asks the backend to remove `filenames`.
    ///
    /// Returns the subset of identifiers the backend confirmed; the caller
    /// must keep anything unconfirmed.
    pub async fn delete_images(&self, filenames: Vec<String>) -> Result<Vec<String>> {
        let response = self
            .http
            .delete(self.endpoint("/delete_image"))
            .json(&DeleteRequest { filenames })
            .send()
            .await?;
        let response = check_status(response)?;
        let body: DeleteResponse = response
            .json()
            .await
            .map_err(|e| Error::Api(e.to_string()))?;
        Ok(body.deleted)
    }

    /// `POST /upload_image` - uploads the file at `path` as multipart form
    /// field `image`. Returns the identifier the backend stored it under.
    pub async fn upload_image(&self, path: PathBuf) -> Result<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let bytes = std::fs::read(&path)?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .http
            .post(self.endpoint("/upload_image"))
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response)?;
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| Error::Api(e.to_string()))?;
        Ok(body.filename)
    }

    /// `POST /set_brightness` - sends a committed brightness value.
    /// The response body is implementation-defined and ignored.
    pub async fn set_brightness(&self, brightness: u8) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("/set_brightness"))
            .json(&BrightnessRequest { brightness })
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// `POST /turn_on` - bodyless power-on request.
    pub async fn turn_on(&self) -> Result<()> {
        let response = self.http.post(self.endpoint("/turn_on")).send().await?;
        check_status(response)?;
        Ok(())
    }

    /// `POST /turn_off` - bodyless power-off request.
    pub async fn turn_off(&self) -> Result<()> {
        let response = self.http.post(self.endpoint("/turn_off")).send().await?;
        check_status(response)?;
        Ok(())
    }
}

/// Maps a non-2xx response to [`Error::Http`].
fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Http(format!("HTTP status: {}", status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let client = FrameClient::new("http://frame.local:5000/");
        assert_eq!(client.base_url(), "http://frame.local:5000");
    }

    #[test]
    fn image_url_appends_identifier_as_path_segment() {
        let client = FrameClient::new("http://frame.local:5000");
        assert_eq!(
            client.image_url("a.jpg"),
            "http://frame.local:5000/images/a.jpg"
        );
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = FrameClient::new("http://frame.local:5000");
        assert_eq!(
            client.endpoint("/set_brightness"),
            "http://frame.local:5000/set_brightness"
        );
    }

    #[tokio::test]
    async fn upload_image_with_missing_file_is_io_error() {
        let client = FrameClient::new("http://frame.local:5000");
        let result = client
            .upload_image(PathBuf::from("/nonexistent/image.png"))
            .await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
