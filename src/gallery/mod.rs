// SPDX-License-Identifier: MPL-2.0
//! Gallery state: the known image list, the selection set, and the flags
//! tracking in-flight backend operations.
//!
//! This module is pure state. Network calls live in [`crate::api`]; the
//! application layer calls `begin_*` before dispatching a request and
//! `finish_*`/`fail_*` when its completion arrives. A failed operation always
//! leaves the list and the selection exactly as they were.

pub mod brightness;

use std::collections::HashSet;

/// The image list and selection set, plus in-flight operation flags.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    images: Vec<String>,
    selected: HashSet<String>,
    loading: bool,
    deleting: bool,
    uploading: bool,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Known image identifiers, in backend order.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub fn is_selected(&self, identifier: &str) -> bool {
        self.selected.contains(identifier)
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Toggles an identifier's membership in the selection set.
    ///
    /// Unknown identifiers are ignored so the selection stays a subset of the
    /// known list.
    pub fn toggle(&mut self, identifier: &str) {
        if !self.images.iter().any(|id| id == identifier) {
            return;
        }
        if !self.selected.remove(identifier) {
            self.selected.insert(identifier.to_string());
        }
    }

    /// Marks a list refresh as in flight.
    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    /// Replaces the image list with a fresh backend listing.
    ///
    /// Selection entries for identifiers no longer listed are dropped;
    /// everything still present stays selected.
    pub fn finish_load(&mut self, images: Vec<String>) {
        self.selected.retain(|id| images.contains(id));
        self.images = images;
        self.loading = false;
    }

    /// Clears the loading flag after a failed refresh. The previous list and
    /// selection are kept as-is.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    /// Starts a deletion of the current selection.
    ///
    /// Returns the identifiers to send, or `None` when there is nothing
    /// selected or a deletion is already in flight. The selection itself is
    /// untouched until the backend confirms.
    pub fn begin_delete(&mut self) -> Option<Vec<String>> {
        if self.selected.is_empty() || self.deleting {
            return None;
        }
        self.deleting = true;
        let mut filenames: Vec<String> = self.selected.iter().cloned().collect();
        filenames.sort();
        Some(filenames)
    }

    /// Applies a deletion confirmation: only the identifiers the backend
    /// reported as deleted leave the list and the selection.
    pub fn finish_delete(&mut self, deleted: &[String]) {
        self.images.retain(|id| !deleted.contains(id));
        self.selected.retain(|id| !deleted.contains(id));
        self.deleting = false;
    }

    /// Clears the deleting flag after a failed deletion; list and selection
    /// are unchanged.
    pub fn fail_delete(&mut self) {
        self.deleting = false;
    }

    /// Marks an upload as in flight. Returns `false` when one already is.
    pub fn begin_upload(&mut self) -> bool {
        if self.uploading {
            return false;
        }
        self.uploading = true;
        true
    }

    /// Appends the identifier the backend stored an upload under.
    ///
    /// The backend is the authority on naming; the identifier is appended
    /// verbatim even when it collides with an existing entry.
    pub fn finish_upload(&mut self, filename: String) {
        self.images.push(filename);
        self.uploading = false;
    }

    /// Clears the uploading flag after a failed upload.
    pub fn fail_upload(&mut self) {
        self.uploading = false;
    }
}
