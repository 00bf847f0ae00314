// SPDX-License-Identifier: MPL-2.0
//! Brightness slider state with drag/commit semantics.
//!
//! Dragging only moves the live value; nothing is sent until the drag ends.
//! [`Brightness::release`] promotes the live value to the committed one and
//! hands it back for exactly one backend request.

use crate::config::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};

/// Live (dragging) and committed (last released) brightness, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    live: u8,
    committed: u8,
}

impl Brightness {
    /// Creates slider state at `initial`, clamped to the 0-100 range.
    #[must_use]
    pub fn new(initial: u8) -> Self {
        let value = initial.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS);
        Self {
            live: value,
            committed: value,
        }
    }

    /// Value currently shown by the slider.
    #[must_use]
    pub fn live(&self) -> u8 {
        self.live
    }

    /// Value last sent to the backend.
    #[must_use]
    pub fn committed(&self) -> u8 {
        self.committed
    }

    /// Moves the live value during a drag. No backend traffic results.
    pub fn drag(&mut self, value: u8) {
        self.live = value.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS);
    }

    /// Ends a drag: commits the live value and returns what to send.
    pub fn release(&mut self) -> u8 {
        self.committed = self.live;
        self.committed
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BRIGHTNESS)
    }
}
