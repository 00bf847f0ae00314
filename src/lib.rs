// SPDX-License-Identifier: MPL-2.0
//! `frame_remote` is a desktop remote control for a networked photo frame,
//! built with the Iced GUI framework.
//!
//! It shows the frame's image gallery, lets the user select and delete
//! images, upload new ones, adjust the display brightness, and switch the
//! frame on or off over the frame's HTTP API.

#![doc(html_root_url = "https://docs.rs/frame_remote/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod ui;
