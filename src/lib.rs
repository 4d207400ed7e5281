// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a thumbnail gallery built with the Iced GUI framework.
//!
//! Clicking a thumbnail opens the image full size. Previous and Next spin the
//! current image through a full turn before the neighbouring image replaces
//! it. The navigation logic lives in [`gallery`] and is independent from the
//! UI, which only renders what the controller reports.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod manifest;
pub mod media;
pub mod ui;
