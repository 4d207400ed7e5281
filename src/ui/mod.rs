// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from a `ViewContext` and turns its `Message` into an `Event`
//! for the application to act on.
//!
//! # Screens
//!
//! - [`gallery_grid`] - Thumbnail grid and empty state
//! - [`detail_view`] - Full-size image with the navigation bar
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod detail_view;
pub mod gallery_grid;
pub mod styles;
pub mod theming;
pub mod widgets;
