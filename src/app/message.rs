// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::Direction;
use crate::media::GalleryImage;
use crate::ui::{detail_view, gallery_grid};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Manifest resolution finished; carries the images that loaded.
    GalleryLoaded(Vec<GalleryImage>),
    Grid(gallery_grid::Message),
    Detail(detail_view::Message),
    /// Arrow key pressed in the detail view.
    KeyboardStep(Direction),
    /// Escape pressed in the detail view.
    KeyboardBack,
    Tick(Instant), // Periodic tick driving spins and the loading spinner
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional manifest file listing the gallery images.
    pub manifest: Option<PathBuf>,
    /// Image files or directories given on the command line.
    pub paths: Vec<PathBuf>,
}
