// SPDX-License-Identifier: MPL-2.0
//! Top-level screen state.

use crate::gallery::Controller;
use crate::media::GalleryImage;
use std::time::Instant;

/// What the window currently shows.
#[derive(Debug)]
pub enum Screen {
    /// Images are being decoded in the background.
    Loading { started: Instant },
    /// The gallery, in grid or detail mode.
    Gallery(Controller<GalleryImage>),
}

impl Screen {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading { .. })
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&Controller<GalleryImage>> {
        match self {
            Screen::Gallery(controller) => Some(controller),
            Screen::Loading { .. } => None,
        }
    }

    pub fn gallery_mut(&mut self) -> Option<&mut Controller<GalleryImage>> {
        match self {
            Screen::Gallery(controller) => Some(controller),
            Screen::Loading { .. } => None,
        }
    }
}
