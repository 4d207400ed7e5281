// SPDX-License-Identifier: MPL-2.0
//! Image files: supported formats and decoding.

pub mod image;

use std::path::Path;

pub use image::{decode_gallery_image, display_name, load_gallery_image, GalleryImage};

/// Image file extensions picked up when scanning a directory.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Returns true if `path` has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}
