// SPDX-License-Identifier: MPL-2.0
//! Image decoding into render-ready handles for the grid and the detail view.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded gallery image.
///
/// Both handles are created once at startup; the grid only ever draws the
/// thumbnail, the detail view only the full image.
#[derive(Debug, Clone)]
pub struct GalleryImage {
    /// Manifest identifier the image was resolved from.
    pub id: String,
    /// File name shown under the detail image.
    pub name: String,
    pub thumbnail: image::Handle,
    pub full: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Returns the part of `id` after its last path separator.
#[must_use]
pub fn display_name(id: &str) -> &str {
    id.rsplit(['/', '\\']).next().unwrap_or(id)
}

/// Loads and decodes the image at `path`.
///
/// The thumbnail is downscaled to fit a `thumbnail_size` square, keeping the
/// aspect ratio.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// its content cannot be decoded.
pub fn load_gallery_image(id: &str, path: &Path, thumbnail_size: u32) -> Result<GalleryImage> {
    let bytes = fs::read(path)?;
    decode_gallery_image(id, &bytes, thumbnail_size)
}

/// Decodes an encoded image held in memory.
///
/// # Errors
///
/// Returns [`Error::Image`] if `bytes` cannot be decoded.
pub fn decode_gallery_image(id: &str, bytes: &[u8], thumbnail_size: u32) -> Result<GalleryImage> {
    let decoded = image_rs::load_from_memory(bytes)?;

    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }

    let thumb = decoded.thumbnail(thumbnail_size, thumbnail_size).to_rgba8();
    let thumbnail = image::Handle::from_rgba(thumb.width(), thumb.height(), thumb.into_vec());
    let full = image::Handle::from_rgba(width, height, decoded.to_rgba8().into_vec());

    Ok(GalleryImage {
        id: id.to_string(),
        name: display_name(id).to_string(),
        thumbnail,
        full,
        width,
        height,
    })
}
