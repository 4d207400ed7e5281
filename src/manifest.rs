// SPDX-License-Identifier: MPL-2.0
//! Image manifest: the ordered list of images the gallery is built from.
//!
//! A manifest is assembled once at startup from the first source that
//! provides images:
//!
//! 1. paths given on the command line (files, or directories scanned for images),
//! 2. a manifest file (`--manifest`), a TOML document with an `images` array,
//! 3. the `[gallery]` section of `settings.toml`,
//! 4. the sample gallery bundled in the binary.
//!
//! Resolving a manifest decodes every entry. Entries that cannot be read or
//! decoded are logged and left out; they never abort gallery construction.
//! The same holds for directories that cannot be scanned.

use crate::config::GalleryConfig;
use crate::error::{Error, Result};
use crate::media::{self, GalleryImage};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct BundledGallery;

/// Manifest listing the bundled images, in display order.
const BUNDLED_MANIFEST: &str = "manifest.toml";

/// Where the bytes of a manifest entry come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    File(PathBuf),
    /// Name of a file embedded from `assets/gallery/`.
    Bundled(String),
}

/// One manifest entry: the identifier shown to users and the image it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: String,
    pub source: EntrySource,
}

impl ManifestEntry {
    /// Creates a file entry, resolving a relative `id` against `base_dir`.
    #[must_use]
    pub fn new(id: impl Into<String>, base_dir: Option<&Path>) -> Self {
        let id = id.into();
        let raw = PathBuf::from(&id);
        let path = match base_dir {
            Some(base) if raw.is_relative() => base.join(raw),
            _ => raw,
        };
        Self {
            id,
            source: EntrySource::File(path),
        }
    }

    fn file(id: String, path: PathBuf) -> Self {
        Self {
            id,
            source: EntrySource::File(path),
        }
    }

    fn bundled(name: String) -> Self {
        Self {
            id: name.clone(),
            source: EntrySource::Bundled(name),
        }
    }

    /// Path on disk, or `None` for bundled entries.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            EntrySource::File(path) => Some(path),
            EntrySource::Bundled(_) => None,
        }
    }

    /// Reads and decodes the image this entry names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the image cannot be read and [`Error::Image`]
    /// if it cannot be decoded.
    pub fn load(&self, thumbnail_size: u32) -> Result<GalleryImage> {
        match &self.source {
            EntrySource::File(path) => media::load_gallery_image(&self.id, path, thumbnail_size),
            EntrySource::Bundled(name) => {
                let file = BundledGallery::get(name)
                    .ok_or_else(|| Error::Io(format!("{name} is not bundled")))?;
                media::decode_gallery_image(&self.id, &file.data, thumbnail_size)
            }
        }
    }
}

/// On-disk manifest file format.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    base_dir: Option<PathBuf>,
    images: Vec<String>,
}

/// Ordered list of image entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Creates a manifest from identifiers, relative ones resolved against `base_dir`.
    pub fn from_identifiers<I, S>(ids: I, base_dir: Option<&Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: ids
                .into_iter()
                .map(|id| ManifestEntry::new(id, base_dir))
                .collect(),
        }
    }

    /// Creates a manifest from command-line paths.
    ///
    /// Files are taken as given; directories contribute their supported
    /// images in alphabetical order. A directory that cannot be read is
    /// logged and skipped.
    #[must_use]
    pub fn from_paths(paths: &[PathBuf]) -> Self {
        Self::from_paths_with(paths, scan_directory)
    }

    fn from_paths_with<F>(paths: &[PathBuf], mut scan: F) -> Self
    where
        F: FnMut(&Path) -> Result<Vec<ManifestEntry>>,
    {
        let mut entries = Vec::new();
        for path in paths {
            if path.is_dir() {
                match scan(path) {
                    Ok(found) => entries.extend(found),
                    Err(error) => log::warn!("Skipping directory {}: {}", path.display(), error),
                }
            } else {
                entries.push(ManifestEntry::file(
                    path.to_string_lossy().into_owned(),
                    path.clone(),
                ));
            }
        }
        Self { entries }
    }

    /// Reads a manifest file.
    ///
    /// Relative entries are resolved against the file's `base_dir` key, or
    /// the directory containing the file when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
    /// and [`Error::Config`](crate::error::Error::Config)
    /// if it is not a valid manifest.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: ManifestFile = toml::from_str(&content)?;

        let parent = path.parent().map(Path::to_path_buf);
        let base_dir = match (file.base_dir, parent) {
            (Some(base), Some(parent)) if base.is_relative() => Some(parent.join(base)),
            (Some(base), _) => Some(base),
            (None, parent) => parent,
        };

        Ok(Self::from_identifiers(file.images, base_dir.as_deref()))
    }

    /// Creates a manifest from the `[gallery]` config section.
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::from_identifiers(config.images.iter().cloned(), config.base_dir.as_deref())
    }

    /// Creates a manifest of the images bundled in the binary.
    ///
    /// Returns an empty manifest, with a warning, if the bundled list cannot
    /// be read.
    #[must_use]
    pub fn bundled() -> Self {
        match read_bundled_manifest() {
            Ok(names) => Self {
                entries: names.into_iter().map(ManifestEntry::bundled).collect(),
            },
            Err(error) => {
                log::warn!("Bundled gallery unavailable: {}", error);
                Self::default()
            }
        }
    }

    /// Picks the first source given: CLI paths, manifest file, config, then
    /// the bundled gallery.
    ///
    /// # Errors
    ///
    /// Propagates errors from reading the manifest file.
    pub fn from_sources(
        paths: &[PathBuf],
        manifest_file: Option<&Path>,
        config: &GalleryConfig,
    ) -> Result<Self> {
        if !paths.is_empty() {
            return Ok(Self::from_paths(paths));
        }
        if let Some(file) = manifest_file {
            return Self::from_file(file);
        }
        if !config.images.is_empty() {
            return Ok(Self::from_config(config));
        }
        log::info!("No images configured; showing the bundled gallery");
        Ok(Self::bundled())
    }

    #[must_use]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every entry with `load`, keeping the manifest order.
    ///
    /// Failed entries are logged at warning level and skipped.
    pub fn resolve_with<T, F>(&self, mut load: F) -> Vec<T>
    where
        F: FnMut(&ManifestEntry) -> Result<T>,
    {
        self.entries
            .iter()
            .filter_map(|entry| match load(entry) {
                Ok(item) => Some(item),
                Err(error) => {
                    log::warn!("Skipping image {}: {}", entry.id, error);
                    None
                }
            })
            .collect()
    }

    /// Decodes every entry into a [`GalleryImage`].
    #[must_use]
    pub fn resolve(&self, thumbnail_size: u32) -> Vec<GalleryImage> {
        let images = self.resolve_with(|entry| entry.load(thumbnail_size));
        log::info!(
            "Gallery ready: {} of {} images loaded",
            images.len(),
            self.entries.len()
        );
        images
    }
}

/// Lists the supported images of `directory`, sorted by file name.
///
/// Entries that cannot be read are logged and skipped.
fn scan_directory(directory: &Path) -> Result<Vec<ManifestEntry>> {
    let mut files: Vec<PathBuf> = fs::read_dir(directory)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(error) => {
                log::warn!("Skipping entry in {}: {}", directory.display(), error);
                None
            }
        })
        .filter(|path| path.is_file() && media::is_supported_image(path))
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files
        .into_iter()
        .map(|path| {
            let id = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            ManifestEntry::file(id, path)
        })
        .collect())
}

fn read_bundled_manifest() -> Result<Vec<String>> {
    let file = BundledGallery::get(BUNDLED_MANIFEST)
        .ok_or_else(|| Error::Io(format!("{BUNDLED_MANIFEST} is not bundled")))?;
    let content = std::str::from_utf8(&file.data).map_err(|e| Error::Config(e.to_string()))?;
    let manifest: ManifestFile = toml::from_str(content)?;
    Ok(manifest.images)
}

impl From<&Manifest> for Vec<String> {
    fn from(manifest: &Manifest) -> Self {
        manifest.entries.iter().map(|entry| entry.id.clone()).collect()
    }
}
