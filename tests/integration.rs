// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, DEFAULT_SPIN_DURATION_MS};
use iced_gallery::gallery::Easing;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::manifest::Manifest;
use image_rs::{Rgba, RgbaImage};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_gallery_section_round_trips_through_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.gallery.columns = Some(4);
    config.gallery.easing = Some(Easing::Linear);
    config.gallery.images = vec!["bmw.jpg".to_string(), "audi.jpg".to_string()];
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.gallery.columns(), 4);
    assert_eq!(loaded.gallery.spin_settings().easing, Easing::Linear);
    assert_eq!(
        loaded.gallery.spin_settings().duration.as_millis(),
        u128::from(DEFAULT_SPIN_DURATION_MS)
    );
    assert_eq!(loaded.gallery.images, config.gallery.images);
}

#[test]
fn test_manifest_skips_unreadable_images() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["a.png", "c.png"] {
        RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]))
            .save(dir.path().join(name))
            .expect("Failed to write png");
    }
    fs::write(dir.path().join("b.png"), b"not an image").expect("Failed to write file");

    let manifest_path = dir.path().join("gallery.toml");
    fs::write(
        &manifest_path,
        "images = [\"a.png\", \"b.png\", \"missing.png\", \"c.png\"]\n",
    )
    .expect("Failed to write manifest");

    let manifest = Manifest::from_file(&manifest_path).expect("Manifest should parse");
    let images = manifest.resolve(64);

    let names: Vec<&str> = images.iter().map(|image| image.name.as_str()).collect();
    assert_eq!(names, vec!["a.png", "c.png"]);
}

#[test]
fn test_unconfigured_startup_shows_bundled_gallery() {
    let config = Config::default();
    assert!(config.gallery.images.is_empty());

    let manifest =
        Manifest::from_sources(&[], None, &config.gallery).expect("Bundled gallery should load");
    let images = manifest.resolve(config.gallery.thumbnail_size());

    assert_eq!(images.len(), 9);
    assert_eq!(images[8].name, "royce.png");
}
