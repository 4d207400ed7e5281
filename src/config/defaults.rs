// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Grid**: Thumbnail grid layout
//! - **Detail**: Full-size viewer layout
//! - **Spin**: Navigation spin timing

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of thumbnail columns.
pub const DEFAULT_GRID_COLUMNS: u32 = 3;

/// Minimum number of thumbnail columns.
pub const MIN_GRID_COLUMNS: u32 = 1;

/// Maximum number of thumbnail columns.
pub const MAX_GRID_COLUMNS: u32 = 12;

/// Default thumbnail edge length in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 200;

/// Minimum thumbnail edge length in pixels.
pub const MIN_THUMBNAIL_SIZE: u32 = 48;

/// Maximum thumbnail edge length in pixels.
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

// ==========================================================================
// Detail Defaults
// ==========================================================================

/// Default width of the full-size image in the detail view.
pub const DEFAULT_DETAIL_WIDTH: u32 = 800;

/// Minimum width of the full-size image.
pub const MIN_DETAIL_WIDTH: u32 = 200;

/// Maximum width of the full-size image.
pub const MAX_DETAIL_WIDTH: u32 = 4096;

// ==========================================================================
// Spin Defaults
// ==========================================================================

/// Default duration of the navigation spin in milliseconds.
pub const DEFAULT_SPIN_DURATION_MS: u64 = 1000;

/// Minimum spin duration (0 disables the animation).
pub const MIN_SPIN_DURATION_MS: u64 = 0;

/// Maximum spin duration in milliseconds.
pub const MAX_SPIN_DURATION_MS: u64 = 10_000;

/// Interval between animation ticks while a spin is in flight.
pub const SPIN_TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GRID_COLUMNS >= 1);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS && DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    assert!(
        DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE && DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE
    );
    assert!(DEFAULT_DETAIL_WIDTH >= MIN_DETAIL_WIDTH && DEFAULT_DETAIL_WIDTH <= MAX_DETAIL_WIDTH);
    // MIN_SPIN_DURATION_MS is zero, so only the upper bound can be violated
    assert!(DEFAULT_SPIN_DURATION_MS <= MAX_SPIN_DURATION_MS);
    assert!(SPIN_TICK_INTERVAL_MS > 0 && SPIN_TICK_INTERVAL_MS < DEFAULT_SPIN_DURATION_MS);
};
