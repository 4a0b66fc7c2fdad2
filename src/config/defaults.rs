// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Manifest location used when neither the CLI nor the config names one.
pub const DEFAULT_MANIFEST: &str = "public/pillowcases.json";

/// Directory (or URL prefix) holding the slide images.
pub const DEFAULT_IMAGE_BASE: &str = "public/pillowcase_images";

/// Background image of the splash screen, relative to the image base.
pub const DEFAULT_SPLASH_IMAGE: &str = "welcome.jpg";

/// Diagram shown on the intro slide, relative to the image base.
pub const DEFAULT_INTRO_IMAGE: &str = "pillowcase_anatomy.jpg";

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal travel (px) for a swipe to count.
pub const DEFAULT_HORIZONTAL_THRESHOLD: f32 = 40.0;

pub const MIN_HORIZONTAL_THRESHOLD: f32 = 10.0;

pub const MAX_HORIZONTAL_THRESHOLD: f32 = 400.0;

/// Maximum vertical drift (px) before a swipe is treated as a scroll.
pub const DEFAULT_VERTICAL_TOLERANCE: f32 = 40.0;

pub const MIN_VERTICAL_TOLERANCE: f32 = 5.0;

pub const MAX_VERTICAL_TOLERANCE: f32 = 400.0;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Number of decoded slide images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 16;

pub const MIN_IMAGE_CACHE_ENTRIES: usize = 1;

pub const MAX_IMAGE_CACHE_ENTRIES: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_defaults_are_within_bounds() {
        assert!(DEFAULT_HORIZONTAL_THRESHOLD >= MIN_HORIZONTAL_THRESHOLD);
        assert!(DEFAULT_HORIZONTAL_THRESHOLD <= MAX_HORIZONTAL_THRESHOLD);
        assert!(DEFAULT_VERTICAL_TOLERANCE >= MIN_VERTICAL_TOLERANCE);
        assert!(DEFAULT_VERTICAL_TOLERANCE <= MAX_VERTICAL_TOLERANCE);
    }

    #[test]
    fn cache_default_is_within_bounds() {
        assert!(DEFAULT_IMAGE_CACHE_ENTRIES >= MIN_IMAGE_CACHE_ENTRIES);
        assert!(DEFAULT_IMAGE_CACHE_ENTRIES <= MAX_IMAGE_CACHE_ENTRIES);
    }
}
