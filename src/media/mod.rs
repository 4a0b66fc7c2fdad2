// SPDX-License-Identifier: MPL-2.0
//! Slide pictures: async loading, decoding and the in-memory cache.

pub mod cache;
pub mod image;

pub use cache::{ImageCache, ImageState};
pub use image::{load_image, ImageData};
