// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for slide pictures (JPEG, PNG, GIF, WebP, BMP).

use crate::catalog::location::{self, Location};
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decodes an encoded image into RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Image`] if the format is unsupported or the data is
/// corrupt.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Fetches the image at `location` and decodes it on the blocking pool.
///
/// # Errors
///
/// Returns [`Error::Image`] when the bytes cannot be fetched or decoded.
pub async fn load_image(location: Location) -> Result<ImageData> {
    let bytes = location::fetch(&location)
        .await
        .map_err(|e| Error::Image(e.to_string()))?;

    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}
