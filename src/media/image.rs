// SPDX-License-Identifier: MPL-2.0
//! Story image decoding (PNG, JPEG, GIF, WebP, BMP).

use crate::error::{Error, Result};
use crate::media::location::read_bytes;
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

/// Decodes an in-memory encoded image.
///
/// Animated formats yield their first frame.
///
/// # Errors
///
/// Returns [`Error::Image`] if the bytes are not a supported image.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image(format!("empty image ({width}x{height})")));
    }
    let rgba = img.to_rgba8();
    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}

/// Retrieves and decodes the image at `uri` (URL or path).
///
/// Decoding runs on the blocking pool so large images do not stall the
/// async runtime.
///
/// # Errors
///
/// Fails with [`Error::Fetch`] / [`Error::Io`] when the bytes cannot be
/// retrieved and [`Error::Image`] when they cannot be decoded.
pub async fn load_image(uri: String) -> Result<ImageData> {
    let bytes = read_bytes(&uri).await?;
    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .unwrap_or_else(|e| Err(Error::Image(format!("decode task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decode_reports_dimensions() {
        let data = decode_image(&encode_png(4, 2)).expect("decode");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = decode_image(b"definitely not an image");
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn load_image_from_local_path() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("story.png");
        std::fs::write(&path, encode_png(3, 3)).expect("write png");

        let data = load_image(path.to_string_lossy().into_owned())
            .await
            .expect("load");
        assert_eq!(data.width, 3);
    }
}
