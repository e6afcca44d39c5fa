// SPDX-License-Identifier: MPL-2.0
//! Story media: resource retrieval, image decoding and caching.

pub mod cache;
pub mod image;
pub mod location;

pub use cache::{CacheStats, ImageCache, ImageState};
pub use image::{decode_image, load_image, ImageData};
pub use location::{read_bytes, Location};
