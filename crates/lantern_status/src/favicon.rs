//! Server icons.

use std::fmt;
use std::io::Cursor;

use base64::prelude::*;
use image::{ImageFormat, ImageReader, RgbaImage};
use thiserror::Error;

/// The prefix of a favicon data URI. Optional when decoding.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A validated 64x64 PNG server icon.
#[derive(Clone, PartialEq)]
pub struct Favicon {
    png: Vec<u8>,
    image: RgbaImage,
}

#[derive(Debug, Error)]
pub enum IconError {
    #[error("favicon is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("favicon is not a valid PNG image: {0}")]
    Image(#[from] image::ImageError),
    #[error("favicon must be {size}x{size} pixels, got {width}x{height}", size = Favicon::SIZE)]
    Dimensions { width: u32, height: u32 },
}

impl Favicon {
    /// Width and height of every server icon.
    pub const SIZE: u32 = 64;

    /// Decodes a favicon from the value of the `favicon` field. The
    /// [`DATA_URI_PREFIX`] is stripped if present, and the rest is read as
    /// standard base64.
    pub fn from_data_uri(uri: &str) -> Result<Self, IconError> {
        let payload = uri.strip_prefix(DATA_URI_PREFIX).unwrap_or(uri);
        let png = BASE64_STANDARD.decode(payload)?;

        Self::from_png(png)
    }

    /// Validates the bytes of a PNG image.
    ///
    /// The dimensions are read from the image header before any pixel data is
    /// decoded, so images of the wrong size are rejected without allocating
    /// their pixels.
    pub fn from_png(png: Vec<u8>) -> Result<Self, IconError> {
        let (width, height) = ImageReader::with_format(Cursor::new(png.as_slice()), ImageFormat::Png)
            .into_dimensions()?;

        if width != Self::SIZE || height != Self::SIZE {
            return Err(IconError::Dimensions { width, height });
        }

        let image = image::load_from_memory_with_format(&png, ImageFormat::Png)?.into_rgba8();

        Ok(Self { png, image })
    }

    /// The PNG bytes as the server sent them.
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Encodes the icon the way servers send it, prefix included.
    pub fn to_data_uri(&self) -> String {
        let mut buf = DATA_URI_PREFIX.to_owned();
        BASE64_STANDARD.encode_string(&self.png, &mut buf);
        buf
    }
}

impl fmt::Debug for Favicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Favicon")
            .field("png_len", &self.png.len())
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish_non_exhaustive()
    }
}
