//! Fractal image payload: wire DTO and validated value object.
//!
//! DESIGN
//! ======
//! The endpoint returns `{"rgb": [[[r, g, b], ...], ...]}` (rows × columns ×
//! channels). Raw JSON is never handed to rendering; it goes through
//! [`FractalImage::from_rows`] which rejects anything that is not a
//! rectangular grid of 3-channel pixels.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::Deserialize;

/// Number of channels per pixel (red, green, blue).
pub const CHANNELS: usize = 3;

/// Response body of `GET /api/newton_fractal/`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FractalResponse {
    /// Nested pixel array, absent when the server omits the field.
    #[serde(default)]
    pub rgb: Option<Vec<Vec<Vec<f64>>>>,
}

/// Why a decoded `rgb` array is not a usable image.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("image has no rows")]
    Empty,
    #[error("image rows have no pixels")]
    ZeroWidth,
    #[error("row {row} has {found} pixels, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("pixel ({row}, {col}) has {found} channels, expected 3")]
    ChannelCount { row: usize, col: usize, found: usize },
}

/// A rectangular RGB image with `height` rows of `width` pixels.
///
/// Channel values are kept exactly as received. The upstream service emits
/// intensities in `[0, 255]`, usually fractional.
#[derive(Clone, Debug, PartialEq)]
pub struct FractalImage {
    height: usize,
    width: usize,
    pixels: Vec<[f64; CHANNELS]>,
}

impl FractalImage {
    /// Validate a rows × columns × channels array.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the array is empty, ragged, or contains a
    /// pixel without exactly three channels.
    pub fn from_rows(rows: Vec<Vec<Vec<f64>>>) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().ok_or(ShapeError::Empty)?.len();
        if width == 0 {
            return Err(ShapeError::ZeroWidth);
        }

        let mut pixels = Vec::with_capacity(height * width);
        for (row, columns) in rows.into_iter().enumerate() {
            if columns.len() != width {
                return Err(ShapeError::RaggedRow { row, expected: width, found: columns.len() });
            }
            for (col, channels) in columns.into_iter().enumerate() {
                let pixel: [f64; CHANNELS] = channels
                    .try_into()
                    .map_err(|rejected: Vec<f64>| ShapeError::ChannelCount { row, col, found: rejected.len() })?;
                pixels.push(pixel);
            }
        }

        Ok(Self { height, width, pixels })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Channels of the pixel at (`row`, `col`), or `None` when out of bounds.
    pub fn pixel(&self, row: usize, col: usize) -> Option<[f64; CHANNELS]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.pixels.get(row * self.width + col).copied()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[[f64; CHANNELS]]> {
        self.pixels.chunks_exact(self.width)
    }

    /// The nested array this image was built from.
    pub fn to_nested(&self) -> Vec<Vec<Vec<f64>>> {
        self.rows()
            .map(|row| row.iter().map(|pixel| pixel.to_vec()).collect())
            .collect()
    }

    /// Row-major RGBA8 buffer suitable for `ImageData`.
    ///
    /// Channels are clamped to `[0, 255]` and rounded; alpha is opaque.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            for channel in pixel {
                out.push(channel.clamp(0.0, 255.0).round() as u8);
            }
            out.push(u8::MAX);
        }
        out
    }
}
