//! Borrowed pixel buffers and rectangular regions
//!
//! [`FaceImage`] is the only image type the analysis core accepts. It is a
//! validated, read-only view over interleaved 8-bit RGB data owned by the
//! caller, so decoding and channel normalization stay outside the core.

use image::RgbImage;

use crate::error::{AnalysisError, Result};

/// Number of interleaved channels the core understands
pub const RGB_CHANNELS: usize = 3;

/// Read-only view of a decoded RGB image
#[derive(Debug, Clone, Copy)]
pub struct FaceImage<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> FaceImage<'a> {
    /// Wrap an interleaved pixel buffer.
    ///
    /// # Errors
    ///
    /// - `InvalidImage` if either dimension is zero, the buffer is empty,
    ///   or its length is not `width * height * channels`
    /// - `UnsupportedFormat` if `channels` is not 3
    pub fn new(width: u32, height: u32, channels: usize, data: &'a [u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::invalid_image(format!(
                "zero spatial extent ({}x{})",
                width, height
            )));
        }
        if data.is_empty() {
            return Err(AnalysisError::invalid_image("empty pixel buffer"));
        }
        if channels != RGB_CHANNELS {
            return Err(AnalysisError::UnsupportedFormat { channels });
        }

        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(AnalysisError::invalid_image(format!(
                "buffer holds {} bytes, expected {} for {}x{}x{}",
                data.len(),
                expected,
                width,
                height,
                channels
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Borrow an `image::RgbImage`
    pub fn from_rgb(image: &'a RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, RGB_CHANNELS, image.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Region covering the whole image
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }

    /// Iterate `[r, g, b]` triples of one region, row by row.
    ///
    /// The region must already be clipped to this image.
    pub(crate) fn pixels_in(&self, region: Region) -> impl Iterator<Item = [u8; 3]> + 'a {
        let data = self.data;
        let stride = self.width as usize * RGB_CHANNELS;
        let x0 = region.x as usize * RGB_CHANNELS;
        let row_bytes = region.width as usize * RGB_CHANNELS;

        (region.y..region.y + region.height).flat_map(move |y| {
            let start = y as usize * stride + x0;
            data[start..start + row_bytes]
                .chunks_exact(RGB_CHANNELS)
                .map(|px| [px[0], px[1], px[2]])
        })
    }
}

impl<'a> TryFrom<&'a RgbImage> for FaceImage<'a> {
    type Error = AnalysisError;

    fn try_from(image: &'a RgbImage) -> Result<Self> {
        Self::from_rgb(image)
    }
}

/// Axis-aligned pixel rectangle, e.g. a detected face or eye box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a region from fractional row/column spans of a frame.
    ///
    /// Bounds are truncated toward zero, the way integer slicing of a frame
    /// by `int(height * fraction)` does.
    pub fn from_fractions(
        frame_width: u32,
        frame_height: u32,
        rows: (f32, f32),
        cols: (f32, f32),
    ) -> Self {
        let scale = |extent: u32, fraction: f32| -> u32 {
            ((extent as f32 * fraction.clamp(0.0, 1.0)) as u32).min(extent)
        };

        let y0 = scale(frame_height, rows.0);
        let y1 = scale(frame_height, rows.1).max(y0);
        let x0 = scale(frame_width, cols.0);
        let x1 = scale(frame_width, cols.1).max(x0);

        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Intersect with a `width` x `height` frame anchored at the origin
    pub fn clip_to(&self, width: u32, height: u32) -> Region {
        let x0 = self.x.min(width);
        let y0 = self.y.min(height);
        let x1 = self.x.saturating_add(self.width).min(width);
        let y1 = self.y.saturating_add(self.height).min(height);
        Region::new(x0, y0, x1 - x0, y1 - y0)
    }
}
