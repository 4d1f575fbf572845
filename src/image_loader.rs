//! Image file loading for the command-line front end and tests
//!
//! The analysis core never touches files; it takes a [`crate::FaceImage`].
//! This module is the decode step in front of it: it reads a file with the
//! `image` crate, normalizes every color type to 8-bit RGB (stripping alpha,
//! expanding grayscale) and optionally downscales very large photos.
//!
//! ## Supported Formats
//!
//! JPEG, PNG, GIF (first frame), WebP, TIFF, BMP

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};

use crate::error::{AnalysisError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    /// First frame only
    Gif,
    WebP,
    Tiff,
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Load an image from disk as 8-bit RGB.
///
/// # Errors
///
/// - `InvalidParameter` if the extension is not a supported format
/// - `ImageLoadError` if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<RgbImage> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(AnalysisError::invalid_parameter(
            "image format",
            path.display(),
        ));
    }

    let reader = ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img: DynamicImage = reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgb8())
}

/// Load an image and downscale it so it holds at most `max_pixels` pixels.
///
/// Aspect ratio is preserved. Images already under the cap are returned
/// unchanged.
pub fn load_image_capped(path: &Path, max_pixels: u64) -> Result<RgbImage> {
    let img = load_image(path)?;
    downscale_to(img, max_pixels)
}

/// Downscale an image to at most `max_pixels` pixels
pub fn downscale_to(img: RgbImage, max_pixels: u64) -> Result<RgbImage> {
    if max_pixels == 0 {
        return Err(AnalysisError::invalid_parameter("max_pixels", 0));
    }

    let (width, height) = img.dimensions();
    let pixels = width as u64 * height as u64;
    if pixels <= max_pixels {
        return Ok(img);
    }

    let scale = (max_pixels as f64 / pixels as f64).sqrt();
    let new_width = ((width as f64 * scale).floor() as u32).max(1);
    let new_height = ((height as f64 * scale).floor() as u32).max(1);

    Ok(image::imageops::resize(
        &img,
        new_width,
        new_height,
        FilterType::Triangle,
    ))
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("face.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("face.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("face.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("face.heic")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("face")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("PNG"));
        assert!(is_supported_extension("tif"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let result = load_image(Path::new("face.xyz"));
        assert!(matches!(result, Err(AnalysisError::InvalidParameter { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = load_image(Path::new("no_such_face.png"));
        assert!(matches!(result, Err(AnalysisError::ImageLoadError { .. })));
    }

    #[test]
    fn test_alpha_is_stripped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 128]))
            .save(&path)
            .unwrap();

        let rgb = load_image(&path).unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_downscale_preserves_small_images() {
        let img = RgbImage::from_pixel(10, 10, Rgb([1, 2, 3]));
        let out = downscale_to(img, 100).unwrap();
        assert_eq!(out.dimensions(), (10, 10));
    }

    #[test]
    fn test_downscale_caps_pixel_count() {
        let img = RgbImage::from_pixel(400, 200, Rgb([200, 150, 120]));
        let out = downscale_to(img, 20_000).unwrap();
        let (w, h) = out.dimensions();
        assert!(w as u64 * h as u64 <= 20_000);
        assert_eq!((w, h), (200, 100));
        assert_eq!(out.get_pixel(50, 50), &Rgb([200, 150, 120]));
    }

    #[test]
    fn test_downscale_rejects_zero_cap() {
        let img = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        assert!(downscale_to(img, 0).is_err());
    }
}
