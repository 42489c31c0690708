//! Photo capture: load a source image, square it, and cap its size.

use derive_more::{Display, Error};
use image::RgbImage;
use image::imageops::FilterType;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

use snapgrid_puzzle::SourceRegion;

/// Largest edge a captured image keeps, in pixels.
pub const MAX_CAPTURE_EDGE: u32 = 600;

/// Error produced while acquiring a puzzle image.
#[derive(Debug, Display, Error)]
pub enum CaptureError {
    /// The source file could not be opened or decoded.
    #[display("could not read image {path}: {message}")]
    Unreadable {
        /// Path of the offending file.
        path: String,
        /// Decoder error description.
        message: String,
    },
    /// The source decoded to an image with a zero-length edge.
    #[display("image {path} has no pixels")]
    Empty {
        /// Path of the offending file.
        path: String,
    },
}

/// A square puzzle image held in memory as RGB pixels.
///
/// Always at most [`MAX_CAPTURE_EDGE`] pixels per side, so tile geometry
/// computed against `edge()` stays within terminal-friendly bounds.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    edge: u32,
    pixels: Vec<[u8; 3]>,
}

impl CapturedImage {
    /// Normalizes a decoded image into a captured one.
    ///
    /// The source is center-cropped to a square and scaled down so the edge
    /// never exceeds [`MAX_CAPTURE_EDGE`]. Returns [`None`] for an image
    /// with no pixels.
    pub fn from_image(image: &RgbImage) -> Option<Self> {
        let (width, height) = image.dimensions();
        let side = width.min(height);
        if side == 0 {
            return None;
        }

        let cropped = image::imageops::crop_imm(
            image,
            (width - side) / 2,
            (height - side) / 2,
            side,
            side,
        )
        .to_image();

        let squared = if side > MAX_CAPTURE_EDGE {
            image::imageops::resize(
                &cropped,
                MAX_CAPTURE_EDGE,
                MAX_CAPTURE_EDGE,
                FilterType::Triangle,
            )
        } else {
            cropped
        };

        let edge = squared.width();
        let pixels = squared.pixels().map(|p| p.0).collect();
        Some(Self { edge, pixels })
    }

    /// Returns the edge length in pixels.
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Averages the color over a sub-rectangle of the image.
    ///
    /// Pixels outside the image contribute nothing; a region entirely
    /// outside reads as black.
    pub fn region_color(&self, region: &SourceRegion) -> (u8, u8, u8) {
        let y_end = region.y.saturating_add(region.edge).min(self.edge);
        let x_end = region.x.saturating_add(region.edge).min(self.edge);

        let mut sum = [0u64; 3];
        let mut count = 0u64;
        for y in region.y..y_end {
            for x in region.x..x_end {
                let pixel = self.pixels[(y * self.edge + x) as usize];
                sum[0] += u64::from(pixel[0]);
                sum[1] += u64::from(pixel[1]);
                sum[2] += u64::from(pixel[2]);
                count += 1;
            }
        }

        if count == 0 {
            return (0, 0, 0);
        }
        (
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
        )
    }
}

/// Source of square puzzle images.
///
/// The flow controller only sees this boundary, so a camera, a file, or a
/// synthetic image can stand behind it interchangeably.
pub trait CaptureSource {
    /// Produces one square image, at most [`MAX_CAPTURE_EDGE`] pixels per edge.
    fn capture(&self) -> Result<CapturedImage, CaptureError>;
}

/// Captures by decoding a photo from disk.
#[derive(Debug, Clone)]
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    /// Creates a capture source for the photo at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CaptureSource for FileCapture {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn capture(&self) -> Result<CapturedImage, CaptureError> {
        debug!("Decoding capture source");
        let decoded = image::open(&self.path).map_err(|e| CaptureError::Unreadable {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let rgb = decoded.to_rgb8();
        let captured = CapturedImage::from_image(&rgb).ok_or_else(|| CaptureError::Empty {
            path: self.path.display().to_string(),
        })?;

        info!(
            source_width = rgb.width(),
            source_height = rgb.height(),
            edge = captured.edge(),
            "Photo captured"
        );
        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn rejects_images_with_no_pixels() {
        assert!(CapturedImage::from_image(&RgbImage::new(0, 0)).is_none());
    }

    #[test]
    fn small_images_keep_their_short_edge() {
        let image = RgbImage::from_pixel(12, 8, Rgb([9, 9, 9]));
        let captured = CapturedImage::from_image(&image).expect("captured");
        assert_eq!(captured.edge(), 8);
    }

    #[test]
    fn regions_outside_the_image_read_as_black() {
        let image = RgbImage::from_pixel(4, 4, Rgb([50, 60, 70]));
        let captured = CapturedImage::from_image(&image).expect("captured");
        let outside = SourceRegion { x: 10, y: 10, edge: 4 };
        assert_eq!(captured.region_color(&outside), (0, 0, 0));
    }

    #[test]
    fn clipped_regions_average_only_what_exists() {
        let image = RgbImage::from_pixel(4, 4, Rgb([50, 60, 70]));
        let captured = CapturedImage::from_image(&image).expect("captured");
        let clipped = SourceRegion { x: 2, y: 2, edge: 4 };
        assert_eq!(captured.region_color(&clipped), (50, 60, 70));
    }

    #[test]
    fn region_color_averages_mixed_pixels() {
        let mut image = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        image.put_pixel(0, 0, Rgb([200, 100, 40]));
        image.put_pixel(1, 0, Rgb([100, 200, 40]));
        let captured = CapturedImage::from_image(&image).expect("captured");
        let top = SourceRegion { x: 0, y: 0, edge: 2 };
        // Rows average to (75, 75, 20) over the four pixels.
        assert_eq!(captured.region_color(&top), (75, 75, 20));
    }
}
