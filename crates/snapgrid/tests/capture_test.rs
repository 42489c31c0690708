//! Tests for photo capture and tile region sampling.

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use snapgrid::{CaptureError, CaptureSource, FileCapture, MAX_CAPTURE_EDGE};
use snapgrid_puzzle::SourceRegion;

/// Writes an image as PNG under a temp dir, returning the dir (must stay in
/// scope to keep the file alive) and the file path.
fn save_png(image: &RgbImage, name: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    image.save(&path).expect("Failed to write PNG");
    (dir, path)
}

fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

#[test]
fn landscape_photos_crop_to_the_centered_square() {
    // Green center flanked by red and blue strips that the crop discards.
    let mut image = solid(60, 40, [0, 200, 0]);
    for y in 0..40 {
        for x in 0..10 {
            image.put_pixel(x, y, Rgb([255, 0, 0]));
            image.put_pixel(50 + x, y, Rgb([0, 0, 255]));
        }
    }
    let (_dir, path) = save_png(&image, "landscape.png");

    let captured = FileCapture::new(path).capture().expect("Capture failed");

    assert_eq!(captured.edge(), 40);
    let full = SourceRegion {
        x: 0,
        y: 0,
        edge: 40,
    };
    assert_eq!(captured.region_color(&full), (0, 200, 0));
}

#[test]
fn oversized_photos_scale_down_to_the_edge_cap() {
    let image = solid(900, 700, [120, 40, 210]);
    let (_dir, path) = save_png(&image, "big.png");

    let captured = FileCapture::new(path).capture().expect("Capture failed");

    assert_eq!(captured.edge(), MAX_CAPTURE_EDGE);
    let full = SourceRegion {
        x: 0,
        y: 0,
        edge: MAX_CAPTURE_EDGE,
    };
    assert_eq!(captured.region_color(&full), (120, 40, 210));
}

#[test]
fn photos_within_the_cap_keep_their_size() {
    let image = solid(300, 300, [10, 20, 30]);
    let (_dir, path) = save_png(&image, "small.png");

    let captured = FileCapture::new(path).capture().expect("Capture failed");

    assert_eq!(captured.edge(), 300);
}

#[test]
fn tile_regions_sample_their_own_quadrant() {
    let mut image = RgbImage::new(8, 8);
    for y in 0..8 {
        for x in 0..8 {
            let color = match (x < 4, y < 4) {
                (true, true) => [200, 0, 0],
                (false, true) => [0, 200, 0],
                (true, false) => [0, 0, 200],
                (false, false) => [200, 200, 0],
            };
            image.put_pixel(x, y, Rgb(color));
        }
    }
    let (_dir, path) = save_png(&image, "quadrants.png");

    let captured = FileCapture::new(path).capture().expect("Capture failed");

    assert_eq!(
        captured.region_color(&SourceRegion {
            x: 0,
            y: 0,
            edge: 4
        }),
        (200, 0, 0)
    );
    assert_eq!(
        captured.region_color(&SourceRegion {
            x: 4,
            y: 0,
            edge: 4
        }),
        (0, 200, 0)
    );
    assert_eq!(
        captured.region_color(&SourceRegion {
            x: 0,
            y: 4,
            edge: 4
        }),
        (0, 0, 200)
    );
    assert_eq!(
        captured.region_color(&SourceRegion {
            x: 4,
            y: 4,
            edge: 4
        }),
        (200, 200, 0)
    );
}

#[test]
fn unreadable_files_report_a_capture_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"not actually a png").expect("Failed to write file");

    let result = FileCapture::new(path).capture();
    assert!(matches!(result, Err(CaptureError::Unreadable { .. })));
}

#[test]
fn missing_files_report_a_capture_error() {
    let result = FileCapture::new("/no/such/photo.png").capture();
    assert!(matches!(result, Err(CaptureError::Unreadable { .. })));
}
