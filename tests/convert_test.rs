use std::fs;
use std::path::PathBuf;

use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgb};
use tempfile::TempDir;

use logoprep::{Error, OutputFormat, ReaderError, api};

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(img)
}

fn write_source_jpeg(dir: &TempDir, name: &str, image: &DynamicImage) -> PathBuf {
    let path = dir.path().join(name);
    image.save(&path).unwrap();
    path
}

#[test]
fn convert_preserves_source_dimensions() {
    let dir = TempDir::new().unwrap();
    let source = write_source_jpeg(&dir, "logo_210.jpg", &gradient_image(210, 140));
    let outputs = vec![dir.path().join("logo.png")];

    api::convert_to_paths(&source, &outputs, OutputFormat::Png).unwrap();

    let reloaded = image::open(&outputs[0]).unwrap();
    assert_eq!(reloaded.dimensions(), (210, 140));
}

#[test]
fn convert_reports_the_sniffed_source_format() {
    let dir = TempDir::new().unwrap();
    let source = write_source_jpeg(&dir, "logo.jpg", &gradient_image(64, 64));

    let processed = api::convert_to_buffer(&source).unwrap();

    assert_eq!(processed.source_format, Some(ImageFormat::Jpeg));
    assert_eq!((processed.width, processed.height), (64, 64));
}

#[test]
fn png_reencode_loses_no_pixels() {
    let dir = TempDir::new().unwrap();
    let source = write_source_jpeg(&dir, "logo.jpg", &gradient_image(120, 80));
    let outputs = vec![dir.path().join("logo.png")];

    api::convert_to_paths(&source, &outputs, OutputFormat::Png).unwrap();

    // Whatever the JPEG decoder produced must survive the PNG round unchanged
    let decoded_source = image::open(&source).unwrap().to_rgb8();
    let decoded_output = image::open(&outputs[0]).unwrap().to_rgb8();
    assert_eq!(decoded_source.as_raw(), decoded_output.as_raw());
}

#[test]
fn every_destination_gets_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let source = write_source_jpeg(&dir, "logo.jpg", &gradient_image(90, 90));
    let outputs = vec![
        dir.path().join("logo.png"),
        dir.path().join("icon.png"),
        dir.path().join("splash-icon.png"),
    ];

    api::convert_to_paths(&source, &outputs, OutputFormat::Png).unwrap();

    let first = fs::read(&outputs[0]).unwrap();
    assert_eq!(first[..8], PNG_SIGNATURE);
    for output in &outputs[1..] {
        assert_eq!(fs::read(output).unwrap(), first);
    }
}

#[test]
fn output_is_png_even_with_jpg_extension() {
    let dir = TempDir::new().unwrap();
    let source = write_source_jpeg(&dir, "logo.jpg", &gradient_image(50, 50));
    let outputs = vec![dir.path().join("still_a.jpg")];

    api::convert_to_paths(&source, &outputs, OutputFormat::Png).unwrap();

    let bytes = fs::read(&outputs[0]).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
}

#[test]
fn missing_source_writes_no_destinations() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("does_not_exist.jpg");
    let outputs = vec![dir.path().join("icon.png"), dir.path().join("splash.png")];

    let err = api::convert_to_paths(&source, &outputs, OutputFormat::Png).unwrap_err();

    assert!(matches!(
        err,
        Error::Reader(ReaderError::NotFound { .. })
    ));
    for output in &outputs {
        assert!(!output.exists(), "no partial output expected: {output:?}");
    }
}

#[test]
fn undecodable_source_is_a_decode_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("not_an_image.jpg");
    fs::write(&source, b"definitely not pixels").unwrap();
    let outputs = vec![dir.path().join("icon.png")];

    let err = api::convert_to_paths(&source, &outputs, OutputFormat::Png).unwrap_err();

    assert!(matches!(err, Error::Reader(ReaderError::Decode { .. })));
    assert!(!outputs[0].exists());
}
