use std::io::Cursor;

use crate::image_pipeline::codec::{ImageFormat, ImageReader, ImageWriter, StandardImageReader, StandardImageWriter};
use crate::image_pipeline::common::error::PipelineError;
use crate::image_pipeline::config::{CompositeConfig, OutputFormat, TiffCompression};
use crate::image_pipeline::grid::{Pixel, PixelGrid, SampleGrid};

fn gradient_u8() -> PixelGrid<u8> {
    let pixels = (0..12u8)
        .map(|i| Pixel::new(i * 20, 255 - i, i % 3))
        .collect();
    PixelGrid::new(4, 3, pixels).unwrap()
}

fn gradient_u16() -> PixelGrid<u16> {
    let pixels = (0..6u16)
        .map(|i| Pixel::new(i * 10000, 65535 - i, 0x0102 * i))
        .collect();
    PixelGrid::new(3, 2, pixels).unwrap()
}

fn encode(image: &SampleGrid, config: &CompositeConfig) -> Vec<u8> {
    let mut output = Cursor::new(Vec::new());
    StandardImageWriter.write_image(image, &mut output, config).unwrap();
    output.into_inner()
}

#[test]
fn test_sniff_signatures() {
    assert_eq!(ImageFormat::sniff(b"\x89PNG\r\n\x1a\nrest"), Some(ImageFormat::Png));
    assert_eq!(ImageFormat::sniff(b"II*\0rest"), Some(ImageFormat::Tiff));
    assert_eq!(ImageFormat::sniff(b"MM\0*rest"), Some(ImageFormat::Tiff));
    assert_eq!(ImageFormat::sniff(b"GIF89a"), None);
    assert_eq!(ImageFormat::sniff(b""), None);
}

#[test]
fn test_unknown_signature_is_unsupported() {
    let result = StandardImageReader.read_image(b"definitely not an image");
    assert!(matches!(result, Err(PipelineError::UnsupportedFormat(_))));
}

#[test]
fn test_truncated_png_is_decode_error() {
    let image = SampleGrid::Eight(gradient_u8());
    let bytes = encode(&image, &CompositeConfig::default());
    let result = StandardImageReader.read_image(&bytes[..bytes.len() / 2]);
    assert!(matches!(result, Err(PipelineError::DecodeError(_))));
}

#[test]
fn test_png_preserves_8_bit_samples() {
    let image = SampleGrid::Eight(gradient_u8());
    let bytes = encode(&image, &CompositeConfig::default());
    assert!(bytes.starts_with(b"\x89PNG"));
    assert_eq!(StandardImageReader.read_image(&bytes).unwrap(), image);
}

#[test]
fn test_png_preserves_16_bit_samples() {
    let image = SampleGrid::Sixteen(gradient_u16());
    let bytes = encode(&image, &CompositeConfig::default());
    assert_eq!(StandardImageReader.read_image(&bytes).unwrap(), image);
}

#[test]
fn test_tiff_preserves_samples_for_each_compression() {
    for compression in [TiffCompression::None, TiffCompression::Lzw, TiffCompression::Deflate] {
        let config = CompositeConfig::builder()
            .output_format(OutputFormat::Tiff)
            .compression(compression)
            .build();

        let image = SampleGrid::Sixteen(gradient_u16());
        let bytes = encode(&image, &config);
        assert_eq!(ImageFormat::sniff(&bytes), Some(ImageFormat::Tiff));
        assert_eq!(StandardImageReader.read_image(&bytes).unwrap(), image, "{:?}", compression);
    }
}

#[test]
fn test_png_gray_and_alpha_are_mapped_to_rgb() {
    // 2x1 gray+alpha, 8-bit
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, 2, 1);
        encoder.set_color(png::ColorType::GrayscaleAlpha);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[10, 255, 200, 0]).unwrap();
    }

    let decoded = StandardImageReader.read_image(&bytes).unwrap();
    let expected = PixelGrid::new(2, 1, vec![Pixel::gray(10u8), Pixel::gray(200u8)]).unwrap();
    assert_eq!(decoded, SampleGrid::Eight(expected));
}

#[test]
fn test_png_rgba_drops_alpha() {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, 1, 1);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[1, 2, 3, 4]).unwrap();
    }

    let decoded = StandardImageReader.read_image(&bytes).unwrap();
    assert_eq!(
        decoded,
        SampleGrid::Eight(PixelGrid::new(1, 1, vec![Pixel::new(1u8, 2, 3)]).unwrap())
    );
}
