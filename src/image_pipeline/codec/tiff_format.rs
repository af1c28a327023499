//! TIFF decoding and encoding using the tiff crate.

use std::io::Cursor;

use tracing::debug;
use crate::image_pipeline::codec::channels::grid_from_samples;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::config::{CompositeConfig, TiffCompression};
use crate::image_pipeline::grid::SampleGrid;

pub(crate) fn decode(data: &[u8]) -> Result<SampleGrid> {
    let mut decoder = tiff::decoder::Decoder::new(Cursor::new(data))
        .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| PipelineError::DecodeError(e.to_string()))?;
    let colortype = decoder
        .colortype()
        .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

    let (channels, bits) = match colortype {
        tiff::ColorType::Gray(bits) => (1, bits),
        tiff::ColorType::GrayA(bits) => (2, bits),
        tiff::ColorType::RGB(bits) => (3, bits),
        tiff::ColorType::RGBA(bits) => (4, bits),
        other => {
            return Err(PipelineError::UnsupportedFormat(format!(
                "TIFF color type {:?}",
                other
            )))
        }
    };
    if bits != 8 && bits != 16 {
        return Err(PipelineError::UnsupportedFormat(format!("TIFF bit depth {}", bits)));
    }

    let width = width as usize;
    let height = height as usize;
    debug!("Decoded TIFF: {}x{} {:?}", width, height, colortype);

    match decoder
        .read_image()
        .map_err(|e| PipelineError::DecodeError(e.to_string()))?
    {
        tiff::decoder::DecodingResult::U8(samples) => Ok(SampleGrid::Eight(grid_from_samples(
            width, height, channels, &samples,
        )?)),
        tiff::decoder::DecodingResult::U16(samples) => Ok(SampleGrid::Sixteen(grid_from_samples(
            width, height, channels, &samples,
        )?)),
        _ => Err(PipelineError::UnsupportedFormat(
            "TIFF sample format other than u8/u16".to_string(),
        )),
    }
}

/// Encodes `image` as an RGB TIFF using the compression settings in `config`.
pub(crate) fn encode(image: &SampleGrid, config: &CompositeConfig) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut buffer = Vec::new();

    {
        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::Deflate => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        let written = match image {
            SampleGrid::Eight(grid) => encoder.write_image::<tiff::encoder::colortype::RGB8>(
                width as u32,
                height as u32,
                &grid.to_interleaved(),
            ),
            SampleGrid::Sixteen(grid) => encoder.write_image::<tiff::encoder::colortype::RGB16>(
                width as u32,
                height as u32,
                &grid.to_interleaved(),
            ),
        };
        written.map_err(|e| PipelineError::EncodeError(e.to_string()))?;
    }

    Ok(buffer)
}
