//! PNG decoding and encoding using the png crate.

use std::io::Cursor;

use tracing::debug;
use crate::image_pipeline::codec::channels::{be_bytes_to_u16, grid_from_samples};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::grid::SampleGrid;

fn channel_count(color_type: png::ColorType) -> Result<usize> {
    match color_type {
        png::ColorType::Grayscale => Ok(1),
        png::ColorType::GrayscaleAlpha => Ok(2),
        png::ColorType::Rgb => Ok(3),
        png::ColorType::Rgba => Ok(4),
        // EXPAND turns palettes into RGB(A), so this only shows up on a broken file
        png::ColorType::Indexed => Err(PipelineError::UnsupportedFormat(
            "indexed PNG after expansion".to_string(),
        )),
    }
}

/// Decodes a PNG into an 8- or 16-bit RGB grid.
///
/// Palettes and sub-byte depths are expanded to 8 bits. Gray is replicated
/// across channels and alpha is dropped.
pub(crate) fn decode(data: &[u8]) -> Result<SampleGrid> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| PipelineError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];

    let width = info.width as usize;
    let height = info.height as usize;
    let channels = channel_count(info.color_type)?;
    debug!(
        "Decoded PNG: {}x{} {:?} {:?}",
        width, height, info.color_type, info.bit_depth
    );

    match info.bit_depth {
        png::BitDepth::Eight => Ok(SampleGrid::Eight(grid_from_samples(width, height, channels, bytes)?)),
        png::BitDepth::Sixteen => {
            let samples = be_bytes_to_u16(bytes);
            Ok(SampleGrid::Sixteen(grid_from_samples(width, height, channels, &samples)?))
        }
        other => Err(PipelineError::UnsupportedFormat(format!(
            "PNG bit depth {:?}",
            other
        ))),
    }
}

/// Encodes `image` as an RGB PNG at its own sample depth.
pub(crate) fn encode(image: &SampleGrid) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let (depth, data) = match image {
        SampleGrid::Eight(grid) => (png::BitDepth::Eight, grid.to_interleaved()),
        SampleGrid::Sixteen(grid) => (
            png::BitDepth::Sixteen,
            grid.to_interleaved()
                .into_iter()
                .flat_map(u16::to_be_bytes)
                .collect(),
        ),
    };

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, width as u32, height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(depth);
        let mut writer = encoder
            .write_header()
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
    }
    Ok(buffer)
}
