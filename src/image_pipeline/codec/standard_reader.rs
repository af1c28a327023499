//! Format-sniffing image reader.
//!
//! Inspects the file signature and hands the bytes to the matching codec,
//! so a group can mix PNG and TIFF members as long as their depth agrees.

use tracing::debug;
use crate::image_pipeline::codec::reader::ImageReader;
use crate::image_pipeline::codec::{png_format, tiff_format};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::grid::SampleGrid;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const TIFF_LE_SIGNATURE: &[u8] = b"II*\0";
const TIFF_BE_SIGNATURE: &[u8] = b"MM\0*";

/// Container formats the standard reader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Tiff,
}

impl ImageFormat {
    /// Identifies the format from the leading bytes of a file.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(PNG_SIGNATURE) {
            Some(ImageFormat::Png)
        } else if data.starts_with(TIFF_LE_SIGNATURE) || data.starts_with(TIFF_BE_SIGNATURE) {
            Some(ImageFormat::Tiff)
        } else {
            None
        }
    }
}

/// Reader that accepts PNG and TIFF input.
pub struct StandardImageReader;

impl ImageReader for StandardImageReader {
    fn read_image(&self, data: &[u8]) -> Result<SampleGrid> {
        debug!("Decoding image, {} bytes", data.len());

        match ImageFormat::sniff(data) {
            Some(ImageFormat::Png) => png_format::decode(data),
            Some(ImageFormat::Tiff) => tiff_format::decode(data),
            None => Err(PipelineError::UnsupportedFormat(
                "unrecognised image signature".to_string(),
            )),
        }
    }
}
