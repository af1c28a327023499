use std::io::Write;
use tracing::debug;
use crate::image_pipeline::codec::writer::ImageWriter;
use crate::image_pipeline::codec::{png_format, tiff_format};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::{CompositeConfig, OutputFormat};
use crate::image_pipeline::grid::SampleGrid;

pub struct StandardImageWriter;

impl ImageWriter for StandardImageWriter {
    fn write_image(&self, image: &SampleGrid, output: &mut dyn Write, config: &CompositeConfig) -> Result<()> {
        let (width, height) = image.dimensions();
        debug!(
            "Encoding {:?} image: {}x{} ({})",
            config.output_format, width, height, image.depth()
        );

        let buffer = match config.output_format {
            OutputFormat::Png => png_format::encode(image)?,
            OutputFormat::Tiff => tiff_format::encode(image, config)?,
        };

        output.write_all(&buffer)?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
