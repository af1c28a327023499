use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::CompositeConfig;
use crate::image_pipeline::grid::SampleGrid;

pub trait ImageWriter {
    fn write_image(&self, image: &SampleGrid, output: &mut dyn Write, config: &CompositeConfig) -> Result<()>;
}
