use tracing::{debug, error, info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    codec::{ImageReader, ImageWriter, StandardImageReader, StandardImageWriter},
    common::error::{PipelineError, Result},
    config::CompositeConfig,
    conversions::{BatchReport, PipelineTimings},
    discovery::WorkUnit,
    grid::{PixelGrid, Sample, SampleDepth, SampleGrid},
    median::{CompositionError, MedianCompositor},
};

pub struct MedianCompositePipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: CompositeConfig,
}

impl MedianCompositePipeline<StandardImageReader, StandardImageWriter> {
    pub fn new(config: CompositeConfig) -> Self {
        Self {
            reader: StandardImageReader,
            writer: StandardImageWriter,
            config,
        }
    }
}

/// Unwraps every image as `T`, failing on the first one of another depth.
fn compose_uniform<T: Sample>(
    compositor: MedianCompositor,
    images: Vec<SampleGrid>,
) -> Result<SampleGrid> {
    let grids = images
        .into_iter()
        .enumerate()
        .map(|(index, image)| {
            T::from_sample_grid(image).map_err(|other| PipelineError::MixedSampleDepth {
                index,
                expected: T::DEPTH,
                found: other.depth(),
            })
        })
        .collect::<Result<Vec<PixelGrid<T>>>>()?;

    Ok(T::into_sample_grid(compositor.compose(&grids)?))
}

impl<R: ImageReader, W: ImageWriter> MedianCompositePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CompositeConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn compositor(&self) -> MedianCompositor {
        MedianCompositor::new(self.config.rounding)
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(PipelineError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes and validates every member. The returned images live only as
    /// long as the caller's composition step.
    fn decode_group<I: AsRef<[u8]>>(
        &self,
        inputs: &[I],
        timings: &mut PipelineTimings,
    ) -> Result<Vec<SampleGrid>> {
        let mut images = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            let image = timings.record("decode", || self.reader.read_image(input.as_ref()))?;
            let (width, height) = image.dimensions();
            debug!("Member {}: {}x{} ({})", index, width, height, image.depth());

            timings.record("validate_dimensions", || self.validate_dimensions(width, height))?;
            images.push(image);
        }
        Ok(images)
    }

    fn compose_decoded(&self, images: Vec<SampleGrid>) -> Result<SampleGrid> {
        let depth = match images.first() {
            Some(first) => first.depth(),
            None => return Err(CompositionError::EmptyGroup.into()),
        };

        match depth {
            SampleDepth::Eight => compose_uniform::<u8>(self.compositor(), images),
            SampleDepth::Sixteen => compose_uniform::<u16>(self.compositor(), images),
        }
    }

    fn compose_timed<I: AsRef<[u8]>>(
        &self,
        inputs: &[I],
        timings: &mut PipelineTimings,
    ) -> Result<SampleGrid> {
        if inputs.is_empty() {
            return Err(CompositionError::EmptyGroup.into());
        }

        let images = self.decode_group(inputs, timings)?;
        timings.record("compose", || self.compose_decoded(images))
    }

    /// Decodes `inputs` and returns their per-channel median composite.
    #[instrument(skip_all, fields(members = inputs.len()))]
    pub fn compose<I: AsRef<[u8]>>(&self, inputs: &[I]) -> Result<SampleGrid> {
        let mut timings = PipelineTimings::new();
        self.compose_timed(inputs, &mut timings)
    }

    /// Composes `inputs` and encodes the result into `output`.
    pub fn compose_to<I: AsRef<[u8]>>(&self, inputs: &[I], output: &mut dyn Write) -> Result<()> {
        self.compose_with_timings(inputs, output)?;
        Ok(())
    }

    #[instrument(skip_all, fields(members = inputs.len()))]
    pub fn compose_with_timings<I: AsRef<[u8]>>(
        &self,
        inputs: &[I],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting median composite of {} images", inputs.len());

        let composite = self.compose_timed(inputs, &mut timings)?;

        timings.record("encode", || self.writer.write_image(&composite, output, &self.config))?;

        let (width, height) = composite.dimensions();
        info!(
            "Composite complete: {}x{} {} in {:.3}ms",
            width,
            height,
            composite.depth(),
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Reads `members` from disk and writes their composite to `output_path`.
    ///
    /// The output file is only created once the composite has been encoded,
    /// so a failed group leaves nothing behind.
    pub fn compose_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        members: &[P],
        output_path: Q,
    ) -> Result<()> {
        self.compose_files_with_timings(members, output_path)?;
        Ok(())
    }

    #[instrument(skip_all, fields(output = %output_path.as_ref().display()))]
    pub fn compose_files_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        members: &[P],
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let output_path = output_path.as_ref();
        info!(
            "Composing {} files -> {}",
            members.len(),
            output_path.display()
        );

        let mut timings = PipelineTimings::new();

        let mut inputs = Vec::with_capacity(members.len());
        for member in members {
            let member = member.as_ref();
            let data = timings.record("read_input_file", || std::fs::read(member)).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", member.display(), e))
            })?;
            inputs.push(data);
        }

        let mut encoded = Vec::new();
        let conversion_timings = self.compose_with_timings(&inputs, &mut encoded)?;
        for step in conversion_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        timings
            .record("write_output_file", || std::fs::write(output_path, &encoded))
            .map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;

        Ok(timings)
    }

    /// Composes one discovered group.
    pub fn process_unit(&self, unit: &WorkUnit) -> Result<PipelineTimings> {
        self.compose_files_with_timings(&unit.members, &unit.output)
    }

    /// Processes every unit in order. A failed unit is logged and recorded;
    /// later units still run unless `fail_fast` is set.
    pub fn run(&self, units: &[WorkUnit]) -> BatchReport {
        let mut report = BatchReport::default();

        for (position, unit) in units.iter().enumerate() {
            let label = unit
                .output
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(&unit.output)
                .display();
            match self.process_unit(unit) {
                Ok(timings) => {
                    info!("{} done", label);
                    timings.log_summary();
                    report.completed.push(unit.output.clone());
                }
                Err(e) => {
                    error!("{} failed: {}", label, e);
                    report.failed.push((unit.output.clone(), e));
                    if self.config.fail_fast {
                        report.skipped = units.len() - position - 1;
                        warn!("Stopping batch, {} groups not processed", report.skipped);
                        break;
                    }
                }
            }
        }

        info!(
            "Batch finished: {} completed, {} failed, {} skipped",
            report.completed.len(),
            report.failed.len(),
            report.skipped
        );
        report
    }

    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CompositeConfig) {
        self.config = config;
    }
}
