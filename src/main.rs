use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use median_composite_rs::image_pipeline::discovery::{
    DEFAULT_GROUP_PATTERN, DEFAULT_MEMBER_PATTERN, DEFAULT_OUTPUT_FILE_NAME,
};
use median_composite_rs::image_pipeline::{
    CompositeConfig, GlobDiscovery, MedianCompositePipeline, MedianRounding, OutputFormat,
    TiffCompression, WorkUnit,
};
use median_composite_rs::logger;

use tracing::info;

#[derive(Parser)]
#[command(name = "median_composite", about = "Per-channel median composite of image bursts")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    #[command(flatten)]
    options: CompositeOptions,
}

#[derive(Subcommand)]
enum Cmd {
    /// Composite every group directory matching a pattern
    Batch {
        /// Glob selecting the group directories
        #[arg(long, default_value = DEFAULT_GROUP_PATTERN)]
        groups: String,
        /// Glob selecting member images inside each group
        #[arg(long, default_value = DEFAULT_MEMBER_PATTERN)]
        members: String,
        /// File name of the composite written into each group
        #[arg(long, default_value = DEFAULT_OUTPUT_FILE_NAME)]
        output_name: String,
    },
    /// Composite an explicit list of images
    Compose {
        /// Where to write the composite
        #[arg(short, long)]
        output: PathBuf,
        /// Member images, all the same size and depth
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct CompositeOptions {
    /// Rounding for the average of the two central samples
    #[arg(long, global = true, value_enum, default_value_t = RoundingArg::Floor)]
    rounding: RoundingArg,
    /// Compression used for TIFF output
    #[arg(long, global = true, value_enum, default_value_t = CompressionArg::Lzw)]
    compression: CompressionArg,
    /// Reject images wider or taller than this
    #[arg(long, global = true)]
    max_dimension: Option<usize>,
    /// Stop at the first failed group
    #[arg(long, global = true)]
    fail_fast: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoundingArg {
    Floor,
    Nearest,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    Deflate,
}

impl CompositeOptions {
    fn to_config(&self, output_format: OutputFormat) -> CompositeConfig {
        let rounding = match self.rounding {
            RoundingArg::Floor => MedianRounding::Floor,
            RoundingArg::Nearest => MedianRounding::Nearest,
        };
        let compression = match self.compression {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::Deflate => TiffCompression::Deflate,
        };

        let mut builder = CompositeConfig::builder()
            .rounding(rounding)
            .compression(compression)
            .output_format(output_format)
            .fail_fast(self.fail_fast);
        if let Some(max) = self.max_dimension {
            builder = builder.max_dimension(Some(max));
        }
        builder.build()
    }
}

fn output_format_for(path: &Path) -> anyhow::Result<OutputFormat> {
    match OutputFormat::from_path(path) {
        Some(format) => Ok(format),
        None => bail!(
            "cannot infer output format from {}, use a .png, .tif or .tiff name",
            path.display()
        ),
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let cli = Cli::parse();

    let (units, output_format) = match &cli.command {
        Cmd::Batch { groups, members, output_name } => {
            let format = output_format_for(Path::new(output_name))?;
            let discovery = GlobDiscovery::new(groups.as_str(), members.as_str(), output_name.as_str());
            let units = discovery
                .discover()
                .with_context(|| format!("discovering groups matching {}", groups))?;
            (units, format)
        }
        Cmd::Compose { output, inputs } => {
            let format = output_format_for(output)?;
            (vec![WorkUnit::new(inputs.clone(), output.clone())], format)
        }
    };

    let pipeline = MedianCompositePipeline::new(cli.options.to_config(output_format));
    info!(
        "Rounding: {:?}, output format: {:?}",
        pipeline.config().rounding,
        pipeline.config().output_format
    );

    let report = pipeline.run(&units);
    if !report.is_success() {
        bail!("{}", report);
    }

    Ok(())
}
