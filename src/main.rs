use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hpglkit::{
    init_logging_with_level, job_summary, load_drawing, save_hpgl, save_svg, to_hpgl, Config,
    Operation, PlotPipeline,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "hpglkit")]
#[command(about = "HPGL modification and optimization tool", long_about = None)]
#[command(version)]
struct Cli {
    /// The HPGL file to edit
    file: PathBuf,

    /// Generate an SVG preview file
    #[arg(short = 'p', long, value_name = "SVG")]
    preview: Option<PathBuf>,

    /// Output HPGL file (stdout when neither this nor the config names one)
    #[arg(short = 'o', long, value_name = "HPGL")]
    output: Option<PathBuf>,

    /// Job configuration (.json or .toml) with the operations to apply
    #[arg(short = 'c', long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Scale the drawing to this width in mm before anything else
    #[arg(short = 'w', long, value_name = "MM")]
    width: Option<f64>,

    /// Mirror the drawing horizontally
    #[arg(short = 'm', long)]
    mirror: bool,

    /// Prepare for a drag knife with this blade offset in mm
    #[arg(long, value_name = "MM", num_args = 0..=1, default_missing_value = "0.25", conflicts_with = "pen")]
    knife: Option<f64>,

    /// Prepare for a pen (no blade compensation)
    #[arg(long)]
    pen: bool,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    /// Operations requested on the command line, ahead of any preset or
    /// config job
    fn pipeline(&self, config: &Config) -> PlotPipeline {
        let mut pipeline = PlotPipeline::new();
        if let Some(width_mm) = self.width {
            pipeline.push(Operation::ScaleToWidth { width_mm });
        }
        if self.mirror {
            pipeline.push(Operation::MirrorX);
        }

        let job = if let Some(offset_mm) = self.knife {
            Config::knife_preset(offset_mm).job
        } else if self.pen {
            Config::pen_preset().job
        } else {
            config.job.clone()
        };
        pipeline.extend(job.operations().iter().cloned());
        pipeline
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    init_logging_with_level(level)?;

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::new(),
    };

    let outcome = load_drawing(&cli.file)
        .with_context(|| format!("no/wrong/empty file given: {}", cli.file.display()))?;
    if !outcome.is_clean() {
        warn!(
            "{} of {} commands were not understood and skipped",
            outcome.diagnostics.len(),
            outcome.commands + outcome.diagnostics.len()
        );
    }

    let drawing = cli.pipeline(&config).apply(&outcome.drawing)?;

    info!("Plotting file: {}", cli.file.display());
    for line in job_summary(&drawing, config.output.measurement_system) {
        info!("{}", line);
    }

    let preview = cli.preview.clone().or_else(|| {
        config
            .output
            .svg_preview
            .then(|| config.output.svg_path.clone())
            .flatten()
    });
    if let Some(path) = preview {
        save_svg(&path, &drawing)?;
        info!("Preview written to {}", path.display());
    }

    match cli.output.clone().or_else(|| config.output.hpgl_path.clone()) {
        Some(path) => {
            save_hpgl(&path, &drawing)?;
            info!("HPGL written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(to_hpgl(&drawing).as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
