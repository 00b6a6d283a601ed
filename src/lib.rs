//! # hpglkit
//!
//! HPGL preparation for pen and cutting plotters:
//! - Parsing of the HPGL subset plotter jobs use (PU/PD/PA/SP/IN)
//! - Transforms: scale, mirror, fit, margins, tiling
//! - Drag-knife optimizations: seam relocation and blade offset
//! - Travel-reducing path routing
//! - HPGL and SVG preview export
//!
//! ## Architecture
//!
//! hpglkit is organized as a workspace with multiple crates:
//!
//! 1. **hpglkit-core** - Geometry, units, the path/drawing model, errors
//! 2. **hpglkit-hpgl** - HPGL parser and writer, SVG preview, file I/O
//! 3. **hpglkit-camtools** - Transforms, optimizer, routing, pipelines
//! 4. **hpglkit-settings** - Job configuration files
//! 5. **hpglkit** - Logging setup and the command-line converter

pub use hpglkit_camtools::{
    Axis, CamToolError, CamToolResult, DrawingTransform, Operation, ParameterError, PathAnchor,
    PathOptimizer, PathRouter, PlotPipeline,
};
pub use hpglkit_core::{
    format_length, mm_to_plotter, plotter_to_mm, BoundingBox, Drawing, Error, HpglError,
    MeasurementSystem, Path, Point, Result,
};
pub use hpglkit_hpgl::{
    load_drawing, parse_drawing, save_hpgl, save_svg, to_hpgl, to_svg, HpglCommand, HpglParser,
    ParseOutcome,
};
pub use hpglkit_settings::{Config, OutputSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, leaving stdout for HPGL
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with_level(tracing::Level::INFO)
}

/// Initialize logging, using `level` when RUST_LOG is not set
pub fn init_logging_with_level(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Human-readable job summary: plotting area, its surface, and total
/// head movement
pub fn job_summary(drawing: &Drawing, system: MeasurementSystem) -> Vec<String> {
    let Some((width, height)) = drawing.size_mm() else {
        return vec!["Drawing is empty".to_string()];
    };
    let (travel, draw) = drawing.length_mm();

    let area = match system {
        MeasurementSystem::Metric => format!("{:.1} cm²", width / 10.0 * height / 10.0),
        MeasurementSystem::Imperial => format!(
            "{:.2} in²",
            width / hpglkit_core::MM_PER_INCH * height / hpglkit_core::MM_PER_INCH
        ),
    };

    vec![
        format!(
            "Plotting area is {} x {}",
            format_length(width, system),
            format_length(height, system)
        ),
        format!(" -> Total area:     {}", area),
        format!(
            " -> Total movement: {} ({} cutting, {} travel)",
            format_length(travel + draw, system),
            format_length(draw, system),
            format_length(travel, system)
        ),
        format!(
            " -> {} paths, {} points",
            drawing.path_count(),
            drawing.point_count()
        ),
    ]
}
