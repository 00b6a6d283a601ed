//! # hpglkit CAM Tools
//!
//! Drawing preparation for pen and knife plotters.
//!
//! ## Tools Included
//!
//! - **Transform**: translate, scale, mirror, fit, margins, and tiling
//! - **Optimizer**: point reduction, seam relocation, and drag-knife blade
//!   offset compensation
//! - **Routing**: nearest-neighbour and row-sweep path ordering
//!
//! ## Supporting Infrastructure
//!
//! - **Pipeline**: serializable operation lists applied in sequence
//! - **Errors**: parameter validation and geometry errors

pub mod error;
pub mod optimizer;
pub mod pipeline;
pub mod routing;
pub mod transform;

pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use optimizer::{PathOptimizer, BLADE_CORNER_THRESHOLD};
pub use pipeline::{Operation, PlotPipeline};
pub use routing::{
    row_index, PathAnchor, PathRouter, DEFAULT_ROW_SIZE, DEFAULT_X_WEIGHT, DEFAULT_Y_WEIGHT,
};
pub use transform::{Axis, DrawingTransform};
