//! Drawing operation pipeline
//!
//! An [`Operation`] names one transform, optimization, or routing step
//! together with its parameters, so a whole preparation job can be kept
//! in a config file and replayed. [`PlotPipeline`] runs a list of them.

use hpglkit_core::Drawing;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{
    require_any, require_non_negative, require_non_zero, require_positive, CamToolResult,
    ParameterError, ParameterResult,
};
use crate::optimizer::PathOptimizer;
use crate::routing::{PathAnchor, PathRouter, DEFAULT_ROW_SIZE, DEFAULT_X_WEIGHT, DEFAULT_Y_WEIGHT};
use crate::transform::DrawingTransform;

fn default_x_weight() -> f64 {
    DEFAULT_X_WEIGHT
}

fn default_y_weight() -> f64 {
    DEFAULT_Y_WEIGHT
}

fn default_row_size() -> f64 {
    DEFAULT_ROW_SIZE
}

fn default_nearest_anchor() -> PathAnchor {
    PathAnchor::Center
}

/// One step of a drawing preparation job
///
/// Distances suffixed `_mm` are millimeters; `dx`/`dy` and `row_size` are
/// plotter units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Translate {
        dx: f64,
        dy: f64,
    },
    /// `fy` defaults to `fx`
    Scale {
        fx: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fy: Option<f64>,
    },
    MirrorX,
    MirrorY,
    Fit,
    ScaleToWidth {
        width_mm: f64,
    },
    AddMargin {
        x_mm: f64,
        y_mm: f64,
    },
    MultiplyX {
        delta_mm: f64,
        count: usize,
    },
    MultiplyY {
        delta_mm: f64,
        count: usize,
    },
    Optimize,
    OptimizeCut {
        offset_mm: f64,
    },
    BladeOffset {
        offset_mm: f64,
    },
    RerouteNearest {
        #[serde(default = "default_x_weight")]
        x_weight: f64,
        #[serde(default = "default_y_weight")]
        y_weight: f64,
        #[serde(default = "default_nearest_anchor")]
        anchor: PathAnchor,
    },
    RerouteXy {
        #[serde(default = "default_row_size")]
        row_size: f64,
        #[serde(default)]
        anchor: PathAnchor,
    },
}

impl Operation {
    /// Nearest-neighbour routing with the usual weights
    pub fn reroute_nearest() -> Self {
        Operation::RerouteNearest {
            x_weight: DEFAULT_X_WEIGHT,
            y_weight: DEFAULT_Y_WEIGHT,
            anchor: default_nearest_anchor(),
        }
    }

    /// Row sweep with the usual row height
    pub fn reroute_xy() -> Self {
        Operation::RerouteXy {
            row_size: DEFAULT_ROW_SIZE,
            anchor: PathAnchor::StartStop,
        }
    }

    /// Short name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Translate { .. } => "translate",
            Operation::Scale { .. } => "scale",
            Operation::MirrorX => "mirror_x",
            Operation::MirrorY => "mirror_y",
            Operation::Fit => "fit",
            Operation::ScaleToWidth { .. } => "scale_to_width",
            Operation::AddMargin { .. } => "add_margin",
            Operation::MultiplyX { .. } => "multiply_x",
            Operation::MultiplyY { .. } => "multiply_y",
            Operation::Optimize => "optimize",
            Operation::OptimizeCut { .. } => "optimize_cut",
            Operation::BladeOffset { .. } => "blade_offset",
            Operation::RerouteNearest { .. } => "reroute_nearest",
            Operation::RerouteXy { .. } => "reroute_xy",
        }
    }

    /// Check the parameters without touching a drawing
    pub fn validate(&self) -> ParameterResult<()> {
        match self {
            Operation::Translate { dx, dy } => {
                require_any("dx", *dx)?;
                require_any("dy", *dy)
            }
            Operation::Scale { fx, fy } => {
                require_non_zero("fx", *fx)?;
                fy.map_or(Ok(()), |fy| require_non_zero("fy", fy))
            }
            Operation::MirrorX | Operation::MirrorY | Operation::Fit | Operation::Optimize => {
                Ok(())
            }
            Operation::ScaleToWidth { width_mm } => require_positive("width_mm", *width_mm),
            Operation::AddMargin { x_mm, y_mm } => {
                require_any("x_mm", *x_mm)?;
                require_any("y_mm", *y_mm)
            }
            Operation::MultiplyX { delta_mm, count } | Operation::MultiplyY { delta_mm, count } => {
                require_any("delta_mm", *delta_mm)?;
                if *count == 0 {
                    return Err(ParameterError::OutOfRange {
                        name: "count".to_string(),
                        value: 0.0,
                        min: 1.0,
                        max: f64::INFINITY,
                    });
                }
                Ok(())
            }
            Operation::OptimizeCut { offset_mm } | Operation::BladeOffset { offset_mm } => {
                require_non_negative("offset_mm", *offset_mm)
            }
            Operation::RerouteNearest {
                x_weight, y_weight, ..
            } => {
                require_non_negative("x_weight", *x_weight)?;
                require_non_negative("y_weight", *y_weight)
            }
            Operation::RerouteXy { row_size, .. } => require_positive("row_size", *row_size),
        }
    }

    /// Run this step, producing a new drawing
    pub fn apply(&self, drawing: &Drawing) -> CamToolResult<Drawing> {
        let result = match self {
            Operation::Translate { dx, dy } => DrawingTransform::translate(drawing, *dx, *dy),
            Operation::Scale { fx, fy } => {
                DrawingTransform::scale(drawing, *fx, fy.unwrap_or(*fx))
            }
            Operation::MirrorX => DrawingTransform::mirror_x(drawing),
            Operation::MirrorY => DrawingTransform::mirror_y(drawing),
            Operation::Fit => DrawingTransform::fit(drawing),
            Operation::ScaleToWidth { width_mm } => {
                DrawingTransform::scale_to_width(drawing, *width_mm)?
            }
            Operation::AddMargin { x_mm, y_mm } => {
                DrawingTransform::add_margin(drawing, *x_mm, *y_mm)
            }
            Operation::MultiplyX { delta_mm, count } => {
                DrawingTransform::multiply_x(drawing, *delta_mm, *count)
            }
            Operation::MultiplyY { delta_mm, count } => {
                DrawingTransform::multiply_y(drawing, *delta_mm, *count)
            }
            Operation::Optimize => PathOptimizer::optimize(drawing),
            Operation::OptimizeCut { offset_mm } => {
                PathOptimizer::optimize_cut(drawing, *offset_mm)?
            }
            Operation::BladeOffset { offset_mm } => {
                PathOptimizer::blade_offset(drawing, *offset_mm)?
            }
            Operation::RerouteNearest {
                x_weight,
                y_weight,
                anchor,
            } => PathRouter::reroute_nearest(drawing, *x_weight, *y_weight, *anchor)?,
            Operation::RerouteXy { row_size, anchor } => {
                PathRouter::reroute_xy(drawing, *row_size, *anchor)?
            }
        };
        Ok(result)
    }
}

/// Ordered list of operations applied to a drawing
///
/// # Example
/// ```ignore
/// let pipeline = PlotPipeline::new()
///     .with(Operation::Optimize)
///     .with(Operation::Fit)
///     .with(Operation::reroute_xy());
///
/// let prepared = pipeline.apply(&drawing)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotPipeline {
    operations: Vec<Operation>,
}

impl PlotPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation, builder style
    pub fn with(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn push(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Validate every operation
    pub fn validate(&self) -> ParameterResult<()> {
        self.operations.iter().try_for_each(Operation::validate)
    }

    /// Validate everything, then run the operations in order
    ///
    /// Nothing is applied when any operation is invalid.
    pub fn apply(&self, drawing: &Drawing) -> CamToolResult<Drawing> {
        self.validate()?;

        let mut current = drawing.clone();
        for (step, operation) in self.operations.iter().enumerate() {
            current = operation.apply(&current)?;
            debug!(
                step,
                operation = operation.name(),
                paths = current.len(),
                points = current.point_count(),
                "applied operation"
            );
        }

        info!(
            operations = self.operations.len(),
            paths = current.len(),
            "pipeline complete"
        );
        Ok(current)
    }

    /// Parse a pipeline from a JSON array of operations
    pub fn from_json(json: &str) -> CamToolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> CamToolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<Operation> for PlotPipeline {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl Extend<Operation> for PlotPipeline {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        self.operations.extend(iter);
    }
}
