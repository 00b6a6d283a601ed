//! Drawing transforms
//!
//! Coordinate-wise operations over a whole drawing: translation, scaling,
//! mirroring about the drawing's own bounding edge, fitting to the origin,
//! and tiling. Every operation returns a new drawing and leaves the input
//! alone. An empty drawing passes through unchanged.

use hpglkit_core::{mm_to_plotter, Drawing, Path};
use tracing::debug;

use crate::error::{require_positive, CamToolError, CamToolResult};

/// Axis a tiling or mirror operation works along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Whole-drawing transforms
#[derive(Debug)]
pub struct DrawingTransform;

impl DrawingTransform {
    /// Offset every point by `(dx, dy)` plotter units
    pub fn translate(drawing: &Drawing, dx: f64, dy: f64) -> Drawing {
        drawing.map_points(|p| p.translate(dx, dy))
    }

    /// Multiply every coordinate, about the origin
    pub fn scale(drawing: &Drawing, fx: f64, fy: f64) -> Drawing {
        drawing.map_points(|p| p.scale(fx, fy))
    }

    /// Flip horizontally about the drawing's right edge
    ///
    /// `x' = max - x`: negate, then shift back by the old maximum. The
    /// result spans `0..=width`, so a second flip restores the original
    /// coordinates up to a shift of `-min`.
    pub fn mirror_x(drawing: &Drawing) -> Drawing {
        Self::mirror(drawing, Axis::X)
    }

    /// Flip vertically about the drawing's top edge, `y' = max - y`
    pub fn mirror_y(drawing: &Drawing) -> Drawing {
        Self::mirror(drawing, Axis::Y)
    }

    pub fn mirror(drawing: &Drawing, axis: Axis) -> Drawing {
        let Some(bbox) = drawing.bounding_box() else {
            return drawing.clone();
        };
        match axis {
            Axis::X => {
                let max_x = bbox.max.x;
                drawing.map_points(|p| p.scale(-1.0, 1.0).translate(max_x, 0.0))
            }
            Axis::Y => {
                let max_y = bbox.max.y;
                drawing.map_points(|p| p.scale(1.0, -1.0).translate(0.0, max_y))
            }
        }
    }

    /// Move the drawing so its bounding box starts at the origin
    pub fn fit(drawing: &Drawing) -> Drawing {
        match drawing.bounding_box() {
            Some(bbox) => Self::translate(drawing, -bbox.min.x, -bbox.min.y),
            None => drawing.clone(),
        }
    }

    /// Fit to the origin, then scale uniformly so the drawing is
    /// `width_mm` wide
    ///
    /// # Errors
    /// A non-positive width is a parameter error; a drawing with no
    /// horizontal extent cannot be scaled to any width.
    pub fn scale_to_width(drawing: &Drawing, width_mm: f64) -> CamToolResult<Drawing> {
        require_positive("width", width_mm)?;

        let fitted = Self::fit(drawing);
        let Some(bbox) = fitted.bounding_box() else {
            return Ok(fitted);
        };
        if bbox.max.x == 0.0 {
            return Err(CamToolError::GeometryError(
                "cannot scale a drawing with zero width".to_string(),
            ));
        }

        let factor = mm_to_plotter(width_mm) / bbox.max.x;
        debug!(width_mm, factor, "scaling to width");
        Ok(Self::scale(&fitted, factor, factor))
    }

    /// Shift the drawing by a margin given in millimeters
    pub fn add_margin(drawing: &Drawing, x_mm: f64, y_mm: f64) -> Drawing {
        Self::translate(drawing, mm_to_plotter(x_mm), mm_to_plotter(y_mm))
    }

    /// Repeat the drawing `count` times along X
    pub fn multiply_x(drawing: &Drawing, delta_mm: f64, count: usize) -> Drawing {
        Self::multiply(drawing, Axis::X, delta_mm, count)
    }

    /// Repeat the drawing `count` times along Y
    pub fn multiply_y(drawing: &Drawing, delta_mm: f64, count: usize) -> Drawing {
        Self::multiply(drawing, Axis::Y, delta_mm, count)
    }

    /// Tile the drawing
    ///
    /// Copy `k` (0-based) is offset by `k * (max + delta)` along the axis,
    /// where `max` is the drawing's maximum coordinate on that axis. Copies
    /// are emitted in ascending order, the untouched original first.
    /// A `count` below 2 returns the drawing as is.
    pub fn multiply(drawing: &Drawing, axis: Axis, delta_mm: f64, count: usize) -> Drawing {
        let Some(bbox) = drawing.bounding_box() else {
            return drawing.clone();
        };
        if count < 2 {
            return drawing.clone();
        }

        let delta = mm_to_plotter(delta_mm);
        let step = match axis {
            Axis::X => bbox.max.x + delta,
            Axis::Y => bbox.max.y + delta,
        };

        let tiled: Drawing = (0..count)
            .flat_map(|k| {
                let offset = k as f64 * step;
                let (dx, dy) = match axis {
                    Axis::X => (offset, 0.0),
                    Axis::Y => (0.0, offset),
                };
                drawing
                    .iter()
                    .map(move |path| path.map_points(|p| p.translate(dx, dy)))
                    .collect::<Vec<Path>>()
            })
            .collect();

        debug!(?axis, count, step, paths = tiled.len(), "tiled drawing");
        tiled
    }
}
