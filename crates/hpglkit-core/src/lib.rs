//! # hpglkit Core
//!
//! Core types and utilities for hpglkit.
//! Provides the geometry primitives, plotter unit conversion, and the
//! path/drawing model that the parser, the CAM tools and the exporters
//! all operate on.

pub mod drawing;
pub mod error;
pub mod geometry;
pub mod units;

pub use drawing::{BoundingBox, Drawing, Path};
pub use error::{Error, HpglError, Result};
pub use geometry::{extend, is_straight, vertex_angle, Point};
pub use units::{
    format_length, mm_to_plotter, plotter_to_mm, MeasurementSystem, MM_PER_INCH,
    PLOTTER_UNITS_PER_INCH,
};
