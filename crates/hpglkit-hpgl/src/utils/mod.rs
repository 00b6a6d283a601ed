//! Utilities

pub mod file_io;

pub use file_io::{load_drawing, save_hpgl, save_svg, HpglFileReader};
