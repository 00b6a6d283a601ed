//! # hpglkit HPGL
//!
//! HPGL command decoding, path reconstruction, serialization, and SVG
//! preview export for hpglkit.

pub mod hpgl;
pub mod svg;
pub mod utils;

pub use hpgl::{
    parse_drawing, to_hpgl, HpglCommand, HpglParser, HpglWriter, ParseDiagnostic, ParseOutcome,
    PathBuilder,
};
pub use svg::{to_svg, SvgPreview, SvgStyle};
pub use utils::{load_drawing, save_hpgl, save_svg, HpglFileReader};
