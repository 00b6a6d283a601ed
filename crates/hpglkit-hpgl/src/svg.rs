//! SVG preview export
//!
//! Renders a drawing at 1:1 scale in millimeters:
//! - one stroke per pen-up travel move (including the run out from and
//!   back to the origin)
//! - one stroke per cut path
//! - the bounding box as a rectangle

use hpglkit_core::{plotter_to_mm, Drawing, Point};
use serde::{Deserialize, Serialize};

/// Stroke colors and width for the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgStyle {
    pub travel_color: String,
    pub cut_color: String,
    pub bounds_color: String,
    /// Stroke width in millimeters
    pub stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            travel_color: "#0000ff".to_string(),
            cut_color: "#ff0000".to_string(),
            bounds_color: "#ffa500".to_string(),
            stroke_width: 0.1,
        }
    }
}

/// SVG preview renderer
#[derive(Debug, Clone, Default)]
pub struct SvgPreview {
    style: SvgStyle,
}

impl SvgPreview {
    pub fn new(style: SvgStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &SvgStyle {
        &self.style
    }

    fn stroke(&self, color: &str) -> String {
        format!(
            "stroke:{};stroke-opacity:.8;fill:none;stroke-width:{};",
            color, self.style.stroke_width
        )
    }

    fn path_element(&self, color: &str, points: &[Point]) -> String {
        let mut d = String::new();
        for (i, p) in points.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            d.push_str(&format!(
                "{} {:.3},{:.3}",
                cmd,
                plotter_to_mm(p.x),
                plotter_to_mm(p.y)
            ));
        }
        format!("<path style=\"{}\" d=\"{}\"/>\n", self.stroke(color), d)
    }

    /// Render the drawing as a standalone SVG document
    pub fn render(&self, drawing: &Drawing) -> String {
        let bbox = drawing.bounding_box();
        let (width, height) = bbox
            .map(|b| (plotter_to_mm(b.max.x), plotter_to_mm(b.max.y)))
            .unwrap_or((0.0, 0.0));

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.3}mm\" height=\"{h:.3}mm\" viewBox=\"0 0 {w:.3} {h:.3}\">\n",
            w = width,
            h = height
        ));

        let mut last = Point::ORIGIN;
        for path in drawing {
            svg.push_str(&self.path_element(&self.style.travel_color, &[last, path.start()]));
            svg.push_str(&self.path_element(&self.style.cut_color, path.points()));
            last = path.stop();
        }
        svg.push_str(&self.path_element(&self.style.travel_color, &[last, Point::ORIGIN]));

        if let Some(b) = bbox {
            svg.push_str(&format!(
                "<rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\" style=\"{}\"/>\n",
                plotter_to_mm(b.min.x),
                plotter_to_mm(b.min.y),
                plotter_to_mm(b.width()),
                plotter_to_mm(b.height()),
                self.stroke(&self.style.bounds_color)
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Render a drawing with the default style
pub fn to_svg(drawing: &Drawing) -> String {
    SvgPreview::default().render(drawing)
}
