//! Path and drawing model
//!
//! A [`Drawing`] is the ordered list of pen-down strokes ([`Path`]s) that a
//! plot job consists of. Pen-up travel is never stored; it is implied by
//! the gap between one path's last point and the next path's first point,
//! with the origin before the first path and after the last.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::HpglError;
use crate::geometry::Point;
use crate::units::plotter_to_mm;

/// One continuous pen-down stroke
///
/// Always holds at least two points. It is closed when the first and last
/// point coincide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Build a path, or `None` when fewer than two points are given
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.len() < 2 {
            trace!(points = points.len(), "rejected degenerate path");
            return None;
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn stop(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn is_closed(&self) -> bool {
        self.start() == self.stop()
    }

    /// Sum of segment lengths in plotter units
    pub fn draw_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }

    /// Apply `f` to every point
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Path {
        Path {
            points: self.points.iter().copied().map(f).collect(),
        }
    }

    /// Bounding box of this path alone
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::from_point(self.points[0]);
        for p in &self.points[1..] {
            bbox.include(*p);
        }
        bbox
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = HpglError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        let count = points.len();
        Path::new(points).ok_or(HpglError::DegeneratePath { points: count })
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.points
    }
}

/// Axis-aligned bounding box in plotter units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut merged = *self;
        merged.include(other.min);
        merged.include(other.max);
        merged
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// An ordered collection of paths
///
/// Order is plot order. Operations never edit a drawing in place; they
/// hand back a new one, so callers holding an older drawing keep it intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    paths: Vec<Path>,
}

impl Drawing {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Number of paths, same as [`Drawing::len`]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Total number of points across all paths
    pub fn point_count(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }

    /// Apply `f` to every point of every path
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Drawing {
        Drawing {
            paths: self.paths.iter().map(|path| path.map_points(&f)).collect(),
        }
    }

    /// Rewrite each path independently
    pub fn map_paths(&self, f: impl FnMut(&Path) -> Path) -> Drawing {
        Drawing {
            paths: self.paths.iter().map(f).collect(),
        }
    }

    /// Rewrite each path independently, dropping paths for which `f`
    /// returns `None`
    pub fn filter_map_paths(&self, f: impl FnMut(&Path) -> Option<Path>) -> Drawing {
        Drawing {
            paths: self.paths.iter().filter_map(f).collect(),
        }
    }

    /// Bounding box over all points, `None` for an empty drawing
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.paths
            .iter()
            .map(Path::bounding_box)
            .reduce(|acc, bbox| acc.union(&bbox))
    }

    /// Pen-up distance in plotter units, including the run out from the
    /// origin and the return to it
    pub fn travel_length(&self) -> f64 {
        let mut last = Point::ORIGIN;
        let mut travel = 0.0;
        for path in &self.paths {
            travel += last.distance_to(&path.start());
            last = path.stop();
        }
        travel + last.distance_to(&Point::ORIGIN)
    }

    /// Pen-down distance in plotter units
    pub fn draw_length(&self) -> f64 {
        self.paths.iter().map(Path::draw_length).sum()
    }

    /// `(travel, draw)` lengths in millimeters
    pub fn length_mm(&self) -> (f64, f64) {
        (
            plotter_to_mm(self.travel_length()),
            plotter_to_mm(self.draw_length()),
        )
    }

    /// Plotting area from the origin to the maximum corner, in millimeters
    pub fn size_mm(&self) -> Option<(f64, f64)> {
        self.bounding_box()
            .map(|bbox| (plotter_to_mm(bbox.max.x), plotter_to_mm(bbox.max.y)))
    }
}

impl FromIterator<Path> for Drawing {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Drawing {
            paths: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl IntoIterator for Drawing {
    type Item = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
