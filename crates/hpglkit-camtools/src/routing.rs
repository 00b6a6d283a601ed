//! Path routing
//!
//! Reorders the paths of a drawing to cut down pen-up travel. Both
//! strategies are greedy heuristics: a nearest-neighbour walk from the
//! origin and a serpentine sweep over horizontal rows.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use hpglkit_core::{Drawing, Path, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{require_non_negative, require_positive, CamToolResult};

/// Default row height for [`PathRouter::reroute_xy`], in plotter units
pub const DEFAULT_ROW_SIZE: f64 = 600.0;
/// Default X weight for [`PathRouter::reroute_nearest`]
pub const DEFAULT_X_WEIGHT: f64 = 1.0;
/// Default Y weight for [`PathRouter::reroute_nearest`]; Y moves cost more
/// on most roll-fed cutters
pub const DEFAULT_Y_WEIGHT: f64 = 2.0;

/// Which points of a path represent it when routing
///
/// Each anchor yields an entry point (where the head arrives) and an exit
/// point (where it leaves). Only `StartStop` distinguishes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAnchor {
    /// The real first and last point
    #[default]
    StartStop,
    /// Center of the bounding box
    Center,
    /// Per-axis median of the points
    Median,
    /// Per-axis mean of the points
    Mean,
}

impl PathAnchor {
    /// `(entry, exit)` for `path`
    pub fn anchors(&self, path: &Path) -> (Point, Point) {
        match self {
            PathAnchor::StartStop => (path.start(), path.stop()),
            PathAnchor::Center => {
                let bbox = path.bounding_box();
                let center = Point::new(
                    bbox.min.x + bbox.width() / 2.0,
                    bbox.min.y + bbox.height() / 2.0,
                );
                (center, center)
            }
            PathAnchor::Median => {
                let median = Point::new(
                    median(path.points().iter().map(|p| p.x)),
                    median(path.points().iter().map(|p| p.y)),
                );
                (median, median)
            }
            PathAnchor::Mean => {
                let bbox = path.bounding_box();
                let n = path.len() as f64;
                let (sx, sy) = path
                    .points()
                    .iter()
                    .fold((0.0, 0.0), |(sx, sy), p| {
                        (sx + (p.x - bbox.min.x), sy + (p.y - bbox.min.y))
                    });
                let mean = Point::new(bbox.min.x + sx / n, bbox.min.y + sy / n);
                (mean, mean)
            }
        }
    }
}

/// Upper median: the element at index `len / 2` once sorted
fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(f64::total_cmp);
    sorted[sorted.len() / 2]
}

fn compare_points(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// Row bucket of a y coordinate
pub fn row_index(y: f64, min_y: f64, row_size: f64) -> usize {
    ((y - min_y) / row_size).floor().max(0.0) as usize
}

/// Path reordering strategies
#[derive(Debug)]
pub struct PathRouter;

impl PathRouter {
    /// Greedy nearest-neighbour ordering
    ///
    /// Starting at the origin, repeatedly take the unvisited path whose
    /// entry anchor is closest under the weighted distance
    /// `sqrt((dx * x_weight)^2 + (dy * y_weight)^2)`, then continue from
    /// its exit anchor. Ties go to the path that came first. O(n²).
    pub fn reroute_nearest(
        drawing: &Drawing,
        x_weight: f64,
        y_weight: f64,
        anchor: PathAnchor,
    ) -> CamToolResult<Drawing> {
        require_non_negative("x_weight", x_weight)?;
        require_non_negative("y_weight", y_weight)?;

        let anchors: Vec<(Point, Point)> = drawing.iter().map(|p| anchor.anchors(p)).collect();
        let mut visited = vec![false; anchors.len()];
        let mut order = Vec::with_capacity(anchors.len());
        let mut position = Point::ORIGIN;

        for _ in 0..anchors.len() {
            let mut best: Option<(usize, f64)> = None;
            for (i, (entry, _)) in anchors.iter().enumerate() {
                if visited[i] {
                    continue;
                }
                let dx = (entry.x - position.x) * x_weight;
                let dy = (entry.y - position.y) * y_weight;
                let distance = (dx * dx + dy * dy).sqrt();
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((i, distance));
                }
            }

            let Some((i, _)) = best else { break };
            visited[i] = true;
            order.push(i);
            position = anchors[i].1;
        }

        let paths = drawing.paths();
        let rerouted: Drawing = order.into_iter().map(|i| paths[i].clone()).collect();
        debug!(
            ?anchor,
            travel_before = drawing.travel_length(),
            travel_after = rerouted.travel_length(),
            "rerouted by nearest neighbour"
        );
        Ok(rerouted)
    }

    /// Serpentine row sweep
    ///
    /// Paths are bucketed into rows `row_size` plotter units high by the
    /// y of their entry anchor, measured from the drawing's minimum y.
    /// Rows are visited bottom to top; paths within a row are sorted by
    /// `(entry, exit)`, ascending in the first non-empty row and then
    /// alternating. Equal keys keep their original order.
    pub fn reroute_xy(
        drawing: &Drawing,
        row_size: f64,
        anchor: PathAnchor,
    ) -> CamToolResult<Drawing> {
        require_positive("row_size", row_size)?;
        let Some(bbox) = drawing.bounding_box() else {
            return Ok(drawing.clone());
        };

        let mut rows: BTreeMap<usize, Vec<(Point, Point, &Path)>> = BTreeMap::new();
        for path in drawing {
            let (entry, exit) = anchor.anchors(path);
            rows.entry(row_index(entry.y, bbox.min.y, row_size))
                .or_default()
                .push((entry, exit, path));
        }

        let row_count = rows.len();
        let mut rerouted = Drawing::default();
        let mut reverse = false;
        for (_, mut row) in rows {
            row.sort_by(|a, b| {
                let ordering = compare_points(&a.0, &b.0).then(compare_points(&a.1, &b.1));
                if reverse {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
            for (_, _, path) in row {
                rerouted.push(path.clone());
            }
            reverse = !reverse;
        }

        debug!(
            ?anchor,
            rows = row_count,
            travel_before = drawing.travel_length(),
            travel_after = rerouted.travel_length(),
            "rerouted by row sweep"
        );
        Ok(rerouted)
    }
}
