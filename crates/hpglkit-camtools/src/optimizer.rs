//! Path Optimizer
//!
//! Path-local rewrites that clean up a drawing and prepare it for a drag
//! knife:
//! - [`PathOptimizer::optimize`] joins paths that continue each other,
//!   rounds to whole plotter units, and drops redundant points
//! - [`PathOptimizer::optimize_cut`] moves the seam of every closed path
//!   onto its longest edge
//! - [`PathOptimizer::blade_offset`] adds overshoot points at sharp
//!   corners so a trailing blade turns cleanly
//!
//! Path order is preserved by all of them.

use std::f64::consts::PI;

use hpglkit_core::{extend, is_straight, mm_to_plotter, vertex_angle, Drawing, Path, Point};
use tracing::{debug, trace};

use crate::error::{require_non_negative, CamToolResult};

/// Corners with an interior angle below this get blade compensation
pub const BLADE_CORNER_THRESHOLD: f64 = PI / 1.1;

/// Drawing optimization operations
#[derive(Debug)]
pub struct PathOptimizer;

impl PathOptimizer {
    /// Concatenate each path onto the previous one when it starts exactly
    /// where that one stopped
    pub fn merge_adjacent(drawing: &Drawing) -> Drawing {
        let mut merged: Vec<Vec<Point>> = Vec::with_capacity(drawing.len());
        let mut last: Option<Point> = None;

        for path in drawing {
            let continues = last == Some(path.start());
            if let (true, Some(previous)) = (continues, merged.last_mut()) {
                previous.extend_from_slice(path.points());
            } else {
                merged.push(path.points().to_vec());
            }
            last = Some(path.stop());
        }

        merged.into_iter().filter_map(Path::new).collect()
    }

    /// Merge continuing paths, then clean up every path
    ///
    /// See [`PathOptimizer::optimize_path`] for the per-path rules.
    pub fn optimize(drawing: &Drawing) -> Drawing {
        let merged = Self::merge_adjacent(drawing);
        let optimized = merged.filter_map_paths(Self::optimize_path);
        debug!(
            paths_before = drawing.len(),
            paths_after = optimized.len(),
            points_before = drawing.point_count(),
            points_after = optimized.point_count(),
            "optimized drawing"
        );
        optimized
    }

    /// Clean up one path
    ///
    /// Rounds every point, removes consecutive duplicates, and drops
    /// interior points lying exactly on the straight line between their
    /// neighbours. On a closed path the closing point is moved off the
    /// seam when the seam itself sits on a straight run. Returns `None`
    /// when nothing but a single point is left.
    pub fn optimize_path(path: &Path) -> Option<Path> {
        let mut rounded: Vec<Point> = path.points().iter().map(Point::rounded).collect();
        rounded.dedup();

        let (first, last) = match rounded.as_slice() {
            [first, .., last] => (*first, *last),
            _ => return None,
        };

        let mut kept = vec![first];
        for window in rounded.windows(3) {
            let (cur, next) = (window[1], window[2]);
            let prev = kept[kept.len() - 1];
            if cur == prev || cur == next || is_straight(prev, cur, next) {
                continue;
            }
            kept.push(cur);
        }
        if kept.last() != Some(&last) {
            kept.push(last);
        }

        let n = kept.len();
        if n >= 4 && kept[0] == kept[n - 1] && is_straight(kept[n - 2], kept[0], kept[1]) {
            kept.remove(0);
            kept.pop();
            kept.push(kept[0]);
        }

        Path::new(kept)
    }

    /// Relocate the seam of every closed path
    ///
    /// `offset_mm` is the blade offset; the new seam overlaps by twice
    /// that distance.
    pub fn optimize_cut(drawing: &Drawing, offset_mm: f64) -> CamToolResult<Drawing> {
        require_non_negative("offset", offset_mm)?;
        let overlap = mm_to_plotter(offset_mm) * 2.0;
        let result = drawing.map_paths(|path| Self::relocate_seam(path, overlap));
        debug!(offset_mm, paths = result.len(), "relocated seams");
        Ok(result)
    }

    /// Move a closed path's start onto the midpoint of its longest edge
    ///
    /// With `a` the midpoint of the longest edge `p[i] -> p[i+1]` and `b`
    /// a point `overlap` units further along it (capped at `p[i+1]`), the
    /// result runs `a, b, p[i+1], ..., p[i], a, b`, so the cut starts and
    /// ends on a straight run and the last stretch overlaps the first.
    /// Open paths come back unchanged.
    pub fn relocate_seam(path: &Path, overlap: f64) -> Path {
        if !path.is_closed() {
            return path.clone();
        }
        let points = path.points();

        let mut longest = 0;
        let mut max_len = f64::NEG_INFINITY;
        for (j, pair) in points.windows(2).enumerate() {
            let len = pair[0].distance_to(&pair[1]);
            if len > max_len {
                max_len = len;
                longest = j;
            }
        }
        if max_len <= 0.0 {
            trace!("closed path has no length, seam left in place");
            return path.clone();
        }

        let (from, to) = (points[longest], points[longest + 1]);
        let a = extend(from, to, 0.5);
        let b = extend(to, from, 0.5 - (overlap / max_len).min(0.5));

        let mut seam = Vec::with_capacity(points.len() + 4);
        seam.push(a);
        if b != to {
            seam.push(b);
        }
        seam.extend_from_slice(&points[longest + 1..]);
        seam.extend_from_slice(&points[1..longest + 1]);
        seam.push(a);
        seam.push(b);

        Path::new(seam).unwrap_or_else(|| path.clone())
    }

    /// Add blade compensation at the sharp corners of every path
    pub fn blade_offset(drawing: &Drawing, offset_mm: f64) -> CamToolResult<Drawing> {
        require_non_negative("offset", offset_mm)?;
        let offset = mm_to_plotter(offset_mm);
        let result = drawing.map_paths(|path| Self::blade_offset_path(path, offset));
        debug!(
            offset_mm,
            points_before = drawing.point_count(),
            points_after = result.point_count(),
            "applied blade offset"
        );
        Ok(result)
    }

    /// Blade compensation for one path, `offset` in plotter units
    ///
    /// For each interior corner sharper than [`BLADE_CORNER_THRESHOLD`]
    /// the corner is replaced by two points: the incoming edge extended
    /// `offset` past the corner, and a point `4 * offset` along the
    /// outgoing edge. Corners whose outgoing edge is shorter than
    /// `4 * offset` are left alone. The first and last points never move.
    pub fn blade_offset_path(path: &Path, offset: f64) -> Path {
        let points = path.points();
        let mut result = Vec::with_capacity(points.len() * 2);
        result.push(points[0]);

        for window in points.windows(3) {
            let (prev, cur, next) = (window[0], window[1], window[2]);
            if vertex_angle(prev, cur, next) >= BLADE_CORNER_THRESHOLD {
                result.push(cur);
                continue;
            }

            let d1 = prev.distance_to(&cur);
            let d2 = cur.distance_to(&next);
            let ext2 = 4.0 * offset / d2;
            if d1 > 0.0 && d2 > 0.0 && ext2 <= 1.0 {
                result.push(extend(prev, cur, 1.0 + offset / d1));
                result.push(extend(cur, next, ext2));
            } else {
                result.push(cur);
            }
        }

        result.push(points[points.len() - 1]);
        Path::new(result).unwrap_or_else(|| path.clone())
    }
}
