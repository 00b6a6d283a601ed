use hpglkit_core::{Drawing, Path, Point};
use proptest::prelude::*;

pub fn arb_path() -> impl Strategy<Value = Path> {
    prop::collection::vec((-10000i64..10000, -10000i64..10000), 2..10)
        .prop_map(|pts| Path::new(pts.into_iter().map(Point::from).collect()).unwrap())
}

pub fn arb_drawing() -> impl Strategy<Value = Drawing> {
    prop::collection::vec(arb_path(), 1..12).prop_map(Drawing::new)
}

/// Paths as comparable keys, sorted, for multiset comparison
pub fn path_multiset(drawing: &Drawing) -> Vec<Vec<(i64, i64)>> {
    let mut keys: Vec<Vec<(i64, i64)>> = drawing
        .iter()
        .map(|p| p.points().iter().map(|q| (q.x as i64, q.y as i64)).collect())
        .collect();
    keys.sort();
    keys
}
