use hpglkit_camtools::PathOptimizer;
use hpglkit_core::{Drawing, Path, Point};
use proptest::prelude::*;

use crate::common::arb_path;

proptest! {
    #[test]
    fn blade_offset_keeps_endpoints(path in arb_path(), offset in 0.0f64..200.0) {
        let result = PathOptimizer::blade_offset_path(&path, offset);
        prop_assert_eq!(result.start(), path.start());
        prop_assert_eq!(result.stop(), path.stop());
        prop_assert!(result.len() >= path.len());
    }

    #[test]
    fn straight_lines_collapse(start in -1000i64..1000, step in 1i64..50, n in 3usize..20) {
        let points = (0..n as i64)
            .map(|i| Point::from((start + i * step, 2 * (start + i * step))))
            .collect();
        let optimized = PathOptimizer::optimize_path(&Path::new(points).unwrap()).unwrap();
        prop_assert_eq!(optimized.len(), 2);
    }

    #[test]
    fn optimize_never_adds_points(path in arb_path()) {
        let drawing = Drawing::new(vec![path]);
        let optimized = PathOptimizer::optimize(&drawing);
        prop_assert!(optimized.point_count() <= drawing.point_count());
        for p in &optimized {
            prop_assert!(p.len() >= 2);
            prop_assert!(p.points().windows(2).all(|w| w[0] != w[1]));
        }
    }

    #[test]
    fn seam_moves_to_longest_edge(path in arb_path(), overlap in 0.0f64..100.0) {
        let mut points = path.into_points();
        points.push(points[0]);
        let closed = Path::new(points).unwrap();
        let longest = closed
            .points()
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .fold(0.0, f64::max);
        prop_assume!(longest > 0.0);

        let result = PathOptimizer::relocate_seam(&closed, overlap);
        prop_assert!(result.len() >= closed.len() + 2);
        // the cut ends one overlap past the new start
        prop_assert!(result.stop().distance_to(&result.start()) <= overlap + 1e-6);
    }
}

#[test]
fn test_knife_sequence_on_square() {
    let square = Drawing::new(vec![Path::new(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1000.0),
        Point::new(2000.0, 1000.0),
        Point::new(2000.0, 0.0),
        Point::new(0.0, 0.0),
    ])
    .unwrap()]);

    let cut = PathOptimizer::optimize_cut(&square, 0.25).unwrap();
    let seam = cut.paths()[0].start();
    assert_eq!(seam, Point::new(1000.0, 1000.0));

    let bladed = PathOptimizer::blade_offset(&cut, 0.25).unwrap();
    // four sharp corners, each replaced by two points
    assert_eq!(bladed.point_count(), cut.point_count() + 4);
}
