use hpglkit_core::{Drawing, Path, Point};
use proptest::prelude::*;

fn arb_path() -> impl Strategy<Value = Path> {
    prop::collection::vec((-5000i64..5000, -5000i64..5000), 2..12)
        .prop_map(|pts| Path::new(pts.into_iter().map(Point::from).collect()).unwrap())
}

fn arb_drawing() -> impl Strategy<Value = Drawing> {
    prop::collection::vec(arb_path(), 1..8).prop_map(Drawing::new)
}

proptest! {
    #[test]
    fn bounding_box_contains_every_point(drawing in arb_drawing()) {
        let bbox = drawing.bounding_box().unwrap();
        for path in &drawing {
            for p in path.points() {
                prop_assert!(p.x >= bbox.min.x && p.x <= bbox.max.x);
                prop_assert!(p.y >= bbox.min.y && p.y <= bbox.max.y);
            }
        }
    }

    #[test]
    fn map_points_preserves_shape(drawing in arb_drawing(), dx in -100.0f64..100.0) {
        let moved = drawing.map_points(|p| p.translate(dx, 0.0));
        prop_assert_eq!(moved.len(), drawing.len());
        prop_assert_eq!(moved.point_count(), drawing.point_count());
        prop_assert!((moved.draw_length() - drawing.draw_length()).abs() < 1e-6);
    }
}

#[test]
fn test_travel_returns_to_origin() {
    let drawing = Drawing::new(vec![Path::new(vec![
        Point::new(300.0, 400.0),
        Point::new(300.0, 400.0),
    ])
    .unwrap()]);
    // 500 out, 500 back
    assert_eq!(drawing.travel_length(), 1000.0);
    assert_eq!(drawing.draw_length(), 0.0);
}

#[test]
fn test_drawing_serde_round_trip() {
    let drawing = Drawing::new(vec![Path::new(vec![Point::ORIGIN, Point::new(1.0, 2.0)]).unwrap()]);
    let json = serde_json::to_string(&drawing).unwrap();
    let back: Drawing = serde_json::from_str(&json).unwrap();
    assert_eq!(back, drawing);
}
