use hpglkit_core::{Drawing, Path, Point};
use hpglkit_hpgl::{parse_drawing, to_hpgl, to_svg};
use proptest::prelude::*;

// Small offsets so repeated points, and paths that never move, show up
fn arb_path() -> impl Strategy<Value = Path> {
    (
        (-20000i64..20000, -20000i64..20000),
        prop::collection::vec((-2i64..3, -2i64..3), 1..10),
    )
        .prop_map(|(first, steps)| {
            let mut points = vec![Point::from(first)];
            for (dx, dy) in steps {
                let last = points[points.len() - 1];
                points.push(last.translate(dx as f64 * 100.0, dy as f64 * 100.0));
            }
            Path::new(points).unwrap()
        })
}

fn without_zero_length(drawing: &Drawing) -> Drawing {
    drawing.filter_map_paths(|p| (p.draw_length() > 0.0).then(|| p.clone()))
}

fn arb_drawing() -> impl Strategy<Value = Drawing> {
    prop::collection::vec(arb_path(), 0..8).prop_map(Drawing::new)
}

#[test]
fn test_zero_length_path_is_dropped_on_reimport() {
    let dot = Drawing::new(vec![Path::new(vec![Point::new(5.0, 5.0); 2]).unwrap()]);
    assert!(parse_drawing(&to_hpgl(&dot)).is_empty());
    assert!(parse_drawing("PD5,5,5,5;").is_empty());
}

proptest! {
    #[test]
    fn export_then_import_keeps_points(drawing in arb_drawing()) {
        let reparsed = parse_drawing(&to_hpgl(&drawing));
        prop_assert_eq!(reparsed, without_zero_length(&drawing));
    }

    #[test]
    fn export_rounds_fractional_coordinates(drawing in arb_drawing(), jitter in -0.4f64..0.4) {
        let shaken = drawing.map_points(|p| p.translate(jitter, -jitter));
        prop_assert_eq!(parse_drawing(&to_hpgl(&shaken)), without_zero_length(&drawing));
    }

    #[test]
    fn preview_has_one_stroke_per_move(drawing in arb_drawing()) {
        let svg = to_svg(&drawing);
        prop_assert_eq!(svg.matches("<path").count(), drawing.len() * 2 + 1);
    }
}
