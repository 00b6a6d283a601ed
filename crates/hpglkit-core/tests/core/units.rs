use hpglkit_core::{mm_to_plotter, plotter_to_mm};
use proptest::prelude::*;

proptest! {
    #[test]
    fn plotter_units_survive_mm_round_trip(v in -2_000_000i64..2_000_000i64) {
        let back = mm_to_plotter(plotter_to_mm(v as f64)).round() as i64;
        prop_assert_eq!(back, v);
    }

    #[test]
    fn plotter_to_mm_ignores_sub_unit_noise(v in -100_000i64..100_000i64, noise in -0.49f64..0.49) {
        prop_assert_eq!(plotter_to_mm(v as f64 + noise), plotter_to_mm(v as f64));
    }
}

#[test]
fn test_common_widths() {
    // 100 mm is 4000 plotter units
    assert!((mm_to_plotter(100.0) - 4000.0).abs() < 1e-9);
    assert!((plotter_to_mm(4000.0) - 100.0).abs() < 1e-9);
}
