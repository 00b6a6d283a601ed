#[allow(dead_code)]
mod common;

use common::arb_drawing;
use hpglkit_camtools::DrawingTransform;
use hpglkit_core::Point;
use proptest::prelude::*;

proptest! {
    #[test]
    fn fit_is_idempotent(drawing in arb_drawing()) {
        let once = DrawingTransform::fit(&drawing);
        let twice = DrawingTransform::fit(&once);
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(once.bounding_box().unwrap().min, Point::ORIGIN);
    }

    #[test]
    fn mirror_twice_restores_up_to_translation(drawing in arb_drawing()) {
        let bbox = drawing.bounding_box().unwrap();
        let x = DrawingTransform::mirror_x(&DrawingTransform::mirror_x(&drawing));
        prop_assert_eq!(&x, &DrawingTransform::translate(&drawing, -bbox.min.x, 0.0));
        let y = DrawingTransform::mirror_y(&DrawingTransform::mirror_y(&drawing));
        prop_assert_eq!(&y, &DrawingTransform::translate(&drawing, 0.0, -bbox.min.y));
    }

    #[test]
    fn mirror_of_fitted_drawing_is_an_involution(drawing in arb_drawing()) {
        let fitted = DrawingTransform::fit(&drawing);
        let back = DrawingTransform::mirror_x(&DrawingTransform::mirror_x(&fitted));
        prop_assert_eq!(&back, &fitted);
    }

    #[test]
    fn mirror_keeps_extent(drawing in arb_drawing()) {
        let before = drawing.bounding_box().unwrap();
        let after = DrawingTransform::mirror_x(&drawing).bounding_box().unwrap();
        prop_assert_eq!(after.min.x, 0.0);
        prop_assert_eq!(after.width(), before.width());
        prop_assert_eq!((after.min.y, after.max.y), (before.min.y, before.max.y));
    }

    #[test]
    fn scale_multiplies_extent(drawing in arb_drawing(), factor in 1.0f64..20.0) {
        let before = drawing.bounding_box().unwrap();
        let after = DrawingTransform::scale(&drawing, factor, factor).bounding_box().unwrap();
        let tolerance = 1e-9 * (1.0 + before.width().max(before.height()) * factor);
        prop_assert!((after.width() - before.width() * factor).abs() <= tolerance);
        prop_assert!((after.height() - before.height() * factor).abs() <= tolerance);
    }

    #[test]
    fn multiply_repeats_every_path(drawing in arb_drawing(), count in 1usize..5) {
        let tiled = DrawingTransform::multiply_x(&drawing, 3.0, count);
        prop_assert_eq!(tiled.len(), drawing.len() * count);
        prop_assert_eq!(&tiled.paths()[..drawing.len()], drawing.paths());
    }
}
