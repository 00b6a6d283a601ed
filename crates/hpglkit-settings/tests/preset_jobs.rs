use std::fs;

use hpglkit_core::Point;
use hpglkit_hpgl::{load_drawing, parse_drawing, save_hpgl, save_svg};
use hpglkit_settings::Config;
use tempfile::TempDir;

// A 40 x 20 mm rectangle drawn as two strokes, plus a small triangle
const JOB: &str = "IN;SP1;PA;\
    PU1000,1000;PD2600,1000;PD2600,1800;\
    PU2600,1800;PD1000,1800,1000,1000;\
    PU3000,1000;PD3200,1000,3100,1200,3000,1000;\
    PU0,0;SP0;";

#[test]
fn test_knife_preset_prepares_job_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("job.hpgl");
    let output = dir.path().join("out.hpgl");
    let preview = dir.path().join("out.svg");
    fs::write(&input, JOB).unwrap();

    let outcome = load_drawing(&input).unwrap();
    assert!(outcome.is_clean());
    assert_eq!(outcome.drawing.len(), 3);

    let config = Config::knife_preset(0.25);
    let prepared = config.job.apply(&outcome.drawing).unwrap();

    // the two rectangle strokes were merged, so two closed cuts remain
    assert_eq!(prepared.len(), 2);
    // merging drops the shared corner; seams and overshoot only add points
    assert!(prepared.point_count() >= outcome.drawing.point_count() - 1);

    save_hpgl(&output, &prepared).unwrap();
    save_svg(&preview, &prepared).unwrap();

    let reloaded = load_drawing(&output).unwrap().drawing;
    assert_eq!(reloaded.len(), prepared.len());
    assert!(fs::read_to_string(&preview).unwrap().contains("<rect"));
}

#[test]
fn test_pen_preset_keeps_geometry() {
    let drawing = parse_drawing(JOB);
    let prepared = Config::pen_preset().job.apply(&drawing).unwrap();

    // rotated by 180 degrees and fitted: same extent, origin at zero
    let before = drawing.bounding_box().unwrap();
    let after = prepared.bounding_box().unwrap();
    assert_eq!(after.min, Point::ORIGIN);
    assert_eq!(after.width(), before.width());
    assert_eq!(after.height(), before.height());
    assert!((prepared.draw_length() - drawing.draw_length()).abs() < 1e-9);
}
