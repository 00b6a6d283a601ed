use hpglkit_camtools::{Operation, PathAnchor, PlotPipeline};
use hpglkit_hpgl::{parse_drawing, to_hpgl};

const TWO_SQUARES: &str = "IN;PA;SP1;\
    PU2000,2000;PD3000,2000,3000,3000,2000,3000,2000,2000;\
    PU0,0;PD500,0;PD1000,0;PD1000,1000;PD0,1000;PD0,0;\
    PU0,0;SP0;";

#[test]
fn test_prepare_for_pen() {
    let drawing = parse_drawing(TWO_SQUARES);
    assert_eq!(drawing.len(), 2);

    let pipeline = PlotPipeline::new()
        .with(Operation::Optimize)
        .with(Operation::Fit)
        .with(Operation::RerouteNearest {
            x_weight: 1.0,
            y_weight: 1.0,
            anchor: PathAnchor::StartStop,
        });
    let prepared = pipeline.apply(&drawing).unwrap();

    // the square at the origin comes first, minus its collinear point
    assert_eq!(prepared.paths()[0].len(), 5);
    assert!(to_hpgl(&prepared).starts_with("IN:;PA;PU0,0;PD1000,0,1000,1000,0,1000,0,0;"));
    assert!(prepared.travel_length() < drawing.travel_length() + 1e-9);
}

#[test]
fn test_pipeline_from_json() {
    let pipeline = PlotPipeline::from_json(
        r#"[{"op":"mirror_x"},{"op":"multiply_y","delta_mm":5.0,"count":2},{"op":"reroute_xy"}]"#,
    )
    .unwrap();
    assert_eq!(pipeline.len(), 3);

    let drawing = parse_drawing(TWO_SQUARES);
    let tiled = pipeline.apply(&drawing).unwrap();
    assert_eq!(tiled.len(), 4);
}
