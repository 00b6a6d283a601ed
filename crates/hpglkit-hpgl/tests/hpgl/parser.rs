use hpglkit_hpgl::{parse_drawing, HpglParser};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_parsed_path_moves_the_pen(input in "[PUDASIN0-9,;: -]{0,200}") {
        let outcome = HpglParser::new().parse(&input);
        for path in &outcome.drawing {
            prop_assert!(path.len() >= 2);
            prop_assert!(path.draw_length() > 0.0);
        }
    }

    #[test]
    fn garbage_tokens_do_not_disturb_paths(noise in "[A-Z]{3,8}") {
        // three or more letters never decode, whatever the first two are
        let clean = parse_drawing("PU0,0;PD10,0,10,10;PU20,20;PD30,30;");
        let noisy = HpglParser::new()
            .parse(&format!("{noise};PU0,0;PD10,0,10,10;{noise};PU20,20;PD30,30;"));
        prop_assert_eq!(noisy.drawing, clean);
        prop_assert_eq!(noisy.diagnostics.len(), 2);
    }
}

#[test]
fn test_typical_cutter_job() {
    let input = "IN;PA;SP1;\nPU100,100;PD200,100,200,200,100,200,100,100;\nPU0,0;SP0;";
    let outcome = HpglParser::new().parse(input);
    assert!(outcome.is_clean());
    assert_eq!(outcome.commands, 7);
    assert_eq!(outcome.drawing.len(), 1);
    assert!(outcome.drawing.paths()[0].is_closed());
}
