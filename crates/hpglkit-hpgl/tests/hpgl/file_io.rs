use std::fs;

use hpglkit_core::{Drawing, Error, HpglError, Path, Point};
use hpglkit_hpgl::{load_drawing, save_hpgl, save_svg, HpglFileReader};
use tempfile::TempDir;

fn triangle() -> Drawing {
    Drawing::new(vec![Path::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1016.0, 0.0),
        Point::new(0.0, 1016.0),
        Point::new(0.0, 0.0),
    ])
    .unwrap()])
}

#[test]
fn test_save_and_load_hpgl() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.hpgl");

    save_hpgl(&path, &triangle()).unwrap();
    let outcome = load_drawing(&path).unwrap();

    assert!(outcome.is_clean());
    assert_eq!(outcome.drawing, triangle());
}

#[test]
fn test_save_svg() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preview.svg");

    save_svg(&path, &triangle()).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("width=\"25.400mm\""));
}

#[test]
fn test_missing_file_is_load_failure() {
    let dir = TempDir::new().unwrap();
    let err = load_drawing(dir.path().join("nope.hpgl")).unwrap_err();
    assert!(err.is_load_failure());
    assert!(matches!(err, Error::Hpgl(HpglError::LoadFailed { .. })));
}

#[test]
fn test_directory_is_load_failure() {
    let dir = TempDir::new().unwrap();
    assert!(HpglFileReader::new(dir.path()).is_err());
}

#[test]
fn test_blank_file_is_empty_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.hpgl");
    fs::write(&path, "  \n\t\n").unwrap();

    let err = load_drawing(&path).unwrap_err();
    assert!(matches!(err, Error::Hpgl(HpglError::EmptyInput { .. })));
}

#[test]
fn test_reader_reports_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.hpgl");
    fs::write(&path, "IN;PU0,0;PD5,5;").unwrap();

    let reader = HpglFileReader::new(&path).unwrap();
    assert_eq!(reader.file_size(), 15);
    assert_eq!(reader.path(), path.as_path());
    assert_eq!(reader.load().unwrap().drawing.len(), 1);
}
