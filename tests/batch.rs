mod common;

use common::synthetic_field::planar_field;
use road_detector::batch::{collect_inputs, output_name, run_batch};
use road_detector::disparity::io::save_disparity;
use road_detector::{RoadDetector, RoadParams};
use std::fs;

#[test]
fn batch_writes_one_mask_per_input_with_convention_names() {
    let in_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let frame = planar_field(60, 80);
    for name in ["um_000000.png", "umm_000001.png", "plain.png"] {
        save_disparity(&frame, &in_dir.path().join(name)).unwrap();
    }
    // A frame too short to reach the vote minimum still produces an output.
    save_disparity(&planar_field(60, 30), &in_dir.path().join("uu_000002.png")).unwrap();
    // Not a disparity raster at all; skipped with a warning.
    fs::write(in_dir.path().join("broken.png"), b"not a png").unwrap();

    let files = collect_inputs(in_dir.path()).unwrap();
    assert_eq!(files.len(), 5, "directory listing picks up every *.png");

    let detector = RoadDetector::new(RoadParams::default());
    let report = run_batch(&files, out_dir.path(), &detector).unwrap();
    assert_eq!(report.processed, 4);
    assert_eq!(report.no_ground, 1);
    assert_eq!(report.failed, 1);

    let mut produced: Vec<String> = fs::read_dir(out_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    produced.sort();
    assert_eq!(
        produced,
        vec![
            "plain.png",
            "um_road_000000.png",
            "umm_road_000001.png",
            "uu_road_000002.png",
        ]
    );
}

#[test]
fn collect_inputs_rejects_a_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere");
    assert!(collect_inputs(&missing).is_err());
}

#[test]
fn collect_inputs_accepts_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("um_000000.png");
    save_disparity(&planar_field(20, 20), &path).unwrap();
    let files = collect_inputs(&path).unwrap();
    assert_eq!(files, vec![path]);
}

#[test]
fn naming_convention_matches_the_devkit_layout() {
    assert_eq!(output_name("um_000000.png"), "um_road_000000.png");
    assert_eq!(output_name("um_000000_left.png"), "um_000000_left.png");
}
