use tempfile::tempdir;

use barscan_cli::commands::{synth, trace, write_capture, Calibration, CaptureFormat};

fn default_calibration() -> Calibration {
    Calibration {
        wide_ratio: None,
        high_fraction: None,
        low_fraction: None,
        tolerance: None,
        include_sentinels: false,
    }
}

#[test]
fn trace_runs_on_good_capture() {
    let td = tempdir().unwrap();
    let capture = td.path().join("capture.json");

    synth::execute("TRACE", capture.to_str().unwrap(), CaptureFormat::Json, 4, 3).unwrap();
    trace::execute(
        capture.to_str().unwrap(),
        CaptureFormat::Json,
        &default_calibration(),
    )
    .unwrap();
}

#[test]
fn trace_survives_undecodable_capture() {
    let td = tempdir().unwrap();
    let capture = td.path().join("garbage.json");

    // Contrast, but no barcode structure: trace must report, not fail
    let samples: Vec<u16> = (0..200)
        .map(|i| if i % 2 == 0 { 3900 } else { 150 })
        .collect();
    write_capture(capture.to_str().unwrap(), CaptureFormat::Json, &samples).unwrap();

    trace::execute(
        capture.to_str().unwrap(),
        CaptureFormat::Json,
        &default_calibration(),
    )
    .unwrap();
}

#[test]
fn trace_survives_empty_capture() {
    let td = tempdir().unwrap();
    let capture = td.path().join("empty.json");

    write_capture(capture.to_str().unwrap(), CaptureFormat::Json, &[]).unwrap();
    trace::execute(
        capture.to_str().unwrap(),
        CaptureFormat::Json,
        &default_calibration(),
    )
    .unwrap();
}

#[test]
fn trace_missing_file_fails() {
    let result = trace::execute(
        "/definitely/not/here.json",
        CaptureFormat::Json,
        &default_calibration(),
    );
    assert!(result.is_err());
}

#[test]
fn trace_with_custom_calibration() {
    let td = tempdir().unwrap();
    let capture = td.path().join("capture.json");

    synth::execute("42", capture.to_str().unwrap(), CaptureFormat::Json, 4, 3).unwrap();

    let calibration = Calibration {
        wide_ratio: Some(2),
        high_fraction: Some(0.6),
        low_fraction: Some(1.5),
        tolerance: Some(0),
        include_sentinels: false,
    };
    trace::execute(capture.to_str().unwrap(), CaptureFormat::Json, &calibration).unwrap();
}
