use std::fs;
use tempfile::tempdir;

use barscan_cli::commands::{read_capture, synth, CaptureFormat};
use barscan_core::scan::decode_window;
use barscan_core::ScanConfig;

#[test]
fn synth_json_capture_decodes_back() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("capture.json");

    synth::execute("HELLO", out_path.to_str().unwrap(), CaptureFormat::Json, 4, 3).unwrap();

    let window = read_capture(out_path.to_str().unwrap(), CaptureFormat::Json).unwrap();
    let result = decode_window(&window, &ScanConfig::default()).unwrap();
    assert_eq!(result.text, "HELLO");
    assert!(result.complete);
}

#[test]
fn synth_raw_capture_is_u16_le() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("capture.bin");

    synth::execute("A", out_path.to_str().unwrap(), CaptureFormat::Raw, 2, 0).unwrap();

    let data = fs::read(&out_path).unwrap();
    assert_eq!(data.len() % 2, 0);

    let samples = read_capture(out_path.to_str().unwrap(), CaptureFormat::Raw).unwrap();
    assert_eq!(samples.len(), data.len() / 2);
    assert!(samples.iter().all(|&s| s <= 4095));
}

#[test]
fn synth_rejects_unencodable_text() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("capture.json");

    let result = synth::execute(
        "lower case",
        out_path.to_str().unwrap(),
        CaptureFormat::Json,
        4,
        3,
    );
    assert!(result.is_err());
    assert!(!out_path.exists());
}

#[test]
fn synth_formats_round_trip_identically() {
    let td = tempdir().unwrap();
    let json_path = td.path().join("capture.json");
    let raw_path = td.path().join("capture.bin");

    synth::execute("X7", json_path.to_str().unwrap(), CaptureFormat::Json, 4, 3).unwrap();
    synth::execute("X7", raw_path.to_str().unwrap(), CaptureFormat::Raw, 4, 3).unwrap();

    let from_json = read_capture(json_path.to_str().unwrap(), CaptureFormat::Json).unwrap();
    let from_raw = read_capture(raw_path.to_str().unwrap(), CaptureFormat::Raw).unwrap();
    assert_eq!(from_json, from_raw);
}
