use super::{read_capture, Calibration};
use super::CaptureFormat;
use anyhow::{Context, Result};
use barscan_core::scan::decode_window_with_diagnostics;
use barscan_core::{DecodedBarcode, ScanDiagnostics};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use tracing::info;

#[derive(Serialize)]
struct DecodeReport<'a> {
    result: Option<&'a DecodedBarcode>,
    error: Option<String>,
    diagnostics: &'a ScanDiagnostics,
}

pub fn execute(
    input: &str,
    format: CaptureFormat,
    calibration: &Calibration,
    output: Option<&str>,
    json: bool,
) -> Result<()> {
    info!("Decoding capture: {}", input);

    let window = read_capture(input, format)?;
    info!("Capture holds {} samples", window.len());

    let config = calibration.to_config();
    let (result, diagnostics) = decode_window_with_diagnostics(&window, &config);

    let report = DecodeReport {
        result: result.as_ref().ok(),
        error: result.as_ref().err().map(|e| e.to_string()),
        diagnostics: &diagnostics,
    };

    if let Some(output_path) = output {
        let serialized = serde_json::to_string_pretty(&report)
            .context("Failed to serialize decode report")?;
        fs::write(output_path, serialized)
            .with_context(|| format!("Failed to write report: {}", output_path))?;
        info!("Report written to {}", output_path);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &result {
        Ok(barcode) => {
            let status = if barcode.complete {
                "complete".green()
            } else {
                "partial".yellow()
            };
            println!("Decoded:   {}", barcode.text.bold());
            println!("Status:    {}", status);
            println!(
                "Direction: {}",
                if barcode.reversed { "reversed" } else { "forward" }
            );
        }
        Err(e) => {
            println!("{} {}", "Scan failed:".red(), e);
        }
    }

    if let Some(thresholds) = diagnostics.thresholds {
        println!(
            "Thresholds: high {} low {}",
            thresholds.high, thresholds.low
        );
    }
    println!(
        "Runs: {}  Elements: {}  Separator anomalies: {}",
        diagnostics.runs.len(),
        diagnostics.elements.len(),
        diagnostics.separator_anomalies
    );

    Ok(())
}
