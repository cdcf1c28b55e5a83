use super::{read_capture, Calibration};
use super::CaptureFormat;
use anyhow::Result;
use barscan_core::scan::decode_window_with_diagnostics;
use colored::Colorize;
use tracing::info;

/// Dump every pipeline stage of one capture, for sensor calibration work
pub fn execute(input: &str, format: CaptureFormat, calibration: &Calibration) -> Result<()> {
    info!("Tracing capture: {}", input);

    let window = read_capture(input, format)?;
    let config = calibration.to_config();
    let (result, diagnostics) = decode_window_with_diagnostics(&window, &config);

    println!("{}", "=== Stage 1: Capture ===".bold());
    println!("Samples: {}", window.len());
    if let (Some(min), Some(max)) = (window.iter().min(), window.iter().max()) {
        println!("Range:   {}..={}", min, max);
    }

    println!("\n{}", "=== Stage 2: Thresholds ===".bold());
    match diagnostics.thresholds {
        Some(thresholds) => {
            println!("High: {}", thresholds.high);
            println!("Low:  {}", thresholds.low);
        }
        None => println!("{}", "(estimation failed)".red()),
    }

    println!("\n{}", "=== Stage 3: Runs ===".bold());
    for (i, run) in diagnostics.runs.iter().enumerate() {
        println!("{:>4}: {:?} x{}", i + 1, run.level, run.length);
    }

    println!("\n{}", "=== Stage 4: Elements ===".bold());
    for (i, element) in diagnostics.elements.iter().enumerate() {
        println!(
            "{:>4}: width {:>4}  {}",
            i + 1,
            element.width,
            if element.is_wide { "WIDE" } else { "narrow" }
        );
    }

    println!("\n{}", "=== Stage 5: Symbol matches ===".bold());
    println!(
        "Direction: {}",
        if diagnostics.reversed { "reversed" } else { "forward" }
    );
    for (i, group_match) in diagnostics.matches.iter().enumerate() {
        let distance = if group_match.distance == 0 {
            format!("distance {}", group_match.distance).green()
        } else {
            format!("distance {}", group_match.distance).yellow()
        };
        println!(
            "{:>4}: {:?} ({}, pattern {:09b})",
            i + 1,
            group_match.character,
            distance,
            group_match.pattern.bits()
        );
    }
    if diagnostics.separator_anomalies > 0 {
        println!(
            "{} {}",
            "Separator anomalies:".yellow(),
            diagnostics.separator_anomalies
        );
    }

    println!("\n{}", "=== Stage 6: Result ===".bold());
    match result {
        Ok(barcode) => println!(
            "{} {:?} (complete: {})",
            "Decoded".green(),
            barcode.text,
            barcode.complete
        ),
        Err(e) => println!("{} {}", "Failed:".red(), e),
    }

    Ok(())
}
