use super::write_capture;
use super::CaptureFormat;
use anyhow::{Context, Result};
use barscan_core::encode::{encode, synthesize_window, SynthesisParams};
use colored::Colorize;
use tracing::info;

pub fn execute(
    text: &str,
    output: &str,
    format: CaptureFormat,
    samples_per_unit: u32,
    quiet_zone: u32,
) -> Result<()> {
    info!("Synthesizing capture for {:?}", text);

    let elements = encode(text, 3)
        .with_context(|| format!("Cannot encode {:?} as Code 39", text))?;

    let params = SynthesisParams {
        samples_per_unit,
        quiet_zone_units: quiet_zone,
        ..Default::default()
    };
    let window = synthesize_window(&elements, &params);

    write_capture(output, format, &window)?;

    println!(
        "{} {:?}: {} elements, {} samples -> {}",
        "Synthesized".green(),
        text,
        elements.len(),
        window.len(),
        output
    );

    Ok(())
}
