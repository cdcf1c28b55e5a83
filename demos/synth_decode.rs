//! Synthesize a capture and walk it back through the decode pipeline

use barscan_core::encode::{encode_to_window, SynthesisParams};
use barscan_core::scan::decode_window_with_diagnostics;
use barscan_core::ScanConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Barscan Synth/Decode Example\n");

    let text = "CODE39";
    let window = encode_to_window(text, 3, &SynthesisParams::default())?;
    println!("Synthesized {:?} into {} samples", text, window.len());

    let config = ScanConfig::default();
    let (result, diagnostics) = decode_window_with_diagnostics(&window, &config);
    let barcode = result?;

    let thresholds = diagnostics.thresholds.expect("decode succeeded");
    println!(
        "Thresholds: high {} low {}",
        thresholds.high, thresholds.low
    );
    println!("Runs: {}", diagnostics.runs.len());
    println!("Elements: {}", diagnostics.elements.len());

    println!("\nPer-character matches:");
    for (i, group_match) in diagnostics.matches.iter().enumerate() {
        println!(
            "  {}: {:?} (distance {})",
            i + 1,
            group_match.character,
            group_match.distance
        );
    }

    println!(
        "\nDecoded: {:?} (complete: {}, reversed: {})",
        barcode.text, barcode.complete, barcode.reversed
    );

    Ok(())
}
