//! Event-driven segmentation from a debounced digital line
//!
//! Replays a synthetic capture as live level observations, complete with a
//! glitch the debounce window has to throw away.

use barscan_core::classify::classify;
use barscan_core::decode::decode_elements;
use barscan_core::encode::encode;
use barscan_core::segment::DebouncedSegmenter;
use barscan_core::types::RunBuffer;
use barscan_core::ScanConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Barscan Debounced Capture Example\n");

    // Render "HI" as (level, ticks) pairs, 2000 ticks per narrow unit
    let elements = encode("HI", 3)?;
    let mut transitions = Vec::new();
    let mut tick = 0u32;
    for (i, element) in elements.iter().enumerate() {
        transitions.push((i % 2 == 0, tick));
        tick += element.width * 2_000;
    }
    let end_tick = tick;

    let config = ScanConfig::default();
    let mut segmenter = DebouncedSegmenter::from_config(&config);
    let mut runs = RunBuffer::new(config.max_elements);

    for &(level, at) in &transitions {
        // Each confirmed state is observed twice: once at the transition,
        // once after the debounce interval
        segmenter.observe(level, at, &mut runs)?;
        segmenter.observe(level, at + config.debounce_interval + 100, &mut runs)?;
    }

    // A 100-tick glitch, well inside the debounce window
    segmenter.observe(false, end_tick + 200, &mut runs)?;
    segmenter.observe(true, end_tick + 300, &mut runs)?;

    segmenter.finish(end_tick, &mut runs)?;
    println!("Confirmed {} runs from the live line", runs.len());

    let classified = classify(runs.as_slice(), config.wide_ratio)?;
    let outcome = decode_elements(&classified, config.max_hamming_distance)?;

    let text: String = outcome.characters.iter().collect();
    println!("Decoded (with sentinels): {:?}", text);

    Ok(())
}
