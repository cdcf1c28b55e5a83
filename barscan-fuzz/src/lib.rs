//! Fuzzing placeholder for the barscan-core decode pipeline
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode_window

use barscan_core::types::Element;
use barscan_core::ScanConfig;

/// Interpret raw bytes as a sample window and decode it
pub fn fuzz_decode_window(data: &[u8]) {
    let window: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]) & 0x0FFF)
        .collect();

    // Try to decode - should never panic
    let _ = barscan_core::decode_window(&window, &ScanConfig::default());
}

/// Interpret raw bytes as a classified element sequence and decode it
pub fn fuzz_decode_elements(data: &[u8]) {
    let elements: Vec<Element> = data
        .iter()
        .map(|&byte| Element::new(u32::from(byte >> 1).max(1), byte & 1 == 1))
        .collect();

    // Try to decode - should never panic
    let _ = barscan_core::decode::decode_elements(&elements, 2);
}
