//! Text to canonical Code 39 element sequences and synthetic captures
//!
//! The inverse of the decode pipeline: render a string as the narrow/wide
//! element sequence a perfect scan would produce, or as a synthetic ADC
//! sample window for replay through the full pipeline.

use crate::constants::{ADC_MAX, PATTERN_LEN, SENTINEL};
use crate::error::ScanError;
use crate::symbols::pattern_for;
use crate::types::{Element, Sample};
use alloc::string::String;
use alloc::vec::Vec;

/// Geometry and levels for rendering an element sequence as samples
#[derive(Debug, Clone)]
pub struct SynthesisParams {
    /// Samples per narrow unit of width
    pub samples_per_unit: u32,
    /// ADC level emitted for bars (dark surface reads high)
    pub high_level: Sample,
    /// ADC level emitted for spaces and the quiet zone
    pub low_level: Sample,
    /// Quiet-zone padding on each side, in narrow units
    pub quiet_zone_units: u32,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            samples_per_unit: 4,
            high_level: 3500,
            low_level: 300,
            quiet_zone_units: 3,
        }
    }
}

/// Encode text into its canonical element sequence
///
/// Adds the `*` sentinels around the payload and a narrow inter-character
/// gap between characters. Narrow elements are 1 unit wide, wide elements
/// `wide_units` (the canonical geometry uses 3).
///
/// Fails with [`ScanError::UnencodableCharacter`] for characters outside
/// the Code 39 table and for embedded `*` (the sentinel is added here, not
/// supplied by the caller).
pub fn encode(text: &str, wide_units: u32) -> Result<Vec<Element>, ScanError> {
    if text.contains(SENTINEL) {
        return Err(ScanError::UnencodableCharacter(SENTINEL));
    }

    let mut elements = Vec::new();
    let mut bounded = String::with_capacity(text.len() + 2);
    bounded.push(SENTINEL);
    bounded.push_str(text);
    bounded.push(SENTINEL);

    for (i, character) in bounded.chars().enumerate() {
        let pattern =
            pattern_for(character).ok_or(ScanError::UnencodableCharacter(character))?;

        if i > 0 {
            // Inter-character gap is a narrow space
            elements.push(Element::new(1, false));
        }
        for position in 0..PATTERN_LEN {
            let wide = pattern.is_wide_at(position);
            elements.push(Element::new(if wide { wide_units } else { 1 }, wide));
        }
    }

    Ok(elements)
}

/// Render an element sequence as a synthetic ADC sample window
///
/// Elements alternate bar/space starting with a bar, exactly as a Code 39
/// stream is printed; bars render at the high level, spaces and the quiet
/// zone at the low level.
pub fn synthesize_window(elements: &[Element], params: &SynthesisParams) -> Vec<Sample> {
    let quiet = (params.quiet_zone_units * params.samples_per_unit) as usize;
    let body: usize = elements
        .iter()
        .map(|e| (e.width * params.samples_per_unit) as usize)
        .sum();

    let mut window = Vec::with_capacity(body + 2 * quiet);
    let low = params.low_level.min(ADC_MAX);
    let high = params.high_level.min(ADC_MAX);

    window.extend(core::iter::repeat(low).take(quiet));
    for (i, element) in elements.iter().enumerate() {
        let level = if i % 2 == 0 { high } else { low };
        let ticks = (element.width * params.samples_per_unit) as usize;
        window.extend(core::iter::repeat(level).take(ticks));
    }
    window.extend(core::iter::repeat(low).take(quiet));

    window
}

/// Encode text straight to a synthetic sample window
pub fn encode_to_window(
    text: &str,
    wide_units: u32,
    params: &SynthesisParams,
) -> Result<Vec<Sample>, ScanError> {
    let elements = encode(text, wide_units)?;
    Ok(synthesize_window(&elements, params))
}
