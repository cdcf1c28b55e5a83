//! Narrow/wide element classification

use crate::error::ScanError;
use crate::types::{Element, Run};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Tag each run narrow or wide relative to the narrowest run in the scan
///
/// A run is wide when `width >= wide_ratio * narrowest`. The cutoff is
/// inclusive so a canonical 3:1 capture classifies its wide elements as wide
/// at the default ratio of 3.
///
/// Fails with [`ScanError::EmptyWindow`] on an empty sequence (the minimum
/// is undefined).
pub fn classify(runs: &[Run], wide_ratio: u32) -> Result<Vec<Element>, ScanError> {
    let narrowest = runs
        .iter()
        .map(|run| run.length)
        .min()
        .ok_or(ScanError::EmptyWindow)?;

    let cutoff = narrowest.saturating_mul(wide_ratio);

    let elements: Vec<Element> = runs
        .iter()
        .map(|run| Element::new(run.length, run.length >= cutoff))
        .collect();

    #[cfg(feature = "logging")]
    debug!(
        "Classified {} elements (narrowest {}, cutoff {})",
        elements.len(),
        narrowest,
        cutoff
    );

    Ok(elements)
}
