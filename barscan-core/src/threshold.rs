//! HIGH/LOW threshold estimation from a sample window

use crate::config::ScanConfig;
use crate::constants::ADC_MAX;
use crate::error::ScanError;
use crate::types::{Sample, Thresholds};

#[cfg(feature = "logging")]
use tracing::debug;

/// Derive the decision thresholds for one captured window
///
/// Scans once for the window minimum and maximum, then takes
/// `high = max * high_threshold_fraction` and
/// `low = min * low_threshold_fraction`.
///
/// Fails with [`ScanError::EmptyWindow`] on an empty window and with
/// [`ScanError::NoContrast`] when the signal is flat (`min == max`) or the
/// configured fractions produce `low >= high`. Every `Ok` result therefore
/// satisfies `low < high`.
pub fn estimate(window: &[Sample], config: &ScanConfig) -> Result<Thresholds, ScanError> {
    if window.is_empty() {
        return Err(ScanError::EmptyWindow);
    }

    let mut min = ADC_MAX;
    let mut max = 0;
    for &sample in window {
        if sample > max {
            max = sample;
        }
        if sample < min {
            min = sample;
        }
    }

    if min == max {
        return Err(ScanError::NoContrast { min, max });
    }

    let high = (f32::from(max) * config.high_threshold_fraction) as Sample;
    let low_raw = f32::from(min) * config.low_threshold_fraction;
    let low = if low_raw >= f32::from(ADC_MAX) {
        ADC_MAX
    } else {
        low_raw as Sample
    };

    if low >= high {
        // Calibration degenerate for this window: the bands overlap
        return Err(ScanError::NoContrast { min, max });
    }

    #[cfg(feature = "logging")]
    debug!(
        "Thresholds derived: high {} low {} (window min {} max {})",
        high, low, min, max
    );

    Ok(Thresholds { high, low })
}
