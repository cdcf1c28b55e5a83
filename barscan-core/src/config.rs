//! Scan calibration parameters

use crate::constants::{
    DEFAULT_DEBOUNCE_INTERVAL, DEFAULT_HIGH_THRESHOLD_FRACTION, DEFAULT_LOW_THRESHOLD_FRACTION,
    DEFAULT_MAX_ELEMENTS, DEFAULT_MAX_HAMMING_DISTANCE, DEFAULT_SAMPLE_WINDOW_SIZE,
    DEFAULT_WIDE_RATIO, ELEMENTS_PER_CHARACTER,
};
use crate::error::ScanError;
use alloc::format;
use serde::{Deserialize, Serialize};

/// Calibration parameters for one deployment, read at startup
///
/// The threshold fractions and the wide ratio are calibration constants, not
/// protocol requirements; deployments tune them per sensor and surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Capacity of the sample window, in samples
    pub sample_window_size: usize,

    /// Capacity of the run/element buffer; must be a multiple of 10
    /// (nine elements plus one gap slot per character)
    pub max_elements: usize,

    /// Narrow/wide cutoff: a run is wide when `width >= wide_ratio * narrowest`
    pub wide_ratio: u32,

    /// HIGH threshold as a fraction of the window maximum
    pub high_threshold_fraction: f32,

    /// LOW threshold as a multiple of the window minimum
    pub low_threshold_fraction: f32,

    /// Debounce interval for event-driven segmentation, in sample ticks
    pub debounce_interval: u32,

    /// Largest Hamming distance accepted when matching a symbol group;
    /// 0 requires exact matches
    pub max_hamming_distance: u32,

    /// Include the `*` sentinels in the emitted text
    pub include_sentinels: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sample_window_size: DEFAULT_SAMPLE_WINDOW_SIZE,
            max_elements: DEFAULT_MAX_ELEMENTS,
            wide_ratio: DEFAULT_WIDE_RATIO,
            high_threshold_fraction: DEFAULT_HIGH_THRESHOLD_FRACTION,
            low_threshold_fraction: DEFAULT_LOW_THRESHOLD_FRACTION,
            debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
            max_hamming_distance: DEFAULT_MAX_HAMMING_DISTANCE,
            include_sentinels: false,
        }
    }
}

impl ScanConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.sample_window_size == 0 {
            return Err(ScanError::InvalidConfig(
                "sample_window_size must be nonzero".into(),
            ));
        }

        if self.max_elements == 0 || self.max_elements % ELEMENTS_PER_CHARACTER != 0 {
            return Err(ScanError::InvalidConfig(format!(
                "max_elements must be a nonzero multiple of {}, got {}",
                ELEMENTS_PER_CHARACTER, self.max_elements
            )));
        }

        if self.wide_ratio < 2 {
            return Err(ScanError::InvalidConfig(format!(
                "wide_ratio must be at least 2, got {}",
                self.wide_ratio
            )));
        }

        if !(self.high_threshold_fraction > 0.0 && self.high_threshold_fraction <= 1.0) {
            return Err(ScanError::InvalidConfig(format!(
                "high_threshold_fraction must be in (0, 1], got {}",
                self.high_threshold_fraction
            )));
        }

        if !(self.low_threshold_fraction >= 1.0) {
            return Err(ScanError::InvalidConfig(format!(
                "low_threshold_fraction must be at least 1, got {}",
                self.low_threshold_fraction
            )));
        }

        Ok(())
    }

    /// Maximum number of characters one scan can hold, derived from the
    /// element buffer capacity
    pub fn max_characters(&self) -> usize {
        self.max_elements / ELEMENTS_PER_CHARACTER
    }
}
