//! Per-scan pipeline orchestration and diagnostics
//!
//! One [`Scan`] owns the sample window and run buffer for exactly one scan
//! in progress, replacing the free-floating global arrays and scan booleans
//! of the firmware this pipeline descends from. The driver loop constructs
//! it once, fills it, decodes, reads the diagnostics, then calls
//! [`Scan::reset`] before starting the next scan.

use crate::assemble::BarcodeAssembler;
use crate::classify;
use crate::config::ScanConfig;
use crate::decode::{self, GroupMatch};
use crate::error::ScanError;
use crate::segment;
use crate::source::SampleSource;
use crate::types::{DecodedBarcode, Element, Run, RunBuffer, Sample, Thresholds};
use crate::threshold;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// Everything the external collaborator may want to log about one scan
///
/// Populated stage by stage; on a failed scan the fields up to the failing
/// stage are still filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanDiagnostics {
    /// Thresholds used for segmentation, unset when estimation failed
    pub thresholds: Option<Thresholds>,
    /// Raw runs in temporal order
    pub runs: Vec<Run>,
    /// Elements after narrow/wide classification
    pub elements: Vec<Element>,
    /// Per-group match records from the successful pass
    pub matches: Vec<GroupMatch>,
    /// True when the reversed retry produced the reading
    pub reversed: bool,
    /// Expected inter-character gaps that arrived wide
    pub separator_anomalies: u32,
}

/// One scan in progress, exclusively owning its window and buffers
#[derive(Debug)]
pub struct Scan {
    config: ScanConfig,
    window: Vec<Sample>,
    runs: RunBuffer,
    diagnostics: ScanDiagnostics,
}

impl Scan {
    /// Create a scan with validated configuration
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;
        let window = Vec::with_capacity(config.sample_window_size);
        let runs = RunBuffer::new(config.max_elements);
        Ok(Self {
            config,
            window,
            runs,
            diagnostics: ScanDiagnostics::default(),
        })
    }

    /// The configuration this scan runs under
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Append one captured sample; returns false once the window is full
    pub fn push_sample(&mut self, sample: Sample) -> bool {
        if self.window.len() >= self.config.sample_window_size {
            return false;
        }
        self.window.push(sample);
        true
    }

    /// Fill the window from a source, one read per slot
    pub fn capture<S: SampleSource>(&mut self, source: &mut S) {
        while self.window.len() < self.config.sample_window_size {
            let sample = source.read_sample();
            self.window.push(sample);
        }

        #[cfg(feature = "logging")]
        debug!("Captured {} samples", self.window.len());
    }

    /// The samples captured so far
    pub fn window(&self) -> &[Sample] {
        &self.window
    }

    /// Run stages 2 through 6 over the captured window
    ///
    /// Diagnostics are populated as far as the pipeline got, success or not.
    pub fn decode(&mut self) -> Result<DecodedBarcode, ScanError> {
        self.diagnostics = ScanDiagnostics::default();
        self.runs.clear();

        let thresholds = threshold::estimate(&self.window, &self.config)?;
        self.diagnostics.thresholds = Some(thresholds);

        let segmented = segment::segment_window(&self.window, thresholds, &mut self.runs);
        self.diagnostics.runs = self.runs.as_slice().to_vec();
        segmented?;

        let elements = classify::classify(self.runs.as_slice(), self.config.wide_ratio)?;
        self.diagnostics.elements = elements.clone();

        let outcome = decode::decode_elements(&elements, self.config.max_hamming_distance)?;
        self.diagnostics.matches = outcome.matches.clone();
        self.diagnostics.reversed = outcome.reversed;
        self.diagnostics.separator_anomalies = outcome.separator_anomalies;

        let mut assembler =
            BarcodeAssembler::new(self.config.max_characters(), self.config.include_sentinels);
        for &character in &outcome.characters {
            assembler.push(character)?;
        }

        Ok(assembler.finish(outcome.reversed))
    }

    /// The diagnostics from the most recent [`Scan::decode`] call
    pub fn diagnostics(&self) -> &ScanDiagnostics {
        &self.diagnostics
    }

    /// Clear all buffers so a new scan can begin
    pub fn reset(&mut self) {
        self.window.clear();
        self.runs.clear();
        self.diagnostics = ScanDiagnostics::default();
    }
}

/// Decode a captured window in one call
pub fn decode_window(window: &[Sample], config: &ScanConfig) -> Result<DecodedBarcode, ScanError> {
    decode_window_with_diagnostics(window, config).0
}

/// Decode a captured window, returning the diagnostics alongside the result
pub fn decode_window_with_diagnostics(
    window: &[Sample],
    config: &ScanConfig,
) -> (Result<DecodedBarcode, ScanError>, ScanDiagnostics) {
    let sized = ScanConfig {
        sample_window_size: window.len().max(1),
        ..config.clone()
    };

    let mut scan = match Scan::new(sized) {
        Ok(scan) => scan,
        Err(e) => return (Err(e), ScanDiagnostics::default()),
    };
    for &sample in window {
        scan.push_sample(sample);
    }

    let result = scan.decode();
    let diagnostics = scan.diagnostics().clone();
    (result, diagnostics)
}
