//! # Barscan Core
//!
//! A Code 39 acquisition-and-decode pipeline for photo-reflective sensor captures.
//!
//! ## Modules
//!
//! - `constants`: Calibration defaults and pattern geometry
//! - `types`: Core types (Sample, Run, Element, Thresholds, ScanError)
//! - `config`: Scan calibration parameters
//! - `symbols`: The static Code 39 symbol table and pattern matching
//! - `threshold`: HIGH/LOW threshold estimation from a sample window
//! - `segment`: Pulse segmentation (window scan and debounced transitions)
//! - `classify`: Narrow/wide element classification
//! - `decode`: Symbol decoding with Hamming tolerance and reversed retry
//! - `assemble`: Sentinel-bounded barcode assembly
//! - `encode`: Text to canonical element sequences and synthetic captures
//! - `scan`: Per-scan pipeline orchestration and diagnostics
//! - `source`: The sample acquisition seam

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod assemble;
pub mod classify;
pub mod config;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod scan;
pub mod segment;
pub mod source;
pub mod symbols;
pub mod threshold;
pub mod types;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::ScanError;
pub use scan::{decode_window, decode_window_with_diagnostics, Scan, ScanDiagnostics};
pub use types::{DecodedBarcode, Element, Level, Run, Sample, Thresholds};

/// Result type alias for scan operations
pub type Result<T> = core::result::Result<T, ScanError>;
