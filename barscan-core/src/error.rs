//! Error types for scan operations

use alloc::string::String;

/// Errors that can occur while decoding a scan
///
/// All variants are scan-local: the caller clears the scan's buffers and
/// starts fresh. Nothing here is fatal to the process.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// No samples were captured, or a pipeline stage received an empty sequence
    #[cfg_attr(feature = "std", error("Empty sample window: nothing captured"))]
    EmptyWindow,

    /// Flat signal or degenerate calibration: no usable contrast in the window
    #[cfg_attr(
        feature = "std",
        error("No contrast in window: min {min}, max {max}")
    )]
    NoContrast {
        /// The smallest sample in the window.
        min: u16,
        /// The largest sample in the window.
        max: u16,
    },

    /// The run/element buffer filled before the scan reached a terminal symbol
    #[cfg_attr(
        feature = "std",
        error("Element buffer overflow: capacity {capacity} exhausted")
    )]
    BufferOverflow {
        /// The fixed capacity that was exhausted.
        capacity: usize,
    },

    /// Neither the forward nor the reversed pass started with the `*` sentinel
    #[cfg_attr(
        feature = "std",
        error("Undecodable scan: no start sentinel in either direction")
    )]
    UndecodableScan,

    /// A 9-element group's best table match exceeded the configured tolerance
    #[cfg_attr(
        feature = "std",
        error("Unknown symbol: best match at distance {distance}, tolerance {tolerance}")
    )]
    UnknownSymbol {
        /// Hamming distance of the closest table entry.
        distance: u32,
        /// The configured tolerance that was exceeded.
        tolerance: u32,
    },

    /// Configuration rejected at construction time
    #[cfg_attr(feature = "std", error("Invalid configuration: {0}"))]
    InvalidConfig(String),

    /// Encoder input contains a character outside the Code 39 table
    #[cfg_attr(feature = "std", error("Character {0:?} is not encodable in Code 39"))]
    UnencodableCharacter(char),
}
