//! Core types for scan pipelines

use crate::error::ScanError;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A single light-intensity reading in the 12-bit ADC domain (0..=4095)
pub type Sample = u16;

/// Which side of the decision thresholds a run sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// Above the high threshold (dark surface under a reflectance sensor)
    High,
    /// Below the low threshold (light surface)
    Low,
}

impl Level {
    /// The opposite band
    pub fn opposite(self) -> Self {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }
}

/// HIGH/LOW decision thresholds derived once per sample window
///
/// Never mutated mid-scan; every successfully derived pair satisfies
/// `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Samples at or above this value belong to the HIGH band
    pub high: Sample,
    /// Samples at or below this value belong to the LOW band
    pub low: Sample,
}

/// A contiguous span of samples on one side of the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Span length in sample ticks
    pub length: u32,
    /// Which band the span occupied
    pub level: Level,
}

/// A run after narrow/wide classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Width of the element in sample ticks
    pub width: u32,
    /// Wide (true) or narrow (false)
    pub is_wide: bool,
}

impl Element {
    /// Create an element
    pub fn new(width: u32, is_wide: bool) -> Self {
        Self { width, is_wide }
    }
}

/// Fixed-capacity run buffer owned by one in-progress scan
///
/// A push beyond capacity fails with [`ScanError::BufferOverflow`] before
/// storing, so exactly `capacity` runs remain retained for diagnostics.
#[derive(Debug, Clone)]
pub struct RunBuffer {
    runs: Vec<Run>,
    capacity: usize,
}

impl RunBuffer {
    /// Create an empty buffer with the given fixed capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            runs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a run, failing if the capacity is already exhausted
    pub fn push(&mut self, run: Run) -> Result<(), ScanError> {
        if self.runs.len() >= self.capacity {
            return Err(ScanError::BufferOverflow {
                capacity: self.capacity,
            });
        }
        self.runs.push(run);
        Ok(())
    }

    /// Number of runs currently stored
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// True if no runs have been stored
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The stored runs in temporal order
    pub fn as_slice(&self) -> &[Run] {
        &self.runs
    }

    /// Discard all stored runs, keeping the capacity
    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

/// The assembled result of one decode pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedBarcode {
    /// The decoded text, with or without sentinels per configuration
    pub text: String,
    /// True when both start and stop sentinels were seen
    pub complete: bool,
    /// True when the reading came from the reversed retry pass
    pub reversed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_buffer_rejects_push_past_capacity() {
        let mut buf = RunBuffer::new(2);
        let run = Run {
            length: 1,
            level: Level::High,
        };
        buf.push(run).unwrap();
        buf.push(run).unwrap();
        assert_eq!(
            buf.push(run),
            Err(ScanError::BufferOverflow { capacity: 2 })
        );
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_run_buffer_clear_keeps_capacity() {
        let mut buf = RunBuffer::new(3);
        buf.push(Run {
            length: 4,
            level: Level::Low,
        })
        .unwrap();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn test_level_opposite() {
        assert_eq!(Level::High.opposite(), Level::Low);
        assert_eq!(Level::Low.opposite(), Level::High);
    }
}
