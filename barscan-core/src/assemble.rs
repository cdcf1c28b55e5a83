//! Sentinel-bounded barcode assembly

use crate::constants::SENTINEL;
use crate::error::ScanError;
use crate::types::DecodedBarcode;
use alloc::string::String;

/// Accumulates decoded characters into a bounded, sentinel-delimited string
///
/// The first `*` opens the barcode, the second closes it; anything after the
/// stop sentinel is ignored. Capacity is the maximum supported barcode
/// length in payload characters.
#[derive(Debug)]
pub struct BarcodeAssembler {
    capacity: usize,
    include_sentinels: bool,
    text: String,
    seen_start: bool,
    seen_stop: bool,
}

impl BarcodeAssembler {
    /// Create an assembler for one scan
    pub fn new(capacity: usize, include_sentinels: bool) -> Self {
        Self {
            capacity,
            include_sentinels,
            text: String::with_capacity(capacity),
            seen_start: false,
            seen_stop: false,
        }
    }

    /// Feed the next decoded character
    ///
    /// Fails with [`ScanError::BufferOverflow`] if the payload would exceed
    /// the capacity.
    pub fn push(&mut self, character: char) -> Result<(), ScanError> {
        if self.seen_stop {
            return Ok(());
        }

        if character == SENTINEL {
            if self.seen_start {
                self.seen_stop = true;
            } else {
                self.seen_start = true;
            }
            return Ok(());
        }

        if !self.seen_start {
            // The decoder guarantees a leading sentinel; anything before it
            // is discarded rather than trusted
            return Ok(());
        }

        if self.text.len() >= self.capacity {
            return Err(ScanError::BufferOverflow {
                capacity: self.capacity,
            });
        }
        self.text.push(character);
        Ok(())
    }

    /// True once both sentinels have been seen
    pub fn is_complete(&self) -> bool {
        self.seen_start && self.seen_stop
    }

    /// Consume the assembler and emit the scan result
    pub fn finish(self, reversed: bool) -> DecodedBarcode {
        let text = if self.include_sentinels {
            let mut bounded = String::with_capacity(self.text.len() + 2);
            if self.seen_start {
                bounded.push(SENTINEL);
            }
            bounded.push_str(&self.text);
            if self.seen_stop {
                bounded.push(SENTINEL);
            }
            bounded
        } else {
            self.text
        };

        DecodedBarcode {
            complete: self.seen_start && self.seen_stop,
            reversed,
            text,
        }
    }
}
