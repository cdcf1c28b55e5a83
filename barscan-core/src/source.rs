//! The sample acquisition seam
//!
//! The core never owns I/O timing: a driver loop calls into a
//! [`SampleSource`] once per fixed interval and feeds the readings to a
//! [`crate::scan::Scan`].

use crate::constants::DIGITAL_PRESENCE_THRESHOLD;
use crate::types::Sample;

/// Periodic acquisition of an analog intensity and a digital presence level
pub trait SampleSource {
    /// Read one analog intensity sample
    fn read_sample(&mut self) -> Sample;

    /// Read the digital presence line, for event-driven segmentation
    fn read_digital_level(&mut self) -> bool;
}

/// Replays a recorded capture from memory
///
/// Used by tests, demos and the CLI in place of a live sensor. Once the
/// recording is exhausted the final sample repeats, matching a sensor that
/// keeps reading the surface it stopped on.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    samples: &'a [Sample],
    position: usize,
}

impl<'a> SliceSource<'a> {
    /// Replay the given samples in order
    pub fn new(samples: &'a [Sample]) -> Self {
        Self {
            samples,
            position: 0,
        }
    }

    /// True once every recorded sample has been read at least once
    pub fn exhausted(&self) -> bool {
        self.position >= self.samples.len()
    }

    fn current(&self) -> Sample {
        if self.samples.is_empty() {
            return 0;
        }
        let index = self.position.min(self.samples.len() - 1);
        self.samples[index]
    }
}

impl SampleSource for SliceSource<'_> {
    fn read_sample(&mut self) -> Sample {
        let sample = self.current();
        self.position += 1;
        sample
    }

    fn read_digital_level(&mut self) -> bool {
        // Derived presence: the replayed intensity against a fixed cutoff
        self.current() > DIGITAL_PRESENCE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_source_replays_in_order() {
        let mut source = SliceSource::new(&[10, 20, 30]);
        assert_eq!(source.read_sample(), 10);
        assert_eq!(source.read_sample(), 20);
        assert_eq!(source.read_sample(), 30);
        assert!(source.exhausted());
    }

    #[test]
    fn test_exhausted_source_repeats_final_sample() {
        let mut source = SliceSource::new(&[10, 42]);
        source.read_sample();
        source.read_sample();
        assert_eq!(source.read_sample(), 42);
    }

    #[test]
    fn test_digital_level_tracks_presence_cutoff() {
        let mut source = SliceSource::new(&[3000, 100]);
        assert!(source.read_digital_level());
        source.read_sample();
        assert!(!source.read_digital_level());
    }

    #[test]
    fn test_empty_source_reads_zero() {
        let mut source = SliceSource::new(&[]);
        assert_eq!(source.read_sample(), 0);
        assert!(!source.read_digital_level());
    }
}
