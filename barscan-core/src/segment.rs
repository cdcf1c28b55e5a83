//! Pulse segmentation: turning samples or debounced transitions into runs

use crate::error::ScanError;
use crate::types::{Level, Run, RunBuffer, Sample, Thresholds};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Walk a captured window and emit one run per contiguous threshold band
///
/// The current band is tracked explicitly; samples in the dead zone between
/// the low and high thresholds extend the current run rather than closing
/// it, so noise that never reaches the opposite band cannot re-trigger. A
/// run ends at the first sample crossing into the opposite band, or at
/// window end.
///
/// A barcode begins and ends on a bar, so a leading LOW run (quiet zone
/// before the first bar) is discarded, and so is a trailing LOW run left
/// open at window end.
///
/// Stops with [`ScanError::BufferOverflow`] once the buffer capacity is
/// reached; the runs stored so far stay in the buffer for diagnostics.
pub fn segment_window(
    window: &[Sample],
    thresholds: Thresholds,
    runs: &mut RunBuffer,
) -> Result<(), ScanError> {
    if window.is_empty() {
        return Err(ScanError::EmptyWindow);
    }

    let mut band: Option<Level> = None;
    let mut length: u32 = 0;
    let mut seen_bar = false;

    for &sample in window {
        let crossed = if sample >= thresholds.high {
            Some(Level::High)
        } else if sample <= thresholds.low {
            Some(Level::Low)
        } else {
            None
        };

        match (band, crossed) {
            // Nothing tracked yet: dead-zone samples are discarded until the
            // signal commits to a band
            (None, None) => {}
            (None, Some(level)) => {
                band = Some(level);
                length = 1;
            }
            // Crossing into the opposite band closes the current run
            (Some(current), Some(level)) if level != current => {
                if current == Level::High || seen_bar {
                    push_run(runs, current, length)?;
                }
                seen_bar = seen_bar || current == Level::High;
                band = Some(level);
                length = 1;
            }
            // Same band or dead zone: the run continues
            _ => length += 1,
        }
    }

    if band == Some(Level::High) {
        // Window end closes the final bar; an open trailing space is dropped
        push_run(runs, Level::High, length)?;
    }

    #[cfg(feature = "logging")]
    debug!("Window segmentation produced {} runs", runs.len());

    Ok(())
}

fn push_run(runs: &mut RunBuffer, level: Level, length: u32) -> Result<(), ScanError> {
    let result = runs.push(Run { length, level });

    #[cfg(feature = "logging")]
    if result.is_err() {
        warn!(
            "Run buffer capacity {} exhausted; scan complete by capacity",
            runs.capacity()
        );
    }

    result
}

/// Event-driven segmenter consuming a live digital level with debouncing
///
/// A transition is confirmed only if the level is still on the new side once
/// the debounce interval has elapsed and the line is observed again;
/// transient glitches shorter than the debounce window are discarded.
#[derive(Debug)]
pub struct DebouncedSegmenter {
    debounce: u32,
    confirmed: Option<ConfirmedLevel>,
    pending: Option<PendingTransition>,
}

#[derive(Debug, Clone, Copy)]
struct ConfirmedLevel {
    level: Level,
    since: u32,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    level: Level,
    first_seen: u32,
}

impl DebouncedSegmenter {
    /// Create a segmenter with the given debounce interval in ticks
    pub fn new(debounce_interval: u32) -> Self {
        Self {
            debounce: debounce_interval,
            confirmed: None,
            pending: None,
        }
    }

    /// Create a segmenter using the configured debounce interval
    pub fn from_config(config: &crate::config::ScanConfig) -> Self {
        Self::new(config.debounce_interval)
    }

    /// Feed one observation of the digital level at `tick`
    ///
    /// Ticks must be monotonically non-decreasing; the caller owns the
    /// sampling cadence.
    pub fn observe(
        &mut self,
        is_high: bool,
        tick: u32,
        runs: &mut RunBuffer,
    ) -> Result<(), ScanError> {
        let level = if is_high { Level::High } else { Level::Low };

        let Some(confirmed) = self.confirmed else {
            self.confirmed = Some(ConfirmedLevel { level, since: tick });
            return Ok(());
        };

        if level == confirmed.level {
            // Glitch bounced back before the debounce window elapsed
            self.pending = None;
            return Ok(());
        }

        match self.pending {
            None => {
                self.pending = Some(PendingTransition {
                    level,
                    first_seen: tick,
                });
                Ok(())
            }
            Some(pending) if tick.saturating_sub(pending.first_seen) >= self.debounce => {
                // Still on the new side after the debounce delay: confirm the
                // transition and close the run at the tick it began
                runs.push(Run {
                    length: pending.first_seen.saturating_sub(confirmed.since),
                    level: confirmed.level,
                })?;
                self.confirmed = Some(ConfirmedLevel {
                    level,
                    since: pending.first_seen,
                });
                self.pending = None;
                Ok(())
            }
            Some(_) => Ok(()),
        }
    }

    /// Close the in-progress run at `tick`, ending the capture
    pub fn finish(self, tick: u32, runs: &mut RunBuffer) -> Result<(), ScanError> {
        if let Some(confirmed) = self.confirmed {
            runs.push(Run {
                length: tick.saturating_sub(confirmed.since),
                level: confirmed.level,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::threshold;

    fn thresholds() -> Thresholds {
        Thresholds {
            high: 2500,
            low: 500,
        }
    }

    #[test]
    fn test_window_segmentation_alternating_bands() {
        // 3 high, 2 low, 4 high
        let window = [3000, 3100, 2900, 100, 200, 2800, 3000, 2700, 2600];
        let mut runs = RunBuffer::new(16);
        segment_window(&window, thresholds(), &mut runs).unwrap();

        assert_eq!(
            runs.as_slice(),
            &[
                Run {
                    length: 3,
                    level: Level::High
                },
                Run {
                    length: 2,
                    level: Level::Low
                },
                Run {
                    length: 4,
                    level: Level::High
                },
            ]
        );
    }

    #[test]
    fn test_dead_zone_noise_does_not_retrigger() {
        // The 1500s sit between the thresholds and must extend the high run
        let window = [3000, 1500, 1500, 3000, 100, 3000];
        let mut runs = RunBuffer::new(16);
        segment_window(&window, thresholds(), &mut runs).unwrap();

        assert_eq!(runs.len(), 3);
        assert_eq!(runs.as_slice()[0].length, 4);
        assert_eq!(runs.as_slice()[0].level, Level::High);
    }

    #[test]
    fn test_leading_dead_zone_discarded() {
        let window = [1000, 1200, 3000, 3000];
        let mut runs = RunBuffer::new(16);
        segment_window(&window, thresholds(), &mut runs).unwrap();

        assert_eq!(runs.len(), 1);
        assert_eq!(runs.as_slice()[0].length, 2);
    }

    #[test]
    fn test_capacity_overflow_retains_stored_runs() {
        // Alternating every sample: one run per sample
        let window: alloc::vec::Vec<Sample> =
            (0..8).map(|i| if i % 2 == 0 { 3000 } else { 100 }).collect();
        let mut runs = RunBuffer::new(4);

        let result = segment_window(&window, thresholds(), &mut runs);
        assert_eq!(result, Err(ScanError::BufferOverflow { capacity: 4 }));
        assert_eq!(runs.len(), 4);
    }

    #[test]
    fn test_boundary_spaces_dropped() {
        // Quiet zone on both sides: only bar-to-bar structure is kept
        let config = ScanConfig::default();
        let window = [200, 200, 3800, 3800, 200, 3800, 200, 200];
        let th = threshold::estimate(&window, &config).unwrap();
        let mut runs = RunBuffer::new(16);
        segment_window(&window, th, &mut runs).unwrap();

        assert_eq!(
            runs.as_slice(),
            &[
                Run {
                    length: 2,
                    level: Level::High
                },
                Run {
                    length: 1,
                    level: Level::Low
                },
                Run {
                    length: 1,
                    level: Level::High
                },
            ]
        );
    }

    #[test]
    fn test_debounce_confirms_real_transition() {
        let mut segmenter = DebouncedSegmenter::new(5);
        let mut runs = RunBuffer::new(8);

        // High from tick 0, drops at tick 100, still low at tick 106
        segmenter.observe(true, 0, &mut runs).unwrap();
        segmenter.observe(true, 50, &mut runs).unwrap();
        segmenter.observe(false, 100, &mut runs).unwrap();
        assert!(runs.is_empty());
        segmenter.observe(false, 106, &mut runs).unwrap();

        assert_eq!(
            runs.as_slice(),
            &[Run {
                length: 100,
                level: Level::High
            }]
        );

        segmenter.finish(130, &mut runs).unwrap();
        assert_eq!(
            runs.as_slice()[1],
            Run {
                length: 30,
                level: Level::Low
            }
        );
    }

    #[test]
    fn test_debounce_interval_from_config() {
        // Default interval is 500 ticks: a 400-tick excursion is a glitch
        let mut segmenter = DebouncedSegmenter::from_config(&ScanConfig::default());
        let mut runs = RunBuffer::new(8);

        segmenter.observe(true, 0, &mut runs).unwrap();
        segmenter.observe(false, 2_000, &mut runs).unwrap();
        segmenter.observe(true, 2_400, &mut runs).unwrap();
        assert!(runs.is_empty());

        // A confirmed drop: still low 600 ticks later
        segmenter.observe(false, 5_000, &mut runs).unwrap();
        segmenter.observe(false, 5_600, &mut runs).unwrap();
        assert_eq!(
            runs.as_slice(),
            &[Run {
                length: 5_000,
                level: Level::High
            }]
        );
    }

    #[test]
    fn test_debounce_discards_short_glitch() {
        let mut segmenter = DebouncedSegmenter::new(10);
        let mut runs = RunBuffer::new(8);

        segmenter.observe(true, 0, &mut runs).unwrap();
        // Glitch low at tick 20, back high at tick 22 (inside the window)
        segmenter.observe(false, 20, &mut runs).unwrap();
        segmenter.observe(true, 22, &mut runs).unwrap();
        segmenter.observe(true, 40, &mut runs).unwrap();

        assert!(runs.is_empty());
        segmenter.finish(50, &mut runs).unwrap();
        assert_eq!(
            runs.as_slice(),
            &[Run {
                length: 50,
                level: Level::High
            }]
        );
    }
}
