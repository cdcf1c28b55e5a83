//! Symbol decoding: Hamming-tolerant table matching with a reversed retry

use crate::constants::{PATTERN_LEN, SENTINEL, SUBSTITUTE_CHAR};
use crate::error::ScanError;
use crate::symbols::{best_match, ElementPattern};
use crate::types::Element;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// The match recorded for one decoded 9-element group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMatch {
    /// The character emitted for the group (`?` when out of tolerance)
    pub character: char,
    /// Hamming distance of the closest table entry
    pub distance: u32,
    /// The raw pattern observed for the group
    pub pattern: ElementPattern,
}

/// Result of decoding one element sequence, forward or reversed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Decoded characters in scan order, starting with the `*` sentinel
    pub characters: Vec<char>,
    /// True when the reversed retry produced this outcome
    pub reversed: bool,
    /// One match record per decoded group
    pub matches: Vec<GroupMatch>,
    /// Count of expected inter-character gaps that arrived wide
    pub separator_anomalies: u32,
}

/// Match a single 9-element group against the table, enforcing the tolerance
///
/// Returns [`ScanError::UnknownSymbol`] when the closest entry is farther
/// than `tolerance`; the pipeline recovers from that inline by substituting
/// `?`, so this is only an error at the single-symbol granularity.
pub fn match_group(group: &[Element], tolerance: u32) -> Result<GroupMatch, ScanError> {
    let pattern = ElementPattern::from_elements(group);
    let (character, distance) = best_match(pattern);

    if distance > tolerance {
        return Err(ScanError::UnknownSymbol {
            distance,
            tolerance,
        });
    }

    Ok(GroupMatch {
        character,
        distance,
        pattern,
    })
}

/// Decode a classified element sequence into characters
///
/// Groups elements 9 at a time and matches each group by minimum Hamming
/// distance. If the first decoded character is not the `*` sentinel the
/// sequence is reversed end-to-end and decoded once more; a second failure
/// is terminal ([`ScanError::UndecodableScan`]). The retry is a plain flag,
/// never recursion, so termination is structural.
pub fn decode_elements(elements: &[Element], tolerance: u32) -> Result<DecodeOutcome, ScanError> {
    let mut attempted_reverse = false;

    loop {
        let (characters, matches, separator_anomalies) = if attempted_reverse {
            let reversed: Vec<Element> = elements.iter().rev().copied().collect();
            decode_pass(&reversed, tolerance)
        } else {
            decode_pass(elements, tolerance)
        };

        if characters.first() == Some(&SENTINEL) {
            #[cfg(feature = "logging")]
            debug!(
                "Decoded {} characters ({})",
                characters.len(),
                if attempted_reverse {
                    "reversed pass"
                } else {
                    "forward pass"
                }
            );

            return Ok(DecodeOutcome {
                characters,
                reversed: attempted_reverse,
                matches,
                separator_anomalies,
            });
        }

        if attempted_reverse {
            #[cfg(feature = "logging")]
            warn!("No start sentinel in either direction; scan undecodable");
            return Err(ScanError::UndecodableScan);
        }

        // Code 39 reads in either direction; retry exactly once reversed
        attempted_reverse = true;
    }
}

/// Gap handling for one decode pass, decided once from the stream length
///
/// A k-character separated stream carries one gap element between groups,
/// 10k - 1 elements total; a separator-free stream is exactly 9k. Lengths
/// of the form 90k + 9 satisfy both, and the separated reading wins there
/// since physical scans always carry inter-character gaps. Any other
/// length is a truncated or noisy stream and gets decided gap by gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GapMode {
    Separated,
    Contiguous,
    PerGap,
}

impl GapMode {
    fn for_len(len: usize) -> Self {
        if len % (PATTERN_LEN + 1) == PATTERN_LEN {
            GapMode::Separated
        } else if len % PATTERN_LEN == 0 {
            GapMode::Contiguous
        } else {
            GapMode::PerGap
        }
    }
}

/// One linear pass over an element sequence
///
/// A trailing partial group of fewer than 9 elements is dropped, never
/// decoded. Whether the element after each group is an inter-character gap
/// is fixed up front by [`GapMode`]; in gap position a narrow element is
/// skipped, while a wide one is never skipped: it is consumed as the next
/// group's first element and counted as a separator anomaly.
fn decode_pass(elements: &[Element], tolerance: u32) -> (Vec<char>, Vec<GroupMatch>, u32) {
    let mut characters = Vec::new();
    let mut matches = Vec::new();
    let mut separator_anomalies = 0u32;
    let mut index = 0;
    let mode = GapMode::for_len(elements.len());

    while index + PATTERN_LEN <= elements.len() {
        let group = &elements[index..index + PATTERN_LEN];
        index += PATTERN_LEN;

        let pattern = ElementPattern::from_elements(group);
        let (closest, distance) = best_match(pattern);
        // Out-of-tolerance groups are recovered inline by substitution
        let character = if distance > tolerance {
            SUBSTITUTE_CHAR
        } else {
            closest
        };
        characters.push(character);
        matches.push(GroupMatch {
            character,
            distance,
            pattern,
        });

        let remaining = elements.len() - index;
        let gap_here = match mode {
            GapMode::Separated => remaining != 0,
            GapMode::Contiguous => false,
            GapMode::PerGap => remaining != 0 && remaining % PATTERN_LEN != 0,
        };
        if !gap_here {
            continue;
        }
        if elements[index].is_wide {
            separator_anomalies += 1;
        } else {
            index += 1;
        }
    }

    (characters, matches, separator_anomalies)
}
