//! The static Code 39 symbol table and pattern matching
//!
//! Each character is 9 alternating bar/space elements, exactly 3 of them
//! wide ("3 of 9"). The table is read-only and loaded once at process start;
//! its order is significant because ties in Hamming distance resolve to the
//! first minimal entry.

use crate::constants::PATTERN_LEN;
use crate::types::Element;
use serde::{Deserialize, Serialize};

/// A 9-position narrow/wide pattern packed into the low 9 bits of a `u16`
///
/// Position 0 is the most significant of the 9 bits; a set bit means wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementPattern(u16);

impl ElementPattern {
    const MASK: u16 = (1u16 << PATTERN_LEN) - 1;

    /// Build a pattern from raw bits (only the low 9 bits are kept)
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    /// The raw 9-bit representation
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Build a pattern from a group of exactly 9 classified elements
    pub fn from_elements(group: &[Element]) -> Self {
        debug_assert_eq!(group.len(), PATTERN_LEN);
        let mut bits = 0u16;
        for element in group {
            bits = (bits << 1) | u16::from(element.is_wide);
        }
        Self(bits & Self::MASK)
    }

    /// Whether the element at `position` (0..9) is wide
    pub fn is_wide_at(self, position: usize) -> bool {
        self.0 >> (PATTERN_LEN - 1 - position) & 1 == 1
    }

    /// Count of positions whose wide/narrow flag differs from `other`
    pub fn hamming_distance(self, other: Self) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    /// The pattern as read in the opposite scan direction
    pub fn reversed(self) -> Self {
        let mut bits = 0u16;
        for position in 0..PATTERN_LEN {
            bits = (bits << 1) | (self.0 >> position & 1);
        }
        Self(bits)
    }
}

/// One entry of the Code 39 table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code39Symbol {
    /// The canonical narrow/wide pattern
    pub pattern: ElementPattern,
    /// The character this pattern encodes
    pub character: char,
}

const fn sym(bits: u16, character: char) -> Code39Symbol {
    Code39Symbol {
        pattern: ElementPattern::from_bits(bits),
        character,
    }
}

/// The complete Code 39 table: `*`, A-Z, punctuation, 0-9
pub const CODE39_TABLE: [Code39Symbol; 43] = [
    sym(0b010010100, '*'),
    sym(0b100001001, 'A'),
    sym(0b001001001, 'B'),
    sym(0b101001000, 'C'),
    sym(0b000011001, 'D'),
    sym(0b100011000, 'E'),
    sym(0b001011000, 'F'),
    sym(0b000001101, 'G'),
    sym(0b100001100, 'H'),
    sym(0b001001100, 'I'),
    sym(0b000011100, 'J'),
    sym(0b100000011, 'K'),
    sym(0b001000011, 'L'),
    sym(0b101000010, 'M'),
    sym(0b000010011, 'N'),
    sym(0b100010010, 'O'),
    sym(0b001010010, 'P'),
    sym(0b000000111, 'Q'),
    sym(0b100000110, 'R'),
    sym(0b001000110, 'S'),
    sym(0b000010110, 'T'),
    sym(0b110000001, 'U'),
    sym(0b011000001, 'V'),
    sym(0b111000000, 'W'),
    sym(0b010010001, 'X'),
    sym(0b110010000, 'Y'),
    sym(0b011010000, 'Z'),
    sym(0b010000101, '-'),
    sym(0b110000100, '.'),
    sym(0b010101000, '$'),
    sym(0b010100010, '/'),
    sym(0b010001010, '+'),
    sym(0b000101010, '%'),
    sym(0b000110100, '0'),
    sym(0b100100001, '1'),
    sym(0b001100001, '2'),
    sym(0b101100000, '3'),
    sym(0b000110001, '4'),
    sym(0b100110000, '5'),
    sym(0b001110000, '6'),
    sym(0b000100101, '7'),
    sym(0b100100100, '8'),
    sym(0b001100100, '9'),
];

/// Find the table entry closest to `pattern` by Hamming distance
///
/// Ties resolve to the first minimal entry in table order. Always succeeds
/// because the table is non-empty; tolerance enforcement belongs to the
/// decoder.
pub fn best_match(pattern: ElementPattern) -> (char, u32) {
    let mut closest = CODE39_TABLE[0].character;
    let mut min_distance = pattern.hamming_distance(CODE39_TABLE[0].pattern);

    for symbol in &CODE39_TABLE[1..] {
        let distance = pattern.hamming_distance(symbol.pattern);
        if distance < min_distance {
            min_distance = distance;
            closest = symbol.character;
        }
    }

    (closest, min_distance)
}

/// Look up the canonical pattern for a character, if it is in the table
pub fn pattern_for(character: char) -> Option<ElementPattern> {
    CODE39_TABLE
        .iter()
        .find(|symbol| symbol.character == character)
        .map(|symbol| symbol.pattern)
}
