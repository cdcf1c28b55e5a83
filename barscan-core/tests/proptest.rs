//! Property-based tests using proptest

use barscan_core::classify::classify;
use barscan_core::decode::decode_elements;
use barscan_core::encode::{encode, encode_to_window, SynthesisParams};
use barscan_core::scan::decode_window;
use barscan_core::threshold;
use barscan_core::types::{Element, Level, Run};
use barscan_core::{ScanConfig, ScanError};
use proptest::prelude::*;

const CHARSET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '-', '.', '$', '/', '+', '%', '0', '1', '2', '3',
    '4', '5', '6', '7', '8', '9',
];

fn barcode_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(CHARSET), 1..8)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_thresholds_ordered_for_any_contrasted_window(
        window in prop::collection::vec(0u16..=4095, 1..600)
    ) {
        let config = ScanConfig::default();
        match threshold::estimate(&window, &config) {
            Ok(thresholds) => prop_assert!(thresholds.low < thresholds.high),
            Err(ScanError::NoContrast { .. }) => {}
            Err(ScanError::EmptyWindow) => prop_assert!(window.is_empty()),
            Err(e) => prop_assert!(false, "unexpected error: {:?}", e),
        }
    }

    #[test]
    fn prop_round_trip_text(text in barcode_text()) {
        let elements = encode(&text, 3).unwrap();
        let outcome = decode_elements(&elements, 0).unwrap();
        let payload: String = outcome.characters[1..outcome.characters.len() - 1]
            .iter()
            .collect();
        prop_assert_eq!(payload, text);
        prop_assert!(!outcome.reversed);
    }

    #[test]
    fn prop_reversed_elements_read_the_same(text in barcode_text()) {
        let elements = encode(&text, 3).unwrap();
        let forward = decode_elements(&elements, 0).unwrap();

        let reversed: Vec<Element> = elements.into_iter().rev().collect();
        let retried = decode_elements(&reversed, 0).unwrap();

        prop_assert_eq!(forward.characters, retried.characters);
        prop_assert!(retried.reversed);
    }

    #[test]
    fn prop_full_pipeline_round_trip(text in barcode_text()) {
        let window = encode_to_window(&text, 3, &SynthesisParams::default()).unwrap();
        let result = decode_window(&window, &ScanConfig::default()).unwrap();
        prop_assert_eq!(result.text, text);
        prop_assert!(result.complete);
    }

    #[test]
    fn prop_decode_window_never_panics(
        window in prop::collection::vec(0u16..=4095, 0..800)
    ) {
        // Arbitrary windows must produce a value or an error, never a panic
        let _ = decode_window(&window, &ScanConfig::default());
    }

    #[test]
    fn prop_decode_elements_never_panics(
        flags in prop::collection::vec(any::<bool>(), 0..128),
        tolerance in 0u32..5
    ) {
        let elements: Vec<Element> = flags
            .iter()
            .map(|&wide| Element::new(if wide { 3 } else { 1 }, wide))
            .collect();
        let _ = decode_elements(&elements, tolerance);
    }

    #[test]
    fn prop_classifier_tags_every_run(
        widths in prop::collection::vec(1u32..10_000, 1..100),
        ratio in 2u32..5
    ) {
        let runs: Vec<Run> = widths
            .iter()
            .enumerate()
            .map(|(i, &length)| Run {
                length,
                level: if i % 2 == 0 { Level::High } else { Level::Low },
            })
            .collect();

        let elements = classify(&runs, ratio).unwrap();
        prop_assert_eq!(elements.len(), runs.len());

        let narrowest = widths.iter().copied().min().unwrap();
        for element in &elements {
            prop_assert_eq!(element.is_wide, element.width >= ratio * narrowest);
        }
    }

    #[test]
    fn prop_decoded_characters_stay_in_alphabet(
        flags in prop::collection::vec(any::<bool>(), 9..120)
    ) {
        let elements: Vec<Element> = flags
            .iter()
            .map(|&wide| Element::new(if wide { 3 } else { 1 }, wide))
            .collect();

        if let Ok(outcome) = decode_elements(&elements, 3) {
            for character in outcome.characters {
                prop_assert!(
                    character == '?'
                        || character == '*'
                        || CHARSET.contains(&character)
                );
            }
        }
    }
}
