//! Property-based tests for encoding, checksums and rendering
//!
//! These tests generate random payloads and identifiers and check the
//! structural invariants that hold for every input.

use crate::canvas::testing::{FixedFont, RecordingCanvas};
use crate::canvas::{BLACK, WHITE};
use crate::encoder::{encode, encode_with, ELEMENTS_PER_CHAR};
use crate::identifier::{Identifier, IdentifierBuilder, SERIAL_LEN, SERIAL_RANGE};
use crate::render::render;
use crate::{checksum, symbol_table, Error, RenderConfig};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FONT: FixedFont = FixedFont {
    line_height: 15,
    char_width: 9,
};

/// Characters valid anywhere in a payload
const PAYLOAD_CHARS: &str = "[0-9\\-$:/.*+ABCDENTabcdent]{0,40}";

fn sentinel() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['A', 'B', 'C', 'D', 'E', 'N', 'T'])
}

proptest! {
    /// Every character contributes its 7 elements plus a gap
    #[test]
    fn prop_encoded_length(payload in PAYLOAD_CHARS, start in sentinel(), stop in sentinel()) {
        let seq = encode_with(&payload, start, stop).unwrap();
        prop_assert_eq!(seq.len(), (payload.chars().count() + 2) * ELEMENTS_PER_CHAR);
        prop_assert!(seq.widths().iter().all(|&w| w == 1 || w == 2));
    }

    /// Encoding the same payload twice gives the same sequence
    #[test]
    fn prop_encode_is_pure(payload in PAYLOAD_CHARS) {
        let first = encode(&payload).unwrap();
        let _other = encode("0123456789").unwrap();
        let second = encode(&payload).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Each character's slice of the output is its table pattern
    #[test]
    fn prop_sequence_is_concatenated_patterns(payload in PAYLOAD_CHARS) {
        let seq = encode(&payload).unwrap();
        let chars: Vec<char> = std::iter::once('A')
            .chain(payload.chars())
            .chain(std::iter::once('B'))
            .collect();
        for (chunk, c) in seq.widths().chunks(ELEMENTS_PER_CHAR).zip(chars) {
            let pattern = symbol_table::lookup(c).unwrap();
            prop_assert_eq!(&chunk[..7], &pattern.widths()[..]);
            prop_assert_eq!(chunk[7], 1);
        }
    }

    /// Any character outside the table is reported
    #[test]
    fn prop_unsupported_character(prefix in "[0-9]{0,5}", bad in "[#%&@!?FGHZ]", suffix in "[0-9]{0,5}") {
        let payload = format!("{prefix}{bad}{suffix}");
        let bad = bad.chars().next().unwrap();
        let err = encode(&payload).unwrap_err();
        prop_assert!(matches!(err, Error::UnsupportedCharacter(c) if c == bad));
    }

    /// The check digit always lands the weighted sum on a multiple of ten
    #[test]
    fn prop_checksum_completes_total(digits in prop::collection::vec(0u8..=9, 0..30)) {
        let check = checksum::compute(&digits);
        prop_assert!(check <= 9);

        // appending the check digit at an odd position closes the sum
        if digits.len() % 2 == 1 {
            let mut full = digits.clone();
            full.push(check);
            let total: u32 = full
                .iter()
                .enumerate()
                .map(|(i, &d)| {
                    let d = d as u32;
                    if i % 2 == 0 {
                        if d * 2 >= 10 { d * 2 - 9 } else { d * 2 }
                    } else {
                        d
                    }
                })
                .sum();
            prop_assert_eq!(total % 10, 0);
        }
    }

    /// Built identifiers parse back and detect a changed check digit
    #[test]
    fn prop_identifier_validates(type_digit in 0u8..=9, serial in 0u64..=99_999_999, delta in 1u8..=9) {
        let id = Identifier::new(type_digit, "1310", serial).unwrap();
        let code = id.codabar();
        prop_assert_eq!(code.len(), 14);
        prop_assert_eq!(id.serial_number().len(), SERIAL_LEN);
        prop_assert_eq!(code.parse::<Identifier>().unwrap(), id.clone());

        let wrong = (id.check_digit() + delta) % 10;
        let corrupted = format!("{}{}", &code[..13], wrong);
        let is_mismatch = matches!(
            corrupted.parse::<Identifier>(),
            Err(Error::ChecksumMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    /// Seeded builders draw serials inside the documented range
    #[test]
    fn prop_generated_serial_in_range(seed in any::<u64>()) {
        let mut builder = IdentifierBuilder::new(ChaCha8Rng::seed_from_u64(seed));
        let id = builder.build(3, None).unwrap();
        let serial: u64 = id.serial_number().parse().unwrap();
        prop_assert!(SERIAL_RANGE.contains(&serial));
    }

    /// Drawn rectangles always span exactly the area between the quiet zones
    #[test]
    fn prop_render_width(payload in PAYLOAD_CHARS, width in 21u32..2000, show_text in any::<bool>()) {
        let seq = encode(&payload).unwrap();
        let config = RenderConfig::new().size(width, 80).human_readable(show_text);
        let canvas: RecordingCanvas = render(&seq, &config, Some(&payload), &FONT).unwrap();

        let expected = (width - 20) as f64;
        prop_assert!((canvas.drawn_width() - expected).abs() < 1e-6);
        prop_assert_eq!(canvas.rects.len(), seq.len());
        for (i, rect) in canvas.rects.iter().enumerate() {
            prop_assert_eq!(rect.color, if i % 2 == 0 { BLACK } else { WHITE });
        }
    }
}
