use proptest::prelude::*;
use textkit::hex::{decode, encode, hex_from_string, string_from_hex};
use textkit::{scramble, GraphemeIndex};

// Reordered clusters can merge at their seams (combining marks, flags),
// so the multiset is compared on chars.
fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

proptest! {
    #[test]
    fn hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 1..256)) {
        prop_assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn hex_length_is_twice_input(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let hex = encode(&bytes);
        prop_assert_eq!(hex.len(), bytes.len() * 2);
        prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn hex_roundtrip_through_debugger_rendering(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let spaced: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        let rendered = format!("<{}>", spaced.join(" "));
        prop_assert_eq!(decode(&rendered).unwrap(), bytes);
    }

    #[test]
    fn string_roundtrip(text in "\\PC{1,64}") {
        prop_assert_eq!(string_from_hex(&hex_from_string(&text)).unwrap(), text);
    }

    #[test]
    fn decode_never_panics(text in "\\PC{0,64}") {
        let _ = decode(&text);
    }

    #[test]
    fn scramble_is_permutation(text in "\\PC{0,64}", seed in any::<i64>()) {
        let output = scramble(&text, seed);
        prop_assert_eq!(output.len(), text.len());
        prop_assert_eq!(sorted_chars(&output), sorted_chars(&text));
    }

    #[test]
    fn scramble_is_deterministic(text in "\\PC{0,64}", seed in any::<i64>()) {
        prop_assert_eq!(scramble(&text, seed), scramble(&text, seed));
    }

    #[test]
    fn grapheme_at_agrees_with_substring(text in "\\PC{1,32}", index in 0usize..32) {
        match text.grapheme_at(index) {
            Some(g) => prop_assert_eq!(text.substring(index..index + 1), Some(g)),
            None => prop_assert!(index >= text.grapheme_count()),
        }
    }
}
