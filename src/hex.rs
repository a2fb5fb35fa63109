use crate::error::{Result, TextkitError};
use tracing::trace;

/// Encode bytes as a lowercase hex string, two digits per byte
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decode hex digits found anywhere in `text`
///
/// Non-hex characters are separators, so debugger renderings such as
/// `<666f6f 626172>` decode without pre-processing. Each run of digits is
/// cut into two-digit tokens from the left; an odd run ends with a
/// one-digit token holding that digit's value.
///
/// Fails with [`TextkitError::EmptyResult`] when no digit is present.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len() / 2);
    let mut pending: Option<u8> = None;

    for c in text.chars() {
        match nibble(c) {
            Some(value) => match pending.take() {
                Some(high) => bytes.push((high << 4) | value),
                None => pending = Some(value),
            },
            // A separator closes the run
            None => {
                if let Some(high) = pending.take() {
                    bytes.push(high);
                }
            }
        }
    }
    if let Some(high) = pending {
        bytes.push(high);
    }

    if bytes.is_empty() {
        return Err(TextkitError::EmptyResult);
    }
    trace!(input_len = text.len(), decoded = bytes.len(), "hex decoded");
    Ok(bytes)
}

/// Decode hex and interpret the bytes as UTF-8 text
pub fn string_from_hex(text: &str) -> Result<String> {
    let bytes = decode(text)?;
    Ok(String::from_utf8(bytes)?)
}

/// Hex-encode the UTF-8 bytes of `text`
pub fn hex_from_string(text: &str) -> String {
    encode(text.as_bytes())
}

fn nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0x00, 0x0f, 0xff]), "000fff");
        assert_eq!(encode(b"foo"), "666f6f");
    }

    #[test]
    fn test_decode_plain() {
        assert_eq!(decode("666f6f").unwrap(), b"foo");
        assert_eq!(decode("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_decode_debugger_rendering() {
        assert_eq!(decode("<66 6f 6f>").unwrap(), vec![0x66, 0x6f, 0x6f]);
        assert_eq!(decode("<666f6f 626172>").unwrap(), b"foobar");
        assert_eq!(decode("66\n6f\t6f").unwrap(), b"foo");
    }

    #[test]
    fn test_decode_odd_runs() {
        // Three digits split 2 then 1
        assert_eq!(decode("abc").unwrap(), vec![0xab, 0x0c]);
        assert_eq!(decode("AbC").unwrap(), vec![0xab, 0x0c]);
        assert_eq!(decode("a").unwrap(), vec![0x0a]);
        assert_eq!(decode("1 2 3").unwrap(), vec![0x01, 0x02, 0x03]);
        assert_eq!(decode("f,ff").unwrap(), vec![0x0f, 0xff]);
    }

    #[test]
    fn test_decode_empty_result() {
        assert!(matches!(decode(""), Err(TextkitError::EmptyResult)));
        assert!(matches!(decode("zz"), Err(TextkitError::EmptyResult)));
        assert!(matches!(decode("<>  ,"), Err(TextkitError::EmptyResult)));
    }

    #[test]
    fn test_decode_ignores_non_ascii_digits() {
        // Fullwidth digits are not hex digits
        assert!(matches!(decode("\u{ff11}\u{ff12}"), Err(TextkitError::EmptyResult)));
        assert_eq!(decode("é1é2").unwrap(), vec![0x01, 0x02]);
    }

    #[test]
    fn test_string_from_hex() {
        assert_eq!(string_from_hex("666f6f").unwrap(), "foo");
        assert_eq!(string_from_hex("<66 6f 6f>").unwrap(), "foo");
        assert!(matches!(string_from_hex(""), Err(TextkitError::EmptyResult)));
        assert!(matches!(
            string_from_hex("ff"),
            Err(TextkitError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_hex_from_string() {
        assert_eq!(hex_from_string("foo"), "666f6f");
        assert_eq!(hex_from_string(""), "");
        assert_eq!(hex_from_string("é"), "c3a9");
    }

    #[test]
    fn test_roundtrip_multibyte() {
        let text = "héllo, wörld 👋";
        assert_eq!(string_from_hex(&hex_from_string(text)).unwrap(), text);
    }
}
