//! textkit - small extensions for text and bytes
//!
//! ## Hex codec
//!
//! Lowercase encoding and a tolerant decoder that treats anything that is
//! not a hex digit as a separator:
//!
//! ```
//! use textkit::hex::{decode, hex_from_string, string_from_hex};
//!
//! assert_eq!(hex_from_string("foo"), "666f6f");
//! assert_eq!(decode("<66 6f 6f>").unwrap(), b"foo");
//! assert_eq!(string_from_hex("666f6f").unwrap(), "foo");
//! ```
//!
//! ## Seeded scrambling
//!
//! A repeatable shuffle of a string's grapheme clusters:
//!
//! ```
//! use textkit::scramble;
//!
//! let once = scramble("hello world", 42);
//! assert_eq!(once, scramble("hello world", 42));
//! ```
//!
//! ## Helpers
//!
//! - [`CharClass`] enumerates the members of a character class
//! - [`GraphemeIndex`] gives integer indexing over characters
//! - [`contains_ignore_case`] and [`OptionStrExt`] cover list and optional
//!   string checks

pub mod charset;
pub mod cli;
pub mod error;
pub mod hex;
pub mod index;
pub mod predicates;
pub mod scramble;

pub use charset::{characters_matching, CharClass};
pub use error::{Result, TextkitError};
pub use self::hex::{decode, encode, hex_from_string, string_from_hex};
pub use index::GraphemeIndex;
pub use predicates::{contains_ignore_case, OptionStrExt};
pub use scramble::{scramble, scramble_with};
