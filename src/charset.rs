use crate::error::{Result, TextkitError};
use serde::{Deserialize, Serialize};

/// Named character classes that can be enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharClass {
    /// Unicode numeric characters
    Digits,
    Letters,
    Lowercase,
    Uppercase,
    Alphanumerics,
    Whitespace,
    /// ASCII punctuation only
    Punctuation,
    Control,
    /// `0-9`, `a-f`, `A-F`
    #[serde(rename = "hex")]
    HexDigits,
    AsciiDigits,
}

impl CharClass {
    pub const ALL: [CharClass; 10] = [
        Self::Digits,
        Self::Letters,
        Self::Lowercase,
        Self::Uppercase,
        Self::Alphanumerics,
        Self::Whitespace,
        Self::Punctuation,
        Self::Control,
        Self::HexDigits,
        Self::AsciiDigits,
    ];

    /// Name accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Self::Digits => "digits",
            Self::Letters => "letters",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Alphanumerics => "alphanumerics",
            Self::Whitespace => "whitespace",
            Self::Punctuation => "punctuation",
            Self::Control => "control",
            Self::HexDigits => "hex",
            Self::AsciiDigits => "ascii-digits",
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Digits => c.is_numeric(),
            Self::Letters => c.is_alphabetic(),
            Self::Lowercase => c.is_lowercase(),
            Self::Uppercase => c.is_uppercase(),
            Self::Alphanumerics => c.is_alphanumeric(),
            Self::Whitespace => c.is_whitespace(),
            Self::Punctuation => c.is_ascii_punctuation(),
            Self::Control => c.is_control(),
            Self::HexDigits => c.is_ascii_hexdigit(),
            Self::AsciiDigits => c.is_ascii_digit(),
        }
    }

    /// Every character in the class, ascending by code point
    pub fn characters(self) -> impl Iterator<Item = char> {
        characters_matching(move |c| self.contains(c))
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CharClass {
    type Err = TextkitError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "digits" => Ok(Self::Digits),
            "letters" => Ok(Self::Letters),
            "lowercase" => Ok(Self::Lowercase),
            "uppercase" => Ok(Self::Uppercase),
            "alphanumerics" => Ok(Self::Alphanumerics),
            "whitespace" => Ok(Self::Whitespace),
            "punctuation" => Ok(Self::Punctuation),
            "control" => Ok(Self::Control),
            "hex" => Ok(Self::HexDigits),
            "ascii-digits" => Ok(Self::AsciiDigits),
            _ => Err(TextkitError::UnknownCharClass(s.to_string())),
        }
    }
}

/// Enumerate all Unicode scalar values accepted by `pred`
///
/// Walks every plane lazily; surrogate code points are skipped.
pub fn characters_matching<F>(pred: F) -> impl Iterator<Item = char>
where
    F: Fn(char) -> bool,
{
    (0..=u32::from(char::MAX))
        .filter_map(char::from_u32)
        .filter(move |&c| pred(c))
}
