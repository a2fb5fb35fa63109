/// True if any entry of `haystack` equals `needle`, ignoring case
///
/// Comparison lowercases both sides, so it covers non-ASCII letters too.
pub fn contains_ignore_case<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystack
        .iter()
        .any(|item| item.as_ref().to_lowercase() == needle)
}

/// Emptiness checks for optional strings
pub trait OptionStrExt {
    fn is_none_or_empty(&self) -> bool;

    /// None, empty, or whitespace only
    fn is_none_or_blank(&self) -> bool;
}

impl<S: AsRef<str>> OptionStrExt for Option<S> {
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().map_or(true, |s| s.as_ref().is_empty())
    }

    fn is_none_or_blank(&self) -> bool {
        self.as_ref()
            .map_or(true, |s| s.as_ref().chars().all(char::is_whitespace))
    }
}
