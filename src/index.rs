use std::ops::{Bound, RangeBounds};
use unicode_segmentation::UnicodeSegmentation;

/// Integer indexing over user-perceived characters (grapheme clusters)
pub trait GraphemeIndex {
    fn grapheme_count(&self) -> usize;

    /// Character at `index`, or `None` past the end
    fn grapheme_at(&self, index: usize) -> Option<&str>;

    /// Slice covering the characters in `range`
    ///
    /// Returns `None` if the range is inverted or runs past the end.
    /// An empty range inside the string gives `Some("")`.
    fn substring<R: RangeBounds<usize>>(&self, range: R) -> Option<&str>;
}

impl GraphemeIndex for str {
    fn grapheme_count(&self) -> usize {
        self.graphemes(true).count()
    }

    fn grapheme_at(&self, index: usize) -> Option<&str> {
        self.graphemes(true).nth(index)
    }

    fn substring<R: RangeBounds<usize>>(&self, range: R) -> Option<&str> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => Some(e.checked_add(1)?),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => None,
        };
        if end.is_some_and(|e| e < start) {
            return None;
        }

        // Byte offset of every cluster boundary, including the end
        let boundaries: Vec<usize> = self
            .grapheme_indices(true)
            .map(|(offset, _)| offset)
            .chain(std::iter::once(self.len()))
            .collect();
        let end = end.unwrap_or(boundaries.len() - 1);

        let from = *boundaries.get(start)?;
        let to = *boundaries.get(end)?;
        self.get(from..to)
    }
}
