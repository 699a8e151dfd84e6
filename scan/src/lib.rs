mod kmp;
mod manacher;
mod naive;
mod sunday;
mod window;

use std::ops::Range;

/// Runtime-selectable substring search over bytes.
///
/// Every implementor follows the same empty-pattern convention: the empty
/// pattern matches at index 0, and `find_all` reports every boundary `0..=n`.
pub trait StringSearch {
    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize>;
    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize>;
    fn find(text: &str, pattern: &str) -> Option<usize> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::find_bytes(text_bytes, pattern_bytes)
    }
    fn find_all(text: &str, pattern: &str) -> Vec<usize> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::find_all_bytes(text_bytes, pattern_bytes)
    }
}

/// A contiguous run `[start, start + len)` of an input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Slice `s` by a span counted in `char`s rather than bytes.
pub(crate) fn slice_chars(s: &str, span: Span) -> &str {
    let mut boundaries = s
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(s.len()));
    let Some(start) = boundaries.nth(span.start) else {
        return "";
    };
    let end = if span.len == 0 {
        start
    } else {
        boundaries.nth(span.len - 1).unwrap_or(s.len())
    };
    &s[start..end]
}

pub use kmp::{Kmp, kmp_find, kmp_find_all, prefix_function};
pub use manacher::{longest_palindrome, longest_palindrome_span, palindrome_radii};
pub use naive::{Naive, naive_find, naive_find_all};
pub use sunday::{ShiftTable, Sunday, sunday_find, sunday_find_all};
pub use window::{longest_unique_span, longest_unique_substring};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_accessors() {
        let span = Span::new(3, 4);
        assert_eq!(span.end(), 7);
        assert_eq!(span.range(), 3..7);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn slice_chars_multibyte() {
        let s = "añb🌍c";
        assert_eq!(slice_chars(s, Span::new(1, 3)), "ñb🌍");
        assert_eq!(slice_chars(s, Span::new(3, 2)), "🌍c");
        assert_eq!(slice_chars(s, Span::new(5, 0)), "");
        assert_eq!(slice_chars(s, Span::new(2, 0)), "");
        assert_eq!(slice_chars("", Span::default()), "");
    }
}
