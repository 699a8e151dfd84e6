use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use crate::{Span, slice_chars};

/// Longest span of `seq` in which no unit repeats.
///
/// Sliding window over `seq` with the last index each unit was seen at. When
/// the current unit was last seen inside the window, the window start jumps
/// just past that occurrence. Ties keep the first span found.
pub fn longest_unique_span<T: Eq + Hash>(seq: &[T]) -> Span {
    let mut last_seen: HashMap<&T, usize> = HashMap::new();
    let mut start = 0;
    let mut best = Span::default();

    for (i, unit) in seq.iter().enumerate() {
        if let Some(&j) = last_seen.get(unit) {
            if j >= start {
                start = j + 1;
            }
        }
        last_seen.insert(unit, i);

        let len = i - start + 1;
        if len > best.len {
            best = Span::new(start, len);
        }
    }

    debug!(
        "longest_unique_span: n={} distinct={} best={:?}",
        seq.len(),
        last_seen.len(),
        best
    );
    best
}

/// Longest substring of `s` without a repeated `char`.
pub fn longest_unique_substring(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    slice_chars(s, longest_unique_span(&chars))
}
