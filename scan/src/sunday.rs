use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

use crate::StringSearch;

pub struct Sunday;

impl StringSearch for Sunday {
    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        sunday_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        sunday_find_all(text, pattern)
    }
}

/// Bad-character table for Sunday's quick search.
///
/// Keyed on the unit just past the current window: a unit whose rightmost
/// occurrence in the pattern is at `k` shifts the window by `m - k`, any
/// other unit by `m + 1`.
#[derive(Debug, Clone)]
pub struct ShiftTable<'p, T> {
    shifts: HashMap<&'p T, usize>,
    default_shift: usize,
}

impl<'p, T: Eq + Hash> ShiftTable<'p, T> {
    pub fn new(pattern: &'p [T]) -> Self {
        let m = pattern.len();
        let mut shifts = HashMap::with_capacity(m);
        // later occurrences overwrite earlier ones, leaving the rightmost
        for (i, unit) in pattern.iter().enumerate() {
            shifts.insert(unit, m - i);
        }
        trace!(
            "ShiftTable::new: {} distinct units, default shift {}",
            shifts.len(),
            m + 1
        );

        Self {
            shifts,
            default_shift: m + 1,
        }
    }

    pub fn shift(&self, unit: &T) -> usize {
        self.shifts.get(unit).copied().unwrap_or(self.default_shift)
    }
}

/// First occurrence of `pattern` in `text` using Sunday's quick search.
///
/// The empty pattern matches at 0.
pub fn sunday_find<T: Eq + Hash>(text: &[T], pattern: &[T]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let table = ShiftTable::new(pattern);

    let mut i = 0usize; // window start
    while i + m <= n {
        if text[i..i + m] == *pattern {
            return Some(i);
        }
        if i + m >= n {
            break;
        }
        i += table.shift(&text[i + m]);
    }

    None
}

/// All (possibly overlapping) occurrences of `pattern` in `text`.
pub fn sunday_find_all<T: Eq + Hash>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let table = ShiftTable::new(pattern);
    let mut res = Vec::new();

    let mut i = 0usize;
    while i + m <= n {
        if text[i..i + m] == *pattern {
            res.push(i);
        }
        if i + m >= n {
            break;
        }
        // the shift never skips an alignment that could match, so it is
        // valid after a match as well
        i += table.shift(&text[i + m]);
    }

    res
}
