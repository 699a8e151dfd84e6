use log::trace;

use crate::StringSearch;

pub struct Kmp;

impl StringSearch for Kmp {
    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        kmp_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        kmp_find_all(text, pattern)
    }
}

/// Build the prefix function of `pattern`: `table[i]` is the length of the
/// longest proper prefix of `pattern[..=i]` which is also a suffix of it.
pub fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut table = vec![0; m];

    let mut border = 0;
    for i in 1..m {
        while border > 0 && pattern[i] != pattern[border] {
            border = table[border - 1];
        }
        if pattern[i] == pattern[border] {
            border += 1;
        }
        table[i] = border;
    }

    trace!("prefix_function: built table for pattern of length {m}");
    table
}

/// First occurrence of `pattern` in `text`, or `None`.
///
/// The empty pattern matches at 0.
pub fn kmp_find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let table = prefix_function(pattern);

    let mut j = 0;
    for (i, unit) in text.iter().enumerate() {
        while j > 0 && *unit != pattern[j] {
            j = table[j - 1];
        }
        if *unit == pattern[j] {
            j += 1;
        }
        if j == m {
            // full match ending at i
            return Some(i + 1 - m);
        }
    }

    None
}

/// All (possibly overlapping) occurrences of `pattern` in `text`, left to right.
pub fn kmp_find_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let table = prefix_function(pattern);
    let mut result = Vec::new();

    let mut j = 0usize; // index in pattern
    for (i, unit) in text.iter().enumerate() {
        while j > 0 && *unit != pattern[j] {
            j = table[j - 1];
        }
        if *unit == pattern[j] {
            j += 1;
        }
        if j == m {
            result.push(i + 1 - m);
            j = table[j - 1];
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_function() {
        assert_eq!(prefix_function(b"abcabd"), vec![0, 0, 0, 1, 2, 0]);
        assert_eq!(prefix_function(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(prefix_function(b"aaaa"), vec![0, 1, 2, 3]);
        assert!(prefix_function::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_prefix_function_bounds() {
        let table = prefix_function(b"abacabadabacaba");
        assert_eq!(table[0], 0);
        for (i, &border) in table.iter().enumerate() {
            assert!(border <= i);
        }
    }

    #[test]
    fn test_kmp_basic() {
        assert_eq!(kmp_find(b"abcdecdfg", b"cdfg"), Some(5));
        assert_eq!(kmp_find(b"abcdecdeffg", b"cdef"), Some(5));
        assert_eq!(kmp_find(b"ababcabcabababd", b"ababd"), Some(10));
    }

    #[test]
    fn test_kmp_not_found() {
        assert_eq!(kmp_find(b"hello world", b"rust"), None);
        assert_eq!(kmp_find(b"ab", b"abc"), None);
        assert_eq!(kmp_find(b"", b"a"), None);
    }

    #[test]
    fn test_kmp_empty_pattern() {
        let pat: &[u8] = b"";
        assert_eq!(kmp_find(b"abc", pat), Some(0));
        assert_eq!(kmp_find(b"", pat), Some(0));
        assert_eq!(kmp_find_all(b"abc", pat), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_kmp_find_all_overlapping() {
        assert_eq!(kmp_find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(kmp_find_all(b"abababa", b"aba"), vec![0, 2, 4]);
        assert_eq!(kmp_find_all(b"aabaa", b"aa"), vec![0, 3]);
    }

    #[test]
    fn test_kmp_chars() {
        let text: Vec<char> = "日本語の日本".chars().collect();
        let pattern: Vec<char> = "日本".chars().collect();
        assert_eq!(kmp_find_all(&text, &pattern), vec![0, 4]);
    }

    #[test]
    fn test_kmp_utf8() {
        let hay = "🌍hello🌍hello";
        let pat = "🌍hello";

        assert_eq!(Kmp::find(hay, pat), Some(0));
        assert_eq!(Kmp::find_all(hay, pat), vec![0, pat.len()]);
    }
}
