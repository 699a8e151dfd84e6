use crate::StringSearch;

/// Brute-force baseline the other searches are checked and timed against.
pub struct Naive;

impl StringSearch for Naive {
    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        naive_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        naive_find_all(text, pattern)
    }
}

pub fn naive_find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    for i in 0..=n - m {
        let mut matched = true;
        for j in 0..m {
            if text[i + j] != pattern[j] {
                matched = false;
                break;
            }
        }
        if matched {
            return Some(i);
        }
    }

    None
}

pub fn naive_find_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut result = Vec::new();

    if m == 0 {
        for i in 0..=n {
            result.push(i);
        }
        return result;
    }
    if m > n {
        return result;
    }

    for i in 0..=n - m {
        if text[i..i + m] == *pattern {
            result.push(i);
        }
    }

    result
}
