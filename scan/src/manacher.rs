//! Longest palindromic substring in linear time (Manacher).
//!
//! The input is interleaved with a sentinel so that odd and even palindromes
//! both become odd palindromes of the transformed sequence. The sentinel is
//! `None` while real units are `Some(&unit)`, so it can never collide with the
//! input alphabet.

use log::debug;

use crate::{Span, slice_chars};

fn transform<T>(seq: &[T]) -> Vec<Option<&T>> {
    let mut out = Vec::with_capacity(2 * seq.len() + 1);
    out.push(None);
    for unit in seq {
        out.push(Some(unit));
        out.push(None);
    }
    out
}

/// Palindrome radius at every position of the transformed sequence
/// (length `2n + 1`).
///
/// A radius of `r` at position `i` means the transformed units
/// `[i - r, i + r]` form a palindrome, which maps back to a palindrome of
/// length `r` in `seq`.
pub fn palindrome_radii<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    let t = transform(seq);
    let len = t.len();
    let mut radius = vec![0usize; len];

    // center and right edge of the palindrome reaching furthest right
    let mut center = 0;
    let mut right = 0;

    for i in 0..len {
        let mut r = if i < right {
            radius[2 * center - i].min(right - i)
        } else {
            0
        };

        while i >= r + 1 && i + r + 1 < len && t[i - r - 1] == t[i + r + 1] {
            r += 1;
        }
        radius[i] = r;

        if i + r > right {
            center = i;
            right = i + r;
        }
    }

    radius
}

/// Leftmost longest palindromic span of `seq`.
pub fn longest_palindrome_span<T: PartialEq>(seq: &[T]) -> Span {
    let radius = palindrome_radii(seq);

    let mut best_center = 0;
    let mut best_radius = 0;
    for (i, &r) in radius.iter().enumerate() {
        if r > best_radius {
            best_center = i;
            best_radius = r;
        }
    }

    let span = Span::new((best_center - best_radius) / 2, best_radius);
    debug!("longest_palindrome_span: n={} best={:?}", seq.len(), span);
    span
}

/// Longest palindromic substring of `s`, comparing `char`s.
pub fn longest_palindrome(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    slice_chars(s, longest_palindrome_span(&chars))
}
