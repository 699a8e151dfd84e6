use std::collections::HashSet;

use rand::{Rng, SeedableRng, distributions::Uniform, rngs::StdRng};
use scan::{
    Kmp, Naive, StringSearch, Sunday, kmp_find, kmp_find_all, longest_palindrome,
    longest_palindrome_span, longest_unique_span, longest_unique_substring, naive_find,
    naive_find_all, sunday_find, sunday_find_all,
};
use test_case::test_case;

fn random_bytes(rng: &mut StdRng, alphabet: u8, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    let letters = Uniform::new(b'a', b'a' + alphabet);
    (0..len).map(|_| rng.sample(letters)).collect()
}

fn is_unique(seq: &[u8]) -> bool {
    let mut seen = HashSet::new();
    seq.iter().all(|b| seen.insert(*b))
}

fn is_palindrome(seq: &[u8]) -> bool {
    seq.iter().eq(seq.iter().rev())
}

fn brute_longest_unique(seq: &[u8]) -> usize {
    let n = seq.len();
    (0..n)
        .flat_map(|i| (i + 1..=n).map(move |j| (i, j)))
        .filter(|&(i, j)| is_unique(&seq[i..j]))
        .map(|(i, j)| j - i)
        .max()
        .unwrap_or(0)
}

fn brute_longest_palindrome(seq: &[u8]) -> usize {
    let n = seq.len();
    (0..n)
        .flat_map(|i| (i + 1..=n).map(move |j| (i, j)))
        .filter(|&(i, j)| is_palindrome(&seq[i..j]))
        .map(|(i, j)| j - i)
        .max()
        .unwrap_or(0)
}

#[test]
fn unique_span_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let alphabet = rng.gen_range(1..=6);
        let seq = random_bytes(&mut rng, alphabet, 24);
        let span = longest_unique_span(&seq);

        assert!(span.end() <= seq.len());
        assert!(is_unique(&seq[span.range()]), "{:?} in {:?}", span, seq);
        assert_eq!(span.len, brute_longest_unique(&seq), "{:?}", seq);
    }
}

#[test]
fn palindrome_span_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0xa11ce);
    for _ in 0..500 {
        let alphabet = rng.gen_range(1..=3);
        let seq = random_bytes(&mut rng, alphabet, 24);
        let span = longest_palindrome_span(&seq);

        assert!(span.end() <= seq.len());
        assert!(is_palindrome(&seq[span.range()]), "{:?} in {:?}", span, seq);
        assert_eq!(span.len, brute_longest_palindrome(&seq), "{:?}", seq);
    }
}

#[test]
fn searches_agree_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        let alphabet = rng.gen_range(1..=4);
        let text = random_bytes(&mut rng, alphabet, 40);
        let mut pattern = random_bytes(&mut rng, alphabet, 6);
        if pattern.is_empty() {
            pattern.push(b'a');
        }

        let expected = naive_find(&text, &pattern);
        assert_eq!(kmp_find(&text, &pattern), expected, "{:?} / {:?}", text, pattern);
        assert_eq!(sunday_find(&text, &pattern), expected, "{:?} / {:?}", text, pattern);

        let expected_all = naive_find_all(&text, &pattern);
        assert_eq!(kmp_find_all(&text, &pattern), expected_all);
        assert_eq!(sunday_find_all(&text, &pattern), expected_all);
    }
}

#[test]
fn planted_pattern_is_found_and_reproduced() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let text = random_bytes(&mut rng, 3, 60);
        if text.is_empty() {
            continue;
        }
        let start = rng.gen_range(0..text.len());
        let end = rng.gen_range(start + 1..=text.len());
        let pattern = &text[start..end];

        let idx = kmp_find(&text, pattern).expect("planted pattern must be found");
        assert!(idx <= start);
        assert_eq!(&text[idx..idx + pattern.len()], pattern);
        assert_eq!(sunday_find(&text, pattern), Some(idx));
    }
}

#[test_case("abcdecdfg", "cdfg", Some(5) ; "kmp case one")]
#[test_case("abcdecdeffg", "cdef", Some(5) ; "kmp case two")]
#[test_case("baaaabaaaabaaaabaaaa", "aaaaa", None ; "runs of four")]
#[test_case("baaaabaaaabaaaabaaaa", "abaaaa", Some(4) ; "across a run")]
#[test_case("hello world", "world", Some(6) ; "suffix")]
#[test_case("", "a", None ; "empty text")]
#[test_case("abc", "", Some(0) ; "empty pattern")]
fn every_search_finds_first_match(text: &str, pattern: &str, expected: Option<usize>) {
    assert_eq!(Naive::find(text, pattern), expected);
    assert_eq!(Kmp::find(text, pattern), expected);
    assert_eq!(Sunday::find(text, pattern), expected);
}

#[test_case("abcabcbb", "abc" ; "repeating block")]
#[test_case("bbbbb", "b" ; "single unit")]
#[test_case("pwwkew", "wke" ; "middle")]
#[test_case("", "" ; "empty")]
fn longest_unique(input: &str, expected: &str) {
    assert_eq!(longest_unique_substring(input), expected);
}

#[test_case("aac123caa", "aa" ; "digits in the middle")]
#[test_case("babad", "bab" ; "leftmost of two")]
#[test_case("cbbd", "bb" ; "even length")]
#[test_case("", "" ; "empty")]
fn longest_palindromic(input: &str, expected: &str) {
    assert_eq!(longest_palindrome(input), expected);
}
