//! Case folding with offset tracking
//!
//! Lowercasing can change byte lengths (`İ` becomes two chars), so a match
//! found in the folded text is mapped back onto the original string's
//! char boundaries.

use std::ops::Range;

/// Lowercase char by char
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether the folded form of `haystack` contains an already folded
/// `needle`, without building the folded string
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    let mut folded = haystack.chars().flat_map(char::to_lowercase);
    loop {
        let mut candidate = folded.clone();
        if needle.chars().all(|expected| candidate.next() == Some(expected)) {
            return true;
        }
        if folded.next().is_none() {
            return false;
        }
    }
}

/// First occurrence of an already folded `needle` in `haystack`, as a byte
/// range of the original `haystack`
pub fn find_folded(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    let mut folded = String::with_capacity(haystack.len());
    // origin[i] = byte offset in `haystack` of the char that produced folded byte i
    let mut origin = Vec::with_capacity(haystack.len());
    for (offset, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origin.resize(folded.len(), offset);
        }
    }

    let start = folded.find(needle)?;
    let end = start + needle.len();

    let first = origin[start];
    let last = origin[end - 1];
    let last_len = haystack[last..].chars().next().map_or(0, char::len_utf8);
    Some(first..last + last_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        assert_eq!(find_folded("Google Search", "search"), Some(7..13));
        assert_eq!(find_folded("Google Search", "xyz"), None);
        assert_eq!(find_folded("anything", ""), None);
    }

    #[test]
    fn test_first_occurrence_only() {
        assert_eq!(find_folded("ab AB ab", "ab"), Some(0..2));
    }

    #[test]
    fn test_multibyte_title() {
        let title = "我的 Rust 收藏";
        let range = find_folded(title, "rust").unwrap();
        assert_eq!(&title[range], "Rust");
    }

    #[test]
    fn test_expanding_lowercase() {
        // 'İ' folds to "i\u{307}", growing the folded text
        let title = "İstanbul Guide";
        let range = find_folded(title, "guide").unwrap();
        assert_eq!(&title[range], "Guide");

        // A match ending inside an expansion covers the whole original char
        let range = find_folded(title, "i").unwrap();
        assert_eq!(&title[range], "İ");
    }

    #[test]
    fn test_contains_folded_agrees_with_fold_case() {
        let haystacks = ["https://Docs.RS/serde", "İstanbul", "", "ÄÖÜ straße", "aaab"];
        let needles = ["", "docs.rs", "rs/s", "i\u{307}st", "\u{307}", "öü s", "aab", "zzz", "aaaab"];
        for haystack in haystacks {
            for needle in needles {
                assert_eq!(
                    contains_folded(haystack, needle),
                    fold_case(haystack).contains(needle),
                    "{haystack:?} / {needle:?}"
                );
            }
        }
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("HeLLo ÄÖ"), "hello äö");
    }
}
