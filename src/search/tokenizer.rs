//! Text normalization into word tokens

use std::sync::LazyLock;

use regex::Regex;

/// Anything outside the Unicode letter (L*) and number (N*) categories,
/// other than whitespace. Combining marks and symbols such as `Ⓐ` fall here.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("non-word pattern is valid"));

/// Tokenize text into normalized word tokens
///
/// Lowercases, turns everything that is not a letter, digit or whitespace
/// into a space, then splits on whitespace. No stemming, no stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// True for scripts written without spaces between words
/// (Han, Hiragana, Katakana, Thai).
pub fn is_unsegmented_char(c: char) -> bool {
    matches!(
        c as u32,
        0x0E00..=0x0E7F // Thai
            | 0x3040..=0x309F // Hiragana
            | 0x30A0..=0x30FF // Katakana
            | 0x3400..=0x4DBF // CJK Extension A
            | 0x4E00..=0x9FFF // CJK Unified Ideographs
            | 0xF900..=0xFAFF // CJK Compatibility Ideographs
            | 0x20000..=0x2FFFF // CJK Extensions B..F
    )
}

/// True when every character of the term belongs to an unsegmented script
pub fn is_unsegmented(term: &str) -> bool {
    !term.is_empty() && term.chars().all(is_unsegmented_char)
}
