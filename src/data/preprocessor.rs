// ============================================================
// Layer 4 — Utterance Preprocessor
// ============================================================
// Removes CHAT annotation markup from a raw utterance so that
// only the spoken words remain.
//
// Cleaning steps (applied in order):
//   1. Remove bracketed annotations   [//]  [= ...]  [+ bch]
//   2. Remove @-markers               @o  @b  @wp
//   3. Remove angle-bracket groups    <...>
//   4. Remove continuation markers    +...
//   5. Remove stray & and ~
//   6. Collapse runs of whitespace to a single space and trim
//   7. Drop a trailing standalone terminator (. ? !) and trim
//
// Utterances that still contain an ASCII Latin letter after
// cleaning are not part of the target-script corpus.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use once_cell::sync::Lazy;
use regex::Regex;

static BRACKETED:    Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").expect("valid regex"));
static AT_MARKER:    Lazy<Regex> = Lazy::new(|| Regex::new(r"@[a-z]+").expect("valid regex"));
static ANGLE_TAG:    Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+\.\.\.").expect("valid regex"));
static STRAY:        Lazy<Regex> = Lazy::new(|| Regex::new(r"[&~]").expect("valid regex"));
static WHITESPACE:   Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static TERMINATOR:   Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)[.?!]$").expect("valid regex"));

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Strip CHAT markup from a raw utterance.
    pub fn clean(&self, utterance: &str) -> String {
        let text = BRACKETED.replace_all(utterance, "");
        let text = AT_MARKER.replace_all(&text, "");
        let text = ANGLE_TAG.replace_all(&text, "");
        let text = CONTINUATION.replace_all(&text, "");
        let text = STRAY.replace_all(&text, "");
        let text = WHITESPACE.replace_all(&text, " ");
        let text = text.trim();

        TERMINATOR.replace(text, "").trim().to_string()
    }

    /// True if `text` contains any of a-z or A-Z.
    pub fn contains_latin(&self, text: &str) -> bool {
        text.chars().any(|c| c.is_ascii_alphabetic())
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_bracketed_annotation() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("ねこ [//] だよ ."), "ねこ だよ");
    }

    #[test]
    fn test_bracket_match_is_not_greedy() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("あ [/] い [= え] う"), "あ い う");
    }

    #[test]
    fn test_removes_at_markers() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("ワンワン@o だよ"), "ワンワン だよ");
    }

    #[test]
    fn test_removes_angle_groups() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("<ねこ ねこ> [/] ねこ"), "ねこ");
    }

    #[test]
    fn test_removes_continuation_and_stray_chars() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("あの +..."), "あの");
        assert_eq!(p.clean("&あ ~ね"), "あ ね");
    }

    #[test]
    fn test_collapses_whitespace() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  あ \t  い  "), "あ い");
    }

    #[test]
    fn test_drops_trailing_terminators() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("これ なに ?"), "これ なに");
        assert_eq!(p.clean("やった !"), "やった");
        assert_eq!(p.clean("."), "");
        // punctuation attached to a word is left alone
        assert_eq!(p.clean("ね。"), "ね。");
    }

    #[test]
    fn test_contains_latin() {
        let p = Preprocessor::new();
        assert!(p.contains_latin("hello world"));
        assert!(p.contains_latin("ねこ X"));
        assert!(!p.contains_latin("ねこ だよ"));
        assert!(!p.contains_latin("１２３ ワン"));
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
