// ============================================================
// Layer 3 — Transcript Utterance
// ============================================================
// A speaker turn from a CHAT transcript. Main-tier lines look
// like:
//
//   *CHI:	ねこ [//] だよ .
//
// The speaker label is everything before the first colon
// (`*CHI`), the utterance is everything after it.

use serde::{Deserialize, Serialize};

/// Marks a main-tier speaker line
pub const SPEAKER_MARKER: char = '*';

/// One speaker turn before or after cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// Speaker label including the marker, e.g. `*CHI`
    pub speaker: String,

    /// Utterance text
    pub text: String,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text:    text.into(),
        }
    }

    /// Parse a transcript line into an utterance.
    ///
    /// Returns `None` for lines that are not speaker lines, have no
    /// colon, or carry an empty utterance or a lone period.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with(SPEAKER_MARKER) {
            return None;
        }

        let (speaker, text) = line.split_once(':')?;
        let text = text.trim();
        if text.is_empty() || text == "." {
            return None;
        }

        Some(Self::new(speaker.trim(), text))
    }

    /// Render as a corpus line, optionally prefixed by the speaker label.
    pub fn to_corpus_line(&self, include_speaker: bool) -> String {
        if include_speaker {
            format!("{}: {}", self.speaker, self.text)
        } else {
            self.text.clone()
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_speaker_line() {
        let u = Utterance::parse_line("*CHI:\tねこ だよ .").unwrap();
        assert_eq!(u.speaker, "*CHI");
        assert_eq!(u.text, "ねこ だよ .");
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let u = Utterance::parse_line("  *MOT: じかん: いま").unwrap();
        assert_eq!(u.speaker, "*MOT");
        assert_eq!(u.text, "じかん: いま");
    }

    #[test]
    fn test_ignores_non_speaker_lines() {
        assert!(Utterance::parse_line("%mor:\tn|neko").is_none());
        assert!(Utterance::parse_line("@Begin").is_none());
        assert!(Utterance::parse_line("").is_none());
    }

    #[test]
    fn test_skips_empty_or_period() {
        assert!(Utterance::parse_line("*CHI:").is_none());
        assert!(Utterance::parse_line("*CHI:   ").is_none());
        assert!(Utterance::parse_line("*CHI: .").is_none());
        assert!(Utterance::parse_line("*CHI no colon").is_none());
    }

    #[test]
    fn test_corpus_line_formats() {
        let u = Utterance::new("*CHI", "ア");
        assert_eq!(u.to_corpus_line(false), "ア");
        assert_eq!(u.to_corpus_line(true), "*CHI: ア");
    }
}
