// ============================================================
// Layer 5 — Backoff Bigram Model
// ============================================================
// Probabilities are stored the way ARPA files store them:
// base-10 logarithms, with a backoff weight on each unigram.
//
// For token w following context c:
//
//   log10 P(w | c) = bigram(c, w)                 if seen
//                  = backoff(c) + unigram(w)      otherwise
//
// An unseen context contributes a backoff of 0. An unseen
// token falls back to `<unk>` if the model has it, and to
// `unk_log_prob` if it does not.
//
// Surprisal is reported in bits:
//
//   surprisal(w | c) = -log10 P(w | c) / log10 2
//
// Every sentence starts in the `<s>` context. After an unseen
// token the next context is `<unk>`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::surprisal::{SentenceSurprisal, TokenSurprisal};

pub const SENTENCE_START: &str = "<s>";
pub const UNKNOWN: &str = "<unk>";

/// log10 probability used when neither the token nor `<unk>` is known
pub const DEFAULT_UNK_LOG_PROB: f64 = -7.0;

fn default_unk_log_prob() -> f64 {
    DEFAULT_UNK_LOG_PROB
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbBackoff {
    pub log_prob: f64,

    #[serde(default)]
    pub backoff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgramModel {
    /// token → (log10 prob, backoff weight)
    pub unigrams: HashMap<String, ProbBackoff>,

    /// context → token → log10 prob
    #[serde(default)]
    pub bigrams: HashMap<String, HashMap<String, f64>>,

    #[serde(default = "default_unk_log_prob")]
    pub unk_log_prob: f64,
}

impl NgramModel {
    pub fn is_known(&self, token: &str) -> bool {
        self.unigrams.contains_key(token)
    }

    fn unigram_log_prob(&self, token: &str) -> f64 {
        self.unigrams
            .get(token)
            .or_else(|| self.unigrams.get(UNKNOWN))
            .map_or(self.unk_log_prob, |u| u.log_prob)
    }

    /// log10 P(token | context)
    pub fn log_prob(&self, context: &str, token: &str) -> f64 {
        if let Some(lp) = self.bigrams.get(context).and_then(|next| next.get(token)) {
            return *lp;
        }

        let backoff = self.unigrams.get(context).map_or(0.0, |u| u.backoff);
        backoff + self.unigram_log_prob(token)
    }

    /// Surprisal in bits of `token` after `context`
    pub fn surprisal(&self, context: &str, token: &str) -> f64 {
        -self.log_prob(context, token) / std::f64::consts::LOG10_2
    }

    /// Per-token surprisal for one tokenised sentence.
    pub fn score_tokens(&self, tokens: &[String]) -> SentenceSurprisal {
        let mut context = SENTENCE_START;
        let mut scored  = Vec::with_capacity(tokens.len());

        for token in tokens {
            scored.push(TokenSurprisal::new(token.as_str(), self.surprisal(context, token)));
            context = if self.is_known(token) { token.as_str() } else { UNKNOWN };
        }

        SentenceSurprisal { tokens: scored }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    const LOG10_2: f64 = std::f64::consts::LOG10_2;

    pub(crate) fn sample_model() -> NgramModel {
        serde_json::from_value(serde_json::json!({
            "unigrams": {
                "<s>":  { "log_prob": -99.0, "backoff": -0.5 },
                "ねこ": { "log_prob": -1.0,  "backoff": -0.2 },
                "だよ": { "log_prob": -2.0 }
            },
            "bigrams": {
                "<s>": { "ねこ": (-LOG10_2) }
            },
            "unk_log_prob": -6.0
        }))
        .unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_seen_bigram() {
        let m = sample_model();
        // P = 0.5 → exactly one bit
        assert!((m.surprisal("<s>", "ねこ") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_backoff_to_unigram() {
        let m = sample_model();
        assert!((m.log_prob("ねこ", "だよ") - (-2.2)).abs() < 1e-9);
        assert!((m.surprisal("ねこ", "だよ") - 2.2 / LOG10_2).abs() < 1e-9);
    }

    #[test]
    fn test_unseen_context_has_no_backoff() {
        let m = sample_model();
        assert!((m.log_prob("いぬ", "だよ") - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_token_uses_unk_log_prob() {
        let m = sample_model();
        assert!((m.log_prob("だよ", "いぬ") - (-6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_token_uses_unk_entry_when_present() {
        let mut m = sample_model();
        m.unigrams.insert(UNKNOWN.to_string(), ProbBackoff { log_prob: -3.0, backoff: 0.0 });
        assert!((m.log_prob("だよ", "いぬ") - (-3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_default_unk_log_prob() {
        let m: NgramModel = serde_json::from_value(serde_json::json!({
            "unigrams": { "a": { "log_prob": -1.0 } }
        }))
        .unwrap();
        assert_eq!(m.unk_log_prob, DEFAULT_UNK_LOG_PROB);
        assert!(m.bigrams.is_empty());
    }

    #[test]
    fn test_score_tokens_walks_contexts() {
        let m = sample_model();
        let s = m.score_tokens(&tokens(&["ねこ", "だよ", "いぬ"]));
        let bits: Vec<f64> = s.tokens.iter().map(|t| t.surprisal).collect();

        assert_eq!(s.tokens.len(), 3);
        assert_eq!(s.tokens[1].text, "だよ");
        assert!((bits[0] - 1.0).abs() < 1e-9);
        assert!((bits[1] - 2.2 / LOG10_2).abs() < 1e-9);
        assert!((bits[2] - 6.0 / LOG10_2).abs() < 1e-9);
    }

    #[test]
    fn test_context_after_unknown_is_unk() {
        let mut m = sample_model();
        m.unigrams.insert(UNKNOWN.to_string(), ProbBackoff { log_prob: -3.0, backoff: -1.0 });
        let s = m.score_tokens(&tokens(&["いぬ", "だよ"]));
        // backoff(<unk>) + unigram(だよ) = -1.0 + -2.0
        assert!((s.tokens[1].surprisal - 3.0 / LOG10_2).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sentence() {
        assert!(sample_model().score_tokens(&[]).tokens.is_empty());
    }
}
