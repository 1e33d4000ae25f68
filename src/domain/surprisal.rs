// ============================================================
// Layer 3 — Surprisal Results
// ============================================================
// The value returned by a SurprisalScorer for a batch of
// sentences: one SentenceSurprisal per input sentence, in
// input order, each holding its tokens in sentence order.

use serde::{Deserialize, Serialize};

/// Surprisal of a single token, in bits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSurprisal {
    pub text:      String,
    pub surprisal: f64,
}

impl TokenSurprisal {
    pub fn new(text: impl Into<String>, surprisal: f64) -> Self {
        Self { text: text.into(), surprisal }
    }

    /// `token<TAB>surprisal` with three decimal places
    pub fn to_line(&self) -> String {
        format!("{}\t{:.3}", self.text, self.surprisal)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceSurprisal {
    pub tokens: Vec<TokenSurprisal>,
}

impl SentenceSurprisal {
    /// Sum of token surprisals
    pub fn total(&self) -> f64 {
        self.tokens.iter().map(|t| t.surprisal).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurprisalBatch {
    pub sentences: Vec<SentenceSurprisal>,
}
