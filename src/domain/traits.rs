// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The surprisal reporter programs against SurprisalScorer and
// never against a concrete model, so the n-gram checkpoint
// model and a fixed-value stub in tests are interchangeable.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::surprisal::SurprisalBatch;

// ─── SurprisalScorer ──────────────────────────────────────────────────────────
/// Any language model that can assign per-token surprisal.
///
/// Implementations:
///   - NgramScorer → tokenizer.json + backoff bigram checkpoint
pub trait SurprisalScorer {
    /// Score all sentences as one batch.
    /// The result holds one entry per sentence, in input order.
    fn score_batch(&self, sentences: &[&str]) -> Result<SurprisalBatch>;
}
