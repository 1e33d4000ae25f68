// ============================================================
// Layer 5 — Language Model Scoring
// ============================================================
// Turns sentences into token-level surprisal.
//
//   ngram.rs   — Backoff bigram language model
//                Holds ARPA-style base-10 log probabilities
//                and backoff weights, and turns a token
//                sequence into per-token surprisal in bits.
//
//   scorer.rs  — NgramScorer
//                Pairs a HuggingFace tokenizer with an
//                NgramModel and implements SurprisalScorer
//                for whole sentences.
//
// Reference: Jurafsky & Martin, Speech and Language
//            Processing §3 (N-gram Language Models)

/// Backoff bigram model and surprisal arithmetic
pub mod ngram;

/// Tokenizer + n-gram model behind the SurprisalScorer trait
pub mod scorer;
