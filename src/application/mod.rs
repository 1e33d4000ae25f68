// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case takes a config, drives the lower layers, and
// returns a report. Printing is left to Layer 1.
//
// Rules for this layer:
//   - No regex or n-gram math here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Shuffle and split a corpus into train/valid/test
pub mod split_use_case;

// Build a corpus from CHAT transcripts
pub mod extract_use_case;

// Token-level surprisal for a sentence pair
pub mod surprisal_use_case;
