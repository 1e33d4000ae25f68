// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing what the
// tools work with: split ratios, transcript utterances, and
// surprisal results.
//
// Rules for this layer:
//   - NO file I/O
//   - NO tokenizer or model code
//   - Only plain data types, validation, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Train/valid/test ratios and their validation
pub mod ratios;

// A speaker utterance taken from a transcript line
pub mod utterance;

// Token-level surprisal results
pub mod surprisal;

// Core abstractions (traits) that other layers implement
pub mod traits;
