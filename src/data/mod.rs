// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// File and text processing for corpus preparation.
//
// Extraction flows in this order:
//
//   .cha transcripts
//       │
//       ▼
//   TranscriptLoader  → walks the directory, parses speaker lines
//       │
//       ▼
//   Preprocessor      → strips CHAT markup, flags Latin text
//       │
//       ▼
//   corpus::write_lines → one utterance per line
//
// Splitting flows in this order:
//
//   corpus::read_lines → lines with terminators, bad bytes dropped
//       │
//       ▼
//   splitter          → seeded shuffle + train/valid/test slices
//       │
//       ▼
//   corpus::write_lines → three partition files
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads and writes line-oriented corpus files
pub mod corpus;

/// Finds .cha files and extracts speaker utterances
pub mod loader;

/// Cleans CHAT annotation markup out of utterances
pub mod preprocessor;

/// Seeded shuffle and train/valid/test partitioning
pub mod splitter;
