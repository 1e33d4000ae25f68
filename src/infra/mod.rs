// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Loads pretrained model checkpoints from disk.
//
//   checkpoint.rs      — Checkpoint directory resolution
//                        Maps a model name to
//                        {models_dir}/{model_name}/ and reads the
//                        n-gram tables (ngram.json) from it.
//
//   tokenizer_store.rs — Tokenizer loading
//                        Reads the HuggingFace tokenizer.json that
//                        belongs to the same checkpoint, so scoring
//                        uses the vocabulary the model was built on.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model checkpoint lookup and loading
pub mod checkpoint;

/// Tokenizer loading
pub mod tokenizer_store;
