// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the HuggingFace tokenizer saved alongside a model
// checkpoint. Any tokenizer.json that Tokenizer::from_file
// accepts works (WordLevel, BPE, Unigram, ...).

use anyhow::Result;
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

pub const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// Load a previously saved tokenizer from its JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.dir.join(TOKENIZER_FILE);
        Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", path.display(), e
            ))
    }
}

// ─── Test Helpers ─────────────────────────────────────────────────────────────
// Writes a whitespace-split WordLevel tokenizer in HuggingFace
// format, the shape Tokenizer::from_file() expects.
#[cfg(test)]
pub(crate) fn write_word_level_tokenizer(dir: &Path, words: &[&str]) {
    let mut vocab = serde_json::json!({ "[UNK]": 0 });
    for (i, w) in words.iter().enumerate() {
        vocab[*w] = serde_json::json!(i + 1);
    }

    let tokenizer_json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": vocab,
            "unk_token": "[UNK]"
        }
    });

    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(
        dir.join(TOKENIZER_FILE),
        serde_json::to_string_pretty(&tokenizer_json).unwrap(),
    )
    .unwrap();
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_saved_tokenizer() {
        let dir = tempfile::tempdir().unwrap();
        write_word_level_tokenizer(dir.path(), &["ねこ", "だよ"]);

        let tok = TokenizerStore::new(dir.path()).load().unwrap();
        let enc = tok.encode("ねこ だよ", false).unwrap();
        assert_eq!(enc.get_tokens(), &["ねこ".to_string(), "だよ".to_string()]);
    }

    #[test]
    fn test_missing_tokenizer_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TokenizerStore::new(dir.path()).load().is_err());
    }
}
