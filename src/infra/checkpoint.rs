// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Locates a pretrained model on disk and loads its tables.
//
// File layout per model:
//   {models_dir}/
//     retrained__childes_exp1/
//       tokenizer.json   ← HuggingFace tokenizer
//       ngram.json       ← backoff bigram tables
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::ml::ngram::NgramModel;

pub const NGRAM_FILE: &str = "ngram.json";

/// Resolves and reads one model checkpoint directory.
pub struct CheckpointManager {
    /// {models_dir}/{model_name}
    dir: PathBuf,

    model_name: String,
}

impl CheckpointManager {
    /// Point at `{models_dir}/{model_name}`.
    /// Names that would leave `models_dir` are rejected.
    pub fn new(models_dir: impl AsRef<Path>, model_name: &str) -> Result<Self> {
        if model_name.is_empty()
            || model_name == "."
            || model_name == ".."
            || model_name.contains(['/', '\\'])
        {
            bail!("Invalid model name '{}'", model_name);
        }

        Ok(Self {
            dir:        models_dir.as_ref().join(model_name),
            model_name: model_name.to_string(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Fail with a readable message if the checkpoint directory is missing.
    pub fn ensure_exists(&self) -> Result<()> {
        if !self.dir.is_dir() {
            bail!(
                "Cannot find model '{}' (expected directory '{}')",
                self.model_name,
                self.dir.display()
            );
        }
        Ok(())
    }

    /// Load the n-gram tables from `ngram.json`.
    pub fn load_ngram(&self) -> Result<NgramModel> {
        let path = self.dir.join(NGRAM_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read n-gram tables from '{}'", path.display()))?;

        let model: NgramModel = serde_json::from_str(&json)
            .with_context(|| format!("Malformed n-gram checkpoint '{}'", path.display()))?;

        if model.unigrams.is_empty() {
            bail!("N-gram checkpoint '{}' has no unigrams", path.display());
        }

        tracing::debug!(
            "Loaded {} unigram and {} bigram contexts from '{}'",
            model.unigrams.len(),
            model.bigrams.len(),
            path.display()
        );
        Ok(model)
    }
}
