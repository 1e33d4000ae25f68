// ============================================================
// Layer 2 — SurprisalUseCase
// ============================================================
// Scores a sentence pair with a pretrained model:
//
//   Step 1: Map the checkpoint name to a model name
//   Step 2: Load the model                 (Layer 6 - infra)
//   Step 3: Score both sentences at once   (Layer 5 - ml)
//
// The use case is generic over SurprisalScorer, so tests can
// run it against a stub model.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::surprisal::SurprisalBatch;
use crate::domain::traits::SurprisalScorer;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::scorer::NgramScorer;

/// Prefix joining a checkpoint name to its model name
pub const MODEL_PREFIX: &str = "retrained__";

/// e.g. `childes_exp1` → `retrained__childes_exp1`
pub fn model_name(checkpoint_name: &str) -> String {
    format!("{MODEL_PREFIX}{checkpoint_name}")
}

// ─── Surprisal Configuration ─────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurprisalConfig {
    pub checkpoint_name: String,
    pub sentence1:       String,
    pub sentence2:       String,
    pub models_dir:      PathBuf,
}

impl Default for SurprisalConfig {
    fn default() -> Self {
        Self {
            checkpoint_name: String::new(),
            sentence1:       String::new(),
            sentence2:       String::new(),
            models_dir:      PathBuf::from("models"),
        }
    }
}

impl SurprisalConfig {
    pub fn model_name(&self) -> String {
        model_name(&self.checkpoint_name)
    }
}

// ─── SurprisalUseCase ────────────────────────────────────────────────────────
pub struct SurprisalUseCase<S: SurprisalScorer> {
    scorer: S,
}

impl SurprisalUseCase<NgramScorer> {
    /// Load the model named by `cfg` from `cfg.models_dir`.
    pub fn from_config(cfg: &SurprisalConfig) -> Result<Self> {
        let ckpt   = CheckpointManager::new(&cfg.models_dir, &cfg.model_name())?;
        let scorer = NgramScorer::from_checkpoint(&ckpt)?;
        Ok(Self::new(scorer))
    }
}

impl<S: SurprisalScorer> SurprisalUseCase<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score both sentences in a single batched query.
    pub fn score_pair(&self, sentence1: &str, sentence2: &str) -> Result<SurprisalBatch> {
        let batch = self.scorer.score_batch(&[sentence1, sentence2])?;
        ensure!(
            batch.sentences.len() == 2,
            "Model returned {} sentence results for 2 sentences",
            batch.sentences.len()
        );
        Ok(batch)
    }
}
