// ============================================================
// Layer 5 — N-gram Scorer
// ============================================================
use anyhow::Result;
use tokenizers::Tokenizer;

use crate::domain::surprisal::SurprisalBatch;
use crate::domain::traits::SurprisalScorer;
use crate::infra::{checkpoint::CheckpointManager, tokenizer_store::TokenizerStore};
use crate::ml::ngram::NgramModel;

pub struct NgramScorer {
    tokenizer: Tokenizer,
    model:     NgramModel,
}

impl NgramScorer {
    pub fn new(tokenizer: Tokenizer, model: NgramModel) -> Self {
        Self { tokenizer, model }
    }

    pub fn from_checkpoint(ckpt: &CheckpointManager) -> Result<Self> {
        ckpt.ensure_exists()?;
        let tokenizer = TokenizerStore::new(ckpt.dir()).load()?;
        let model     = ckpt.load_ngram()?;
        tracing::info!("Model '{}' loaded from checkpoint", ckpt.model_name());
        Ok(Self::new(tokenizer, model))
    }

    fn tokenize(&self, sentence: &str) -> Result<Vec<String>> {
        let enc = self.tokenizer.encode(sentence, false)
            .map_err(|e| anyhow::anyhow!("Tokenise '{sentence}': {e}"))?;
        Ok(enc.get_tokens().to_vec())
    }
}

impl SurprisalScorer for NgramScorer {
    fn score_batch(&self, sentences: &[&str]) -> Result<SurprisalBatch> {
        let mut batch = SurprisalBatch::default();
        for sentence in sentences {
            let tokens = self.tokenize(sentence)?;
            let scored = self.model.score_tokens(&tokens);
            tracing::debug!("{} tokens, total {:.3} bits", scored.tokens.len(), scored.total());
            batch.sentences.push(scored);
        }
        Ok(batch)
    }
}
