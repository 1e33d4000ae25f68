// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Builds a single corpus file from a tree of CHAT transcripts:
//
//   Step 1: Find every .cha file          (Layer 4 - data)
//   Step 2: Read speaker utterances       (Layer 4 - data)
//   Step 3: Clean and filter each one     (Layer 4 - data)
//   Step 4: Write the combined corpus     (Layer 4 - data)
//
// A transcript that cannot be read is logged and skipped. It
// does not count as processed and adds no utterances.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::{
    corpus::write_corpus,
    loader::{load_utterances, TranscriptLoader},
    preprocessor::Preprocessor,
};
use crate::domain::utterance::Utterance;

// ─── Extract Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub input_dir:       PathBuf,
    pub output_file:     PathBuf,
    pub include_speaker: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_dir:       PathBuf::from("childes"),
            output_file:     PathBuf::from("corpus.txt"),
            include_speaker: false,
        }
    }
}

// ─── Extract Report ──────────────────────────────────────────────────────────
/// Counts for one successfully read transcript
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    /// Path relative to the input directory
    pub path:     PathBuf,
    pub kept:     usize,
    pub excluded: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub path:  PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    pub files_found:  usize,
    pub files:        Vec<FileSummary>,
    pub failures:     Vec<FileFailure>,
    pub output_file:  PathBuf,
    pub output_bytes: u64,
}

impl ExtractReport {
    pub fn files_processed(&self) -> usize {
        self.files.len()
    }

    pub fn total_kept(&self) -> usize {
        self.files.iter().map(|f| f.kept).sum()
    }

    pub fn total_excluded(&self) -> usize {
        self.files.iter().map(|f| f.excluded).sum()
    }
}

// ─── ExtractUseCase ──────────────────────────────────────────────────────────
/// Outcome of cleaning one raw utterance
enum Cleaned {
    Kept(Utterance),
    /// Cleaned text that still contains Latin letters
    Latin(String),
    /// Nothing left after markup removal
    Empty,
}

pub struct ExtractUseCase {
    config:       ExtractConfig,
    preprocessor: Preprocessor,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config, preprocessor: Preprocessor::new() }
    }

    fn clean(&self, utt: &Utterance) -> Cleaned {
        let text = self.preprocessor.clean(&utt.text);
        if text.is_empty() {
            Cleaned::Empty
        } else if self.preprocessor.contains_latin(&text) {
            Cleaned::Latin(text)
        } else {
            Cleaned::Kept(Utterance::new(utt.speaker.as_str(), text))
        }
    }

    /// Read, clean and filter every transcript in `transcripts`.
    fn extract_from(
        &self,
        loader:      &TranscriptLoader,
        transcripts: &[PathBuf],
    ) -> (Vec<String>, ExtractReport) {
        let cfg = &self.config;
        let mut report = ExtractReport {
            files_found: transcripts.len(),
            output_file: cfg.output_file.clone(),
            ..ExtractReport::default()
        };
        let mut corpus: Vec<String> = Vec::new();

        // ── Steps 2 + 3: Read, clean, filter ─────────────────────────────────
        for path in transcripts {
            let rel = loader.relative(path).to_path_buf();
            tracing::info!("Processing: {}", rel.display());

            let raw = match load_utterances(path) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", rel.display(), e);
                    report.failures.push(FileFailure { path: rel, error: format!("{e:#}") });
                    continue;
                }
            };

            let mut summary = FileSummary { path: rel, kept: 0, excluded: 0 };
            for utt in &raw {
                match self.clean(utt) {
                    Cleaned::Kept(clean) => {
                        corpus.push(clean.to_corpus_line(cfg.include_speaker));
                        summary.kept += 1;
                    }
                    Cleaned::Latin(latin) => {
                        tracing::info!("  [Latin utterance] {}", latin);
                        summary.excluded += 1;
                    }
                    Cleaned::Empty => {}
                }
            }

            tracing::info!("  Extracted utterances: {}", summary.kept);
            if summary.excluded > 0 {
                tracing::info!("  Latin utterances: {}", summary.excluded);
            }
            report.files.push(summary);
        }

        (corpus, report)
    }

    pub fn execute(&self) -> Result<ExtractReport> {
        let cfg = &self.config;

        // ── Step 1: Find transcripts ─────────────────────────────────────────
        let loader      = TranscriptLoader::new(&cfg.input_dir);
        let transcripts = loader.find_transcripts();
        tracing::info!("Found {} .cha files under '{}'", transcripts.len(), cfg.input_dir.display());

        let (corpus, mut report) = self.extract_from(&loader, &transcripts);

        // ── Step 4: Write corpus ─────────────────────────────────────────────
        tracing::info!("Writing {} utterances to '{}'", corpus.len(), cfg.output_file.display());
        write_corpus(&cfg.output_file, &corpus)?;

        report.output_bytes = fs::metadata(&cfg.output_file)
            .with_context(|| format!("Cannot stat '{}'", cfg.output_file.display()))?
            .len();

        Ok(report)
    }
}
