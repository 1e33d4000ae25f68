// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Runs the corpus split in order:
//
//   Step 1: Validate ratios           (Layer 3 - domain)
//   Step 2: Create output directory
//   Step 3: Read corpus lines         (Layer 4 - data)
//   Step 4: Seeded shuffle + split    (Layer 4 - data)
//   Step 5: Write the three files     (Layer 4 - data)
//
// Ratio validation happens before any file is touched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::{
    corpus::{read_lines, write_lines},
    splitter::{split_points, split_train_valid_test},
};
use crate::domain::ratios::SplitRatios;

pub const TRAIN_FILE: &str = "train.txt.original";
pub const VALID_FILE: &str = "valid.txt.original";
pub const TEST_FILE:  &str = "test.txt.original";

pub const DEFAULT_SEED: u64 = 42;

// ─── Split Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub input_file:  PathBuf,
    pub output_dir:  PathBuf,
    pub train_ratio: f64,
    pub valid_ratio: f64,
    pub test_ratio:  f64,
    pub seed:        u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        let ratios = SplitRatios::default();
        Self {
            input_file:  PathBuf::from("corpus.txt"),
            output_dir:  PathBuf::from("data"),
            train_ratio: ratios.train(),
            valid_ratio: ratios.valid(),
            test_ratio:  ratios.test(),
            seed:        DEFAULT_SEED,
        }
    }
}

// ─── Split Report ────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct PartitionSummary {
    pub name:  &'static str,
    pub lines: usize,
    pub path:  PathBuf,
}

#[derive(Debug, Clone)]
pub struct SplitReport {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub ratios:     SplitRatios,
    pub seed:       u64,
    pub total:      usize,
    pub train_end:  usize,
    pub valid_end:  usize,
    pub partitions: Vec<PartitionSummary>,
}

impl SplitReport {
    /// Realised share of `lines`, or None for an empty corpus.
    pub fn fraction(&self, lines: usize) -> Option<f64> {
        (self.total > 0).then(|| lines as f64 / self.total as f64)
    }
}

// ─── SplitUseCase ────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SplitReport> {
        let cfg = &self.config;

        // ── Step 1: Validate ratios ──────────────────────────────────────────
        let ratios = SplitRatios::new(cfg.train_ratio, cfg.valid_ratio, cfg.test_ratio)?;

        // ── Step 2: Output directory ─────────────────────────────────────────
        fs::create_dir_all(&cfg.output_dir).with_context(|| {
            format!("Cannot create output directory '{}'", cfg.output_dir.display())
        })?;

        // ── Step 3: Load lines ───────────────────────────────────────────────
        tracing::info!("Loading file '{}'", cfg.input_file.display());
        let lines = read_lines(&cfg.input_file)?;
        let total = lines.len();
        tracing::info!("Total lines: {}", total);

        // ── Step 4: Shuffle and split ────────────────────────────────────────
        tracing::info!("Shuffling data (seed {})", cfg.seed);
        let (train_end, valid_end) = split_points(total, &ratios);
        let parts = split_train_valid_test(lines, &ratios, cfg.seed);

        // ── Step 5: Write partitions ─────────────────────────────────────────
        let mut partitions = Vec::with_capacity(3);
        for (name, file, slice) in [
            ("train", TRAIN_FILE, &parts.train),
            ("valid", VALID_FILE, &parts.valid),
            ("test",  TEST_FILE,  &parts.test),
        ] {
            let path = cfg.output_dir.join(file);
            tracing::info!("Writing {} data to '{}'", name, path.display());
            write_lines(&path, slice)?;
            partitions.push(PartitionSummary { name, lines: slice.len(), path });
        }

        Ok(SplitReport {
            input_file: cfg.input_file.clone(),
            output_dir: cfg.output_dir.clone(),
            ratios,
            seed: cfg.seed,
            total,
            train_end,
            valid_end,
            partitions,
        })
    }
}
