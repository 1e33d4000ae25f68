// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// The three subcommands and their flags. Each Args struct
// converts into its application-layer config with From, so
// the application layer never sees clap types.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{
    extract_use_case::ExtractConfig,
    split_use_case::{SplitConfig, DEFAULT_SEED},
    surprisal_use_case::SurprisalConfig,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shuffle a line corpus and split it into train/valid/test files
    Split(SplitArgs),

    /// Extract speaker utterances from .cha transcripts into one corpus file
    Extract(ExtractArgs),

    /// Print token-level surprisal for two sentences
    Surprisal(SurprisalArgs),
}

/// Arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input corpus, one example per line
    pub input_file: PathBuf,

    /// Directory that receives train/valid/test.txt.original
    pub output_dir: PathBuf,

    /// Share of lines for training
    #[arg(long, default_value_t = 0.8)]
    pub train_ratio: f64,

    /// Share of lines for validation
    #[arg(long, default_value_t = 0.1)]
    pub valid_ratio: f64,

    /// Share of lines for testing
    #[arg(long, default_value_t = 0.1)]
    pub test_ratio: f64,

    /// Shuffle seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            input_file:  a.input_file,
            output_dir:  a.output_dir,
            train_ratio: a.train_ratio,
            valid_ratio: a.valid_ratio,
            test_ratio:  a.test_ratio,
            seed:        a.seed,
        }
    }
}

/// Arguments for the `extract` command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory searched recursively for .cha files
    pub input_dir: PathBuf,

    /// Corpus file to write
    pub output_file: PathBuf,

    /// Prefix each line with its speaker label (e.g. `*CHI: ア`)
    #[arg(long)]
    pub include_speaker: bool,
}

impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            input_dir:       a.input_dir,
            output_file:     a.output_file,
            include_speaker: a.include_speaker,
        }
    }
}

/// Arguments for the `surprisal` command
#[derive(Args, Debug)]
pub struct SurprisalArgs {
    /// Checkpoint name, e.g. childes_exp1__Transformer__e512_h2048_L6_H8_do0.2
    pub checkpoint_name: String,

    pub sentence1: String,

    pub sentence2: String,

    /// Directory holding one subdirectory per model
    #[arg(long, default_value = "models")]
    pub models_dir: PathBuf,
}

impl From<SurprisalArgs> for SurprisalConfig {
    fn from(a: SurprisalArgs) -> Self {
        SurprisalConfig {
            checkpoint_name: a.checkpoint_name,
            sentence1:       a.sentence1,
            sentence2:       a.sentence2,
            models_dir:      a.models_dir,
        }
    }
}
