// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, hands a config to Layer 2, and prints the report that
// comes back. All work is delegated to the application layer.
//
// Three commands are supported:
//   1. `split`     — train/valid/test split of a line corpus
//   2. `extract`   — CHAT transcripts → one utterance corpus
//   3. `surprisal` — per-token surprisal for two sentences
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod report;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExtractArgs, SplitArgs, SurprisalArgs};

#[derive(Parser, Debug)]
#[command(
    name = "childes-corpus",
    version,
    about = "Prepare CHILDES corpora and report token surprisal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args)     => run_split(args),
            Commands::Extract(args)   => run_extract(args),
            Commands::Surprisal(args) => run_surprisal(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    let report = SplitUseCase::new(args.into()).execute()?;
    print_lines(&report::split_lines(&report));
    Ok(())
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    use crate::application::extract_use_case::ExtractUseCase;

    tracing::info!("Include speaker info: {}", args.include_speaker);
    let report = ExtractUseCase::new(args.into()).execute()?;
    print_lines(&report::extract_lines(&report));
    Ok(())
}

fn run_surprisal(args: SurprisalArgs) -> Result<()> {
    use crate::application::surprisal_use_case::{SurprisalConfig, SurprisalUseCase};

    let cfg: SurprisalConfig = args.into();
    println!("Using model: {}", cfg.model_name());
    println!("Sentence 1: {}", cfg.sentence1);
    println!("Sentence 2: {}", cfg.sentence2);
    println!();

    let use_case = SurprisalUseCase::from_config(&cfg)?;
    let batch    = use_case.score_pair(&cfg.sentence1, &cfg.sentence2)?;
    print_lines(&report::surprisal_lines(&batch));
    Ok(())
}
