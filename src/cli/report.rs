// ============================================================
// Layer 1 — Report Rendering
// ============================================================
// Turns use-case reports into the human-readable lines the CLI
// prints. Kept separate from printing so the text is testable.

use crate::application::{extract_use_case::ExtractReport, split_use_case::SplitReport};
use crate::domain::surprisal::SurprisalBatch;

/// `80.0%` style share, or `n/a` for an empty corpus
fn percent(fraction: Option<f64>) -> String {
    match fraction {
        Some(f) => format!("{:.1}%", f * 100.0),
        None    => "n/a".to_string(),
    }
}

pub fn split_lines(r: &SplitReport) -> Vec<String> {
    let mut out = vec![
        format!("Input file: {}", r.input_file.display()),
        format!("Output directory: {}", r.output_dir.display()),
        format!(
            "Split ratios - Train: {}, Valid: {}, Test: {}",
            percent(Some(r.ratios.train())),
            percent(Some(r.ratios.valid())),
            percent(Some(r.ratios.test())),
        ),
        format!("Seed: {}", r.seed),
        format!("Total lines: {}", r.total),
        format!(
            "Split points - Train: {}, Valid: {}, Test: {}",
            r.train_end, r.valid_end, r.total
        ),
        String::new(),
        "Split completed!".to_string(),
    ];

    for p in &r.partitions {
        out.push(format!(
            "{} data: {} lines ({})",
            p.name,
            p.lines,
            percent(r.fraction(p.lines))
        ));
    }

    out.push(String::new());
    out.push("Output files:".to_string());
    for p in &r.partitions {
        out.push(format!("  - {}", p.path.display()));
    }
    out
}

pub fn extract_lines(r: &ExtractReport) -> Vec<String> {
    let mut out = vec![format!("Found .cha files: {}", r.files_found)];

    for f in &r.files {
        out.push(format!(
            "  {}: {} utterances, {} Latin",
            f.path.display(),
            f.kept,
            f.excluded
        ));
    }
    for f in &r.failures {
        out.push(format!("  Error: {}: {}", f.path.display(), f.error));
    }

    out.extend([
        String::new(),
        "Processing completed!".to_string(),
        format!("Processed files: {}", r.files_processed()),
        format!("Failed files: {}", r.failures.len()),
        format!("Total extracted utterances: {}", r.total_kept()),
        format!("Total Latin utterances: {}", r.total_excluded()),
        format!("Output file: {}", r.output_file.display()),
        format!("File size: {} bytes", r.output_bytes),
    ]);
    out
}

pub fn surprisal_lines(batch: &SurprisalBatch) -> Vec<String> {
    let mut out = Vec::new();
    for (i, sent) in batch.sentences.iter().enumerate() {
        out.push(format!("--- Sentence {} ---", i + 1));
        out.extend(sent.tokens.iter().map(|t| t.to_line()));
        out.push(String::new());
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::extract_use_case::FileSummary;
    use crate::application::split_use_case::PartitionSummary;
    use crate::application::surprisal_use_case::{tests::StubScorer, SurprisalUseCase};
    use crate::domain::ratios::SplitRatios;
    use std::path::PathBuf;

    fn split_report(total: usize, counts: [usize; 3]) -> SplitReport {
        SplitReport {
            input_file: PathBuf::from("in.txt"),
            output_dir: PathBuf::from("out"),
            ratios:     SplitRatios::default(),
            seed:       42,
            total,
            train_end:  counts[0],
            valid_end:  counts[0] + counts[1],
            partitions: ["train", "valid", "test"]
                .into_iter()
                .zip(counts)
                .map(|(name, lines)| PartitionSummary {
                    name,
                    lines,
                    path: PathBuf::from(format!("out/{name}.txt.original")),
                })
                .collect(),
        }
    }

    #[test]
    fn test_split_report_fractions() {
        let lines = split_lines(&split_report(10, [8, 1, 1]));
        assert!(lines.contains(&"train data: 8 lines (80.0%)".to_string()));
        assert!(lines.contains(&"test data: 1 lines (10.0%)".to_string()));
        assert!(lines.contains(&"Split ratios - Train: 80.0%, Valid: 10.0%, Test: 10.0%".to_string()));
    }

    #[test]
    fn test_split_report_empty_corpus_is_na() {
        let lines = split_lines(&split_report(0, [0, 0, 0]));
        assert!(lines.contains(&"valid data: 0 lines (n/a)".to_string()));
    }

    #[test]
    fn test_extract_report_totals() {
        let report = ExtractReport {
            files_found:  1,
            files:        vec![FileSummary { path: PathBuf::from("a.cha"), kept: 3, excluded: 2 }],
            failures:     Vec::new(),
            output_file:  PathBuf::from("c.txt"),
            output_bytes: 12,
        };
        let lines = extract_lines(&report);
        assert!(lines.contains(&"Total extracted utterances: 3".to_string()));
        assert!(lines.contains(&"Total Latin utterances: 2".to_string()));
        assert!(lines.contains(&"File size: 12 bytes".to_string()));
    }

    #[test]
    fn test_surprisal_lines_use_tab_and_three_decimals() {
        let use_case = SurprisalUseCase::new(StubScorer::new(2.345));
        let batch    = use_case.score_pair("word", "next").unwrap();

        assert_eq!(
            surprisal_lines(&batch),
            vec![
                "--- Sentence 1 ---",
                "word\t2.345",
                "",
                "--- Sentence 2 ---",
                "next\t2.345",
                "",
            ]
        );
    }
}
