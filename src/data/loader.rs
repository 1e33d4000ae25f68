// ============================================================
// Layer 4 — Transcript Loader
// ============================================================
// Finds CHAT transcripts (.cha) under a directory tree and
// reads the speaker lines out of each one.
//
// A transcript mixes header lines (@Begin, @Participants),
// dependent tiers (%mor, %gra) and main-tier speaker lines:
//
//   @Participants:	CHI Target_Child, MOT Mother
//   *CHI:	ねこ [//] だよ .
//   %mor:	n|neko ...
//
// Only the main tier (lines starting with `*`) is returned.
//
// Reference: walkdir crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::data::corpus::read_text;
use crate::domain::utterance::Utterance;

/// File extension identifying transcript files
pub const TRANSCRIPT_EXTENSION: &str = "cha";

/// Walks a directory tree for .cha transcripts.
pub struct TranscriptLoader {
    /// Root directory to search
    dir: PathBuf,
}

impl TranscriptLoader {
    /// Create a new TranscriptLoader pointed at a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// All transcript files under the root, recursively, in
    /// file-name order. A missing root yields an empty list.
    pub fn find_transcripts(&self) -> Vec<PathBuf> {
        if !self.dir.exists() {
            tracing::warn!(
                "Input directory '{}' does not exist — no transcripts found",
                self.dir.display()
            );
            return Vec::new();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(TRANSCRIPT_EXTENSION)
            {
                files.push(path.to_path_buf());
            }
        }

        files
    }

    /// Path of `file` relative to the root, for display.
    pub fn relative<'a>(&self, file: &'a Path) -> &'a Path {
        file.strip_prefix(&self.dir).unwrap_or(file)
    }
}

/// Read one transcript and return its raw speaker utterances.
pub fn load_utterances(path: &Path) -> Result<Vec<Utterance>> {
    let text = read_text(path)?;
    Ok(text.lines().filter_map(Utterance::parse_line).collect())
}
