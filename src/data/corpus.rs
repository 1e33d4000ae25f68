// ============================================================
// Layer 4 — Corpus File I/O
// ============================================================
// A corpus file is an ordered sequence of text lines. Reading
// is permissive: byte sequences that are not valid UTF-8 are
// dropped, never replaced with U+FFFD and never fatal.
//
// Lines are kept together with their terminators (`\n` or
// `\r\n`) so that writing them back reproduces the source
// bytes. A final line without a terminator is given `\n`.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

/// Decode bytes as UTF-8, silently dropping invalid sequences.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Read a whole file as text with invalid UTF-8 dropped.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    Ok(decode_dropping_invalid(&bytes))
}

/// Split text into lines, each keeping its terminator.
pub fn split_lines_keep_ends(text: &str) -> Vec<String> {
    text.split_inclusive('\n')
        .map(|line| {
            if line.ends_with('\n') {
                line.to_string()
            } else {
                format!("{line}\n")
            }
        })
        .collect()
}

/// Read all lines of a corpus file, terminators included.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(split_lines_keep_ends(&text))
}

/// Write lines exactly as given. Callers supply terminators.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    let mut w = BufWriter::new(file);
    for line in lines {
        w.write_all(line.as_bytes())?;
    }
    w.flush()
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    Ok(())
}

/// Write each entry followed by `\n`, creating parent directories.
pub fn write_corpus(path: &Path, entries: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }
    }

    let file = fs::File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    let mut w = BufWriter::new(file);
    for entry in entries {
        w.write_all(entry.as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()
        .with_context(|| format!("Cannot write '{}'", path.display()))?;
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let bytes = b"ab\xffc\xe3\x81d";
        assert_eq!(decode_dropping_invalid(bytes), "abcd");
    }

    #[test]
    fn test_valid_multibyte_survives() {
        let s = "ねこ\n";
        assert_eq!(decode_dropping_invalid(s.as_bytes()), s);
    }

    #[test]
    fn test_terminators_are_preserved() {
        let lines = split_lines_keep_ends("a\r\nb\nc\n");
        assert_eq!(lines, vec!["a\r\n", "b\n", "c\n"]);
    }

    #[test]
    fn test_final_line_gets_newline() {
        let lines = split_lines_keep_ends("a\nb");
        assert_eq!(lines, vec!["a\n", "b\n"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(split_lines_keep_ends("").is_empty());
    }

    #[test]
    fn test_blank_lines_are_lines() {
        assert_eq!(split_lines_keep_ends("\n\nx\n").len(), 3);
    }

    #[test]
    fn test_write_corpus_creates_parents() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/corpus.txt");
        write_corpus(&path, &["ア".to_string(), "イ".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ア\nイ\n");
    }

    #[test]
    fn test_read_write_lines_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.txt");
        let dst = dir.path().join("out.txt");
        fs::write(&src, "one\r\ntwo\nthree\n").unwrap();
        let lines = read_lines(&src).unwrap();
        write_lines(&dst, &lines).unwrap();
        assert_eq!(fs::read(&src).unwrap(), fs::read(&dst).unwrap());
    }
}
