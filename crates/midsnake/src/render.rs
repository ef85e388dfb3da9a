//! Printing patches as text or JSON

use clap::ValueEnum;
use midsnake_core::{FileDiff, Patch};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<index>+<text>` and `<index>-<count>` lines
    #[default]
    Text,
    /// One JSON document with counts and patches
    Json,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    old_path: Option<&'a str>,
    new_path: Option<&'a str>,
    insertions: usize,
    deletions: usize,
    patches: &'a [Patch<String>],
}

pub fn render(
    format: OutputFormat,
    file_diff: &FileDiff,
    patches: &[Patch<String>],
    out: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(patches, out),
        OutputFormat::Json => render_json(file_diff, patches, out),
    }
}

/// Each inserted line gets its own row, indexed where it lands.
pub fn render_text(patches: &[Patch<String>], out: &mut impl Write) -> io::Result<()> {
    for patch in patches {
        match patch {
            Patch::Delete { at, count } => writeln!(out, "{at}-{count}")?,
            Patch::Insert { at, content } => {
                for (offset, line) in content.iter().enumerate() {
                    writeln!(out, "{}+{line}", at + offset)?;
                }
            }
        }
    }
    Ok(())
}

pub fn render_json(
    file_diff: &FileDiff,
    patches: &[Patch<String>],
    out: &mut impl Write,
) -> io::Result<()> {
    let report = Report {
        old_path: file_diff.old_path.as_deref(),
        new_path: file_diff.new_path.as_deref(),
        insertions: file_diff.result.insertions,
        deletions: file_diff.result.deletions,
        patches,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use midsnake_core::DiffEngine;
    use pretty_assertions::assert_eq;

    fn file_diff(old: &str, new: &str) -> FileDiff {
        FileDiff {
            old_path: Some("old.txt".to_string()),
            new_path: Some("new.txt".to_string()),
            result: DiffEngine::new().diff_strings(old, new),
        }
    }

    fn text(patches: &[Patch<String>]) -> String {
        let mut out = Vec::new();
        render_text(patches, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_format() {
        let patches = vec![
            Patch::Delete { at: 0, count: 2 },
            Patch::Insert {
                at: 3,
                content: vec!["foo".to_string(), "bar".to_string()],
            },
        ];
        assert_eq!(text(&patches), "0-2\n3+foo\n4+bar\n");
    }

    #[test]
    fn test_text_from_real_diff() {
        let diff = file_diff("a\nb\nc\n", "a\nc\nd\n");
        let patches = diff.result.clone().into_patches().unwrap();
        assert_eq!(text(&patches), "1-1\n2+d\n");
    }

    #[test]
    fn test_identical_renders_nothing() {
        let diff = file_diff("same\n", "same\n");
        let patches = diff.result.clone().into_patches().unwrap();
        assert_eq!(text(&patches), "");
    }

    #[test]
    fn test_json_format() {
        let diff = file_diff("a\nb\n", "a\nx\n");
        let patches = diff.result.clone().into_patches().unwrap();
        let mut out = Vec::new();
        render(OutputFormat::Json, &diff, &patches, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["old_path"], "old.txt");
        assert_eq!(value["insertions"], 1);
        assert_eq!(value["deletions"], 1);
        let ops: Vec<&str> = value["patches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["op"].as_str().unwrap())
            .collect();
        assert_eq!(ops.len(), 2);
        assert!(ops.contains(&"delete") && ops.contains(&"insert"));
    }
}
