use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

use crate::rename::RenameConflict;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameRecord {
    pub from: String,
    pub to: String,
}

/// Result of normalizing one directory
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub directory: PathBuf,
    pub extension: String,
    pub matched: usize,
    pub unchanged: usize,
    pub renamed: Vec<RenameRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<RenameConflict>,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for NormalizeResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "normalize",
            "directory": self.directory,
            "extension": self.extension,
            "summary": {
                "matched": self.matched,
                "renamed": self.renamed.len(),
                "unchanged": self.unchanged,
                "skipped": self.skipped.len(),
            },
            "renames": self.renamed,
            "skipped": self.skipped,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        if self.matched == 0 {
            return format!(
                "No .{} files found in {}\n",
                self.extension,
                self.directory.display()
            );
        }

        let mut output = String::new();
        for record in &self.renamed {
            writeln!(output, "{} -> {}", record.from, record.to).unwrap();
        }

        writeln!(
            output,
            "✓ Renamed {} of {} matching files",
            self.renamed.len(),
            self.matched
        )
        .unwrap();

        if !self.skipped.is_empty() {
            writeln!(output, "⚠ Skipped {} conflicts:", self.skipped.len()).unwrap();
            for conflict in &self.skipped {
                writeln!(output, "  {conflict}").unwrap();
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::ConflictKind;

    fn sample_result() -> NormalizeResult {
        NormalizeResult {
            directory: PathBuf::from("photos"),
            extension: "jpg".to_string(),
            matched: 3,
            unchanged: 1,
            renamed: vec![RenameRecord {
                from: "My Photo-One.JPG".to_string(),
                to: "my_photoone.jpg".to_string(),
            }],
            skipped: vec![],
        }
    }

    #[test]
    fn test_normalize_result_json_format() {
        let json = sample_result().format_json();
        assert!(json.contains("\"operation\":\"normalize\""));
        assert!(json.contains("\"extension\":\"jpg\""));
        assert!(json.contains("\"matched\":3"));
        assert!(json.contains("\"renamed\":1"));
        assert!(json.contains("\"unchanged\":1"));
        assert!(json.contains("\"from\":\"My Photo-One.JPG\""));
        assert!(json.contains("\"to\":\"my_photoone.jpg\""));
    }

    #[test]
    fn test_normalize_result_summary_format() {
        let summary = sample_result().format_summary();
        assert!(summary.contains("My Photo-One.JPG -> my_photoone.jpg"));
        assert!(summary.contains("Renamed 1 of 3 matching files"));
        assert!(!summary.contains("Skipped"));
    }

    #[test]
    fn test_summary_lists_skipped_conflicts() {
        let mut result = sample_result();
        result.skipped.push(RenameConflict {
            sources: vec![PathBuf::from("photos/A B.jpg")],
            target: PathBuf::from("photos/a_b.jpg"),
            target_name: "a_b.jpg".to_string(),
            kind: ConflictKind::TargetExists,
        });

        let summary = result.format_summary();
        assert!(summary.contains("Skipped 1 conflicts"));
        assert!(summary.contains("A B.jpg -> a_b.jpg (target already exists)"));

        let json = result.format_json();
        assert!(json.contains("\"kind\":\"target_exists\""));
    }

    #[test]
    fn test_summary_no_matches() {
        let result = NormalizeResult {
            directory: PathBuf::from("docs"),
            extension: "txt".to_string(),
            matched: 0,
            unchanged: 0,
            renamed: vec![],
            skipped: vec![],
        };
        assert_eq!(result.format_summary(), "No .txt files found in docs\n");
    }
}
