//! Plain-text grade reports
//!
//! Renders one computed result (and its sorted impact table) as the text
//! block the CLI prints, and writes it under the configured reports
//! directory on request.

use crate::core::average::AverageResult;
use crate::core::impact::ImpactEntry;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the report for one computed result.
///
/// `entries` is the impact table in presentation order, or `None` when the
/// table was skipped or unavailable.
#[must_use]
pub fn render_report(
    title: &str,
    scale_id: &str,
    result: &AverageResult,
    entries: Option<&[ImpactEntry]>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {title} ({scale_id} scale) ===\n");
    let _ = writeln!(out, "Average:        {:.2}", result.value);
    let _ = writeln!(out, "Classification: {}", result.classification);
    let _ = writeln!(out, "Total weight:   {}", result.total_weight);

    if let (Some(previous), Some(trend)) = (result.previous_value, result.trend) {
        let _ = writeln!(out, "Trend:          {trend} (previous {previous:.2})");
    }

    if let Some(entries) = entries {
        let _ = writeln!(
            out,
            "\n{:<30} {:>10} {:>10} {:>22}",
            "Course", "Impact", "Headroom", "Recommendation"
        );
        for entry in entries {
            let name = if entry.name.is_empty() {
                "(unnamed)"
            } else {
                entry.name.as_str()
            };
            let _ = writeln!(
                out,
                "{name:<30} {impact:>9.1}% {headroom:>10.2} {tier:>22}",
                impact = entry.impact_percent,
                headroom = entry.potential_improvement,
                tier = entry.tier.to_string(),
            );
        }
    }

    out
}

/// Write a rendered report into `dir`, named after the source file
/// (`<stem>_report.txt`). The directory is created if needed.
///
/// # Errors
/// Returns an error when the directory cannot be created or the file cannot
/// be written.
pub fn write_report(dir: &Path, source: &Path, content: &str) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let stem = source.file_stem().map_or_else(
        || "grades".to_string(),
        |s| s.to_string_lossy().into_owned(),
    );
    let path = dir.join(format!("{stem}_report.txt"));
    fs::write(&path, content)?;
    Ok(path)
}
