//! Compute command handler
//!
//! Loads a course-list CSV, computes the weighted average and its degree
//! classification, and prints (and optionally saves) the grade report.

use grade_point::average::compute_average;
use grade_point::error::CalculationError;
use grade_point::impact::{analyze_impact, sort_by_impact};
use grade_point::report::{render_report, write_report};
use grade_point::roster::parse_courses_csv;
use logger::{error, info};
use std::path::Path;

/// Run the compute command for one input file.
///
/// # Arguments
/// * `input_file` - Path to the course-list CSV
/// * `scale_id` - Grading scale identifier
/// * `previous` - Optional previous average for trend comparison
/// * `no_impact` - Skip the impact table
/// * `report_dir` - Directory to also write the report into, if requested
pub fn run(
    input_file: &Path,
    scale_id: &str,
    previous: Option<f64>,
    no_impact: bool,
    report_dir: Option<&Path>,
) {
    if let Err(err) = compute_and_print(input_file, scale_id, previous, no_impact, report_dir) {
        error!("Computation failed for {}: {err}", input_file.display());
        eprintln!("✗ {err}");
    }
}

/// Load records, compute, render, and print. Classification and impact views
/// are never rendered on error; each failure keeps its own message.
fn compute_and_print(
    input_file: &Path,
    scale_id: &str,
    previous: Option<f64>,
    no_impact: bool,
    report_dir: Option<&Path>,
) -> Result<(), String> {
    let records = parse_courses_csv(input_file)
        .map_err(|e| format!("Failed to load {}: {e}", input_file.display()))?;

    info!(
        "Loaded {} course record(s) from {}",
        records.len(),
        input_file.display()
    );

    let mut result = compute_average(&records, scale_id).map_err(|e| e.to_string())?;
    if let Some(previous_value) = previous {
        result = result.with_previous(previous_value);
    }

    let mut impact_unavailable = false;
    let entries = if no_impact {
        None
    } else {
        match analyze_impact(&records, scale_id, result.value) {
            Ok(entries) => Some(sort_by_impact(entries)),
            // A zero average has no impact breakdown; everything else
            // already failed in compute_average.
            Err(CalculationError::UndefinedImpact) => {
                impact_unavailable = true;
                None
            }
            Err(e) => return Err(e.to_string()),
        }
    };

    let title = input_file.display().to_string();
    let report = render_report(&title, scale_id, &result, entries.as_deref());
    print!("{report}");

    if impact_unavailable {
        println!("\nImpact analysis unavailable for a zero average");
    }

    if let Some(dir) = report_dir {
        let path = write_report(dir, input_file, &report)
            .map_err(|e| format!("Failed to write report: {e}"))?;
        println!("✓ Report written to {}", path.display());
    }

    Ok(())
}
