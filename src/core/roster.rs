//! CSV loader for course lists
//!
//! Reads `name,grade,weight` rows into course records. This is the mutation
//! boundary for file input: weights are sanitized through
//! [`CourseRecord::set_weight`] (clamped high, negatives ignored with a
//! warning) before the snapshot ever reaches the calculator.

use crate::core::models::CourseRecord;
use logger::warn;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a course-list CSV file into records.
///
/// Expected columns per row: course name, grade symbol, credit-unit weight.
/// Fields may be double-quoted; a quoted name may contain commas. A first
/// non-blank row starting with "name" (case-insensitive) is treated as a
/// header and skipped. Blank lines are skipped. The grade and weight cells
/// may be empty (an in-progress row); an empty weight keeps the record
/// default.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns an error if the file cannot be read, a row has no name cell, or a
/// non-empty weight cell does not parse as a number. Errors name the line.
pub fn parse_courses_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_courses_str(&content)
}

/// Parse course-list CSV content. See [`parse_courses_csv`].
///
/// # Errors
/// Same conditions as [`parse_courses_csv`], minus the file read.
pub fn parse_courses_str(content: &str) -> Result<Vec<CourseRecord>, Box<dyn Error>> {
    let mut records = Vec::new();
    let mut first_row = true;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_csv_line(line);

        // Optional header row (first non-blank line)
        if first_row {
            first_row = false;
            if fields.first().is_some_and(|f| f.eq_ignore_ascii_case("name")) {
                continue;
            }
        }

        let line_no = index + 1;
        let name = fields
            .first()
            .filter(|f| !f.is_empty())
            .ok_or_else(|| format!("Line {line_no}: missing course name"))?;

        let mut record = CourseRecord::new(name.clone());

        if let Some(grade) = fields.get(1) {
            record.set_grade(grade.clone());
        }

        if let Some(weight_str) = fields.get(2).filter(|f| !f.is_empty()) {
            let weight = weight_str
                .parse::<f64>()
                .map_err(|_| format!("Line {line_no}: invalid weight '{weight_str}'"))?;
            if !record.set_weight(weight) {
                warn!("Line {line_no}: ignoring negative weight {weight} for '{name}'");
            }
        }

        records.push(record);
    }

    Ok(records)
}

/// Parse a CSV line into trimmed fields. Commas inside double-quoted fields
/// do not split; the quotes themselves are stripped.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{DEFAULT_COURSE_WEIGHT, MAX_COURSE_WEIGHT};

    #[test]
    fn parses_rows_in_order() {
        let content = "Algorithms,A,3\nNetworks,B,3\n";

        let records = parse_courses_str(content).expect("records");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Algorithms");
        assert_eq!(records[0].grade_symbol, "A");
        assert!((records[0].weight - 3.0).abs() < f64::EPSILON);
        assert_eq!(records[1].name, "Networks");
    }

    #[test]
    fn skips_header_and_blank_lines() {
        let content = "Name,Grade,Weight\n\nAlgorithms,A,3\n\n";

        let records = parse_courses_str(content).expect("records");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Algorithms");
    }

    #[test]
    fn header_after_leading_blank_lines_is_skipped() {
        let content = "\n\nName,Grade,Weight\nAlgorithms,A,3\n";

        let records = parse_courses_str(content).expect("records");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Algorithms");
    }

    #[test]
    fn header_is_only_recognized_on_the_first_row() {
        let content = "Algorithms,A,3\nName,Grade,Weight\n";

        let err = parse_courses_str(content).expect_err("second row is data, not a header");
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn quoted_names_may_contain_commas() {
        let content = "\"Algorithms, Advanced\",A,3\nNetworks,B,3\n";

        let records = parse_courses_str(content).expect("records");

        assert_eq!(records[0].name, "Algorithms, Advanced");
        assert_eq!(records[0].grade_symbol, "A");
        assert!((records[0].weight - 3.0).abs() < f64::EPSILON);
        assert_eq!(records[1].name, "Networks");
    }

    #[test]
    fn incomplete_rows_keep_defaults() {
        let content = "Algorithms\nNetworks,B\n";

        let records = parse_courses_str(content).expect("records");

        assert!(records[0].grade_symbol.is_empty());
        assert!((records[0].weight - DEFAULT_COURSE_WEIGHT).abs() < f64::EPSILON);
        assert_eq!(records[1].grade_symbol, "B");
    }

    #[test]
    fn clamps_oversized_weights() {
        let content = "Thesis,A,12\n";

        let records = parse_courses_str(content).expect("records");

        assert!((records[0].weight - MAX_COURSE_WEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn ignores_negative_weights() {
        let content = "Thesis,A,-2\n";

        let records = parse_courses_str(content).expect("records");

        assert!((records[0].weight - DEFAULT_COURSE_WEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_unparseable_weight() {
        let content = "Thesis,A,heavy\n";

        let err = parse_courses_str(content).expect_err("should fail");
        assert!(err.to_string().contains("Line 1"));
    }

    #[test]
    fn rejects_missing_name() {
        let content = ",A,3\n";

        assert!(parse_courses_str(content).is_err());
    }

    #[test]
    fn reads_sample_file() {
        let records = parse_courses_csv("samples/semester_4_0.csv").expect("sample records");

        assert!(records.len() >= 3);
        assert!(records.iter().all(|r| !r.name.is_empty()));
    }
}
