//! Weighted grade average calculator
//!
//! Reduces a snapshot of course records to a cumulative weighted average
//! under a selected scale. Pure and deterministic: the reduction is a
//! commutative sum, so any permutation of the same record set yields the
//! same result. Invalid rows are excluded silently; only an empty or
//! entirely-invalid input is an error.

use crate::core::error::CalculationError;
use crate::core::models::CourseRecord;
use crate::core::scale::{find_scale, round2};
use serde::{Deserialize, Serialize};

/// Direction of change relative to a previous average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Current average is higher than the previous one
    Improved,
    /// Current average is lower than the previous one
    Decreased,
    /// Current average equals the previous one (at 2-decimal resolution)
    Maintained,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Improved => "improved",
            Self::Decreased => "decreased",
            Self::Maintained => "maintained",
        };
        write!(f, "{as_str}")
    }
}

/// Result of one average computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageResult {
    /// Weighted average over valid records, rounded to 2 decimal places
    pub value: f64,
    /// Sum of the weights of the records that contributed
    pub total_weight: f64,
    /// Degree classification label from the active scale's bands
    pub classification: String,
    /// Previous average supplied by the caller for comparison, if any
    pub previous_value: Option<f64>,
    /// Direction of change versus `previous_value`, if one was supplied
    pub trend: Option<Trend>,
}

impl AverageResult {
    /// Attach a previous average for trend comparison.
    ///
    /// Trend is the caller's optional metadata, not engine state: the
    /// calculator enforces no relationship between consecutive calls.
    /// Comparison happens at the rounded 2-decimal values, so a displayed
    /// "3.50 vs 3.50" never reads as a change.
    #[must_use]
    pub fn with_previous(mut self, previous: f64) -> Self {
        let previous = round2(previous);
        self.previous_value = Some(previous);
        self.trend = Some(if self.value > previous {
            Trend::Improved
        } else if self.value < previous {
            Trend::Decreased
        } else {
            Trend::Maintained
        });
        self
    }
}

/// Compute the weighted grade average of `records` under the scale `scale_id`.
///
/// A record contributes when it has a non-empty name, a grade symbol the
/// scale recognizes, and a positive weight. Contributing records are reduced
/// to `sum(point * weight) / sum(weight)`, rounded to 2 decimal places, and
/// classified against the scale's bands. Records failing the filter are
/// excluded without error.
///
/// # Errors
///
/// - `NoCoursesProvided` when `records` is empty.
/// - `NoValidCourses` when no record passes the validity filter.
/// - `UnknownScale` when `scale_id` is not registered.
/// - `ClassificationGap` when the computed average is not covered by any
///   band (registry configuration defect).
pub fn compute_average(
    records: &[CourseRecord],
    scale_id: &str,
) -> Result<AverageResult, CalculationError> {
    let scale = find_scale(scale_id)?;

    if records.is_empty() {
        return Err(CalculationError::NoCoursesProvided);
    }

    let mut weighted_points = 0.0;
    let mut total_weight = 0.0;

    for record in records.iter().filter(|r| r.is_countable(scale)) {
        // is_countable guarantees the symbol exists on the scale
        let point = scale.point_of(&record.grade_symbol).unwrap_or(0.0);
        weighted_points += point * record.weight;
        total_weight += record.weight;
    }

    if total_weight <= 0.0 {
        return Err(CalculationError::NoValidCourses);
    }

    let value = round2(weighted_points / total_weight);
    let classification = scale.classify(value)?.to_string();

    Ok(AverageResult {
        value,
        total_weight,
        classification,
        previous_value: None,
        trend: None,
    })
}
