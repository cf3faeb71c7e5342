//! Per-course impact analysis
//!
//! Derives, for each record in a snapshot, its share of the computed average,
//! the headroom left before the best possible contribution at the same
//! weight, and a coarse recommendation tier. Must be called with the same
//! effective record set the average was computed from, otherwise the
//! contributions will not sum to the average.
//!
//! The impact percentage divides by the *current* average rather than the
//! maximum possible one, so values do not bound to 100 and grow large near
//! very low averages. That formula is kept deliberately; consumers should
//! treat it as a relative ranking, not a share.

use crate::core::error::CalculationError;
use crate::core::models::CourseRecord;
use crate::core::scale::{find_scale, round1};
use serde::{Deserialize, Serialize};

/// Minimum weight for a course to be considered a high-impact focus target
const HIGH_IMPACT_WEIGHT: f64 = 3.0;

/// Minimum improvement headroom for the high-impact tier
const HIGH_IMPACT_HEADROOM: f64 = 0.3;

/// Coarse recommendation category for one course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTier {
    /// The record has no usable grade (or fails the validity filter)
    GradeNotSet,
    /// The grade already carries the scale's maximum point value
    AtMaximum,
    /// Heavy course with substantial headroom; improving it moves the average most
    HighImpactFocus,
    /// Some headroom remains
    RoomForImprovement,
    /// Nothing actionable
    None,
}

impl std::fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::GradeNotSet => "grade not set",
            Self::AtMaximum => "at maximum",
            Self::HighImpactFocus => "high-impact focus",
            Self::RoomForImprovement => "room for improvement",
            Self::None => "none",
        };
        write!(f, "{as_str}")
    }
}

/// Derived impact metrics for one course record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEntry {
    /// Course name, copied from the record for presentation
    pub name: String,
    /// This record's share of the computed average
    pub contribution: f64,
    /// Contribution relative to the overall average, as a percentage
    /// rounded to 1 decimal place
    pub impact_percent: f64,
    /// Gap between the actual contribution and the best possible
    /// contribution at the same weight (always >= 0)
    pub potential_improvement: f64,
    /// Recommendation tier, assigned in fixed priority order
    pub tier: RecommendationTier,
}

/// Analyze the impact of every record in `records` on `current_average`.
///
/// Returns one entry per input record, in input order. Records failing the
/// validity filter get a degraded entry: zero contribution, zero headroom,
/// tier [`RecommendationTier::GradeNotSet`]. The total weight is recomputed
/// over valid records exactly as the calculator does, so contributions of
/// valid entries sum to the (unrounded) average.
///
/// # Errors
///
/// - `UnknownScale` when `scale_id` is not registered.
/// - `UndefinedImpact` when `current_average` is zero, negative, or not
///   finite; no NaN or infinity ever escapes into the entries. The caller
///   must treat all entries as unavailable in that case.
pub fn analyze_impact(
    records: &[CourseRecord],
    scale_id: &str,
    current_average: f64,
) -> Result<Vec<ImpactEntry>, CalculationError> {
    let scale = find_scale(scale_id)?;

    if current_average <= 0.0 || !current_average.is_finite() {
        return Err(CalculationError::UndefinedImpact);
    }

    let max_point = scale.max_point();
    let total_weight: f64 = records
        .iter()
        .filter(|r| r.is_countable(scale))
        .map(|r| r.weight)
        .sum();

    let entries = records
        .iter()
        .map(|record| {
            if !record.is_countable(scale) || total_weight <= 0.0 {
                return ImpactEntry {
                    name: record.name.clone(),
                    contribution: 0.0,
                    impact_percent: 0.0,
                    potential_improvement: 0.0,
                    tier: RecommendationTier::GradeNotSet,
                };
            }

            let point = scale.point_of(&record.grade_symbol).unwrap_or(0.0);
            let contribution = point * record.weight / total_weight;
            let max_possible = max_point * record.weight / total_weight;
            let potential_improvement = max_possible - contribution;
            let impact_percent = round1(contribution / current_average * 100.0);

            let tier = assign_tier(record, point, max_point, potential_improvement);

            ImpactEntry {
                name: record.name.clone(),
                contribution,
                impact_percent,
                potential_improvement,
                tier,
            }
        })
        .collect();

    Ok(entries)
}

/// Assign the recommendation tier for a valid record.
///
/// Evaluated in fixed priority order; the first matching rule wins:
/// 1. point equals the scale maximum -> `AtMaximum`
/// 2. weight >= 3 and headroom > 0.3 -> `HighImpactFocus`
/// 3. headroom > 0 -> `RoomForImprovement`
/// 4. otherwise -> `None`
///
/// (`GradeNotSet` is handled before this point, for records that fail the
/// validity filter.)
fn assign_tier(
    record: &CourseRecord,
    point: f64,
    max_point: f64,
    potential_improvement: f64,
) -> RecommendationTier {
    if (point - max_point).abs() < f64::EPSILON {
        RecommendationTier::AtMaximum
    } else if record.weight >= HIGH_IMPACT_WEIGHT && potential_improvement > HIGH_IMPACT_HEADROOM {
        RecommendationTier::HighImpactFocus
    } else if potential_improvement > 0.0 {
        RecommendationTier::RoomForImprovement
    } else {
        RecommendationTier::None
    }
}

/// Order entries for presentation: descending impact percent, stable so that
/// ties keep their input order. Correctness never depends on this ordering.
#[must_use]
pub fn sort_by_impact(mut entries: Vec<ImpactEntry>) -> Vec<ImpactEntry> {
    entries.sort_by(|a, b| {
        b.impact_percent
            .partial_cmp(&a.impact_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::average::compute_average;
    use crate::core::models::CourseRecord;

    fn record(name: &str, grade: &str, weight: f64) -> CourseRecord {
        CourseRecord::with_grade(name, grade, weight)
    }

    #[test]
    fn one_entry_per_record_in_input_order() {
        let records = vec![
            record("Algorithms", "A", 3.0),
            record("", "", 0.0),
            record("Networks", "B", 3.0),
        ];
        let average = compute_average(&records, "4.0").expect("average");

        let entries = analyze_impact(&records, "4.0", average.value).expect("impact");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Algorithms");
        assert_eq!(entries[1].name, "");
        assert_eq!(entries[2].name, "Networks");
    }

    #[test]
    fn invalid_records_get_degraded_entries() {
        let records = vec![record("Algorithms", "A", 3.0), record("Pending", "", 3.0)];
        let average = compute_average(&records, "4.0").expect("average");

        let entries = analyze_impact(&records, "4.0", average.value).expect("impact");

        let degraded = &entries[1];
        assert!((degraded.contribution - 0.0).abs() < f64::EPSILON);
        assert!((degraded.impact_percent - 0.0).abs() < f64::EPSILON);
        assert!((degraded.potential_improvement - 0.0).abs() < f64::EPSILON);
        assert_eq!(degraded.tier, RecommendationTier::GradeNotSet);
    }

    #[test]
    fn contributions_sum_to_average() {
        let records = vec![
            record("One", "A", 2.0),
            record("Two", "B+", 4.0),
            record("Three", "C", 1.5),
            record("Skipped", "", 0.0),
        ];
        let average = compute_average(&records, "4.0").expect("average");

        let entries = analyze_impact(&records, "4.0", average.value).expect("impact");
        let sum: f64 = entries.iter().map(|e| e.contribution).sum();

        // Sum of contributions equals the average within rounding tolerance
        assert!((sum - average.value).abs() < 0.01, "sum {sum} vs {}", average.value);
    }

    #[test]
    fn top_grade_is_at_maximum_never_room_for_improvement() {
        let records = vec![record("Algorithms", "A", 3.0), record("Networks", "C", 3.0)];
        let average = compute_average(&records, "4.0").expect("average");

        let entries = analyze_impact(&records, "4.0", average.value).expect("impact");

        assert_eq!(entries[0].tier, RecommendationTier::AtMaximum);
        assert!((entries[0].potential_improvement - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn heavy_course_with_headroom_is_high_impact() {
        // C at weight 3 of total 6: contribution 1.0, max possible 2.0
        let records = vec![record("Algorithms", "A", 3.0), record("Networks", "C", 3.0)];
        let average = compute_average(&records, "4.0").expect("average");

        let entries = analyze_impact(&records, "4.0", average.value).expect("impact");

        assert_eq!(entries[1].tier, RecommendationTier::HighImpactFocus);
    }

    #[test]
    fn light_course_with_headroom_is_room_for_improvement() {
        let records = vec![record("Algorithms", "A", 4.0), record("Seminar", "B", 1.0)];
        let average = compute_average(&records, "4.0").expect("average");

        let entries = analyze_impact(&records, "4.0", average.value).expect("impact");

        assert_eq!(entries[1].tier, RecommendationTier::RoomForImprovement);
    }

    #[test]
    fn zero_average_is_undefined() {
        let records = vec![record("One", "F", 3.0)];

        assert_eq!(
            analyze_impact(&records, "4.0", 0.0),
            Err(CalculationError::UndefinedImpact)
        );
        assert_eq!(
            analyze_impact(&records, "4.0", f64::NAN),
            Err(CalculationError::UndefinedImpact)
        );
    }

    #[test]
    fn unknown_scale_is_signaled() {
        let records = vec![record("One", "A", 3.0)];

        assert_eq!(
            analyze_impact(&records, "3.5", 3.0),
            Err(CalculationError::UnknownScale("3.5".to_string()))
        );
    }

    #[test]
    fn impact_percent_uses_current_average_denominator() {
        // Single A at weight 3: contribution == average, so impact is 100%
        let records = vec![record("Algorithms", "A", 3.0)];
        let average = compute_average(&records, "4.0").expect("average");

        let entries = analyze_impact(&records, "4.0", average.value).expect("impact");

        assert!((entries[0].impact_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let records = vec![
            record("First", "B", 2.0),
            record("Second", "B", 2.0),
            record("Heavy", "B", 4.0),
        ];
        let average = compute_average(&records, "4.0").expect("average");
        let entries = analyze_impact(&records, "4.0", average.value).expect("impact");

        let sorted = sort_by_impact(entries);

        assert_eq!(sorted[0].name, "Heavy");
        // Equal-impact entries keep input order
        assert_eq!(sorted[1].name, "First");
        assert_eq!(sorted[2].name, "Second");
    }
}
