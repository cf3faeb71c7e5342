//! Caller-owned history of average results
//!
//! The engine itself is stateless; anything longitudinal (trend lines,
//! improvement streaks) is a fold over an ordered list of past results that
//! the caller maintains. This type is that list.

use crate::core::average::{AverageResult, Trend};
use serde::{Deserialize, Serialize};

/// Ordered list of average snapshots, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeHistory {
    /// Recorded results in chronological order
    entries: Vec<AverageResult>,
}

impl GradeHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a result, attaching previous-value/trend metadata from the
    /// latest existing entry.
    pub fn push(&mut self, result: AverageResult) {
        let result = match self.latest() {
            Some(previous) => result.with_previous(previous.value),
            None => result,
        };
        self.entries.push(result);
    }

    /// The most recent result, if any
    #[must_use]
    pub fn latest(&self) -> Option<&AverageResult> {
        self.entries.last()
    }

    /// All recorded results, oldest first
    #[must_use]
    pub fn entries(&self) -> &[AverageResult] {
        &self.entries
    }

    /// Number of recorded results
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the trailing run of strictly improving results.
    ///
    /// A single entry (or an empty history) has a streak of 0; each
    /// consecutive pair where the later value is higher extends the streak
    /// by one. Any non-improving step resets the count.
    #[must_use]
    pub fn improvement_streak(&self) -> usize {
        self.entries
            .iter()
            .rev()
            .take_while(|entry| entry.trend == Some(Trend::Improved))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::average::compute_average;
    use crate::core::models::CourseRecord;

    fn result_with_value(grade: &str) -> AverageResult {
        let records = vec![CourseRecord::with_grade("Course", grade, 3.0)];
        compute_average(&records, "4.0").expect("average")
    }

    #[test]
    fn push_attaches_trend_from_latest() {
        let mut history = GradeHistory::new();

        history.push(result_with_value("B"));
        assert_eq!(history.latest().unwrap().trend, None);

        history.push(result_with_value("A"));
        assert_eq!(history.latest().unwrap().trend, Some(Trend::Improved));
        assert_eq!(history.latest().unwrap().previous_value, Some(3.0));
    }

    #[test]
    fn streak_counts_trailing_improvements() {
        let mut history = GradeHistory::new();
        history.push(result_with_value("C")); // 2.0
        history.push(result_with_value("B")); // 3.0, improved
        history.push(result_with_value("A-")); // 3.7, improved

        assert_eq!(history.improvement_streak(), 2);
    }

    #[test]
    fn streak_resets_on_decline() {
        let mut history = GradeHistory::new();
        history.push(result_with_value("C"));
        history.push(result_with_value("A")); // improved
        history.push(result_with_value("B")); // decreased
        history.push(result_with_value("A-")); // improved

        assert_eq!(history.improvement_streak(), 1);
    }

    #[test]
    fn streak_ignores_maintained_results() {
        let mut history = GradeHistory::new();
        history.push(result_with_value("B"));
        history.push(result_with_value("B")); // maintained

        assert_eq!(history.improvement_streak(), 0);
    }

    #[test]
    fn empty_and_singleton_histories_have_no_streak() {
        let mut history = GradeHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.improvement_streak(), 0);

        history.push(result_with_value("A"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.improvement_streak(), 0);
    }
}
