//! Course record model

use crate::core::scale::GradeScale;
use serde::{Deserialize, Serialize};

/// Largest credit-unit weight a single course may carry.
pub const MAX_COURSE_WEIGHT: f64 = 6.0;

/// Weight given to a freshly created record before the caller edits it.
pub const DEFAULT_COURSE_WEIGHT: f64 = 1.0;

/// A single evaluated unit: one course with a grade and a credit-unit weight.
///
/// Records are created empty, mutated field-by-field by the form layer, and
/// read as a snapshot by the calculator. The calculator never mutates them;
/// weight sanitization happens here, at the mutation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course name (free text, may be empty)
    pub name: String,

    /// Grade symbol on the active scale, or empty when not yet set
    pub grade_symbol: String,

    /// Credit-unit weight, kept within `[0, MAX_COURSE_WEIGHT]`
    pub weight: f64,
}

impl CourseRecord {
    /// Create a new record with an empty grade and the default weight
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            grade_symbol: String::new(),
            weight: DEFAULT_COURSE_WEIGHT,
        }
    }

    /// Create a fully populated record.
    ///
    /// The weight passes through the same sanitization as [`set_weight`].
    ///
    /// [`set_weight`]: Self::set_weight
    #[must_use]
    pub fn with_grade(name: &str, grade_symbol: &str, weight: f64) -> Self {
        let mut record = Self::new(name.to_string());
        record.grade_symbol = grade_symbol.to_string();
        let _ = record.set_weight(weight);
        record
    }

    /// Set the grade symbol
    pub fn set_grade(&mut self, symbol: String) {
        self.grade_symbol = symbol;
    }

    /// Set the credit-unit weight.
    ///
    /// Values above [`MAX_COURSE_WEIGHT`] are clamped down to it. Negative
    /// values are ignored and leave the record unchanged.
    ///
    /// # Returns
    /// `true` if the weight was applied (possibly clamped), `false` if it was
    /// rejected as negative.
    pub fn set_weight(&mut self, weight: f64) -> bool {
        if weight < 0.0 || !weight.is_finite() {
            return false;
        }
        self.weight = weight.min(MAX_COURSE_WEIGHT);
        true
    }

    /// Whether this record counts toward the weighted average on `scale`:
    /// non-empty name, a grade symbol the scale recognizes, and positive
    /// weight.
    #[must_use]
    pub fn is_countable(&self, scale: &GradeScale) -> bool {
        !self.name.trim().is_empty() && scale.has_symbol(&self.grade_symbol) && self.weight > 0.0
    }
}
