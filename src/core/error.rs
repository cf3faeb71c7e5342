//! Error taxonomy for the grade average engine
//!
//! Every condition here is produced by normal, anticipated input (an empty
//! form, incomplete rows, a misauthored scale table). None is fatal to the
//! host process, and each is reported distinctly so the embedding UI can map
//! it to its own message.

use std::error::Error;
use std::fmt;

/// Recoverable failure modes of the average calculator and impact analyzer.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// The input collection was empty.
    NoCoursesProvided,
    /// The input was non-empty but no record passed the validity filter
    /// (name set, grade set and recognized by the scale, weight > 0).
    NoValidCourses,
    /// The supplied scale identifier is not in the registry.
    UnknownScale(String),
    /// The computed average is not covered by any classification band.
    /// Indicates a registry configuration defect, never a user mistake.
    ClassificationGap(f64),
    /// Impact analysis was requested against a zero or non-finite average.
    UndefinedImpact,
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCoursesProvided => write!(f, "No courses provided"),
            Self::NoValidCourses => {
                write!(f, "No valid courses: every record is missing a name, a recognized grade, or a positive weight")
            }
            Self::UnknownScale(id) => write!(f, "Unknown grading scale: '{id}'"),
            Self::ClassificationGap(value) => {
                write!(f, "No classification band covers the average {value:.2}")
            }
            Self::UndefinedImpact => {
                write!(f, "Impact analysis is undefined for a zero average")
            }
        }
    }
}

impl Error for CalculationError {}
