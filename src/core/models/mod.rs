//! Data models for `GradePoint`

pub mod record;

pub use record::{CourseRecord, DEFAULT_COURSE_WEIGHT, MAX_COURSE_WEIGHT};
