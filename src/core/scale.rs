//! Grading scale registry
//!
//! Each supported scale is a closed table: an ordered set of grade symbols
//! (descending quality), each symbol's point value, and the classification
//! bands mapping an average to a degree-honours label. Band edges are
//! configuration, not derived from the point values, so they are stored
//! explicitly. Registry content is static; nothing here is computed or
//! mutated after process start.

use crate::core::error::CalculationError;

/// Resolution of every computed average: two decimal places.
pub const AVERAGE_RESOLUTION: f64 = 0.01;

/// Slack for band-edge comparisons. Edges are authored as decimal literals,
/// and at these magnitudes adjacent hundredths carry more representation
/// error than machine epsilon (`3.70 - 3.69` is not exactly `0.01`), so
/// edge arithmetic is compared well below the resolution instead.
const EDGE_SLACK: f64 = 1e-9;

/// A single classification band: averages in `[min, max]` (inclusive on both
/// ends) carry `label`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationBand {
    /// Lowest average belonging to this band (inclusive)
    pub min: f64,
    /// Highest average belonging to this band (inclusive)
    pub max: f64,
    /// Degree classification label (e.g., "First Class Honours")
    pub label: &'static str,
}

/// A registered grading scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeScale {
    /// Registry identifier (e.g., "4.0")
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// `(symbol, point)` pairs in descending quality order.
    /// The head symbol carries the scale's maximum point value.
    pub symbols: &'static [(&'static str, f64)],
    /// Classification bands in descending order, partitioning `[0, max_point]`
    pub bands: &'static [ClassificationBand],
}

/// Letter-grade scale with plus/minus tiers, 4.0 maximum.
///
/// Honours bands are placed on hundredth edges so that an average of exactly
/// 3.50 lands in Second Class Honours (Upper Division) and 3.49 one band
/// lower.
static FOUR_POINT: GradeScale = GradeScale {
    id: "4.0",
    name: "4.0 letter-grade scale",
    symbols: &[
        ("A", 4.0),
        ("A-", 3.7),
        ("B+", 3.3),
        ("B", 3.0),
        ("B-", 2.7),
        ("C+", 2.3),
        ("C", 2.0),
        ("C-", 1.7),
        ("D+", 1.3),
        ("D", 1.0),
        ("F", 0.0),
    ],
    bands: &[
        ClassificationBand {
            min: 3.70,
            max: 4.00,
            label: "First Class Honours",
        },
        ClassificationBand {
            min: 3.50,
            max: 3.69,
            label: "Second Class Honours (Upper Division)",
        },
        ClassificationBand {
            min: 2.70,
            max: 3.49,
            label: "Second Class Honours (Lower Division)",
        },
        ClassificationBand {
            min: 2.00,
            max: 2.69,
            label: "Third Class Honours",
        },
        ClassificationBand {
            min: 1.00,
            max: 1.99,
            label: "Pass",
        },
        ClassificationBand {
            min: 0.00,
            max: 0.99,
            label: "Fail",
        },
    ],
};

/// Coarse A-F scale, 5.0 maximum, Nigerian-style honours bands.
static FIVE_POINT: GradeScale = GradeScale {
    id: "5.0",
    name: "5.0 scale",
    symbols: &[
        ("A", 5.0),
        ("B", 4.0),
        ("C", 3.0),
        ("D", 2.0),
        ("E", 1.0),
        ("F", 0.0),
    ],
    bands: &[
        ClassificationBand {
            min: 4.50,
            max: 5.00,
            label: "First Class Honours",
        },
        ClassificationBand {
            min: 3.50,
            max: 4.49,
            label: "Second Class Honours (Upper Division)",
        },
        ClassificationBand {
            min: 2.40,
            max: 3.49,
            label: "Second Class Honours (Lower Division)",
        },
        ClassificationBand {
            min: 1.50,
            max: 2.39,
            label: "Third Class Honours",
        },
        ClassificationBand {
            min: 1.00,
            max: 1.49,
            label: "Pass",
        },
        ClassificationBand {
            min: 0.00,
            max: 0.99,
            label: "Fail",
        },
    ],
};

/// Australian-style achievement scale, 7.0 maximum.
static SEVEN_POINT: GradeScale = GradeScale {
    id: "7.0",
    name: "7.0 scale",
    symbols: &[
        ("HD", 7.0),
        ("DI", 6.0),
        ("CR", 5.0),
        ("PS", 4.0),
        ("FA", 0.0),
    ],
    bands: &[
        ClassificationBand {
            min: 6.50,
            max: 7.00,
            label: "First Class Honours",
        },
        ClassificationBand {
            min: 5.50,
            max: 6.49,
            label: "Second Class Honours (Upper Division)",
        },
        ClassificationBand {
            min: 4.50,
            max: 5.49,
            label: "Second Class Honours (Lower Division)",
        },
        ClassificationBand {
            min: 4.00,
            max: 4.49,
            label: "Third Class Honours",
        },
        ClassificationBand {
            min: 3.00,
            max: 3.99,
            label: "Pass",
        },
        ClassificationBand {
            min: 0.00,
            max: 2.99,
            label: "Fail",
        },
    ],
};

/// Scale used when the caller does not specify one.
pub const DEFAULT_SCALE_ID: &str = "4.0";

/// All registered scales.
static REGISTRY: [&GradeScale; 3] = [&FOUR_POINT, &FIVE_POINT, &SEVEN_POINT];

/// All registered scales, in registry order.
#[must_use]
pub fn registry() -> &'static [&'static GradeScale] {
    &REGISTRY
}

/// Look up a scale by identifier.
///
/// # Errors
///
/// Returns `CalculationError::UnknownScale` when `id` is not registered.
pub fn find_scale(id: &str) -> Result<&'static GradeScale, CalculationError> {
    REGISTRY
        .iter()
        .find(|scale| scale.id == id)
        .copied()
        .ok_or_else(|| CalculationError::UnknownScale(id.to_string()))
}

impl GradeScale {
    /// Point value for a grade symbol, or `None` if the symbol is not on
    /// this scale.
    #[must_use]
    pub fn point_of(&self, symbol: &str) -> Option<f64> {
        self.symbols
            .iter()
            .find(|(sym, _)| *sym == symbol)
            .map(|(_, point)| *point)
    }

    /// Maximum point value on this scale (the head of the symbol table).
    #[must_use]
    pub fn max_point(&self) -> f64 {
        self.symbols.first().map_or(0.0, |(_, point)| *point)
    }

    /// Highest-quality symbol, used as the default selection by form layers.
    #[must_use]
    pub fn default_symbol(&self) -> &'static str {
        self.symbols.first().map_or("", |(sym, _)| *sym)
    }

    /// Whether `symbol` is valid on this scale.
    #[must_use]
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|(sym, _)| *sym == symbol)
    }

    /// Map an average to its degree classification label.
    ///
    /// Searches the ordered bands for the first one whose inclusive range
    /// covers `average`.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::ClassificationGap` when no band matches.
    /// With a correctly authored registry this is unreachable for any
    /// 2-decimal average in `[0, max_point]`; it exists to guard the band
    /// tables against configuration mistakes rather than silently defaulting.
    pub fn classify(&self, average: f64) -> Result<&'static str, CalculationError> {
        self.bands
            .iter()
            .find(|band| band.min <= average && average <= band.max)
            .map(|band| band.label)
            .ok_or(CalculationError::ClassificationGap(average))
    }
}

/// Validate every registered scale's band table.
///
/// Checks, per scale: the symbol table is non-empty and headed by the maximum
/// point value, the first band reaches `max_point`, the last band starts at 0,
/// no band is inverted, and consecutive bands are contiguous at the engine's
/// 2-decimal resolution (adjacent edges no more than one hundredth apart).
///
/// Run once at startup so a misauthored table surfaces immediately instead of
/// as a `ClassificationGap` on some future average.
///
/// # Errors
///
/// Returns a description of the first defect found.
pub fn validate_registry() -> Result<(), String> {
    for scale in &REGISTRY {
        validate_bands(scale)?;
    }
    Ok(())
}

/// Validate one scale's band table. See [`validate_registry`].
fn validate_bands(scale: &GradeScale) -> Result<(), String> {
    let id = scale.id;

    if scale.symbols.is_empty() {
        return Err(format!("Scale '{id}' has no grade symbols"));
    }

    let max_point = scale.max_point();
    for (symbol, point) in scale.symbols {
        if *point > max_point {
            return Err(format!(
                "Scale '{id}': symbol '{symbol}' ({point}) exceeds the head symbol's point value ({max_point})"
            ));
        }
        if *point < 0.0 {
            return Err(format!("Scale '{id}': symbol '{symbol}' has a negative point value"));
        }
    }

    let Some(first) = scale.bands.first() else {
        return Err(format!("Scale '{id}' has no classification bands"));
    };
    let last = scale.bands.last().expect("non-empty bands");

    if (first.max - max_point).abs() > EDGE_SLACK {
        return Err(format!(
            "Scale '{id}': top band ends at {} instead of the maximum point {max_point}",
            first.max
        ));
    }
    if last.min.abs() > EDGE_SLACK {
        return Err(format!(
            "Scale '{id}': bottom band starts at {} instead of 0",
            last.min
        ));
    }

    for band in scale.bands {
        if band.min > band.max {
            return Err(format!(
                "Scale '{id}': band '{}' is inverted ({} > {})",
                band.label, band.min, band.max
            ));
        }
    }

    for pair in scale.bands.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        let gap = upper.min - lower.max;
        if gap < -EDGE_SLACK {
            return Err(format!(
                "Scale '{id}': bands '{}' and '{}' overlap",
                upper.label, lower.label
            ));
        }
        if gap > AVERAGE_RESOLUTION + EDGE_SLACK {
            return Err(format!(
                "Scale '{id}': gap between bands '{}' and '{}' ({} to {})",
                lower.label, upper.label, lower.max, upper.min
            ));
        }
    }

    Ok(())
}

/// Convert an average from one scale to another.
///
/// The conversion is linear in the ratio of the scales' maximum points and
/// rounds to 2 decimal places. Converting a value from scale X to Y and back
/// returns the original within the rounding tolerance.
///
/// # Errors
///
/// Returns `CalculationError::UnknownScale` when either identifier is not
/// registered.
pub fn convert_average(value: f64, from_id: &str, to_id: &str) -> Result<f64, CalculationError> {
    let from = find_scale(from_id)?;
    let to = find_scale(to_id)?;
    Ok(round2(value * to.max_point() / from.max_point()))
}

/// Round to the engine's 2-decimal average resolution.
#[must_use]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (used for impact percentages).
#[must_use]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
