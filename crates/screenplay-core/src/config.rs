//! Tunable thresholds for grouping and geometry checks.
//!
//! Mirrors the teacher's `pdf/markdown/constants.rs` pattern of naming every
//! magic number, but exposed as an overridable config object (the way
//! `ExtractionConfig` is threaded through the teacher's pipeline) rather than
//! hardcoded constants, since a screenplay classifier tuned for one PDF
//! producer may need different tolerances for another.

/// Thresholds driving the Grouper and ElementPredicates. Defaults reproduce
/// the constants named in the specification exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Minimum vertical gap (points) that starts a new group within a page.
    pub group_gap_threshold: f32,
    /// Base centering tolerance (points).
    pub centered_tolerance: f32,
    /// Widened centering tolerance used when `280 <= x <= 320`.
    pub centered_tolerance_wide: f32,
    /// Default page width (points) when the extractor omits it.
    pub page_width_default: f32,
    /// Default page height (points) when the extractor omits it.
    pub page_height_default: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            group_gap_threshold: 10.0,
            centered_tolerance: 20.0,
            centered_tolerance_wide: 35.0,
            page_width_default: 612.0,
            page_height_default: 792.0,
        }
    }
}
