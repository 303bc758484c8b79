//! The seam between session evaluation and answer scoring.

use crate::model::{Feedback, Rubric};

/// Anything that turns an answer plus rubric into feedback.
///
/// Implementations must be pure: the same inputs always yield the same
/// feedback, and scoring never fails.
pub trait Scorer: Send + Sync {
    /// Short identifier recorded in session reports (e.g. "rule-based").
    fn name(&self) -> &str;

    /// Score one answer against its rubric.
    fn score(&self, answer: &str, rubric: &Rubric) -> Feedback;
}
