//! Interview-level aggregate statistics.
//!
//! Per-answer scores are averaged with a plain arithmetic mean. Confidence
//! is averaged only over answers that carry voice metrics.

use serde::{Deserialize, Serialize};

use crate::report::ScoredAnswer;
use crate::text::round1;

/// Aggregates across all answered questions of one interview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of answers that were scored.
    pub answered: usize,
    /// How many of those carried voice metrics.
    pub voice_answers: usize,
    /// Mean `score`, one decimal. `None` when nothing was answered.
    pub overall_score: Option<f64>,
    /// Mean `confidence_score`, rounded. `None` without voice answers.
    pub confidence_score: Option<u8>,
    pub avg_technical_accuracy: Option<f64>,
    pub avg_clarity: Option<f64>,
    pub avg_structure: Option<f64>,
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Compute aggregate statistics from scored answers.
pub fn compute_aggregate_stats(answers: &[ScoredAnswer]) -> AggregateStats {
    let avg = |f: fn(&ScoredAnswer) -> f64| mean(answers.iter().map(f)).map(round1);

    let confidences: Vec<f64> = answers
        .iter()
        .filter_map(|a| a.voice_metrics.map(|m| m.confidence_score as f64))
        .collect();

    AggregateStats {
        answered: answers.len(),
        voice_answers: confidences.len(),
        overall_score: avg(|a| a.ai_score),
        confidence_score: mean(confidences).map(|c| c.round().clamp(0.0, 100.0) as u8),
        avg_technical_accuracy: avg(|a| a.ai_feedback.technical_accuracy),
        avg_clarity: avg(|a| a.ai_feedback.clarity),
        avg_structure: avg(|a| a.ai_feedback.structure),
    }
}
