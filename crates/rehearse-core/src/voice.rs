//! Speaking-confidence estimation from voice transcripts.
//!
//! The estimate blends three signals:
//!
//! - speaking rate, best at 135 words per minute
//! - filler-word density
//! - the written clarity score of the same answer
//!
//! Without a measured duration the rate assumes every answer took a fixed
//! window (30 seconds by default), so `words_per_minute` is an
//! approximation rather than a measurement.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::model::{VoiceMetrics, DEFAULT_CONFIDENCE};
use crate::text::{strip_trailing_punctuation, words};

/// Speaking rate that scores a perfect 100.
pub const OPTIMAL_WPM: f64 = 135.0;

const RATE_WEIGHT: f64 = 0.4;
const FILLER_WEIGHT: f64 = 0.3;
const CLARITY_WEIGHT: f64 = 0.3;

/// Tunables for the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// Answer length assumed when no duration is known.
    pub assumed_answer_secs: u32,
    /// Confidence reported when there is no transcript.
    pub default_confidence: u8,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            assumed_answer_secs: 30,
            default_confidence: DEFAULT_CONFIDENCE,
        }
    }
}

/// Estimates [`VoiceMetrics`] from a transcript.
#[derive(Debug, Clone, Default)]
pub struct VoiceConfidenceEstimator {
    lexicon: Lexicon,
    settings: VoiceSettings,
}

impl VoiceConfidenceEstimator {
    /// The lexicon is normalized, so callers may pass mixed-case tables.
    pub fn new(lexicon: Lexicon, settings: VoiceSettings) -> Self {
        Self {
            lexicon: lexicon.normalized(),
            settings,
        }
    }

    pub fn settings(&self) -> &VoiceSettings {
        &self.settings
    }

    /// Estimate metrics assuming the configured fixed answer window.
    ///
    /// `clarity_score` is the 0–10 clarity sub-score of the same answer.
    /// A missing or blank transcript yields the default metrics.
    pub fn estimate(&self, transcript: Option<&str>, clarity_score: f64) -> VoiceMetrics {
        let secs = self.settings.assumed_answer_secs.max(1);
        self.estimate_inner(transcript, clarity_score, |word_count| {
            ((word_count as f64 * 60.0) / secs as f64).round() as u32
        })
    }

    /// Estimate metrics from a measured answer duration.
    pub fn estimate_with_duration(
        &self,
        transcript: Option<&str>,
        clarity_score: f64,
        duration: Duration,
    ) -> VoiceMetrics {
        let secs = duration.as_secs_f64();
        if secs <= 0.0 {
            return self.estimate(transcript, clarity_score);
        }
        self.estimate_inner(transcript, clarity_score, |word_count| {
            ((word_count as f64 * 60.0) / secs).round() as u32
        })
    }

    fn estimate_inner(
        &self,
        transcript: Option<&str>,
        clarity_score: f64,
        rate: impl Fn(usize) -> u32,
    ) -> VoiceMetrics {
        let Some(transcript) = transcript.filter(|t| !t.trim().is_empty()) else {
            return VoiceMetrics {
                confidence_score: self.settings.default_confidence.min(100),
                ..VoiceMetrics::no_transcript()
            };
        };

        let tokens = words(transcript);
        let word_count = tokens.len();
        let words_per_minute = rate(word_count);

        let filler_word_count = tokens
            .iter()
            .map(|t| strip_trailing_punctuation(t).to_lowercase())
            .filter(|t| self.lexicon.spoken_fillers.iter().any(|f| f == t))
            .count() as u32;

        let rate_score = (100.0 - (words_per_minute as f64 - OPTIMAL_WPM).abs() * 0.5).max(0.0);
        let filler_ratio = filler_word_count as f64 / word_count.max(1) as f64;
        let filler_score = (100.0 - filler_ratio * 500.0).max(0.0);
        let blended = rate_score * RATE_WEIGHT
            + filler_score * FILLER_WEIGHT
            + clarity_score * 10.0 * CLARITY_WEIGHT;
        let confidence_score = blended.round().clamp(0.0, 100.0) as u8;

        tracing::debug!(
            word_count,
            words_per_minute,
            filler_word_count,
            rate_score,
            filler_score,
            confidence_score,
            "estimated voice confidence"
        );

        VoiceMetrics {
            confidence_score,
            words_per_minute,
            filler_word_count,
        }
    }
}
