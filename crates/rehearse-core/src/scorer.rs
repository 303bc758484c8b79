//! Rule-based answer scorer.
//!
//! Scores an answer on four dimensions and combines them:
//!
//! | Dimension          | Weight |
//! |--------------------|--------|
//! | Keyword coverage   | 0.4    |
//! | Length fit         | 0.2    |
//! | Structure          | 0.2    |
//! | Clarity            | 0.2    |
//!
//! Every intermediate value is exposed through [`ScoreBreakdown`] so the
//! heuristics can be inspected and tested in isolation.

use crate::lexicon::Lexicon;
use crate::model::{Feedback, Rubric};
use crate::text::{count_occurrences, normalize, round1, sentence_count, words};
use crate::traits::Scorer;

pub const KEYWORD_WEIGHT: f64 = 0.4;
pub const LENGTH_WEIGHT: f64 = 0.2;
pub const STRUCTURE_WEIGHT: f64 = 0.2;
pub const CLARITY_WEIGHT: f64 = 0.2;

const STRUCTURE_BASE: f64 = 5.0;
const CLARITY_BASE: f64 = 7.0;

pub const COVERED_MOST_CONCEPTS: &str = "Covered most key concepts";
pub const SOME_CONCEPTS_MISSING: &str = "Some important concepts are missing";
pub const MANY_CONCEPTS_MISSING: &str = "Many key concepts were not addressed";
pub const REVIEW_FUNDAMENTALS: &str = "Review the fundamentals of this topic before answering again";
pub const TOO_BRIEF: &str = "Answer is too brief";
pub const ADD_DETAIL: &str = "Add more detail and concrete examples";
pub const GOOD_LENGTH: &str = "Good answer length";
pub const TOO_LONG: &str = "Answer is longer than necessary";
pub const BE_CONCISE: &str = "Be more concise and focus on the key points";
pub const WELL_STRUCTURED: &str = "Well-structured answer";
pub const POORLY_ORGANIZED: &str = "Answer could be better organized";
pub const USE_STRUCTURE: &str =
    "Structure the answer: introduce the concept, explain it, then give an example";
pub const CLEAR_EXPLANATION: &str = "Clear explanation";
pub const TOO_MANY_FILLERS: &str = "Too many filler words";
pub const AVOID_FILLERS: &str = "Practice speaking without filler words";

/// Every intermediate value of one scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Matched / expected, 0 when the rubric has no keywords.
    pub keyword_ratio: f64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub filler_count: usize,
    pub keyword_score: f64,
    pub length_score: f64,
    pub structure_score: f64,
    pub clarity_score: f64,
    pub feedback: Feedback,
}

/// Where a word count falls relative to the rubric's ideal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthBand {
    /// Below half the ideal.
    Short,
    /// Between 0.8x and 1.5x the ideal.
    Ideal,
    /// Above twice the ideal.
    Long,
    /// Anything else.
    Acceptable,
}

impl LengthBand {
    fn classify(word_count: usize, ideal: u32) -> Self {
        let words = word_count as f64;
        let ideal = ideal as f64;
        if words < ideal * 0.5 {
            LengthBand::Short
        } else if words > ideal * 2.0 {
            LengthBand::Long
        } else if words >= ideal * 0.8 && words <= ideal * 1.5 {
            LengthBand::Ideal
        } else {
            LengthBand::Acceptable
        }
    }
}

/// Deterministic keyword- and heuristic-driven scorer.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedScorer {
    lexicon: Lexicon,
}

impl RuleBasedScorer {
    /// The lexicon is normalized, so callers may pass mixed-case tables.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: lexicon.normalized(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score an answer and return all intermediate values.
    pub fn analyze(&self, answer: &str, rubric: &Rubric) -> ScoreBreakdown {
        let text = normalize(answer);
        let word_count = words(&text).len();
        let sentence_count = sentence_count(&text);

        // Keyword coverage
        let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = rubric
            .expected_keywords
            .iter()
            .map(|kw| kw.to_lowercase())
            .partition(|kw| text.contains(kw.as_str()));
        let keyword_ratio = if rubric.expected_keywords.is_empty() {
            0.0
        } else {
            matched_keywords.len() as f64 / rubric.expected_keywords.len() as f64
        };
        let keyword_score = keyword_ratio * 10.0;

        // Length fit; a zero ideal is treated as one word
        let ideal = rubric.ideal_answer_length.max(1);
        let band = LengthBand::classify(word_count, ideal);
        let length_score = match band {
            LengthBand::Short => (word_count as f64 / (ideal as f64 * 0.5)) * 6.0,
            LengthBand::Long => 7.0,
            LengthBand::Ideal => 10.0,
            LengthBand::Acceptable => 8.0,
        };

        // Structure
        let mut structure_score = STRUCTURE_BASE;
        if sentence_count >= 3 {
            structure_score += 2.0;
        } else if sentence_count == 2 {
            structure_score += 1.0;
        }
        if self
            .lexicon
            .list_markers
            .iter()
            .any(|m| text.contains(m.as_str()))
        {
            structure_score += 2.0;
        }
        if self
            .lexicon
            .transition_words
            .iter()
            .any(|w| text.contains(w.as_str()))
        {
            structure_score += 1.0;
        }
        let structure_score = structure_score.clamp(0.0, 10.0);

        // Clarity
        let avg_sentence_length = word_count as f64 / sentence_count.max(1) as f64;
        let mut clarity_score = CLARITY_BASE;
        if (10.0..=30.0).contains(&avg_sentence_length) {
            clarity_score += 2.0;
        } else if avg_sentence_length < 10.0 {
            clarity_score += 1.0;
        }
        let filler_count: usize = self
            .lexicon
            .filler_phrases
            .iter()
            .map(|f| count_occurrences(&text, f))
            .sum();
        if filler_count == 0 {
            clarity_score += 1.0;
        } else if filler_count > 5 {
            clarity_score -= 2.0;
        }
        let clarity_score = clarity_score.clamp(0.0, 10.0);

        let total = keyword_score * KEYWORD_WEIGHT
            + length_score * LENGTH_WEIGHT
            + structure_score * STRUCTURE_WEIGHT
            + clarity_score * CLARITY_WEIGHT;

        let mut feedback = Feedback {
            score: round1(total.clamp(0.0, 10.0)),
            technical_accuracy: round1(keyword_score.clamp(0.0, 10.0)),
            clarity: round1(clarity_score),
            structure: round1(structure_score),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            suggestions: Vec::new(),
        };

        // Written feedback: independent threshold checks, in a fixed order
        if keyword_ratio >= 0.7 {
            feedback.strengths.push(COVERED_MOST_CONCEPTS.into());
        } else if keyword_ratio >= 0.4 {
            feedback.weaknesses.push(SOME_CONCEPTS_MISSING.into());
            if (1..=3).contains(&missing_keywords.len()) {
                feedback.suggestions.push(format!(
                    "Consider mentioning: {}",
                    missing_keywords.join(", ")
                ));
            }
        } else {
            feedback.weaknesses.push(MANY_CONCEPTS_MISSING.into());
            feedback.suggestions.push(REVIEW_FUNDAMENTALS.into());
        }

        match band {
            LengthBand::Short => {
                feedback.weaknesses.push(TOO_BRIEF.into());
                feedback.suggestions.push(ADD_DETAIL.into());
            }
            LengthBand::Ideal => feedback.strengths.push(GOOD_LENGTH.into()),
            LengthBand::Long => {
                feedback.weaknesses.push(TOO_LONG.into());
                feedback.suggestions.push(BE_CONCISE.into());
            }
            LengthBand::Acceptable => {}
        }

        if structure_score >= 8.0 {
            feedback.strengths.push(WELL_STRUCTURED.into());
        } else if structure_score < 6.0 {
            feedback.weaknesses.push(POORLY_ORGANIZED.into());
            feedback.suggestions.push(USE_STRUCTURE.into());
        }

        if clarity_score >= 8.0 {
            feedback.strengths.push(CLEAR_EXPLANATION.into());
        }

        if filler_count > 3 {
            feedback.weaknesses.push(TOO_MANY_FILLERS.into());
            feedback.suggestions.push(AVOID_FILLERS.into());
        }

        tracing::debug!(
            keyword = keyword_score,
            length = length_score,
            structure = structure_score,
            clarity = clarity_score,
            score = feedback.score,
            word_count,
            sentence_count,
            filler_count,
            "scored answer"
        );

        ScoreBreakdown {
            matched_keywords,
            missing_keywords,
            keyword_ratio,
            word_count,
            sentence_count,
            filler_count,
            keyword_score,
            length_score,
            structure_score,
            clarity_score,
            feedback,
        }
    }
}

impl Scorer for RuleBasedScorer {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn score(&self, answer: &str, rubric: &Rubric) -> Feedback {
        self.analyze(answer, rubric).feedback
    }
}
