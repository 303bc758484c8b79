//! Core data model types for rehearse.
//!
//! Rubrics and answers are the scorer's inputs; [`Feedback`] and
//! [`VoiceMetrics`] are its outputs, persisted by calling code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RubricError;

/// Ideal length used when a question has no rubric of its own.
pub const FALLBACK_IDEAL_LENGTH: u32 = 100;

/// Confidence reported when no transcript exists.
pub const DEFAULT_CONFIDENCE: u8 = 70;

/// Per-question scoring rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    /// Lower-case concepts a good answer mentions.
    pub expected_keywords: Vec<String>,
    /// Target answer length in words.
    pub ideal_answer_length: u32,
}

impl Rubric {
    /// Build a rubric, normalizing keywords to lower case.
    ///
    /// Blank keywords are dropped and duplicates collapse to their first
    /// occurrence, so the keyword order is stable for a given input.
    pub fn new<I, S>(keywords: I, ideal_answer_length: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expected_keywords: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !expected_keywords.contains(&kw) {
                expected_keywords.push(kw);
            }
        }
        Self {
            expected_keywords,
            ideal_answer_length,
        }
    }

    /// Like [`Rubric::new`], but rejects blank keywords and a zero ideal length.
    pub fn try_new<I, S>(keywords: I, ideal_answer_length: u32) -> Result<Self, RubricError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if ideal_answer_length == 0 {
            return Err(RubricError::ZeroIdealLength);
        }
        let keywords: Vec<S> = keywords.into_iter().collect();
        if let Some(pos) = keywords.iter().position(|k| k.as_ref().trim().is_empty()) {
            return Err(RubricError::BlankKeyword(pos));
        }
        Ok(Self::new(keywords, ideal_answer_length))
    }

    /// Rubric applied to answers whose question has no rubric.
    pub fn fallback() -> Self {
        Self {
            expected_keywords: Vec::new(),
            ideal_answer_length: FALLBACK_IDEAL_LENGTH,
        }
    }
}

/// A free-form answer, typed or transcribed. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnswer {
    pub text: String,
}

impl From<&str> for RawAnswer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl From<String> for RawAnswer {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// How an answer was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    Text,
    Voice,
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMode::Text => write!(f, "text"),
            AnswerMode::Voice => write!(f, "voice"),
        }
    }
}

/// One submitted answer as produced by the interview flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Question identifier from the bank, when known.
    #[serde(default)]
    pub question_id: Option<String>,
    /// The question text; rubrics are looked up by it.
    pub question: String,
    /// Typed answer. Voice callers set this equal to the transcript.
    #[serde(default)]
    pub answer_text: Option<String>,
    /// Speech transcript, present only for voice answers.
    #[serde(default)]
    pub transcript: Option<String>,
}

impl AnswerRecord {
    /// The text to score: the typed answer, else the transcript.
    pub fn effective_text(&self) -> &str {
        self.answer_text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(self.transcript.as_deref())
            .unwrap_or("")
    }

    /// Voice when a non-blank transcript exists.
    pub fn mode(&self) -> AnswerMode {
        match &self.transcript {
            Some(t) if !t.trim().is_empty() => AnswerMode::Voice,
            _ => AnswerMode::Text,
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.effective_text().trim().is_empty()
    }
}

/// Scored feedback for a single answer. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Weighted total, 0–10, one decimal.
    pub score: f64,
    /// Keyword coverage score, 0–10, one decimal.
    ///
    /// Despite the name this measures coverage of the rubric's expected
    /// keywords, not independent technical correctness.
    pub technical_accuracy: f64,
    /// 0–10, one decimal.
    pub clarity: f64,
    /// 0–10, one decimal.
    pub structure: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Speaking metrics derived from a voice transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceMetrics {
    /// 0–100.
    pub confidence_score: u8,
    pub words_per_minute: u32,
    pub filler_word_count: u32,
}

impl VoiceMetrics {
    /// Metrics reported when no transcript exists.
    pub fn no_transcript() -> Self {
        Self {
            confidence_score: DEFAULT_CONFIDENCE,
            words_per_minute: 0,
            filler_word_count: 0,
        }
    }
}

/// Interview difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "junior" | "entry" => Ok(Difficulty::Easy),
            "medium" | "mid" | "intermediate" => Ok(Difficulty::Medium),
            "hard" | "senior" | "advanced" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A single interview question with its rubric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// The question as asked; also the rubric lookup key.
    pub text: String,
    /// Target role, e.g. "backend" or "frontend".
    pub role: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rubric: Rubric,
}

/// A collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Look up the rubric for a question by its text.
    pub fn rubric_for(&self, question_text: &str) -> Option<&Rubric> {
        let key = question_text.trim();
        self.questions
            .iter()
            .find(|q| q.text.trim() == key)
            .map(|q| &q.rubric)
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric_normalizes_keywords() {
        let rubric = Rubric::new(["Binary Search", " sorted ", "binary search", ""], 40);
        assert_eq!(rubric.expected_keywords, vec!["binary search", "sorted"]);
        assert_eq!(rubric.ideal_answer_length, 40);
    }

    #[test]
    fn rubric_try_new_rejects_bad_input() {
        assert_eq!(
            Rubric::try_new(["a"], 0).unwrap_err(),
            RubricError::ZeroIdealLength
        );
        assert_eq!(
            Rubric::try_new(["a", "  "], 10).unwrap_err(),
            RubricError::BlankKeyword(1)
        );
        assert!(Rubric::try_new(["cache"], 10).is_ok());
    }

    #[test]
    fn difficulty_display_and_parse() {
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!("Senior".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("junior".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn answer_record_prefers_typed_text() {
        let record = AnswerRecord {
            question: "q".into(),
            answer_text: Some("typed".into()),
            transcript: Some("spoken".into()),
            ..Default::default()
        };
        assert_eq!(record.effective_text(), "typed");
        assert_eq!(record.mode(), AnswerMode::Voice);

        let voice_only = AnswerRecord {
            question: "q".into(),
            transcript: Some("spoken".into()),
            ..Default::default()
        };
        assert_eq!(voice_only.effective_text(), "spoken");
        assert!(voice_only.is_answered());

        let blank = AnswerRecord {
            question: "q".into(),
            answer_text: Some("   ".into()),
            ..Default::default()
        };
        assert!(!blank.is_answered());
        assert_eq!(blank.mode(), AnswerMode::Text);
    }

    #[test]
    fn feedback_serializes_snake_case() {
        let feedback = Feedback {
            score: 7.6,
            technical_accuracy: 5.0,
            clarity: 10.0,
            structure: 8.0,
            strengths: vec![],
            weaknesses: vec![],
            suggestions: vec![],
        };
        let json = serde_json::to_string(&feedback).unwrap();
        assert!(json.contains("\"technical_accuracy\":5.0"));
    }

    #[test]
    fn bank_rubric_lookup_by_text() {
        let bank = QuestionBank {
            id: "b".into(),
            name: "B".into(),
            description: String::new(),
            questions: vec![Question {
                id: "q1".into(),
                text: "What is a mutex?".into(),
                role: "backend".into(),
                difficulty: Difficulty::Easy,
                category: None,
                tags: vec![],
                rubric: Rubric::new(["lock"], 30),
            }],
        };
        assert!(bank.rubric_for("  What is a mutex?  ").is_some());
        assert!(bank.rubric_for("What is a semaphore?").is_none());
        assert_eq!(bank.find("q1").map(|q| q.role.as_str()), Some("backend"));
    }
}
