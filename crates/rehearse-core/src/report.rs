//! Session report types with JSON persistence and Markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SubmissionError;
use crate::model::{AnswerMode, AnswerRecord, Difficulty, Feedback, VoiceMetrics};
use crate::statistics::AggregateStats;

/// A completed interview as submitted for scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewSubmission {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

/// Load a submission from `.json` or `.toml`.
pub fn load_submission(path: &Path) -> Result<InterviewSubmission> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submission: {}", path.display()))?;

    let submission: InterviewSubmission = match ext.as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))?,
        "toml" => toml::from_str(&content)
            .with_context(|| format!("failed to parse TOML: {}", path.display()))?,
        other => return Err(SubmissionError::UnsupportedFormat(other.to_string()).into()),
    };

    if submission.answers.is_empty() {
        return Err(SubmissionError::Empty.into());
    }

    Ok(submission)
}

/// Scoring output for one answer, in the shape calling code persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    #[serde(default)]
    pub question_id: Option<String>,
    pub question: String,
    pub mode: AnswerMode,
    /// Same value as `ai_feedback.score`.
    pub ai_score: f64,
    pub ai_feedback: Feedback,
    /// Present only for voice answers.
    #[serde(default)]
    pub voice_metrics: Option<VoiceMetrics>,
}

/// A scored interview session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Scorer that produced the feedback.
    pub scorer: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Scored answers in submission order.
    pub answers: Vec<ScoredAnswer>,
    /// Records without any answer text.
    pub skipped: usize,
    pub aggregate: AggregateStats,
}

impl SessionReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let agg = &self.aggregate;

        md.push_str("# Interview feedback\n\n");
        if let Some(role) = &self.role {
            md.push_str(&format!("**Role:** {role}  \n"));
        }
        if let Some(difficulty) = &self.difficulty {
            md.push_str(&format!("**Difficulty:** {difficulty}  \n"));
        }
        md.push_str(&format!(
            "**Overall score:** {}  \n",
            agg.overall_score
                .map(|s| format!("{s:.1}/10"))
                .unwrap_or_else(|| "n/a".into())
        ));
        if let Some(confidence) = agg.confidence_score {
            md.push_str(&format!("**Speaking confidence:** {confidence}/100  \n"));
        }
        md.push_str(&format!(
            "**Answered:** {} ({} skipped)\n\n",
            agg.answered, self.skipped
        ));

        if !self.answers.is_empty() {
            md.push_str("| # | Question | Score | Accuracy | Clarity | Structure | Confidence |\n");
            md.push_str("|---|----------|-------|----------|---------|-----------|------------|\n");
            for (i, a) in self.answers.iter().enumerate() {
                md.push_str(&format!(
                    "| {} | {} | {:.1} | {:.1} | {:.1} | {:.1} | {} |\n",
                    i + 1,
                    a.question.replace('|', "\\|"),
                    a.ai_score,
                    a.ai_feedback.technical_accuracy,
                    a.ai_feedback.clarity,
                    a.ai_feedback.structure,
                    a.voice_metrics
                        .map(|m| m.confidence_score.to_string())
                        .unwrap_or_else(|| "-".into()),
                ));
            }
            md.push('\n');
        }

        for (i, a) in self.answers.iter().enumerate() {
            md.push_str(&format!("## {}. {}\n\n", i + 1, a.question));
            push_list(&mut md, "Strengths", &a.ai_feedback.strengths);
            push_list(&mut md, "Weaknesses", &a.ai_feedback.weaknesses);
            push_list(&mut md, "Suggestions", &a.ai_feedback.suggestions);
            if let Some(m) = a.voice_metrics {
                md.push_str(&format!(
                    "Speaking: {} wpm, {} filler word(s), confidence {}/100\n\n",
                    m.words_per_minute, m.filler_word_count, m.confidence_score
                ));
            }
        }

        md
    }
}

fn push_list(md: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    md.push_str(&format!("**{title}**\n\n"));
    for item in items {
        md.push_str(&format!("- {item}\n"));
    }
    md.push('\n');
}
