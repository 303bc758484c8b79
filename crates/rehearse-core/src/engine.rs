//! Session evaluation.
//!
//! Scores every answered record of an interview, adds voice metrics for
//! spoken answers and aggregates the results into a [`SessionReport`].

use uuid::Uuid;

use crate::model::{AnswerMode, AnswerRecord, QuestionBank, Rubric};
use crate::report::{InterviewSubmission, ScoredAnswer, SessionReport};
use crate::statistics::compute_aggregate_stats;
use crate::traits::Scorer;
use crate::voice::VoiceConfidenceEstimator;

/// Progress reporting trait.
pub trait ProgressReporter {
    fn on_answer_scored(&self, index: usize, answer: &ScoredAnswer);
    fn on_answer_skipped(&self, index: usize, record: &AnswerRecord);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_answer_scored(&self, _: usize, _: &ScoredAnswer) {}
    fn on_answer_skipped(&self, _: usize, _: &AnswerRecord) {}
}

/// Turns interview submissions into scored session reports.
pub struct SessionEvaluator {
    scorer: Box<dyn Scorer>,
    voice: VoiceConfidenceEstimator,
}

impl SessionEvaluator {
    pub fn new(scorer: Box<dyn Scorer>, voice: VoiceConfidenceEstimator) -> Self {
        Self { scorer, voice }
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    /// Score one answer. Voice metrics are added only for spoken answers.
    pub fn evaluate_answer(&self, record: &AnswerRecord, rubric: &Rubric) -> ScoredAnswer {
        let feedback = self.scorer.score(record.effective_text(), rubric);
        let mode = record.mode();
        let voice_metrics = match mode {
            AnswerMode::Voice => Some(
                self.voice
                    .estimate(record.transcript.as_deref(), feedback.clarity),
            ),
            AnswerMode::Text => None,
        };

        ScoredAnswer {
            question_id: record.question_id.clone(),
            question: record.question.clone(),
            mode,
            ai_score: feedback.score,
            ai_feedback: feedback,
            voice_metrics,
        }
    }

    /// Evaluate a whole interview.
    ///
    /// Rubrics are looked up in `bank` by question text. Answers whose
    /// question has no rubric are scored against [`Rubric::fallback`].
    pub fn evaluate(
        &self,
        submission: &InterviewSubmission,
        bank: Option<&QuestionBank>,
        progress: &dyn ProgressReporter,
    ) -> SessionReport {
        let fallback = Rubric::fallback();
        let mut answers = Vec::new();
        let mut skipped = 0usize;

        for (index, record) in submission.answers.iter().enumerate() {
            if !record.is_answered() {
                progress.on_answer_skipped(index, record);
                skipped += 1;
                continue;
            }

            let rubric = match bank.and_then(|b| b.rubric_for(&record.question)) {
                Some(rubric) => rubric,
                None => {
                    tracing::warn!(
                        "no rubric for question '{}', using fallback rubric",
                        record.question
                    );
                    &fallback
                }
            };

            let scored = self.evaluate_answer(record, rubric);
            progress.on_answer_scored(index, &scored);
            answers.push(scored);
        }

        let aggregate = compute_aggregate_stats(&answers);
        tracing::info!(
            answered = aggregate.answered,
            skipped,
            overall = ?aggregate.overall_score,
            confidence = ?aggregate.confidence_score,
            "evaluated interview session"
        );

        SessionReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            scorer: self.scorer.name().to_string(),
            role: submission.role.clone(),
            difficulty: submission.difficulty,
            answers,
            skipped,
            aggregate,
        }
    }
}
