//! The `rehearse session` command.

use std::path::PathBuf;

use anyhow::Result;

use rehearse_core::bank::load_banks;
use rehearse_core::config::load_config_from;
use rehearse_core::engine::ProgressReporter;
use rehearse_core::model::AnswerRecord;
use rehearse_core::report::{load_submission, ScoredAnswer, SessionReport};

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_answer_scored(&self, index: usize, answer: &ScoredAnswer) {
        let voice_info = match &answer.voice_metrics {
            Some(m) => format!(" confidence {}", m.confidence_score),
            None => String::new(),
        };
        eprintln!(
            "  Scored #{} [{}] {:.1}/10{}",
            index + 1,
            answer.mode,
            answer.ai_score,
            voice_info
        );
    }

    fn on_answer_skipped(&self, index: usize, record: &AnswerRecord) {
        eprintln!("  Skipped #{}: no answer for '{}'", index + 1, record.question);
    }
}

pub fn execute(
    submission_path: PathBuf,
    bank_path: Option<PathBuf>,
    output: PathBuf,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown"]
    } else {
        format.split(',').map(str::trim).collect()
    };
    for fmt in &formats {
        anyhow::ensure!(
            matches!(*fmt, "json" | "markdown" | "md"),
            "unknown format '{fmt}' (expected json, markdown or all)"
        );
    }

    let config = load_config_from(config_path.as_deref())?;
    let submission = load_submission(&submission_path)?;
    let bank = bank_path.as_deref().map(load_banks).transpose()?;
    if let Some(bank) = &bank {
        tracing::debug!(bank = %bank.id, questions = bank.questions.len(), "loaded question bank");
    }

    eprintln!(
        "rehearse v{}: scoring {} answer(s)",
        env!("CARGO_PKG_VERSION"),
        submission.answers.len()
    );
    eprintln!();

    let evaluator = config.evaluator();
    let report = evaluator.evaluate(&submission, bank.as_ref(), &ConsoleReporter);

    print_summary(&report);

    std::fs::create_dir_all(&output)?;
    let stem = format!(
        "session-{}-{}",
        report.created_at.format("%Y-%m-%dT%H%M%S"),
        report.id.simple()
    );

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("{stem}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            _ => {
                let path = output.join(format!("{stem}.md"));
                std::fs::write(&path, report.to_markdown())?;
                eprintln!("Markdown report: {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_summary(report: &SessionReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "#",
        "Question",
        "Mode",
        "Score",
        "Accuracy",
        "Clarity",
        "Structure",
        "Confidence",
    ]);

    for (i, a) in report.answers.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&a.question),
            Cell::new(a.mode),
            Cell::new(format!("{:.1}", a.ai_score)),
            Cell::new(format!("{:.1}", a.ai_feedback.technical_accuracy)),
            Cell::new(format!("{:.1}", a.ai_feedback.clarity)),
            Cell::new(format!("{:.1}", a.ai_feedback.structure)),
            Cell::new(
                a.voice_metrics
                    .map(|m| m.confidence_score.to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
        ]);
    }

    println!("{table}");

    let agg = &report.aggregate;
    match agg.overall_score {
        Some(score) => println!("Overall score: {score:.1}/10"),
        None => println!("Overall score: n/a (no answered questions)"),
    }
    if let Some(confidence) = agg.confidence_score {
        println!("Speaking confidence: {confidence}/100");
    }
    println!("Answered: {} (skipped {})", agg.answered, report.skipped);
}
