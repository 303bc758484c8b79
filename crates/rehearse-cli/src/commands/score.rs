//! The `rehearse score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use rehearse_core::bank::load_banks;
use rehearse_core::config::load_config_from;
use rehearse_core::model::{Feedback, RawAnswer, Rubric, VoiceMetrics};
use rehearse_core::traits::Scorer;

pub struct ScoreArgs {
    pub bank: Option<PathBuf>,
    pub question: Option<String>,
    pub keywords: Option<String>,
    pub ideal_length: u32,
    pub answer: Option<String>,
    pub answer_file: Option<PathBuf>,
    pub voice: bool,
    pub format: String,
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    rubric: &'a Rubric,
    feedback: &'a Feedback,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_metrics: Option<VoiceMetrics>,
}

pub fn execute(args: ScoreArgs) -> Result<()> {
    anyhow::ensure!(
        matches!(args.format.as_str(), "text" | "json"),
        "unknown format '{}' (expected text or json)",
        args.format
    );

    let config = load_config_from(args.config.as_deref())?;

    let rubric = resolve_rubric(&args)?;

    let answer: RawAnswer = match (&args.answer, &args.answer_file) {
        (Some(text), _) => text.as_str().into(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answer file: {}", path.display()))?
            .into(),
        (None, None) => anyhow::bail!("provide an answer with --answer or --answer-file"),
    };

    let feedback = config.scorer().score(&answer.text, &rubric);
    let voice_metrics = args
        .voice
        .then(|| config.voice_estimator().estimate(Some(answer.text.as_str()), feedback.clarity));

    if args.format == "json" {
        let output = ScoreOutput {
            rubric: &rubric,
            feedback: &feedback,
            voice_metrics,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_feedback(&feedback, voice_metrics.as_ref());
    }

    Ok(())
}

fn resolve_rubric(args: &ScoreArgs) -> Result<Rubric> {
    if let Some(bank_path) = &args.bank {
        let bank = load_banks(bank_path)?;
        let question = args
            .question
            .as_deref()
            .context("--question is required with --bank")?;
        let rubric = bank.rubric_for(question).cloned().with_context(|| {
            format!(
                "question not found in {}: '{}'",
                bank_path.display(),
                question
            )
        })?;
        return Ok(rubric);
    }

    if let Some(keywords) = &args.keywords {
        let rubric = Rubric::try_new(
            keywords.split(',').map(str::trim).filter(|k| !k.is_empty()),
            args.ideal_length,
        )?;
        return Ok(rubric);
    }

    anyhow::bail!("provide a rubric with --bank and --question, or with --keywords")
}

fn print_feedback(feedback: &Feedback, voice: Option<&VoiceMetrics>) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Score", "Accuracy", "Clarity", "Structure"]);
    table.add_row(vec![
        Cell::new(format!("{:.1}", feedback.score)),
        Cell::new(format!("{:.1}", feedback.technical_accuracy)),
        Cell::new(format!("{:.1}", feedback.clarity)),
        Cell::new(format!("{:.1}", feedback.structure)),
    ]);
    println!("{table}");

    print_section("Strengths", &feedback.strengths);
    print_section("Weaknesses", &feedback.weaknesses);
    print_section("Suggestions", &feedback.suggestions);

    if let Some(m) = voice {
        println!(
            "\nVoice: confidence {}/100, {} wpm, {} filler word(s)",
            m.confidence_score, m.words_per_minute, m.filler_word_count
        );
    }
}

fn print_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}:");
    for item in items {
        println!("  - {item}");
    }
}
