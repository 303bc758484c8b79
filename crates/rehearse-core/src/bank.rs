//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::RubricError;
use crate::model::{Difficulty, Question, QuestionBank, Rubric};

/// Intermediate TOML structure for parsing question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    default_role: Option<String>,
    #[serde(default = "default_ideal_length")]
    default_ideal_length: u32,
}

fn default_ideal_length() -> u32 {
    80
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    #[serde(default)]
    role: Option<String>,
    difficulty: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    expected_keywords: Vec<String>,
    #[serde(default)]
    ideal_length: Option<u32>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank`.
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let header = parsed.bank;
    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let difficulty: Difficulty = q
                .difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))?;

            let role = q
                .role
                .or_else(|| header.default_role.clone())
                .ok_or_else(|| anyhow::anyhow!("question '{}' has no role", q.id))?;

            let ideal = q.ideal_length.unwrap_or(header.default_ideal_length);
            if ideal == 0 {
                return Err(anyhow::Error::new(RubricError::ZeroIdealLength)
                    .context(format!("question '{}'", q.id)));
            }
            let rubric = Rubric::new(q.expected_keywords, ideal);

            Ok(Question {
                id: q.id,
                text: q.text,
                role: role.to_lowercase(),
                difficulty,
                category: q.category,
                tags: q.tags,
                rubric,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank {
        id: header.id,
        name: header.name,
        description: header.description,
        questions,
    })
}

/// Recursively load all `.toml` question banks from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// Load a bank from a file, or merge every bank found in a directory.
pub fn load_banks(path: &Path) -> Result<QuestionBank> {
    if path.is_dir() {
        let banks = load_bank_directory(path)?;
        anyhow::ensure!(
            !banks.is_empty(),
            "no question banks found in {}",
            path.display()
        );
        Ok(merge_banks(banks))
    } else {
        parse_bank(path)
    }
}

/// Merge several banks into one, keeping the first question for any id.
pub fn merge_banks(banks: Vec<QuestionBank>) -> QuestionBank {
    let mut seen = HashSet::new();
    let mut questions = Vec::new();
    let mut ids = Vec::new();

    for bank in banks {
        ids.push(bank.id);
        for q in bank.questions {
            if seen.insert(q.id.clone()) {
                questions.push(q);
            } else {
                tracing::warn!("duplicate question id '{}' dropped while merging", q.id);
            }
        }
    }

    QuestionBank {
        id: ids.join("+"),
        name: "Merged question bank".into(),
        description: String::new(),
        questions,
    }
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    let mut seen_text = HashSet::new();
    for q in &bank.questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
        // Rubrics are keyed by text, so a repeat shadows the later rubric
        if !seen_text.insert(q.text.trim()) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "duplicate question text; only the first rubric is reachable".into(),
            });
        }
    }

    for q in &bank.questions {
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "question text is empty".into(),
            });
        }
        if q.rubric.expected_keywords.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "no expected_keywords; keyword coverage will always be 0".into(),
            });
        }
        if q.rubric.ideal_answer_length == 0 {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "ideal_length is 0; it is scored as a one-word ideal".into(),
            });
        }
    }

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "bank has no questions".into(),
        });
    }

    warnings
}
