//! The `rehearse pick` command.

use std::path::PathBuf;

use anyhow::Result;

use rehearse_core::bank::load_banks;
use rehearse_core::config::load_config_from;
use rehearse_core::model::Difficulty;
use rehearse_core::selection::SelectionFilter;

pub fn execute(
    bank_path: PathBuf,
    role: Option<String>,
    difficulty: Option<String>,
    count: usize,
    seed: Option<u64>,
    exclude: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = load_banks(&bank_path)?;

    let difficulty = difficulty
        .as_deref()
        .map(|d| d.parse::<Difficulty>().map_err(anyhow::Error::msg))
        .transpose()?;

    let filter = SelectionFilter {
        role,
        difficulty,
        exclude_ids: exclude
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect(),
    };

    let picked = config.selector(seed).select(&bank, &filter, count);
    if picked.is_empty() {
        anyhow::bail!("no questions in '{}' match the given filters", bank.name);
    }
    if picked.len() < count {
        eprintln!(
            "Only {} matching question(s) available (asked for {count})",
            picked.len()
        );
    }

    for (i, q) in picked.iter().enumerate() {
        println!("{}. [{}] {} ({}, {})", i + 1, q.id, q.text, q.role, q.difficulty);
    }

    Ok(())
}
