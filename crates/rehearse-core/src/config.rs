//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::SessionEvaluator;
use crate::lexicon::Lexicon;
use crate::scorer::RuleBasedScorer;
use crate::selection::QuestionSelector;
use crate::voice::{VoiceConfidenceEstimator, VoiceSettings};

/// Question selection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// Fixed seed for reproducible selection; random when unset.
    pub seed: Option<u64>,
}

/// Top-level rehearse configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RehearseConfig {
    /// Word tables used by the scorer and the voice estimator.
    pub lexicon: Lexicon,
    pub voice: VoiceSettings,
    pub selection: SelectionSettings,
}

impl RehearseConfig {
    pub fn scorer(&self) -> RuleBasedScorer {
        RuleBasedScorer::new(self.lexicon.clone())
    }

    pub fn voice_estimator(&self) -> VoiceConfidenceEstimator {
        VoiceConfidenceEstimator::new(self.lexicon.clone(), self.voice.clone())
    }

    /// Session evaluator wired with the rule-based scorer.
    pub fn evaluator(&self) -> SessionEvaluator {
        SessionEvaluator::new(Box::new(self.scorer()), self.voice_estimator())
    }

    /// Selector honoring `selection.seed`; an explicit seed wins.
    pub fn selector(&self, seed_override: Option<u64>) -> QuestionSelector {
        match seed_override.or(self.selection.seed) {
            Some(seed) => QuestionSelector::seeded(seed),
            None => QuestionSelector::from_entropy(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `rehearse.toml` in the current directory
/// 2. `~/.config/rehearse/config.toml`
///
/// Environment variable override: `REHEARSE_SEED`.
pub fn load_config() -> Result<RehearseConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<RehearseConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("rehearse.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => RehearseConfig::default(),
    };

    if let Ok(seed) = std::env::var("REHEARSE_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("REHEARSE_SEED is not a valid u64: '{seed}'"))?;
        config.selection.seed = Some(seed);
    }

    Ok(config)
}

/// Parse a TOML config string, normalizing the lexicon.
pub fn parse_config_str(content: &str) -> Result<RehearseConfig> {
    let mut config: RehearseConfig = toml::from_str(content)?;
    config.lexicon = config.lexicon.normalized();
    anyhow::ensure!(
        config.voice.assumed_answer_secs > 0,
        "voice.assumed_answer_secs must be at least 1"
    );
    anyhow::ensure!(
        config.voice.default_confidence <= 100,
        "voice.default_confidence must be between 0 and 100"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("rehearse"))
}
