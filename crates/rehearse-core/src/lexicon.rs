//! Word tables the text heuristics match against.
//!
//! A [`Lexicon`] is built once and handed to the scorer and the voice
//! estimator by value; nothing reads these tables from global state.

use serde::{Deserialize, Serialize};

/// Filler phrases counted as substrings in written answers.
pub const FILLER_PHRASES: &[&str] = &["um", "uh", "like", "you know", "basically", "actually"];

/// Words that signal an ordered or reasoned explanation.
pub const TRANSITION_WORDS: &[&str] = &[
    "first",
    "second",
    "then",
    "next",
    "finally",
    "however",
    "therefore",
    "because",
    "for example",
];

/// Markers that indicate a list.
pub const LIST_MARKERS: &[&str] = &["-", "\u{2022}", "1."];

/// Filler words matched token-by-token in spoken transcripts.
pub const SPOKEN_FILLERS: &[&str] = &[
    "um",
    "uh",
    "like",
    "you know",
    "basically",
    "actually",
    "literally",
    "so",
    "well",
];

/// Read-only word tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub filler_phrases: Vec<String>,
    pub transition_words: Vec<String>,
    pub list_markers: Vec<String>,
    pub spoken_fillers: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            filler_phrases: owned(FILLER_PHRASES),
            transition_words: owned(TRANSITION_WORDS),
            list_markers: owned(LIST_MARKERS),
            spoken_fillers: owned(SPOKEN_FILLERS),
        }
    }
}

impl Lexicon {
    /// Lower-case every entry and drop blanks.
    ///
    /// Matching runs against lower-cased text, so every table, list markers
    /// included, is lower-cased here.
    pub fn normalized(self) -> Self {
        let lower = |v: Vec<String>| -> Vec<String> {
            v.into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };
        Self {
            filler_phrases: lower(self.filler_phrases),
            transition_words: lower(self.transition_words),
            list_markers: lower(self.list_markers),
            spoken_fillers: lower(self.spoken_fillers),
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables() {
        let lex = Lexicon::default();
        assert_eq!(lex.filler_phrases.len(), 6);
        assert_eq!(lex.transition_words.len(), 9);
        assert_eq!(lex.spoken_fillers.len(), 9);
        assert!(lex.list_markers.iter().any(|m| m == "\u{2022}"));
    }

    #[test]
    fn normalized_lowercases_and_drops_blanks() {
        let lex = Lexicon {
            filler_phrases: vec!["Euh".into(), " ".into()],
            transition_words: vec!["Ensuite".into()],
            list_markers: vec!["*".into(), "".into(), "A)".into()],
            spoken_fillers: vec!["Bah".into()],
        }
        .normalized();
        assert_eq!(lex.filler_phrases, vec!["euh"]);
        assert_eq!(lex.transition_words, vec!["ensuite"]);
        assert_eq!(lex.list_markers, vec!["*", "a)"]);
        assert_eq!(lex.spoken_fillers, vec!["bah"]);
    }

    #[test]
    fn default_tables_are_already_normalized() {
        assert_eq!(Lexicon::default().normalized(), Lexicon::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let lex: Lexicon = toml::from_str("filler_phrases = [\"hmm\"]").unwrap();
        assert_eq!(lex.filler_phrases, vec!["hmm"]);
        assert_eq!(lex.transition_words.len(), 9);
    }
}
