//! Text normalization and counting helpers shared by the heuristics.

/// Lower-case and trim.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split on whitespace, discarding empty tokens.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of sentences: fragments between runs of `.`, `!` or `?`,
/// ignoring fragments that are blank.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Non-overlapping occurrences of `needle` in `haystack`.
///
/// This equals the number of pieces produced by splitting on the needle,
/// minus one. An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Remove trailing punctuation from a token, Unicode quotes and ellipses
/// included.
pub fn strip_trailing_punctuation(token: &str) -> &str {
    token.trim_end_matches(|c: char| !c.is_alphanumeric())
}

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_discard_empty_tokens() {
        assert_eq!(words("  a  b\t\nc "), vec!["a", "b", "c"]);
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn sentences_split_on_terminator_runs() {
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        assert_eq!(sentence_count("Wait... what?!"), 2);
        assert_eq!(sentence_count("no terminator"), 1);
        assert_eq!(sentence_count(""), 0);
        assert_eq!(sentence_count(" . ! ?"), 0);
    }

    #[test]
    fn occurrences_are_substring_based() {
        assert_eq!(count_occurrences("um, um and umbrella", "um"), 3);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("you know, you know", "you know"), 2);
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn trailing_punctuation_is_stripped() {
        assert_eq!(strip_trailing_punctuation("well,"), "well");
        assert_eq!(strip_trailing_punctuation("so...?"), "so");
        assert_eq!(strip_trailing_punctuation("(um"), "(um");
        assert_eq!(strip_trailing_punctuation("um\u{2026}"), "um");
        assert_eq!(strip_trailing_punctuation("so\u{201d}"), "so");
        assert_eq!(strip_trailing_punctuation("well\u{2019},"), "well");
        assert_eq!(strip_trailing_punctuation("?!"), "");
    }

    #[test]
    fn round1_behaviour() {
        assert_eq!(round1(7.549), 7.5);
        assert_eq!(round1(7.25), 7.3);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(10.0), 10.0);
    }
}
