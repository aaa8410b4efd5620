// src/catalog/tokenize.rs
// =============================================================================
// Word tokenization for course titles and descriptions.
//
// A word starts with an ASCII letter and runs on through any word characters,
// so "CS101" is one word and "2024" is none. Everything is lower-cased.
//
// The stopword list holds articles, conjunctions and catalog boilerplate
// ("course", "units", "students") that would otherwise match every course.
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\w*").expect("word pattern is valid"));

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "also", "an", "and", "are", "as", "at", "be", "but", "by", "course", "for", "from",
        "how", "i", "ii", "iii", "in", "include", "is", "not", "of", "on", "or", "s", "sequence",
        "so", "social", "students", "such", "that", "the", "their", "this", "through", "to",
        "topics", "units", "we", "were", "which", "will", "with", "yet",
    ]
    .into_iter()
    .collect()
});

/// Splits text into lower-cased words, in order, duplicates kept.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True if `word` is never indexed. Case-insensitive.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_are_lowercased() {
        assert_eq!(words("Intro to CS"), vec!["intro", "to", "cs"]);
    }

    #[test]
    fn test_words_must_start_with_a_letter() {
        assert_eq!(
            words("CMSC 12100, 100 units; part2 of 3"),
            vec!["cmsc", "units", "part2", "of"]
        );
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(
            words("data-structures (C/C++)."),
            vec!["data", "structures", "c", "c"]
        );
    }

    #[test]
    fn test_stopwords_are_case_insensitive() {
        assert!(is_stopword("the"));
        assert!(is_stopword("The"));
        assert!(is_stopword("UNITS"));
        assert!(!is_stopword("algorithms"));
    }

    #[test]
    fn test_stopword_filtering_of_description() {
        let kept: HashSet<String> = words("This course is an introduction to data structures")
            .into_iter()
            .filter(|w| !is_stopword(w))
            .collect();
        let expected: HashSet<String> = ["introduction", "data", "structures"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(kept, expected);
    }
}
