// src/catalog/extract.rs
// =============================================================================
// Course block extraction from catalog pages.
//
// Catalog pages mark each entry up like this:
//
//   <div class="courseblock main">
//     <p class="courseblocktitle">CMSC 12100-12200. Computer Science. 100 Units.</p>
//     <p class="courseblockdesc">An introduction to ...</p>
//   </div>
//
// Sequences add "courseblock subsequence" divs with the same layout, one per
// member course. Both kinds are extracted the same way.
//
// The title is split on periods. The first segment is the header holding the
// department and one or more course numbers; everything after it is the
// human-readable title. A header can declare several codes, so the words of a
// block belong to every code it declares.
// =============================================================================

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::debug;

use super::tokenize::words;

static MAIN_BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.courseblock.main").expect("main block selector is valid")
});

static SUBSEQUENCE_BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.courseblock.subsequence").expect("subsequence block selector is valid")
});

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.courseblocktitle").expect("title selector is valid"));

static DESC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.courseblockdesc").expect("desc selector is valid"));

static HEADER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("header token pattern is valid"));

/// One catalog entry, possibly registered under several course codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseBlock {
    /// "DEPT NUMBER" codes in header order, without duplicates
    pub codes: Vec<String>,
    pub title_words: BTreeSet<String>,
    pub desc_words: BTreeSet<String>,
}

impl CourseBlock {
    /// Title and description words together. Every code maps to all of them.
    pub fn words(&self) -> impl Iterator<Item = &String> {
        self.title_words.union(&self.desc_words)
    }
}

// Extracts every course block on a page
//
// All main blocks come first, then all subsequence blocks, each group in page
// order. Blocks whose titles yield no course code are dropped, along with any
// description words they had.
pub fn extract(document: &Html) -> Vec<CourseBlock> {
    document
        .select(&MAIN_BLOCK_SELECTOR)
        .chain(document.select(&SUBSEQUENCE_BLOCK_SELECTOR))
        .filter_map(|element| {
            let block = parse_block(element);
            if block.codes.is_empty() {
                debug!("Dropping course block without a course code");
                return None;
            }
            Some(block)
        })
        .collect()
}

fn parse_block(element: ElementRef) -> CourseBlock {
    let mut codes = Vec::new();
    let mut title_words = BTreeSet::new();

    for title in element.select(&TITLE_SELECTOR) {
        let text: String = title.text().collect();
        let (header_codes, header_words) = parse_title(&text);
        for code in header_codes {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        title_words.extend(header_words);
    }

    let desc_words = element
        .select(&DESC_SELECTOR)
        .flat_map(|desc| words(&desc.text().collect::<String>()))
        .collect();

    CourseBlock {
        codes,
        title_words,
        desc_words,
    }
}

// Parses a course title into its codes and its words
//
// Example:
//   "CMSC 12100-12200. Computer Science."
//   -> codes ["CMSC 12100", "CMSC 12200"], words [cmsc, computer, science]
pub fn parse_title(text: &str) -> (Vec<String>, Vec<String>) {
    let segments = split_segments(text);
    let Some((header, rest)) = segments.split_first() else {
        return (Vec::new(), Vec::new());
    };

    let codes = parse_codes(header);

    let mut title_words = words(header);
    title_words.extend(words(&rest.join(" ")));

    (codes, title_words)
}

// Splits a title on periods after trimming surrounding periods and spaces
//
// A period between two digits ("121.213") joins course numbers and does not
// start a new segment.
fn split_segments(text: &str) -> Vec<&str> {
    let trimmed = text.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        return Vec::new();
    }

    let bytes = trimmed.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;

    for (idx, &byte) in bytes.iter().enumerate() {
        if byte != b'.' {
            continue;
        }
        let joins_digits = idx > 0
            && bytes[idx - 1].is_ascii_digit()
            && bytes.get(idx + 1).is_some_and(|b| b.is_ascii_digit());
        if !joins_digits {
            segments.push(&trimmed[start..idx]);
            start = idx + 1;
        }
    }
    segments.push(&trimmed[start..]);

    segments
}

// Turns a header like "CMSC 12100-12200" into course codes
//
// The first token is the department and the rest are course numbers. A
// number shorter than the first one is a section suffix ("121-1") and is
// skipped.
fn parse_codes(header: &str) -> Vec<String> {
    let mut tokens = HEADER_TOKEN.find_iter(header).map(|m| m.as_str());
    let Some(department) = tokens.next() else {
        return Vec::new();
    };

    let numbers: Vec<&str> = tokens.collect();
    let Some(primary_len) = numbers.first().map(|n| n.chars().count()) else {
        return Vec::new();
    };

    let mut codes: Vec<String> = Vec::new();
    for number in numbers {
        if number.chars().count() < primary_len {
            continue;
        }
        let code = format!("{} {}", department, number);
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A static that is built the first time it is used
//    - Selectors and regexes are compiled once per process, not per page
//
// 2. Why BTreeSet for the word sets?
//    - Duplicate words collapse automatically
//    - Iteration order is sorted, so output and tests are predictable
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_code_with_section_suffix() {
        let (codes, words) = parse_title("CMSC 121-1. Intro to CS.");
        assert_eq!(codes, vec!["CMSC 121"]);
        assert_eq!(words, vec!["cmsc", "intro", "to", "cs"]);
    }

    #[test]
    fn test_period_separated_codes() {
        let (codes, _) = parse_title("CMSC 121.213-2. Intro.");
        assert_eq!(codes, vec!["CMSC 121", "CMSC 213"]);
    }

    #[test]
    fn test_sequence_header() {
        let (codes, words) =
            parse_title("CMSC 12100-12200-12300. Computer Science with Applications I-II-III. 100 Units.");
        assert_eq!(codes, vec!["CMSC 12100", "CMSC 12200", "CMSC 12300"]);
        assert!(words.contains(&"applications".to_string()));
        assert!(words.contains(&"units".to_string()));
    }

    #[test]
    fn test_non_breaking_space_in_header() {
        let (codes, _) = parse_title("MATH\u{a0}15100. Calculus I.");
        assert_eq!(codes, vec!["MATH 15100"]);
    }

    #[test]
    fn test_title_without_numbers_has_no_codes() {
        let (codes, words) = parse_title("Introduction. Overview.");
        assert!(codes.is_empty());
        assert_eq!(words, vec!["introduction", "overview"]);
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(parse_title(" . "), (Vec::new(), Vec::new()));
    }

    #[test]
    fn test_extract_main_block() {
        let html = r#"
            <div class="courseblock main">
              <p class="courseblocktitle">CMSC 101. Intro. 100 Units.</p>
              <p class="courseblockdesc">Desc text about graphs.</p>
            </div>
        "#;
        let blocks = extract(&Html::parse_document(html));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].codes, vec!["CMSC 101"]);
        assert_eq!(blocks[0].title_words, set(&["cmsc", "intro", "units"]));
        assert_eq!(blocks[0].desc_words, set(&["desc", "text", "about", "graphs"]));
    }

    #[test]
    fn test_subsequence_blocks_are_included() {
        let html = r#"
            <div class="courseblock main">
              <p class="courseblocktitle">CMSC 15100-15200. Intro to Computer Science I-II.</p>
              <p class="courseblockdesc">A sequence on programming.</p>
            </div>
            <div class="courseblock subsequence">
              <p class="courseblocktitle">CMSC 15100. Intro to Computer Science I.</p>
              <p class="courseblockdesc">Functional programming.</p>
            </div>
            <div class="courseblock other">
              <p class="courseblocktitle">CMSC 99999. Ignored.</p>
            </div>
        "#;
        let blocks = extract(&Html::parse_document(html));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].codes, vec!["CMSC 15100", "CMSC 15200"]);
        assert_eq!(blocks[1].codes, vec!["CMSC 15100"]);
    }

    #[test]
    fn test_main_blocks_come_before_subsequence_blocks() {
        let html = r#"
            <div class="courseblock subsequence">
              <p class="courseblocktitle">CMSC 15200. Intro to Computer Science II.</p>
            </div>
            <div class="courseblock main">
              <p class="courseblocktitle">CMSC 15100. Intro to Computer Science I.</p>
            </div>
            <div class="courseblock subsequence">
              <p class="courseblocktitle">CMSC 15300. Foundations.</p>
            </div>
        "#;
        let blocks = extract(&Html::parse_document(html));
        let codes: Vec<&str> = blocks.iter().map(|b| b.codes[0].as_str()).collect();
        assert_eq!(codes, vec!["CMSC 15100", "CMSC 15200", "CMSC 15300"]);
    }

    #[test]
    fn test_cross_listed_subsequence_shares_words_with_main() {
        let block_body = r#"
              <p class="courseblocktitle">CMSC 27100. Discrete Mathematics.</p>
              <p class="courseblockdesc">Logic and proofs.</p>
        "#;
        let html = format!(
            r#"<div class="courseblock main">{}</div>
               <div class="courseblock subsequence">{}</div>"#,
            block_body, block_body
        );
        let blocks = extract(&Html::parse_document(&html));
        assert_eq!(blocks.len(), 2);

        let main_words: BTreeSet<&String> = blocks[0].words().collect();
        let sub_words: BTreeSet<&String> = blocks[1].words().collect();
        assert_eq!(main_words, sub_words);
    }

    #[test]
    fn test_block_without_title_is_dropped() {
        let html = r#"
            <div class="courseblock main">
              <p class="courseblockdesc">Orphan description.</p>
            </div>
            <div class="courseblock main">
              <p class="courseblocktitle">CMSC 101. Intro.</p>
            </div>
        "#;
        let blocks = extract(&Html::parse_document(html));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].codes, vec!["CMSC 101"]);
        assert!(blocks[0].desc_words.is_empty());
    }

    #[test]
    fn test_words_union_title_and_description() {
        let block = CourseBlock {
            codes: vec!["CMSC 101".to_string()],
            title_words: set(&["intro", "data"]),
            desc_words: set(&["data", "graphs"]),
        };
        let words: Vec<&String> = block.words().collect();
        assert_eq!(words, vec!["data", "graphs", "intro"]);
    }

    #[test]
    fn test_page_without_blocks() {
        let blocks = extract(&Html::parse_document("<html><body><p>Nothing</p></body></html>"));
        assert!(blocks.is_empty());
    }
}
