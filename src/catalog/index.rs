// src/catalog/index.rs
// =============================================================================
// Builds the word index: (course identifier, word) pairs.
//
// Course codes found on catalog pages ("CMSC 12100") are translated to stable
// identifiers through a course map loaded from JSON:
//
//   { "CMSC 12100": "CMSC12100", "MATH 15100": 2043 }
//
// A code that is missing from the map is a data error. It is reported to the
// caller instead of being skipped.
// =============================================================================

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::extract::CourseBlock;
use super::tokenize::is_stopword;
use crate::error::{IndexerError, Result};

// Identifiers may be written as JSON strings or numbers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCourseId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawCourseId> for String {
    fn from(raw: RawCourseId) -> Self {
        match raw {
            RawCourseId::Text(text) => text,
            RawCourseId::Number(number) => number.to_string(),
        }
    }
}

/// Read-only mapping from course code to course identifier.
#[derive(Debug, Default, Clone)]
pub struct CourseMap {
    ids: HashMap<String, String>,
}

impl CourseMap {
    // Loads a course map from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, RawCourseId> = serde_json::from_str(json)?;
        let ids = raw.into_iter().map(|(code, id)| (code, id.into())).collect();
        Ok(Self { ids })
    }

    pub fn lookup(&self, code: &str) -> Result<&str> {
        self.ids
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| IndexerError::KeyNotFound(code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// One row of the index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexEntry {
    pub course_id: String,
    pub word: String,
}

impl IndexEntry {
    pub fn new(course_id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            word: word.into(),
        }
    }
}

// Turns course blocks into deduplicated index entries
//
// Every code of a block is paired with every non-stopword word of that block.
// Codes are only looked up when the block has at least one word to index.
//
// Errors: KeyNotFound for the first code that has no identifier
pub fn index_pairs(
    course_map: &CourseMap,
    blocks: &[CourseBlock],
) -> Result<BTreeSet<IndexEntry>> {
    let mut entries = BTreeSet::new();

    for block in blocks {
        let kept: Vec<&String> = block.words().filter(|word| !is_stopword(word)).collect();
        if kept.is_empty() {
            continue;
        }

        for code in &block.codes {
            let course_id = course_map.lookup(code)?;
            for word in &kept {
                entries.insert(IndexEntry::new(course_id, word.as_str()));
            }
        }
    }

    Ok(entries)
}

// Writes the index as pipe-delimited rows, "course_id|word", no header
//
// An existing file at `path` is overwritten.
pub fn write_index<'a, I>(path: &Path, entries: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a IndexEntry>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let mut rows = 0;

    for entry in entries {
        writeln!(writer, "{}|{}", entry.course_id, entry.word)?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}
