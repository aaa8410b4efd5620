// src/catalog/mod.rs
// =============================================================================
// This module turns catalog pages into index entries.
//
// Submodules:
// - extract: finds course blocks and parses their codes and words
// - tokenize: word splitting and the stopword list
// - index: course map lookup, (course id, word) pairs and the index file
// =============================================================================

mod extract;
mod index;
mod tokenize;

pub use extract::extract;
pub use index::{index_pairs, write_index, CourseMap, IndexEntry};
