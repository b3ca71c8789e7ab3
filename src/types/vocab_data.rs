//*** START FILE: src/types/vocab_data.rs ***//
use serde::{Deserialize, Serialize};

/// One word lookup pulled from the input, waiting to be enriched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub book_title: String,
    pub word: String,
    pub context: Option<String>,
}

impl LookupEntry {
    /// Returns `None` for blank words. Blank contexts become `None`.
    pub fn new(book_title: &str, word: &str, context: Option<&str>) -> Option<Self> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        let context = context
            .filter(|c| !c.trim().is_empty())
            .map(String::from);
        Some(LookupEntry {
            book_title: book_title.to_string(),
            word: word.to_string(),
            context,
        })
    }
}

/// All lookups of a single book, in the order they were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookLookups {
    pub title: String,
    pub entries: Vec<LookupEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub definition: String,
    pub reading: String,
    pub part_of_speech: String,
    pub sample: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BookGroup {
    pub title: String,
    pub words: Vec<WordRecord>,
}

impl BookGroup {
    pub fn new(title: &str) -> Self {
        BookGroup { title: title.to_string(), words: Vec::new() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub books: Vec<BookGroup>,
}

impl Document {
    pub fn word_count(&self) -> usize {
        self.books.iter().map(|b| b.words.len()).sum()
    }
}

//*** END FILE: src/types/vocab_data.rs ***//
