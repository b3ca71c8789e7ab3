//*** START FILE: src/input/mod.rs ***//
pub mod vocab_db;
pub mod word_list;

use std::path::Path;

use crate::errors::{Result, VocabError};
use crate::types::vocab_data::BookLookups;

pub use vocab_db::{strip_namespace, VocabDb};
pub use word_list::read_word_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    VocabDb,
    WordList,
}

impl InputKind {
    /// A `.db` file is a Kindle vocabulary store; anything else is a word list.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("db") => InputKind::VocabDb,
            _ => InputKind::WordList,
        }
    }
}

/// Reads every book from `path`, picking the reader from the file name.
pub fn read_books(path: &Path, default_title: &str) -> Result<Vec<BookLookups>> {
    if !path.exists() {
        return Err(VocabError::InputNotFound(path.to_path_buf()));
    }
    match InputKind::detect(path) {
        InputKind::VocabDb => VocabDb::open(path)?.read_books(),
        InputKind::WordList => Ok(vec![read_word_list(path, default_title)?]),
    }
}

//*** END FILE: src/input/mod.rs ***//
