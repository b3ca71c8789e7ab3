//*** START FILE: src/input/word_list.rs ***//
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::errors::Result;
use crate::types::vocab_data::{BookLookups, LookupEntry};

/// Reads a comma separated word list into a single book titled `title`.
/// Rows may have any number of fields; blank fields are dropped.
pub fn read_word_list(path: &Path, title: &str) -> Result<BookLookups> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let book = collect_words(reader, title)?;
    info!("Read {} word(s) from {}", book.entries.len(), path.display());
    Ok(book)
}

pub fn read_word_list_from<R: Read>(source: R, title: &str) -> Result<BookLookups> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);
    collect_words(reader, title)
}

fn collect_words<R: Read>(mut reader: csv::Reader<R>, title: &str) -> Result<BookLookups> {
    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        entries.extend(
            record
                .iter()
                .filter_map(|token| LookupEntry::new(title, token, None)),
        );
    }
    Ok(BookLookups { title: title.to_string(), entries })
}

//*** END FILE: src/input/word_list.rs ***//
