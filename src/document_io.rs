//*** START FILE: src/document_io.rs ***//
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::errors::{Result, VocabError};
use crate::types::vocab_data::Document;

/// Serializes the document as pretty JSON with a 4-space indent.
pub fn to_pretty_json(document: &Document) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| {
        VocabError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Writes the whole document in one go, replacing whatever is at `file_path`.
pub fn save_document(document: &Document, file_path: &Path) -> Result<()> {
    let json = to_pretty_json(document)?;
    fs::write(file_path, json)?;
    Ok(())
}

/// Loads a document previously written by [`save_document`].
pub fn load_document(file_path: &Path) -> Result<Document> {
    if !file_path.exists() {
        return Err(VocabError::InputNotFound(file_path.to_path_buf()));
    }
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

//*** END FILE: src/document_io.rs ***//
