//*** START FILE: src/input/vocab_db.rs ***//
// Reader for the Kindle `vocab.db` lookup store.

use rusqlite::types::Value;
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::errors::{Result, VocabError};
use crate::types::vocab_data::{BookLookups, LookupEntry};

const BOOKS_QUERY: &str = "SELECT id, title FROM BOOK_INFO ORDER BY rowid";

// One row per word key: the shortest usage wins, lowest rowid breaks ties.
const LOOKUPS_QUERY: &str = "
SELECT l1.word_key, l1.usage
FROM LOOKUPS l1
WHERE l1.book_key = ?1 AND NOT EXISTS (
    SELECT 1
    FROM LOOKUPS l2
    WHERE l2.book_key = l1.book_key
      AND l2.word_key = l1.word_key
      AND (
        length(COALESCE(l2.usage, '')) < length(COALESCE(l1.usage, ''))
        OR (length(COALESCE(l2.usage, '')) = length(COALESCE(l1.usage, '')) AND l2.rowid < l1.rowid)
      )
)
ORDER BY l1.rowid";

#[derive(Debug, Clone)]
pub struct BookInfo {
    /// Kept as a raw value; the device stores text ids but nothing relies on that.
    pub id: Value,
    pub title: String,
}

#[derive(Debug)]
pub struct VocabDb {
    conn: Connection,
}

impl VocabDb {
    /// Opens an existing store read-only. Never creates a file.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(VocabError::InputNotFound(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(VocabDb { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        VocabDb { conn }
    }

    pub fn books(&self) -> Result<Vec<BookInfo>> {
        let mut stmt = self.conn.prepare(BOOKS_QUERY)?;
        let rows = stmt.query_map([], |row| {
            Ok(BookInfo {
                id: row.get(0)?,
                title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
        })?;
        let mut books = Vec::new();
        for row in rows {
            books.push(row?);
        }
        Ok(books)
    }

    pub fn lookups_for(&self, book: &BookInfo) -> Result<Vec<LookupEntry>> {
        let mut stmt = self.conn.prepare(LOOKUPS_QUERY)?;
        let rows = stmt.query_map(params![book.id], |row| {
            Ok((row.get::<_, Option<String>>(0)?, row.get::<_, Option<String>>(1)?))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (word_key, usage) = row?;
            let Some(word_key) = word_key else {
                warn!(book = %book.title, "Skipping lookup without a word key");
                continue;
            };
            let word = match strip_namespace(&word_key) {
                Ok(word) => word,
                Err(e) => {
                    warn!(book = %book.title, "Skipping lookup: {}", e);
                    continue;
                }
            };
            if let Some((lang, _)) = word_key.split_once(':') {
                debug!(lang, word, "lookup key");
            }
            if let Some(entry) = LookupEntry::new(&book.title, word, usage.as_deref()) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Every book in the store with its de-duplicated lookups. Books without
    /// lookups are still returned.
    pub fn read_books(&self) -> Result<Vec<BookLookups>> {
        let books = self.books()?;
        info!("Found {} book(s) in vocabulary store", books.len());
        let mut out = Vec::with_capacity(books.len());
        for book in &books {
            let entries = self.lookups_for(book)?;
            debug!(title = %book.title, count = entries.len(), "read lookups");
            out.push(BookLookups { title: book.title.clone(), entries });
        }
        Ok(out)
    }
}

/// `"ja:犬"` -> `"犬"`. Everything after the first `:` is the word.
pub fn strip_namespace(word_key: &str) -> Result<&str> {
    word_key
        .split_once(':')
        .map(|(_, word)| word)
        .ok_or_else(|| VocabError::MalformedWordKey(word_key.to_string()))
}

//*** END FILE: src/input/vocab_db.rs ***//
