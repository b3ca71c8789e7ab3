//*** START FILE: src/lib.rs ***//

pub mod config;
pub mod errors;
pub mod types {
    pub mod vocab_data;
}
pub mod input;
pub mod enrichment;
pub mod document_io;
pub mod exporter;

pub use config::Config;
pub use errors::{Result, VocabError};
pub use types::vocab_data::{BookGroup, BookLookups, Document, LookupEntry, WordRecord};

//*** END FILE: src/lib.rs ***//
