//*** START FILE: src/exporter.rs ***//
use reqwest::blocking::Client;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::document_io::save_document;
use crate::enrichment::{
    DictionarySource, EnrichSettings, Enricher, JishoClient, SentenceSource, TatoebaClient,
};
use crate::errors::Result;
use crate::input;
use crate::types::vocab_data::{BookGroup, BookLookups, Document};

/// Word counts for one book, used to point out records that need a manual fix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSummary {
    pub title: String,
    pub words: usize,
    pub missing_definitions: usize,
    pub missing_samples: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub books: Vec<BookSummary>,
}

impl ExportSummary {
    pub fn of(document: &Document, no_definition: &str) -> Self {
        let books = document
            .books
            .iter()
            .map(|book| BookSummary {
                title: book.title.clone(),
                words: book.words.len(),
                missing_definitions: book
                    .words
                    .iter()
                    .filter(|w| w.definition == no_definition)
                    .count(),
                missing_samples: book.words.iter().filter(|w| w.sample.is_empty()).count(),
            })
            .collect();
        ExportSummary { books }
    }

    pub fn total_words(&self) -> usize {
        self.books.iter().map(|b| b.words).sum()
    }

    pub fn total_missing_definitions(&self) -> usize {
        self.books.iter().map(|b| b.missing_definitions).sum()
    }

    pub fn total_missing_samples(&self) -> usize {
        self.books.iter().map(|b| b.missing_samples).sum()
    }
}

/// Enriches every lookup, keeping book order and lookup order.
pub fn build_document<D, S>(books: Vec<BookLookups>, enricher: &Enricher<D, S>) -> Document
where
    D: DictionarySource,
    S: SentenceSource,
{
    let mut document = Document::default();
    for book in books {
        info!("--- Processing book: {} ({} word(s)) ---", book.title, book.entries.len());
        let mut group = BookGroup::new(&book.title);
        for entry in &book.entries {
            group
                .words
                .push(enricher.enrich(&entry.word, entry.context.as_deref()));
        }
        document.books.push(group);
    }
    document
}

/// Reads `input_path`, enriches with the live services and writes the result
/// to `config.output_path`.
pub fn run_export(config: &Config, input_path: &Path) -> Result<ExportSummary> {
    info!("Reading lookups from {}", input_path.display());
    let books = input::read_books(input_path, &config.default_title)?;

    let client = Client::builder().timeout(config.request_timeout()).build()?;
    let enricher = Enricher::new(
        JishoClient::new(client.clone(), &config.dictionary_endpoint),
        TatoebaClient::new(client, &config.sentence_endpoint),
        EnrichSettings::from(config),
    );

    let document = build_document(books, &enricher);
    save_document(&document, &config.output_path)?;
    info!("Wrote {}", config.output_path.display());

    Ok(ExportSummary::of(&document, &config.no_definition))
}

//*** END FILE: src/exporter.rs ***//
