//*** START FILE: src/enrichment/sentences.rs ***//
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::Result;

lazy_static! {
    // Non-greedy so "(a)x(b)" loses both spans but keeps "x".
    static ref ANNOTATION_RE: Regex = Regex::new(r"\(.*?\)|\[.*?\]").unwrap();
}

/// A source of example sentences containing a word.
pub trait SentenceSource {
    /// The first example sentence for `word`, if the source has one.
    fn first_sentence(&self, word: &str) -> Result<Option<String>>;
}

/// Removes reading guides such as `(なつ)` or `[あつい]` from a sentence.
pub fn strip_annotations(sentence: &str) -> String {
    ANNOTATION_RE.replace_all(sentence, "").trim().to_string()
}

#[derive(Deserialize, Debug, Default)]
struct TatoebaSearch {
    #[serde(default)]
    results: Vec<TatoebaSentence>,
}

#[derive(Deserialize, Debug, Default)]
struct TatoebaSentence {
    #[serde(default)]
    text: String,
}

/// Japanese example sentences from the Tatoeba search API.
#[derive(Debug, Clone)]
pub struct TatoebaClient {
    client: Client,
    endpoint: String,
}

impl TatoebaClient {
    pub fn new(client: Client, endpoint: &str) -> Self {
        TatoebaClient { client, endpoint: endpoint.to_string() }
    }
}

impl SentenceSource for TatoebaClient {
    fn first_sentence(&self, word: &str) -> Result<Option<String>> {
        debug!(word, endpoint = %self.endpoint, "sentence search");
        let search: TatoebaSearch = self
            .client
            .get(&self.endpoint)
            .query(&[("from", "jpn"), ("query", word)])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(first_text(search))
    }
}

/// Only the first result counts; a blank one means no sample.
fn first_text(search: TatoebaSearch) -> Option<String> {
    search
        .results
        .into_iter()
        .next()
        .map(|s| s.text)
        .filter(|text| !text.trim().is_empty())
}

//*** END FILE: src/enrichment/sentences.rs ***//
