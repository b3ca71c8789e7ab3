//*** START FILE: src/enrichment/jisho.rs ***//
// Dictionary lookups against the Jisho word search API.
//
// The response is modelled as plain serde structs where every field falls
// back to an empty value, so a partially filled body still deserializes.

use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::errors::Result;

/// A source of dictionary entries for a single keyword.
pub trait DictionarySource {
    fn search(&self, keyword: &str) -> Result<SearchResponse>;
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<DictionaryEntry>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DictionaryEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub japanese: Vec<JapaneseForm>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub senses: Vec<Sense>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct JapaneseForm {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Sense {
    #[serde(default, deserialize_with = "null_as_default")]
    pub english_definitions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts_of_speech: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchResponse {
    pub fn first_entry(&self) -> Option<&DictionaryEntry> {
        self.data.first()
    }
}

impl DictionaryEntry {
    pub fn first_reading(&self) -> Option<&str> {
        self.japanese
            .first()
            .and_then(|form| form.reading.as_deref())
            .filter(|r| !r.trim().is_empty())
    }

    pub fn first_sense(&self) -> Option<&Sense> {
        self.senses.first()
    }
}

#[derive(Debug, Clone)]
pub struct JishoClient {
    client: Client,
    endpoint: String,
}

impl JishoClient {
    pub fn new(client: Client, endpoint: &str) -> Self {
        JishoClient { client, endpoint: endpoint.to_string() }
    }
}

impl DictionarySource for JishoClient {
    fn search(&self, keyword: &str) -> Result<SearchResponse> {
        debug!(keyword, endpoint = %self.endpoint, "dictionary search");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("keyword", keyword)])
            .send()?
            .error_for_status()?;
        Ok(response.json::<SearchResponse>()?)
    }
}

//*** END FILE: src/enrichment/jisho.rs ***//
