//*** START FILE: src/enrichment/enricher.rs ***//
// Turns a bare word (plus optional context) into a WordRecord.
//
// Enrichment never fails. Each external call degrades on its own: a broken
// dictionary lookup still leaves room for a sample sentence and vice versa.

use tracing::{info, warn};

use crate::config::Config;
use crate::enrichment::jisho::{DictionarySource, SearchResponse};
use crate::enrichment::sentences::{strip_annotations, SentenceSource};
use crate::types::vocab_data::WordRecord;

/// Fallback values and limits used while building records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichSettings {
    pub no_definition: String,
    pub no_reading: String,
    pub max_glosses: usize,
}

impl From<&Config> for EnrichSettings {
    fn from(config: &Config) -> Self {
        EnrichSettings {
            no_definition: config.no_definition.clone(),
            no_reading: config.no_reading.clone(),
            max_glosses: config.max_glosses,
        }
    }
}

impl Default for EnrichSettings {
    fn default() -> Self {
        EnrichSettings::from(&Config::default())
    }
}

pub struct Enricher<D, S> {
    dictionary: D,
    sentences: S,
    settings: EnrichSettings,
}

impl<D: DictionarySource, S: SentenceSource> Enricher<D, S> {
    pub fn new(dictionary: D, sentences: S, settings: EnrichSettings) -> Self {
        Enricher { dictionary, sentences, settings }
    }

    pub fn enrich(&self, word: &str, context: Option<&str>) -> WordRecord {
        info!("Creating record for {}", word);

        let response = self.dictionary.search(word).unwrap_or_else(|e| {
            warn!(word, "Dictionary lookup failed: {}", e);
            SearchResponse::default()
        });
        let (definition, reading, part_of_speech) = self.describe(&response);

        let sample = match context {
            Some(sentence) => sentence.to_string(),
            None => self.fetch_sample(word),
        };

        WordRecord {
            word: word.to_string(),
            definition,
            reading,
            part_of_speech,
            sample,
        }
    }

    /// Definition, reading and part of speech from the first result only.
    fn describe(&self, response: &SearchResponse) -> (String, String, String) {
        let Some(entry) = response.first_entry() else {
            return (
                self.settings.no_definition.clone(),
                self.settings.no_reading.clone(),
                String::new(),
            );
        };

        let reading = entry
            .first_reading()
            .map_or_else(|| self.settings.no_reading.clone(), String::from);

        let (definition, part_of_speech) = match entry.first_sense() {
            Some(sense) => {
                let glosses: Vec<&str> = sense
                    .english_definitions
                    .iter()
                    .map(String::as_str)
                    .take(self.settings.max_glosses)
                    .collect();
                let definition = if glosses.is_empty() {
                    self.settings.no_definition.clone()
                } else {
                    glosses.join(", ")
                };
                (definition, sense.parts_of_speech.join(", "))
            }
            None => (self.settings.no_definition.clone(), String::new()),
        };

        (definition, reading, part_of_speech)
    }

    fn fetch_sample(&self, word: &str) -> String {
        match self.sentences.first_sentence(word) {
            Ok(Some(sentence)) => strip_annotations(&sentence),
            Ok(None) => String::new(),
            Err(e) => {
                warn!(word, "Sentence lookup failed: {}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::jisho::{DictionaryEntry, JapaneseForm, Sense};
    use crate::errors::{Result, VocabError};
    use std::cell::Cell;

    fn offline() -> VocabError {
        VocabError::Io(std::io::Error::new(std::io::ErrorKind::Other, "offline"))
    }

    struct FixedDictionary(Option<SearchResponse>);

    impl DictionarySource for FixedDictionary {
        fn search(&self, _keyword: &str) -> Result<SearchResponse> {
            self.0.clone().ok_or_else(offline)
        }
    }

    struct CountingSentences {
        reply: Option<String>,
        fail: bool,
        calls: Cell<usize>,
    }

    impl CountingSentences {
        fn returning(reply: Option<&str>) -> Self {
            CountingSentences { reply: reply.map(String::from), fail: false, calls: Cell::new(0) }
        }

        fn failing() -> Self {
            CountingSentences { reply: None, fail: true, calls: Cell::new(0) }
        }
    }

    impl SentenceSource for CountingSentences {
        fn first_sentence(&self, _word: &str) -> Result<Option<String>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(offline());
            }
            Ok(self.reply.clone())
        }
    }

    fn dog() -> SearchResponse {
        SearchResponse {
            data: vec![
                DictionaryEntry {
                    japanese: vec![JapaneseForm { word: Some("犬".into()), reading: Some("いぬ".into()) }],
                    senses: vec![
                        Sense {
                            english_definitions: vec!["dog".into(), "canine".into(), "hound".into()],
                            parts_of_speech: vec!["Noun".into(), "No-adjective".into()],
                        },
                        Sense {
                            english_definitions: vec!["spy".into()],
                            parts_of_speech: vec!["Noun".into()],
                        },
                    ],
                },
                DictionaryEntry {
                    japanese: vec![JapaneseForm { word: None, reading: Some("けん".into()) }],
                    senses: vec![],
                },
            ],
        }
    }

    fn enricher(
        response: Option<SearchResponse>,
        sentences: CountingSentences,
    ) -> Enricher<FixedDictionary, CountingSentences> {
        Enricher::new(FixedDictionary(response), sentences, EnrichSettings::default())
    }

    #[test]
    fn uses_first_entry_and_first_two_glosses() {
        let e = enricher(Some(dog()), CountingSentences::returning(None));
        let record = e.enrich("犬", Some("犬が吠える。"));
        assert_eq!(record.word, "犬");
        assert_eq!(record.definition, "dog, canine");
        assert_eq!(record.reading, "いぬ");
        assert_eq!(record.part_of_speech, "Noun, No-adjective");
        assert_eq!(record.sample, "犬が吠える。");
        assert_eq!(e.sentences.calls.get(), 0);
    }

    #[test]
    fn single_gloss_is_not_padded() {
        let response = SearchResponse {
            data: vec![DictionaryEntry {
                japanese: vec![],
                senses: vec![Sense { english_definitions: vec!["cat".into()], parts_of_speech: vec![] }],
            }],
        };
        let record = enricher(Some(response), CountingSentences::returning(None)).enrich("猫", Some("猫"));
        assert_eq!(record.definition, "cat");
        assert_eq!(record.reading, "NO READING FOUND");
        assert_eq!(record.part_of_speech, "");
    }

    #[test]
    fn no_results_gives_sentinels_and_keeps_context() {
        let e = enricher(Some(SearchResponse::default()), CountingSentences::returning(Some("x")));
        let record = e.enrich("ぬぬぬ", Some("ぬぬぬとは"));
        assert_eq!(record.definition, "NO DEFINITION FOUND");
        assert_eq!(record.reading, "NO READING FOUND");
        assert_eq!(record.part_of_speech, "");
        assert_eq!(record.sample, "ぬぬぬとは");
        assert_eq!(e.sentences.calls.get(), 0);
    }

    #[test]
    fn no_results_without_context_still_asks_for_a_sample() {
        let e = enricher(Some(SearchResponse::default()), CountingSentences::returning(Some("ぬ(ぬ)だ")));
        let record = e.enrich("ぬぬぬ", None);
        assert_eq!(record.definition, "NO DEFINITION FOUND");
        assert_eq!(record.reading, "NO READING FOUND");
        assert_eq!(record.part_of_speech, "");
        assert_eq!(record.sample, "ぬだ");
        assert_eq!(e.sentences.calls.get(), 1);
    }

    #[test]
    fn entry_without_senses_uses_definition_sentinel() {
        let response = SearchResponse {
            data: vec![DictionaryEntry {
                japanese: vec![JapaneseForm { word: None, reading: Some("いぬ".into()) }],
                senses: vec![],
            }],
        };
        let record = enricher(Some(response), CountingSentences::returning(None)).enrich("犬", None);
        assert_eq!(record.definition, "NO DEFINITION FOUND");
        assert_eq!(record.reading, "いぬ");
        assert_eq!(record.part_of_speech, "");
    }

    #[test]
    fn fetched_sample_is_stripped() {
        let e = enricher(Some(dog()), CountingSentences::returning(Some("(なつ)夏は暑い[あつい]")));
        let record = e.enrich("犬", None);
        assert_eq!(record.sample, "夏は暑い");
        assert_eq!(e.sentences.calls.get(), 1);
    }

    #[test]
    fn dictionary_failure_still_fetches_sample() {
        let e = enricher(None, CountingSentences::returning(Some("犬(いぬ)が好き")));
        let record = e.enrich("犬", None);
        assert_eq!(record.definition, "NO DEFINITION FOUND");
        assert_eq!(record.reading, "NO READING FOUND");
        assert_eq!(record.sample, "犬が好き");
    }

    #[test]
    fn sentence_failure_keeps_dictionary_data() {
        let e = enricher(Some(dog()), CountingSentences::failing());
        let record = e.enrich("犬", None);
        assert_eq!(record.definition, "dog, canine");
        assert_eq!(record.sample, "");
        assert_eq!(e.sentences.calls.get(), 1);
    }

    #[test]
    fn gloss_limit_comes_from_settings() {
        let settings = EnrichSettings { max_glosses: 3, ..EnrichSettings::default() };
        let e = Enricher::new(FixedDictionary(Some(dog())), CountingSentences::returning(None), settings);
        assert_eq!(e.enrich("犬", Some("c")).definition, "dog, canine, hound");
    }
}
//*** END FILE: src/enrichment/enricher.rs ***//
