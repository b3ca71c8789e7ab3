//*** START FILE: src/config.rs ***//
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{Result, VocabError};

pub const DEFAULT_CONFIG_FILE: &str = "kindle_vocab.toml";
pub const DEFAULT_OUTPUT_FILE: &str = "kindle_data.json";
pub const DEFAULT_DICTIONARY_ENDPOINT: &str = "https://jisho.org/api/v1/search/words";
pub const DEFAULT_SENTENCE_ENDPOINT: &str = "https://tatoeba.org/en/api_v0/search";
pub const DEFAULT_TITLE: &str = "DEFAULT_TITLE_REPLACE_ME";
pub const NO_DEFINITION: &str = "NO DEFINITION FOUND";
pub const NO_READING: &str = "NO READING FOUND";
pub const DEFAULT_MAX_GLOSSES: usize = 2;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary_endpoint: String,
    pub sentence_endpoint: String,
    pub output_path: PathBuf,
    /// Title of the single book a flat word list is grouped under.
    pub default_title: String,
    pub no_definition: String,
    pub no_reading: String,
    pub max_glosses: usize,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dictionary_endpoint: DEFAULT_DICTIONARY_ENDPOINT.to_string(),
            sentence_endpoint: DEFAULT_SENTENCE_ENDPOINT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            default_title: DEFAULT_TITLE.to_string(),
            no_definition: NO_DEFINITION.to_string(),
            no_reading: NO_READING.to_string(),
            max_glosses: DEFAULT_MAX_GLOSSES,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn validate(self, source: &str) -> Result<Self> {
        if self.max_glosses == 0 {
            return Err(VocabError::InvalidConfig(format!(
                "max_glosses in {} must be at least 1",
                source
            )));
        }
        if self.dictionary_endpoint.trim().is_empty() || self.sentence_endpoint.trim().is_empty() {
            return Err(VocabError::InvalidConfig(format!(
                "endpoints in {} must not be empty",
                source
            )));
        }
        Ok(self)
    }
}

pub fn parse_config(contents: &str, source: &str) -> Result<Config> {
    match toml::from_str::<Config>(contents) {
        Ok(loaded_config) => loaded_config.validate(source),
        Err(e) => Err(VocabError::InvalidConfig(format!(
            "Failed to parse {}: {}",
            source, e
        ))),
    }
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    match fs::read_to_string(file_path) {
        Ok(contents) => parse_config(&contents, &file_path.display().to_string()),
        Err(e) => Err(VocabError::InvalidConfig(format!(
            "Failed to read {}: {}. Please ensure it exists.",
            file_path.display(),
            e
        ))),
    }
}

/// Loads `explicit` if given, otherwise the default config file when present,
/// otherwise built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config_from_file(path);
    }
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        load_config_from_file(default_path)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("", "test.toml").unwrap();
        assert_eq!(config.output_path, PathBuf::from("kindle_data.json"));
        assert_eq!(config.no_definition, "NO DEFINITION FOUND");
        assert_eq!(config.no_reading, "NO READING FOUND");
        assert_eq!(config.max_glosses, 2);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn overrides_selected_fields() {
        let config = parse_config(
            "default_title = \"My Book\"\nrequest_timeout_secs = 10\n",
            "test.toml",
        )
        .unwrap();
        assert_eq!(config.default_title, "My Book");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.dictionary_endpoint, DEFAULT_DICTIONARY_ENDPOINT);
    }

    #[test]
    fn rejects_zero_glosses() {
        let err = parse_config("max_glosses = 0", "test.toml").unwrap_err();
        assert!(matches!(err, VocabError::InvalidConfig(_)));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = resolve_config(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(matches!(err, VocabError::InvalidConfig(_)));
    }

    #[test]
    fn explicit_config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "output_path = \"words.json\"\nmax_glosses = 3\n").unwrap();
        let config = resolve_config(Some(&path)).unwrap();
        assert_eq!(config.output_path, PathBuf::from("words.json"));
        assert_eq!(config.max_glosses, 3);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(parse_config("max_glosses = \"two\"", "test.toml").is_err());
    }
}
//*** END FILE: src/config.rs ***//
