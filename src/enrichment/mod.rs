//*** START FILE: src/enrichment/mod.rs ***//
pub mod enricher;
pub mod jisho;
pub mod sentences;

pub use enricher::{EnrichSettings, Enricher};
pub use jisho::{DictionarySource, JishoClient, SearchResponse};
pub use sentences::{strip_annotations, SentenceSource, TatoebaClient};
//*** END FILE: src/enrichment/mod.rs ***//
