//! Shared fixtures for the pipeline suite

use gazetteer::{
    build_tokenizer, MemoryVocabulary, QueryConfig, QueryError, Result, Tokenizer, TokenizerKind,
    VocabEntry, VocabularyStore,
};
use std::sync::Arc;

/// A vocabulary resembling a small imported extract: full words, a
/// fragment, a country, a postcode and a special term.
pub fn fixture_store() -> Arc<MemoryVocabulary> {
    let store = Arc::new(MemoryVocabulary::new());
    store
        .add_word("street", 120)
        .add_word("downing street", 45)
        .add_word("london", 900)
        .add_word("birmingham", 400)
        .add_partial("downing", 8)
        .add_country("united kingdom", "gb")
        .add_postcode("sw1a 2aa", Some("gb"))
        .add_special("pub", "amenity", "pub", None)
        .add_special("pharmacy", "amenity", "pharmacy", Some("near"));
    store
}

/// Build both backends over the same store; contract tests run against
/// each in turn.
pub fn both_backends(store: Arc<MemoryVocabulary>) -> Vec<Box<dyn Tokenizer>> {
    [TokenizerKind::Icu, TokenizerKind::Legacy]
        .into_iter()
        .map(|backend| {
            let config = QueryConfig { backend, ..QueryConfig::default() };
            build_tokenizer(&config, store.clone()).unwrap()
        })
        .collect()
}

/// Store double whose reads always fail, for QueryFailed paths.
pub struct FailingStore;

impl VocabularyStore for FailingStore {
    fn lookup(&self, _tokens: &[String]) -> Result<Vec<VocabEntry>> {
        Err(QueryError::QueryFailed("connection refused".into()))
    }

    fn lookup_special(&self, _token: &str) -> Result<Vec<VocabEntry>> {
        Err(QueryError::QueryFailed("connection refused".into()))
    }

    fn entry_count(&self) -> Result<usize> {
        Err(QueryError::QueryFailed("connection refused".into()))
    }
}
