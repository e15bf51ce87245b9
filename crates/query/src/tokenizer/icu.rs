//! Rule-based tokenizer backend
//!
//! Normalization is driven by a declarative transliteration rule set
//! supplied through the configuration (or the built-in rules), so
//! deployments can match whatever rules their vocabulary was imported
//! with. Everything past normalization is the shared pipeline.

use super::{Pipeline, TokenizedQuery, Tokenizer};
use crate::normalize::{Normalizer, RuleNormalizer};
use crate::vocab::VocabularyStore;
use gazetteer_core::error::{QueryError, Result};
use gazetteer_core::{Phrase, QueryConfig, Token};
use std::sync::Arc;

pub struct IcuTokenizer {
    normalizer: RuleNormalizer,
    pipeline: Pipeline,
}

impl std::fmt::Debug for IcuTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IcuTokenizer").finish_non_exhaustive()
    }
}

impl IcuTokenizer {
    /// Build the backend. Fails with `ModuleUnavailable` when the
    /// configured rule set does not parse.
    pub fn new(config: &QueryConfig, store: Arc<dyn VocabularyStore>) -> Result<Self> {
        let normalizer = match &config.normalization_rules {
            Some(rules) => RuleNormalizer::parse(rules)?,
            None => RuleNormalizer::with_default_rules()?,
        };
        Ok(IcuTokenizer {
            normalizer,
            pipeline: Pipeline::new(store, config.max_word_sets),
        })
    }
}

impl Tokenizer for IcuTokenizer {
    fn name(&self) -> &str {
        "icu"
    }

    fn check_status(&self) -> Result<()> {
        if self.normalize("a").is_empty() {
            return Err(QueryError::ModuleUnavailable(
                "transliteration produced no output".into(),
            ));
        }
        self.pipeline.check_store()
    }

    fn normalize(&self, text: &str) -> String {
        self.normalizer.transliterate(text)
    }

    fn standardize_word(&self, text: &str) -> String {
        format!(" {}", self.normalize(text))
    }

    fn tokens_for_special_term(&self, term: &str) -> Result<Vec<Token>> {
        self.pipeline.special_term(&self.standardize_word(term))
    }

    fn extract_tokens(&self, phrases: &[Phrase]) -> Result<TokenizedQuery> {
        self.pipeline.extract(&self.normalizer, phrases)
    }
}
