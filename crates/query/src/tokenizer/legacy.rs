//! Fold-based tokenizer backend
//!
//! The older of the two backends: normalization is a fixed ASCII fold with
//! no configurable rule table. It carries one lexical override the rule
//! backend does not need: a standalone two-letter phrase that collides
//! with a common non-English article is rewritten to the unambiguous US
//! state name before lookup ("il" would otherwise match the Italian
//! article far more often than Illinois).

use super::{Pipeline, TokenizedQuery, Tokenizer};
use crate::normalize::{AsciiFoldNormalizer, Normalizer};
use crate::vocab::VocabularyStore;
use gazetteer_core::error::{QueryError, Result};
use gazetteer_core::{Phrase, QueryConfig, Token};
use std::sync::Arc;

/// Two-letter inputs that collide with articles, and their rewrites.
/// Applied to whole phrases only, before normalization.
const ARTICLE_COLLISIONS: &[(&str, &str)] = &[
    ("il", "illinois"),
    ("al", "alabama"),
    ("la", "louisiana"),
];

pub struct LegacyTokenizer {
    normalizer: AsciiFoldNormalizer,
    pipeline: Pipeline,
}

impl LegacyTokenizer {
    /// Build the backend. The fold primitive has no failure mode, so
    /// construction is infallible.
    pub fn new(config: &QueryConfig, store: Arc<dyn VocabularyStore>) -> Self {
        LegacyTokenizer {
            normalizer: AsciiFoldNormalizer,
            pipeline: Pipeline::new(store, config.max_word_sets),
        }
    }

    /// Rewrite a phrase whose entire text is a colliding two-letter
    /// abbreviation. Anything longer is left alone; the vocabulary decides.
    fn disambiguate(phrase: &Phrase) -> Phrase {
        let trimmed = phrase.text.trim();
        for (abbreviation, full) in ARTICLE_COLLISIONS {
            if trimmed.eq_ignore_ascii_case(abbreviation) {
                return Phrase::new(phrase.kind, *full);
            }
        }
        phrase.clone()
    }
}

impl Tokenizer for LegacyTokenizer {
    fn name(&self) -> &str {
        "legacy"
    }

    fn check_status(&self) -> Result<()> {
        if self.normalize("a").is_empty() {
            return Err(QueryError::ModuleUnavailable(
                "fold normalization produced no output".into(),
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
        let rewritten: Vec<Phrase> = phrases.iter().map(Self::disambiguate).collect();
        self.pipeline.extract(&self.normalizer, &rewritten)
    }
}
