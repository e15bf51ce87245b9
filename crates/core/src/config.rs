//! Deployment-time configuration
//!
//! Backend selection happens once, when the tokenizer is built at startup.
//! There is no runtime branch between backends inside the pipeline itself.

use crate::error::{QueryError, Result};
use serde::{Deserialize, Serialize};

/// Which tokenizer backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Rule-based transliteration backend (the default).
    Icu,
    /// Fixed ASCII-fold backend with the two-letter disambiguation table.
    Legacy,
}

/// Configuration for the query tokenization core.
///
/// # Example
///
/// ```
/// use gazetteer_core::config::{QueryConfig, TokenizerKind};
///
/// let config = QueryConfig::from_toml_str(
///     "backend = \"legacy\"\nmax_word_sets = 50\n",
/// ).unwrap();
/// assert_eq!(config.backend, TokenizerKind::Legacy);
/// assert_eq!(config.max_word_sets, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Backend selected at startup.
    pub backend: TokenizerKind,

    /// Hard cap on enumerated word sets per phrase.
    ///
    /// The sole protection against combinatorial blow-up: an n-word phrase
    /// has `2^(n-1)` contiguous partitions, which is infeasible beyond
    /// roughly twenty words. Enumeration is coarsest-first, so truncation
    /// drops only the most fragmented interpretations.
    pub max_word_sets: usize,

    /// Declarative transliteration rule set for the ICU backend.
    /// `None` selects the built-in rules.
    pub normalization_rules: Option<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            backend: TokenizerKind::Icu,
            max_word_sets: 100,
            normalization_rules: None,
        }
    }
}

impl QueryConfig {
    /// Parse a configuration from TOML.
    ///
    /// A malformed document is a deployment problem and maps to
    /// [`QueryError::ModuleUnavailable`].
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw)
            .map_err(|e| QueryError::ModuleUnavailable(format!("invalid configuration: {e}")))
    }
}
