//! Gazetteer: query tokenization and lexical-candidate resolution for
//! geocoding search
//!
//! This facade re-exports the public surface of the internal crates with a
//! clean interface. A typical embedding:
//!
//! ```
//! use gazetteer::{build_tokenizer, MemoryVocabulary, Phrase, QueryConfig};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryVocabulary::new());
//! store.add_word("street", 120);
//! store.add_partial("downing", 8);
//!
//! let tokenizer = build_tokenizer(&QueryConfig::default(), store).unwrap();
//! let phrases = Phrase::split_query("10 downing street");
//! let result = tokenizer.extract_tokens(&phrases).unwrap();
//!
//! assert_eq!(result.catalog.count(), 3);
//! ```

// ============================================================================
// Public API types
// ============================================================================

// Request model and results
pub use gazetteer_core::{Phrase, PhraseKind, TokenizedPhrase, WordSet};
pub use gazetteer_core::{SpecialOperator, Token, TokenCatalog};

// Configuration and errors
pub use gazetteer_core::{QueryConfig, QueryError, Result, TokenizerKind};

// Tokenizer backends and their collaborators
pub use gazetteer_query::{build_tokenizer, IcuTokenizer, LegacyTokenizer, Tokenizer, TokenizedQuery};
pub use gazetteer_query::{AlwaysMatch, VocabularyMembership, WordSetPartitioner};
pub use gazetteer_query::{AsciiFoldNormalizer, Normalizer, RuleNormalizer};
pub use gazetteer_query::{EntryKind, MemoryVocabulary, VocabEntry, VocabularyStore};
