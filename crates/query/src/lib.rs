//! Query tokenization pipeline for gazetteer
//!
//! This crate turns a place-search query into typed, ranked token
//! interpretations:
//! - `normalize`: Unicode canonicalization primitives
//! - `partition`: capped, coarsest-first word-set enumeration
//! - `vocab`: the known-token store interface and embedded implementation
//! - `tokenizer`: the two interchangeable backends and their shared
//!   pipeline
//!
//! The downstream spatial ranker consumes the per-phrase word sets and the
//! token catalog this crate produces; nothing here writes to the store.

pub mod normalize;
pub mod partition;
pub mod tokenizer;
pub mod vocab;

pub use normalize::{AsciiFoldNormalizer, Normalizer, RuleNormalizer};
pub use partition::{AlwaysMatch, VocabularyMembership, WordSetPartitioner};
pub use tokenizer::{build_tokenizer, IcuTokenizer, LegacyTokenizer, TokenizedQuery, Tokenizer};
pub use vocab::{EntryKind, MemoryVocabulary, VocabEntry, VocabularyStore};
