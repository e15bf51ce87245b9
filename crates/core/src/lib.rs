//! Core types for the gazetteer query tokenization pipeline
//!
//! This crate defines the request-scoped data model shared by the
//! tokenizer backends and the downstream ranking engine:
//! - `phrase`: query phrases, word sets, and the tokenized output shape
//! - `token`: the closed set of typed token interpretations
//! - `catalog`: the token-string → interpretations accumulator
//! - `config`: deployment-time configuration
//! - `error`: the fatal error taxonomy
//!
//! Everything here is pure in-memory state: no I/O, no shared mutability.

pub mod catalog;
pub mod config;
pub mod error;
pub mod phrase;
pub mod token;

pub use catalog::TokenCatalog;
pub use config::{QueryConfig, TokenizerKind};
pub use error::{QueryError, Result};
pub use phrase::{Phrase, PhraseKind, TokenizedPhrase, WordSet};
pub use token::{SpecialOperator, Token};
