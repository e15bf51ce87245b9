//! Tokenizer backends: normalization, partitioning, vocabulary lookup and
//! fallback classification
//!
//! Two interchangeable backends share the [`Tokenizer`] contract:
//! - [`IcuTokenizer`]: rule-based transliteration
//! - [`LegacyTokenizer`]: fixed ASCII fold plus a small disambiguation table
//!
//! Selection happens once at startup through [`build_tokenizer`]. The
//! pipeline itself is identical for both backends and lives here:
//! discover candidate groups, one bulk vocabulary lookup, classify rows
//! into the catalog, apply fallback heuristics for unresolved numeric
//! candidates, then re-partition each phrase against the catalog.
//!
//! # Concurrency
//!
//! A tokenizer is stateless between requests: all mutable state is owned by
//! the `extract_tokens` call. Backends are `Send + Sync` and shared behind
//! an `Arc` alongside the vocabulary store.

mod icu;
mod legacy;

pub use icu::IcuTokenizer;
pub use legacy::LegacyTokenizer;

use crate::normalize::{fold, Normalizer};
use crate::partition::{AlwaysMatch, WordSetPartitioner};
use crate::vocab::{EntryKind, VocabEntry, VocabularyStore};
use gazetteer_core::error::{QueryError, Result};
use gazetteer_core::{Phrase, QueryConfig, SpecialOperator, Token, TokenCatalog, TokenizedPhrase, TokenizerKind};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Result of tokenizing a full query: the phrases with their word sets
/// attached, plus the catalog of every resolved token string. This is the
/// interface handed to the ranking engine.
#[derive(Debug, Clone)]
pub struct TokenizedQuery {
    pub phrases: Vec<TokenizedPhrase>,
    pub catalog: TokenCatalog,
}

/// Contract shared by the interchangeable tokenizer backends.
pub trait Tokenizer: Send + Sync {
    /// Backend identifier ("icu" or "legacy").
    fn name(&self) -> &str;

    /// Verify the normalization primitive and the vocabulary store are
    /// usable: `ModuleUnavailable` if normalization produces no output,
    /// `QueryFailed` if the store cannot be queried, `NoData` if it is
    /// reachable but empty.
    fn check_status(&self) -> Result<()>;

    /// Canonicalize text: accent stripping, case folding, whitespace
    /// collapsing, plus backend-specific transliteration rules.
    fn normalize(&self, text: &str) -> String;

    /// Normalize and wrap with the leading-space boundary sentinel: the
    /// full-word lookup key form.
    fn standardize_word(&self, text: &str) -> String;

    /// Look up one standardized term against the special/class-type subset
    /// of the vocabulary, tagging results with the `Type` operator.
    /// No matches yields an empty vec, not an error.
    fn tokens_for_special_term(&self, term: &str) -> Result<Vec<Token>>;

    /// Run the full pipeline over a query's phrases.
    ///
    /// Idempotent and read-only: the same phrases against an unchanged
    /// store produce an identical catalog and identical word sets.
    fn extract_tokens(&self, phrases: &[Phrase]) -> Result<TokenizedQuery>;
}

/// Build the backend selected by the configuration.
///
/// This is the only place backend choice appears; the pipeline never
/// branches on it at runtime.
pub fn build_tokenizer(
    config: &QueryConfig,
    store: Arc<dyn VocabularyStore>,
) -> Result<Box<dyn Tokenizer>> {
    match config.backend {
        TokenizerKind::Icu => Ok(Box::new(IcuTokenizer::new(config, store)?)),
        TokenizerKind::Legacy => Ok(Box::new(LegacyTokenizer::new(config, store))),
    }
}

// ============================================================================
// Shared pipeline
// ============================================================================

/// ZIP+4 shape: five digits, a space, four digits. The five-digit prefix is
/// the usable postcode.
static ZIP_PLUS_FOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{5}) [0-9]{4}$").unwrap());

/// The backend-independent part of every tokenizer: candidate discovery,
/// bulk lookup, classification, fallback heuristics and the pruning
/// re-partition.
pub(crate) struct Pipeline {
    store: Arc<dyn VocabularyStore>,
    partitioner: WordSetPartitioner,
}

impl Pipeline {
    pub(crate) fn new(store: Arc<dyn VocabularyStore>, max_word_sets: usize) -> Self {
        Pipeline { store, partitioner: WordSetPartitioner::new(max_word_sets) }
    }

    /// Store half of `check_status`.
    pub(crate) fn check_store(&self) -> Result<()> {
        if self.store.entry_count()? == 0 {
            return Err(QueryError::NoData);
        }
        Ok(())
    }

    /// Special-term lookup for a term already in standardized form.
    pub(crate) fn special_term(&self, standardized: &str) -> Result<Vec<Token>> {
        let rows = self.store.lookup_special(standardized)?;
        let tokens = rows
            .into_iter()
            .filter_map(|row| {
                let class = row.class?;
                let kind = row.subtype?;
                Some(Token::Special { class, kind, operator: SpecialOperator::Type })
            })
            .collect();
        Ok(tokens)
    }

    /// The six-step extraction pipeline shared by both backends.
    pub(crate) fn extract(
        &self,
        normalizer: &dyn Normalizer,
        phrases: &[Phrase],
    ) -> Result<TokenizedQuery> {
        // 1. Normalize each phrase and discover every candidate group via
        //    unrestricted partitioning, in both lookup forms.
        let mut prepared = Vec::with_capacity(phrases.len());
        let mut candidates: Vec<String> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for phrase in phrases {
            let normalized = normalizer.transliterate(&phrase.text);
            let words: Vec<String> =
                normalized.unicode_words().map(String::from).collect();
            for set in self.partitioner.partition(&words, &AlwaysMatch) {
                for group in set.groups {
                    let full = format!(" {group}");
                    if seen.insert(full.clone()) {
                        candidates.push(full);
                    }
                    if seen.insert(group.clone()) {
                        candidates.push(group);
                    }
                }
            }
            prepared.push((phrase, normalized, words));
        }

        let normalized_query = prepared
            .iter()
            .map(|(_, normalized, _)| normalized.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        // 2. One bulk lookup for the union of candidates across phrases.
        let rows = self.store.lookup(&candidates)?;
        tracing::debug!(
            phrases = phrases.len(),
            candidates = candidates.len(),
            rows = rows.len(),
            "bulk vocabulary lookup"
        );

        // 3. Classify each row; failed guards drop the row, not the request.
        let mut catalog = TokenCatalog::new();
        for row in &rows {
            if let Some(token) = classify(row, &normalized_query) {
                catalog.add_token(row.token.clone(), token);
            }
        }

        // 4. Fallback heuristics for bare candidates no vocabulary row
        //    resolved, in either lookup form.
        for candidate in &candidates {
            if candidate.starts_with(' ') {
                continue;
            }
            if catalog.contains(candidate) || catalog.contains(&format!(" {candidate}")) {
                continue;
            }
            if let Some(caps) = ZIP_PLUS_FOUR.captures(candidate) {
                catalog.add_token(
                    candidate.clone(),
                    Token::Postcode { postcode: caps[1].to_string(), country_hint: None },
                );
            } else if !candidate.is_empty()
                && candidate.bytes().all(|b| b.is_ascii_digit())
            {
                catalog.add_token(
                    candidate.clone(),
                    Token::HouseNumber { number: candidate.clone() },
                );
            }
        }

        // 5. Re-partition each phrase against the populated catalog and
        //    attach the surviving word sets.
        let mut out = Vec::with_capacity(prepared.len());
        for (phrase, normalized, words) in prepared {
            let word_sets = if words.is_empty() {
                Vec::new()
            } else {
                let member =
                    |term: &str| catalog.contains(term) || catalog.contains(&format!(" {term}"));
                let mut sets = self.partitioner.partition(&words, &member);
                if phrase.kind.is_qualifier() {
                    WordSetPartitioner::invert(&mut sets);
                }
                sets
            };
            out.push(TokenizedPhrase {
                kind: phrase.kind,
                text: phrase.text.clone(),
                normalized,
                word_sets,
            });
        }

        Ok(TokenizedQuery { phrases: out, catalog })
    }
}

// ============================================================================
// Row classification
// ============================================================================

/// Classify one vocabulary row into a token, or drop it.
///
/// Drops are silent by design: an unsafe postcode literal, a malformed
/// fragment or a missing discriminator field reduce the candidate set
/// instead of failing the request.
fn classify(entry: &VocabEntry, normalized_query: &str) -> Option<Token> {
    match entry.kind {
        EntryKind::Country => match &entry.country_code {
            Some(code) => Some(Token::Country { code: code.clone() }),
            None => {
                tracing::debug!(token = %entry.token, "dropping country row without code");
                None
            }
        },
        EntryKind::HouseNumber => {
            Some(Token::HouseNumber { number: display_form(entry) })
        }
        EntryKind::Postcode => {
            let literal = display_form(entry);
            if !is_injection_safe(&literal) {
                tracing::warn!(token = %entry.token, "dropping postcode with unsafe literal");
                return None;
            }
            let normalized = fold(&literal);
            if normalized.is_empty() || !normalized_query.contains(&normalized) {
                tracing::debug!(token = %entry.token, "dropping postcode absent from query");
                return None;
            }
            Some(Token::Postcode {
                postcode: literal,
                country_hint: entry.country_code.clone(),
            })
        }
        EntryKind::Special => {
            let class = entry.class.clone()?;
            let kind = entry.subtype.clone()?;
            let operator = if entry.operator.is_some() {
                SpecialOperator::Near
            } else {
                SpecialOperator::None
            };
            Some(Token::Special { class, kind, operator })
        }
        EntryKind::Word => {
            if !entry.token.starts_with(' ') {
                tracing::debug!(token = %entry.token, "dropping word row without sentinel");
                return None;
            }
            let word_count = entry.token.matches(' ').count() as u32;
            Some(Token::Word { frequency: entry.frequency, word_count })
        }
        EntryKind::Partial => {
            // Fragments with any boundary are reserved, not matched.
            if entry.token.contains(' ') {
                tracing::debug!(token = %entry.token, "ignoring fragment with word boundary");
                return None;
            }
            Some(Token::Partial { frequency: entry.frequency })
        }
    }
}

/// Display form of a row, falling back to the token without its sentinel.
fn display_form(entry: &VocabEntry) -> String {
    entry
        .word
        .clone()
        .unwrap_or_else(|| entry.token.trim_start_matches(' ').to_string())
}

/// A literal is safe to pass downstream only if re-escaping it is the
/// identity: any character that escaping would touch means the stored text
/// cannot be trusted.
fn is_injection_safe(literal: &str) -> bool {
    let escaped = literal.replace('\\', r"\\").replace('\'', "''");
    escaped == literal
}
