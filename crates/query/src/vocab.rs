//! Vocabulary store: the frequency-weighted table of known tokens
//!
//! This module defines:
//! - `VocabEntry` / `EntryKind`: the row shape returned by lookups
//! - `VocabularyStore`: the bulk read interface the pipeline consumes
//! - `MemoryVocabulary`: the embedded, concurrent-read implementation
//!
//! The store is read-only during query processing. Bulk lookup returning
//! zero rows is a normal outcome, not an error.

use dashmap::DashMap;
use gazetteer_core::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Type discriminator of a vocabulary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Full word; the stored token carries the leading-space sentinel.
    Word,
    /// Word fragment, matched without a boundary sentinel.
    Partial,
    Country,
    HouseNumber,
    Postcode,
    /// Special classification term (amenity class/type pair).
    Special,
}

/// One row of the vocabulary store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Lookup key. Full-word entries lead with the boundary sentinel and
    /// use single spaces for internal word boundaries.
    pub token: String,
    pub kind: EntryKind,
    /// Display form of the entry, where one exists.
    pub word: Option<String>,
    /// Special-term class ("amenity").
    pub class: Option<String>,
    /// Special-term type ("restaurant").
    pub subtype: Option<String>,
    /// Operator attribute for special terms ("near").
    pub operator: Option<String>,
    /// ISO country code: the code itself for country rows, a hint for
    /// postcode rows.
    pub country_code: Option<String>,
    /// Corpus frequency.
    pub frequency: u64,
}

impl VocabEntry {
    pub fn new(token: impl Into<String>, kind: EntryKind) -> Self {
        VocabEntry {
            token: token.into(),
            kind,
            word: None,
            class: None,
            subtype: None,
            operator: None,
            country_code: None,
            frequency: 0,
        }
    }
}

/// Read interface onto the known-token store.
///
/// Implementations must be safe for many simultaneous readers; the
/// pipeline issues one bulk lookup per request plus occasional single-term
/// special lookups.
pub trait VocabularyStore: Send + Sync {
    /// Bulk lookup: every row whose token matches one of `tokens`.
    /// Row order follows the order of `tokens`.
    fn lookup(&self, tokens: &[String]) -> Result<Vec<VocabEntry>>;

    /// Single-term lookup restricted to special/class-type rows.
    fn lookup_special(&self, token: &str) -> Result<Vec<VocabEntry>>;

    /// Total number of entries. Used by backend health checks.
    fn entry_count(&self) -> Result<usize>;
}

/// Embedded vocabulary store backed by a concurrent map.
///
/// Reads take no locks; inserts are expected to happen during setup, before
/// query traffic starts. This is both the embedded production store and the
/// fixture store used throughout the tests.
#[derive(Debug, Default)]
pub struct MemoryVocabulary {
    entries: DashMap<String, Vec<VocabEntry>>,
    total: AtomicUsize,
}

impl MemoryVocabulary {
    pub fn new() -> Self {
        MemoryVocabulary::default()
    }

    /// Insert a prepared row under its token key.
    pub fn insert(&self, entry: VocabEntry) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.entries.entry(entry.token.clone()).or_default().push(entry);
    }

    /// Add a full word. `term` is the normalized form without the sentinel;
    /// multi-word entries use single internal spaces ("downing street").
    pub fn add_word(&self, term: &str, frequency: u64) -> &Self {
        let mut entry = VocabEntry::new(format!(" {term}"), EntryKind::Word);
        entry.word = Some(term.to_string());
        entry.frequency = frequency;
        self.insert(entry);
        self
    }

    /// Add a word fragment, matched without a boundary sentinel.
    pub fn add_partial(&self, term: &str, frequency: u64) -> &Self {
        let mut entry = VocabEntry::new(term, EntryKind::Partial);
        entry.frequency = frequency;
        self.insert(entry);
        self
    }

    /// Add a country name resolving to an ISO code.
    pub fn add_country(&self, term: &str, code: &str) -> &Self {
        let mut entry = VocabEntry::new(format!(" {term}"), EntryKind::Country);
        entry.word = Some(term.to_string());
        entry.country_code = Some(code.to_string());
        self.insert(entry);
        self
    }

    /// Add a postcode, optionally hinted to a country.
    pub fn add_postcode(&self, postcode: &str, country_hint: Option<&str>) -> &Self {
        let mut entry = VocabEntry::new(format!(" {postcode}"), EntryKind::Postcode);
        entry.word = Some(postcode.to_string());
        entry.country_code = country_hint.map(str::to_string);
        self.insert(entry);
        self
    }

    /// Add a house-number token, matched without a sentinel.
    pub fn add_house_number(&self, number: &str) -> &Self {
        let mut entry = VocabEntry::new(number, EntryKind::HouseNumber);
        entry.word = Some(number.to_string());
        self.insert(entry);
        self
    }

    /// Add a special classification term with its class/type pair and an
    /// optional operator attribute.
    pub fn add_special(
        &self,
        term: &str,
        class: &str,
        subtype: &str,
        operator: Option<&str>,
    ) -> &Self {
        let mut entry = VocabEntry::new(format!(" {term}"), EntryKind::Special);
        entry.word = Some(term.to_string());
        entry.class = Some(class.to_string());
        entry.subtype = Some(subtype.to_string());
        entry.operator = operator.map(str::to_string);
        self.insert(entry);
        self
    }
}

impl VocabularyStore for MemoryVocabulary {
    fn lookup(&self, tokens: &[String]) -> Result<Vec<VocabEntry>> {
        let mut rows = Vec::new();
        for token in tokens {
            if let Some(found) = self.entries.get(token) {
                rows.extend(found.iter().cloned());
            }
        }
        Ok(rows)
    }

    fn lookup_special(&self, token: &str) -> Result<Vec<VocabEntry>> {
        let rows = match self.entries.get(token) {
            Some(found) => found
                .iter()
                .filter(|entry| entry.kind == EntryKind::Special)
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Ok(rows)
    }

    fn entry_count(&self) -> Result<usize> {
        Ok(self.total.load(Ordering::Relaxed))
    }
}
