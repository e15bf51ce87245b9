//! Query phrases and word sets
//!
//! A query reaches the tokenizer as a list of phrases: comma-separated
//! segments of a free-text query, or the individual fields of a structured
//! search form. The tokenizer never mutates a phrase; it returns
//! [`TokenizedPhrase`] values carrying the word sets it derived.

use serde::{Deserialize, Serialize};

/// Role of a phrase within the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseKind {
    /// A comma-separated segment of a free-text query.
    Freeform,
    /// Structured field: the kind of place sought ("pub", "pharmacy").
    Amenity,
    /// Structured field: street name, possibly with a house number.
    Street,
    City,
    County,
    State,
    Postcode,
    Country,
}

impl PhraseKind {
    /// Qualifier phrases describe what to find relative to the subject
    /// ("pub near ...") rather than the subject itself. Their word sets are
    /// inverted so the trailing group is tried first.
    pub fn is_qualifier(self) -> bool {
        matches!(self, PhraseKind::Amenity)
    }
}

/// One raw segment of a search query, before tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub kind: PhraseKind,
    pub text: String,
}

impl Phrase {
    pub fn new(kind: PhraseKind, text: impl Into<String>) -> Self {
        Phrase { kind, text: text.into() }
    }

    /// Split a free-text query into comma-separated freeform phrases.
    /// Empty segments are discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use gazetteer_core::phrase::Phrase;
    ///
    /// let phrases = Phrase::split_query("10 downing street, london, ");
    /// assert_eq!(phrases.len(), 2);
    /// assert_eq!(phrases[0].text, "10 downing street");
    /// assert_eq!(phrases[1].text, "london");
    /// ```
    pub fn split_query(query: &str) -> Vec<Phrase> {
        query
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| Phrase::new(PhraseKind::Freeform, segment))
            .collect()
    }
}

/// One contiguous grouping of a phrase's words.
///
/// Groups never reorder words: joining `groups` with single spaces
/// reproduces the normalized word sequence exactly. The only exception is
/// a set that has been through `WordSetPartitioner::invert`, which reverses
/// group order for qualifier-role matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSet {
    /// Each group is the space-joined run of words it covers.
    pub groups: Vec<String>,
}

impl WordSet {
    pub fn new(groups: Vec<String>) -> Self {
        WordSet { groups }
    }

    /// Number of groups in this set.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A phrase after tokenization, with its candidate word sets attached.
///
/// Produced by `Tokenizer::extract_tokens`; the input [`Phrase`] itself is
/// never mutated. An empty phrase owns zero word sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedPhrase {
    pub kind: PhraseKind,
    /// The phrase text the pipeline actually processed (the legacy backend
    /// may have rewritten a colliding two-letter phrase).
    pub text: String,
    /// Canonicalized form used for all vocabulary lookups.
    pub normalized: String,
    /// Candidate groupings, coarsest first, every group vocabulary-backed.
    pub word_sets: Vec<WordSet>,
}
