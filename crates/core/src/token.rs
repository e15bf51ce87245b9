//! Typed token interpretations
//!
//! A vocabulary match resolves a token string to one of a closed set of
//! variants. Classification is a single exhaustive match over the store
//! row's discriminator; each variant carries only the fields it needs.

use serde::{Deserialize, Serialize};

/// How a special term combines with the rest of the query downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialOperator {
    /// Plain classification term ("pub birmingham").
    None,
    /// Proximity-bound term ("pub near the station").
    Near,
    /// Explicit type filter from a structured amenity field.
    Type,
}

/// A resolved interpretation of one token string.
///
/// A single token string may resolve to several variants at once ("10" can
/// be a house number and part of a postcode); ambiguity is preserved in the
/// catalog and the ranking engine chooses among the variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A recognized full word (boundary sentinel present in the store).
    Word {
        /// Corpus frequency of the word.
        frequency: u64,
        /// Number of word boundaries the stored token spans.
        word_count: u32,
    },
    /// A recognized fragment, usable only inside a longer match.
    Partial { frequency: u64 },
    /// Token resolves to an ISO country code.
    Country { code: String },
    /// Token is a normalized house number.
    HouseNumber { number: String },
    /// Token is a postcode, optionally hinted to a country.
    Postcode {
        postcode: String,
        country_hint: Option<String>,
    },
    /// A classification term: amenity class/type pair plus operator.
    Special {
        class: String,
        kind: String,
        operator: SpecialOperator,
    },
}

impl Token {
    /// Corpus frequency, for the variants that carry one.
    pub fn frequency(&self) -> Option<u64> {
        match self {
            Token::Word { frequency, .. } | Token::Partial { frequency } => Some(*frequency),
            _ => None,
        }
    }
}
