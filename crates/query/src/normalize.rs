//! Unicode-aware text canonicalization
//!
//! Every vocabulary lookup key goes through one of two normalization
//! primitives:
//! - [`RuleNormalizer`]: a declarative transliteration rule set applied on
//!   top of the shared fold (the ICU-style backend's primitive)
//! - [`AsciiFoldNormalizer`]: the fixed fold alone (the legacy backend's
//!   primitive)
//!
//! The shared fold: NFD decomposition, combining-mark removal, lowercasing,
//! punctuation to spaces, whitespace collapsing. Both primitives are
//! stateless after construction and safe for concurrent use.

use gazetteer_core::error::{QueryError, Result};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes query text before lookup.
///
/// Implementations must be thread-safe: one normalizer instance is shared
/// across concurrent requests.
pub trait Normalizer: Send + Sync {
    fn transliterate(&self, text: &str) -> String;
}

/// Decompose, strip accents, lowercase, map punctuation to spaces and
/// collapse runs of whitespace.
pub(crate) fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    collapse_whitespace(&out)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Transliterations the plain NFD fold cannot reach: ligatures and letters
/// without a canonical decomposition. Lowercase, since rules apply after
/// the fold.
const DEFAULT_RULES: &str = "\
    ß > ss; æ > ae; œ > oe; ø > o; đ > d; ð > d; þ > th; ł > l; ŋ > n; ı > i";

/// Rule-driven normalizer built from a declarative rule set at startup.
///
/// Rule syntax: `source > target` pairs separated by `;`, with `#` line
/// comments. Rules are substring replacements applied in order after the
/// shared fold.
///
/// # Example
///
/// ```
/// use gazetteer_query::normalize::{Normalizer, RuleNormalizer};
///
/// let normalizer = RuleNormalizer::parse("ß > ss").unwrap();
/// assert_eq!(normalizer.transliterate("Straße"), "strasse");
/// ```
#[derive(Debug, Clone)]
pub struct RuleNormalizer {
    rules: Vec<(String, String)>,
}

impl RuleNormalizer {
    /// Parse a rule set. A malformed rule means the normalization module
    /// cannot be constructed and the backend must not come up.
    pub fn parse(rules: &str) -> Result<Self> {
        let mut parsed = Vec::new();
        for raw in rules.split(';') {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (source, target) = line.split_once('>').ok_or_else(|| {
                QueryError::ModuleUnavailable(format!("malformed transliteration rule: {line:?}"))
            })?;
            let source = source.trim();
            if source.is_empty() {
                return Err(QueryError::ModuleUnavailable(format!(
                    "transliteration rule with empty source: {line:?}"
                )));
            }
            parsed.push((source.to_string(), target.trim().to_string()));
        }
        Ok(RuleNormalizer { rules: parsed })
    }

    /// Normalizer with the built-in rule set.
    pub fn with_default_rules() -> Result<Self> {
        Self::parse(DEFAULT_RULES)
    }
}

impl Normalizer for RuleNormalizer {
    fn transliterate(&self, text: &str) -> String {
        let mut folded = fold(text);
        for (source, target) in &self.rules {
            if folded.contains(source.as_str()) {
                folded = folded.replace(source.as_str(), target);
            }
        }
        folded
    }
}

/// Fixed fold with no rule table. The legacy backend's primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFoldNormalizer;

impl Normalizer for AsciiFoldNormalizer {
    fn transliterate(&self, text: &str) -> String {
        fold(text)
    }
}
