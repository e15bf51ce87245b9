//! Word-set enumeration with membership pruning
//!
//! A phrase's words can be grouped into contiguous runs in `2^(n-1)` ways.
//! The partitioner enumerates these groupings coarsest-first — fewer groups
//! before more groups — under a hard cap, optionally pruning any grouping
//! that contains a candidate the vocabulary does not know. The cap is the
//! sole protection against combinatorial blow-up on pathological phrases
//! and must never be bypassed.

use gazetteer_core::WordSet;

/// Membership oracle: does any known vocabulary entry match this candidate
/// group text?
///
/// The partitioner only sees the literal group text. Callers that need the
/// leading-space boundary sentinel ("this group starts a new word") build
/// it into their closure; see the tokenizer's pruning predicate.
pub trait VocabularyMembership {
    fn matches(&self, term: &str) -> bool;
}

/// Unrestricted membership: every candidate group passes. Used for the
/// discovery pass that collects all candidate strings for the bulk lookup.
pub struct AlwaysMatch;

impl VocabularyMembership for AlwaysMatch {
    fn matches(&self, _term: &str) -> bool {
        true
    }
}

impl<F> VocabularyMembership for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, term: &str) -> bool {
        self(term)
    }
}

/// Enumerates bounded, contiguous partitions of a phrase's word sequence.
///
/// Ordering contract: all k-group partitions are produced before any
/// (k+1)-group partition, and within one group count the first group grows
/// shortest-first. Truncation at the cap therefore drops only the most
/// fragmented interpretations, never the coarse ones that multi-word
/// vocabulary entries match.
#[derive(Debug, Clone)]
pub struct WordSetPartitioner {
    max_sets: usize,
}

impl WordSetPartitioner {
    /// Reference cap; sized so phrases of up to four words always
    /// enumerate exhaustively (`2^3 = 8` partitions).
    pub const DEFAULT_MAX_SETS: usize = 100;

    pub fn new(max_sets: usize) -> Self {
        WordSetPartitioner { max_sets }
    }

    /// Enumerate every contiguous grouping of `words` accepted by
    /// `membership`, coarsest first, up to the configured cap.
    ///
    /// A grouping is emitted only if **every** group in it passes the
    /// membership test; a rejected prefix group kills the whole subtree.
    /// An empty word list yields a single empty set; a non-empty word list
    /// with nothing recognized yields no sets at all. Words are never
    /// reordered, only grouped.
    pub fn partition(
        &self,
        words: &[String],
        membership: &dyn VocabularyMembership,
    ) -> Vec<WordSet> {
        if words.is_empty() {
            return vec![WordSet::new(Vec::new())];
        }

        let mut sets = Vec::new();
        let mut current = Vec::new();
        for group_count in 1..=words.len() {
            if sets.len() >= self.max_sets {
                break;
            }
            self.compose(words, group_count, membership, &mut current, &mut sets);
        }
        sets
    }

    /// Recursively split `words` into exactly `groups_left` groups,
    /// shortest first group first, appending complete groupings to `out`.
    fn compose(
        &self,
        words: &[String],
        groups_left: usize,
        membership: &dyn VocabularyMembership,
        current: &mut Vec<String>,
        out: &mut Vec<WordSet>,
    ) {
        if out.len() >= self.max_sets {
            return;
        }

        if groups_left == 1 {
            let group = words.join(" ");
            if membership.matches(&group) {
                let mut groups = current.clone();
                groups.push(group);
                out.push(WordSet::new(groups));
            }
            return;
        }

        // Leave at least one word for each remaining group.
        let max_len = words.len() - (groups_left - 1);
        for len in 1..=max_len {
            if out.len() >= self.max_sets {
                return;
            }
            let group = words[..len].join(" ");
            if !membership.matches(&group) {
                continue;
            }
            current.push(group);
            self.compose(&words[len..], groups_left - 1, membership, current, out);
            current.pop();
        }
    }

    /// Reorder sets for a qualifier-role phrase ("type of X" / "near X"):
    /// each set's groups are reversed so the trailing group is prioritized
    /// first. The fully-merged single-group set is unaffected.
    pub fn invert(sets: &mut [WordSet]) {
        for set in sets.iter_mut() {
            set.groups.reverse();
        }
    }
}
