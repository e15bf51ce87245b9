//! Word-set enumeration contracts through the public API

use gazetteer::{AlwaysMatch, WordSet, WordSetPartitioner};
use std::collections::HashSet;

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

#[test]
fn test_completeness_bound_small_phrases() {
    let partitioner = WordSetPartitioner::new(WordSetPartitioner::DEFAULT_MAX_SETS);
    for n in 1..=4usize {
        let input: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        let sets = partitioner.partition(&input, &AlwaysMatch);
        assert_eq!(sets.len(), 1 << (n - 1), "n = {n}");
    }
}

#[test]
fn test_cap_monotonicity() {
    // Growing the phrase never grows the output past the cap.
    let partitioner = WordSetPartitioner::new(100);
    let mut previous = 0;
    for n in 1..=18usize {
        let input: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        let count = partitioner.partition(&input, &AlwaysMatch).len();
        assert!(count <= 100, "n = {n} produced {count}");
        assert!(count >= previous, "count dropped at n = {n}");
        previous = count;
    }
    // At 18 words the enumeration saturates exactly at the cap.
    assert_eq!(previous, 100);
}

#[test]
fn test_pruning_reference_vector() {
    let known: HashSet<&str> = ["a", "b", "d", "b c", "b c d"].into();
    let membership = |term: &str| known.contains(term);

    let partitioner = WordSetPartitioner::new(100);
    let sets = partitioner.partition(&words("a b c d"), &membership);

    assert_eq!(
        sets,
        vec![
            WordSet::new(vec!["a".into(), "b c d".into()]),
            WordSet::new(vec!["a".into(), "b c".into(), "d".into()]),
        ]
    );

    // Nothing containing an unrecognized group survives.
    for set in &sets {
        for group in &set.groups {
            assert!(known.contains(group.as_str()), "unknown group {group:?}");
        }
    }
}

#[test]
fn test_invert_prioritizes_trailing_group() {
    let partitioner = WordSetPartitioner::new(100);
    let mut sets = partitioner.partition(&words("tea rooms"), &AlwaysMatch);
    WordSetPartitioner::invert(&mut sets);

    // Fully merged set unaffected; split set leads with the last group.
    assert_eq!(sets[0].groups, vec!["tea rooms".to_string()]);
    assert_eq!(sets[1].groups, vec!["rooms".to_string(), "tea".to_string()]);
}
