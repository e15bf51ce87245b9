//! Full extract_tokens scenarios

use crate::test_utils::{both_backends, fixture_store, FailingStore};
use gazetteer::{
    build_tokenizer, MemoryVocabulary, Phrase, PhraseKind, QueryConfig, QueryError, Token,
    WordSet,
};
use std::sync::Arc;

#[test]
fn test_house_number_scenario() {
    // "10 downing street": "street" is a known word, "downing" a known
    // fragment, "10" is nothing — and resolves through the fallback.
    let store = Arc::new(MemoryVocabulary::new());
    store.add_word("street", 120).add_partial("downing", 8);

    for tokenizer in both_backends(store) {
        let phrases = [Phrase::new(PhraseKind::Freeform, "10 Downing Street")];
        let result = tokenizer.extract_tokens(&phrases).unwrap();

        assert_eq!(result.catalog.count(), 3, "backend {}", tokenizer.name());
        assert_eq!(
            result.catalog.get("10"),
            &[Token::HouseNumber { number: "10".into() }]
        );
        assert!(matches!(result.catalog.get("downing"), [Token::Partial { .. }]));
        assert!(matches!(result.catalog.get(" street"), [Token::Word { .. }]));

        let expected = WordSet::new(vec!["10".into(), "downing".into(), "street".into()]);
        assert!(
            result.phrases[0].word_sets.contains(&expected),
            "missing {:?} in {:?}",
            expected,
            result.phrases[0].word_sets
        );
    }
}

#[test]
fn test_zip_plus_four_fallback() {
    for tokenizer in both_backends(fixture_store()) {
        let phrases = [Phrase::new(PhraseKind::Freeform, "12345 6789")];
        let result = tokenizer.extract_tokens(&phrases).unwrap();

        // The merged group resolves as a postcode using the 5-digit prefix;
        // the individual digit runs remain plain house numbers.
        assert_eq!(
            result.catalog.get("12345 6789"),
            &[Token::Postcode { postcode: "12345".into(), country_hint: None }]
        );
        assert_eq!(
            result.catalog.get("12345"),
            &[Token::HouseNumber { number: "12345".into() }]
        );
        assert_eq!(result.catalog.count(), 3);

        // Coarsest interpretation first.
        let sets = &result.phrases[0].word_sets;
        assert_eq!(sets[0].groups, vec!["12345 6789".to_string()]);
        assert_eq!(sets[1].groups, vec!["12345".to_string(), "6789".to_string()]);
    }
}

#[test]
fn test_vocabulary_match_wins_over_fallback() {
    let store = Arc::new(MemoryVocabulary::new());
    store.add_word("42", 17);

    for tokenizer in both_backends(store) {
        let result = tokenizer
            .extract_tokens(&[Phrase::new(PhraseKind::Freeform, "42")])
            .unwrap();

        // The full-word row answers; the numeric heuristic stays silent.
        assert!(matches!(result.catalog.get(" 42"), [Token::Word { .. }]));
        assert!(result.catalog.get("42").is_empty());
        assert_eq!(result.catalog.count(), 1);
    }
}

#[test]
fn test_postcode_and_country_rows_resolve() {
    for tokenizer in both_backends(fixture_store()) {
        let phrases = [Phrase::new(PhraseKind::Freeform, "SW1A 2AA, United Kingdom")];
        let split = Phrase::split_query(&phrases[0].text);
        let result = tokenizer.extract_tokens(&split).unwrap();

        assert_eq!(
            result.catalog.get(" sw1a 2aa"),
            &[Token::Postcode { postcode: "sw1a 2aa".into(), country_hint: Some("gb".into()) }]
        );
        assert_eq!(
            result.catalog.get(" united kingdom"),
            &[Token::Country { code: "gb".into() }]
        );
    }
}

#[test]
fn test_ambiguous_token_keeps_all_variants() {
    let store = Arc::new(MemoryVocabulary::new());
    store.add_word("bath", 300);
    store.add_country("bath", "gb");

    for tokenizer in both_backends(store) {
        let result = tokenizer
            .extract_tokens(&[Phrase::new(PhraseKind::Freeform, "Bath")])
            .unwrap();

        let tokens = result.catalog.get(" bath");
        assert_eq!(tokens.len(), 2, "ambiguity must be preserved");
        assert!(matches!(tokens[0], Token::Word { .. }));
        assert!(matches!(tokens[1], Token::Country { .. }));
    }
}

#[test]
fn test_qualifier_phrase_word_sets_inverted() {
    let store = Arc::new(MemoryVocabulary::new());
    store
        .add_word("tea rooms", 25)
        .add_word("tea", 60)
        .add_word("rooms", 40)
        .add_word("york", 200);

    for tokenizer in both_backends(store) {
        let phrases = [
            Phrase::new(PhraseKind::Amenity, "tea rooms"),
            Phrase::new(PhraseKind::City, "york"),
        ];
        let result = tokenizer.extract_tokens(&phrases).unwrap();

        // Amenity sets lead with the trailing group once split.
        let amenity = &result.phrases[0].word_sets;
        assert_eq!(amenity[0].groups, vec!["tea rooms".to_string()]);
        assert_eq!(amenity[1].groups, vec!["rooms".to_string(), "tea".to_string()]);

        // The subject phrase keeps natural order.
        let city = &result.phrases[1].word_sets;
        assert_eq!(city[0].groups, vec!["york".to_string()]);
    }
}

#[test]
fn test_round_trip_determinism() {
    for tokenizer in both_backends(fixture_store()) {
        let phrases = Phrase::split_query("10 Downing Street, London");

        let first = tokenizer.extract_tokens(&phrases).unwrap();
        let second = tokenizer.extract_tokens(&phrases).unwrap();

        assert_eq!(first.catalog.count(), second.catalog.count());
        let mut keys: Vec<&str> = first.catalog.iter().map(|(k, _)| k).collect();
        keys.sort_unstable();
        for key in keys {
            assert_eq!(first.catalog.get(key), second.catalog.get(key), "key {key:?}");
        }

        let first_sets: Vec<_> = first.phrases.iter().map(|p| &p.word_sets).collect();
        let second_sets: Vec<_> = second.phrases.iter().map(|p| &p.word_sets).collect();
        assert_eq!(first_sets, second_sets);
    }
}

#[test]
fn test_empty_query() {
    for tokenizer in both_backends(fixture_store()) {
        let result = tokenizer.extract_tokens(&[]).unwrap();
        assert!(result.phrases.is_empty());
        assert_eq!(result.catalog.count(), 0);
    }
}

#[test]
fn test_store_failure_propagates() {
    let config = QueryConfig::default();
    let tokenizer = build_tokenizer(&config, Arc::new(FailingStore)).unwrap();
    let err = tokenizer
        .extract_tokens(&[Phrase::new(PhraseKind::Freeform, "london")])
        .unwrap_err();
    assert!(matches!(err, QueryError::QueryFailed(_)));
}
