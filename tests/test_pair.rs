extern crate pair;
extern crate rand;
extern crate serde_test;

use pair::Pair;
use rand::{thread_rng, Rng};
use serde_test::{assert_tokens, Token};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sorted_pairs() -> Vec<Pair<&'static str, &'static str>> {
    vec![
        Pair::new("A", "2"),
        Pair::new("B", "2"),
        Pair::new("B", "3"),
        Pair::new("C", "1"),
        Pair::of_nullable(Some("C"), None),
        Pair::of_nullable(Some("D"), None),
        Pair::of_nullable(None, Some("1")),
        Pair::of_nullable(None, Some("2")),
        Pair::of_nullable(None, None),
    ]
}

#[test]
fn test_sort_by_key_then_value() {
    let first = Pair::new("A", "2");
    let second = Pair::new("B", "2");
    let third = Pair::new("B", "3");
    let fourth = Pair::new("C", "1");

    let mut pairs = vec![second, third, fourth, first];
    pairs.sort();

    assert_eq!(pairs, vec![first, second, third, fourth]);
}

#[test]
fn test_sort_all_presence_states() {
    let expected = sorted_pairs();
    // B, C, D, A, F, G, E, I, H
    let order = [1, 2, 3, 0, 5, 6, 4, 8, 7];
    let mut pairs: Vec<_> = order.iter().map(|&index| expected[index]).collect();

    pairs.sort();
    assert_eq!(pairs, expected);
}

#[test]
fn test_sort_by_compare_to() {
    let expected = sorted_pairs();
    let order = [1, 2, 3, 0, 5, 6, 4, 8, 7];
    let mut pairs: Vec<_> = order.iter().map(|&index| expected[index]).collect();

    pairs.sort_by(|a, b| a.compare_to(b));
    assert_eq!(pairs, expected);
}

#[test]
fn test_sort_shuffled_is_deterministic() {
    let expected = sorted_pairs();
    let mut rng = thread_rng();
    for _ in 0..100 {
        let mut pairs = expected.clone();
        rng.shuffle(&mut pairs);
        pairs.sort();
        assert_eq!(pairs, expected);
    }
}

#[test]
fn test_random_pairs_sort_consistently() {
    let mut rng = thread_rng();
    let mut pairs = Vec::new();
    for _ in 0..1000 {
        let key = if rng.gen() { Some(rng.gen_range(0, 10)) } else { None };
        let value = if rng.gen() { Some(rng.gen_range(0, 10)) } else { None };
        pairs.push(Pair::<u32, u32>::of_nullable(key, value));
    }
    pairs.sort();

    for window in pairs.windows(2) {
        assert!(window[0] <= window[1]);
        match (window[0].get_key(), window[1].get_key()) {
            (Some(a), Some(b)) => assert!(a <= b),
            (None, Some(_)) => panic!("Expected absent keys to sort last."),
            _ => {},
        }
    }
    if let Some(position) = pairs.iter().position(|pair| pair.is_empty()) {
        assert!(pairs[position..].iter().all(|pair| pair.is_empty()));
    }
}

#[test]
fn test_eq_and_hash() {
    let cases = [
        (Some("k"), Some("v")),
        (Some("k"), None),
        (None, Some("v")),
        (None, None),
    ];
    for &(key, value) in &cases {
        let a = Pair::of_nullable(key, value);
        let b = Pair::of_nullable(key, value);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    let set: HashSet<_> = cases
        .iter()
        .map(|&(key, value)| Pair::of_nullable(key, value))
        .collect();
    assert_eq!(set.len(), cases.len());
}

#[test]
fn test_strict_factory() {
    assert!(Pair::of(Some(1), Some(2)).unwrap().is_complete());
    assert!(Pair::<u32, u32>::of(None, Some(2)).is_err());
    assert!(Pair::<u32, u32>::of(Some(1), None).is_err());
    assert_eq!(
        Pair::<u32, u32>::of(Some(1), None).unwrap_err().to_string(),
        "invalid argument: value must not be absent",
    );
}

#[test]
fn test_map_entry_preserves_fields() {
    for pair in sorted_pairs() {
        let entry = pair.to_map_entry();
        assert_eq!(entry.key.as_ref(), pair.get_key());
        assert_eq!(entry.value.as_ref(), pair.get_value());
    }
}

#[test]
fn test_ser_de_complete() {
    let pair = Pair::new(String::from("aKey"), String::from("aValue"));
    assert_tokens(
        &pair,
        &[
            Token::Struct { name: "Pair", len: 2 },
            Token::Str("key"),
            Token::Some,
            Token::Str("aKey"),
            Token::Str("value"),
            Token::Some,
            Token::Str("aValue"),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_ser_de_incomplete() {
    let pair: Pair<String, String> = Pair::of_nullable(None, Some(String::from("aValue")));
    assert_tokens(
        &pair,
        &[
            Token::Struct { name: "Pair", len: 2 },
            Token::Str("key"),
            Token::None,
            Token::Str("value"),
            Token::Some,
            Token::Str("aValue"),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_bytes_round_trip_all_presence_states() {
    for pair in sorted_pairs() {
        let owned: Pair<String, String> = Pair::of_nullable(
            pair.get_key().map(|key| key.to_string()),
            pair.get_value().map(|value| value.to_string()),
        );
        let bytes = owned.to_bytes().unwrap();
        assert_eq!(Pair::from_bytes(&bytes).unwrap(), owned);
    }
}
