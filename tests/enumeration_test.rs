// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the enumerators, checked against the counters.

mod common;

use common::{as_set, assert_valid_enumeration};
use stair_climb::enumerate::MAX_ENUMERATED_STAIRS;
use stair_climb::{
    count_combinations_dp_bottom_up, enumerate_combinations_dp,
    enumerate_combinations_recursive, enumerate_combinations_search, ClimbError, Count,
};

#[test]
fn test_concrete_enumerations() {
    assert_eq!(enumerate_combinations_dp(1).unwrap(), vec![vec![1]]);
    assert_eq!(enumerate_combinations_dp(2).unwrap(), vec![vec![1, 1], vec![2]]);
    assert_eq!(
        enumerate_combinations_dp(3).unwrap(),
        vec![vec![1, 1, 1], vec![2, 1], vec![1, 2], vec![3]]
    );

    let four = enumerate_combinations_dp(4).unwrap();
    assert_eq!(four.len(), 7);
    assert_valid_enumeration(4, &four);
}

#[test]
fn test_enumeration_length_matches_count() {
    for n in 1..=16 {
        let count = count_combinations_dp_bottom_up(n).unwrap();
        let dp = enumerate_combinations_dp(n).unwrap();
        let recursive = enumerate_combinations_recursive(n).unwrap();
        let search = enumerate_combinations_search(n).unwrap();

        assert_eq!(Count::from(dp.len()), count, "n={}", n);
        assert_eq!(Count::from(recursive.len()), count, "n={}", n);
        assert_eq!(Count::from(search.len()), count, "n={}", n);
    }
}

#[test]
fn test_every_combination_is_valid() {
    for n in 1..=14 {
        assert_valid_enumeration(n, &enumerate_combinations_dp(n).unwrap());
        assert_valid_enumeration(n, &enumerate_combinations_recursive(n).unwrap());
        assert_valid_enumeration(n, &enumerate_combinations_search(n).unwrap());
    }
}

#[test]
fn test_enumerators_list_the_same_combinations() {
    for n in 1..=14 {
        let dp = enumerate_combinations_dp(n).unwrap();
        assert_eq!(enumerate_combinations_recursive(n).unwrap(), dp, "n={}", n);
        assert_eq!(as_set(enumerate_combinations_search(n).unwrap()), as_set(dp), "n={}", n);
    }
}

#[test]
fn test_search_order_is_lexicographic() {
    let combinations = enumerate_combinations_search(10).unwrap();
    let mut sorted = combinations.clone();
    sorted.sort();
    assert_eq!(combinations, sorted);
}

#[test]
fn test_invalid_input() {
    assert_eq!(enumerate_combinations_dp(0), Err(ClimbError::NoStairs));
    assert_eq!(enumerate_combinations_recursive(0), Err(ClimbError::NoStairs));
    assert_eq!(enumerate_combinations_search(0), Err(ClimbError::NoStairs));
    for result in [
        enumerate_combinations_dp(MAX_ENUMERATED_STAIRS + 1),
        enumerate_combinations_recursive(MAX_ENUMERATED_STAIRS + 1),
        enumerate_combinations_search(MAX_ENUMERATED_STAIRS + 1),
    ] {
        assert!(matches!(result, Err(ClimbError::TooManyStairs { .. })));
    }
}
