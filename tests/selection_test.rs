// ABOUTME: Integration tests for the random selection policy
// ABOUTME: Checks distinctness, truncation, and rough uniformity with seeded generators
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use diet_intelligence::selection::pick_one;
use diet_intelligence::{pick, SequenceEntropy};
use std::collections::HashSet;

#[test]
fn test_pick_returns_distinct_entries() {
    let bucket: Vec<u32> = (0..10).collect();
    let mut rng = common::seeded_rng(7);

    for _ in 0..200 {
        let picked = pick(&bucket, 4, &mut rng);
        assert_eq!(picked.len(), 4);
        let unique: HashSet<&u32> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 4, "picks must not repeat: {picked:?}");
    }
}

#[test]
fn test_pick_truncates_to_bucket_size() {
    let bucket = ["only"];
    let picked = pick(&bucket, 2, &mut common::seeded_rng(1));
    assert_eq!(picked, vec![&"only"]);

    let picked = pick(&["a", "b", "c"], 10, &mut common::seeded_rng(2));
    assert_eq!(picked.len(), 3);
}

#[test]
fn test_pick_from_empty_or_zero_count() {
    let empty: [u8; 0] = [];
    assert!(pick(&empty, 3, &mut common::seeded_rng(3)).is_empty());
    assert!(pick(&[1, 2, 3], 0, &mut common::seeded_rng(3)).is_empty());
}

#[test]
fn test_pick_is_reproducible_with_same_seed() {
    let bucket: Vec<u32> = (0..20).collect();
    let first = pick(&bucket, 5, &mut common::seeded_rng(42));
    let second = pick(&bucket, 5, &mut common::seeded_rng(42));
    assert_eq!(first, second);
}

#[test]
fn test_pick_covers_every_entry_over_many_draws() {
    let bucket = [0_usize, 1, 2, 3];
    let mut counts = [0_u32; 4];
    let mut rng = common::seeded_rng(99);

    for _ in 0..4000 {
        let picked = pick(&bucket, 1, &mut rng);
        counts[*picked[0]] += 1;
    }

    for (index, count) in counts.iter().enumerate() {
        assert!(
            (700..=1300).contains(count),
            "entry {index} drawn {count} times out of 4000"
        );
    }
}

#[test]
fn test_sequence_entropy_drives_fisher_yates() {
    let bucket = ["a", "b", "c", "d"];
    // First draw picks index 3 of 4, second index 0 of the remaining 3.
    let mut entropy = SequenceEntropy::new(vec![0.9, 0.0]);
    assert_eq!(pick(&bucket, 2, &mut entropy), vec![&"d", &"b"]);
}

#[test]
fn test_pick_one_with_seeded_rng_stays_in_bucket() {
    let bucket = ["x", "y", "z"];
    let mut rng = common::seeded_rng(5);
    for _ in 0..50 {
        assert!(bucket.contains(pick_one(&bucket, &mut rng).unwrap()));
    }
}
