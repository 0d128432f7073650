// ABOUTME: Criterion benchmarks for meal plan generation and candidate normalization
// ABOUTME: Measures daily and weekly catalog plans, plan repair, and goal computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the planning engine.
//!
//! Seeded generators keep runs comparable across machines.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use diet_core::models::GoalInputs;
use diet_intelligence::config::{GoalConfig, MealAllocationConfig, NormalizerConfig, PlanGeneratorConfig};
use diet_intelligence::{compute_goals, generate_daily, generate_weekly, normalize, RecipeCatalog};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

const DIETS: [&str; 5] = ["Vegan", "Non-Veg", "Vegetarian", "Gluten-Free", "Keto"];

fn bench_plan_generation(c: &mut Criterion) {
    let Ok(catalog) = RecipeCatalog::embedded() else {
        return;
    };
    let config = PlanGeneratorConfig::default();
    let mut group = c.benchmark_group("plan_generation");

    for diet in DIETS {
        group.bench_with_input(BenchmarkId::new("daily", diet), &diet, |b, diet| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                black_box(generate_daily(
                    &catalog,
                    black_box(diet),
                    1800,
                    &config,
                    &mut rng,
                ))
            });
        });
    }

    group.bench_function("weekly", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| black_box(generate_weekly(&catalog, "Vegan", 2000, &config, &mut rng)));
    });

    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let allocation = MealAllocationConfig::default();
    let normalizer = NormalizerConfig::default();
    let well_formed = json!({
        "breakfast": {"name": "Tofu Scramble", "calories": 420},
        "lunch": {"name": "Lentil Soup", "calories": "600"},
        "dinner": {"name": "Veggie Curry", "calories": 650},
        "snacks": [{"name": "Apple", "calories": 95}, {"name": "Almonds", "calories": 160}]
    });
    let garbage = json!({"breakfast": "eggs", "lunch": {"calories": true}, "snacks": "chips"});

    let mut group = c.benchmark_group("normalization");
    group.bench_function("well_formed", |b| {
        b.iter(|| black_box(normalize(Some(&well_formed), 1800, &allocation, &normalizer)));
    });
    group.bench_function("garbage", |b| {
        b.iter(|| black_box(normalize(Some(&garbage), 1800, &allocation, &normalizer)));
    });
    group.bench_function("missing", |b| {
        b.iter(|| black_box(normalize(None, black_box(1800), &allocation, &normalizer)));
    });
    group.finish();
}

fn bench_goals(c: &mut Criterion) {
    let config = GoalConfig::default();
    let inputs = GoalInputs::from_json(&json!({
        "gender": "male",
        "age": 30,
        "heightCm": 180,
        "weightKg": 80,
        "activity": 1.55,
        "dietPreference": "Keto"
    }));

    c.bench_function("compute_goals", |b| {
        b.iter(|| black_box(compute_goals(black_box(&inputs), &config)));
    });
}

criterion_group!(benches, bench_plan_generation, bench_normalization, bench_goals);
criterion_main!(benches);
