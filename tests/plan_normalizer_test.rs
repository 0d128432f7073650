// ABOUTME: Integration tests for candidate plan repair and local fallback plans
// ABOUTME: Arbitrary candidate JSON must always come out as a well-formed plan
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use diet_core::models::{NormalizedPlan, PlanItem};
use diet_intelligence::config::{MealAllocationConfig, NormalizerConfig};
use diet_intelligence::plan_normalizer::accept_calories;
use diet_intelligence::{fallback_plan, normalize, SequenceEntropy};
use serde_json::{json, Value};

fn repair(candidate: Option<&Value>, target: u32) -> NormalizedPlan {
    normalize(
        candidate,
        target,
        &MealAllocationConfig::default(),
        &NormalizerConfig::default(),
    )
}

fn assert_total_is_sum(plan: &NormalizedPlan) {
    let sum = plan.breakfast().calories
        + plan.lunch().calories
        + plan.dinner().calories
        + plan.snacks().iter().map(|snack| snack.calories).sum::<u32>();
    assert_eq!(plan.total_calories(), sum);
}

// ============================================================================
// NORMALIZATION
// ============================================================================

#[test]
fn test_missing_candidate_uses_default_allocation() {
    let plan = repair(None, 1800);

    assert_eq!(
        *plan.breakfast(),
        PlanItem::new("Oatmeal with Berries", 504)
    );
    assert_eq!(
        *plan.lunch(),
        PlanItem::new("Grain Bowl with Beans and Veg", 612)
    );
    assert_eq!(
        *plan.dinner(),
        PlanItem::new("Tofu/Paneer Stir-Fry with Veg", 504)
    );
    assert_eq!(plan.snacks(), &[PlanItem::new("Fruit and Nuts", 180)]);
    assert_eq!(plan.total_calories(), 1800);
}

#[test]
fn test_fields_are_repaired_independently() {
    let candidate = json!({
        "breakfast": {"name": "  Oats  ", "calories": "350.6"},
        "lunch": {"name": "", "calories": 10},
        "dinner": "pizza",
        "snacks": [{"name": "Apple"}, {"calories": 90}]
    });
    let plan = repair(Some(&candidate), 2000);

    assert_eq!(*plan.breakfast(), PlanItem::new("Oats", 351));
    assert_eq!(
        *plan.lunch(),
        PlanItem::new("Grain Bowl with Beans and Veg", 40)
    );
    assert_eq!(
        *plan.dinner(),
        PlanItem::new("Tofu/Paneer Stir-Fry with Veg", 560)
    );
    assert_eq!(
        plan.snacks(),
        &[PlanItem::new("Apple", 200), PlanItem::new("Snack", 90)]
    );
    assert_eq!(plan.total_calories(), 1241);
}

#[test]
fn test_snacks_that_are_not_a_list_become_one_default_snack() {
    for snacks in [json!([]), json!({"name": "Nuts"}), json!("chips"), Value::Null] {
        let candidate = json!({ "snacks": snacks });
        let plan = repair(Some(&candidate), 1500);
        assert_eq!(plan.snacks(), &[PlanItem::new("Fruit and Nuts", 150)]);
    }
}

#[test]
fn test_garbage_candidates_never_fail() {
    let candidates = [
        json!(null),
        json!(42),
        json!("plan"),
        json!([1, 2, 3]),
        json!({"breakfast": {"calories": -500}, "lunch": {"calories": true}}),
        json!({"dinner": {"name": ["x"], "calories": {"kcal": 1}}}),
    ];

    for candidate in &candidates {
        let plan = repair(Some(candidate), 2200);
        assert_total_is_sum(&plan);
        assert!(!plan.breakfast().name.trim().is_empty());
        assert!(plan.breakfast().calories >= 40);
        assert!(!plan.snacks().is_empty());
    }
}

#[test]
fn test_accept_calories_rounds_and_floors() {
    assert_eq!(accept_calories(&json!(212.5), 40), Some(213));
    assert_eq!(accept_calories(&json!("12"), 40), Some(40));
    assert_eq!(accept_calories(&json!(-7), 40), Some(40));
    assert_eq!(accept_calories(&json!("abc"), 40), None);
    assert_eq!(accept_calories(&json!(false), 40), None);
}

#[test]
fn test_normalized_plan_serializes_camel_case() {
    let value = serde_json::to_value(repair(None, 1800)).unwrap();
    assert_eq!(value["totalCalories"], 1800);
    assert_eq!(value["breakfast"]["name"], "Oatmeal with Berries");
    assert!(value.get("remainingCalories").is_none());
}

// ============================================================================
// FALLBACK PLANS
// ============================================================================

fn fallback(diet: &str, limit: u32) -> NormalizedPlan {
    let catalog = common::catalog();
    fallback_plan(
        &catalog,
        diet,
        limit,
        &MealAllocationConfig::default(),
        &NormalizerConfig::default(),
        &mut SequenceEntropy::zeros(),
    )
}

#[test]
fn test_fallback_uses_catalog_names_and_allocation() {
    let plan = fallback("Vegan", 1800);

    assert_eq!(*plan.breakfast(), PlanItem::new("Quinoa Breakfast Bowl", 504));
    assert_eq!(
        *plan.lunch(),
        PlanItem::new("Mediterranean Chickpea Salad", 612)
    );
    assert_eq!(*plan.dinner(), PlanItem::new("Stuffed Bell Peppers", 504));
    assert_eq!(
        plan.snacks(),
        &[PlanItem::new("Hummus with Veggie Sticks", 180)]
    );
    assert_eq!(plan.total_calories(), 1800);
}

#[test]
fn test_fallback_unknown_diet_uses_vegan() {
    let plan = fallback("Paleo", 1800);
    assert_eq!(plan.breakfast().name, "Quinoa Breakfast Bowl");
}

#[test]
fn test_fallback_respects_requested_diet() {
    let plan = fallback("Keto", 1000);
    assert_eq!(*plan.breakfast(), PlanItem::new("Keto Avocado Eggs", 280));
    assert_eq!(plan.snacks(), &[PlanItem::new("Keto Fat Bombs", 100)]);
    assert_eq!(plan.total_calories(), 1000);
}

#[test]
fn test_fallback_floors_tiny_portions() {
    let plan = fallback("Vegan", 100);
    assert_eq!(plan.breakfast().calories, 40);
    assert_eq!(plan.snacks()[0].calories, 40);
    assert_eq!(plan.total_calories(), 160);
}

#[test]
fn test_fallback_with_random_entropy_stays_in_catalog() {
    let catalog = common::catalog();
    let mut rng = common::seeded_rng(31);
    let vegetarian_dinner = "Eggplant Parmesan";

    for _ in 0..25 {
        let plan = fallback_plan(
            &catalog,
            "Vegetarian",
            2000,
            &MealAllocationConfig::default(),
            &NormalizerConfig::default(),
            &mut rng,
        );
        assert_eq!(plan.dinner().name, vegetarian_dinner);
        assert_eq!(plan.snacks().len(), 1);
        assert_total_is_sum(&plan);
    }
}
