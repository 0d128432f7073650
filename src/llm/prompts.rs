// ABOUTME: Prompt builders for AI meal plans and AI goal suggestions
// ABOUTME: Each prompt carries a random variety hint and a request id so repeated calls differ
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use diet_core::models::Gender;
use diet_intelligence::goal_calculator::ResolvedInputs;
use diet_intelligence::selection::pick_one;
use diet_intelligence::EntropySource;
use uuid::Uuid;

/// Variety hints appended to meal plan prompts
pub const PLAN_HINTS: [&str; 10] = [
    "Be creative and suggest unique, interesting meal combinations.",
    "Focus on seasonal and fresh ingredients.",
    "Include international cuisine influences.",
    "Suggest comfort food options.",
    "Emphasize protein-rich options.",
    "Include colorful, nutrient-dense meals.",
    "Suggest quick and easy preparation methods.",
    "Focus on whole, unprocessed foods.",
    "Include traditional and modern cooking styles.",
    "Emphasize balanced macronutrients.",
];

/// Variety hints appended to goal prompts
pub const GOAL_HINTS: [&str; 10] = [
    "Consider sustainable weight management approach.",
    "Focus on healthy lifestyle changes.",
    "Emphasize gradual, maintainable progress.",
    "Consider individual metabolic factors.",
    "Focus on body composition improvements.",
    "Consider long-term health benefits.",
    "Emphasize balanced nutrition approach.",
    "Consider activity level and lifestyle.",
    "Focus on realistic, achievable goals.",
    "Consider individual preferences and constraints.",
];

const PLAN_SHAPE: &str = r#"{"breakfast":{"name":"...","calories":123},"lunch":{"name":"...","calories":456},"dinner":{"name":"...","calories":789},"snacks":[{"name":"...","calories":120}] }"#;

/// Inputs that shape a meal plan prompt
#[derive(Debug, Clone, Copy)]
pub struct PlanPrompt<'a> {
    /// Diet preference, passed through verbatim
    pub diet_preference: &'a str,
    /// Daily calorie limit, already clamped
    pub calorie_limit: u32,
    /// Optional BMI context
    pub bmi: Option<f64>,
    /// Optional goal weight context in kg
    pub goal_weight_kg: Option<f64>,
}

/// Inputs that shape a goal prompt
#[derive(Debug, Clone, Copy)]
pub struct GoalPrompt<'a> {
    /// Biometrics after defaults were applied
    pub inputs: ResolvedInputs,
    /// Diet preference
    pub diet_preference: &'a str,
    /// Optional BMI context
    pub bmi: Option<f64>,
}

fn hint<E: EntropySource + ?Sized>(hints: &[&'static str], entropy: &mut E) -> &'static str {
    pick_one(hints, entropy).copied().unwrap_or_default()
}

fn known(value: Option<f64>) -> String {
    value.map_or_else(|| "unknown".to_owned(), |v| v.to_string())
}

/// Build the one-day meal plan prompt
pub fn meal_plan_prompt<E>(request: &PlanPrompt<'_>, entropy: &mut E) -> String
where
    E: EntropySource + ?Sized,
{
    [
        "You are a creative nutrition planner. Generate a unique one-day meal plan as strict JSON.".to_owned(),
        "Return ONLY JSON, no prose, in this exact shape:".to_owned(),
        PLAN_SHAPE.to_owned(),
        "Rules:".to_owned(),
        format!(
            "- Diet preference: {}. Respect it strictly.",
            request.diet_preference
        ),
        format!("- Target calories (daily): {}.", request.calorie_limit),
        "- Calorie allocation guideline: 25-30% breakfast, 30-35% lunch, 25-30% dinner, 10-15% snacks.".to_owned(),
        format!("- BMI (if helpful): {}.", known(request.bmi)),
        format!("- Goal weight (kg, if provided): {}.", known(request.goal_weight_kg)),
        "- Names should be concise real foods. Calories are integers. No macros required.".to_owned(),
        format!("- {}", hint(&PLAN_HINTS, entropy)),
        format!("- Request ID: {} (ensure variety)", Uuid::new_v4()),
    ]
    .join("\n")
}

/// Build the goal weight and daily calories prompt
pub fn goal_prompt<E>(request: &GoalPrompt<'_>, entropy: &mut E) -> String
where
    E: EntropySource + ?Sized,
{
    let gender = match request.inputs.gender {
        Gender::Male => "male",
        Gender::Female => "female",
    };
    let inputs = &request.inputs;

    [
        "You are an experienced nutrition coach. Suggest personalized goal weight and daily calories.".to_owned(),
        r#"Return ONLY JSON with this exact shape: {"goalWeight": 65, "dailyCalories": 1850}"#.to_owned(),
        "Rules:".to_owned(),
        format!(
            "- Inputs: gender={gender}, age={}, height_cm={}, weight_kg={}, activity={}, diet={}, bmi={}.",
            inputs.age_years,
            inputs.height_cm,
            inputs.weight_kg,
            inputs.activity_multiplier,
            request.diet_preference,
            known(request.bmi)
        ),
        "- Goal weight should correspond to a healthy BMI range (roughly 20-24.9), rounded to whole kg.".to_owned(),
        "- Daily calories should be a realistic maintenance or mild-deficit value (1000-3500 range), integer only.".to_owned(),
        format!("- {}", hint(&GOAL_HINTS, entropy)),
        format!("- Request ID: {} (ensure variety)", Uuid::new_v4()),
        "- No text besides JSON.".to_owned(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use diet_intelligence::SequenceEntropy;

    #[test]
    fn test_meal_plan_prompt_carries_request_context() {
        let prompt = meal_plan_prompt(
            &PlanPrompt {
                diet_preference: "Keto",
                calorie_limit: 2100,
                bmi: Some(23.5),
                goal_weight_kg: None,
            },
            &mut SequenceEntropy::zeros(),
        );

        assert!(prompt.contains("- Diet preference: Keto. Respect it strictly."));
        assert!(prompt.contains("- Target calories (daily): 2100."));
        assert!(prompt.contains("- BMI (if helpful): 23.5."));
        assert!(prompt.contains("- Goal weight (kg, if provided): unknown."));
        assert!(prompt.contains(PLAN_HINTS[0]));
        assert!(prompt.contains("Request ID: "));
    }

    #[test]
    fn test_goal_prompt_uses_selected_hint() {
        let inputs = ResolvedInputs {
            gender: Gender::Male,
            age_years: 30.0,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_multiplier: 1.55,
        };
        let prompt = goal_prompt(
            &GoalPrompt {
                inputs,
                diet_preference: "Vegan",
                bmi: None,
            },
            &mut SequenceEntropy::new(vec![0.95]),
        );

        assert!(prompt.contains("gender=male, age=30, height_cm=180, weight_kg=80, activity=1.55, diet=Vegan, bmi=unknown."));
        assert!(prompt.contains(GOAL_HINTS[9]));
        assert!(prompt.ends_with("- No text besides JSON."));
    }

    #[test]
    fn test_request_ids_differ_between_prompts() {
        let request = PlanPrompt {
            diet_preference: "Vegan",
            calorie_limit: 1800,
            bmi: None,
            goal_weight_kg: None,
        };
        let first = meal_plan_prompt(&request, &mut SequenceEntropy::zeros());
        let second = meal_plan_prompt(&request, &mut SequenceEntropy::zeros());
        assert_ne!(first, second);
    }
}
