//! Nutrition service for meal logging and daily aggregates

use fitness_tracker_shared::{IdSequence, Macros, Meal, MealSuggestion, TrackerError};
use std::collections::BTreeSet;
use tracing::debug;

/// Fixed suggestion catalog; order breaks ties in `suggest_meal`
const MEAL_CATALOG: [MealSuggestion; 3] = [
    MealSuggestion {
        meal_name: "Grilled Chicken Salad",
        calories: 350.0,
    },
    MealSuggestion {
        meal_name: "Veggie Wrap",
        calories: 300.0,
    },
    MealSuggestion {
        meal_name: "Protein Smoothie",
        calories: 250.0,
    },
];

/// Ingredients needed per catalog meal
const GROCERY_ITEMS: &[(&str, &[&str])] = &[
    (
        "Grilled Chicken Salad",
        &["chicken breast", "lettuce", "tomatoes", "cucumber"],
    ),
    (
        "Veggie Wrap",
        &["tortilla", "spinach", "bell peppers", "hummus"],
    ),
    (
        "Protein Smoothie",
        &["protein powder", "banana", "almond milk"],
    ),
];

/// In-memory meal log for the day
#[derive(Debug, Default)]
pub struct NutritionTracker {
    meals: Vec<Meal>,
    ids: IdSequence,
    daily_calorie_goal: f64,
}

impl NutritionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker starting with a daily calorie goal already set
    pub fn with_calorie_goal(daily_calorie_goal: f64) -> Self {
        Self {
            daily_calorie_goal,
            ..Self::default()
        }
    }

    pub fn add_meal(&mut self, meal_name: impl Into<String>, calories: f64, macros: Macros) -> Meal {
        let meal = Meal {
            id: self.ids.next_id(),
            meal_name: meal_name.into(),
            calories,
            macros,
        };
        debug!(id = meal.id, meal = %meal.meal_name, calories, "Meal added");
        self.meals.push(meal.clone());
        meal
    }

    /// Remove a meal by id; unknown ids yield `NotFound` and change nothing
    pub fn remove_meal(&mut self, meal_id: u64) -> Result<Meal, TrackerError> {
        let index = self
            .meals
            .iter()
            .position(|m| m.id == meal_id)
            .ok_or_else(|| TrackerError::NotFound(format!("meal {}", meal_id)))?;
        debug!(id = meal_id, "Meal removed");
        Ok(self.meals.remove(index))
    }

    pub fn view_daily_meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn calculate_daily_calories(&self) -> f64 {
        self.meals.iter().map(|m| m.calories).sum()
    }

    /// Field-wise macro totals across all meals
    pub fn track_macronutrients(&self) -> Macros {
        self.meals.iter().map(|m| &m.macros).sum()
    }

    /// Catalog meal closest to `target_calories`
    pub fn suggest_meal(&self, target_calories: f64) -> MealSuggestion {
        let mut best = MEAL_CATALOG[0];
        for candidate in &MEAL_CATALOG[1..] {
            if (candidate.calories - target_calories).abs() < (best.calories - target_calories).abs() {
                best = *candidate;
            }
        }
        best
    }

    pub fn set_daily_calorie_goal(&mut self, calorie_goal: f64) {
        self.daily_calorie_goal = calorie_goal;
    }

    pub fn daily_calorie_goal(&self) -> f64 {
        self.daily_calorie_goal
    }

    /// Goal minus consumed; negative once over the goal
    pub fn get_remaining_calories(&self) -> f64 {
        self.daily_calorie_goal - self.calculate_daily_calories()
    }

    /// Union of ingredients for the named meals; unknown names are skipped
    pub fn generate_grocery_list<S: AsRef<str>>(&self, meal_plan: &[S]) -> BTreeSet<&'static str> {
        meal_plan
            .iter()
            .filter_map(|name| {
                GROCERY_ITEMS
                    .iter()
                    .find(|(meal, _)| *meal == name.as_ref())
                    .map(|(_, items)| *items)
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Clear all meals and restart ids at 1; the calorie goal is kept
    pub fn reset_tracker(&mut self) {
        self.meals.clear();
        self.ids.reset();
        debug!("Nutrition tracker reset");
    }
}
