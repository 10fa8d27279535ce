//! Data models for the Fitness Tracker

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Per-tracker id generator
///
/// Ids start at 1 and only ever grow, so an id freed by a removal is never
/// handed out again until the owning tracker is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub const FIRST: u64 = 1;

    pub fn new() -> Self {
        Self { next: Self::FIRST }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn reset(&mut self) {
        self.next = Self::FIRST;
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: u64,
    pub name: String,
    /// Duration in minutes
    pub duration: f64,
    pub calories_burned: f64,
    pub date: NaiveDate,
}

/// Macronutrient grams for a meal or a day
///
/// Fields missing from input deserialize to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Macros {
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl Macros {
    pub fn new(proteins: f64, fats: f64, carbs: f64) -> Self {
        Self { proteins, fats, carbs }
    }

    /// Label/value pairs in display order
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("proteins", self.proteins),
            ("fats", self.fats),
            ("carbs", self.carbs),
        ]
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            proteins: self.proteins + rhs.proteins,
            fats: self.fats + rhs.fats,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Self {
        iter.fold(Macros::default(), Add::add)
    }
}

impl<'a> Sum<&'a Macros> for Macros {
    fn sum<I: Iterator<Item = &'a Macros>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: u64,
    pub meal_name: String,
    pub calories: f64,
    #[serde(default)]
    pub macros: Macros,
}

/// Catalog entry returned by meal suggestions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealSuggestion {
    pub meal_name: &'static str,
    pub calories: f64,
}

/// One day of a generated weekly plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedWorkout {
    /// Day of the plan, 1 through 7
    pub day: u8,
    pub workout: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub weight: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightEntry {
    pub height: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateEntry {
    pub heart_rate: f64,
    pub time: NaiveDateTime,
}

/// Fitness goal, keyed by its goal type in the owning tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub target: f64,
    pub progress: f64,
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            progress: 0.0,
            deadline: None,
        }
    }

    /// Amount left to reach the target; negative once overshot
    pub fn remaining(&self) -> f64 {
        self.target - self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_sequence_starts_at_one() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);

        ids.reset();
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn test_macros_missing_fields_default_to_zero() {
        let macros: Macros = serde_json::from_str(r#"{"proteins": 25}"#).unwrap();
        assert_eq!(macros, Macros::new(25.0, 0.0, 0.0));
    }

    #[test]
    fn test_macros_sum() {
        let meals = [Macros::new(10.0, 5.0, 20.0), Macros::new(1.0, 2.0, 3.0)];
        let total: Macros = meals.iter().sum();
        assert_eq!(total, Macros::new(11.0, 7.0, 23.0));
    }

    #[test]
    fn test_goal_remaining_not_clamped() {
        let mut goal = Goal::new(10.0);
        goal.progress = 12.5;
        assert_eq!(goal.remaining(), -2.5);
    }
}
