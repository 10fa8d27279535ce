//! Workout tracking service
//!
//! Provides:
//! - Workout logging and removal
//! - Duration and calorie totals
//! - Goal-based workout suggestions and weekly plans

use chrono::{Local, NaiveDate};
use fitness_tracker_shared::{IdSequence, PlannedWorkout, TrackerError, Workout, WorkoutSummary};
use tracing::debug;

/// Suggested workout per goal type (matched case-insensitively)
const WORKOUT_SUGGESTIONS: &[(&str, &str)] = &[
    ("cardio", "Running"),
    ("strength", "Weight lifting"),
    ("flexibility", "Yoga"),
];

/// Suggestion used for goal types outside the table
pub const DEFAULT_WORKOUT: &str = "General Fitness";

const DAYS_PER_WEEK: u8 = 7;

/// In-memory workout log
#[derive(Debug, Default)]
pub struct WorkoutTracker {
    workouts: Vec<Workout>,
    ids: IdSequence,
}

impl WorkoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a workout; `date` defaults to today
    pub fn add_workout(
        &mut self,
        name: impl Into<String>,
        duration: f64,
        calories_burned: f64,
        date: Option<NaiveDate>,
    ) -> Workout {
        let workout = Workout {
            id: self.ids.next_id(),
            name: name.into(),
            duration,
            calories_burned,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        };
        debug!(id = workout.id, name = %workout.name, "Workout added");
        self.workouts.push(workout.clone());
        workout
    }

    /// Remove a workout by id
    ///
    /// An unknown id leaves the log untouched and yields `NotFound`.
    pub fn remove_workout(&mut self, workout_id: u64) -> Result<Workout, TrackerError> {
        let index = self
            .workouts
            .iter()
            .position(|w| w.id == workout_id)
            .ok_or_else(|| TrackerError::NotFound(format!("workout {}", workout_id)))?;
        debug!(id = workout_id, "Workout removed");
        Ok(self.workouts.remove(index))
    }

    /// All logged workouts in insertion order
    pub fn view_workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn calculate_total_duration(&self) -> f64 {
        self.workouts.iter().map(|w| w.duration).sum()
    }

    pub fn calculate_total_calories(&self) -> f64 {
        self.workouts.iter().map(|w| w.calories_burned).sum()
    }

    /// Workouts logged on exactly `date`
    pub fn get_workout_by_date(&self, date: NaiveDate) -> Vec<&Workout> {
        self.workouts.iter().filter(|w| w.date == date).collect()
    }

    /// Suggest a workout for a goal type
    pub fn suggest_workout(&self, goal_type: &str) -> &'static str {
        let goal_type = goal_type.to_lowercase();
        WORKOUT_SUGGESTIONS
            .iter()
            .find(|(key, _)| *key == goal_type)
            .map(|(_, workout)| *workout)
            .unwrap_or(DEFAULT_WORKOUT)
    }

    /// Seven-day plan repeating the suggestion for `goal_type`
    pub fn generate_weekly_plan(&self, goal_type: &str) -> Vec<PlannedWorkout> {
        let workout = self.suggest_workout(goal_type);
        (1..=DAYS_PER_WEEK)
            .map(|day| PlannedWorkout { day, workout })
            .collect()
    }

    pub fn get_workout_summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            total_workouts: self.workouts.len(),
            total_duration: self.calculate_total_duration(),
            total_calories: self.calculate_total_calories(),
        }
    }

    /// Clear all workouts and restart ids at 1
    pub fn reset_tracker(&mut self) {
        self.workouts.clear();
        self.ids.reset();
        debug!("Workout tracker reset");
    }
}
