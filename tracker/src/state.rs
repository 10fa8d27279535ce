//! Application state management
//!
//! [`AppState`] owns the four trackers and the loaded configuration. Trackers
//! are mutated through the `*_mut` accessors; reporting borrows them all
//! read-only.

use crate::config::AppConfig;
use crate::services::{
    CsvTableWriter, FitnessGoals, HealthMetrics, NutritionTracker, ReportingFacade, WorkoutTracker,
};

/// Trackers plus configuration
#[derive(Debug)]
pub struct AppState {
    config: AppConfig,
    workouts: WorkoutTracker,
    nutrition: NutritionTracker,
    health: HealthMetrics,
    goals: FitnessGoals,
}

impl AppState {
    /// Create empty trackers; the calorie goal comes from `config`
    pub fn new(config: AppConfig) -> Self {
        let nutrition = NutritionTracker::with_calorie_goal(config.nutrition.daily_calorie_goal);
        Self {
            config,
            workouts: WorkoutTracker::new(),
            nutrition,
            health: HealthMetrics::new(),
            goals: FitnessGoals::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn workouts(&self) -> &WorkoutTracker {
        &self.workouts
    }

    #[inline]
    pub fn workouts_mut(&mut self) -> &mut WorkoutTracker {
        &mut self.workouts
    }

    #[inline]
    pub fn nutrition(&self) -> &NutritionTracker {
        &self.nutrition
    }

    #[inline]
    pub fn nutrition_mut(&mut self) -> &mut NutritionTracker {
        &mut self.nutrition
    }

    #[inline]
    pub fn health(&self) -> &HealthMetrics {
        &self.health
    }

    #[inline]
    pub fn health_mut(&mut self) -> &mut HealthMetrics {
        &mut self.health
    }

    #[inline]
    pub fn goals(&self) -> &FitnessGoals {
        &self.goals
    }

    #[inline]
    pub fn goals_mut(&mut self) -> &mut FitnessGoals {
        &mut self.goals
    }

    /// Read-only reporting view over every tracker
    pub fn reporting(&self) -> ReportingFacade<'_> {
        ReportingFacade::new(&self.workouts, &self.nutrition, &self.health, &self.goals)
    }

    /// CSV writer targeting the configured export directory
    pub fn csv_writer(&self) -> CsvTableWriter {
        CsvTableWriter::new(self.config.export.output_path())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_tracker_shared::Macros;
    use std::path::Path;

    #[test]
    fn test_calorie_goal_from_config() {
        let mut config = AppConfig::default();
        config.nutrition.daily_calorie_goal = 2200.0;
        let mut state = AppState::new(config);

        state.nutrition_mut().add_meal("Pasta", 700.0, Macros::new(25.0, 15.0, 110.0));
        assert_eq!(state.nutrition().get_remaining_calories(), 1500.0);
    }

    #[test]
    fn test_reporting_sees_mutations() {
        let mut state = AppState::default();
        state.workouts_mut().add_workout("Row", 25.0, 240.0, None);
        state.goals_mut().set_goal("distance", 42.0);

        let stats = state.reporting().view_recent_stats();
        assert_eq!(stats.workouts.total_workouts, 1);
        assert!(stats.goals.contains_key("distance"));
    }

    #[test]
    fn test_csv_writer_uses_export_dir() {
        let mut config = AppConfig::default();
        config.export.output_dir = "exports".to_string();
        let state = AppState::new(config);
        assert_eq!(state.csv_writer().output_dir(), Path::new("exports"));
    }
}
