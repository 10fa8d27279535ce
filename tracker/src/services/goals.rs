//! Goals service for goal setting and progress tracking
//!
//! Provides business logic for:
//! - Goal creation, adjustment and deadlines
//! - Additive progress updates
//! - Remaining amount and daily pace over a fixed horizon

use chrono::NaiveDate;
use fitness_tracker_shared::{Goal, GoalReport, TrackerError};
use std::collections::BTreeMap;
use tracing::debug;

/// Days the remaining amount is spread over by `suggest_steps_to_goal`
pub const GOAL_HORIZON_DAYS: f64 = 30.0;

/// Goals keyed by goal type
#[derive(Debug, Default)]
pub struct FitnessGoals {
    goals: BTreeMap<String, Goal>,
}

impl FitnessGoals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a goal with zero progress and no deadline
    pub fn set_goal(&mut self, goal_type: impl Into<String>, target: f64) {
        let goal_type = goal_type.into();
        debug!(goal_type = %goal_type, target, "Goal set");
        self.goals.insert(goal_type, Goal::new(target));
    }

    /// Progress per goal type
    pub fn get_goal_progress(&self) -> BTreeMap<String, f64> {
        self.goals
            .iter()
            .map(|(goal_type, goal)| (goal_type.clone(), goal.progress))
            .collect()
    }

    /// Add `progress` to a goal and return the new total
    pub fn update_goal_progress(&mut self, goal_type: &str, progress: f64) -> Result<f64, TrackerError> {
        let goal = self.goal_mut(goal_type)?;
        goal.progress += progress;
        debug!(goal_type, progress = goal.progress, "Goal progress updated");
        Ok(goal.progress)
    }

    /// Target minus progress; `None` for an unknown goal type
    pub fn get_remaining_goal(&self, goal_type: &str) -> Option<f64> {
        self.goals.get(goal_type).map(Goal::remaining)
    }

    /// Remaining amount spread evenly over the next 30 days
    pub fn suggest_steps_to_goal(&self, goal_type: &str) -> Option<f64> {
        self.get_remaining_goal(goal_type)
            .map(|remaining| remaining / GOAL_HORIZON_DAYS)
    }

    pub fn generate_progress_report(&self) -> BTreeMap<String, GoalReport> {
        self.goals
            .iter()
            .map(|(goal_type, goal)| (goal_type.clone(), GoalReport::from(goal)))
            .collect()
    }

    pub fn set_deadline(&mut self, goal_type: &str, deadline: NaiveDate) -> Result<(), TrackerError> {
        self.goal_mut(goal_type)?.deadline = Some(deadline);
        debug!(goal_type, %deadline, "Goal deadline set");
        Ok(())
    }

    pub fn adjust_goal(&mut self, goal_type: &str, new_target: f64) -> Result<(), TrackerError> {
        self.goal_mut(goal_type)?.target = new_target;
        debug!(goal_type, new_target, "Goal target adjusted");
        Ok(())
    }

    pub fn view_all_goals(&self) -> &BTreeMap<String, Goal> {
        &self.goals
    }

    pub fn reset_all_goals(&mut self) {
        self.goals.clear();
        debug!("All goals reset");
    }

    fn goal_mut(&mut self, goal_type: &str) -> Result<&mut Goal, TrackerError> {
        self.goals
            .get_mut(goal_type)
            .ok_or_else(|| TrackerError::NotFound(format!("goal '{}'", goal_type)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_goal_round_trip() {
        let mut goals = FitnessGoals::new();
        goals.set_goal("weight_loss", 10.0);
        goals.update_goal_progress("weight_loss", 4.0).unwrap();

        assert_eq!(goals.get_remaining_goal("weight_loss"), Some(6.0));
        let steps = goals.suggest_steps_to_goal("weight_loss").unwrap();
        assert!((steps - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_goal_is_unavailable() {
        let mut goals = FitnessGoals::new();
        assert_eq!(goals.get_remaining_goal("running"), None);
        assert_eq!(goals.suggest_steps_to_goal("running"), None);
        assert!(matches!(
            goals.update_goal_progress("running", 1.0),
            Err(TrackerError::NotFound(_))
        ));
        assert!(goals.adjust_goal("running", 5.0).is_err());
        assert!(goals.set_deadline("running", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).is_err());
        assert!(goals.view_all_goals().is_empty());
    }

    #[test]
    fn test_set_goal_overwrites_progress() {
        let mut goals = FitnessGoals::new();
        goals.set_goal("steps", 10000.0);
        goals.update_goal_progress("steps", 2500.0).unwrap();
        goals.set_deadline("steps", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();

        goals.set_goal("steps", 12000.0);
        let goal = &goals.view_all_goals()["steps"];
        assert_eq!(goal.progress, 0.0);
        assert_eq!(goal.deadline, None);
        assert_eq!(goal.target, 12000.0);
    }

    #[test]
    fn test_remaining_goes_negative_when_overshot() {
        let mut goals = FitnessGoals::new();
        goals.set_goal("pushups", 50.0);
        goals.update_goal_progress("pushups", 70.0).unwrap();
        assert_eq!(goals.get_remaining_goal("pushups"), Some(-20.0));
    }

    #[test]
    fn test_progress_report() {
        let mut goals = FitnessGoals::new();
        let deadline = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        goals.set_goal("weight_loss", 10.0);
        goals.set_goal("distance", 100.0);
        goals.update_goal_progress("distance", 35.0).unwrap();
        goals.set_deadline("distance", deadline).unwrap();
        goals.adjust_goal("weight_loss", 8.0).unwrap();

        let report = goals.generate_progress_report();
        assert_eq!(report.len(), 2);
        assert_eq!(report["distance"].remaining, 65.0);
        assert_eq!(report["distance"].deadline, Some(deadline));
        assert_eq!(report["weight_loss"].target, 8.0);
        assert_eq!(report["weight_loss"].remaining, 8.0);

        let progress = goals.get_goal_progress();
        assert_eq!(progress["distance"], 35.0);
        assert_eq!(progress["weight_loss"], 0.0);
    }

    #[test]
    fn test_reset_all_goals() {
        let mut goals = FitnessGoals::new();
        goals.set_goal("steps", 10000.0);
        goals.reset_all_goals();
        assert!(goals.view_all_goals().is_empty());
        assert!(goals.generate_progress_report().is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: progress is the sum of all updates, remaining = target - progress
        #[test]
        fn prop_progress_accumulates(
            target in 0u32..10000,
            updates in proptest::collection::vec(0u32..500, 0..20)
        ) {
            let mut goals = FitnessGoals::new();
            goals.set_goal("custom", target as f64);
            for u in &updates {
                goals.update_goal_progress("custom", *u as f64).unwrap();
            }

            let total: u32 = updates.iter().sum();
            prop_assert_eq!(goals.get_goal_progress()["custom"], total as f64);
            prop_assert_eq!(
                goals.get_remaining_goal("custom"),
                Some(target as f64 - total as f64)
            );
        }
    }
}
