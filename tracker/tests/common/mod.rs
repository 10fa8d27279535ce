//! Common test utilities for integration tests
//!
//! Builds an [`AppState`] with a known set of records and an export
//! directory inside a temporary folder.

#![allow(dead_code)]

use chrono::NaiveDate;
use fitness_tracker::{config::AppConfig, state::AppState};
use fitness_tracker_shared::Macros;
use tempfile::TempDir;

/// State plus the temp dir its exports land in
pub struct TestApp {
    pub state: AppState,
    pub dir: TempDir,
}

impl TestApp {
    /// Empty trackers exporting into a fresh temp dir
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = AppConfig::default();
        config.export.output_dir = dir.path().to_string_lossy().into_owned();
        config.nutrition.daily_calorie_goal = 2000.0;

        Self {
            state: AppState::new(config),
            dir,
        }
    }

    /// Trackers filled with the fixture below
    pub fn seeded() -> Self {
        let mut app = Self::empty();
        seed(&mut app.state);
        app
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

/// Fixture:
/// - workouts: Run 30/300 (3/1), Swim 45/400 (3/1), Bike 60/500 (3/2)
/// - meals: Oatmeal 350, Chicken Salad 520
/// - weights: 80.0 (3/1), 79.4 (3/3); height 1.80
/// - heart rate: 60, 80
/// - goals: weight_loss 5 (progress 2), distance 100
fn seed(state: &mut AppState) {
    let workouts = state.workouts_mut();
    workouts.add_workout("Run", 30.0, 300.0, Some(day(1)));
    workouts.add_workout("Swim", 45.0, 400.0, Some(day(1)));
    workouts.add_workout("Bike", 60.0, 500.0, Some(day(2)));

    let nutrition = state.nutrition_mut();
    nutrition.add_meal("Oatmeal", 350.0, Macros::new(12.0, 6.0, 60.0));
    nutrition.add_meal("Chicken Salad", 520.0, Macros::new(42.0, 18.0, 30.0));

    let health = state.health_mut();
    health.log_weight(80.0, day(1));
    health.log_weight(79.4, day(3));
    health.log_height(1.80, day(1));
    health.log_heart_rate(60.0, day(1).and_hms_opt(7, 0, 0).unwrap());
    health.log_heart_rate(80.0, day(1).and_hms_opt(18, 30, 0).unwrap());

    let goals = state.goals_mut();
    goals.set_goal("weight_loss", 5.0);
    goals.update_goal_progress("weight_loss", 2.0).unwrap();
    goals.set_goal("distance", 100.0);
}
