//! Health metrics service
//!
//! Keeps append-only weight, height and heart-rate logs and exposes the
//! shared health formulas next to them.

use chrono::{NaiveDate, NaiveDateTime};
use fitness_tracker_shared::{
    average_heart_rate, calculate_bmi, estimate_body_fat_percentage, ideal_weight_for_height,
    HeartRateEntry, HeightEntry, WeightEntry,
};
use tracing::debug;

/// Weight, height and heart-rate logs
#[derive(Debug, Default)]
pub struct HealthMetrics {
    weight_log: Vec<WeightEntry>,
    height_log: Vec<HeightEntry>,
    heart_rate_log: Vec<HeartRateEntry>,
}

impl HealthMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// BMI for weight in kg and height in meters; `None` when height <= 0
    pub fn calculate_bmi(&self, weight: f64, height: f64) -> Option<f64> {
        calculate_bmi(weight, height)
    }

    pub fn calculate_body_fat_percentage(&self, age: f64, gender: &str, bmi: f64) -> f64 {
        estimate_body_fat_percentage(age, gender, bmi)
    }

    pub fn log_weight(&mut self, weight: f64, date: NaiveDate) {
        debug!(weight, %date, "Weight logged");
        self.weight_log.push(WeightEntry { weight, date });
    }

    pub fn log_height(&mut self, height: f64, date: NaiveDate) {
        debug!(height, %date, "Height logged");
        self.height_log.push(HeightEntry { height, date });
    }

    pub fn log_heart_rate(&mut self, heart_rate: f64, time: NaiveDateTime) {
        debug!(heart_rate, %time, "Heart rate logged");
        self.heart_rate_log.push(HeartRateEntry { heart_rate, time });
    }

    pub fn get_recent_weight(&self) -> Option<&WeightEntry> {
        self.weight_log.last()
    }

    /// Full weight log, oldest first
    pub fn get_weight_trend(&self) -> &[WeightEntry] {
        &self.weight_log
    }

    pub fn height_log(&self) -> &[HeightEntry] {
        &self.height_log
    }

    pub fn heart_rate_log(&self) -> &[HeartRateEntry] {
        &self.heart_rate_log
    }

    /// Weight at a BMI of 22 for `height` in meters
    ///
    /// Age and gender are accepted but do not enter the formula.
    pub fn suggest_ideal_weight(&self, height: f64, _age: f64, _gender: &str) -> f64 {
        ideal_weight_for_height(height)
    }

    /// Mean heart rate over the whole log
    ///
    /// `duration` is accepted for a future time-window filter and currently
    /// ignored.
    pub fn get_average_heart_rate(&self, _duration: Option<u32>) -> Option<f64> {
        average_heart_rate(self.heart_rate_log.iter().map(|e| e.heart_rate))
    }

    /// Clear all three logs
    pub fn reset_metrics(&mut self) {
        self.weight_log.clear();
        self.height_log.clear();
        self.heart_rate_log.clear();
        debug!("Health metrics reset");
    }
}
