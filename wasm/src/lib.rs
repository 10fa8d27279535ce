//! Fitness Tracker WASM Module
//!
//! WebAssembly bindings for the health formulas, so a browser front end
//! computes the same numbers as the tracker.

use fitness_tracker_shared as shared;
use wasm_bindgen::prelude::*;

/// BMI from weight (kg) and height (m); `undefined` when height <= 0
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Option<f64> {
    shared::calculate_bmi(weight_kg, height_m)
}

/// Body fat percentage estimated from BMI, age and gender
#[wasm_bindgen]
pub fn estimate_body_fat_percentage(age_years: f64, gender: &str, bmi: f64) -> f64 {
    shared::estimate_body_fat_percentage(age_years, gender, bmi)
}

/// Weight (kg) at the ideal BMI for a height in meters
#[wasm_bindgen]
pub fn ideal_weight(height_m: f64) -> f64 {
    shared::ideal_weight_for_height(height_m)
}

/// Mean of heart-rate samples; `undefined` for an empty series
#[wasm_bindgen]
pub fn average_heart_rate(samples: &[f64]) -> Option<f64> {
    shared::average_heart_rate(samples.iter().copied())
}
