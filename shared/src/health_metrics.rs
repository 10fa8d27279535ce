//! Health metrics calculations module
//!
//! Pure formulas behind the health tracker: BMI, a BMI-based body fat
//! estimate and a BMI-22 ideal weight. Heights are in meters, weights in
//! kilograms.

/// BMI used as the reference for ideal weight suggestions
pub const IDEAL_BMI: f64 = 22.0;

// ============================================================================
// BMI Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Returns `None` for a non-positive height.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Option<f64> {
    if height_m <= 0.0 {
        return None;
    }
    Some(weight_kg / (height_m * height_m))
}

// ============================================================================
// Body Fat Estimation
// ============================================================================

/// Whether a free-form gender label selects the male branch of the formulas
pub fn is_male(gender: &str) -> bool {
    gender.to_lowercase() == "male"
}

/// Estimate body fat percentage from BMI (rough estimate)
///
/// Male:      BF% = 1.20 × BMI + 0.23 × Age - 16.2
/// Otherwise: BF% = 1.20 × BMI + 0.23 × Age - 5.4
///
/// Unclamped; an approximation, not a measurement.
pub fn estimate_body_fat_percentage(age_years: f64, gender: &str, bmi: f64) -> f64 {
    let offset = if is_male(gender) { 16.2 } else { 5.4 };
    1.20 * bmi + 0.23 * age_years - offset
}

// ============================================================================
// Ideal Weight Calculations
// ============================================================================

/// Weight that puts the given height at a BMI of 22
pub fn ideal_weight_for_height(height_m: f64) -> f64 {
    IDEAL_BMI * height_m * height_m
}

// ============================================================================
// Heart Rate
// ============================================================================

/// Arithmetic mean of heart rate samples
pub fn average_heart_rate<I>(samples: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (total, count) = samples
        .into_iter()
        .fold((0.0, 0usize), |(total, count), bpm| (total + bpm, count + 1));
    if count == 0 {
        return None;
    }
    Some(total / count as f64)
}
