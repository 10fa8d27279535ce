//! Report and chart types produced by the reporting layer

use crate::models::{Goal, Macros, WeightEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Workout totals over the current log
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub total_workouts: usize,
    pub total_duration: f64,
    pub total_calories: f64,
}

/// Daily nutrition totals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionStats {
    pub daily_calories: f64,
    pub macros: Macros,
}

/// Per-goal line of a progress report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalReport {
    pub target: f64,
    pub progress: f64,
    pub remaining: f64,
    pub deadline: Option<NaiveDate>,
}

impl From<&Goal> for GoalReport {
    fn from(goal: &Goal) -> Self {
        Self {
            target: goal.target,
            progress: goal.progress,
            remaining: goal.remaining(),
            deadline: goal.deadline,
        }
    }
}

/// Snapshot across all trackers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentStats {
    pub workouts: WorkoutSummary,
    pub nutrition: NutritionStats,
    /// Most recent weight entry, if any was logged
    pub health: Option<WeightEntry>,
    pub goals: BTreeMap<String, Goal>,
}

// ============================================================================
// Chart Types
// ============================================================================

/// How a chart collaborator should draw a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    Line,
    Bar,
    Pie,
}

/// Chart-ready data: two parallel sequences plus captions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub style: ChartStyle,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn new(title: impl Into<String>, style: ChartStyle) -> Self {
        Self {
            title: title.into(),
            style,
            x_label: String::new(),
            y_label: String::new(),
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_points<I, L>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: ToString,
    {
        for (label, value) in points {
            self.labels.push(label.to_string());
            self.values.push(value);
        }
        self
    }

    pub fn point_count(&self) -> usize {
        self.values.len()
    }

    /// Sum of all values in the series
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl fmt::Display for ChartData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} points)", self.title, self.point_count())
    }
}
