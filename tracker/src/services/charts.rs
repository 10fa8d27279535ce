//! Chart rendering seam
//!
//! The reporting façade only builds [`ChartData`]; drawing it is the job of a
//! [`ChartRenderer`]. [`TracingChartRenderer`] logs each series instead of
//! drawing it.

use crate::error::ReportResult;
use fitness_tracker_shared::ChartData;
use std::fmt;
use tracing::info;

/// Charts the façade knows how to build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartKind {
    WorkoutDuration,
    CaloriesBurned,
    Macronutrients,
    WeightTrend,
    HeartRate,
    WeeklySummary,
    GoalProgress(String),
}

impl ChartKind {
    /// Charts that need no extra argument
    pub const STANDARD: [ChartKind; 6] = [
        ChartKind::WorkoutDuration,
        ChartKind::CaloriesBurned,
        ChartKind::Macronutrients,
        ChartKind::WeightTrend,
        ChartKind::HeartRate,
        ChartKind::WeeklySummary,
    ];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::WorkoutDuration => write!(f, "workout_duration"),
            ChartKind::CaloriesBurned => write!(f, "calories_burned"),
            ChartKind::Macronutrients => write!(f, "macronutrients"),
            ChartKind::WeightTrend => write!(f, "weight_trend"),
            ChartKind::HeartRate => write!(f, "heart_rate"),
            ChartKind::WeeklySummary => write!(f, "weekly_summary"),
            ChartKind::GoalProgress(goal_type) => write!(f, "goal_progress:{}", goal_type),
        }
    }
}

/// Consumer of chart-ready data
pub trait ChartRenderer {
    fn render(&mut self, chart: &ChartData) -> ReportResult<()>;

    /// Drop any state kept between renders
    fn reset(&mut self) {}
}

/// Renderer that writes each series to the log
#[derive(Debug, Default)]
pub struct TracingChartRenderer {
    rendered: Vec<String>,
}

impl TracingChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles of the charts rendered since the last reset
    pub fn rendered(&self) -> &[String] {
        &self.rendered
    }
}

impl ChartRenderer for TracingChartRenderer {
    fn render(&mut self, chart: &ChartData) -> ReportResult<()> {
        info!(
            title = %chart.title,
            style = ?chart.style,
            x = %chart.x_label,
            y = %chart.y_label,
            points = chart.point_count(),
            "Rendering chart"
        );
        for (label, value) in chart.labels.iter().zip(&chart.values) {
            info!("  {:<20} {:>10.1}", label, value);
        }
        self.rendered.push(chart.title.clone());
        Ok(())
    }

    fn reset(&mut self) {
        self.rendered.clear();
        info!("Visualizations reset");
    }
}
