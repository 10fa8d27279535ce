//! Reporting façade across the four trackers
//!
//! Builds the cross-tracker snapshot, chart-ready series and export tables.
//! The façade only borrows the trackers; rendering and file writing are
//! delegated to a [`ChartRenderer`] and a [`TableWriter`].

use crate::error::{ReportError, ReportResult};
use crate::services::charts::{ChartKind, ChartRenderer};
use crate::services::export::{
    DataType, ExportReport, ExportTable, GoalCsvRow, MealCsvRow, TableWriter,
};
use crate::services::{FitnessGoals, HealthMetrics, NutritionTracker, WorkoutTracker};
use fitness_tracker_shared::{ChartData, ChartStyle, NutritionStats, RecentStats, TrackerError};
use tracing::{info, warn};

/// Read-only view over the trackers
#[derive(Debug, Clone, Copy)]
pub struct ReportingFacade<'a> {
    workouts: &'a WorkoutTracker,
    nutrition: &'a NutritionTracker,
    health: &'a HealthMetrics,
    goals: &'a FitnessGoals,
}

impl<'a> ReportingFacade<'a> {
    pub fn new(
        workouts: &'a WorkoutTracker,
        nutrition: &'a NutritionTracker,
        health: &'a HealthMetrics,
        goals: &'a FitnessGoals,
    ) -> Self {
        Self {
            workouts,
            nutrition,
            health,
            goals,
        }
    }

    /// Snapshot of workouts, nutrition, latest weight and goals
    pub fn view_recent_stats(&self) -> RecentStats {
        RecentStats {
            workouts: self.workouts.get_workout_summary(),
            nutrition: NutritionStats {
                daily_calories: self.nutrition.calculate_daily_calories(),
                macros: self.nutrition.track_macronutrients(),
            },
            health: self.health.get_recent_weight().cloned(),
            goals: self.goals.view_all_goals().clone(),
        }
    }

    // ========================================================================
    // Chart builders
    // ========================================================================

    /// Workout duration per workout, in log order
    pub fn workout_duration_chart(&self) -> Result<ChartData, TrackerError> {
        let workouts = self.non_empty_workouts()?;
        Ok(ChartData::new("Workout Duration Over Time", ChartStyle::Line)
            .with_axes("Date", "Duration (min)")
            .with_points(workouts.iter().map(|w| (w.date, w.duration))))
    }

    /// Calories burned per workout
    pub fn calories_burned_chart(&self) -> Result<ChartData, TrackerError> {
        let workouts = self.non_empty_workouts()?;
        Ok(ChartData::new("Calories Burned Per Workout", ChartStyle::Bar)
            .with_axes("Date", "Calories Burned")
            .with_points(workouts.iter().map(|w| (w.date, w.calories_burned))))
    }

    /// Macro totals as a distribution; all-zero totals still form a chart
    pub fn macronutrient_chart(&self) -> Result<ChartData, TrackerError> {
        let macros = self.nutrition.track_macronutrients();
        Ok(ChartData::new("Macronutrient Distribution", ChartStyle::Pie)
            .with_points(macros.entries()))
    }

    pub fn weight_trend_chart(&self) -> Result<ChartData, TrackerError> {
        let weights = self.health.get_weight_trend();
        if weights.is_empty() {
            return Err(TrackerError::EmptyData("weight log".to_string()));
        }
        Ok(ChartData::new("Weight Trend Over Time", ChartStyle::Line)
            .with_axes("Date", "Weight (kg)")
            .with_points(weights.iter().map(|e| (e.date, e.weight))))
    }

    pub fn heart_rate_chart(&self) -> Result<ChartData, TrackerError> {
        let samples = self.health.heart_rate_log();
        if samples.is_empty() {
            return Err(TrackerError::EmptyData("heart rate log".to_string()));
        }
        Ok(ChartData::new("Heart Rate Over Time", ChartStyle::Line)
            .with_axes("Time", "Heart Rate")
            .with_points(samples.iter().map(|e| (e.time, e.heart_rate))))
    }

    /// Total duration per date, dates in first-seen order
    pub fn weekly_summary_chart(&self) -> Result<ChartData, TrackerError> {
        let workouts = self.non_empty_workouts()?;

        let mut totals: Vec<(chrono::NaiveDate, f64)> = Vec::new();
        for workout in workouts {
            match totals.iter_mut().find(|(date, _)| *date == workout.date) {
                Some((_, total)) => *total += workout.duration,
                None => totals.push((workout.date, workout.duration)),
            }
        }

        Ok(ChartData::new("Weekly Workout Summary", ChartStyle::Bar)
            .with_axes("Date", "Total Duration (min)")
            .with_points(totals))
    }

    /// Progress against what is left for one goal
    pub fn goal_progress_chart(&self, goal_type: &str) -> Result<ChartData, TrackerError> {
        let goal = self
            .goals
            .view_all_goals()
            .get(goal_type)
            .ok_or_else(|| TrackerError::InvalidInput(format!("goal type '{}' not found", goal_type)))?;

        Ok(
            ChartData::new(format!("Goal Progress for {}", goal_type), ChartStyle::Bar)
                .with_points([("Progress", goal.progress), ("Remaining", goal.remaining())]),
        )
    }

    /// Build any chart by kind
    pub fn build_chart(&self, kind: &ChartKind) -> Result<ChartData, TrackerError> {
        match kind {
            ChartKind::WorkoutDuration => self.workout_duration_chart(),
            ChartKind::CaloriesBurned => self.calories_burned_chart(),
            ChartKind::Macronutrients => self.macronutrient_chart(),
            ChartKind::WeightTrend => self.weight_trend_chart(),
            ChartKind::HeartRate => self.heart_rate_chart(),
            ChartKind::WeeklySummary => self.weekly_summary_chart(),
            ChartKind::GoalProgress(goal_type) => self.goal_progress_chart(goal_type),
        }
    }

    /// Build a chart and hand it to `renderer`
    ///
    /// When the chart cannot be built the renderer is not called. Failures
    /// are logged here, so callers only decide whether to carry on.
    pub fn render_chart<R: ChartRenderer + ?Sized>(
        &self,
        kind: &ChartKind,
        renderer: &mut R,
    ) -> ReportResult<ChartData> {
        let chart = self
            .build_chart(kind)
            .map_err(|err| ReportError::from(err).logged())?;
        renderer.render(&chart).map_err(ReportError::logged)?;
        Ok(chart)
    }

    pub fn reset_visualizations<R: ChartRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.reset();
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Export one tracker's records through `writer`
    ///
    /// `data_type` is one of `workout`, `nutrition`, `health` or `goals`.
    /// Unknown tags and empty sources are returned as notices and the writer
    /// is never called for them. Every failure is logged before it is
    /// returned.
    pub fn export_data_csv<W: TableWriter + ?Sized>(
        &self,
        data_type: &str,
        writer: &W,
    ) -> ReportResult<ExportReport> {
        let data_type: DataType = data_type
            .parse()
            .map_err(|err: TrackerError| ReportError::from(err).logged())?;

        let table = self
            .export_table(data_type)
            .map_err(ReportError::logged)?
            .ok_or_else(|| {
                ReportError::from(TrackerError::EmptyData(format!(
                    "nothing to export for {}",
                    data_type
                )))
                .logged()
            })?;

        let path = writer
            .write_table(&data_type.file_name(), &table)
            .map_err(ReportError::logged)?;
        info!(data_type = %data_type, path = %path.display(), "Export complete");

        Ok(ExportReport {
            data_type,
            path,
            rows: table.row_count(),
            columns: table.columns().to_vec(),
        })
    }

    /// Table for a data type; `None` when the source is empty
    pub fn export_table(&self, data_type: DataType) -> ReportResult<Option<ExportTable>> {
        match data_type {
            DataType::Workout => ExportTable::from_rows(self.workouts.view_workouts()),
            DataType::Nutrition => {
                let rows = self
                    .nutrition
                    .view_daily_meals()
                    .iter()
                    .map(MealCsvRow::from_meal)
                    .collect::<ReportResult<Vec<_>>>()?;
                ExportTable::from_rows(&rows)
            }
            DataType::Health => ExportTable::from_rows(self.health.get_weight_trend()),
            DataType::Goals => ExportTable::from_rows(
                self.goals
                    .view_all_goals()
                    .iter()
                    .map(|(goal_type, goal)| GoalCsvRow::new(goal_type, goal)),
            ),
        }
    }

    fn non_empty_workouts(&self) -> Result<&'a [fitness_tracker_shared::Workout], TrackerError> {
        let workouts = self.workouts.view_workouts();
        if workouts.is_empty() {
            warn!("No workout data available");
            return Err(TrackerError::EmptyData("workout log".to_string()));
        }
        Ok(workouts)
    }
}
