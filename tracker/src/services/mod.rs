//! Tracker services
//!
//! Each tracker owns its own records; the reporting façade reads across
//! them to build stats, charts and exports.

pub mod charts;
pub mod export;
pub mod goals;
pub mod health;
pub mod nutrition;
pub mod reporting;
pub mod workout;

pub use charts::{ChartKind, ChartRenderer, TracingChartRenderer};
pub use export::{CsvTableWriter, DataType, ExportReport, ExportTable, TableWriter};
pub use goals::FitnessGoals;
pub use health::HealthMetrics;
pub use nutrition::NutritionTracker;
pub use reporting::ReportingFacade;
pub use workout::WorkoutTracker;
