//! Data export service for tracker records
//!
//! Records are serialized into an [`ExportTable`] whose header comes from the
//! first row's field names, then handed to a [`TableWriter`]. The bundled
//! writer emits CSV files named `{data_type}_data.csv`.

use crate::error::ReportResult;
use chrono::NaiveDate;
use fitness_tracker_shared::{Goal, Meal, TrackerError};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Which tracker's records to export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Workout,
    Nutrition,
    Health,
    Goals,
}

impl DataType {
    pub const ALL: [DataType; 4] = [
        DataType::Workout,
        DataType::Nutrition,
        DataType::Health,
        DataType::Goals,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DataType::Workout => "workout",
            DataType::Nutrition => "nutrition",
            DataType::Health => "health",
            DataType::Goals => "goals",
        }
    }

    /// File name the export is written to
    pub fn file_name(&self) -> String {
        format!("{}_data.csv", self.tag())
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for DataType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.tag() == s)
            .ok_or_else(|| TrackerError::InvalidInput(format!("unknown data type '{}'", s)))
    }
}

// ============================================================================
// CSV Rows
// ============================================================================

/// Meal row with the macros packed into one JSON cell
#[derive(Debug, Serialize)]
pub struct MealCsvRow<'a> {
    pub id: u64,
    pub meal_name: &'a str,
    pub calories: f64,
    pub macros: String,
}

impl<'a> MealCsvRow<'a> {
    pub fn from_meal(meal: &'a Meal) -> ReportResult<Self> {
        Ok(Self {
            id: meal.id,
            meal_name: &meal.meal_name,
            calories: meal.calories,
            macros: serde_json::to_string(&meal.macros)?,
        })
    }
}

/// Goal row keyed by its goal type; no deadline leaves the cell empty
#[derive(Debug, Serialize)]
pub struct GoalCsvRow<'a> {
    pub goal_type: &'a str,
    pub target: f64,
    pub progress: f64,
    pub deadline: Option<NaiveDate>,
}

impl<'a> GoalCsvRow<'a> {
    pub fn new(goal_type: &'a str, goal: &Goal) -> Self {
        Self {
            goal_type,
            target: goal.target,
            progress: goal.progress,
            deadline: goal.deadline,
        }
    }
}

// ============================================================================
// Export Table
// ============================================================================

/// Rendered CSV plus the header it was written with
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    columns: Vec<String>,
    rows: usize,
    csv: Vec<u8>,
}

impl ExportTable {
    /// Serialize rows; the header is the first row's field names
    ///
    /// Returns `Ok(None)` when there are no rows.
    pub fn from_rows<I>(rows: I) -> ReportResult<Option<Self>>
    where
        I: IntoIterator,
        I::Item: Serialize,
    {
        let mut wtr = csv::Writer::from_writer(vec![]);
        let mut count = 0;
        for row in rows {
            wtr.serialize(row)?;
            count += 1;
        }
        if count == 0 {
            return Ok(None);
        }

        let csv = wtr.into_inner().map_err(|e| e.into_error())?;
        let columns = csv::Reader::from_reader(csv.as_slice())
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Some(Self {
            columns,
            rows: count,
            csv,
        }))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, header excluded
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Header and rows as CSV bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.csv
    }
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub data_type: DataType,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: Vec<String>,
}

// ============================================================================
// Writers
// ============================================================================

/// Destination for exported tables
pub trait TableWriter {
    /// Write `table` under `file_name` and return where it landed
    fn write_table(&self, file_name: &str, table: &ExportTable) -> ReportResult<PathBuf>;
}

/// Writes tables as CSV files into a directory
///
/// Each file is staged next to its target and renamed into place, so a
/// failed write never leaves a truncated export behind.
#[derive(Debug, Clone)]
pub struct CsvTableWriter {
    output_dir: PathBuf,
}

impl CsvTableWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn staging_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(format!(".{}.tmp", file_name))
    }
}

impl TableWriter for CsvTableWriter {
    fn write_table(&self, file_name: &str, table: &ExportTable) -> ReportResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        let staging = self.staging_path(file_name);

        let written = fs::write(&staging, table.as_bytes()).and_then(|()| fs::rename(&staging, &path));
        if let Err(err) = written {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }

        info!(path = %path.display(), rows = table.row_count(), "Data exported");
        Ok(path)
    }
}
