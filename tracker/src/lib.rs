//! Fitness Tracker Library
//!
//! In-memory workout, nutrition, health and goal tracking with a reporting
//! layer for charts and CSV export.

pub mod config;
pub mod error;
pub mod services;
pub mod state;
