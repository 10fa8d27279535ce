//! Fitness Tracker Shared Library
//!
//! Record types, report types and pure health formulas used by the tracker
//! services and the WASM bindings.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use types::*;
