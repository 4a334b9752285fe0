//! Utility Module Implementation
//! Author: kartik4091
//! Created: 2025-06-03 09:14:13 UTC
//!
//! Logging setup and metrics shared by the map, loader and CLI.

pub mod logger;
pub mod metrics;

pub use self::metrics::{Metrics, MetricsSnapshot};
