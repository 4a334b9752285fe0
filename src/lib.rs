//! Main Library File for the Terminal Configuration Map
//! Provides a fixed-capacity string map for configuration entries,
//! the loader that fills it from session files and Xresources overlays,
//! and lookup diagnostics.

// Configuration and Errors
pub mod config;
pub mod error;

// Core Map
pub mod map;

pub use map::{FixedBucketStringMap, Insertion, KeyHandle, MapStats, SharedStringMap};

// Lookup Diagnostics
pub mod observe;

pub use observe::{LookupObserver, LookupProbe, MetricsObserver, ObserverSet, TracingObserver};

// Settings Loading
pub mod settings;

pub use settings::{KeyInterner, LoadSummary, Settings, SettingsLoader};

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use config::MapConfig;
pub use error::{Error, Result};
pub use utils::{Metrics, MetricsSnapshot};
