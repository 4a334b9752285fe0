//! Configuration types and validation for the map and loader
//! Author: kartik4091
//! Created: 2025-06-03

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Bucket count used by the settings loader unless configured otherwise.
pub const DEFAULT_BUCKET_COUNT: usize = 256;

/// Resource class matched in Xresources overlays (`putty.Key: value`).
pub const DEFAULT_RESOURCE_CLASS: &str = "putty";

/// Configuration for a fixed-bucket map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Number of buckets, fixed for the map's lifetime
    pub bucket_count: usize,
    /// Attach a tracing observer to every lookup
    pub trace_lookups: bool,
    /// Xresources class whose entries override the session file
    pub resource_class: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            trace_lookups: false,
            resource_class: DEFAULT_RESOURCE_CLASS.to_string(),
        }
    }
}

impl MapConfig {
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            bucket_count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(Error::InvalidConfiguration(
                "bucket_count must be at least 1".into(),
            ));
        }
        if self.resource_class.is_empty() || self.resource_class.contains(['.', '*', ':']) {
            return Err(Error::InvalidConfiguration(format!(
                "invalid resource class: {:?}",
                self.resource_class
            )));
        }
        Ok(())
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
