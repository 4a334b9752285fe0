//! Settings loader and lookup facade
//! Author: kartik4091
//! Created: 2025-06-06
//!
//! A [`SettingsLoader`] fills a [`FixedBucketStringMap`] from a session file
//! and then from any Xresources overlays. Every key goes through one
//! [`KeyInterner`], so an overlay entry for a key the session already set
//! takes the map's update path and wins. [`Settings`] is the read side.

use std::{fmt::Display, fs, path::Path, str::FromStr, sync::Arc};

use tracing::{debug, info, instrument, warn};

use super::{
    interner::KeyInterner,
    parser::{parse_session, parse_xresources, ParsedEntry},
};
use crate::{
    config::MapConfig,
    error::{Error, Result},
    map::{FixedBucketStringMap, Insertion, KeyHandle, MapStats},
    observe::LookupObserver,
    utils::Metrics,
};

pub const INSERTED_COUNTER: &str = "settings.inserted";
pub const OVERRIDDEN_COUNTER: &str = "settings.overridden";

/// Result of applying one source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub inserted: usize,
    pub overridden: usize,
}

pub struct SettingsLoader {
    config: MapConfig,
    map: FixedBucketStringMap,
    keys: KeyInterner,
    metrics: Option<Arc<Metrics>>,
}

impl SettingsLoader {
    pub fn new(config: MapConfig) -> Result<Self> {
        let map = FixedBucketStringMap::with_config(&config)?;
        Ok(Self {
            config,
            map,
            keys: KeyInterner::new(),
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Sets a single key, replacing any value it already has.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<Insertion> {
        let handle = self.keys.intern(key);
        let outcome = self.map.insert(handle, value)?;
        self.record(outcome);
        Ok(outcome)
    }

    #[instrument(skip(self, text))]
    pub fn load_session(&mut self, text: &str) -> Result<LoadSummary> {
        let entries = parse_session(text)?;
        let summary = self.apply(entries, "session")?;
        info!(
            "Loaded {} session settings ({} repeated)",
            summary.inserted, summary.overridden
        );
        Ok(summary)
    }

    #[instrument(skip(self, text), fields(class = %self.config.resource_class))]
    pub fn overlay_xresources(&mut self, text: &str) -> Result<LoadSummary> {
        let entries = parse_xresources(text, &self.config.resource_class)?;
        let summary = self.apply(entries, "xresources")?;
        info!(
            "Applied Xresources overlay: {} new, {} overridden",
            summary.inserted, summary.overridden
        );
        Ok(summary)
    }

    pub fn load_session_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();
        debug!("Reading session file {}", path.display());
        let text = fs::read_to_string(path)?;
        self.load_session(&text)
    }

    pub fn overlay_xresources_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary> {
        let path = path.as_ref();
        debug!("Reading Xresources file {}", path.display());
        let text = fs::read_to_string(path)?;
        self.overlay_xresources(&text)
    }

    pub fn finish(self) -> Settings {
        Settings {
            map: self.map,
            keys: self.keys,
        }
    }

    fn apply(&mut self, entries: Vec<ParsedEntry>, source: &str) -> Result<LoadSummary> {
        let mut summary = LoadSummary::default();

        for entry in entries {
            let handle = self.keys.intern(&entry.key);
            let outcome = self.map.insert(handle, entry.value).map_err(|e| match e {
                Error::InvalidKey(_) => Error::parse(entry.line, format!("unusable key {:?}", entry.key)),
                other => other,
            })?;

            match outcome {
                Insertion::Inserted => summary.inserted += 1,
                Insertion::Updated => {
                    summary.overridden += 1;
                    debug!("{} line {}: {} overrides earlier value", source, entry.line, entry.key);
                }
            }
            self.record(outcome);
        }

        Ok(summary)
    }

    fn record(&self, outcome: Insertion) {
        if let Some(metrics) = &self.metrics {
            match outcome {
                Insertion::Inserted => metrics.increment_counter(INSERTED_COUNTER),
                Insertion::Updated => metrics.increment_counter(OVERRIDDEN_COUNTER),
            }
        }
    }
}

/// Loaded settings, looked up by key text
#[derive(Debug)]
pub struct Settings {
    map: FixedBucketStringMap,
    keys: KeyInterner,
}

impl Settings {
    pub fn get(&self, key: &str) -> Result<&str> {
        match self.keys.resolve(key) {
            Some(handle) => self.map.lookup(handle),
            // A fresh instance never matches; this still rejects bad keys first.
            None => self.map.lookup(&KeyHandle::new(key)),
        }
    }

    /// The stored value, or `default` when the key can't be resolved.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Ok(value) => value,
            Err(Error::KeyNotFound(_)) => {
                debug!("{} not set, using default {:?}", key, default);
                default
            }
            Err(e) => {
                warn!("Falling back to default for {:?}: {}", key, e);
                default
            }
        }
    }

    pub fn get_parsed<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.get(key)?;
        raw.trim().parse().map_err(|e: T::Err| Error::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn set_observer(&mut self, observer: Arc<dyn LookupObserver>) {
        self.map.set_observer(observer);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn stats(&self) -> MapStats {
        self.map.stats()
    }
}
