//! Lookup diagnostics hooks
//!
//! A successful lookup can report which bucket it landed in and how far down
//! the chain it had to walk. Nothing is reported for misses; those surface
//! as [`crate::Error::KeyNotFound`].

use std::sync::Arc;

use tracing::debug;

use crate::utils::Metrics;

/// What a successful lookup walked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupProbe<'a> {
    pub bucket: usize,
    /// Links followed past the bucket head; 0 means the head matched
    pub depth: usize,
    pub key: &'a str,
    pub value: &'a str,
}

pub trait LookupObserver: Send + Sync {
    fn on_lookup(&self, probe: &LookupProbe<'_>);
}

/// Emits every probe as a debug-level tracing event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LookupObserver for TracingObserver {
    fn on_lookup(&self, probe: &LookupProbe<'_>) {
        debug!(
            "{}-{}: '{}'->'{}'",
            probe.bucket, probe.depth, probe.key, probe.value
        );
    }
}

/// Forwards each probe to every observer it holds, in order
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn LookupObserver>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: Arc<dyn LookupObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl LookupObserver for ObserverSet {
    fn on_lookup(&self, probe: &LookupProbe<'_>) {
        for observer in &self.observers {
            observer.on_lookup(probe);
        }
    }
}

pub const LOOKUP_COUNTER: &str = "map.lookups";
pub const CHAINED_LOOKUP_COUNTER: &str = "map.chained_lookups";
pub const DEEPEST_WALK_GAUGE: &str = "map.deepest_walk";

/// Folds probes into shared [`Metrics`]
#[derive(Clone, Default)]
pub struct MetricsObserver {
    metrics: Arc<Metrics>,
}

impl MetricsObserver {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }
}

impl LookupObserver for MetricsObserver {
    fn on_lookup(&self, probe: &LookupProbe<'_>) {
        self.metrics.increment_counter(LOOKUP_COUNTER);
        if probe.depth > 0 {
            self.metrics.increment_counter(CHAINED_LOOKUP_COUNTER);
        }
        self.metrics.raise_gauge(DEEPEST_WALK_GAUGE, probe.depth as f64);
    }
}
