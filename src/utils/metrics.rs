//! Metrics collection for map and loader operations
//! Author: kartik4091
//! Created: 2025-06-05

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

/// Named counters and gauges shared between observers and the CLI
#[derive(Debug)]
pub struct Metrics {
    counters: Arc<RwLock<HashMap<String, u64>>>,
    gauges: Arc<RwLock<HashMap<String, f64>>>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            counters: Arc::new(RwLock::new(HashMap::new())),
            gauges: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    pub fn add_to_counter(&self, name: &str, amount: u64) {
        let mut counters = self.counters.write();
        *counters.entry(name.to_string()).or_insert(0) += amount;
    }

    pub fn set_gauge(&self, name: &str, value: f64) {
        let mut gauges = self.gauges.write();
        gauges.insert(name.to_string(), value);
    }

    /// Keeps the gauge at the largest value seen so far.
    pub fn raise_gauge(&self, name: &str, value: f64) {
        let mut gauges = self.gauges.write();
        let gauge = gauges.entry(name.to_string()).or_insert(value);
        if value > *gauge {
            *gauge = value;
        }
    }

    pub fn get_counter(&self, name: &str) -> u64 {
        self.counters.read().get(name).copied().unwrap_or(0)
    }

    pub fn get_gauge(&self, name: &str) -> f64 {
        self.gauges.read().get(name).copied().unwrap_or(0.0)
    }

    pub fn reset(&self) {
        self.counters.write().clear();
        self.gauges.write().clear();
    }

    pub fn get_all_metrics(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            counters: self.counters.read().clone(),
            gauges: self.gauges.read().clone(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub counters: HashMap<String, u64>,
    pub gauges: HashMap<String, f64>,
}
