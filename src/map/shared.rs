//! Shared map for concurrent readers
//!
//! Writers hold the lock for the whole insert, since a chain walk followed
//! by an append must not interleave with another insert.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{
    bucket_map::{FixedBucketStringMap, Insertion, MapStats},
    key::KeyHandle,
};
use crate::error::Result;

/// Cloneable handle to a map behind one reader/writer lock
#[derive(Debug, Clone)]
pub struct SharedStringMap {
    inner: Arc<RwLock<FixedBucketStringMap>>,
}

impl SharedStringMap {
    pub fn new(map: FixedBucketStringMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        Ok(Self::new(FixedBucketStringMap::new(bucket_count)?))
    }

    pub fn insert(&self, key: KeyHandle, value: impl Into<String>) -> Result<Insertion> {
        self.inner.write().insert(key, value)
    }

    /// Copies the value out so the read lock isn't held by the caller.
    pub fn lookup(&self, key: &KeyHandle) -> Result<String> {
        self.inner.read().lookup(key).map(str::to_owned)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> MapStats {
        self.inner.read().stats()
    }
}
