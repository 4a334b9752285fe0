//! Fixed-bucket string map with separate chaining
//! Author: kartik4091
//! Created: 2025-06-04
//!
//! The bucket array is sized once at construction and never grows. Each
//! occupied bucket heads a chain of entries in insertion order; new
//! collisions are appended at the tail. Keys match by instance
//! ([`KeyHandle::same_instance`]), so re-inserting the same handle updates
//! the stored value while an equal-text handle from a separate allocation
//! becomes its own entry.

use std::{fmt, sync::Arc};

use serde::Serialize;
use tracing::{instrument, trace};

use super::{checksum::bucket_for, key::KeyHandle};
use crate::{
    config::MapConfig,
    error::{Error, Result},
    observe::{LookupObserver, LookupProbe, TracingObserver},
};

/// Outcome of [`FixedBucketStringMap::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A new entry was added and the entry count grew by one
    Inserted,
    /// The same key instance was already present; its value was replaced
    Updated,
}

/// Structural summary of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapStats {
    pub bucket_count: usize,
    pub entries: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
}

#[derive(Debug)]
struct Entry {
    key: KeyHandle,
    value: String,
    next: Option<usize>,
}

/// In-memory key/value store with a fixed number of buckets
pub struct FixedBucketStringMap {
    /// Chain head per bucket; `None` is an unoccupied bucket
    buckets: Box<[Option<usize>]>,
    /// Every entry the map owns, linked into chains by index
    nodes: Vec<Entry>,
    observer: Option<Arc<dyn LookupObserver>>,
}

impl FixedBucketStringMap {
    /// Creates an empty map with `bucket_count` unoccupied buckets.
    pub fn new(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::InvalidConfiguration(
                "bucket_count must be at least 1".into(),
            ));
        }

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize(bucket_count, None);

        Ok(Self {
            buckets: buckets.into_boxed_slice(),
            nodes: Vec::new(),
            observer: None,
        })
    }

    pub fn with_config(config: &MapConfig) -> Result<Self> {
        config.validate()?;
        let mut map = Self::new(config.bucket_count)?;
        if config.trace_lookups {
            map.set_observer(Arc::new(TracingObserver));
        }
        Ok(map)
    }

    /// Installs a hook that sees every successful lookup.
    pub fn set_observer(&mut self, observer: Arc<dyn LookupObserver>) {
        self.observer = Some(observer);
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries added by true inserts. Updates don't count.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bucket a key routes to. Always in `[0, bucket_count)`.
    pub fn bucket_index(&self, key: &KeyHandle) -> usize {
        bucket_for(key.as_bytes(), self.buckets.len())
    }

    /// Stores `value` under `key`.
    ///
    /// If this exact key instance is already in its chain the value is
    /// overwritten in place and the entry count is unchanged. Otherwise a
    /// new entry goes into the empty bucket or onto the chain's tail.
    #[instrument(level = "trace", skip(self, key, value), fields(key = %key))]
    pub fn insert(&mut self, key: KeyHandle, value: impl Into<String>) -> Result<Insertion> {
        Self::check_key(&key)?;
        let value = value.into();
        let bucket = self.bucket_index(&key);

        let mut tail = None;
        let mut found = None;
        for (id, entry) in self.chain(bucket) {
            if KeyHandle::same_instance(&entry.key, &key) {
                found = Some(id);
                break;
            }
            tail = Some(id);
        }

        if let Some(id) = found {
            trace!(bucket, "updating existing entry");
            self.nodes[id].value = value;
            return Ok(Insertion::Updated);
        }

        self.nodes.try_reserve(1)?;
        let id = self.nodes.len();
        self.nodes.push(Entry {
            key,
            value,
            next: None,
        });
        match tail {
            Some(last) => self.nodes[last].next = Some(id),
            None => self.buckets[bucket] = Some(id),
        }

        trace!(bucket, chained = tail.is_some(), "inserted new entry");
        Ok(Insertion::Inserted)
    }

    /// Returns the value stored under this exact key instance.
    pub fn lookup(&self, key: &KeyHandle) -> Result<&str> {
        Self::check_key(key)?;
        let bucket = self.bucket_index(key);

        for (depth, (_, entry)) in self.chain(bucket).enumerate() {
            if KeyHandle::same_instance(&entry.key, key) {
                if let Some(observer) = &self.observer {
                    observer.on_lookup(&LookupProbe {
                        bucket,
                        depth,
                        key: entry.key.as_str(),
                        value: &entry.value,
                    });
                }
                return Ok(&entry.value);
            }
        }

        Err(Error::KeyNotFound(key.to_string()))
    }

    /// Number of entries chained in `bucket`; zero if empty or out of range.
    pub fn chain_len(&self, bucket: usize) -> usize {
        if bucket >= self.buckets.len() {
            return 0;
        }
        self.chain(bucket).count()
    }

    pub fn stats(&self) -> MapStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for bucket in 0..self.buckets.len() {
            let len = self.chain_len(bucket);
            if len > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(len);
        }

        MapStats {
            bucket_count: self.buckets.len(),
            entries: self.nodes.len(),
            occupied_buckets,
            longest_chain,
        }
    }

    fn check_key(key: &KeyHandle) -> Result<()> {
        if key.is_usable() {
            Ok(())
        } else {
            Err(Error::InvalidKey(key.as_str().to_string()))
        }
    }

    fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            nodes: &self.nodes,
            next: self.buckets[bucket],
        }
    }
}

impl fmt::Debug for FixedBucketStringMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBucketStringMap")
            .field("bucket_count", &self.buckets.len())
            .field("entries", &self.nodes.len())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// Walks one bucket's chain from head to tail
struct Chain<'a> {
    nodes: &'a [Entry],
    next: Option<usize>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (usize, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let entry = &self.nodes[id];
        self.next = entry.next;
        Some((id, entry))
    }
}
