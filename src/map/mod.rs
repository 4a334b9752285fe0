//! Fixed-capacity string map and its parts

pub mod bucket_map;
pub mod checksum;
pub mod key;
pub mod shared;

pub use bucket_map::{FixedBucketStringMap, Insertion, MapStats};
pub use checksum::{bucket_for, checksum};
pub use key::KeyHandle;
pub use shared::SharedStringMap;
