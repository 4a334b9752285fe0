use confmap::error::Error;
use confmap::map::bucket_for;
use confmap::{FixedBucketStringMap, Insertion, KeyHandle, SharedStringMap};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let mut map = FixedBucketStringMap::new(4).unwrap();
        let host = KeyHandle::new("host");
        let port = KeyHandle::new("port");
        map.insert(host.clone(), "example.com").unwrap();
        map.insert(port.clone(), "22").unwrap();

        assert_eq!(map.lookup(&host).unwrap(), "example.com");
        assert_eq!(map.lookup(&port).unwrap(), "22");
        assert!(matches!(
            map.lookup(&KeyHandle::new("user")),
            Err(Error::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_same_instance_reinsert_keeps_count() {
        let mut map = FixedBucketStringMap::new(256).unwrap();
        let k = KeyHandle::new("k");
        assert_eq!(map.insert(k.clone(), "1").unwrap(), Insertion::Inserted);
        assert_eq!(map.insert(k.clone(), "2").unwrap(), Insertion::Updated);
        assert_eq!(map.lookup(&k).unwrap(), "2");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_equal_text_distinct_instances() {
        let mut map = FixedBucketStringMap::new(256).unwrap();
        let k1 = KeyHandle::new("TermWidth");
        let k2 = KeyHandle::new("TermWidth");
        map.insert(k1.clone(), "80").unwrap();
        map.insert(k2.clone(), "132").unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.lookup(&k1).unwrap(), "80");
        assert_eq!(map.lookup(&k2).unwrap(), "132");
    }

    #[test]
    fn test_chain_length_matches_keys_routed() {
        let mut map = FixedBucketStringMap::new(3).unwrap();
        let keys: Vec<KeyHandle> = (0..30).map(|i| KeyHandle::new(&format!("opt{}", i))).collect();
        for key in &keys {
            map.insert(key.clone(), key.as_str()).unwrap();
        }

        for bucket in 0..3 {
            let routed = keys
                .iter()
                .filter(|k| bucket_for(k.as_bytes(), 3) == bucket)
                .count();
            assert_eq!(map.chain_len(bucket), routed);
        }
        for key in &keys {
            assert_eq!(map.lookup(key).unwrap(), key.as_str());
        }
        assert_eq!(map.stats().entries, 30);
    }

    #[test]
    fn test_bucket_index_stable_across_inserts() {
        let mut map = FixedBucketStringMap::new(256).unwrap();
        let probe = KeyHandle::new("Colour0");
        let before = map.bucket_index(&probe);
        for i in 0..100 {
            map.insert(KeyHandle::new(&format!("k{}", i)), "v").unwrap();
        }
        assert_eq!(map.bucket_index(&probe), before);
        assert_eq!(map.bucket_count(), 256);
    }

    #[test]
    fn test_shared_map_miss_is_error() {
        let shared = SharedStringMap::with_buckets(8).unwrap();
        let key = KeyHandle::new("a");
        shared.insert(key.clone(), "1").unwrap();
        assert_eq!(shared.lookup(&key).unwrap(), "1");
        assert!(shared.lookup(&KeyHandle::new("a")).unwrap_err().is_not_found());
        assert!(!shared.is_empty());
    }
}
