//! Identity-based key handles
//!
//! The map decides "same key" by instance, not by text. Two handles built
//! separately from equal text are different keys; a cloned handle is the
//! same key. Callers that want text equality intern their keys first
//! (see [`crate::settings::KeyInterner`]).

use std::{fmt, sync::Arc};

/// Shared, immutable key text compared by instance.
#[derive(Clone)]
pub struct KeyHandle {
    text: Arc<str>,
}

impl KeyHandle {
    /// Allocates a new key instance, distinct from every existing handle.
    pub fn new(text: &str) -> Self {
        Self {
            text: Arc::from(text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// True when both handles denote the very same stored instance.
    pub fn same_instance(a: &KeyHandle, b: &KeyHandle) -> bool {
        Arc::ptr_eq(&a.text, &b.text)
    }

    /// Empty text and embedded NULs are never valid keys.
    pub(crate) fn is_usable(&self) -> bool {
        !self.text.is_empty() && !self.text.contains('\0')
    }
}

impl fmt::Debug for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyHandle({:?}@{:p})", &*self.text, Arc::as_ptr(&self.text))
    }
}

impl fmt::Display for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_same_instance() {
        let a = KeyHandle::new("host");
        let b = a.clone();
        assert!(KeyHandle::same_instance(&a, &b));
    }

    #[test]
    fn test_equal_text_is_distinct_instance() {
        let a = KeyHandle::new("host");
        let b = KeyHandle::new("host");
        assert_eq!(a.as_str(), b.as_str());
        assert!(!KeyHandle::same_instance(&a, &b));
    }

    #[test]
    fn test_usable() {
        assert!(KeyHandle::new("port").is_usable());
        assert!(!KeyHandle::new("").is_usable());
        assert!(!KeyHandle::new("a\0b").is_usable());
    }
}
