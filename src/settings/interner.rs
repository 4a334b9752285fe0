//! Key interning for the settings loader

use std::collections::HashMap;

use crate::map::KeyHandle;

/// Hands out one [`KeyHandle`] per distinct key text.
///
/// Routing every key through the same interner is what lets a later source
/// update an earlier one's entry instead of shadowing it.
#[derive(Debug, Default)]
pub struct KeyInterner {
    handles: HashMap<String, KeyHandle>,
}

impl KeyInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, text: &str) -> KeyHandle {
        if let Some(handle) = self.handles.get(text) {
            return handle.clone();
        }
        let handle = KeyHandle::new(text);
        self.handles.insert(text.to_string(), handle.clone());
        handle
    }

    /// The handle previously interned for `text`, if any.
    pub fn resolve(&self, text: &str) -> Option<&KeyHandle> {
        self.handles.get(text)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
