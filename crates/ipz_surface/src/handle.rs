//! Explicit element handle to image identity mapping.

use std::collections::HashMap;

/// Opaque handle to an element the surface created for the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(u32);

impl ElementHandle {
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Allocates handles and remembers which image identity each one belongs to,
/// so hit-testing never depends on host object identity.
#[derive(Debug, Clone, Default)]
pub struct HandleMap {
    next: u32,
    identities: HashMap<ElementHandle, String>,
}

impl HandleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh handle for an identity.
    pub fn insert(&mut self, identity: impl Into<String>) -> ElementHandle {
        let handle = ElementHandle(self.next);
        self.next += 1;
        self.identities.insert(handle, identity.into());
        handle
    }

    /// Identity an element handle was allocated for, if any.
    pub fn resolve(&self, handle: ElementHandle) -> Option<&str> {
        self.identities.get(&handle).map(String::as_str)
    }

    /// Handle allocated for an identity, if any.
    pub fn handle_for(&self, identity: &str) -> Option<ElementHandle> {
        self.identities
            .iter()
            .find(|(_, id)| id.as_str() == identity)
            .map(|(handle, _)| *handle)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Forget all mappings. Handles are never reused after a clear.
    pub fn clear(&mut self) {
        self.identities.clear();
    }
}
