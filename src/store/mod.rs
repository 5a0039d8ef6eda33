//! Persistent layout storage.
//!
//! Layout state is written field by field into a string-keyed store. The
//! viewport uses keys `[namespace, field]` and every image uses
//! `[namespace + "Image", identity, field]`, joined by [`SEPARATOR`], a
//! control character that never appears in an image identity.
//!
//! Persistence is best effort: the helpers in this module log failures and
//! carry on, so a broken store degrades to the default layout on next load.

mod error;
#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;
mod memory;

pub use error::StoreError;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;

/// Separator between key components (ASCII file separator).
pub const SEPARATOR: char = '\u{1c}';

/// A string-keyed persistent store.
pub trait LayoutStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Persisted viewport fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportField {
    X,
    Y,
    Zoom,
}

impl ViewportField {
    pub const ALL: [ViewportField; 3] = [ViewportField::X, ViewportField::Y, ViewportField::Zoom];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewportField::X => "x",
            ViewportField::Y => "y",
            ViewportField::Zoom => "zoom",
        }
    }
}

/// Persisted image fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    Width,
    Height,
    X,
    Y,
}

impl ImageField {
    pub const ALL: [ImageField; 4] = [
        ImageField::Width,
        ImageField::Height,
        ImageField::X,
        ImageField::Y,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageField::Width => "width",
            ImageField::Height => "height",
            ImageField::X => "x",
            ImageField::Y => "y",
        }
    }
}

/// Builds store keys for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    viewport_namespace: String,
    image_namespace: String,
}

impl StorageKeys {
    pub fn new(namespace: &str) -> Self {
        Self {
            viewport_namespace: namespace.to_string(),
            image_namespace: format!("{namespace}Image"),
        }
    }

    /// Key of a viewport field.
    pub fn viewport(&self, field: ViewportField) -> String {
        join_key(&[&self.viewport_namespace, field.as_str()])
    }

    /// Key of an image field.
    pub fn image(&self, identity: &str, field: ImageField) -> String {
        join_key(&[&self.image_namespace, identity, field.as_str()])
    }
}

fn join_key(parts: &[&str]) -> String {
    let mut key = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            key.push(SEPARATOR);
        }
        key.push_str(part);
    }
    key
}

/// Read a persisted number. Absent or unparseable values read as `None`.
pub fn read_number(store: &dyn LayoutStore, key: &str) -> Option<f64> {
    let raw = store.get(key)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log::warn!("Ignoring unparseable persisted value {:?} for {:?}", raw, key);
            None
        }
    }
}

/// Write a number, logging (and otherwise ignoring) store failures.
pub fn write_number(store: &mut dyn LayoutStore, key: &str, value: f64) {
    if let Err(e) = store.set(key, &value.to_string()) {
        log::warn!("Failed to persist {:?}: {}", key, e);
    }
}

/// Remove a key, logging (and otherwise ignoring) store failures.
pub fn remove_key(store: &mut dyn LayoutStore, key: &str) {
    if let Err(e) = store.remove(key) {
        log::warn!("Failed to remove persisted {:?}: {}", key, e);
    }
}
