//! Images managed by the widget.

use serde::Deserialize;

use crate::error::ConstructionError;
use crate::snapshot::ImageSnapshot;
use crate::store::{read_number, remove_key, write_number, ImageField, LayoutStore, StorageKeys};

/// Natural pixel dimensions of a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntrinsicSize {
    pub width: u32,
    pub height: u32,
}

impl IntrinsicSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Logical geometry of a placed image.
///
/// The end coordinates are derived from position and size on every write
/// and cannot be set on their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    x_end: f64,
    y_end: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            x_end: x + width,
            y_end: y + height,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    pub fn y_end(&self) -> f64 {
        self.y_end
    }

    /// Same size, moved to a new position.
    pub fn with_position(&self, x: f64, y: f64) -> Self {
        Self::new(x, y, self.width, self.height)
    }
}

/// One image on the canvas: a stable identity, an optional label, its
/// insertion index, and its geometry once the layout pass has run.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    id: String,
    label: Option<String>,
    index: usize,
    geometry: Option<Geometry>,
}

impl ImageItem {
    pub fn new(id: impl Into<String>, label: Option<String>) -> Self {
        Self {
            id: id.into(),
            label,
            index: 0,
            geometry: None,
        }
    }

    /// Stable identity (typically the image source path).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Position in the widget's image list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Geometry, or `None` before the layout pass.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Move the image. Returns false if it has no geometry yet.
    pub fn set_position(&mut self, x: f64, y: f64) -> bool {
        match self.geometry {
            Some(geometry) => {
                self.geometry = Some(geometry.with_position(x, y));
                true
            }
            None => false,
        }
    }

    /// Apply default geometry, letting each persisted field override its
    /// default independently, then write the result through.
    pub fn initialize(&mut self, defaults: Geometry, store: &mut dyn LayoutStore, keys: &StorageKeys) {
        let read = |field| read_number(&*store, &keys.image(&self.id, field));
        let width = read(ImageField::Width).unwrap_or(defaults.width());
        let height = read(ImageField::Height).unwrap_or(defaults.height());
        let x = read(ImageField::X).unwrap_or(defaults.x());
        let y = read(ImageField::Y).unwrap_or(defaults.y());
        self.geometry = Some(Geometry::new(x, y, width, height));
        self.store(store, keys);
    }

    /// Persist the current geometry. Does nothing before the layout pass.
    pub fn store(&self, store: &mut dyn LayoutStore, keys: &StorageKeys) {
        let Some(geometry) = self.geometry else {
            return;
        };
        write_number(store, &keys.image(&self.id, ImageField::Width), geometry.width());
        write_number(store, &keys.image(&self.id, ImageField::Height), geometry.height());
        write_number(store, &keys.image(&self.id, ImageField::X), geometry.x());
        write_number(store, &keys.image(&self.id, ImageField::Y), geometry.y());
    }

    /// Remove every persisted field of this image.
    pub fn clear_storage(&self, store: &mut dyn LayoutStore, keys: &StorageKeys) {
        for field in ImageField::ALL {
            remove_key(store, &keys.image(&self.id, field));
        }
    }

    pub fn export(&self) -> ImageSnapshot {
        ImageSnapshot {
            src: self.id.clone(),
            width: self.geometry.map(|g| g.width()),
            height: self.geometry.map(|g| g.height()),
            x: self.geometry.map(|g| g.x()),
            y: self.geometry.map(|g| g.y()),
        }
    }
}

/// An image descriptor as it appears in JSON: a bare identity string or an
/// object with `src` (alias `id`) and an optional `label`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImageDescriptor {
    Bare(String),
    Described {
        #[serde(alias = "id")]
        src: String,
        #[serde(default)]
        label: Option<String>,
    },
}

/// Every accepted way of supplying an image to the widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ImageDescriptor")]
pub enum ImageSpec {
    /// Identity only
    Bare(String),
    /// Identity with an optional label
    Described { src: String, label: Option<String> },
    /// An already constructed item
    Item(ImageItem),
}

impl ImageSpec {
    /// Build the item for this spec at `index`, validating its identity.
    pub fn into_item(self, index: usize) -> Result<ImageItem, ConstructionError> {
        let mut item = match self {
            ImageSpec::Bare(src) => ImageItem::new(src, None),
            ImageSpec::Described { src, label } => ImageItem::new(src, label),
            ImageSpec::Item(item) => item,
        };
        if item.id.trim().is_empty() {
            return Err(ConstructionError::EmptyIdentity { index });
        }
        item.set_index(index);
        Ok(item)
    }
}

impl From<ImageDescriptor> for ImageSpec {
    fn from(descriptor: ImageDescriptor) -> Self {
        match descriptor {
            ImageDescriptor::Bare(src) => ImageSpec::Bare(src),
            ImageDescriptor::Described { src, label } => ImageSpec::Described { src, label },
        }
    }
}

impl From<&str> for ImageSpec {
    fn from(src: &str) -> Self {
        ImageSpec::Bare(src.to_string())
    }
}

impl From<String> for ImageSpec {
    fn from(src: String) -> Self {
        ImageSpec::Bare(src)
    }
}

impl From<ImageItem> for ImageSpec {
    fn from(item: ImageItem) -> Self {
        ImageSpec::Item(item)
    }
}
