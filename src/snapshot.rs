//! Exported layout snapshots.
//!
//! A snapshot is a full, store-independent dump of the widget configuration
//! and layout, suitable for saving to a file. Seeding a store from a
//! snapshot and laying the same images out again reproduces it.

use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;
use crate::store::{write_number, ImageField, LayoutStore, StorageKeys, ViewportField};

/// Exported geometry of one image. Fields are `null` before layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSnapshot {
    pub src: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Exported configuration and layout of a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub zoom_increment: f64,
    pub image_width: f64,
    pub grid_spacing: f64,
    pub zoom: f64,
    pub x: f64,
    pub y: f64,
    pub images: Vec<ImageSnapshot>,
}

impl LayoutSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Widget configuration with this snapshot's layout parameters.
    pub fn config(&self, base: &WidgetConfig) -> WidgetConfig {
        base.clone()
            .with_zoom_increment(self.zoom_increment)
            .with_image_width(self.image_width)
            .with_grid_spacing(self.grid_spacing)
    }

    /// Write the snapshot's viewport and image geometry into `store`.
    pub fn seed_store(&self, store: &mut dyn LayoutStore, keys: &StorageKeys) {
        write_number(store, &keys.viewport(ViewportField::X), self.x);
        write_number(store, &keys.viewport(ViewportField::Y), self.y);
        write_number(store, &keys.viewport(ViewportField::Zoom), self.zoom);
        for image in &self.images {
            let fields = [
                (ImageField::Width, image.width),
                (ImageField::Height, image.height),
                (ImageField::X, image.x),
                (ImageField::Y, image.y),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    write_number(store, &keys.image(&image.src, field), value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{read_number, MemoryStore};

    fn sample() -> LayoutSnapshot {
        LayoutSnapshot {
            zoom_increment: 0.25,
            image_width: 100.0,
            grid_spacing: 20.0,
            zoom: -1.5,
            x: 12.0,
            y: -8.5,
            images: vec![
                ImageSnapshot {
                    src: "a.png".to_string(),
                    width: Some(100.0),
                    height: Some(75.0),
                    x: Some(0.0),
                    y: Some(40.0),
                },
                ImageSnapshot {
                    src: "b.png".to_string(),
                    width: None,
                    height: None,
                    x: None,
                    y: None,
                },
            ],
        }
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"zoomIncrement\": 0.25"));
        assert!(json.contains("\"imageWidth\": 100.0"));
        assert!(json.contains("\"gridSpacing\": 20.0"));
        assert!(json.contains("\"width\": null"));
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot = sample();
        let parsed = LayoutSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_seed_store_skips_missing_geometry() {
        let keys = StorageKeys::new("ns");
        let mut store = MemoryStore::new();
        sample().seed_store(&mut store, &keys);

        assert_eq!(store.len(), 3 + 4);
        assert_eq!(read_number(&store, &keys.viewport(ViewportField::Zoom)), Some(-1.5));
        assert_eq!(read_number(&store, &keys.image("a.png", ImageField::Y)), Some(40.0));
        assert_eq!(read_number(&store, &keys.image("b.png", ImageField::X)), None);
    }

    #[test]
    fn test_config_from_snapshot() {
        let config = sample().config(&WidgetConfig::default().with_storage_namespace("other"));
        assert_eq!(config.zoom_increment, 0.25);
        assert_eq!(config.image_width, 100.0);
        assert_eq!(config.grid_spacing, 20.0);
        assert_eq!(config.storage_namespace, "other");
    }
}
