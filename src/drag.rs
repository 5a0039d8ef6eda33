//! Transient state of one pointer drag.

use crate::constants::ZOOM_DRAG_DIVISOR;
use crate::model::Viewport;
use crate::zoom_math::snap_to_grid;

/// What an active drag changes, with the value it started from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMode {
    /// Move the viewport; anchored at the viewport position
    PanViewport { origin_x: f64, origin_y: f64 },
    /// Move one image; anchored at that image's position
    DragImage {
        target: usize,
        origin_x: f64,
        origin_y: f64,
    },
    /// Change the zoom level; anchored at the zoom level
    DragZoom { origin_zoom: f64 },
}

/// One drag between a pointer press and its release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    mode: DragMode,
    drag_x: f64,
    drag_y: f64,
}

impl DragSession {
    /// Start panning from the viewport's current position.
    pub fn pan(viewport: &Viewport) -> Self {
        Self::start(DragMode::PanViewport {
            origin_x: viewport.x,
            origin_y: viewport.y,
        })
    }

    /// Start dragging the image at `target`, currently at `(x, y)`.
    pub fn image(target: usize, x: f64, y: f64) -> Self {
        Self::start(DragMode::DragImage {
            target,
            origin_x: x,
            origin_y: y,
        })
    }

    /// Start a zoom drag from the viewport's current zoom level.
    pub fn zoom(viewport: &Viewport) -> Self {
        Self::start(DragMode::DragZoom {
            origin_zoom: viewport.zoom(),
        })
    }

    fn start(mode: DragMode) -> Self {
        Self {
            mode,
            drag_x: 0.0,
            drag_y: 0.0,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Accumulated pointer delta since the drag started.
    pub fn drag(&self) -> (f64, f64) {
        (self.drag_x, self.drag_y)
    }

    /// Anchor position for pan and image drags.
    pub fn origin(&self) -> Option<(f64, f64)> {
        match self.mode {
            DragMode::PanViewport { origin_x, origin_y }
            | DragMode::DragImage {
                origin_x, origin_y, ..
            } => Some((origin_x, origin_y)),
            DragMode::DragZoom { .. } => None,
        }
    }

    /// Anchor zoom level for zoom drags.
    pub fn origin_zoom(&self) -> Option<f64> {
        match self.mode {
            DragMode::DragZoom { origin_zoom } => Some(origin_zoom),
            _ => None,
        }
    }

    /// Add one frame of pointer movement.
    ///
    /// Panning subtracts movement: dragging the content right moves the
    /// viewport left.
    pub fn accumulate(&mut self, movement_x: f64, movement_y: f64) {
        match self.mode {
            DragMode::PanViewport { .. } => {
                self.drag_x -= movement_x;
                self.drag_y -= movement_y;
            }
            DragMode::DragImage { .. } | DragMode::DragZoom { .. } => {
                self.drag_x += movement_x;
                self.drag_y += movement_y;
            }
        }
    }

    /// Position a pan or image drag currently maps to, at `zoom_ratio`.
    /// Image positions snap to the grid; the viewport does not.
    pub fn target_position(&self, zoom_ratio: f64, grid_spacing: f64) -> Option<(f64, f64)> {
        match self.mode {
            DragMode::PanViewport { origin_x, origin_y } => Some((
                origin_x + self.drag_x / zoom_ratio,
                origin_y + self.drag_y / zoom_ratio,
            )),
            DragMode::DragImage {
                origin_x, origin_y, ..
            } => Some((
                snap_to_grid(origin_x + self.drag_x / zoom_ratio, grid_spacing),
                snap_to_grid(origin_y + self.drag_y / zoom_ratio, grid_spacing),
            )),
            DragMode::DragZoom { .. } => None,
        }
    }

    /// Zoom level a zoom drag currently maps to (unclamped).
    pub fn target_zoom(&self) -> Option<f64> {
        self.origin_zoom()
            .map(|origin_zoom| origin_zoom + self.drag_x / ZOOM_DRAG_DIVISOR)
    }
}
