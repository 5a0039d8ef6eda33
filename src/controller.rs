//! Interaction state machine.
//!
//! The controller owns the viewport, the images and at most one
//! [`DragSession`]. A new drag can only start from [`InteractionState::Idle`],
//! so two drag modes can never be active at once. Every mutation is written
//! through to the layout store as soon as it happens.

use std::collections::HashSet;

use ipz_surface::{Key, Rect};

use crate::config::WidgetConfig;
use crate::drag::{DragMode, DragSession};
use crate::error::ConstructionError;
use crate::keybindings::{Command, KeyBindings, Modifier};
use crate::layout;
use crate::model::{ImageItem, ImageSpec, IntrinsicSize, Viewport};
use crate::snapshot::LayoutSnapshot;
use crate::store::{LayoutStore, StorageKeys};
use crate::zoom_math::to_screen;

/// Which drag, if any, is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    PanningViewport,
    DraggingImage,
    DraggingZoom,
}

/// Held drag modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub pan: bool,
    pub zoom: bool,
}

/// What a pointer press landed on, resolved to an image identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget<'a> {
    /// The container background
    Background,
    /// The image with this identity
    Image(&'a str),
    /// Anything else
    Elsewhere,
}

/// Result of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The zoom level was stepped
    Zoomed,
    /// A drag is active; the wheel is swallowed without zooming
    Suppressed,
    /// No vertical scroll, or the zoom is already at the limit
    Ignored,
}

/// Routes input into drag sessions and zoom commands.
pub struct InteractionController {
    config: WidgetConfig,
    keys: StorageKeys,
    bindings: KeyBindings,
    viewport: Viewport,
    images: Vec<ImageItem>,
    intrinsic: Vec<Option<IntrinsicSize>>,
    drag: Option<DragSession>,
    modifiers: Modifiers,
    store: Box<dyn LayoutStore>,
}

impl InteractionController {
    /// Build a controller, validating the configuration and every image.
    pub fn new(
        images: Vec<ImageSpec>,
        config: WidgetConfig,
        store: Box<dyn LayoutStore>,
    ) -> Result<Self, ConstructionError> {
        config.validate()?;
        if images.is_empty() {
            return Err(ConstructionError::NoImages);
        }

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(images.len());
        for (index, spec) in images.into_iter().enumerate() {
            let item = spec.into_item(index)?;
            if !seen.insert(item.id().to_string()) {
                return Err(ConstructionError::duplicate_identity(item.id()));
            }
            items.push(item);
        }

        log::debug!("Created controller for {} images", items.len());
        Ok(Self {
            keys: StorageKeys::new(&config.storage_namespace),
            config,
            bindings: KeyBindings::default(),
            viewport: Viewport::default(),
            intrinsic: vec![None; items.len()],
            images: items,
            drag: None,
            modifiers: Modifiers::default(),
            store,
        })
    }

    pub fn with_keybindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn storage_keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn images(&self) -> &[ImageItem] {
        &self.images
    }

    pub fn image(&self, id: &str) -> Option<&ImageItem> {
        self.images.iter().find(|image| image.id() == id)
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn store(&self) -> &dyn LayoutStore {
        self.store.as_ref()
    }

    pub fn state(&self) -> InteractionState {
        match self.drag.as_ref().map(DragSession::mode) {
            None => InteractionState::Idle,
            Some(DragMode::PanViewport { .. }) => InteractionState::PanningViewport,
            Some(DragMode::DragImage { .. }) => InteractionState::DraggingImage,
            Some(DragMode::DragZoom { .. }) => InteractionState::DraggingZoom,
        }
    }

    /// Record an image's intrinsic size. Returns true when this was the
    /// last image still missing one.
    pub fn record_intrinsic(&mut self, id: &str, size: IntrinsicSize) -> bool {
        let Some(index) = self.images.iter().position(|image| image.id() == id) else {
            log::warn!("Load signal for unknown image {:?}", id);
            return false;
        };
        if self.intrinsic[index].is_some() {
            return false;
        }
        self.intrinsic[index] = Some(size);
        log::trace!("Image {:?} loaded at {}x{}", id, size.width, size.height);
        self.is_loaded()
    }

    /// Whether every image's intrinsic size is known.
    pub fn is_loaded(&self) -> bool {
        self.intrinsic.iter().all(Option::is_some)
    }

    /// Run the initial layout pass. Returns false until every image has loaded.
    pub fn initialize_layout(&mut self) -> bool {
        let Some(sizes) = self.intrinsic.iter().copied().collect::<Option<Vec<_>>>() else {
            return false;
        };
        layout::initialize_layout(
            &mut self.images,
            &sizes,
            &mut self.viewport,
            &self.config,
            self.store.as_mut(),
            &self.keys,
        );
        true
    }

    /// Screen rectangle of every laid out image, by image index.
    pub fn placements(&self, container: (f64, f64)) -> Vec<(usize, Rect)> {
        self.images
            .iter()
            .enumerate()
            .filter_map(|(index, image)| {
                image
                    .geometry()
                    .map(|geometry| (index, to_screen(geometry, &self.viewport, container)))
            })
            .collect()
    }

    /// Track a modifier going down. Returns true if the key is a modifier.
    pub fn key_down(&mut self, key: Key) -> bool {
        self.set_modifier(key, true)
    }

    /// Track a modifier going up. Returns true if the key is a modifier.
    pub fn key_up(&mut self, key: Key) -> bool {
        self.set_modifier(key, false)
    }

    fn set_modifier(&mut self, key: Key, down: bool) -> bool {
        match self.bindings.modifier_for_key(key) {
            Some(Modifier::Pan) => {
                self.modifiers.pan = down;
                true
            }
            Some(Modifier::Zoom) => {
                self.modifiers.zoom = down;
                true
            }
            None => false,
        }
    }

    pub fn command_for_key(&self, key: Key) -> Option<Command> {
        self.bindings.command_for_key(key)
    }

    /// Execute a keyboard command. Any confirmation for
    /// [`Command::ClearCache`] must happen before this call.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ZoomIn => {
                self.step_zoom(self.config.zoom_increment);
            }
            Command::ZoomOut => {
                self.step_zoom(-self.config.zoom_increment);
            }
            Command::ResetZoom => self.set_zoom(0.0),
            Command::ClearCache => self.clear_cache(),
        }
    }

    /// Set the zoom level (clamped) and persist the viewport.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
        self.viewport.store(self.store.as_mut(), &self.keys);
        log::debug!("Zoom set to {}", self.viewport.zoom());
    }

    /// Step the zoom level and persist it. Returns false if the zoom was
    /// already at the limit in that direction.
    fn step_zoom(&mut self, step: f64) -> bool {
        let before = self.viewport.zoom();
        self.viewport.zoom_by(step);
        if self.viewport.zoom() == before {
            return false;
        }
        self.viewport.store(self.store.as_mut(), &self.keys);
        log::debug!("Zoom stepped to {}", self.viewport.zoom());
        true
    }

    /// Handle a pointer press. Returns true if a drag started.
    ///
    /// Ignored while a drag is already active.
    pub fn pointer_down(&mut self, target: PointerTarget<'_>) -> bool {
        if self.drag.is_some() {
            log::debug!("Pointer down ignored, {:?} already active", self.state());
            return false;
        }

        let session = if self.modifiers.pan {
            Some(DragSession::pan(&self.viewport))
        } else if self.modifiers.zoom {
            Some(DragSession::zoom(&self.viewport))
        } else {
            match target {
                PointerTarget::Background => Some(DragSession::pan(&self.viewport)),
                PointerTarget::Image(id) => self
                    .images
                    .iter()
                    .enumerate()
                    .find(|(_, image)| image.id() == id)
                    .and_then(|(index, image)| {
                        image
                            .geometry()
                            .map(|geometry| DragSession::image(index, geometry.x(), geometry.y()))
                    }),
                PointerTarget::Elsewhere => None,
            }
        };

        let Some(session) = session else {
            return false;
        };
        self.drag = Some(session);
        log::debug!("Entered {:?}", self.state());
        true
    }

    /// Handle a pointer release. Returns true if a drag ended.
    pub fn pointer_up(&mut self) -> bool {
        self.stop_drag()
    }

    fn stop_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(session) => {
                log::debug!("Drag ended: {:?}", session.mode());
                true
            }
            None => false,
        }
    }

    /// Handle a pointer move. Returns true if an active drag changed the layout.
    pub fn pointer_move(&mut self, movement_x: f64, movement_y: f64) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        session.accumulate(movement_x, movement_y);
        let session = *session;

        let zoom_ratio = self.viewport.zoom_ratio();
        match session.mode() {
            DragMode::PanViewport { .. } => {
                if let Some((x, y)) = session.target_position(zoom_ratio, self.config.grid_spacing) {
                    self.viewport.x = x;
                    self.viewport.y = y;
                    self.viewport.store(self.store.as_mut(), &self.keys);
                }
            }
            DragMode::DragImage { target, .. } => {
                if let Some((x, y)) = session.target_position(zoom_ratio, self.config.grid_spacing) {
                    let image = &mut self.images[target];
                    image.set_position(x, y);
                    image.store(self.store.as_mut(), &self.keys);
                }
            }
            DragMode::DragZoom { .. } => {
                if let Some(zoom) = session.target_zoom() {
                    self.viewport.set_zoom(zoom);
                    self.viewport.store(self.store.as_mut(), &self.keys);
                }
            }
        }
        log::trace!("Drag moved by ({}, {}), accumulated {:?}", movement_x, movement_y, session.drag());
        true
    }

    /// Handle a wheel event: scroll up zooms in, scroll down zooms out.
    pub fn wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if self.drag.is_some() {
            return WheelOutcome::Suppressed;
        }
        let step = if delta_y < 0.0 {
            self.config.zoom_increment
        } else if delta_y > 0.0 {
            -self.config.zoom_increment
        } else {
            return WheelOutcome::Ignored;
        };
        if self.step_zoom(step) {
            WheelOutcome::Zoomed
        } else {
            WheelOutcome::Ignored
        }
    }

    /// Focus was lost: release both modifiers and cancel any drag.
    pub fn blur(&mut self) {
        self.modifiers = Modifiers::default();
        self.stop_drag();
    }

    /// Remove the persisted viewport and every image's persisted state.
    pub fn clear_storage(&mut self) {
        Viewport::clear_storage(self.store.as_mut(), &self.keys);
        for image in &self.images {
            image.clear_storage(self.store.as_mut(), &self.keys);
        }
    }

    /// Forget the persisted layout and return to the default one.
    pub fn clear_cache(&mut self) {
        self.clear_storage();
        log::info!("Cleared persisted layout");
        self.initialize_layout();
    }

    /// Store-independent dump of the current configuration and layout.
    pub fn export(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            zoom_increment: self.config.zoom_increment,
            image_width: self.config.image_width,
            grid_spacing: self.config.grid_spacing,
            zoom: self.viewport.zoom(),
            x: self.viewport.x,
            y: self.viewport.y,
            images: self.images.iter().map(ImageItem::export).collect(),
        }
    }
}
