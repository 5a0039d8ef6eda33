//! The widget façade: one [`InteractionController`] driving one [`Surface`].

use ipz_surface::{ElementHandle, Event, EventStatus, EventTarget, Surface};

use crate::config::WidgetConfig;
use crate::constants::CLEAR_CACHE_PROMPT;
use crate::controller::{InteractionController, PointerTarget, WheelOutcome};
use crate::error::WidgetError;
use crate::keybindings::{Command, KeyBindings};
use crate::model::{ImageSpec, IntrinsicSize};
use crate::snapshot::LayoutSnapshot;
use crate::store::{LayoutStore, MemoryStore};

/// A pannable, zoomable canvas of labeled images.
///
/// Construction validates the images and configuration; [`run`](Self::run)
/// adapts the surface and attaches one element per image; images become
/// visible and laid out once every one has reported its intrinsic size
/// through [`image_loaded`](Self::image_loaded).
pub struct ImagePannerZoomer<S: Surface> {
    controller: InteractionController,
    surface: S,
    /// Element handle per image index, assigned by `run`
    handles: Vec<Option<ElementHandle>>,
}

impl<S: Surface> ImagePannerZoomer<S> {
    pub fn new(
        images: Vec<ImageSpec>,
        surface: S,
        config: WidgetConfig,
        store: Box<dyn LayoutStore>,
    ) -> Result<Self, WidgetError> {
        let controller = InteractionController::new(images, config, store)?;
        let handles = vec![None; controller.images().len()];
        Ok(Self {
            controller,
            surface,
            handles,
        })
    }

    /// Build with default configuration and an in-memory store.
    pub fn with_defaults(images: Vec<ImageSpec>, surface: S) -> Result<Self, WidgetError> {
        Self::new(
            images,
            surface,
            WidgetConfig::default(),
            Box::new(MemoryStore::new()),
        )
    }

    pub fn with_keybindings(mut self, bindings: KeyBindings) -> Self {
        self.controller = self.controller.with_keybindings(bindings);
        self
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Adapt the container to its positioning mode and attach every image.
    pub fn run(&mut self) -> Result<(), WidgetError> {
        let positioning = self.surface.positioning();
        let adaptation = positioning.adaptation()?;
        self.surface.clear();
        self.surface.adapt(adaptation);

        for (index, image) in self.controller.images().iter().enumerate() {
            self.handles[index] = Some(self.surface.attach_image(image.id(), image.label()));
        }
        log::info!(
            "Running in a {} container with {} images",
            positioning.name(),
            self.handles.len()
        );
        Ok(())
    }

    /// Signal that an image finished loading. Returns true when this was the
    /// last one, at which point images are shown, laid out and placed.
    pub fn image_loaded(&mut self, id: &str, size: IntrinsicSize) -> bool {
        if !self.controller.record_intrinsic(id, size) {
            return false;
        }
        for handle in self.handles.iter().flatten() {
            self.surface.show_image(*handle);
        }
        self.controller.initialize_layout();
        self.place_images();
        true
    }

    /// Push every image's current screen rectangle to the surface.
    pub fn place_images(&mut self) {
        let container = self.surface.content_size();
        for (index, rect) in self.controller.placements(container) {
            if let Some(handle) = self.handles[index] {
                self.surface.place(handle, rect);
            }
        }
    }

    /// Route one host event.
    pub fn handle_event(&mut self, event: &Event) -> EventStatus {
        match event {
            Event::KeyDown { key } => EventStatus::from_consumed(self.controller.key_down(*key)),
            Event::KeyUp { key } => EventStatus::from_consumed(self.controller.key_up(*key)),
            Event::KeyPress { key } => match self.controller.command_for_key(*key) {
                Some(Command::ClearCache) => {
                    if self.surface.confirm(CLEAR_CACHE_PROMPT) {
                        self.controller.apply(Command::ClearCache);
                        self.place_images();
                    }
                    EventStatus::Ignored
                }
                Some(command) => {
                    self.controller.apply(command);
                    self.place_images();
                    EventStatus::Ignored
                }
                None => EventStatus::Ignored,
            },
            Event::PointerPressed { target } => {
                let target = match target {
                    EventTarget::Container => PointerTarget::Background,
                    EventTarget::Element(handle) => match self.surface.identity_of(*handle) {
                        Some(id) => PointerTarget::Image(id),
                        None => PointerTarget::Elsewhere,
                    },
                    EventTarget::Outside => PointerTarget::Elsewhere,
                };
                self.controller.pointer_down(target);
                EventStatus::Consumed
            }
            Event::PointerReleased => {
                self.controller.pointer_up();
                EventStatus::Consumed
            }
            Event::PointerMoved {
                movement_x,
                movement_y,
            } => {
                let moved = self.controller.pointer_move(*movement_x, *movement_y);
                if moved {
                    self.place_images();
                }
                EventStatus::from_consumed(moved)
            }
            Event::Wheel { delta_y } => match self.controller.wheel(*delta_y) {
                WheelOutcome::Zoomed => {
                    self.place_images();
                    EventStatus::Consumed
                }
                WheelOutcome::Suppressed => EventStatus::Consumed,
                WheelOutcome::Ignored => EventStatus::Ignored,
            },
            Event::Resized => {
                self.place_images();
                EventStatus::Ignored
            }
            Event::Blurred => {
                self.controller.blur();
                EventStatus::Ignored
            }
        }
    }

    /// Forget the persisted layout without re-running the layout pass.
    pub fn clear_storage(&mut self) {
        self.controller.clear_storage();
    }

    pub fn export(&self) -> LayoutSnapshot {
        self.controller.export()
    }
}
