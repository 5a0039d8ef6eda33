//! In-memory surface that records what the widget asks of it.

use std::collections::HashMap;

use crate::{Adaptation, ElementHandle, HandleMap, Positioning, Rect, Surface, DEFAULT_SIZE_FRACTION};

/// Recorded state of one attached element.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessElement {
    pub label: Option<String>,
    pub visible: bool,
    pub rect: Option<Rect>,
}

/// A surface with no rendering backend, used by the native binary and tests.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    positioning: Positioning,
    /// Size of the host viewport the container lives in
    host_size: (f64, f64),
    /// Size of the container itself
    size: (f64, f64),
    handles: HandleMap,
    elements: HashMap<ElementHandle, HeadlessElement>,
    confirm_answer: bool,
    confirm_prompts: Vec<String>,
}

impl HeadlessSurface {
    /// Create a relatively positioned surface of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            positioning: Positioning::Relative,
            host_size: (width, height),
            size: (width, height),
            handles: HandleMap::new(),
            elements: HashMap::new(),
            confirm_answer: true,
            confirm_prompts: Vec::new(),
        }
    }

    pub fn with_positioning(mut self, positioning: Positioning) -> Self {
        self.positioning = positioning;
        self
    }

    /// Set the host viewport size used when stretching or defaulting.
    pub fn with_host_size(mut self, width: f64, height: f64) -> Self {
        self.host_size = (width, height);
        self
    }

    /// Set the answer given to every confirmation prompt.
    pub fn with_confirm_answer(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = (width, height);
    }

    /// Handle of the element attached for an identity.
    pub fn handle_of(&self, identity: &str) -> Option<ElementHandle> {
        self.handles.handle_for(identity)
    }

    pub fn element(&self, identity: &str) -> Option<&HeadlessElement> {
        self.handle_of(identity)
            .and_then(|handle| self.elements.get(&handle))
    }

    /// Last placement of the element attached for an identity.
    pub fn rect_of(&self, identity: &str) -> Option<Rect> {
        self.element(identity).and_then(|element| element.rect)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn confirm_prompts(&self) -> &[String] {
        &self.confirm_prompts
    }
}

impl Surface for HeadlessSurface {
    fn positioning(&self) -> Positioning {
        self.positioning.clone()
    }

    fn adapt(&mut self, adaptation: Adaptation) {
        match adaptation {
            Adaptation::StretchToViewport => {
                self.size = self.host_size;
            }
            Adaptation::KeepAsIs => {}
            Adaptation::MakeRelative => {
                self.positioning = Positioning::Relative;
                if self.size.0 <= 0.0 {
                    self.size.0 = self.host_size.0 * DEFAULT_SIZE_FRACTION;
                }
                if self.size.1 <= 0.0 {
                    self.size.1 = self.host_size.1 * DEFAULT_SIZE_FRACTION;
                }
            }
        }
        log::debug!("Headless surface adapted ({:?}), size {:?}", adaptation, self.size);
    }

    fn content_size(&self) -> (f64, f64) {
        self.size
    }

    fn clear(&mut self) {
        self.handles.clear();
        self.elements.clear();
    }

    fn attach_image(&mut self, identity: &str, label: Option<&str>) -> ElementHandle {
        let handle = self.handles.insert(identity);
        self.elements.insert(
            handle,
            HeadlessElement {
                label: label.map(str::to_string),
                visible: false,
                rect: None,
            },
        );
        handle
    }

    fn identity_of(&self, handle: ElementHandle) -> Option<&str> {
        self.handles.resolve(handle)
    }

    fn show_image(&mut self, handle: ElementHandle) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.visible = true;
        }
    }

    fn place(&mut self, handle: ElementHandle, rect: Rect) {
        if let Some(element) = self.elements.get_mut(&handle) {
            element.rect = Some(rect);
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.confirm_prompts.push(prompt.to_string());
        self.confirm_answer
    }
}
