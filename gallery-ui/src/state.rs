//! Gallery session state

use crate::display_types::GalleryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxPhase {
    #[default]
    Closed,
    Open,
}

/// Everything the gallery mutates during a page session.
///
/// `H` is the view's handle to a focusable element. It carries no ownership;
/// the element it points at may be gone by the time it is read.
#[derive(Debug)]
pub struct GalleryState<H> {
    items: Vec<GalleryItem>,
    current_index: usize,
    phase: LightboxPhase,
    previously_focused: Option<H>,
}

impl<H> Default for GalleryState<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> GalleryState<H> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current_index: 0,
            phase: LightboxPhase::Closed,
            previously_focused: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Swap in a freshly loaded list. Callers close the lightbox first.
    pub fn replace_items(&mut self, items: Vec<GalleryItem>) {
        self.items = items;
        self.current_index = 0;
    }

    pub fn item(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Only meaningful while the lightbox is open.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    pub fn phase(&self) -> LightboxPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == LightboxPhase::Open
    }

    pub(crate) fn set_phase(&mut self, phase: LightboxPhase) {
        self.phase = phase;
    }

    pub(crate) fn remember_focus(&mut self, handle: Option<H>) {
        self.previously_focused = handle;
    }

    /// Read-once: the handle is gone after this call.
    pub(crate) fn take_previous_focus(&mut self) -> Option<H> {
        self.previously_focused.take()
    }

    pub fn has_previous_focus(&self) -> bool {
        self.previously_focused.is_some()
    }
}
