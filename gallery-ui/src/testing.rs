//! In-memory [`GalleryView`] for tests
//!
//! Records what the gallery asked for and lets tests simulate clicks, focus
//! moves and elements being removed from the page.

use crate::focus::ModalControl;
use crate::view::{GalleryView, ModalContent, Notice, Thumbnail, ThumbnailSlot};
use std::collections::HashSet;

/// Where focus sits in the fake document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeFocus {
    Nothing,
    Control(ModalControl),
    /// Some element outside the lightbox, by id
    Element(u32),
}

#[derive(Debug, Clone)]
pub struct FakeControl {
    pub index_attr: Option<String>,
    /// Indices each attached click handler opens
    pub handlers: Vec<usize>,
}

#[derive(Debug)]
pub struct FakeView {
    pub thumbnails: Vec<Thumbnail>,
    pub controls: Vec<FakeControl>,
    pub notice: Option<Notice>,
    pub content: Option<ModalContent>,
    pub modal_visible: bool,
    pub aria_hidden: bool,
    pub cycling_enabled: bool,
    /// Controls not rendered at all, regardless of the enabled state
    pub hidden_controls: HashSet<ModalControl>,
    pub focus: FakeFocus,
    /// Outside elements still in the document
    pub attached: HashSet<u32>,
    pub keyboard_listeners: usize,
    pub render_count: usize,
}

impl Default for FakeView {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeView {
    pub fn new() -> Self {
        Self {
            thumbnails: Vec::new(),
            controls: Vec::new(),
            notice: None,
            content: None,
            modal_visible: false,
            aria_hidden: true,
            cycling_enabled: true,
            hidden_controls: HashSet::new(),
            focus: FakeFocus::Nothing,
            attached: HashSet::new(),
            keyboard_listeners: 0,
            render_count: 0,
        }
    }

    /// Pre-existing thumbnail markup with the given index attributes, unbound.
    pub fn with_markup(index_attrs: &[Option<&str>]) -> Self {
        let mut view = Self::new();
        view.controls = index_attrs
            .iter()
            .map(|attr| FakeControl {
                index_attr: attr.map(str::to_owned),
                handlers: Vec::new(),
            })
            .collect();
        view
    }

    /// Add an outside element and focus it.
    pub fn focus_element(&mut self, id: u32) {
        self.attached.insert(id);
        self.focus = FakeFocus::Element(id);
    }

    pub fn detach_element(&mut self, id: u32) {
        self.attached.remove(&id);
        if self.focus == FakeFocus::Element(id) {
            self.focus = FakeFocus::Nothing;
        }
    }

    /// Indices opened by clicking the control in `slot`, one per handler.
    pub fn click_thumbnail(&self, slot: usize) -> Vec<usize> {
        self.controls
            .get(slot)
            .map(|c| c.handlers.clone())
            .unwrap_or_default()
    }

    pub fn handler_count(&self) -> usize {
        self.controls.iter().map(|c| c.handlers.len()).sum()
    }
}

impl GalleryView for FakeView {
    type FocusHandle = u32;

    fn render_thumbnails(&mut self, thumbnails: &[Thumbnail]) {
        self.render_count += 1;
        self.notice = None;
        self.thumbnails = thumbnails.to_vec();
        self.controls = thumbnails
            .iter()
            .map(|t| FakeControl {
                index_attr: Some(t.index.to_string()),
                handlers: Vec::new(),
            })
            .collect();
    }

    fn render_notice(&mut self, notice: &Notice) {
        self.render_count += 1;
        self.thumbnails.clear();
        self.controls.clear();
        self.notice = Some(notice.clone());
    }

    fn thumbnail_slots(&self) -> Vec<ThumbnailSlot> {
        self.controls
            .iter()
            .enumerate()
            .map(|(slot, c)| ThumbnailSlot {
                slot,
                index_attr: c.index_attr.clone(),
                bound: !c.handlers.is_empty(),
            })
            .collect()
    }

    fn bind_thumbnail(&mut self, slot: usize, index: usize) {
        if let Some(control) = self.controls.get_mut(slot) {
            control.handlers.push(index);
        }
    }

    fn set_modal_content(&mut self, content: &ModalContent) {
        self.content = Some(content.clone());
    }

    fn clear_modal_content(&mut self) {
        self.content = None;
    }

    fn show_modal(&mut self) {
        self.modal_visible = true;
        self.aria_hidden = false;
    }

    fn hide_modal(&mut self) {
        self.modal_visible = false;
        self.aria_hidden = true;
        if matches!(self.focus, FakeFocus::Control(_)) {
            self.focus = FakeFocus::Nothing;
        }
    }

    fn set_cycling_enabled(&mut self, enabled: bool) {
        self.cycling_enabled = enabled;
    }

    fn control_available(&self, control: ModalControl) -> bool {
        if !self.modal_visible || self.hidden_controls.contains(&control) {
            return false;
        }
        match control {
            ModalControl::Close => true,
            ModalControl::Prev | ModalControl::Next => self.cycling_enabled,
        }
    }

    fn focused_control(&self) -> Option<ModalControl> {
        match self.focus {
            FakeFocus::Control(control) => Some(control),
            _ => None,
        }
    }

    fn focus_control(&mut self, control: ModalControl) {
        if self.control_available(control) {
            self.focus = FakeFocus::Control(control);
        }
    }

    fn capture_focus(&self) -> Option<u32> {
        match self.focus {
            FakeFocus::Element(id) => Some(id),
            _ => None,
        }
    }

    fn restore_focus(&mut self, handle: u32) -> bool {
        if self.attached.contains(&handle) {
            self.focus = FakeFocus::Element(handle);
            true
        } else {
            false
        }
    }

    fn listen_keyboard(&mut self) {
        self.keyboard_listeners += 1;
    }

    fn unlisten_keyboard(&mut self) {
        self.keyboard_listeners = self.keyboard_listeners.saturating_sub(1);
    }
}
