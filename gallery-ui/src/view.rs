//! The rendering surface the gallery drives
//!
//! The browser front-end implements [`GalleryView`] on top of the DOM; tests
//! use `testing::FakeView`. Everything passed in is already resolved (caption
//! fallbacks applied, sizes chosen), so implementations only copy values into
//! their surface.

use crate::display_types::Dimensions;
use crate::focus::ModalControl;

/// One grid thumbnail, ready to draw
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    /// Ordinal position in the item list, stored on the control as metadata
    pub index: usize,
    pub src: String,
    pub alt: String,
    /// Accessible label for the button, e.g. `夏合宿を拡大表示`
    pub label: String,
    pub caption: String,
    pub size: Option<Dimensions>,
}

/// Informational message shown in place of the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Valid but empty list
    Empty(String),
    /// Data could not be loaded
    LoadFailed(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Empty(text) | Notice::LoadFailed(text) => text,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Notice::Empty(_) => "gallery-empty",
            Notice::LoadFailed(_) => "gallery-error",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            Notice::Empty(_) => "status",
            Notice::LoadFailed(_) => "alert",
        }
    }
}

/// What the lightbox shows for one item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub src: String,
    /// Never empty
    pub alt: String,
    pub caption: String,
    /// Present only when both sides are known; otherwise natural sizing
    pub size: Option<Dimensions>,
}

/// A thumbnail control found in the gallery container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailSlot {
    /// Position among the container's controls, used to address it again
    pub slot: usize,
    /// Raw index metadata, if the control carries any
    pub index_attr: Option<String>,
    /// Already wired for interaction
    pub bound: bool,
}

pub trait GalleryView {
    /// Handle to whatever element held focus before the lightbox opened
    type FocusHandle;

    /// Replace the container's contents with these thumbnails.
    fn render_thumbnails(&mut self, thumbnails: &[Thumbnail]);

    /// Replace the container's contents with a single message.
    fn render_notice(&mut self, notice: &Notice);

    /// Thumbnail controls currently in the container, in document order.
    fn thumbnail_slots(&self) -> Vec<ThumbnailSlot>;

    /// Wire a click handler that opens `index`, and mark the control bound.
    fn bind_thumbnail(&mut self, slot: usize, index: usize);

    fn set_modal_content(&mut self, content: &ModalContent);

    /// Drop the enlarged image, its size and caption.
    fn clear_modal_content(&mut self);

    /// Make the modal visible and exposed to assistive technology.
    fn show_modal(&mut self);

    fn hide_modal(&mut self);

    /// Enable or disable the previous/next controls.
    fn set_cycling_enabled(&mut self, enabled: bool);

    /// Enabled and visible.
    fn control_available(&self, control: ModalControl) -> bool;

    /// The modal control holding focus, if any.
    fn focused_control(&self) -> Option<ModalControl>;

    fn focus_control(&mut self, control: ModalControl);

    fn capture_focus(&self) -> Option<Self::FocusHandle>;

    /// Refocus `handle`. Returns false when it is no longer in the document.
    fn restore_focus(&mut self, handle: Self::FocusHandle) -> bool;

    /// Start delivering key presses to the gallery.
    fn listen_keyboard(&mut self);

    fn unlisten_keyboard(&mut self);
}
