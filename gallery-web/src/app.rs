//! Event routing between DOM listeners and the gallery

use gallery_ui::{Gallery, GalleryView, KeyInput, ModalControl};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::warn;

/// Something the user did on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    OpenThumbnail(usize),
    Control(ModalControl),
    /// Click on the lightbox background
    Overlay,
    Key { key: String, shift: bool },
}

/// Forwards an event into the gallery. Returns true when the browser's
/// default action should be suppressed.
pub type Dispatcher = Rc<dyn Fn(GalleryEvent) -> bool>;

pub type SharedGallery<V> = Rc<RefCell<Gallery<V>>>;

/// Apply one event. Returns true when it was consumed.
pub fn apply_event<V: GalleryView>(gallery: &mut Gallery<V>, event: &GalleryEvent) -> bool {
    match event {
        GalleryEvent::OpenThumbnail(index) => gallery.open(*index),
        GalleryEvent::Control(ModalControl::Close) | GalleryEvent::Overlay => {
            let was_open = gallery.state().is_open();
            gallery.close();
            was_open
        }
        GalleryEvent::Control(ModalControl::Prev) => {
            gallery.show_previous();
            true
        }
        GalleryEvent::Control(ModalControl::Next) => {
            gallery.show_next();
            true
        }
        GalleryEvent::Key { key, shift } => gallery.handle_key(&KeyInput::new(key, *shift)),
    }
}

/// Build a dispatcher that holds the gallery weakly, so listeners owned by
/// the view don't keep their own owner alive.
pub fn dispatcher<V: GalleryView + 'static>(gallery: &SharedGallery<V>) -> Dispatcher {
    let weak: Weak<RefCell<Gallery<V>>> = Rc::downgrade(gallery);
    Rc::new(move |event| {
        let Some(gallery) = weak.upgrade() else {
            return false;
        };
        let Ok(mut gallery) = gallery.try_borrow_mut() else {
            warn!("Dropping {:?}: gallery is busy", event);
            return false;
        };
        apply_event(&mut gallery, &event)
    })
}
