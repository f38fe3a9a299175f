//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep that closure
//! alive for as long as it is attached. `closure.forget()` leaks it and leaves
//! the listener attached forever, so instead the closure lives in an
//! [`EventListener`] that detaches it when dropped:
//!
//! ```ignore
//! // Listener is attached when the EventListener is created
//! let listener = EventListener::new(&document, "keydown", callback);
//!
//! // ...and removed when it goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! A listener may need to be detached from inside its own callback (Escape
//! closing the lightbox). Dropping the closure there would free it while it
//! runs, so [`EventListener::detach`] removes it from the target right away
//! and leaves the drop to the owner.

use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// An event listener that removes itself from its target when dropped.
pub struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: &EventTarget,
        event_name: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(callback));

        let attached = target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_ok();
        if !attached {
            tracing::warn!("Failed to attach {} listener", event_name);
        }

        Self {
            target: target.clone(),
            event_name,
            callback,
            attached,
        }
    }

    /// Stop receiving events without releasing the closure.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.detach();
    }
}
