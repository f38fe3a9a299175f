//! Lightbox controller
//!
//! Two states, Closed and Open. The controller borrows the session state and
//! the view for the duration of one event; it holds nothing itself.

use crate::config::Labels;
use crate::focus::ModalControl;
use crate::state::{GalleryState, LightboxPhase};
use crate::view::{GalleryView, ModalContent};
use tracing::{debug, warn};

/// `(current + delta) mod total`, wrapping in both directions.
///
/// Returns `current` unchanged for an empty list.
pub fn cycle_index(current: usize, delta: isize, total: usize) -> usize {
    if total == 0 {
        return current;
    }
    let total_i = total as i64;
    let next = (current as i64 + delta as i64).rem_euclid(total_i);
    next as usize
}

pub struct LightboxController<'a, V: GalleryView> {
    state: &'a mut GalleryState<V::FocusHandle>,
    view: &'a mut V,
    labels: &'a Labels,
}

impl<'a, V: GalleryView> LightboxController<'a, V> {
    pub fn new(
        state: &'a mut GalleryState<V::FocusHandle>,
        view: &'a mut V,
        labels: &'a Labels,
    ) -> Self {
        Self {
            state,
            view,
            labels,
        }
    }

    /// Open on `index`, or switch to it if already open.
    ///
    /// Returns false (and changes nothing) for an empty list or an
    /// out-of-range index.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.state.len() {
            warn!(
                "Ignoring lightbox open for index {} ({} items)",
                index,
                self.state.len()
            );
            return false;
        }

        if self.state.phase() == LightboxPhase::Closed {
            let handle = self.view.capture_focus();
            self.state.remember_focus(handle);
            self.view.listen_keyboard();
            self.state.set_phase(LightboxPhase::Open);
        }

        self.update(index);
        self.view.show_modal();
        self.view.focus_control(ModalControl::Close);
        debug!("Lightbox open on item {}", index);
        true
    }

    /// Show `index` in the open lightbox.
    pub fn update(&mut self, index: usize) {
        let total = self.state.len();
        let Some(item) = self.state.item(index) else {
            warn!("Ignoring lightbox update for index {} ({} items)", index, total);
            return;
        };

        let fallback = self.labels.default_caption.as_str();
        let content = ModalContent {
            src: item.src.clone(),
            alt: item.resolved_alt(fallback).into_owned(),
            caption: item.resolved_caption(fallback).into_owned(),
            size: item.full_size(),
        };

        self.state.set_current_index(index);
        self.view.set_modal_content(&content);
        self.view.set_cycling_enabled(total > 1);
    }

    /// Close and hand focus back. No-op when already closed.
    pub fn close(&mut self) {
        if self.state.phase() != LightboxPhase::Open {
            return;
        }

        self.view.hide_modal();
        self.view.clear_modal_content();
        self.view.unlisten_keyboard();
        self.state.set_phase(LightboxPhase::Closed);

        if let Some(handle) = self.state.take_previous_focus() {
            if !self.view.restore_focus(handle) {
                debug!("Previously focused element is gone; not restoring focus");
            }
        }
        debug!("Lightbox closed");
    }

    /// Index `delta` steps away from the current one.
    pub fn cycle(&self, delta: isize) -> usize {
        cycle_index(self.state.current_index(), delta, self.state.len())
    }

    pub fn show_next(&mut self) {
        self.step(1);
    }

    pub fn show_previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        if !self.state.is_open() || self.state.is_empty() {
            return;
        }
        let index = self.cycle(delta);
        self.update(index);
    }

    pub(crate) fn state(&self) -> &GalleryState<V::FocusHandle> {
        &*self.state
    }

    pub(crate) fn view(&self) -> &V {
        &*self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut V {
        &mut *self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_backwards_from_zero() {
        assert_eq!(cycle_index(0, -1, 5), 4);
    }

    #[test]
    fn test_cycle_wraps_forward_from_last() {
        assert_eq!(cycle_index(4, 1, 5), 0);
    }

    #[test]
    fn test_cycle_large_deltas() {
        assert_eq!(cycle_index(1, 7, 5), 3);
        assert_eq!(cycle_index(1, -7, 5), 4);
    }

    #[test]
    fn test_cycle_single_item() {
        assert_eq!(cycle_index(0, 1, 1), 0);
        assert_eq!(cycle_index(0, -1, 1), 0);
    }

    #[test]
    fn test_cycle_empty_returns_current() {
        assert_eq!(cycle_index(3, 1, 0), 3);
    }
}
