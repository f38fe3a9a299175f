//! Gallery composition root
//!
//! [`Gallery`] owns the configuration, the session state and the view. Each
//! incoming event (load finished, thumbnail clicked, key pressed) is one
//! method call that borrows them for its duration.

use crate::config::GalleryConfig;
use crate::display_types::GalleryItem;
use crate::error::LoadError;
use crate::keyboard::KeyInput;
use crate::lightbox::LightboxController;
use crate::render::{bind_thumbnails, parse_index, thumbnails};
use crate::state::GalleryState;
use crate::view::{GalleryView, Notice};
use tracing::{error, info};

/// What the gallery region shows after a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryStatus {
    Ready { count: usize, hydrated: bool },
    Empty,
    Failed,
}

pub struct Gallery<V: GalleryView> {
    config: GalleryConfig,
    state: GalleryState<V::FocusHandle>,
    view: V,
    /// Set once the gallery region has been drawn by us
    rendered: bool,
}

impl<V: GalleryView> Gallery<V> {
    pub fn new(config: GalleryConfig, view: V) -> Self {
        Self {
            config,
            state: GalleryState::new(),
            view,
            rendered: false,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn state(&self) -> &GalleryState<V::FocusHandle> {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn lightbox(&mut self) -> LightboxController<'_, V> {
        LightboxController::new(&mut self.state, &mut self.view, &self.config.labels)
    }

    /// Wire pre-rendered thumbnails so they respond before data arrives.
    pub fn bind_existing(&mut self) -> usize {
        bind_thumbnails(&mut self.view, self.state.len())
    }

    /// Install the outcome of a load and redraw the gallery region.
    pub fn apply_load(&mut self, result: Result<Vec<GalleryItem>, LoadError>) -> GalleryStatus {
        // Indices into the old list mean nothing after this point
        self.lightbox().close();

        let items = match result {
            Ok(items) => items,
            Err(e) => {
                error!("Failed to load gallery data: {}", e);
                self.state.replace_items(Vec::new());
                let notice = Notice::LoadFailed(self.config.labels.load_error_message.clone());
                self.view.render_notice(&notice);
                self.rendered = true;
                return GalleryStatus::Failed;
            }
        };

        self.state.replace_items(items);
        if self.state.is_empty() {
            info!("Gallery is empty");
            let notice = Notice::Empty(self.config.labels.empty_message.clone());
            self.view.render_notice(&notice);
            self.rendered = true;
            return GalleryStatus::Empty;
        }

        let count = self.state.len();
        let hydrated =
            self.config.hydrate_existing_markup && !self.rendered && self.markup_matches(count);
        self.rendered = true;
        if !hydrated {
            let thumbs = thumbnails(self.state.items(), &self.config.labels);
            self.view.render_thumbnails(&thumbs);
        }
        bind_thumbnails(&mut self.view, count);
        info!("Gallery ready with {} items (hydrated: {})", count, hydrated);

        GalleryStatus::Ready { count, hydrated }
    }

    /// Pre-rendered markup is reusable when it holds exactly one control per
    /// item, indexed 0..count in document order.
    fn markup_matches(&self, count: usize) -> bool {
        let slots = self.view.thumbnail_slots();
        slots.len() == count
            && slots
                .iter()
                .enumerate()
                .all(|(position, slot)| parse_index(slot.index_attr.as_deref()) == Some(position))
    }

    pub fn open(&mut self, index: usize) -> bool {
        self.lightbox().open(index)
    }

    pub fn close(&mut self) {
        self.lightbox().close();
    }

    pub fn show_next(&mut self) {
        self.lightbox().show_next();
    }

    pub fn show_previous(&mut self) {
        self.lightbox().show_previous();
    }

    /// Returns true when the key was consumed and its default action should
    /// be suppressed.
    pub fn handle_key(&mut self, input: &KeyInput<'_>) -> bool {
        self.lightbox().handle_key(input)
    }
}
