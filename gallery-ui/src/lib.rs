//! gallery-ui - Pure gallery and lightbox logic
//!
//! Contains the item model, loader policy, renderer derivations, lightbox
//! state machine and focus trap. Nothing here touches the DOM; the browser
//! front-end plugs in through the [`GalleryView`] trait.

pub mod app;
pub mod config;
pub mod display_types;
pub mod error;
pub mod focus;
pub mod keyboard;
pub mod lightbox;
pub mod loader;
pub mod markup;
pub mod render;
pub mod state;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use app::{Gallery, GalleryStatus};
pub use config::{GalleryConfig, InlineFailurePolicy, Labels};
pub use display_types::{Dimensions, GalleryItem};
pub use error::{ConfigError, LoadError};
pub use focus::ModalControl;
pub use keyboard::KeyInput;
pub use lightbox::LightboxController;
pub use state::{GalleryState, LightboxPhase};
pub use view::GalleryView;
