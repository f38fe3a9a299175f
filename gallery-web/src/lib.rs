//! gallery-web - Browser front-end for the photo gallery
//!
//! Mounts the gallery onto the page's existing markup when the WebAssembly
//! module starts, then loads the item list from the inline data block or the
//! JSON manifest.

pub mod api;
pub mod app;
pub mod dom;
pub mod logging;
pub mod wasm_utils;

use app::SharedGallery;
use dom::{script_text, DomError, DomView};
use gallery_ui::loader::load_items;
use gallery_ui::{Gallery, GalleryConfig};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;

/// Id of the optional `<script type="application/json">` configuration block
pub const CONFIG_BLOCK_ID: &str = "gallery-config";

thread_local! {
    // Keeps the mounted gallery alive for the page session. Listeners only
    // hold weak references to it.
    static MOUNTED: RefCell<Option<SharedGallery<DomView>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = mount() {
        error!("Gallery failed to start: {}", e);
    }
}

fn mount() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    // Logging needs the configured level, so config errors are reported after
    let config_text = script_text(&document, CONFIG_BLOCK_ID).filter(|t| !t.trim().is_empty());
    let (config, config_error) = match config_text.as_deref().map(GalleryConfig::from_json) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (GalleryConfig::default(), Some(e)),
        None => (GalleryConfig::default(), None),
    };
    logging::configure_logging(&config.log_level);
    if let Some(e) = config_error {
        warn!("Ignoring gallery configuration: {}", e);
    }

    let view = DomView::new(document.clone(), &config.ids)?;
    let inline = script_text(&document, &config.inline_data_id);
    let gallery: SharedGallery<DomView> =
        Rc::new(RefCell::new(Gallery::new(config.clone(), view)));

    let dispatch = app::dispatcher(&gallery);
    {
        let mut gallery = gallery.borrow_mut();
        gallery.view_mut().connect(dispatch);
        let bound = gallery.bind_existing();
        if bound > 0 {
            info!("Bound {} pre-rendered thumbnails", bound);
        }
    }
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(gallery.clone()));

    wasm_bindgen_futures::spawn_local(async move {
        let source = api::HttpSource::new(&document);
        let result = load_items(
            inline.as_deref(),
            config.inline_failure,
            &source,
            &config.data_url,
        )
        .await;
        gallery.borrow_mut().apply_load(result);
    });

    Ok(())
}
