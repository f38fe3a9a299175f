//! DOM-backed gallery view
//!
//! Looks up the page's gallery container, thumbnail template and lightbox
//! elements once, then implements [`GalleryView`] on top of them. Click and
//! key listeners are owned here and forward into the gallery through a
//! [`Dispatcher`].

use crate::app::{Dispatcher, GalleryEvent};
use crate::wasm_utils::EventListener;
use gallery_ui::config::ElementIds;
use gallery_ui::markup::{BOUND_ATTR, INDEX_ATTR};
use gallery_ui::view::{GalleryView, ModalContent, Notice, Thumbnail, ThumbnailSlot};
use gallery_ui::ModalControl;
use thiserror::Error;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, DocumentFragment, Element, HtmlButtonElement, HtmlElement, HtmlImageElement,
    HtmlTemplateElement, KeyboardEvent,
};

/// Marks an element inside the lightbox whose clicks dismiss it
const DISMISS_ATTR: &str = "data-lightbox-dismiss";
const OPEN_CLASS: &str = "is-open";
const BODY_OPEN_CLASS: &str = "lightbox-open";
const BUTTON_SELECTOR: &str = ".gallery-item__button";

#[derive(Error, Debug)]
pub enum DomError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Element #{0} not found")]
    MissingElement(String),
    #[error("Element #{0} is not a {1}")]
    WrongElement(String, &'static str),
}

fn element_by_id<T: JsCast>(document: &Document, id: &str, kind: &'static str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElement(id.to_string(), kind))
}

/// Text of a `<script type="application/json">` block, if the page has one.
pub fn script_text(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id)?.text_content()
}

/// Thumbnail controls, including ones whose index metadata is missing
fn slot_selector() -> String {
    format!("{}, [{}]", BUTTON_SELECTOR, INDEX_ATTR)
}

fn log_js_error(what: &str, err: JsValue) {
    warn!("{} failed: {:?}", what, err);
}

pub struct DomView {
    document: Document,
    container: Element,
    template: HtmlTemplateElement,
    modal: HtmlElement,
    image: HtmlImageElement,
    caption: Element,
    close_button: HtmlButtonElement,
    prev_button: HtmlButtonElement,
    next_button: HtmlButtonElement,
    dispatch: Option<Dispatcher>,
    thumb_listeners: Vec<EventListener>,
    modal_listeners: Vec<EventListener>,
    key_listener: Option<EventListener>,
    /// Detached key listener whose closure may still be on the stack
    retired_key_listener: Option<EventListener>,
}

impl DomView {
    pub fn new(document: Document, ids: &ElementIds) -> Result<Self, DomError> {
        Ok(Self {
            container: element_by_id(&document, &ids.container, "element")?,
            template: element_by_id(&document, &ids.template, "<template>")?,
            modal: element_by_id(&document, &ids.modal, "HTML element")?,
            image: element_by_id(&document, &ids.image, "<img>")?,
            caption: element_by_id(&document, &ids.caption, "element")?,
            close_button: element_by_id(&document, &ids.close, "<button>")?,
            prev_button: element_by_id(&document, &ids.prev, "<button>")?,
            next_button: element_by_id(&document, &ids.next, "<button>")?,
            document,
            dispatch: None,
            thumb_listeners: Vec::new(),
            modal_listeners: Vec::new(),
            key_listener: None,
            retired_key_listener: None,
        })
    }

    /// Route this view's events to `dispatch` and wire the lightbox controls.
    pub fn connect(&mut self, dispatch: Dispatcher) {
        self.modal_listeners.clear();

        for control in ModalControl::TAB_ORDER {
            let dispatch = dispatch.clone();
            let listener = EventListener::new(self.control(control), "click", move |_| {
                dispatch(GalleryEvent::Control(control));
            });
            self.modal_listeners.push(listener);
        }

        let overlay = self.modal.clone();
        let overlay_dispatch = dispatch.clone();
        self.modal_listeners
            .push(EventListener::new(&self.modal, "click", move |event| {
                let Some(target) = event.target() else {
                    return;
                };
                let Some(element) = target.dyn_ref::<Element>() else {
                    return;
                };
                if element.is_same_node(Some(overlay.as_ref())) || element.has_attribute(DISMISS_ATTR) {
                    overlay_dispatch(GalleryEvent::Overlay);
                }
            }));

        self.dispatch = Some(dispatch);
    }

    fn control(&self, control: ModalControl) -> &HtmlButtonElement {
        match control {
            ModalControl::Close => &self.close_button,
            ModalControl::Prev => &self.prev_button,
            ModalControl::Next => &self.next_button,
        }
    }

    fn clear_container(&mut self) {
        self.thumb_listeners.clear();
        self.container.set_inner_html("");
    }

    fn build_thumbnail(&self, thumb: &Thumbnail) -> Result<DocumentFragment, JsValue> {
        let fragment: DocumentFragment = self
            .template
            .content()
            .clone_node_with_deep(true)?
            .unchecked_into();

        match fragment.query_selector(BUTTON_SELECTOR)? {
            Some(button) => {
                button.set_attribute(INDEX_ATTR, &thumb.index.to_string())?;
                button.set_attribute("aria-label", &thumb.label)?;
                if !button.has_attribute("type") {
                    button.set_attribute("type", "button")?;
                }
            }
            None => warn!("Thumbnail template has no {}", BUTTON_SELECTOR),
        }

        if let Some(img) = fragment.query_selector(".gallery-item__image")? {
            if thumb.src.is_empty() {
                img.remove_attribute("src")?;
            } else {
                img.set_attribute("src", &thumb.src)?;
            }
            img.set_attribute("alt", &thumb.alt)?;
            match thumb.size {
                Some(size) => {
                    img.set_attribute("width", &size.width.to_string())?;
                    img.set_attribute("height", &size.height.to_string())?;
                }
                None => {
                    img.remove_attribute("width")?;
                    img.remove_attribute("height")?;
                }
            }
        }

        if let Some(caption) = fragment.query_selector(".gallery-item__caption")? {
            caption.set_text_content(Some(thumb.caption.as_str()));
        }

        Ok(fragment)
    }

    fn slot_element(&self, slot: usize) -> Option<Element> {
        let selector = slot_selector();
        let nodes = self.container.query_selector_all(&selector).ok()?;
        nodes.item(slot as u32)?.dyn_into::<Element>().ok()
    }

    fn set_body_class(&self, open: bool) {
        if let Some(body) = self.document.body() {
            let classes = body.class_list();
            let result = if open {
                classes.add_1(BODY_OPEN_CLASS)
            } else {
                classes.remove_1(BODY_OPEN_CLASS)
            };
            if let Err(e) = result {
                log_js_error("Toggling body class", e);
            }
        }
    }
}

impl GalleryView for DomView {
    type FocusHandle = Element;

    fn render_thumbnails(&mut self, thumbnails: &[Thumbnail]) {
        self.clear_container();
        for thumb in thumbnails {
            let appended = self
                .build_thumbnail(thumb)
                .and_then(|fragment| self.container.append_child(&fragment));
            if let Err(e) = appended {
                log_js_error(&format!("Rendering thumbnail {}", thumb.index), e);
            }
        }
    }

    fn render_notice(&mut self, notice: &Notice) {
        self.clear_container();
        let paragraph = match self.document.create_element("p") {
            Ok(p) => p,
            Err(e) => return log_js_error("Creating notice", e),
        };
        paragraph.set_class_name(notice.class_name());
        let _ = paragraph.set_attribute("role", notice.role());
        paragraph.set_text_content(Some(notice.text()));
        if let Err(e) = self.container.append_child(&paragraph) {
            log_js_error("Rendering notice", e);
        }
    }

    fn thumbnail_slots(&self) -> Vec<ThumbnailSlot> {
        let selector = slot_selector();
        let Ok(nodes) = self.container.query_selector_all(&selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
            .enumerate()
            .map(|(slot, element)| ThumbnailSlot {
                slot,
                index_attr: element.get_attribute(INDEX_ATTR),
                bound: element.has_attribute(BOUND_ATTR),
            })
            .collect()
    }

    fn bind_thumbnail(&mut self, slot: usize, index: usize) {
        let Some(dispatch) = self.dispatch.clone() else {
            warn!("Thumbnail {} not bound: view is not connected", index);
            return;
        };
        let Some(element) = self.slot_element(slot) else {
            warn!("Thumbnail slot {} disappeared before binding", slot);
            return;
        };
        let listener = EventListener::new(&element, "click", move |_| {
            dispatch(GalleryEvent::OpenThumbnail(index));
        });
        if listener.is_attached() {
            let _ = element.set_attribute(BOUND_ATTR, "true");
            self.thumb_listeners.push(listener);
        }
    }

    fn set_modal_content(&mut self, content: &ModalContent) {
        if content.src.is_empty() {
            let _ = self.image.remove_attribute("src");
        } else {
            self.image.set_src(&content.src);
        }
        self.image.set_alt(&content.alt);

        let style = self.image.style();
        match content.size {
            Some(size) => {
                self.image.set_width(size.width);
                self.image.set_height(size.height);
                if let Err(e) = style.set_property("aspect-ratio", &size.aspect_ratio()) {
                    log_js_error("Setting aspect ratio", e);
                }
            }
            None => {
                let _ = self.image.remove_attribute("width");
                let _ = self.image.remove_attribute("height");
                let _ = style.remove_property("aspect-ratio");
            }
        }

        self.caption.set_text_content(Some(content.caption.as_str()));
    }

    fn clear_modal_content(&mut self) {
        // Removing src stops a large image from loading behind a hidden modal
        let _ = self.image.remove_attribute("src");
        self.image.set_alt("");
        let _ = self.image.remove_attribute("width");
        let _ = self.image.remove_attribute("height");
        let _ = self.image.style().remove_property("aspect-ratio");
        self.caption.set_text_content(Some(""));
    }

    fn show_modal(&mut self) {
        let _ = self.modal.remove_attribute("hidden");
        let _ = self.modal.set_attribute("aria-hidden", "false");
        let _ = self.modal.class_list().add_1(OPEN_CLASS);
        self.set_body_class(true);
    }

    fn hide_modal(&mut self) {
        let _ = self.modal.set_attribute("hidden", "");
        let _ = self.modal.set_attribute("aria-hidden", "true");
        let _ = self.modal.class_list().remove_1(OPEN_CLASS);
        self.set_body_class(false);
    }

    fn set_cycling_enabled(&mut self, enabled: bool) {
        self.prev_button.set_disabled(!enabled);
        self.next_button.set_disabled(!enabled);
    }

    fn control_available(&self, control: ModalControl) -> bool {
        let button = self.control(control);
        !button.disabled() && !button.hidden() && button.get_client_rects().length() > 0
    }

    fn focused_control(&self) -> Option<ModalControl> {
        let active = self.document.active_element()?;
        ModalControl::TAB_ORDER
            .into_iter()
            .find(|c| active.is_same_node(Some(self.control(*c).as_ref())))
    }

    fn focus_control(&mut self, control: ModalControl) {
        if let Err(e) = self.control(control).focus() {
            log_js_error("Focusing lightbox control", e);
        }
    }

    fn capture_focus(&self) -> Option<Element> {
        let active = self.document.active_element()?;
        let is_body = self
            .document
            .body()
            .is_some_and(|body| active.is_same_node(Some(body.as_ref())));
        (!is_body).then_some(active)
    }

    fn restore_focus(&mut self, handle: Element) -> bool {
        if !handle.is_connected() {
            return false;
        }
        match handle.dyn_ref::<HtmlElement>() {
            Some(element) => element.focus().is_ok(),
            None => false,
        }
    }

    fn listen_keyboard(&mut self) {
        let Some(dispatch) = self.dispatch.clone() else {
            warn!("Keyboard not wired: view is not connected");
            return;
        };
        self.retired_key_listener = None;
        if self.key_listener.is_some() {
            return;
        }
        self.key_listener = Some(EventListener::new(&self.document, "keydown", move |event| {
            let Ok(event) = event.dyn_into::<KeyboardEvent>() else {
                return;
            };
            let handled = dispatch(GalleryEvent::Key {
                key: event.key(),
                shift: event.shift_key(),
            });
            if handled {
                event.prevent_default();
            }
        }));
        debug!("Keyboard listener attached");
    }

    fn unlisten_keyboard(&mut self) {
        if let Some(mut listener) = self.key_listener.take() {
            listener.detach();
            self.retired_key_listener = Some(listener);
            debug!("Keyboard listener detached");
        }
    }
}
