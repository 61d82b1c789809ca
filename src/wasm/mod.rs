//! WASM bindings wiring the counter to the page

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlTextAreaElement};

use crate::count;
use crate::error::SetupError;

/// Id of the editable field the page template provides.
pub const SOURCE_ID: &str = "id_content";

/// Id of the element the count is written into.
pub const DISPLAY_ID: &str = "word-count";

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A live word-count binding between a textarea and a display element.
///
/// Holds the two element references and the registered closure; dropping it
/// without calling `detach` leaves a dangling JS callback, so page-lifetime
/// bindings go through [`boot`] which intentionally leaks the binding.
#[wasm_bindgen]
pub struct WordCounter {
    source: HtmlTextAreaElement,
    display: Element,
    handler: Closure<dyn FnMut(web_sys::Event)>,
}

#[wasm_bindgen]
impl WordCounter {
    /// Attach to the page's fixed `id_content` / `word-count` elements.
    #[wasm_bindgen]
    pub fn attach() -> Result<WordCounter, JsValue> {
        Ok(Self::bind(SOURCE_ID, DISPLAY_ID)?)
    }

    /// Attach to caller-chosen element ids.
    #[wasm_bindgen(js_name = attachTo)]
    pub fn attach_to(source_id: &str, display_id: &str) -> Result<WordCounter, JsValue> {
        Ok(Self::bind(source_id, display_id)?)
    }

    /// Recompute the count from the current field value and update the
    /// display now, without waiting for an input event.
    pub fn refresh(&self) {
        update_display(&self.source, &self.display);
    }

    /// Count for the current field value, leaving the display untouched.
    #[wasm_bindgen(js_name = wordCount)]
    pub fn word_count(&self) -> usize {
        count::count_words(&self.source.value())
    }

    /// Structured view of the binding for JS: element ids and current count.
    pub fn snapshot(&self) -> JsValue {
        let snapshot = CountSnapshot {
            source_id: self.source.id(),
            display_id: self.display.id(),
            word_count: self.word_count(),
        };

        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }

    /// Unregister the input handler and consume the binding.
    pub fn detach(self) {
        let _ = self
            .source
            .remove_event_listener_with_callback("input", self.handler.as_ref().unchecked_ref());
    }
}

impl WordCounter {
    fn bind(source_id: &str, display_id: &str) -> Result<Self, SetupError> {
        let document = page_document()?;

        let source: HtmlTextAreaElement = lookup(&document, source_id)?
            .dyn_into()
            .map_err(|_| SetupError::not_a_textarea(source_id))?;
        let display = lookup(&document, display_id)?;

        let handler = {
            let source = source.clone();
            let display = display.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                update_display(&source, &display);
            })
        };

        source
            .add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())
            .map_err(|cause| SetupError::listener(source_id, &cause))?;

        let counter = Self {
            source,
            display,
            handler,
        };

        // Pre-filled fields show a correct count before the first keystroke.
        counter.refresh();

        Ok(counter)
    }
}

/// Page-lifecycle entry point: attach once the document has finished its
/// initial parse. Setup failures are reported to the console and the field
/// stays plain uncounted text.
#[wasm_bindgen]
pub fn boot() {
    let document = match page_document() {
        Ok(document) => document,
        Err(err) => {
            console::error_1(&JsValue::from(err));
            return;
        }
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(|| attach_for_page_lifetime());
        if let Err(cause) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            console::error_1(&cause);
            return;
        }
        on_ready.forget();
    } else {
        attach_for_page_lifetime();
    }
}

fn attach_for_page_lifetime() {
    match WordCounter::bind(SOURCE_ID, DISPLAY_ID) {
        // The binding (and its closure) lives as long as the page.
        Ok(counter) => std::mem::forget(counter),
        Err(err) => console::error_1(&JsValue::from(err)),
    }
}

fn page_document() -> Result<Document, SetupError> {
    web_sys::window()
        .ok_or(SetupError::NoWindow)?
        .document()
        .ok_or(SetupError::NoDocument)
}

fn lookup(document: &Document, id: &str) -> Result<Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::element_not_found(id))
}

/// The per-event step: read, count, write.
fn update_display(source: &HtmlTextAreaElement, display: &Element) {
    let word_count = count::count_words(&source.value());
    display.set_text_content(Some(&word_count.to_string()));
}

/// Serializable binding state for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountSnapshot {
    pub source_id: String,
    pub display_id: String,
    pub word_count: usize,
}
