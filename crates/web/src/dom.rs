use luxwear_core::PageSurface;
use luxwear_protocol::{ScrollBehavior, SectionId};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollIntoViewOptions, ScrollLogicalPosition};

/// The live document, with section anchors found by element id.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl PageSurface for DomSurface {
    type Anchor = Element;

    fn anchor(&self, id: SectionId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }

    fn scroll_to(&self, anchor: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
