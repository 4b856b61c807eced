//! Browser bridge for the LuxWear landing page.
//!
//! The page markup is rendered first; JavaScript then constructs a
//! [`LandingPage`] to attach visibility tracking and navigation to it, and
//! calls `free()` (or `unmount()`) when the page goes away.

mod dom;
mod intersection;
mod logger;
mod render;

pub use dom::DomSurface;
pub use intersection::{DomViewportObserver, intersection_supported};
pub use render::{DomRenderer, MENU_TOGGLE_ID, MOBILE_MENU_ID};

use log::{LevelFilter, warn};
use luxwear_core::{PageController, PageError, PageOptions, SectionRegistry};
use luxwear_protocol::{HERO_CALL_TO_ACTION, NAV_ITEMS};
use wasm_bindgen::prelude::*;

type DomPage = PageController<DomSurface, DomViewportObserver>;

fn js_error(err: PageError) -> JsError {
    JsError::new(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    // Redirect panics and log records to the console
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
}

/// One mounted landing page.
#[wasm_bindgen]
pub struct LandingPage {
    page: DomPage,
}

#[wasm_bindgen]
impl LandingPage {
    /// Attach to the sections currently in the document and start observing
    /// them. Call once the markup has been rendered.
    #[wasm_bindgen(constructor)]
    pub fn mount() -> Result<LandingPage, JsError> {
        let surface = DomSurface::from_window().map_err(|_| JsError::new("no document"))?;
        let renderer = DomRenderer::new(surface.document().clone());
        let page = PageController::mount(
            SectionRegistry::reference(),
            surface,
            DomViewportObserver::new(),
            PageOptions::default(),
        );
        renderer.sync(&page.snapshot());
        page.subscribe(move |event| renderer.apply(event));
        Ok(Self { page })
    }

    /// Smooth-scroll to a section and close the mobile menu.
    pub fn go_to(&self, id: &str) -> Result<(), JsError> {
        let policy = self.page.options().error_policy;
        policy
            .absorb(self.page.go_to(id).map(|_| ()), ())
            .map_err(js_error)
    }

    /// Flip the mobile menu; returns whether it is now open.
    pub fn toggle_menu(&self) -> bool {
        self.page.toggle_menu()
    }

    pub fn close_menu(&self) {
        self.page.close_menu();
    }

    #[wasm_bindgen(getter)]
    pub fn menu_open(&self) -> bool {
        self.page.menu().is_open()
    }

    pub fn is_visible(&self, id: &str) -> Result<bool, JsError> {
        let policy = self.page.options().error_policy;
        policy
            .absorb(self.page.is_visible(id), false)
            .map_err(js_error)
    }

    /// Current page state as JSON.
    pub fn snapshot(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.page.snapshot()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Call `callback` with each page event, serialized as JSON.
    pub fn on_change(&self, callback: js_sys::Function) {
        self.page.subscribe(move |event| {
            let json = match serde_json::to_string(event) {
                Ok(json) => json,
                Err(err) => {
                    warn!("could not serialize page event: {err}");
                    return;
                }
            };
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                warn!("page event listener threw: {err:?}");
            }
        });
    }

    /// Stop observing sections. Also happens on `free()`.
    pub fn unmount(&mut self) {
        self.page.unmount();
    }
}

/// Navigation bar entries as JSON, in display order.
#[wasm_bindgen]
pub fn nav_items() -> Result<String, JsError> {
    serde_json::to_string(&NAV_ITEMS).map_err(|e| JsError::new(&e.to_string()))
}

/// The hero section's "Shop Now" button as JSON.
#[wasm_bindgen]
pub fn hero_call_to_action() -> Result<String, JsError> {
    serde_json::to_string(&HERO_CALL_TO_ACTION).map_err(|e| JsError::new(&e.to_string()))
}
