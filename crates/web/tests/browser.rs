//! Browser tests; run with `wasm-pack test --headless --firefox crates/web`.

#![cfg(target_arch = "wasm32")]

use luxwear_core::{AnchorMap, PageSurface, SectionRegistry, ViewportObserver};
use luxwear_protocol::{PageEvent, SectionId};
use luxwear_web::{
    DomRenderer, DomSurface, DomViewportObserver, LandingPage, MENU_TOGGLE_ID, MOBILE_MENU_ID,
    hero_call_to_action, intersection_supported, nav_items,
};
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_element(tag: &str, id: &str) -> Element {
    let document = document();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn surface_finds_only_mounted_sections() {
    let about = add_element("section", "about");
    let surface = DomSurface::from_window().unwrap();

    assert!(surface.anchor(SectionId::About).is_some());
    assert!(surface.anchor(SectionId::Newsletter).is_none());
    about.remove();
}

#[wasm_bindgen_test]
fn observer_starts_and_stops_idempotently() {
    let hero = add_element("section", "hero");
    let surface = DomSurface::from_window().unwrap();
    let anchors = AnchorMap::resolve(&SectionRegistry::reference(), &surface);
    assert_eq!(anchors.len(), 1);

    let mut observer = DomViewportObserver::new();
    observer.stop();
    assert!(intersection_supported());
    assert!(observer.start(&anchors, Box::new(|_| {})).is_ok());
    assert!(observer.is_observing());
    observer.stop();
    observer.stop();
    assert!(!observer.is_observing());
    hero.remove();
}

#[wasm_bindgen_test]
fn renderer_applies_entrance_classes_and_menu_state() {
    let products = add_element("section", "products");
    let drawer = add_element("div", MOBILE_MENU_ID);
    let toggle = add_element("button", MENU_TOGGLE_ID);
    let renderer = DomRenderer::new(document());

    renderer.apply(&PageEvent::SectionRevealed {
        id: SectionId::Products,
    });
    assert!(products.class_list().contains("animate__animated"));
    assert!(products.class_list().contains("animate__slideInLeft"));

    renderer.apply(&PageEvent::MenuChanged { open: true });
    assert!(!drawer.has_attribute("hidden"));
    assert_eq!(toggle.text_content().as_deref(), Some("✕"));

    renderer.apply(&PageEvent::MenuChanged { open: false });
    assert!(drawer.has_attribute("hidden"));
    assert_eq!(toggle.text_content().as_deref(), Some("☰"));

    products.remove();
    drawer.remove();
    toggle.remove();
}

#[wasm_bindgen_test]
fn landing_page_navigation_closes_menu() {
    let hero = add_element("section", "hero");
    let Ok(mut page) = LandingPage::mount() else {
        panic!("mount failed");
    };

    assert!(page.toggle_menu());
    assert!(page.go_to("contact").is_ok());
    assert!(!page.menu_open());
    assert!(page.go_to("hero").is_ok());
    assert!(page.go_to("nonexistent").is_err());

    page.unmount();
    page.unmount();
    hero.remove();
}

#[wasm_bindgen_test]
fn navigation_entries_serialize_for_the_page() {
    let Ok(cta) = hero_call_to_action() else {
        panic!("call to action did not serialize");
    };
    assert_eq!(cta, r#"{"target":"products","label":"Shop Now"}"#);

    let Ok(items) = nav_items() else {
        panic!("nav items did not serialize");
    };
    assert!(items.starts_with(r#"[{"target":"hero","label":"Home"}"#));
}
