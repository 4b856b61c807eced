use js_sys::{Array, Reflect};
use log::warn;
use luxwear_core::{
    AnchorMap, ObserverError, VISIBILITY_THRESHOLD, ViewportObserver, VisibleCallback,
    crosses_threshold,
};
use luxwear_protocol::SectionId;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// [`ViewportObserver`] backed by the browser's `IntersectionObserver`.
///
/// Anchors stay observed after their first crossing; repeats are absorbed
/// by the visibility store.
#[derive(Default)]
pub struct DomViewportObserver {
    observer: Option<IntersectionObserver>,
    // Must outlive `observer`, which calls into it.
    callback: Option<EntriesCallback>,
}

impl DomViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whether the running environment exposes `IntersectionObserver`.
pub fn intersection_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

impl ViewportObserver for DomViewportObserver {
    type Anchor = Element;

    fn start(
        &mut self,
        anchors: &AnchorMap<Element>,
        mut on_visible: VisibleCallback,
    ) -> Result<(), ObserverError> {
        self.stop();
        if !intersection_supported() {
            return Err(ObserverError::UnsupportedEnvironment);
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !crosses_threshold(entry.is_intersecting(), entry.intersection_ratio()) {
                        continue;
                    }
                    match entry.target().id().parse::<SectionId>() {
                        Ok(id) => on_visible(id),
                        Err(err) => warn!("intersection on a non-section element: {err}"),
                    }
                }
            },
        ));

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| {
                    warn!("IntersectionObserver construction failed: {err:?}");
                    ObserverError::UnsupportedEnvironment
                })?;
        for (_, element) in anchors.iter() {
            observer.observe(element);
        }

        self.observer = Some(observer);
        self.callback = Some(callback);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }

    fn is_observing(&self) -> bool {
        self.observer.is_some()
    }
}
