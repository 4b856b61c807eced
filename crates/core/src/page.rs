use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, warn};
use luxwear_protocol::{
    ObservationMode, PageEvent, PageSnapshot, ScrollBehavior, SectionId, SectionState,
};

use crate::error::{ErrorPolicy, PageError};
use crate::events::{EventBus, SubscriptionId};
use crate::model::{MenuState, SectionRegistry, VisibilityStore};
use crate::navigation::{NavigationController, NavigationOutcome};
use crate::observer::{ObserverError, ViewportObserver, VisibleCallback};
use crate::surface::{AnchorMap, PageSurface};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub scroll_behavior: ScrollBehavior,
    pub error_policy: ErrorPolicy,
}

/// State shared with the observer callback, which only holds a weak
/// reference to it.
struct PageState {
    registry: SectionRegistry,
    store: RefCell<VisibilityStore>,
    menu: Cell<MenuState>,
    mode: Cell<ObservationMode>,
    bus: EventBus,
}

impl PageState {
    fn new(registry: SectionRegistry) -> Self {
        Self {
            store: RefCell::new(VisibilityStore::from_registry(&registry)),
            registry,
            menu: Cell::new(MenuState::new()),
            mode: Cell::new(ObservationMode::Idle),
            bus: EventBus::default(),
        }
    }

    fn reveal(&self, id: SectionId) -> Result<bool, PageError> {
        let changed = self.store.borrow_mut().mark_visible(id)?;
        if changed {
            self.bus.emit(PageEvent::SectionRevealed { id });
        } else {
            debug!("section {id} already revealed");
        }
        Ok(changed)
    }

    fn reveal_all(&self) -> usize {
        let revealed = self.store.borrow_mut().mark_all();
        for id in &revealed {
            self.bus.emit(PageEvent::SectionRevealed { id: *id });
        }
        revealed.len()
    }

    fn update_menu(&self, update: impl FnOnce(&mut MenuState)) -> bool {
        let before = self.menu.get();
        let mut menu = before;
        update(&mut menu);
        self.menu.set(menu);
        if menu != before {
            self.bus.emit(PageEvent::MenuChanged {
                open: menu.is_open(),
            });
        }
        menu.is_open()
    }

    /// Entry point for observer notifications.
    fn on_visible(state: &Weak<PageState>, id: SectionId) {
        let Some(state) = state.upgrade() else {
            return;
        };
        if state.mode.get() != ObservationMode::Live {
            debug!("ignoring visibility of {id} outside a live session");
            return;
        }
        if let Err(err) = state.reveal(id) {
            warn!("observer reported an unregistered section: {err}");
        }
    }
}

/// Page-level owner of visibility, menu state and viewport observation for
/// one mounted lifetime.
///
/// Observation starts in [`PageController::mount`] and is released by
/// [`PageController::unmount`] or, at the latest, when the controller is
/// dropped.
pub struct PageController<S, O>
where
    S: PageSurface,
    O: ViewportObserver<Anchor = S::Anchor>,
{
    state: Rc<PageState>,
    navigation: NavigationController<S>,
    observer: O,
    anchors: AnchorMap<S::Anchor>,
    options: PageOptions,
}

impl<S, O> PageController<S, O>
where
    S: PageSurface,
    O: ViewportObserver<Anchor = S::Anchor>,
{
    /// Attach to a rendered page and start observing its sections.
    ///
    /// Call after the sections have been rendered; anchors missing at this
    /// point are not observed. If the observer is unsupported every section
    /// is revealed immediately.
    pub fn mount(registry: SectionRegistry, surface: S, observer: O, options: PageOptions) -> Self {
        let anchors = AnchorMap::resolve(&registry, &surface);
        let mut controller = Self {
            state: Rc::new(PageState::new(registry)),
            navigation: NavigationController::new(surface, options.scroll_behavior),
            observer,
            anchors,
            options,
        };
        controller.start_observing();
        controller
    }

    fn start_observing(&mut self) {
        let weak = Rc::downgrade(&self.state);
        let callback: VisibleCallback = Box::new(move |id| PageState::on_visible(&weak, id));

        self.state.mode.set(ObservationMode::Live);
        match self.observer.start(&self.anchors, callback) {
            Ok(()) => info!(
                "observing {} of {} sections",
                self.anchors.len(),
                self.state.registry.len()
            ),
            Err(ObserverError::UnsupportedEnvironment) => {
                info!("viewport observation unsupported, revealing all sections");
                self.state.mode.set(ObservationMode::Fallback);
                self.state.reveal_all();
                self.state.bus.emit(PageEvent::FallbackEngaged);
            }
        }
    }

    /// Stop observing. Later observer notifications are ignored. Idempotent.
    pub fn unmount(&mut self) {
        if self.state.mode.get() == ObservationMode::Stopped {
            return;
        }
        self.observer.stop();
        self.state.mode.set(ObservationMode::Stopped);
        info!("page unmounted");
    }

    /// Latch `id` as visible. Returns whether it was hidden before.
    pub fn mark_visible(&self, id: &str) -> Result<bool, PageError> {
        let id = self.state.registry.resolve(id)?;
        self.state.reveal(id)
    }

    pub fn is_visible(&self, id: &str) -> Result<bool, PageError> {
        let id = self.state.registry.resolve(id)?;
        self.state.store.borrow().is_visible(id)
    }

    /// Reveal every section at once, e.g. when motion is unwanted.
    /// Returns how many sections changed.
    pub fn reveal_all(&self) -> usize {
        self.state.reveal_all()
    }

    /// Scroll to the section named `id` and close the menu.
    ///
    /// The menu is closed even when `id` is rejected.
    pub fn go_to(&self, id: &str) -> Result<NavigationOutcome, PageError> {
        match self.state.registry.resolve(id) {
            Ok(id) => self.navigate(id),
            Err(err) => {
                self.close_menu();
                Err(err)
            }
        }
    }

    /// Typed form of [`PageController::go_to`]. Sections outside the
    /// registry are rejected after closing the menu, without scrolling.
    pub fn navigate(&self, id: SectionId) -> Result<NavigationOutcome, PageError> {
        if !self.state.registry.contains(id) {
            self.close_menu();
            return Err(PageError::UnknownSection(id.as_str().to_owned()));
        }
        let mut outcome = NavigationOutcome::AnchorMissing;
        self.state
            .update_menu(|menu| outcome = self.navigation.go_to(id, menu));
        Ok(outcome)
    }

    /// Flip the mobile menu and return whether it is now open.
    pub fn toggle_menu(&self) -> bool {
        self.state.update_menu(|menu| {
            menu.toggle();
        })
    }

    pub fn close_menu(&self) {
        self.state.update_menu(|menu| {
            menu.close();
        });
    }

    pub fn menu(&self) -> MenuState {
        self.state.menu.get()
    }

    pub fn mode(&self) -> ObservationMode {
        self.state.mode.get()
    }

    pub fn anchors(&self) -> &AnchorMap<S::Anchor> {
        &self.anchors
    }

    pub fn options(&self) -> PageOptions {
        self.options
    }

    pub fn subscribe(&self, listener: impl Fn(&PageEvent) + 'static) -> SubscriptionId {
        self.state.bus.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.bus.unsubscribe(id)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let store = self.state.store.borrow();
        let sections = self
            .state
            .registry
            .sections()
            .iter()
            .map(|descriptor| SectionState {
                id: descriptor.id,
                label: descriptor.label,
                visible: store.is_visible(descriptor.id).unwrap_or(false),
            })
            .collect();
        let menu = self.state.menu.get();
        PageSnapshot {
            sections,
            menu_open: menu.is_open(),
            menu_glyph: menu.glyph(),
            mode: self.state.mode.get(),
        }
    }
}

impl<S, O> Drop for PageController<S, O>
where
    S: PageSurface,
    O: ViewportObserver<Anchor = S::Anchor>,
{
    fn drop(&mut self) {
        self.unmount();
    }
}
