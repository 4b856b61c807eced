use log::debug;
use luxwear_protocol::{ScrollBehavior, SectionId};

use crate::model::MenuState;
use crate::surface::PageSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A scroll was requested. Completion is not tracked.
    Scrolled,
    /// The target is not mounted; nothing moved.
    AnchorMissing,
}

/// Moves the viewport to a section and collapses the mobile menu.
pub struct NavigationController<S> {
    surface: S,
    behavior: ScrollBehavior,
}

impl<S: PageSurface> NavigationController<S> {
    pub fn new(surface: S, behavior: ScrollBehavior) -> Self {
        Self { surface, behavior }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Scroll to `id` and close `menu`, whether or not the scroll happened.
    ///
    /// The anchor is looked up at call time, so sections mounted after the
    /// observation session started are still reachable.
    pub fn go_to(&self, id: SectionId, menu: &mut MenuState) -> NavigationOutcome {
        let outcome = match self.surface.anchor(id) {
            Some(anchor) => {
                self.surface.scroll_to(&anchor, self.behavior);
                NavigationOutcome::Scrolled
            }
            None => {
                debug!("navigation target {id} is not mounted");
                NavigationOutcome::AnchorMissing
            }
        };
        menu.close();
        outcome
    }
}
