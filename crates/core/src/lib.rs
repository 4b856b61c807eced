//! Section visibility tracking and navigation state for the LuxWear
//! landing page.
//!
//! [`PageController`] owns everything for one mounted page: the latched
//! [`VisibilityStore`], the mobile [`MenuState`], a [`ViewportObserver`]
//! feeding reveals into the store, and a [`NavigationController`] that
//! scrolls to sections. Browser specifics live behind [`PageSurface`] and
//! [`ViewportObserver`].

pub mod error;
pub mod events;
pub mod model;
pub mod navigation;
pub mod observer;
pub mod page;
pub mod surface;

pub use error::{ErrorPolicy, PageError};
pub use events::{EventBus, SubscriptionId};
pub use model::{MenuState, SectionRegistry, VisibilityStore};
pub use navigation::{NavigationController, NavigationOutcome};
pub use observer::{
    ManualHandle, ManualObserver, ObserverError, UnsupportedObserver, VISIBILITY_THRESHOLD,
    ViewportObserver, VisibleCallback, crosses_threshold,
};
pub use page::{PageController, PageOptions};
pub use surface::{AnchorMap, PageSurface};
