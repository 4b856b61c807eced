pub mod animation;
pub mod events;
pub mod nav;
pub mod types;

pub use animation::EntranceAnimation;
pub use events::{ObservationMode, PageEvent, PageSnapshot, SectionState};
pub use nav::{HERO_CALL_TO_ACTION, NAV_ITEMS, NavItem};
pub use types::{MenuGlyph, ScrollBehavior, SectionDescriptor, SectionId, UnknownSectionId};
