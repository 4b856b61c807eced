pub mod menu;
pub mod registry;
pub mod visibility;

pub use menu::MenuState;
pub use registry::SectionRegistry;
pub use visibility::VisibilityStore;
