use log::{debug, warn};
use luxwear_protocol::{EntranceAnimation, MenuGlyph, PageEvent, PageSnapshot, SectionId};
use web_sys::{Document, Element};

/// Element id of the collapsible mobile navigation list.
pub const MOBILE_MENU_ID: &str = "mobile-menu";
/// Element id of the hamburger button.
pub const MENU_TOGGLE_ID: &str = "menu-toggle";

/// Mirrors page state onto the server-rendered markup.
pub struct DomRenderer {
    document: Document,
}

impl DomRenderer {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Bring the DOM in line with a full snapshot, e.g. right after mount.
    pub fn sync(&self, snapshot: &PageSnapshot) {
        for section in snapshot.sections.iter().filter(|s| s.visible) {
            self.reveal(section.id);
        }
        self.show_menu(snapshot.menu_open);
    }

    pub fn apply(&self, event: &PageEvent) {
        match event {
            PageEvent::SectionRevealed { id } => self.reveal(*id),
            PageEvent::MenuChanged { open } => self.show_menu(*open),
            PageEvent::FallbackEngaged => debug!("rendering without entrance observation"),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn reveal(&self, id: SectionId) {
        let Some(section) = self.element(id.as_str()) else {
            debug!("revealed section {id} is not in the document");
            return;
        };
        let classes = section.class_list();
        for class in EntranceAnimation::for_section(id).classes() {
            if let Err(err) = classes.add_1(&class) {
                warn!("could not add {class} to {id}: {err:?}");
            }
        }
    }

    fn show_menu(&self, open: bool) {
        if let Some(drawer) = self.element(MOBILE_MENU_ID) {
            let result = if open {
                drawer.remove_attribute("hidden")
            } else {
                drawer.set_attribute("hidden", "")
            };
            if let Err(err) = result {
                warn!("could not update mobile menu: {err:?}");
            }
        }
        if let Some(toggle) = self.element(MENU_TOGGLE_ID) {
            let glyph = MenuGlyph::for_menu(open).as_char().to_string();
            toggle.set_text_content(Some(&glyph));
            let expanded = if open { "true" } else { "false" };
            if let Err(err) = toggle.set_attribute("aria-expanded", expanded) {
                warn!("could not update menu toggle: {err:?}");
            }
        }
    }
}
