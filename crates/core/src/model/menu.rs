use luxwear_protocol::MenuGlyph;

/// Open/closed state of the mobile navigation drawer. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the drawer and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the drawer. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn glyph(self) -> MenuGlyph {
        MenuGlyph::for_menu(self.open)
    }
}
