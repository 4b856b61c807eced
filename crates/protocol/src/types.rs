use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One anchorable region of the landing page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Products,
    Categories,
    Testimonials,
    About,
    Instagram,
    Newsletter,
    Contact,
}

impl SectionId {
    /// Every section, top of the page first.
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Products,
        SectionId::Categories,
        SectionId::Testimonials,
        SectionId::About,
        SectionId::Instagram,
        SectionId::Newsletter,
        SectionId::Contact,
    ];

    /// The DOM id of the section's anchor element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Products => "products",
            SectionId::Categories => "categories",
            SectionId::Testimonials => "testimonials",
            SectionId::About => "about",
            SectionId::Instagram => "instagram",
            SectionId::Newsletter => "newsletter",
            SectionId::Contact => "contact",
        }
    }

    /// Display label used in section headings and the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Products => "Products",
            SectionId::Categories => "Categories",
            SectionId::Testimonials => "Testimonials",
            SectionId::About => "About",
            SectionId::Instagram => "Instagram",
            SectionId::Newsletter => "Newsletter",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id: {0:?}")]
pub struct UnknownSectionId(pub String);

impl FromStr for SectionId {
    type Err = UnknownSectionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSectionId(s.to_owned()))
    }
}

/// A section as supplied by the content provider: id plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub label: &'static str,
}

impl SectionDescriptor {
    pub fn new(id: SectionId, label: &'static str) -> Self {
        Self { id, label }
    }
}

impl From<SectionId> for SectionDescriptor {
    fn from(id: SectionId) -> Self {
        Self::new(id, id.label())
    }
}

/// Glyph drawn on the hamburger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuGlyph {
    /// Shown while the drawer is closed.
    Open,
    /// Shown while the drawer is open.
    Close,
}

impl MenuGlyph {
    pub fn for_menu(open: bool) -> Self {
        if open { MenuGlyph::Close } else { MenuGlyph::Open }
    }

    pub fn as_char(self) -> char {
        match self {
            MenuGlyph::Open => '☰',
            MenuGlyph::Close => '✕',
        }
    }
}

/// How a navigation request moves the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_dom_names() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "nonexistent".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSectionId("nonexistent".into()));
        assert!("Hero".parse::<SectionId>().is_err());
    }

    #[test]
    fn serde_uses_dom_names() {
        let json = serde_json::to_string(&SectionId::Testimonials).unwrap();
        assert_eq!(json, "\"testimonials\"");
        let back: SectionId = serde_json::from_str("\"instagram\"").unwrap();
        assert_eq!(back, SectionId::Instagram);
    }

    #[test]
    fn glyph_follows_menu_state() {
        assert_eq!(MenuGlyph::for_menu(false).as_char(), '☰');
        assert_eq!(MenuGlyph::for_menu(true).as_char(), '✕');
    }
}
