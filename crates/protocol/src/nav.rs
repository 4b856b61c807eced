use serde::Serialize;

use crate::types::SectionId;

/// A button in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub target: SectionId,
    pub label: &'static str,
}

/// Navigation entries, rendered both in the desktop bar and the mobile drawer.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        target: SectionId::Hero,
        label: "Home",
    },
    NavItem {
        target: SectionId::Products,
        label: "Products",
    },
    NavItem {
        target: SectionId::Categories,
        label: "Categories",
    },
    NavItem {
        target: SectionId::About,
        label: "About",
    },
    NavItem {
        target: SectionId::Contact,
        label: "Contact",
    },
];

/// The "Shop Now" button in the hero section.
pub const HERO_CALL_TO_ACTION: NavItem = NavItem {
    target: SectionId::Products,
    label: "Shop Now",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_follow_page_order() {
        let positions: Vec<usize> = NAV_ITEMS
            .iter()
            .map(|item| {
                SectionId::ALL
                    .iter()
                    .position(|id| *id == item.target)
                    .unwrap()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn call_to_action_targets_products() {
        assert_eq!(HERO_CALL_TO_ACTION.target, SectionId::Products);
    }
}
