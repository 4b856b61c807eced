use serde::{Deserialize, Serialize};

use crate::types::{MenuGlyph, SectionId};

/// A state change the rendering layer should react to.
///
/// Emitted only on real transitions; repeated reveals or closing an
/// already closed menu produce nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageEvent {
    /// A section crossed the visibility threshold for the first time.
    SectionRevealed { id: SectionId },
    /// The mobile drawer opened or closed.
    MenuChanged { open: bool },
    /// Viewport observation is unavailable; every section was revealed
    /// at once.
    FallbackEngaged,
}

/// Lifecycle of the viewport observation for one mounted page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationMode {
    #[default]
    Idle,
    Live,
    Fallback,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionState {
    pub id: SectionId,
    pub label: &'static str,
    pub visible: bool,
}

/// Read model handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    /// Registration order.
    pub sections: Vec<SectionState>,
    pub menu_open: bool,
    pub menu_glyph: MenuGlyph,
    pub mode: ObservationMode,
}

impl PageSnapshot {
    pub fn is_visible(&self, id: SectionId) -> Option<bool> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.visible)
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().filter(|s| s.visible).map(|s| s.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_kind_tag() {
        let json = serde_json::to_string(&PageEvent::SectionRevealed {
            id: SectionId::About,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"section_revealed","id":"about"}"#);

        let json = serde_json::to_string(&PageEvent::MenuChanged { open: true }).unwrap();
        assert_eq!(json, r#"{"kind":"menu_changed","open":true}"#);
    }

    #[test]
    fn snapshot_lookup() {
        let snapshot = PageSnapshot {
            sections: vec![
                SectionState {
                    id: SectionId::Hero,
                    label: "Home",
                    visible: true,
                },
                SectionState {
                    id: SectionId::Products,
                    label: "Products",
                    visible: false,
                },
            ],
            menu_open: false,
            menu_glyph: MenuGlyph::Open,
            mode: ObservationMode::Live,
        };
        assert_eq!(snapshot.is_visible(SectionId::Hero), Some(true));
        assert_eq!(snapshot.is_visible(SectionId::Products), Some(false));
        assert_eq!(snapshot.is_visible(SectionId::Contact), None);
        assert_eq!(snapshot.visible_ids().collect::<Vec<_>>(), [SectionId::Hero]);
    }
}
