use log::debug;
use luxwear_protocol::{ScrollBehavior, SectionId};

use crate::model::SectionRegistry;

/// The rendered page the controller attaches to.
pub trait PageSurface {
    /// Handle to a section's rendered element.
    type Anchor;

    /// Look up the anchor for `id`. `None` while the section is not mounted.
    fn anchor(&self, id: SectionId) -> Option<Self::Anchor>;

    /// Start scrolling so the top of `anchor` lines up with the top of the
    /// viewport. Must not wait for the scroll to finish.
    fn scroll_to(&self, anchor: &Self::Anchor, behavior: ScrollBehavior);
}

/// Section → anchor mapping for one observation session.
///
/// Built once after render; sections without a mounted anchor are left out.
#[derive(Debug, Clone)]
pub struct AnchorMap<A> {
    anchors: Vec<(SectionId, A)>,
}

impl<A> AnchorMap<A> {
    pub fn resolve<S>(registry: &SectionRegistry, surface: &S) -> Self
    where
        S: PageSurface<Anchor = A>,
    {
        let anchors = registry
            .ids()
            .filter_map(|id| match surface.anchor(id) {
                Some(anchor) => Some((id, anchor)),
                None => {
                    debug!("section {id} has no anchor yet, not observed");
                    None
                }
            })
            .collect();
        Self { anchors }
    }

    pub fn get(&self, id: SectionId) -> Option<&A> {
        self.anchors
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, anchor)| anchor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &A)> + '_ {
        self.anchors.iter().map(|(id, anchor)| (*id, anchor))
    }

    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.anchors.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

impl<A> Default for AnchorMap<A> {
    fn default() -> Self {
        Self {
            anchors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Partial(Vec<SectionId>);

    impl PageSurface for Partial {
        type Anchor = SectionId;

        fn anchor(&self, id: SectionId) -> Option<SectionId> {
            self.0.contains(&id).then_some(id)
        }

        fn scroll_to(&self, _anchor: &SectionId, _behavior: ScrollBehavior) {}
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let surface = Partial(vec![SectionId::Contact, SectionId::Hero]);
        let anchors = AnchorMap::resolve(&SectionRegistry::reference(), &surface);
        assert_eq!(
            anchors.ids().collect::<Vec<_>>(),
            [SectionId::Hero, SectionId::Contact]
        );
        assert!(anchors.get(SectionId::About).is_none());
        assert_eq!(anchors.get(SectionId::Hero), Some(&SectionId::Hero));
    }
}
