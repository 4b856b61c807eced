use luxwear_protocol::SectionId;

use crate::error::PageError;
use crate::model::SectionRegistry;

/// Latched per-section visibility.
///
/// Keys are fixed when the store is created; values only ever move from
/// `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityStore {
    entries: Vec<(SectionId, bool)>,
}

impl VisibilityStore {
    pub fn from_registry(registry: &SectionRegistry) -> Self {
        Self {
            entries: registry.ids().map(|id| (id, false)).collect(),
        }
    }

    /// Latch `id` as visible. Returns whether this call changed anything.
    pub fn mark_visible(&mut self, id: SectionId) -> Result<bool, PageError> {
        let visible = self
            .entries
            .iter_mut()
            .find(|(key, _)| *key == id)
            .map(|(_, visible)| visible)
            .ok_or_else(|| PageError::UnknownSection(id.as_str().to_owned()))?;
        let changed = !*visible;
        *visible = true;
        Ok(changed)
    }

    pub fn is_visible(&self, id: SectionId) -> Result<bool, PageError> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, visible)| *visible)
            .ok_or_else(|| PageError::UnknownSection(id.as_str().to_owned()))
    }

    /// Latch every section, returning the ones that were still hidden.
    pub fn mark_all(&mut self) -> Vec<SectionId> {
        self.entries
            .iter_mut()
            .filter(|(_, visible)| !*visible)
            .map(|(id, visible)| {
                *visible = true;
                *id
            })
            .collect()
    }

    /// `(id, visible)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, bool)> + '_ {
        self.entries.iter().copied()
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.iter().filter(|(_, visible)| *visible).map(|(id, _)| id)
    }

    pub fn all_visible(&self) -> bool {
        self.entries.iter().all(|(_, visible)| *visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxwear_protocol::SectionDescriptor;

    fn store() -> VisibilityStore {
        VisibilityStore::from_registry(&SectionRegistry::reference())
    }

    #[test]
    fn starts_hidden() {
        let store = store();
        assert!(store.iter().all(|(_, visible)| !visible));
        assert_eq!(store.iter().count(), 8);
    }

    #[test]
    fn mark_visible_latches_once() {
        let mut store = store();
        assert_eq!(store.mark_visible(SectionId::Products), Ok(true));
        assert_eq!(store.mark_visible(SectionId::Products), Ok(false));
        assert_eq!(store.is_visible(SectionId::Products), Ok(true));
        assert_eq!(store.is_visible(SectionId::Hero), Ok(false));
    }

    #[test]
    fn unregistered_section_is_rejected_without_insert() {
        let registry = SectionRegistry::new([SectionDescriptor::from(SectionId::Hero)]);
        let mut store = VisibilityStore::from_registry(&registry);
        assert_eq!(
            store.mark_visible(SectionId::Contact),
            Err(PageError::UnknownSection("contact".into()))
        );
        assert!(store.is_visible(SectionId::Contact).is_err());
        assert_eq!(store.iter().count(), 1);
    }

    #[test]
    fn mark_all_reports_only_new_reveals() {
        let mut store = store();
        store.mark_visible(SectionId::Hero).unwrap();
        let revealed = store.mark_all();
        assert_eq!(revealed.len(), 7);
        assert!(!revealed.contains(&SectionId::Hero));
        assert!(store.all_visible());
        assert!(store.mark_all().is_empty());
    }

    #[test]
    fn interleaved_duplicates_match_single_marks() {
        let mut noisy = store();
        for id in [
            SectionId::Hero,
            SectionId::About,
            SectionId::Hero,
            SectionId::Contact,
            SectionId::About,
            SectionId::Hero,
        ] {
            noisy.mark_visible(id).unwrap();
        }

        let mut once = store();
        for id in [SectionId::Hero, SectionId::About, SectionId::Contact] {
            once.mark_visible(id).unwrap();
        }
        assert_eq!(noisy, once);
    }
}
