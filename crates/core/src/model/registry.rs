use luxwear_protocol::{SectionDescriptor, SectionId};

use crate::error::PageError;

/// Ordered, immutable list of the sections a page tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    /// Build a registry from content-provider descriptors. A repeated id
    /// keeps its first position and label.
    pub fn new(descriptors: impl IntoIterator<Item = SectionDescriptor>) -> Self {
        let mut sections: Vec<SectionDescriptor> = Vec::new();
        for descriptor in descriptors {
            if sections.iter().all(|s| s.id != descriptor.id) {
                sections.push(descriptor);
            }
        }
        Self { sections }
    }

    /// All eight landing page sections in page order.
    pub fn reference() -> Self {
        Self::new(SectionId::ALL.map(SectionDescriptor::from))
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|s| s.id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    pub fn label(&self, id: SectionId) -> Option<&'static str> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.label)
    }

    /// Map a raw DOM id onto a registered section.
    pub fn resolve(&self, raw: &str) -> Result<SectionId, PageError> {
        let id: SectionId = raw.parse()?;
        if self.contains(id) {
            Ok(id)
        } else {
            Err(PageError::UnknownSection(raw.to_owned()))
        }
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::reference()
    }
}
