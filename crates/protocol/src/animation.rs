use serde::Serialize;

use crate::types::SectionId;

const BASE_CLASS: &str = "animate__animated";
const DELAY_CLASS: &str = "animate__delay-500ms";
const SLOW_CLASS: &str = "animate__slow";

/// Entrance treatment a section receives once it has been revealed.
///
/// The core never looks at these; renderers turn them into class lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntranceAnimation {
    /// animate.css effect name, e.g. `fadeInUp`.
    pub effect: &'static str,
    pub slow: bool,
}

impl EntranceAnimation {
    pub fn for_section(id: SectionId) -> Self {
        let (effect, slow) = match id {
            SectionId::Hero => ("fadeInUp", true),
            SectionId::Products => ("slideInLeft", false),
            SectionId::Categories => ("zoomIn", false),
            SectionId::Testimonials => ("bounceInUp", false),
            SectionId::About => ("fadeInRight", false),
            SectionId::Instagram => ("slideInUp", false),
            SectionId::Newsletter => ("zoomIn", true),
            SectionId::Contact => ("fadeInUp", false),
        };
        Self { effect, slow }
    }

    /// Class tokens in application order.
    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec![BASE_CLASS.to_owned(), format!("animate__{}", self.effect)];
        if self.slow {
            classes.push(SLOW_CLASS.to_owned());
        }
        classes.push(DELAY_CLASS.to_owned());
        classes
    }
}
