//! Vertical layout of a page as an ordered stack of sections.

use super::offset_index::OffsetIndex;
use crate::model::{HeroRegion, SectionId};

/// One `<section>` of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Element id used for landmark lookup.
    pub id: SectionId,
    /// Heading shown by the preview.
    pub title: String,
    /// Rendered height in pixels.
    pub height: u32,
}

impl Section {
    /// Create a section.
    pub fn new(id: SectionId, title: impl Into<String>, height: u32) -> Self {
        Self {
            id,
            title: title.into(),
            height,
        }
    }
}

/// Sections stacked from the document top, with O(log n) offset queries.
#[derive(Debug, Clone)]
pub struct PageLayout {
    sections: Vec<Section>,
    offsets: OffsetIndex,
}

impl PageLayout {
    /// Lay out `sections` top to bottom.
    pub fn new(sections: Vec<Section>) -> Self {
        let offsets = OffsetIndex::from_heights(sections.iter().map(|s| s.height));
        Self { sections, offsets }
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section, if any.
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Index of the section with `id`.
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    /// Document offset of section `index`'s top edge.
    pub fn section_top(&self, index: usize) -> Option<f64> {
        (index < self.sections.len()).then(|| self.offsets.offset_of(index) as f64)
    }

    /// Offset and height of section `index` as a region.
    pub fn region(&self, index: usize) -> Option<HeroRegion> {
        let top = self.section_top(index)?;
        let height = f64::from(self.sections[index].height);
        Some(HeroRegion::from_offset(top, height))
    }

    /// Section covering document offset `y`, if any.
    pub fn section_at(&self, y: f64) -> Option<usize> {
        if y < 0.0 {
            return (!self.sections.is_empty()).then_some(0);
        }
        self.offsets.lower_bound(y.floor() as u64)
    }

    /// Total document height in pixels.
    pub fn document_height(&self) -> f64 {
        self.offsets.total() as f64
    }

    /// Largest scroll offset for a viewport of `viewport_height` pixels.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.document_height() - viewport_height).max(0.0)
    }
}
