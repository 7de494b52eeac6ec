// src/core/measure.rs
//! The measurement port for pagination.
//!
//! The estimator never inspects a render surface itself; whatever actually
//! laid the document out feeds heights through [`MeasureSections`].
//! Returning `None` signals that layout is not ready, which the estimator
//! treats as "no breaks" rather than an error.

use std::collections::HashMap;

use crate::types::{ResumeDocument, Section, StyleSettings};

pub trait MeasureSections {
    /// Height of the header block (name, title, contact) in layout units.
    fn header_height(&self, doc: &ResumeDocument, styles: &StyleSettings) -> Option<f64>;

    /// Height of one rendered section in layout units.
    fn section_height(&self, section: &Section, styles: &StyleSettings) -> Option<f64>;
}

/// Explicitly recorded heights, keyed by section id.
///
/// This is the production port (the render surface measures its blocks
/// and records them here before asking for breaks) and doubles as the
/// deterministic test measurer. A section that was never recorded reads as
/// not-yet-measured.
#[derive(Debug, Default)]
pub struct MeasuredHeights {
    header: Option<f64>,
    sections: HashMap<String, f64>,
}

impl MeasuredHeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, height: f64) -> Self {
        self.header = Some(height);
        self
    }

    pub fn with_section(mut self, id: impl Into<String>, height: f64) -> Self {
        self.sections.insert(id.into(), height);
        self
    }

    pub fn record_header(&mut self, height: f64) {
        self.header = Some(height);
    }

    pub fn record_section(&mut self, id: impl Into<String>, height: f64) {
        self.sections.insert(id.into(), height);
    }

    /// Drops all recorded heights, e.g. after a resize invalidates them.
    pub fn clear(&mut self) {
        self.header = None;
        self.sections.clear();
    }
}

impl MeasureSections for MeasuredHeights {
    fn header_height(&self, _doc: &ResumeDocument, _styles: &StyleSettings) -> Option<f64> {
        self.header
    }

    fn section_height(&self, section: &Section, _styles: &StyleSettings) -> Option<f64> {
        self.sections.get(&section.id).copied()
    }
}

/// Font-metric approximation for when no render surface exists at all
/// (exports from the CLI, headless tests). Estimates line counts from
/// content length and the body size, so style changes move the estimate
/// the same direction they move a real layout.
#[derive(Debug, Clone)]
pub struct TextMetrics {
    /// Usable text width in layout units (page width minus margins).
    pub content_width: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            content_width: crate::core::pagination::PAGE_WIDTH - 2.0 * 32.0,
            line_height: 1.5,
        }
    }
}

impl TextMetrics {
    /// Average glyph advance relative to the font size; close enough for a
    /// proportional text face.
    const GLYPH_ADVANCE: f64 = 0.55;

    /// Vertical margin around each section block.
    const SECTION_SPACING: f64 = 36.0;

    /// Vertical padding around the header block.
    const HEADER_PADDING: f64 = 56.0;

    fn lines(&self, text: &str, size_px: f64) -> f64 {
        let per_line = (self.content_width / (size_px * Self::GLYPH_ADVANCE)).max(1.0);
        text.lines()
            .map(|line| (line.chars().count() as f64 / per_line).ceil().max(1.0))
            .sum::<f64>()
            .max(1.0)
    }
}

impl MeasureSections for TextMetrics {
    fn header_height(&self, doc: &ResumeDocument, styles: &StyleSettings) -> Option<f64> {
        let name = f64::from(styles.name.size_px) * self.line_height;
        let title = f64::from(styles.title.size_px) * self.line_height;
        let contact = if doc.contact.is_some() {
            2.0 * f64::from(styles.contact.size_px) * self.line_height
        } else {
            0.0
        };
        Some(Self::HEADER_PADDING + name + title + contact)
    }

    fn section_height(&self, section: &Section, styles: &StyleSettings) -> Option<f64> {
        let header =
            f64::from(styles.section_header.size_px) * self.line_height;
        let body_size = f64::from(styles.body.size_px);
        let body = self.lines(&section.content, body_size) * body_size * self.line_height;
        Some(Self::SECTION_SPACING + header + body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_heights_roundtrip() {
        let doc = ResumeDocument::sample();
        let styles = StyleSettings::default();
        let mut heights = MeasuredHeights::new();
        heights.record_header(120.0);
        heights.record_section("summary", 90.5);

        assert_eq!(heights.header_height(&doc, &styles), Some(120.0));
        let summary = doc.section("summary").unwrap();
        assert_eq!(heights.section_height(summary, &styles), Some(90.5));
        let other = doc.section("experience").unwrap();
        assert_eq!(heights.section_height(other, &styles), None);

        heights.clear();
        assert_eq!(heights.header_height(&doc, &styles), None);
    }

    #[test]
    fn test_text_metrics_grow_with_content_and_size() {
        let styles = StyleSettings::default();
        let metrics = TextMetrics::default();
        let short = Section::new("s", "Short", "one line");
        let long = Section::new("l", "Long", "words ".repeat(200));

        let short_h = metrics.section_height(&short, &styles).unwrap();
        let long_h = metrics.section_height(&long, &styles).unwrap();
        assert!(long_h > short_h);

        let mut bigger = styles.clone();
        bigger
            .set(
                crate::types::StyleRole::Body,
                crate::types::StyleUpdate::Size(18.0),
            )
            .unwrap();
        assert!(metrics.section_height(&long, &bigger).unwrap() > long_h);
    }

    #[test]
    fn test_text_metrics_header_counts_contact() {
        let styles = StyleSettings::default();
        let metrics = TextMetrics::default();
        let with_contact = ResumeDocument::sample();
        let mut without = with_contact.clone();
        without.contact = None;

        let a = metrics.header_height(&with_contact, &styles).unwrap();
        let b = metrics.header_height(&without, &styles).unwrap();
        assert!(a > b);
    }

    #[test]
    fn test_multiline_content_counts_every_line() {
        let styles = StyleSettings::default();
        let metrics = TextMetrics::default();
        let single = Section::new("a", "A", "x");
        let multi = Section::new("b", "B", "x\nx\nx\nx");
        assert!(
            metrics.section_height(&multi, &styles).unwrap()
                > metrics.section_height(&single, &styles).unwrap()
        );
    }
}
