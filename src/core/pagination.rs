// src/core/pagination.rs
//! Live page-break estimation.
//!
//! The editing preview is one continuous column; to show where a fixed-page
//! export would paginate, section heights are accumulated against a
//! US-letter page (1056 units tall at 96 dpi) minus the measured header.
//! When the next section would overflow the remaining budget, a break is
//! recorded before it and the accumulator restarts at that section's own
//! height. The result is advisory and view-only: it never alters document
//! order and is recomputed from scratch after every relevant mutation.

use serde::Serialize;

use crate::core::measure::MeasureSections;
use crate::types::{ResumeDocument, StyleSettings};

/// Page height in layout units: 11in at 96 dpi.
pub const PAGE_HEIGHT: f64 = 1056.0;

/// Page width in layout units: 8.5in at 96 dpi.
pub const PAGE_WIDTH: f64 = 816.0;

/// Section indices at which a new page starts. Derived and ephemeral:
/// recomputed on demand, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageBreaks(Vec<usize>);

impl PageBreaks {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when a page boundary sits immediately before this section.
    pub fn breaks_before(&self, section_index: usize) -> bool {
        self.0.contains(&section_index)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// One page per break, plus one.
    pub fn page_count(&self) -> usize {
        self.0.len() + 1
    }
}

/// Walks sections in order, accumulating measured heights against the page
/// budget. Best-effort: an unready measurement yields no breaks, as does a
/// header that swallows the whole page.
pub fn estimate_breaks(
    doc: &ResumeDocument,
    styles: &StyleSettings,
    measurer: &dyn MeasureSections,
) -> PageBreaks {
    try_estimate_breaks(doc, styles, measurer).unwrap_or_else(|_| PageBreaks::none())
}

/// Like [`estimate_breaks`] but reports an unready layout instead of
/// silently returning no breaks, for callers that want to distinguish
/// "fits on one page" from "not measured yet".
pub fn try_estimate_breaks(
    doc: &ResumeDocument,
    styles: &StyleSettings,
    measurer: &dyn MeasureSections,
) -> crate::error::Result<PageBreaks> {
    if doc.sections.is_empty() {
        return Ok(PageBreaks::none());
    }

    let header = measurer.header_height(doc, styles).unwrap_or(0.0);
    let available = PAGE_HEIGHT - header;
    if available <= 0.0 {
        return Ok(PageBreaks::none());
    }

    let mut current = 0.0;
    let mut breaks = Vec::new();
    for (index, section) in doc.sections.iter().enumerate() {
        let height = measurer
            .section_height(section, styles)
            .ok_or(crate::error::Error::MeasurementUnavailable)?;
        if current + height > available {
            breaks.push(index);
            current = height;
        } else {
            current += height;
        }
    }

    Ok(PageBreaks(breaks))
}

/// Holds the latest estimate together with a generation ticket.
///
/// Recomputation is triggered after paint, so a slow run can finish after a
/// newer one was scheduled; tickets let the caller drop the stale result
/// instead of applying it. Recomputing redundantly is always safe; the
/// estimate is a pure function of (document, styles, measurements).
#[derive(Debug, Default)]
pub struct Paginator {
    breaks: PageBreaks,
    scheduled: u64,
    applied: u64,
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers that a recomputation is needed and returns its ticket.
    pub fn schedule(&mut self) -> u64 {
        self.scheduled += 1;
        self.scheduled
    }

    /// Runs the estimate for `ticket`. A ticket older than the newest
    /// scheduled one is stale and ignored; returns whether the estimate
    /// was applied.
    pub fn recompute(
        &mut self,
        ticket: u64,
        doc: &ResumeDocument,
        styles: &StyleSettings,
        measurer: &dyn MeasureSections,
    ) -> bool {
        if ticket < self.scheduled || ticket <= self.applied {
            return false;
        }
        self.breaks = estimate_breaks(doc, styles, measurer);
        self.applied = ticket;
        true
    }

    /// Clears the estimate, e.g. when no project is open.
    pub fn reset(&mut self) {
        self.breaks = PageBreaks::none();
    }

    pub fn breaks(&self) -> &PageBreaks {
        &self.breaks
    }
}
