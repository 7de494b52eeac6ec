// src/core/export.rs
//! Fixed-page export.
//!
//! The editing preview is one continuous tree with page-break markers; an
//! export needs real pages. The splitter walks the rendered tree and cuts
//! it at every marker, duplicating the surrounding container chrome on each
//! side so every page is a complete tree of its own. One page per estimated
//! break, plus one. Rasterizing a page to PDF/image is the job of an
//! external renderer; this module stops at the paged tree.

use serde::Serialize;

use crate::core::measure::MeasureSections;
use crate::core::pagination::{estimate_breaks, PageBreaks};
use crate::render::{render, RenderNode};
use crate::types::{Project, TemplateKind};

/// A render tree cut into fixed-size pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedRender {
    pub template: TemplateKind,
    pub page_width: f64,
    pub page_height: f64,
    pub pages: Vec<RenderNode>,
}

/// Renders the project through its skin and splits the result at the
/// estimated breaks.
pub fn export_paged(project: &Project, measurer: &dyn MeasureSections) -> PagedRender {
    let breaks = estimate_breaks(&project.resume, &project.styles, measurer);
    export_with_breaks(project, &breaks)
}

/// Same as [`export_paged`] but with an already-computed break set, e.g.
/// the editor's live estimate.
pub fn export_with_breaks(project: &Project, breaks: &PageBreaks) -> PagedRender {
    let tree = render(project.template, &project.resume, &project.styles, breaks);
    let pages = split_at_page_breaks(tree);
    PagedRender {
        template: project.template,
        page_width: crate::core::pagination::PAGE_WIDTH,
        page_height: crate::core::pagination::PAGE_HEIGHT,
        pages,
    }
}

/// Cuts a tree into one tree per page. A break marker anywhere in a
/// container splits that container, and transitively every ancestor,
/// into a before-part and an after-part; nodes without markers pass
/// through whole. Markers are consumed by the split.
fn split_at_page_breaks(node: RenderNode) -> Vec<RenderNode> {
    match node {
        RenderNode::Container { class, children } => {
            let mut pages: Vec<Vec<RenderNode>> = Vec::new();
            let mut current: Vec<RenderNode> = Vec::new();
            for child in children {
                if matches!(child, RenderNode::PageBreak) {
                    pages.push(std::mem::take(&mut current));
                    continue;
                }
                for (i, part) in split_at_page_breaks(child).into_iter().enumerate() {
                    if i > 0 {
                        pages.push(std::mem::take(&mut current));
                    }
                    current.push(part);
                }
            }
            pages.push(current);
            pages
                .into_iter()
                .map(|children| RenderNode::Container { class, children })
                .collect()
        }
        other => vec![other],
    }
}
