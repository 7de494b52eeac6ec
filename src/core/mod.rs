// src/core/mod.rs
//! Core engine: ordering, pagination, state, sessions and paged export.

pub mod export;
pub mod measure;
pub mod pagination;
pub mod sections;
pub mod session;
pub mod store;

pub use export::{export_paged, export_with_breaks, PagedRender};
pub use measure::{MeasureSections, MeasuredHeights, TextMetrics};
pub use pagination::{
    estimate_breaks, try_estimate_breaks, PageBreaks, Paginator, PAGE_HEIGHT, PAGE_WIDTH,
};
pub use session::Editor;
pub use store::{Action, ProjectsState, Store};
