// src/error.rs
//! Error taxonomy for the resume builder core.
//!
//! Nothing here is fatal: missing ids degrade to no-ops at the reducer
//! layer, failed persistence leaves in-memory state untouched, and an
//! unready layout yields an empty page-break set instead of an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A project or section id that does not exist in the store.
    #[error("not found: {0}")]
    NotFound(String),

    /// A style value that cannot be accepted for its role. Numeric sizes
    /// are clamped before they ever reach this point; only values with no
    /// meaningful clamp (malformed colors) are rejected.
    #[error("invalid style value for {role}: {detail}")]
    InvalidStyleValue { role: String, detail: String },

    /// A load/save/delete against a project store was rejected. The
    /// in-memory project is unchanged; the caller may surface this as a
    /// dismissable notice and retry at its leisure.
    #[error("persistence failed: {0}")]
    Persistence(String),

    /// Layout measurements were requested before the render surface was
    /// ready. Pagination treats this as "no breaks".
    #[error("layout measurement unavailable")]
    MeasurementUnavailable,
}

impl Error {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn persistence(detail: impl std::fmt::Display) -> Self {
        Self::Persistence(detail.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
