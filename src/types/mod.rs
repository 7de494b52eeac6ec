// src/types/mod.rs
//! Data model: resume documents, style overrides and the project wrapper.

pub mod project;
pub mod resume;
pub mod styles;

pub use project::{Project, ProjectMetadata, TemplateKind};
pub use resume::{ContactField, ContactInfo, ResumeDocument, Section, SectionField};
pub use styles::{StyleRole, StyleSettings, StyleUpdate, TextStyle};
