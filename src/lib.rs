// src/lib.rs
//! Resume builder engine.
//!
//! Documents, per-role style overrides and projects live in [`types`];
//! ordering, pagination estimation, the state container and paged export
//! in [`core`]; the three template skins behind one render contract in
//! [`render`]; local (SQLite) and remote (REST) persistence in [`persist`];
//! and the project store HTTP service in [`web`].

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod persist;
pub mod render;
pub mod types;
pub mod web;

pub use crate::config::EnvironmentConfig;
pub use crate::core::{Action, Editor, PageBreaks, Store};
pub use crate::error::{Error, Result};
pub use crate::persist::{LocalStore, ProjectStore, RemoteStore};
pub use crate::render::{render, RenderNode, TemplateSkin};
pub use crate::types::{Project, ResumeDocument, StyleRole, StyleSettings, TemplateKind};
pub use crate::web::start_web_server;
