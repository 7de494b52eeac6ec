// src/persist/mod.rs
//! Project persistence.
//!
//! The core talks to any store through [`ProjectStore`] and treats every
//! call as fallible and remote-shaped: a rejected save surfaces a
//! recoverable [`crate::error::Error::Persistence`] and never corrupts the
//! in-memory project. Retry and backoff belong to whoever owns the network,
//! not here.

pub mod local;
pub mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use crate::error::Result;
use crate::types::{Project, ProjectMetadata};

#[allow(async_fn_in_trait)]
pub trait ProjectStore {
    /// Fetches one project by id. Missing ids are `NotFound`.
    async fn load_project(&self, id: &str) -> Result<Project>;

    /// Upserts the project as-is, timestamps included.
    async fn save_project(&self, project: &Project) -> Result<()>;

    /// Removes one project by id. Missing ids are `NotFound`.
    async fn delete_project(&self, id: &str) -> Result<()>;

    /// Listing rows, most recently updated first.
    async fn list_metadata(&self) -> Result<Vec<ProjectMetadata>>;
}
