// src/core/session.rs
//! The editor session wires the pieces together: a [`Store`] holding
//! projects, a [`Paginator`] that re-estimates breaks after every
//! layout-affecting mutation, the template renderer, and save/load against
//! any [`ProjectStore`].
//!
//! Persistence is fire-and-forget from the editing flow's point of view: a
//! failed save returns a recoverable error and leaves the in-memory
//! project exactly as it was.

use tracing::{debug, warn};

use crate::core::export::{export_with_breaks, PagedRender};
use crate::core::measure::MeasureSections;
use crate::core::pagination::{PageBreaks, Paginator};
use crate::core::store::{Action, ProjectsState, Store};
use crate::error::{Error, Result};
use crate::persist::ProjectStore;
use crate::render::{render, RenderNode};
use crate::types::TemplateKind;

pub struct Editor<M: MeasureSections> {
    store: Store,
    paginator: Paginator,
    measurer: M,
}

impl<M: MeasureSections> Editor<M> {
    pub fn new(measurer: M) -> Self {
        Self {
            store: Store::new(),
            paginator: Paginator::new(),
            measurer,
        }
    }

    pub fn state(&self) -> &ProjectsState {
        self.store.state()
    }

    pub fn breaks(&self) -> &PageBreaks {
        self.paginator.breaks()
    }

    /// The measurement port, for the render surface to feed with observed
    /// heights. Call [`Editor::repaginate`] after recording.
    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Action, &ProjectsState) + 'static) {
        self.store.subscribe(listener);
    }

    /// Applies an action and, when it could move page breaks, recomputes
    /// the estimate for the current document.
    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        let affects_layout = action.affects_layout();
        let changed = self.store.dispatch(action)?;
        if changed && affects_layout {
            self.repaginate();
        }
        Ok(changed)
    }

    /// Creates a project and returns its freshly minted id.
    pub fn create_project(
        &mut self,
        template: TemplateKind,
        name: Option<String>,
    ) -> Result<String> {
        self.dispatch(Action::CreateProject { template, name })?;
        self.store
            .state()
            .current_id()
            .map(str::to_string)
            .ok_or_else(|| Error::not_found("freshly created project"))
    }

    /// Re-runs the break estimate against the current document. Safe to
    /// call redundantly; a no-op when no project is open.
    pub fn repaginate(&mut self) {
        let ticket = self.paginator.schedule();
        match self.store.state().current() {
            Some(project) => {
                self.paginator
                    .recompute(ticket, &project.resume, &project.styles, &self.measurer);
                debug!(
                    project = %project.id,
                    pages = self.paginator.breaks().page_count(),
                    "recomputed page breaks"
                );
            }
            None => self.paginator.reset(),
        }
    }

    /// Renders the current project through its skin, breaks included.
    pub fn render_current(&self) -> Option<RenderNode> {
        let project = self.store.state().current()?;
        Some(render(
            project.template,
            &project.resume,
            &project.styles,
            self.paginator.breaks(),
        ))
    }

    /// Paged export of the current project using the live break estimate.
    pub fn export_current(&self) -> Option<PagedRender> {
        let project = self.store.state().current()?;
        Some(export_with_breaks(project, self.paginator.breaks()))
    }

    /// Persists the current project. On failure the in-memory project is
    /// untouched and the error is recoverable.
    pub async fn save_current<S: ProjectStore>(&self, store: &S) -> Result<()> {
        let project = self
            .store
            .state()
            .current()
            .ok_or_else(|| Error::not_found("no project open"))?;
        match store.save_project(project).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(project = %project.id, error = %err, "save rejected");
                Err(err)
            }
        }
    }

    /// Fetches a project and makes it the current one.
    pub async fn open<S: ProjectStore>(&mut self, store: &S, id: &str) -> Result<()> {
        let project = store.load_project(id).await?;
        self.dispatch(Action::LoadProject { project })?;
        Ok(())
    }
}
