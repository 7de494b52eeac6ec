// src/core/store.rs
//! Explicit application state.
//!
//! All mutable editing state lives in [`ProjectsState`]; nothing is
//! ambient. Mutations are described by [`Action`] values and applied by one
//! reducer, [`ProjectsState::apply`], in dispatch order; there is exactly
//! one logical writer per document. [`Store`] adds subscriber callbacks on
//! top; listeners fire after every applied action.
//!
//! Mutating a project id or section id that does not exist is a no-op
//! (`Ok(false)`), not an error; only a rejected value (bad color) surfaces
//! as `Err`, and then the state is untouched.

use std::collections::HashMap;

use crate::core::sections;
use crate::error::Result;
use crate::types::{
    ContactField, Project, ProjectMetadata, SectionField, StyleRole, StyleUpdate, TemplateKind,
};

/// Everything the editor can do to the state.
#[derive(Debug, Clone)]
pub enum Action {
    CreateProject {
        template: TemplateKind,
        name: Option<String>,
    },
    /// Hydrates a project fetched from a store into memory and makes it
    /// current. Does not bump `updated_at`; loading is not an edit.
    LoadProject { project: Project },
    SetCurrentProject { id: String },
    RenameProject { id: String, name: String },
    SetTemplate {
        id: String,
        template: TemplateKind,
    },
    DeleteProject { id: String },

    SetName { id: String, value: String },
    SetTitle { id: String, value: String },
    SetContactField {
        id: String,
        field: ContactField,
        value: String,
    },
    SetSectionField {
        id: String,
        section_id: String,
        field: SectionField,
        value: String,
    },
    SetSkill {
        id: String,
        index: usize,
        value: String,
    },
    SetSkills { id: String, skills: Vec<String> },

    DeleteSection { id: String, section_id: String },
    DuplicateSection { id: String, section_id: String },
    MoveSectionUp { id: String, section_id: String },
    MoveSectionDown { id: String, section_id: String },

    SetStyle {
        id: String,
        role: StyleRole,
        update: StyleUpdate,
    },
    ResetStyles { id: String },
}

impl Action {
    /// Whether applying this action can move page breaks. Renames don't;
    /// anything that changes content, structure, styles or which document
    /// is on screen does.
    pub fn affects_layout(&self) -> bool {
        !matches!(self, Action::RenameProject { .. })
    }
}

#[derive(Debug, Default)]
pub struct ProjectsState {
    projects: HashMap<String, Project>,
    /// Most recently created/loaded first.
    order: Vec<String>,
    current: Option<String>,
}

impl ProjectsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&Project> {
        self.current.as_deref().and_then(|id| self.projects.get(id))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Listing rows in recency order.
    pub fn metadata(&self) -> Vec<ProjectMetadata> {
        self.order
            .iter()
            .filter_map(|id| self.projects.get(id))
            .map(Project::metadata)
            .collect()
    }

    /// Applies one action. `Ok(true)` when the state changed, `Ok(false)`
    /// for a no-op (unknown ids, boundary moves), `Err` only for rejected
    /// values, and then nothing was modified.
    pub fn apply(&mut self, action: &Action) -> Result<bool> {
        match action {
            Action::CreateProject { template, name } => {
                let project = Project::new(*template, name.clone());
                let id = project.id.clone();
                self.projects.insert(id.clone(), project);
                self.order.insert(0, id.clone());
                self.current = Some(id);
                Ok(true)
            }
            Action::LoadProject { project } => {
                let id = project.id.clone();
                if !self.projects.contains_key(&id) {
                    self.order.insert(0, id.clone());
                }
                self.projects.insert(id.clone(), project.clone());
                self.current = Some(id);
                Ok(true)
            }
            Action::SetCurrentProject { id } => {
                if self.projects.contains_key(id) {
                    self.current = Some(id.clone());
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Action::RenameProject { id, name } => self.with_project(id, |p| {
                p.name = name.clone();
                true
            }),
            Action::SetTemplate { id, template } => self.with_project(id, |p| {
                p.template = *template;
                true
            }),
            Action::DeleteProject { id } => {
                if self.projects.remove(id).is_none() {
                    return Ok(false);
                }
                self.order.retain(|other| other != id);
                if self.current.as_deref() == Some(id.as_str()) {
                    self.current = self.order.first().cloned();
                }
                Ok(true)
            }

            Action::SetName { id, value } => self.with_project(id, |p| {
                p.resume.set_name(value.clone());
                true
            }),
            Action::SetTitle { id, value } => self.with_project(id, |p| {
                p.resume.set_title(value.clone());
                true
            }),
            Action::SetContactField { id, field, value } => self.with_project(id, |p| {
                p.resume.set_contact_field(*field, value.clone());
                true
            }),
            Action::SetSectionField {
                id,
                section_id,
                field,
                value,
            } => self.with_project(id, |p| {
                p.resume.set_section_field(section_id, *field, value.clone())
            }),
            Action::SetSkill { id, index, value } => {
                self.with_project(id, |p| p.resume.set_skill(*index, value.clone()))
            }
            Action::SetSkills { id, skills } => self.with_project(id, |p| {
                p.resume.set_skills(skills.clone());
                true
            }),

            Action::DeleteSection { id, section_id } => {
                self.with_project(id, |p| sections::delete(&mut p.resume.sections, section_id))
            }
            Action::DuplicateSection { id, section_id } => self.with_project(id, |p| {
                sections::duplicate(&mut p.resume.sections, section_id).is_some()
            }),
            Action::MoveSectionUp { id, section_id } => {
                self.with_project(id, |p| sections::move_up(&mut p.resume.sections, section_id))
            }
            Action::MoveSectionDown { id, section_id } => self.with_project(id, |p| {
                sections::move_down(&mut p.resume.sections, section_id)
            }),

            Action::SetStyle { id, role, update } => {
                let Some(project) = self.projects.get_mut(id) else {
                    return Ok(false);
                };
                project.styles.set(*role, update.clone())?;
                project.touch();
                Ok(true)
            }
            Action::ResetStyles { id } => self.with_project(id, |p| {
                p.styles.reset();
                true
            }),
        }
    }

    /// Runs a mutation against one project and bumps its `updated_at` iff
    /// the mutation applied.
    fn with_project(&mut self, id: &str, f: impl FnOnce(&mut Project) -> bool) -> Result<bool> {
        let Some(project) = self.projects.get_mut(id) else {
            return Ok(false);
        };
        if f(project) {
            project.touch();
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

type Listener = Box<dyn FnMut(&Action, &ProjectsState)>;

/// [`ProjectsState`] plus change subscribers. Listeners fire after every
/// applied (state-changing) action, in subscription order.
#[derive(Default)]
pub struct Store {
    state: ProjectsState,
    listeners: Vec<Listener>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProjectsState {
        &self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Action, &ProjectsState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        let changed = self.state.apply(&action)?;
        if changed {
            for listener in self.listeners.iter_mut() {
                listener(&action, &self.state);
            }
        }
        Ok(changed)
    }
}
