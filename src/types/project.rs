// src/types/project.rs
//! A project wraps one resume document with its style overrides, template
//! selection and lifecycle timestamps. This is the unit of persistence.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::resume::ResumeDocument;
use crate::types::styles::StyleSettings;

/// The three interchangeable template skins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Classic,
    Modern,
    Creative,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Classic,
        TemplateKind::Modern,
        TemplateKind::Creative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Modern => "modern",
            TemplateKind::Creative => "creative",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(TemplateKind::Classic),
            "modern" => Ok(TemplateKind::Modern),
            "creative" => Ok(TemplateKind::Creative),
            other => Err(crate::error::Error::not_found(format!(
                "template '{other}' (expected classic, modern or creative)"
            ))),
        }
    }
}

/// One saved resume: document + styles + template + timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub template: TemplateKind,
    pub resume: ResumeDocument,
    pub styles: StyleSettings,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds, bumped on every applied mutation.
    pub updated_at: i64,
}

impl Project {
    /// Creates a project seeded with the sample document and default
    /// styles, as template selection does in the editor.
    pub fn new(template: TemplateKind, name: Option<String>) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: mint_project_id(),
            name: name.unwrap_or_else(|| "Untitled Resume".to_string()),
            template,
            resume: ResumeDocument::sample(),
            styles: StyleSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now().timestamp_millis();
    }

    pub fn metadata(&self) -> ProjectMetadata {
        ProjectMetadata {
            id: self.id.clone(),
            name: self.name.clone(),
            template: self.template,
            updated_at: self.updated_at,
        }
    }
}

/// Listing row for the project picker; everything but the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub id: String,
    pub name: String,
    pub template: TemplateKind,
    pub updated_at: i64,
}

/// Project ids carry a random fragment so two projects created in the
/// same millisecond cannot collide.
fn mint_project_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("project-{}", &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&TemplateKind::Creative).unwrap(),
            "\"creative\""
        );
        let kind: TemplateKind = serde_json::from_str("\"modern\"").unwrap();
        assert_eq!(kind, TemplateKind::Modern);
        assert!("fancy".parse::<TemplateKind>().is_err());
    }

    #[test]
    fn test_new_project_is_seeded() {
        let project = Project::new(TemplateKind::Classic, None);
        assert!(project.id.starts_with("project-"));
        assert_eq!(project.name, "Untitled Resume");
        assert!(!project.resume.sections.is_empty());
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn test_project_ids_are_unique() {
        let a = Project::new(TemplateKind::Classic, None);
        let b = Project::new(TemplateKind::Classic, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_project_wire_shape() {
        let project = Project::new(TemplateKind::Modern, Some("Draft".to_string()));
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["template"], "modern");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json["styles"].get("nameSize").is_some());
        assert!(json["resume"].get("sections").is_some());

        let back: Project = serde_json::from_value(json).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn test_metadata_projection() {
        let project = Project::new(TemplateKind::Creative, Some("CV".to_string()));
        let meta = project.metadata();
        assert_eq!(meta.id, project.id);
        assert_eq!(meta.template, TemplateKind::Creative);
        assert_eq!(meta.updated_at, project.updated_at);
    }
}
