// src/types/resume.rs
//! Resume document structures: the content half of a project.
//!
//! A document is plain data: name, title, optional contact record, an
//! ordered list of titled sections and a flat skill list. Section order is
//! user-controlled and significant; reordering lives in
//! [`crate::core::sections`].

use serde::{Deserialize, Serialize};

/// A titled content block, independently orderable within a resume.
///
/// The `id` is unique within a document for its entire lifetime. Cloning a
/// section through the ordering engine mints a fresh id; it is never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Contact details, each field independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Selects one field of [`ContactInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    Location,
    Linkedin,
}

impl ContactInfo {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Location => self.location.as_deref(),
            ContactField::Linkedin => self.linkedin.as_deref(),
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Location => &mut self.location,
            ContactField::Linkedin => &mut self.linkedin,
        };
        *slot = Some(value.into());
    }
}

/// Selects one editable field of a [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionField {
    Title,
    Content,
}

/// The content half of a project: everything a template skin renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

impl ResumeDocument {
    /// Empty document, no sections.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            contact: None,
            sections: Vec::new(),
            skills: Vec::new(),
        }
    }

    /// Seed content for a freshly created project.
    pub fn sample() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            title: "Software Engineer".to_string(),
            contact: Some(ContactInfo {
                email: Some("alex.morgan@email.com".to_string()),
                phone: Some("+1 (555) 010-2288".to_string()),
                location: Some("Portland, OR".to_string()),
                linkedin: Some("linkedin.com/in/alexmorgan".to_string()),
            }),
            sections: vec![
                Section::new(
                    "summary",
                    "Professional Summary",
                    "Software engineer with four years of experience shipping \
                     backend services and developer tooling. Comfortable owning \
                     features from design through deployment.",
                ),
                Section::new(
                    "experience",
                    "Experience",
                    "Backend Engineer at Fernwood Labs (2022 - Present). Built \
                     and operated document-processing services, cut p99 latency \
                     by a third, and mentored two junior engineers.",
                ),
                Section::new(
                    "education",
                    "Education",
                    "B.S. in Computer Science, Oregon State University (2018 - 2022).",
                ),
                Section::new(
                    "projects",
                    "Projects",
                    "Open-source contributor to a handful of parsing and CLI \
                     crates; maintainer of a small static-site generator.",
                ),
            ],
            skills: vec![
                "Rust".to_string(),
                "SQL".to_string(),
                "Distributed Systems".to_string(),
            ],
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    /// Sets one contact field, creating the contact record on first write.
    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact
            .get_or_insert_with(ContactInfo::default)
            .set(field, value);
    }

    /// Updates a section's title or content by id. Returns false (and
    /// leaves the document unchanged) when the id does not exist.
    pub fn set_section_field(
        &mut self,
        section_id: &str,
        field: SectionField,
        value: impl Into<String>,
    ) -> bool {
        match self.sections.iter_mut().find(|s| s.id == section_id) {
            Some(section) => {
                match field {
                    SectionField::Title => section.title = value.into(),
                    SectionField::Content => section.content = value.into(),
                }
                true
            }
            None => false,
        }
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Replaces one skill by position. Out-of-range index is a no-op.
    pub fn set_skill(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.skills.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.skills = skills;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_field_roundtrip() {
        let mut doc = ResumeDocument::sample();
        for value in ["plain", "", "line one\nline two\n\nline four"] {
            assert!(doc.set_section_field("summary", SectionField::Content, value));
            assert_eq!(doc.section("summary").unwrap().content, value);
        }
    }

    #[test]
    fn test_section_field_missing_id_is_noop() {
        let mut doc = ResumeDocument::sample();
        let before = doc.clone();
        assert!(!doc.set_section_field("nope", SectionField::Title, "x"));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_contact_created_on_first_write() {
        let mut doc = ResumeDocument::empty();
        assert!(doc.contact.is_none());
        doc.set_contact_field(ContactField::Email, "a@b.c");
        assert_eq!(
            doc.contact.as_ref().unwrap().get(ContactField::Email),
            Some("a@b.c")
        );
        assert_eq!(doc.contact.as_ref().unwrap().get(ContactField::Phone), None);
    }

    #[test]
    fn test_set_skill_out_of_range() {
        let mut doc = ResumeDocument::sample();
        assert!(doc.set_skill(0, "Go"));
        assert_eq!(doc.skills[0], "Go");
        assert!(!doc.set_skill(99, "nope"));
    }

    #[test]
    fn test_wire_shape_omits_empty_optionals() {
        let doc = ResumeDocument::empty();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("contact").is_none());
        assert!(json.get("skills").is_none());
        assert!(json.get("sections").is_some());
    }
}
