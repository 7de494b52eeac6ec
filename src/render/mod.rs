// src/render/mod.rs
//! Template rendering.
//!
//! One contract, three skins: every skin consumes the same
//! `(document, styles, breaks)` and produces a [`RenderNode`] tree. Skins
//! differ only in layout and decoration: which container a block lands in,
//! never what the block means. Each text node carries the resolved
//! [`TextStyle`] for its role, so a role override visibly applies no matter
//! which skin is active, and an optional [`FieldBinding`] that routes an
//! edit of that node back into the document model as the one canonical
//! [`Action`].

mod classic;
mod creative;
mod modern;

use serde::Serialize;

use crate::core::pagination::PageBreaks;
use crate::core::store::Action;
use crate::types::{
    ContactField, ResumeDocument, SectionField, StyleRole, StyleSettings, TemplateKind, TextStyle,
};

pub use classic::ClassicSkin;
pub use creative::CreativeSkin;
pub use modern::ModernSkin;

/// Identifies the document field a rendered text node edits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "target")]
pub enum FieldBinding {
    Name,
    Title,
    Contact(ContactFieldTag),
    SectionTitle(String),
    SectionContent(String),
    Skill(usize),
}

/// Serializable mirror of [`ContactField`] for bindings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactFieldTag {
    Email,
    Phone,
    Location,
    Linkedin,
}

impl From<ContactField> for ContactFieldTag {
    fn from(field: ContactField) -> Self {
        match field {
            ContactField::Email => ContactFieldTag::Email,
            ContactField::Phone => ContactFieldTag::Phone,
            ContactField::Location => ContactFieldTag::Location,
            ContactField::Linkedin => ContactFieldTag::Linkedin,
        }
    }
}

impl From<ContactFieldTag> for ContactField {
    fn from(tag: ContactFieldTag) -> Self {
        match tag {
            ContactFieldTag::Email => ContactField::Email,
            ContactFieldTag::Phone => ContactField::Phone,
            ContactFieldTag::Location => ContactField::Location,
            ContactFieldTag::Linkedin => ContactField::Linkedin,
        }
    }
}

impl FieldBinding {
    /// Converts an edited value into the document-model action for this
    /// field. Every skin routes edits through here, so an edit behaves
    /// identically regardless of the active skin.
    pub fn into_action(self, project_id: impl Into<String>, value: impl Into<String>) -> Action {
        let id = project_id.into();
        let value = value.into();
        match self {
            FieldBinding::Name => Action::SetName { id, value },
            FieldBinding::Title => Action::SetTitle { id, value },
            FieldBinding::Contact(tag) => Action::SetContactField {
                id,
                field: tag.into(),
                value,
            },
            FieldBinding::SectionTitle(section_id) => Action::SetSectionField {
                id,
                section_id,
                field: SectionField::Title,
                value,
            },
            FieldBinding::SectionContent(section_id) => Action::SetSectionField {
                id,
                section_id,
                field: SectionField::Content,
                value,
            },
            FieldBinding::Skill(index) => Action::SetSkill { id, index, value },
        }
    }
}

/// Abstract visual tree, free of any widget toolkit: a container with a
/// class hook, styled text, a divider rule, and the advisory page-break
/// marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RenderNode {
    Container {
        class: &'static str,
        children: Vec<RenderNode>,
    },
    Text {
        role: StyleRole,
        size_px: f32,
        color_hex: String,
        bold: bool,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        binding: Option<FieldBinding>,
    },
    Divider,
    PageBreak,
}

impl RenderNode {
    pub fn container(class: &'static str, children: Vec<RenderNode>) -> Self {
        RenderNode::Container { class, children }
    }

    pub fn text(
        role: StyleRole,
        style: &TextStyle,
        content: impl Into<String>,
        binding: Option<FieldBinding>,
    ) -> Self {
        RenderNode::Text {
            role,
            size_px: style.size_px,
            color_hex: style.color_hex.clone(),
            bold: style.bold,
            content: content.into(),
            binding,
        }
    }

    /// Depth-first visit over the whole tree.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RenderNode)) {
        visit(self);
        if let RenderNode::Container { children, .. } = self {
            for child in children {
                child.walk(visit);
            }
        }
    }
}

/// The render contract every skin implements.
pub trait TemplateSkin {
    fn kind(&self) -> TemplateKind;

    fn render(
        &self,
        doc: &ResumeDocument,
        styles: &StyleSettings,
        breaks: &PageBreaks,
    ) -> RenderNode;
}

pub fn skin_for(kind: TemplateKind) -> &'static dyn TemplateSkin {
    match kind {
        TemplateKind::Classic => &ClassicSkin,
        TemplateKind::Modern => &ModernSkin,
        TemplateKind::Creative => &CreativeSkin,
    }
}

/// Renders the document through the selected skin.
pub fn render(
    kind: TemplateKind,
    doc: &ResumeDocument,
    styles: &StyleSettings,
    breaks: &PageBreaks,
) -> RenderNode {
    skin_for(kind).render(doc, styles, breaks)
}

/// One section block: header text, rule, body text. Shared across skins;
/// only the wrapping class differs per skin.
pub(crate) fn section_block(
    class: &'static str,
    section: &crate::types::Section,
    styles: &StyleSettings,
    with_divider: bool,
) -> RenderNode {
    let mut children = vec![RenderNode::text(
        StyleRole::SectionHeader,
        &styles.section_header,
        &section.title,
        Some(FieldBinding::SectionTitle(section.id.clone())),
    )];
    if with_divider {
        children.push(RenderNode::Divider);
    }
    children.push(RenderNode::text(
        StyleRole::Body,
        &styles.body,
        &section.content,
        Some(FieldBinding::SectionContent(section.id.clone())),
    ));
    RenderNode::container(class, children)
}

/// Sections in document order with page-break markers spliced in before
/// every break index.
pub(crate) fn section_stream(
    class: &'static str,
    doc: &ResumeDocument,
    styles: &StyleSettings,
    breaks: &PageBreaks,
    with_divider: bool,
) -> Vec<RenderNode> {
    let mut nodes = Vec::with_capacity(doc.sections.len());
    for (index, section) in doc.sections.iter().enumerate() {
        if breaks.breaks_before(index) {
            nodes.push(RenderNode::PageBreak);
        }
        nodes.push(section_block(class, section, styles, with_divider));
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::PageBreaks;
    use crate::core::store::{Action, ProjectsState};
    use crate::types::{Project, StyleUpdate};

    fn collect_texts(tree: &RenderNode) -> Vec<(StyleRole, String, Option<FieldBinding>)> {
        let mut out = Vec::new();
        tree.walk(&mut |node| {
            if let RenderNode::Text {
                role,
                content,
                binding,
                ..
            } = node
            {
                out.push((*role, content.clone(), binding.clone()));
            }
        });
        out
    }

    fn count_page_breaks(tree: &RenderNode) -> usize {
        let mut count = 0;
        tree.walk(&mut |node| {
            if matches!(node, RenderNode::PageBreak) {
                count += 1;
            }
        });
        count
    }

    #[test]
    fn test_every_skin_renders_every_section_exactly_once() {
        let doc = ResumeDocument::sample();
        let styles = StyleSettings::default();
        for kind in TemplateKind::ALL {
            let tree = render(kind, &doc, &styles, &PageBreaks::none());
            for section in &doc.sections {
                let matches = collect_texts(&tree)
                    .into_iter()
                    .filter(|(_, _, b)| {
                        *b == Some(FieldBinding::SectionContent(section.id.clone()))
                    })
                    .count();
                assert_eq!(matches, 1, "{kind}: section {} rendered {matches}x", section.id);
            }
        }
    }

    #[test]
    fn test_every_skin_honors_role_overrides_identically() {
        let doc = ResumeDocument::sample();
        let mut styles = StyleSettings::default();
        styles
            .set(StyleRole::Name, StyleUpdate::Color("#BB2244".to_string()))
            .unwrap();
        styles
            .set(StyleRole::Body, StyleUpdate::Size(17.0))
            .unwrap();
        styles
            .set(StyleRole::SectionHeader, StyleUpdate::Bold(false))
            .unwrap();

        for kind in TemplateKind::ALL {
            let tree = render(kind, &doc, &styles, &PageBreaks::none());
            let mut saw_name = false;
            tree.walk(&mut |node| {
                if let RenderNode::Text {
                    role,
                    size_px,
                    color_hex,
                    bold,
                    ..
                } = node
                {
                    match role {
                        StyleRole::Name => {
                            saw_name = true;
                            assert_eq!(color_hex, "#BB2244", "{kind}");
                        }
                        StyleRole::Body => assert_eq!(*size_px, 17.0, "{kind}"),
                        StyleRole::SectionHeader => assert!(!bold, "{kind}"),
                        _ => {}
                    }
                }
            });
            assert!(saw_name, "{kind}: name never rendered");
        }
    }

    #[test]
    fn test_break_markers_follow_the_estimate() {
        let mut doc = ResumeDocument::sample();
        doc.skills.clear();
        let styles = StyleSettings::default();
        // PageBreaks is opaque; build one through the estimator.
        let mut measured = crate::core::measure::MeasuredHeights::new().with_header(56.0);
        for (i, s) in doc.sections.iter().enumerate() {
            measured.record_section(&s.id, if i % 2 == 1 { 900.0 } else { 200.0 });
        }
        let breaks = crate::core::pagination::estimate_breaks(&doc, &styles, &measured);
        assert!(!breaks.is_empty());

        for kind in TemplateKind::ALL {
            let tree = render(kind, &doc, &styles, &breaks);
            assert_eq!(count_page_breaks(&tree), breaks.indices().len(), "{kind}");
        }
    }

    #[test]
    fn test_skills_appear_in_every_skin() {
        let doc = ResumeDocument::sample();
        let styles = StyleSettings::default();
        for kind in TemplateKind::ALL {
            let tree = render(kind, &doc, &styles, &PageBreaks::none());
            let texts = collect_texts(&tree);
            assert!(
                doc.skills.iter().all(|skill| texts
                    .iter()
                    .any(|(_, content, _)| content.contains(skill.as_str()))),
                "{kind}: missing skills"
            );
        }
    }

    #[test]
    fn test_edit_binding_roundtrips_into_document() {
        let mut state = ProjectsState::new();
        state
            .apply(&Action::CreateProject {
                template: TemplateKind::Modern,
                name: None,
            })
            .unwrap();
        let id = state.current_id().unwrap().to_string();
        let project: &Project = state.current().unwrap();
        let tree = render(
            project.template,
            &project.resume,
            &project.styles,
            &PageBreaks::none(),
        );

        // Pick the summary-content node out of the tree and edit through
        // its binding, exactly as a view layer would.
        let binding = collect_texts(&tree)
            .into_iter()
            .find_map(|(_, _, b)| match b {
                Some(FieldBinding::SectionContent(sid)) if sid == "summary" => {
                    Some(FieldBinding::SectionContent(sid))
                }
                _ => None,
            })
            .unwrap();
        state
            .apply(&binding.into_action(id.clone(), "rewritten"))
            .unwrap();
        assert_eq!(
            state.get(&id).unwrap().resume.section("summary").unwrap().content,
            "rewritten"
        );
    }
}
