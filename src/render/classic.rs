// src/render/classic.rs
//! Classic skin: centered formal header, ruled section blocks, skills as a
//! single trailing line.

use crate::core::pagination::PageBreaks;
use crate::render::{section_stream, FieldBinding, RenderNode, TemplateSkin};
use crate::types::{ContactField, ResumeDocument, StyleRole, StyleSettings, TemplateKind};

pub struct ClassicSkin;

impl TemplateSkin for ClassicSkin {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Classic
    }

    fn render(
        &self,
        doc: &ResumeDocument,
        styles: &StyleSettings,
        breaks: &PageBreaks,
    ) -> RenderNode {
        let mut header = vec![
            RenderNode::text(StyleRole::Name, &styles.name, &doc.name, Some(FieldBinding::Name)),
            RenderNode::text(
                StyleRole::Title,
                &styles.title,
                &doc.title,
                Some(FieldBinding::Title),
            ),
        ];
        if let Some(contact) = &doc.contact {
            // Two centered lines, fields joined with a pipe. Joined lines
            // cannot carry per-field bindings; the classic header is
            // display-only for contact.
            let line_one = join_fields(contact.get(ContactField::Email), contact.get(ContactField::Phone));
            let line_two = join_fields(
                contact.get(ContactField::Location),
                contact.get(ContactField::Linkedin),
            );
            for line in [line_one, line_two].into_iter().flatten() {
                header.push(RenderNode::text(StyleRole::Contact, &styles.contact, line, None));
            }
        }

        let mut children = vec![
            RenderNode::container("resume-header", header),
            RenderNode::container(
                "resume-body",
                section_stream("resume-section", doc, styles, breaks, true),
            ),
        ];
        if !doc.skills.is_empty() {
            children.push(RenderNode::container(
                "resume-skills",
                vec![RenderNode::text(
                    StyleRole::Body,
                    &styles.body,
                    doc.skills.join(" · "),
                    None,
                )],
            ));
        }

        RenderNode::container("resume classic", children)
    }
}

fn join_fields(a: Option<&str>, b: Option<&str>) -> Option<String> {
    match (a, b) {
        (Some(a), Some(b)) => Some(format!("{a} | {b}")),
        (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
        (None, None) => None,
    }
}
