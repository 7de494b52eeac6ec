// src/render/modern.rs
//! Modern skin: left-aligned banner header with stacked contact fields, a
//! skill chip row under the banner, unruled section blocks.

use crate::core::pagination::PageBreaks;
use crate::render::{section_stream, FieldBinding, RenderNode, TemplateSkin};
use crate::types::{ContactField, ResumeDocument, StyleRole, StyleSettings, TemplateKind};

pub struct ModernSkin;

impl TemplateSkin for ModernSkin {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Modern
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
            let mut fields = Vec::new();
            for field in [
                ContactField::Email,
                ContactField::Phone,
                ContactField::Location,
                ContactField::Linkedin,
            ] {
                if let Some(value) = contact.get(field) {
                    fields.push(RenderNode::text(
                        StyleRole::Contact,
                        &styles.contact,
                        value,
                        Some(FieldBinding::Contact(field.into())),
                    ));
                }
            }
            header.push(RenderNode::container("contact-stack", fields));
        }

        let mut children = vec![RenderNode::container("resume-header banner", header)];
        if !doc.skills.is_empty() {
            let chips = doc
                .skills
                .iter()
                .enumerate()
                .map(|(index, skill)| {
                    RenderNode::text(
                        StyleRole::Body,
                        &styles.body,
                        skill,
                        Some(FieldBinding::Skill(index)),
                    )
                })
                .collect();
            children.push(RenderNode::container("skills-row", chips));
        }
        children.push(RenderNode::container(
            "resume-body",
            section_stream("resume-section accent", doc, styles, breaks, false),
        ));

        RenderNode::container("resume modern", children)
    }
}
