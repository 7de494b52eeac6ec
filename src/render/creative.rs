// src/render/creative.rs
//! Creative skin: banner header, then a two-column body: contact and
//! skills in a narrow sidebar, sections in the main column.

use crate::core::pagination::PageBreaks;
use crate::render::{section_stream, FieldBinding, RenderNode, TemplateSkin};
use crate::types::{ContactField, ResumeDocument, StyleRole, StyleSettings, TemplateKind};

pub struct CreativeSkin;

impl TemplateSkin for CreativeSkin {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Creative
    }

    fn render(
        &self,
        doc: &ResumeDocument,
        styles: &StyleSettings,
        breaks: &PageBreaks,
    ) -> RenderNode {
        let header = RenderNode::container(
            "resume-header gradient",
            vec![
                RenderNode::text(StyleRole::Name, &styles.name, &doc.name, Some(FieldBinding::Name)),
                RenderNode::text(
                    StyleRole::Title,
                    &styles.title,
                    &doc.title,
                    Some(FieldBinding::Title),
                ),
            ],
        );

        let mut sidebar = Vec::new();
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
            sidebar.push(RenderNode::container("contact-block", fields));
        }
        if !doc.skills.is_empty() {
            let items = doc
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
            sidebar.push(RenderNode::container("skills-list", items));
        }

        let columns = RenderNode::container(
            "columns",
            vec![
                RenderNode::container("sidebar", sidebar),
                RenderNode::container(
                    "main",
                    section_stream("resume-section", doc, styles, breaks, false),
                ),
            ],
        );

        RenderNode::container("resume creative", vec![header, columns])
    }
}
