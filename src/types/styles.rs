// src/types/styles.rs
//! Per-role typography overrides.
//!
//! Five text roles are independently stylable; each carries a size (with
//! role-specific bounds), a hex color and a bold flag. The wire format is
//! the flat camelCase record the project store speaks
//! (`nameSize`/`nameColor`/`nameBold`/... with `header` for the
//! section-header role); in memory the roles are a closed enum so there is
//! no stringly-typed key lookup anywhere.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The five independently stylable text categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleRole {
    Name,
    Title,
    Contact,
    SectionHeader,
    Body,
}

impl StyleRole {
    pub const ALL: [StyleRole; 5] = [
        StyleRole::Name,
        StyleRole::Title,
        StyleRole::Contact,
        StyleRole::SectionHeader,
        StyleRole::Body,
    ];

    /// Inclusive size bounds in pixels, matching the editor's controls.
    pub fn size_bounds(self) -> (f32, f32) {
        match self {
            StyleRole::Name => (20.0, 48.0),
            StyleRole::Title => (12.0, 24.0),
            StyleRole::Contact => (10.0, 18.0),
            StyleRole::SectionHeader => (14.0, 24.0),
            StyleRole::Body => (10.0, 18.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StyleRole::Name => "name",
            StyleRole::Title => "title",
            StyleRole::Contact => "contact",
            StyleRole::SectionHeader => "sectionHeader",
            StyleRole::Body => "body",
        }
    }

    fn clamp_size(self, size: f32) -> f32 {
        let (min, max) = self.size_bounds();
        size.clamp(min, max)
    }
}

/// Resolved typography for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub color_hex: String,
    pub bold: bool,
}

impl TextStyle {
    fn new(size_px: f32, color_hex: &str, bold: bool) -> Self {
        Self {
            size_px,
            color_hex: color_hex.to_string(),
            bold,
        }
    }
}

/// A single style edit: which attribute changes and to what.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleUpdate {
    Size(f32),
    Color(String),
    Bold(bool),
}

/// The full override set: one [`TextStyle`] per role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StyleWire", into = "StyleWire")]
pub struct StyleSettings {
    pub name: TextStyle,
    pub title: TextStyle,
    pub contact: TextStyle,
    pub section_header: TextStyle,
    pub body: TextStyle,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            name: TextStyle::new(36.0, "#000000", true),
            title: TextStyle::new(16.0, "#000000", false),
            contact: TextStyle::new(12.0, "#000000", false),
            section_header: TextStyle::new(18.0, "#000000", true),
            body: TextStyle::new(14.0, "#000000", false),
        }
    }
}

impl StyleSettings {
    pub fn get(&self, role: StyleRole) -> &TextStyle {
        match role {
            StyleRole::Name => &self.name,
            StyleRole::Title => &self.title,
            StyleRole::Contact => &self.contact,
            StyleRole::SectionHeader => &self.section_header,
            StyleRole::Body => &self.body,
        }
    }

    fn get_mut(&mut self, role: StyleRole) -> &mut TextStyle {
        match role {
            StyleRole::Name => &mut self.name,
            StyleRole::Title => &mut self.title,
            StyleRole::Contact => &mut self.contact,
            StyleRole::SectionHeader => &mut self.section_header,
            StyleRole::Body => &mut self.body,
        }
    }

    /// Applies one style edit. Sizes outside the role's bounds are clamped,
    /// never stored raw; a color that is not `#rrggbb` is rejected and the
    /// settings are left untouched.
    pub fn set(&mut self, role: StyleRole, update: StyleUpdate) -> Result<()> {
        match update {
            StyleUpdate::Size(size) => {
                self.get_mut(role).size_px = role.clamp_size(size);
            }
            StyleUpdate::Color(color) => {
                validate_color(role, &color)?;
                self.get_mut(role).color_hex = color;
            }
            StyleUpdate::Bold(bold) => {
                self.get_mut(role).bold = bold;
            }
        }
        Ok(())
    }

    /// Restores the built-in defaults. Idempotent, and independent of any
    /// document content.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn validate_color(role: StyleRole, color: &str) -> Result<()> {
    let hex = color.strip_prefix('#').ok_or_else(|| Error::InvalidStyleValue {
        role: role.label().to_string(),
        detail: format!("color {:?} must start with '#'", color),
    })?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidStyleValue {
            role: role.label().to_string(),
            detail: format!("color {:?} is not #rrggbb", color),
        });
    }
    Ok(())
}

/// Flat persisted shape. Kept separate from [`StyleSettings`] so the enum
/// model never leaks stringly keys and so clamping runs on every decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StyleWire {
    name_size: f32,
    name_color: String,
    name_bold: bool,
    title_size: f32,
    title_color: String,
    title_bold: bool,
    contact_size: f32,
    contact_color: String,
    contact_bold: bool,
    header_size: f32,
    header_color: String,
    header_bold: bool,
    body_size: f32,
    body_color: String,
    body_bold: bool,
}

impl From<StyleWire> for StyleSettings {
    fn from(w: StyleWire) -> Self {
        Self {
            name: TextStyle {
                size_px: StyleRole::Name.clamp_size(w.name_size),
                color_hex: w.name_color,
                bold: w.name_bold,
            },
            title: TextStyle {
                size_px: StyleRole::Title.clamp_size(w.title_size),
                color_hex: w.title_color,
                bold: w.title_bold,
            },
            contact: TextStyle {
                size_px: StyleRole::Contact.clamp_size(w.contact_size),
                color_hex: w.contact_color,
                bold: w.contact_bold,
            },
            section_header: TextStyle {
                size_px: StyleRole::SectionHeader.clamp_size(w.header_size),
                color_hex: w.header_color,
                bold: w.header_bold,
            },
            body: TextStyle {
                size_px: StyleRole::Body.clamp_size(w.body_size),
                color_hex: w.body_color,
                bold: w.body_bold,
            },
        }
    }
}

impl From<StyleSettings> for StyleWire {
    fn from(s: StyleSettings) -> Self {
        Self {
            name_size: s.name.size_px,
            name_color: s.name.color_hex,
            name_bold: s.name.bold,
            title_size: s.title.size_px,
            title_color: s.title.color_hex,
            title_bold: s.title.bold,
            contact_size: s.contact.size_px,
            contact_color: s.contact.color_hex,
            contact_bold: s.contact.bold,
            header_size: s.section_header.size_px,
            header_color: s.section_header.color_hex,
            header_bold: s.section_header.bold,
            body_size: s.body.size_px,
            body_color: s.body.color_hex,
            body_bold: s.body.bold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_below_floor_clamps() {
        let mut styles = StyleSettings::default();
        styles.set(StyleRole::Name, StyleUpdate::Size(9.0)).unwrap();
        assert_eq!(styles.name.size_px, 20.0);
        styles.set(StyleRole::Name, StyleUpdate::Size(99.0)).unwrap();
        assert_eq!(styles.name.size_px, 48.0);
        styles.set(StyleRole::Name, StyleUpdate::Size(30.0)).unwrap();
        assert_eq!(styles.name.size_px, 30.0);
    }

    #[test]
    fn test_invalid_color_rejected_and_unchanged() {
        let mut styles = StyleSettings::default();
        for bad in ["10B981", "#10B98", "#10B98Z", "#10B9811", ""] {
            let err = styles
                .set(StyleRole::Body, StyleUpdate::Color(bad.to_string()))
                .unwrap_err();
            assert!(matches!(err, Error::InvalidStyleValue { .. }));
            assert_eq!(styles.body.color_hex, "#000000");
        }
        styles
            .set(StyleRole::Body, StyleUpdate::Color("#10B981".to_string()))
            .unwrap();
        assert_eq!(styles.body.color_hex, "#10B981");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut styles = StyleSettings::default();
        styles.set(StyleRole::Title, StyleUpdate::Bold(true)).unwrap();
        styles.reset();
        let once = styles.clone();
        styles.reset();
        assert_eq!(styles, once);
        assert_eq!(styles, StyleSettings::default());
    }

    #[test]
    fn test_wire_keys_are_flat_camel_case() {
        let json = serde_json::to_value(StyleSettings::default()).unwrap();
        for key in [
            "nameSize",
            "nameColor",
            "nameBold",
            "titleSize",
            "contactSize",
            "headerSize",
            "headerColor",
            "headerBold",
            "bodySize",
        ] {
            assert!(json.get(key).is_some(), "missing wire key {key}");
        }
        assert_eq!(json["nameSize"], serde_json::json!(36.0));
        assert_eq!(json["headerBold"], serde_json::json!(true));
    }

    #[test]
    fn test_wire_roundtrip_and_decode_clamps() {
        let styles = StyleSettings::default();
        let json = serde_json::to_string(&styles).unwrap();
        let back: StyleSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, styles);

        let mut raw = serde_json::to_value(&styles).unwrap();
        raw["nameSize"] = serde_json::json!(6.0);
        let clamped: StyleSettings = serde_json::from_value(raw).unwrap();
        assert_eq!(clamped.name.size_px, 20.0);
    }

    #[test]
    fn test_bounds_cover_all_roles() {
        for role in StyleRole::ALL {
            let (min, max) = role.size_bounds();
            assert!(min < max);
            let default = StyleSettings::default().get(role).size_px;
            assert!((min..=max).contains(&default));
        }
    }
}
