// src/core/sections.rs
//! Section ordering engine.
//!
//! Operates on the ordered section list by stable id, never by content or
//! position. A missing id is a no-op for every operation, and moves at the
//! first/last position are no-ops too; boundary handling is policy, not an
//! error. Timestamp bumping belongs to the reducer layer
//! ([`crate::core::store`]), which owns the project.

use uuid::Uuid;

use crate::types::Section;

/// Removes the section with this id. Relative order of the remaining
/// sections is preserved. Returns whether anything was removed.
pub fn delete(sections: &mut Vec<Section>, id: &str) -> bool {
    let before = sections.len();
    sections.retain(|s| s.id != id);
    sections.len() != before
}

/// Clones the section immediately after its source, copying title and
/// content verbatim under a freshly minted id. Returns the new id, or
/// `None` when the source id does not exist.
pub fn duplicate(sections: &mut Vec<Section>, id: &str) -> Option<String> {
    let index = sections.iter().position(|s| s.id == id)?;
    let mut clone = sections[index].clone();
    clone.id = mint_child_id(id);
    let new_id = clone.id.clone();
    sections.insert(index + 1, clone);
    Some(new_id)
}

/// Swaps the section with its immediate predecessor. No-op at the first
/// position or for an unknown id.
pub fn move_up(sections: &mut [Section], id: &str) -> bool {
    match sections.iter().position(|s| s.id == id) {
        Some(index) if index > 0 => {
            sections.swap(index, index - 1);
            true
        }
        _ => false,
    }
}

/// Swaps the section with its immediate successor. No-op at the last
/// position or for an unknown id.
pub fn move_down(sections: &mut [Section], id: &str) -> bool {
    match sections.iter().position(|s| s.id == id) {
        Some(index) if index + 1 < sections.len() => {
            sections.swap(index, index + 1);
            true
        }
        _ => false,
    }
}

/// Derives a child id from its source plus a random fragment, so ids stay
/// unique even when the same section is duplicated twice in one tick.
pub fn mint_child_id(parent: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{parent}-{}", &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Section> {
        vec![
            Section::new("a", "Alpha", "first"),
            Section::new("b", "Beta", "second"),
            Section::new("c", "Gamma", "third"),
        ]
    }

    fn ids(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut sections = fixture();
        assert!(delete(&mut sections, "b"));
        assert_eq!(ids(&sections), ["a", "c"]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut sections = fixture();
        let before = sections.clone();
        assert!(!delete(&mut sections, "zzz"));
        assert_eq!(sections, before);
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let mut sections = fixture();
        let new_id = duplicate(&mut sections, "a").unwrap();
        assert_eq!(sections.len(), 4);
        assert!(new_id.starts_with("a-"));
        assert_eq!(sections[0].id, "a");
        assert_eq!(sections[1].id, new_id);
        assert_eq!(sections[1].title, "Alpha");
        assert_eq!(sections[1].content, "first");
        assert_eq!(sections[2].id, "b");
    }

    #[test]
    fn test_duplicate_then_delete_restores_sequence() {
        let mut sections = fixture();
        let before = sections.clone();
        let new_id = duplicate(&mut sections, "b").unwrap();
        assert!(delete(&mut sections, &new_id));
        assert_eq!(sections, before);
    }

    #[test]
    fn test_duplicate_missing_id_is_noop() {
        let mut sections = fixture();
        assert!(duplicate(&mut sections, "zzz").is_none());
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn test_rapid_duplicates_mint_distinct_ids() {
        let mut sections = fixture();
        let first = duplicate(&mut sections, "a").unwrap();
        let second = duplicate(&mut sections, "a").unwrap();
        assert_ne!(first, second);
        assert_eq!(sections.len(), 5);
    }

    #[test]
    fn test_moves_swap_neighbors_only() {
        let mut sections = fixture();
        assert!(move_up(&mut sections, "c"));
        assert_eq!(ids(&sections), ["a", "c", "b"]);
        assert!(move_down(&mut sections, "a"));
        assert_eq!(ids(&sections), ["c", "a", "b"]);
    }

    #[test]
    fn test_moves_at_boundaries_are_noops() {
        let mut sections = fixture();
        assert!(!move_up(&mut sections, "a"));
        assert!(!move_down(&mut sections, "c"));
        assert!(!move_up(&mut sections, "zzz"));
        assert_eq!(ids(&sections), ["a", "b", "c"]);
    }

    #[test]
    fn test_move_sequences_preserve_id_multiset() {
        let mut sections = fixture();
        for id in ["a", "c", "b", "a", "c"] {
            move_up(&mut sections, id);
            move_down(&mut sections, id);
        }
        let mut seen = ids(&sections);
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b", "c"]);
    }
}
