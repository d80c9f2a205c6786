//! Second-pass retroactive reclassification (§4.4), applied per group after
//! the main sequential pass has run over the whole document.

use crate::patterns::TextPatterns;
use crate::types::{ElementKind, Group};

fn is_title_like(text: &str) -> bool {
    if TextPatterns::all_caps_text(text) {
        return true;
    }
    text.split_whitespace()
        .all(|w| w.chars().next().map(|c| c.is_uppercase()).unwrap_or(true))
}

/// Title-page only: text before the first author-marker in a group gets
/// reclassified as `title` if it looks the part. A stray `title` literally
/// reading "screenplay" is itself recovered into `author_marker` first.
pub fn retroactive_title_recovery(group: &mut Group) {
    for element in group.iter_mut() {
        if element.kind == Some(ElementKind::Title) && element.text.trim().to_lowercase() == "screenplay" {
            element.kind = Some(ElementKind::AuthorMarker);
        }
    }

    let Some(marker_idx) = group.iter().position(|e| e.kind == Some(ElementKind::AuthorMarker)) else {
        return;
    };

    for i in 0..marker_idx {
        let trimmed = group[i].text.trim().to_string();
        let eligible = matches!(
            group[i].kind,
            Some(ElementKind::Character) | Some(ElementKind::Title) | None
        );
        if eligible
            && group[i].centered
            && is_title_like(&trimmed)
            && trimmed.to_lowercase() != "screenplay"
        {
            group[i].kind = Some(ElementKind::Title);
        }
    }
}

/// Only meaningful once the screenplay body has begun: two columns of
/// unclassified character-like names flip both sides to `character` and the
/// lines beneath them to `dialogue`.
pub fn dual_dialogue_detection(group: &mut Group) {
    let left: Vec<usize> = group
        .iter()
        .enumerate()
        .filter(|(_, e)| {
            e.kind.is_none() && TextPatterns::character(e.text.trim()) && (150.0..=220.0).contains(&e.x)
        })
        .map(|(i, _)| i)
        .collect();
    let right: Vec<usize> = group
        .iter()
        .enumerate()
        .filter(|(_, e)| {
            e.kind.is_none() && TextPatterns::character(e.text.trim()) && (350.0..=450.0).contains(&e.x)
        })
        .map(|(i, _)| i)
        .collect();

    if left.is_empty() || right.is_empty() {
        return;
    }

    for &i in left.iter().chain(right.iter()) {
        group[i].kind = Some(ElementKind::Character);
        group[i].is_dual_dialogue = true;
    }

    for element in group.iter_mut() {
        let is_leftover_action = element.kind.is_none() || element.kind == Some(ElementKind::Action);
        if is_leftover_action && (80.0..=140.0).contains(&element.x) {
            element.kind = Some(ElementKind::Dialogue);
            element.is_dual_dialogue = true;
        } else if element.kind.is_none() && (300.0..=370.0).contains(&element.x) {
            element.kind = Some(ElementKind::Dialogue);
            element.is_dual_dialogue = true;
        }
    }
}

/// Any still-unclassified element matching the subheading pattern at the
/// established scene-heading column or the left margin becomes a subheading.
pub fn subheading_recovery(group: &mut Group, scene_heading_x: Option<f32>) {
    for element in group.iter_mut() {
        if element.kind.is_some() {
            continue;
        }
        let trimmed = element.text.trim();
        if !TextPatterns::subheading(trimmed) {
            continue;
        }
        let at_column = scene_heading_x
            .map(|sx| (element.x - sx).abs() <= 5.0)
            .unwrap_or(false);
        if at_column || element.x <= 110.0 {
            element.kind = Some(ElementKind::Subheading);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextElement;

    fn element(text: &str, x: f32, centered: bool, kind: Option<ElementKind>) -> TextElement {
        TextElement {
            text: text.to_string(),
            x,
            y: 100.0,
            width: 100.0,
            height: 12.0,
            font_size: None,
            font_name: None,
            gap_to_prev: None,
            gap_to_next: None,
            centered,
            kind,
            is_dual_dialogue: false,
        }
    }

    #[test]
    fn retroactive_title_recovery_reclassifies_preceding_elements() {
        let mut group = vec![
            element("BATMAN BEGINS", 256.0, true, None),
            element("By", 256.0, true, Some(ElementKind::AuthorMarker)),
        ];
        retroactive_title_recovery(&mut group);
        assert_eq!(group[0].kind, Some(ElementKind::Title));
    }

    #[test]
    fn dual_dialogue_detection_flips_both_columns() {
        let mut group = vec![
            element("ALICE", 180.0, false, None),
            element("Hi.", 100.0, false, None),
            element("BOB", 380.0, false, None),
            element("Hey.", 330.0, false, None),
        ];
        dual_dialogue_detection(&mut group);
        assert_eq!(group[0].kind, Some(ElementKind::Character));
        assert_eq!(group[2].kind, Some(ElementKind::Character));
        assert_eq!(group[1].kind, Some(ElementKind::Dialogue));
        assert_eq!(group[3].kind, Some(ElementKind::Dialogue));
    }

    #[test]
    fn subheading_recovery_uses_left_margin() {
        let mut group = vec![element("LATER", 90.0, false, None)];
        subheading_recovery(&mut group, None);
        assert_eq!(group[0].kind, Some(ElementKind::Subheading));
    }
}
