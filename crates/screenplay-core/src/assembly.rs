//! Post-classification assembly: flattens groups into pages, extracts the
//! title, and synthesizes the `OPENING` scene heading when needed (§4.5).

use crate::types::{ElementKind, Page, ScriptPage, TextElement};

/// Synthetic scene heading inserted at the top of page 1 when the document
/// has no title-page scene heading and page 1 doesn't open with one itself.
const OPENING_TEXT: &str = "OPENING";
const OPENING_X: f32 = 72.0;
const OPENING_FALLBACK_Y: f32 = 144.0;
const OPENING_WIDTH: f32 = 70.0;
const OPENING_HEIGHT: f32 = 12.0;
const OPENING_FONT_SIZE: f32 = 12.0;

pub struct StructureAssembler;

impl StructureAssembler {
    /// Flattens classified `Page`s into `ScriptPage`s, in document order.
    pub fn flatten(pages: &[Page]) -> Vec<ScriptPage> {
        pages
            .iter()
            .map(|page| ScriptPage {
                page_number: page.page_number,
                page_width: page.page_width,
                page_height: page.page_height,
                elements: page.groups.iter().flatten().cloned().collect(),
            })
            .collect()
    }

    /// Joins the text of every `title` element on page 0 with newlines, or
    /// `None` if page 0 has no title elements.
    pub fn extract_title(pages: &[ScriptPage]) -> Option<String> {
        let page0 = pages.first()?;
        let lines: Vec<&str> = page0
            .elements
            .iter()
            .filter(|e| e.kind == Some(ElementKind::Title))
            .map(|e| e.text.as_str())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    /// Inserts a synthetic `OPENING` scene heading at the top of page 1 iff
    /// (page count ≥ 2) ∧ (no scene_heading on page 0) ∧ (page 1's first
    /// element is neither scene_heading nor transition).
    pub fn synthesize_opening(pages: &mut Vec<ScriptPage>) {
        if pages.len() < 2 {
            return;
        }
        let page0_has_scene_heading = pages[0]
            .elements
            .iter()
            .any(|e| e.kind == Some(ElementKind::SceneHeading));
        if page0_has_scene_heading {
            return;
        }

        let page1_first_is_boundary = pages[1]
            .elements
            .first()
            .map(|e| matches!(e.kind, Some(ElementKind::SceneHeading) | Some(ElementKind::Transition)))
            .unwrap_or(false);
        if page1_first_is_boundary {
            return;
        }

        let y = pages[1]
            .elements
            .first()
            .map(|e| e.y - 24.0)
            .unwrap_or(OPENING_FALLBACK_Y);

        let opening = TextElement {
            text: OPENING_TEXT.to_string(),
            x: OPENING_X,
            y,
            width: OPENING_WIDTH,
            height: OPENING_HEIGHT,
            font_size: Some(OPENING_FONT_SIZE),
            font_name: None,
            gap_to_prev: None,
            gap_to_next: None,
            centered: false,
            kind: Some(ElementKind::SceneHeading),
            is_dual_dialogue: false,
        };
        pages[1].elements.insert(0, opening);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Group;

    fn page(page_number: usize, groups: Vec<Group>) -> Page {
        Page {
            page_number,
            page_width: 612.0,
            page_height: 792.0,
            groups,
        }
    }

    fn element(text: &str, y: f32, kind: Option<ElementKind>) -> TextElement {
        TextElement {
            text: text.to_string(),
            x: 72.0,
            y,
            width: 100.0,
            height: 12.0,
            font_size: None,
            font_name: None,
            gap_to_prev: None,
            gap_to_next: None,
            centered: false,
            kind,
            is_dual_dialogue: false,
        }
    }

    #[test]
    fn extract_title_joins_title_elements() {
        let pages = vec![page(
            0,
            vec![vec![
                element("BATMAN BEGINS", 100.0, Some(ElementKind::Title)),
                element("By", 120.0, Some(ElementKind::AuthorMarker)),
            ]],
        )];
        let flat = StructureAssembler::flatten(&pages);
        assert_eq!(StructureAssembler::extract_title(&flat), Some("BATMAN BEGINS".to_string()));
    }

    #[test]
    fn synthesize_opening_when_page1_has_no_boundary() {
        let pages = vec![
            page(0, vec![vec![element("BATMAN BEGINS", 100.0, Some(ElementKind::Title))]]),
            page(1, vec![vec![element("John walks in.", 200.0, Some(ElementKind::Action))]]),
        ];
        let mut flat = StructureAssembler::flatten(&pages);
        StructureAssembler::synthesize_opening(&mut flat);
        assert_eq!(flat[1].elements[0].text, "OPENING");
        assert_eq!(flat[1].elements[0].y, 176.0);
    }

    #[test]
    fn no_synthesis_when_page0_has_scene_heading() {
        let pages = vec![
            page(0, vec![vec![element("INT. KITCHEN - DAY", 100.0, Some(ElementKind::SceneHeading))]]),
            page(1, vec![vec![element("John walks in.", 200.0, Some(ElementKind::Action))]]),
        ];
        let mut flat = StructureAssembler::flatten(&pages);
        StructureAssembler::synthesize_opening(&mut flat);
        assert_eq!(flat[1].elements[0].text, "John walks in.");
    }
}
