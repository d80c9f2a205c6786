//! Converts raw positioned spans into enriched `TextElement`s and chunks
//! them into `Group`s by vertical gap.

use crate::config::ClassifierConfig;
use crate::types::{Group, Span, TextElement};

/// Builds one `TextElement` per span, filling in `gap_to_prev`, `gap_to_next`,
/// and `centered`. Spans are assumed to already be in document order
/// (top-to-bottom, then left-to-right) for a single page.
pub fn build_text_elements(
    spans: &[Span],
    page_width: f32,
    config: &ClassifierConfig,
) -> Vec<TextElement> {
    let mut elements: Vec<TextElement> = spans
        .iter()
        .map(|span| TextElement {
            text: span.text.clone(),
            x: span.x,
            y: span.y,
            width: span.width,
            height: span.height,
            font_size: span.font_size,
            font_name: span.font.clone(),
            gap_to_prev: None,
            gap_to_next: None,
            centered: false,
            kind: None,
            is_dual_dialogue: false,
        })
        .collect();

    for i in 0..elements.len() {
        if i > 0 {
            let prev_bottom = elements[i - 1].y + elements[i - 1].height;
            let gap = (elements[i].y - prev_bottom).max(0.0);
            elements[i].gap_to_prev = Some(gap);
        }
        if i + 1 < elements.len() {
            let this_bottom = elements[i].y + elements[i].height;
            let gap = (elements[i + 1].y - this_bottom).max(0.0);
            elements[i].gap_to_next = Some(gap);
        }
        elements[i].centered = is_centered(&elements[i], page_width, config);
    }

    elements
}

/// Centering rule (§4.1): base tolerance widened near the page midpoint, with
/// two geometric exclusions that override an otherwise-centered verdict.
fn is_centered(element: &TextElement, page_width: f32, config: &ClassifierConfig) -> bool {
    let mid = element.mid_x();
    let page_mid = page_width / 2.0;
    let deviation = (mid - page_mid).abs();

    let tolerance = if (280.0..=320.0).contains(&element.x) {
        config.centered_tolerance_wide
    } else {
        config.centered_tolerance
    };

    if deviation > tolerance {
        return false;
    }

    if (170.0..=190.0).contains(&element.x) && deviation > 8.0 {
        return false;
    }
    if (240.0..=270.0).contains(&element.x) && deviation > 18.0 {
        return false;
    }

    true
}

/// Chunks elements into groups; a new group starts after any element whose
/// `gap_to_next` is at least `threshold`. Empty groups are dropped (they
/// cannot occur from this construction, but the rule is stated defensively
/// to mirror the specification).
pub fn group_by_gap(elements: Vec<TextElement>, threshold: f32) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut current: Group = Vec::new();

    for element in elements {
        let ends_group = element.gap_to_next.map(|g| g >= threshold).unwrap_or(false);
        current.push(element);
        if ends_group {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups.into_iter().filter(|g| !g.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, x: f32, y: f32, width: f32, height: f32) -> Span {
        Span {
            text: text.to_string(),
            x,
            y,
            width,
            height,
            font_size: None,
            font: None,
        }
    }

    #[test]
    fn gap_to_prev_and_next_are_computed() {
        let config = ClassifierConfig::default();
        let spans = vec![
            span("INT. KITCHEN - DAY", 72.0, 200.0, 200.0, 12.0),
            span("John enters.", 72.0, 230.0, 120.0, 12.0),
        ];
        let elements = build_text_elements(&spans, 612.0, &config);
        assert_eq!(elements[0].gap_to_prev, None);
        assert_eq!(elements[0].gap_to_next, Some(18.0));
        assert_eq!(elements[1].gap_to_prev, Some(18.0));
        assert_eq!(elements[1].gap_to_next, None);
    }

    #[test]
    fn centered_title_within_tolerance() {
        let config = ClassifierConfig::default();
        let spans = vec![span("BATMAN BEGINS", 256.0, 100.0, 100.0, 14.0)];
        let elements = build_text_elements(&spans, 612.0, &config);
        assert!(elements[0].centered);
    }

    #[test]
    fn left_dialogue_column_exclusion() {
        let config = ClassifierConfig::default();
        // x = 180 is inside [170, 190]; with page width 612 its deviation from
        // midpoint (306) is 306 - 180 - width/2; construct a case whose
        // deviation exceeds 8pt to trigger the exclusion.
        let spans = vec![span("Hi.", 180.0, 100.0, 20.0, 12.0)];
        let elements = build_text_elements(&spans, 612.0, &config);
        assert!(!elements[0].centered);
    }

    #[test]
    fn group_by_gap_splits_on_large_gap() {
        let config = ClassifierConfig::default();
        let spans = vec![
            span("INT. KITCHEN - DAY", 72.0, 200.0, 200.0, 12.0),
            span("John enters.", 72.0, 230.0, 120.0, 12.0),
        ];
        let elements = build_text_elements(&spans, 612.0, &config);
        let groups = group_by_gap(elements, config.group_gap_threshold);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn group_by_gap_keeps_tight_lines_together() {
        let config = ClassifierConfig::default();
        let spans = vec![
            span("JOHN", 240.0, 270.0, 60.0, 12.0),
            span("Hello, world.", 150.0, 284.0, 120.0, 12.0),
        ];
        let elements = build_text_elements(&spans, 612.0, &config);
        let groups = group_by_gap(elements, config.group_gap_threshold);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }
}
