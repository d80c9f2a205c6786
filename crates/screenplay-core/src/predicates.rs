//! Per-kind classification predicates: `TextPatterns` combined with geometry
//! and the running `Context`.

use crate::patterns::TextPatterns;
use crate::types::{Context, ElementKind, Group, TextElement};

/// Position helpers (§4.3). Tolerances tighten to 1pt once a column has been
/// established; they fall back to generous defaults otherwise.
pub struct Position;

impl Position {
    pub fn character(x: f32, ctx: &Context) -> bool {
        match ctx.character_x_position {
            Some(cx) => (x - cx).abs() <= 1.0,
            None => (180.0..=400.0).contains(&x),
        }
    }

    pub fn action(x: f32, ctx: &Context) -> bool {
        match ctx.scene_heading_x_position {
            Some(sx) => (x - sx).abs() <= 1.0,
            None => x <= 140.0,
        }
    }

    pub fn dialogue(x: f32, ctx: &Context) -> bool {
        if ctx.scene_heading_x_position.is_none() || ctx.character_x_position.is_none() {
            return false;
        }
        if let Some(dx) = ctx.dialogue_x_position {
            return (x - dx).abs() <= 1.0;
        }
        let sx = ctx.scene_heading_x_position.unwrap();
        let cx = ctx.character_x_position.unwrap();
        sx < x && x < cx
    }
}

fn is_title_case_or_caps(text: &str) -> bool {
    if TextPatterns::all_caps_text(text) {
        return true;
    }
    text.split_whitespace().all(|w| {
        w.chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(true)
    })
}

fn proper_word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn looks_like_human_name(text: &str) -> bool {
    let words = text.split_whitespace().count();
    if words == 0 || words > 4 || text.len() > 50 {
        return false;
    }
    if !text.chars().any(|c| c.is_alphabetic()) {
        return false;
    }
    let lower = text.to_lowercase();
    !lower.contains("based on") && !lower.contains("novel") && !lower.contains("draft")
        && !lower.contains("version")
}

fn is_marker_text(text: &str) -> bool {
    TextPatterns::author_marker(text)
        || TextPatterns::source_marker(text)
        || TextPatterns::source_credit(text)
        || TextPatterns::source_names(text)
}

/// Per-type classification predicates, evaluated against one element inside
/// its group plus the running context.
pub struct ElementPredicates;

/// `title`/`author_marker`/`author` only make sense before the screenplay
/// body has been found; a short all-caps line on the same page as an
/// already-classified scene heading is never the title, it just happens to
/// share page 0 with one (the common case of a screenplay with no separate
/// title page). The source-* family and `notes` have no such ambiguity with
/// body kinds (they aren't gated on `centered`/caps-pattern overlap with
/// `character`), so they keep the spec's plain page-0 check.
fn is_title_page(ctx: &Context) -> bool {
    ctx.page_number == 0 && !ctx.scene_heading_found
}

impl ElementPredicates {
    pub fn title(element: &TextElement, _index: usize, group: &Group, ctx: &Context) -> bool {
        if !is_title_page(ctx) || !element.centered || ctx.recent_author_marker {
            return false;
        }
        let trimmed = element.text.trim();
        if trimmed.len() > 50 || group.len() > 3 {
            return false;
        }
        if !is_title_case_or_caps(trimmed) || proper_word_count(trimmed) > 6 {
            return false;
        }
        let lower = trimmed.to_lowercase();
        if lower == "by" || lower == "written" || lower == "based on the novel" {
            return false;
        }
        !is_marker_text(trimmed)
    }

    pub fn author_marker(element: &TextElement, _index: usize, _group: &Group, ctx: &Context) -> bool {
        is_title_page(ctx) && element.centered && TextPatterns::author_marker(element.text.trim())
    }

    pub fn author(element: &TextElement, index: usize, group: &Group, ctx: &Context) -> bool {
        if !is_title_page(ctx) || !element.centered {
            return false;
        }
        let prev_is_marker = index > 0
            && TextPatterns::author_marker(group[index - 1].text.trim());
        let follows_recent_marker = ctx.recent_author_marker && looks_like_human_name(element.text.trim());
        prev_is_marker || follows_recent_marker
    }

    pub fn source_credit(element: &TextElement, _index: usize, _group: &Group, ctx: &Context) -> bool {
        ctx.page_number == 0 && element.centered && TextPatterns::source_credit(element.text.trim())
    }

    pub fn source_marker(element: &TextElement, _index: usize, _group: &Group, ctx: &Context) -> bool {
        ctx.page_number == 0 && element.centered && TextPatterns::source_marker(element.text.trim())
    }

    pub fn source_names(element: &TextElement, _index: usize, _group: &Group, ctx: &Context) -> bool {
        ctx.page_number == 0 && element.centered && TextPatterns::source_names(element.text.trim())
    }

    pub fn notes(element: &TextElement, _index: usize, _group: &Group, ctx: &Context) -> bool {
        (ctx.page_number == 0 && TextPatterns::notes(element.text.trim())) || element.y < 40.0
    }

    pub fn page_number(element: &TextElement, _index: usize, _group: &Group, _ctx: &Context) -> bool {
        let trimmed = element.text.trim();
        TextPatterns::page_number(trimmed) && (element.y < 100.0 || element.y > 700.0)
    }

    pub fn scene_number(element: &TextElement, _index: usize, _group: &Group, _ctx: &Context) -> bool {
        let trimmed = element.text.trim();
        TextPatterns::scene_number(trimmed)
            && (element.x < 100.0 || element.x >= 500.0)
            && (100.0..=700.0).contains(&element.y)
    }

    pub fn scene_heading(element: &TextElement, _index: usize, _group: &Group, _ctx: &Context) -> bool {
        TextPatterns::scene_heading(element.text.trim())
    }

    pub fn character(element: &TextElement, index: usize, group: &Group, ctx: &Context) -> bool {
        let trimmed = element.text.trim();
        if !Position::character(element.x, ctx) || !TextPatterns::character(trimmed) {
            return false;
        }
        if !(ctx.screenplay_started || ctx.page_number <= 2) {
            return false;
        }
        if index > 0 {
            let prev = &group[index - 1];
            let gap_ok = element.gap_to_prev.map(|g| g > 15.0).unwrap_or(false);
            let shift_ok = (element.x - prev.x).abs() > 50.0;
            if !gap_ok && !shift_ok {
                return false;
            }
        } else {
            // Guards against a run of stacked all-caps lines in the same
            // column being misread as one character cue; a following
            // element in a visibly different column (e.g. dialogue text)
            // is never such a stack regardless of its vertical gap.
            let valid_structure = group.len() == 1
                || group[1..].iter().all(|e| {
                    e.gap_to_prev.map(|g| g <= 3.0).unwrap_or(true) || (e.x - element.x).abs() > 30.0
                });
            if !valid_structure {
                return false;
            }
        }
        true
    }

    pub fn parenthetical(element: &TextElement, index: usize, group: &Group, _ctx: &Context) -> bool {
        if !TextPatterns::parenthetical(element.text.trim()) {
            return false;
        }
        if !(180.0..=280.0).contains(&element.x) {
            return false;
        }
        group[..index].iter().any(|e| {
            e.kind == Some(ElementKind::Character) || TextPatterns::character(e.text.trim())
        })
    }

    pub fn dialogue(element: &TextElement, _index: usize, _group: &Group, ctx: &Context) -> bool {
        (ctx.screenplay_started || ctx.page_number <= 2)
            && ctx.character_x_position.is_some()
            && Position::dialogue(element.x, ctx)
    }

    pub fn continuation(element: &TextElement, _index: usize, _group: &Group, _ctx: &Context) -> bool {
        TextPatterns::continuation(element.text.trim())
    }

    pub fn subheading(element: &TextElement, _index: usize, _group: &Group, ctx: &Context) -> bool {
        if !ctx.screenplay_started || !TextPatterns::subheading(element.text.trim()) {
            return false;
        }
        let at_scene_heading_col = ctx
            .scene_heading_x_position
            .map(|sx| (element.x - sx).abs() <= 1.0)
            .unwrap_or(false);
        at_scene_heading_col || element.x <= 140.0
    }

    pub fn action(element: &TextElement, _index: usize, _group: &Group, ctx: &Context) -> bool {
        if !ctx.screenplay_started || !Position::action(element.x, ctx) {
            return false;
        }
        let trimmed = element.text.trim();
        !TextPatterns::transition(trimmed) && !TextPatterns::scene_heading(trimmed)
    }

    pub fn transition(element: &TextElement, index: usize, _group: &Group, _ctx: &Context) -> bool {
        index == 0
            && TextPatterns::transition(element.text.trim())
            && (element.x <= 180.0 || element.x >= 400.0)
    }
}
