//! The orchestrator: boundary pre-pass, main sequential pass, second pass,
//! final pass (§4.4).

mod second_pass;

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::grouper::{build_text_elements, group_by_gap};
use crate::patterns::TextPatterns;
use crate::predicates::ElementPredicates;
use crate::types::{Context, DocumentInput, ElementKind, Group, Page, Position, TextElement};

/// Classifies a whole document into pages of grouped, typed elements.
///
/// Classification is a pure function of its input: no shared mutable state
/// survives a call, so separate documents may be classified concurrently by
/// separate `Classifier` instances (§5).
pub struct Classifier<'a> {
    config: &'a ClassifierConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a ClassifierConfig) -> Self {
        Classifier { config }
    }

    pub fn classify(&self, document: &DocumentInput) -> Result<Vec<Page>> {
        let mut pages = self.build_pages(document);

        let boundary = find_screenplay_boundary(&pages);
        let mut ctx = Context::new(self.config.page_width_default, self.config.page_height_default);
        ctx.screenplay_boundary = boundary;

        self.main_pass(&mut pages, &mut ctx);
        self.second_pass(&mut pages, &ctx);
        self.final_pass(&mut pages, &ctx);

        Ok(pages)
    }

    fn build_pages(&self, document: &DocumentInput) -> Vec<Page> {
        document
            .pages
            .iter()
            .enumerate()
            .map(|(page_idx, page_input)| {
                let page_width = page_input.width.unwrap_or(self.config.page_width_default);
                let page_height = page_input.height.unwrap_or(self.config.page_height_default);
                let elements = build_text_elements(&page_input.text_items, page_width, self.config);
                let groups = group_by_gap(elements, self.config.group_gap_threshold);
                Page {
                    page_number: page_idx,
                    page_width,
                    page_height,
                    groups,
                }
            })
            .collect()
    }

    fn main_pass(&self, pages: &mut [Page], ctx: &mut Context) {
        for (page_idx, page) in pages.iter_mut().enumerate() {
            ctx.page_number = page_idx;
            ctx.page_width = page.page_width;
            ctx.page_height = page.page_height;
            if page_idx == 0 {
                ctx.recent_author_marker = false;
            }

            for (group_idx, group) in page.groups.iter_mut().enumerate() {
                for element_idx in 0..group.len() {
                    let pos = (page_idx, group_idx, element_idx);
                    ctx.screenplay_started = ctx.is_started_at(pos);

                    let snapshot = group.clone();
                    let kind = classify_element(&snapshot[element_idx], element_idx, &snapshot, ctx);
                    group[element_idx].kind = kind;
                    if let Some(kind) = kind {
                        update_context(ctx, kind, &group[element_idx]);
                    }
                }
            }
        }
    }

    fn second_pass(&self, pages: &mut [Page], ctx: &Context) {
        for (page_idx, page) in pages.iter_mut().enumerate() {
            for (group_idx, group) in page.groups.iter_mut().enumerate() {
                if page_idx == 0 {
                    second_pass::retroactive_title_recovery(group);
                }

                let pos = (page_idx, group_idx, 0);
                if ctx.is_started_at(pos) {
                    second_pass::dual_dialogue_detection(group);
                }

                second_pass::subheading_recovery(group, ctx.scene_heading_x_position);
            }
        }
    }

    fn final_pass(&self, pages: &mut [Page], ctx: &Context) {
        if !ctx.scene_heading_found {
            return;
        }
        for page in pages.iter_mut() {
            for group in page.groups.iter_mut() {
                for element in group.iter_mut() {
                    if element.kind.is_none() {
                        element.kind = Some(ElementKind::Action);
                    }
                }
            }
        }
    }
}

fn find_screenplay_boundary(pages: &[Page]) -> Option<Position> {
    for (page_idx, page) in pages.iter().enumerate() {
        for (group_idx, group) in page.groups.iter().enumerate() {
            for (element_idx, element) in group.iter().enumerate() {
                let trimmed = element.text.trim();
                if TextPatterns::scene_heading(trimmed) || TextPatterns::transition(trimmed) {
                    return Some((page_idx, group_idx, element_idx));
                }
            }
        }
    }
    None
}

/// Evaluates predicates in the fixed priority order (§4.4 step 2); first
/// match wins.
fn classify_element(
    element: &TextElement,
    index: usize,
    group: &Group,
    ctx: &Context,
) -> Option<ElementKind> {
    use ElementKind::*;

    if ElementPredicates::title(element, index, group, ctx) {
        return Some(Title);
    }
    if ElementPredicates::author_marker(element, index, group, ctx) {
        return Some(AuthorMarker);
    }
    if ElementPredicates::author(element, index, group, ctx) {
        return Some(Author);
    }
    if ElementPredicates::source_credit(element, index, group, ctx) {
        return Some(SourceCredit);
    }
    if ElementPredicates::source_marker(element, index, group, ctx) {
        return Some(SourceMarker);
    }
    if ElementPredicates::source_names(element, index, group, ctx) {
        return Some(SourceNames);
    }
    if ElementPredicates::page_number(element, index, group, ctx) {
        return Some(PageNumber);
    }
    if ElementPredicates::notes(element, index, group, ctx) {
        return Some(Notes);
    }
    if ElementPredicates::scene_heading(element, index, group, ctx) {
        return Some(SceneHeading);
    }
    if ElementPredicates::character(element, index, group, ctx) {
        return Some(Character);
    }
    if ElementPredicates::action(element, index, group, ctx) {
        return Some(Action);
    }
    if ElementPredicates::parenthetical(element, index, group, ctx) {
        return Some(Parenthetical);
    }
    if ElementPredicates::dialogue(element, index, group, ctx) {
        return Some(Dialogue);
    }
    if ElementPredicates::continuation(element, index, group, ctx) {
        return Some(Continuation);
    }
    if ElementPredicates::subheading(element, index, group, ctx) {
        return Some(Subheading);
    }
    if ElementPredicates::transition(element, index, group, ctx) {
        return Some(Transition);
    }
    if ElementPredicates::scene_number(element, index, group, ctx) {
        return Some(SceneNumber);
    }
    None
}

fn update_context(ctx: &mut Context, kind: ElementKind, element: &TextElement) {
    match kind {
        ElementKind::Title => {}
        ElementKind::AuthorMarker => ctx.recent_author_marker = true,
        ElementKind::Author => ctx.recent_author_marker = false,
        ElementKind::SceneHeading => {
            ctx.set_scene_heading_x(element.x);
            ctx.scene_heading_found = true;
            if ctx.first_scene_heading_y.is_none() {
                ctx.first_scene_heading_y = Some(element.y);
            }
        }
        ElementKind::Character => ctx.set_character_x(element.x),
        ElementKind::Dialogue => ctx.set_dialogue_x(element.x),
        _ => {}
    }
}
