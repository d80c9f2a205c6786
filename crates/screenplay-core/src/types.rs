//! Core data model for the screenplay classifier.
//!
//! `Span` and `PageInput`/`DocumentInput` are the shape produced by the PDF
//! extraction collaborator (§6 of the specification); everything else is
//! built up by the classifier from that input.

use serde::{Deserialize, Serialize};

/// One visible text span as reported by the extraction collaborator.
///
/// Coordinates use a top-left origin with `y` growing downward; the
/// extraction collaborator is responsible for normalizing bottom-left
/// PDF coordinates before spans reach the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub font: Option<String>,
}

/// One page as reported by the extraction collaborator, before grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    /// 1-based page number as reported by the extractor.
    pub page_number: usize,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    pub text_items: Vec<Span>,
}

/// The record handed to the classifier: all pages of one document plus the
/// language label produced by the (external) language-detection collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    pub pages: Vec<PageInput>,
    pub language: String,
    pub total_pages: usize,
}

/// The closed set of screenplay element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Title,
    AuthorMarker,
    Author,
    SourceMarker,
    SourceCredit,
    SourceNames,
    Notes,
    PageNumber,
    SceneNumber,
    SceneHeading,
    Subheading,
    Character,
    Parenthetical,
    Dialogue,
    Action,
    Transition,
    Continuation,
}

/// One visible text span enriched with geometric context and (eventually) a
/// classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub font_name: Option<String>,
    #[serde(default)]
    pub gap_to_prev: Option<f32>,
    #[serde(default)]
    pub gap_to_next: Option<f32>,
    pub centered: bool,
    #[serde(default, rename = "type")]
    pub kind: Option<ElementKind>,
    #[serde(default)]
    pub is_dual_dialogue: bool,
}

impl TextElement {
    /// Horizontal midpoint of the element's bounding box.
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// An ordered run of `TextElement`s within a single page, delimited by a
/// vertical gap at least as large as `ClassifierConfig::group_gap_threshold`.
pub type Group = Vec<TextElement>;

/// One page of the document, mid-classification: elements are chunked into
/// groups but not yet flattened for output.
#[derive(Debug, Clone)]
pub struct Page {
    /// 0-based page index.
    pub page_number: usize,
    pub page_width: f32,
    pub page_height: f32,
    pub groups: Vec<Group>,
}

/// A position in document order: (page index, group index, element index).
pub type Position = (usize, usize, usize);

/// Mutable state threaded through classification.
///
/// Column x-positions are first-write-wins: once set they are never
/// reassigned (invariant 1, §3).
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub scene_heading_x_position: Option<f32>,
    pub character_x_position: Option<f32>,
    pub dialogue_x_position: Option<f32>,
    pub first_scene_heading_y: Option<f32>,
    pub scene_heading_found: bool,
    /// Document-order position of the first scene-heading-or-transition, or
    /// `None` if the document has no screenplay body. Set once, in the
    /// pre-pass, and never mutated afterward.
    pub screenplay_boundary: Option<Position>,
    /// True once the element at `screenplay_boundary` has been reached;
    /// never resets afterward.
    pub screenplay_started: bool,
    /// Transient: set when an `author_marker` is classified, cleared when
    /// the next `author` is classified. Local to page 0.
    pub recent_author_marker: bool,
    /// 0-based index of the page currently being classified.
    pub page_number: usize,
    pub page_width: f32,
    pub page_height: f32,
}

impl Context {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Context {
            page_width,
            page_height,
            ..Default::default()
        }
    }

    /// Invariant 3 (§8): true iff `pos` is at or after `screenplay_boundary`
    /// in document order.
    pub fn is_started_at(&self, pos: Position) -> bool {
        match self.screenplay_boundary {
            Some(boundary) => pos >= boundary,
            None => false,
        }
    }

    /// First-write-wins setter for the scene-heading column.
    pub fn set_scene_heading_x(&mut self, x: f32) {
        if self.scene_heading_x_position.is_none() {
            self.scene_heading_x_position = Some(x);
        }
    }

    /// First-write-wins setter for the character column.
    pub fn set_character_x(&mut self, x: f32) {
        if self.character_x_position.is_none() {
            self.character_x_position = Some(x);
        }
    }

    /// First-write-wins setter for the dialogue column.
    pub fn set_dialogue_x(&mut self, x: f32) {
        if self.dialogue_x_position.is_none() {
            self.dialogue_x_position = Some(x);
        }
    }
}

/// One page of fully classified, flattened output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptPage {
    /// 0-based page index.
    pub page_number: usize,
    pub page_width: f32,
    pub page_height: f32,
    pub elements: Vec<TextElement>,
}

/// Metadata carried alongside a classified `Script`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub source_path: Option<String>,
    pub page_count: usize,
    pub language: String,
}

/// The final classified document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub title: Option<String>,
    pub pages: Vec<ScriptPage>,
    pub full_text: String,
    pub language: String,
    pub total_pages: usize,
    pub metadata: Metadata,
}
