//! Classifies positioned PDF text spans from a screenplay into typed
//! elements — scene headings, character cues, dialogue, parentheticals,
//! action, transitions, and the surrounding title-page furniture.
//!
//! The pipeline is a pure function from positioned spans to a [`Script`]:
//! [`grouper`] chunks spans into [`Group`](types::Group)s, [`classify`]
//! assigns each element a [`types::ElementKind`], and [`assembly`] flattens
//! the result into pages and synthesizes structure the source PDF left
//! implicit (a missing title, a missing opening scene heading).

pub mod assembly;
pub mod classify;
pub mod config;
pub mod error;
pub mod grouper;
pub mod language;
pub mod patterns;
pub mod predicates;
pub mod types;
pub mod validation;

#[cfg(feature = "pdf")]
pub mod extraction;

pub use config::ClassifierConfig;
pub use error::{PdfError, Result, ScreenplayError};
pub use types::{DocumentInput, ElementKind, Metadata, PageInput, Script, ScriptPage, Span, TextElement};

use assembly::StructureAssembler;
use classify::Classifier;

/// Runs the full pipeline — classification plus assembly — over an already
/// page-and-span-extracted document.
///
/// This is the single entry point collaborators (the CLI, tests, bindings)
/// should call; it is a pure function of `document` and `config`.
pub fn classify_document(document: &DocumentInput, config: &ClassifierConfig) -> Result<Script> {
    let classifier = Classifier::new(config);
    let classified_pages = classifier.classify(document)?;

    let mut pages = StructureAssembler::flatten(&classified_pages);
    StructureAssembler::synthesize_opening(&mut pages);
    let title = StructureAssembler::extract_title(&pages);

    let full_text = pages
        .iter()
        .flat_map(|p| p.elements.iter())
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Script {
        title,
        total_pages: pages.len(),
        metadata: Metadata {
            source_path: None,
            page_count: pages.len(),
            language: document.language.clone(),
        },
        language: document.language.clone(),
        pages,
        full_text,
    })
}
