//! PDF text extraction collaborator: turns page objects reported by
//! `pdfium-render` into the `Span`/`PageInput` shape the classifier expects.
//!
//! Feature-gated behind `pdf`; grounded on the teacher's page-objects
//! extraction path (`pdf/markdown/bridge.rs::objects_to_page_data`), adapted
//! to this crate's flatter `Span` model (no bold/italic/monospace tracked —
//! the classifier never looks at those).

use std::path::Path;

use pdfium_render::prelude::*;

use crate::config::ClassifierConfig;
use crate::error::{PdfError, Result};
use crate::types::{DocumentInput, PageInput, Span};
use crate::validation::validate_pdf_bytes;

/// Opens a PDF at `path`, validates it, and extracts one `PageInput` per
/// page with normalized top-left-origin coordinates.
pub fn extract_document(path: &Path, language: String, config: &ClassifierConfig) -> Result<DocumentInput> {
    let bytes = std::fs::read(path).map_err(PdfError::Io)?;
    validate_pdf_bytes(&bytes)?;

    let pdfium = Pdfium::new(
        Pdfium::bind_to_system_library()
            .or_else(|_| Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./")))
            .map_err(|e| PdfError::OpenFailed(e.to_string()))?,
    );

    let document = pdfium
        .load_pdf_from_byte_vec(bytes, None)
        .map_err(|e| PdfError::OpenFailed(e.to_string()))?;

    let mut pages = Vec::with_capacity(document.pages().len() as usize);
    for (index, page) in document.pages().iter().enumerate() {
        let page_number = index + 1;
        let width = page.width().value;
        let height = page.height().value;
        let text_items = extract_page_spans(&page, height)
            .map_err(|reason| PdfError::PageReadFailed { page: page_number, reason })?;

        pages.push(PageInput {
            page_number,
            width: Some(width),
            height: Some(height),
            text_items,
        });
    }

    let total_pages = pages.len();
    tracing::debug!(total_pages, "extracted spans from pdf");

    Ok(DocumentInput {
        pages,
        language,
        total_pages,
    })
}

fn extract_page_spans(page: &PdfPage, page_height: f32) -> std::result::Result<Vec<Span>, String> {
    let objects: Vec<PdfPageObject> = page.objects().iter().collect();
    let paragraphs: Vec<PdfParagraph> = PdfParagraph::from_objects(&objects);

    let mut spans = Vec::new();
    for para in paragraphs {
        for line in para.into_lines() {
            let line_left = line.left.value;
            let line_bottom = line.bottom.value;
            let line_top = line.top.value;

            for fragment in &line.fragments {
                let PdfParagraphFragment::StyledString(styled) = fragment else {
                    continue;
                };
                let text = normalize_text_encoding(styled.text());
                if text.trim().is_empty() {
                    continue;
                }

                spans.push(Span {
                    text,
                    x: line_left,
                    // pdfium reports y with origin at the page bottom; the
                    // classifier expects origin at the top (§6).
                    y: page_height - line_top,
                    width: (line.right.value - line_left).max(0.0),
                    height: (line_top - line_bottom).max(0.0),
                    font_size: Some(styled.font_size().value),
                    font: styled.font_name().map(|n| n.to_string()),
                });
            }
        }
    }

    Ok(spans)
}

/// Strips soft hyphens and C0 control characters the way raw PDF glyph runs
/// sometimes carry them.
fn normalize_text_encoding(text: &str) -> String {
    if !text.contains('\u{00AD}') && !text.bytes().any(|b| b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r') {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    for (i, &ch) in chars.iter().enumerate() {
        match ch {
            '\u{00AD}' => {
                let at_end = i == chars.len() - 1 || chars.get(i + 1).is_some_and(|c| c.is_whitespace());
                if at_end {
                    result.push('-');
                }
            }
            c if c.is_control() && c != '\n' && c != '\r' && c != '\t' => {}
            c => result.push(c),
        }
    }
    result
}
