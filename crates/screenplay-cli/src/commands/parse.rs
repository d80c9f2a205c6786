//! `parse_pdf` command: validate, extract, classify, assemble, and print.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use screenplay_core::ClassifierConfig;

use crate::output::{self, OutputFormat};

pub fn parse_pdf_command(input: PathBuf, output: PathBuf, format: OutputFormat) -> Result<()> {
    let config = ClassifierConfig::default();

    let mut document = screenplay_core::extraction::extract_document(&input, "und".to_string(), &config)
        .with_context(|| format!("failed to extract text from '{}'", input.display()))?;

    let sample: String = document
        .pages
        .iter()
        .flat_map(|p| p.text_items.iter())
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    document.language = screenplay_core::language::detect(&sample);

    let script = screenplay_core::classify_document(&document, &config)
        .with_context(|| format!("failed to classify '{}'", input.display()))?;

    let rendered = output::render(&script, format)?;
    fs::write(&output, rendered).with_context(|| format!("failed to write output to '{}'", output.display()))?;

    tracing::info!(pages = script.total_pages, "parsed screenplay");
    Ok(())
}
