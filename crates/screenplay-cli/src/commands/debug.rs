//! `parse_debug` command: dumps the classified, grouped structure of a PDF
//! for inspecting why an element landed in a particular kind.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use screenplay_core::ClassifierConfig;

pub fn parse_debug_command(input: PathBuf, output: PathBuf) -> Result<()> {
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

    let mut out = String::new();
    out.push_str(&format!("language: {}\n", script.language));
    out.push_str(&format!("title: {}\n", script.title.as_deref().unwrap_or("(none)")));

    for page in &script.pages {
        out.push_str(&format!("\n== page {} ==\n", page.page_number));
        for element in &page.elements {
            let kind = element
                .kind
                .map(|k| format!("{:?}", k))
                .unwrap_or_else(|| "Unset".to_string());
            out.push_str(&format!(
                "{kind:<14} centered={:<5} dual={:<5} x={:>6.1} y={:>6.1} gap_prev={:>6.1?} :: {}\n",
                element.centered, element.is_dual_dialogue, element.x, element.y, element.gap_to_prev, element.text
            ));
        }
    }

    fs::write(&output, out).with_context(|| format!("failed to write debug output to '{}'", output.display()))?;
    Ok(())
}
