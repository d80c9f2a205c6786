//! Output format selection for the `parse_pdf` command.

use anyhow::{Context, Result};
use clap::ValueEnum;
use screenplay_core::Script;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable: one element per line, `KIND: text`.
    Text,
    /// Compact JSON encoding of the `Script`.
    Json,
    /// Pretty-printed JSON encoding of the `Script`.
    JsonPretty,
    /// Indented text grouped by page, with element kinds and positions —
    /// intended for debugging classification, not machine consumption.
    Structured,
}

pub fn render(script: &Script, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(script)),
        OutputFormat::Json => serde_json::to_string(script).context("failed to serialize script as json"),
        OutputFormat::JsonPretty => {
            serde_json::to_string_pretty(script).context("failed to serialize script as pretty json")
        }
        OutputFormat::Structured => Ok(render_structured(script)),
    }
}

fn render_text(script: &Script) -> String {
    let mut out = String::new();
    if let Some(title) = &script.title {
        out.push_str(title);
        out.push_str("\n\n");
    }
    for page in &script.pages {
        for element in &page.elements {
            let kind = element
                .kind
                .map(|k| format!("{:?}", k))
                .unwrap_or_else(|| "Unset".to_string());
            out.push_str(&format!("{kind}: {}\n", element.text));
        }
    }
    out
}

fn render_structured(script: &Script) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "title: {}\nlanguage: {}\ntotal_pages: {}\n",
        script.title.as_deref().unwrap_or("(none)"),
        script.language,
        script.total_pages
    ));
    for page in &script.pages {
        out.push_str(&format!(
            "\n-- page {} ({}x{}) --\n",
            page.page_number, page.page_width, page.page_height
        ));
        for element in &page.elements {
            let kind = element
                .kind
                .map(|k| format!("{:?}", k))
                .unwrap_or_else(|| "Unset".to_string());
            out.push_str(&format!(
                "  [{kind:<14}] ({:>6.1}, {:>6.1}) {}\n",
                element.x, element.y, element.text
            ));
        }
    }
    out
}
