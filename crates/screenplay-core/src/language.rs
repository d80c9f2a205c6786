//! Thin wrapper around `whatlang` for labeling a document's dominant
//! language before classification. Feature-gated; callers on the `pdf`
//! collaborator path usually enable it alongside `pdf`.

#[cfg(feature = "language-detection")]
pub fn detect(text: &str) -> String {
    match whatlang::detect(text) {
        Some(info) => info.lang().code().to_string(),
        None => {
            tracing::debug!("language detection produced no result, defaulting to \"und\"");
            "und".to_string()
        }
    }
}

#[cfg(not(feature = "language-detection"))]
pub fn detect(_text: &str) -> String {
    "und".to_string()
}

#[cfg(all(test, feature = "language-detection"))]
mod tests {
    use super::*;

    #[test]
    fn detects_english() {
        let text = "The quick brown fox jumps over the lazy dog near the old mill.";
        assert_eq!(detect(text), "eng");
    }

    #[test]
    fn empty_text_defaults_to_und() {
        assert_eq!(detect(""), "und");
    }
}
