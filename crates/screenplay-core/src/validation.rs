//! Validation of a PDF binary before it is handed to the extraction
//! collaborator (§6).

use crate::error::{PdfError, Result};

const MIN_PDF_SIZE: usize = 1024;
const MAX_PDF_SIZE: usize = 15 * 1024 * 1024;
const PDF_MAGIC: &[u8] = b"%PDF";

/// Rejects a PDF binary that's too small, too large, or missing the `%PDF`
/// magic bytes.
pub fn validate_pdf_bytes(bytes: &[u8]) -> Result<()> {
    if bytes.len() < MIN_PDF_SIZE {
        return Err(PdfError::InvalidBinary(format!(
            "file is {} bytes, minimum is {MIN_PDF_SIZE}",
            bytes.len()
        ))
        .into());
    }
    if bytes.len() > MAX_PDF_SIZE {
        return Err(PdfError::InvalidBinary(format!(
            "file is {} bytes, maximum is {MAX_PDF_SIZE}",
            bytes.len()
        ))
        .into());
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(PdfError::InvalidBinary("missing %PDF magic bytes".to_string()).into());
    }
    Ok(())
}
