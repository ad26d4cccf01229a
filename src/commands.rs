use anyhow::{Context, Result};

use crate::document::ShareDocument;
use crate::interpolate;
use crate::rational::Rational;

/// Parse a share document from JSON text
///
/// # Errors
/// Returns an error if the document is malformed or a share entry is incomplete
pub fn load_document(text: &str) -> Result<ShareDocument> {
    ShareDocument::from_json(text).context("Failed to parse share document")
}

/// Reconstruct the secret held by a parsed share document
///
/// Uses the document's threshold `k` and its `k` lowest-indexed shares.
///
/// # Errors
/// Returns an error if there are fewer than `k` shares, a selected share does
/// not decode, or two selected shares have the same index
pub fn recover_secret(document: &ShareDocument) -> Result<Rational> {
    interpolate::reconstruct(document.shares(), document.threshold()).with_context(|| {
        format!(
            "Failed to reconstruct secret from {} shares with threshold {}",
            document.shares().len(),
            document.threshold()
        )
    })
}

/// Indices of the shares that reconstruction will use, lowest first
///
/// # Errors
/// Returns an error if the document holds fewer shares than its threshold
pub fn selected_indices(document: &ShareDocument) -> Result<Vec<u64>> {
    let selected = interpolate::select_shares(document.shares(), document.threshold())
        .context("Failed to select shares")?;
    Ok(selected.iter().map(|share| *share.index()).collect())
}

/// Parse a share document and reconstruct its secret in one step
///
/// # Errors
/// Returns an error if parsing or reconstruction fails
pub fn recover_from_json(text: &str) -> Result<Rational> {
    let document = load_document(text)?;
    recover_secret(&document)
}
