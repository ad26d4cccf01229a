//! JSON share document decoding
//!
//! A share document is a JSON object with a `keys` entry holding the
//! threshold `k` (and optionally the declared share total `n`), plus one
//! entry per share keyed by its decimal index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Keys that are not purely decimal are ignored. Numeric fields may be
//! written either as JSON integers or as decimal strings.
//!
//! Keys with leading zeros (`"01"`) alias the same index as their canonical
//! form (`"1"`). Shares are listed canonical key first, then aliases in
//! document order.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{Share, ShareIndex};

/// Name of the entry holding the threshold parameters
pub const KEYS_ENTRY: &str = "keys";

/// Errors raised while turning document text into typed shares
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Share document must be a JSON object")]
    NotAnObject,
    #[error("Share document must contain keys.k")]
    MissingThreshold,
    #[error("Entry {entry} missing {field}")]
    MissingField { entry: String, field: &'static str },
    #[error("Entry {entry} has invalid {field}: {reason}")]
    InvalidField {
        entry: String,
        field: &'static str,
        reason: String,
    },
}

/// A numeric field written either as a JSON integer or as a string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Integer(u64),
    Text(String),
}

impl Scalar {
    fn to_u64(&self) -> Option<u64> {
        match self {
            Scalar::Integer(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse().ok(),
        }
    }

    fn into_text(self) -> String {
        match self {
            Scalar::Integer(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

/// Typed contents of a share document
#[derive(Debug, Clone)]
pub struct ShareDocument {
    threshold: usize,
    declared_total: Option<u64>,
    shares: Vec<Share>,
}

impl ShareDocument {
    /// Parses a share document from JSON text
    ///
    /// Share bases are not range-checked here; an unsupported base is
    /// reported when (and only if) that share is decoded.
    ///
    /// # Errors
    /// Returns a [`DocumentError`] if the text is not a JSON object, the
    /// threshold is missing or not a non-negative integer, or a share entry
    /// lacks or misstates its `base` or `value`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lagrange_recover::document::ShareDocument;
    ///
    /// let text = r#"{"keys": {"k": "2"}, "1": {"base": 16, "value": "a"}, "note": "x"}"#;
    /// let document = ShareDocument::from_json(text).unwrap();
    ///
    /// assert_eq!(document.threshold(), 2);
    /// assert_eq!(document.shares().len(), 1);
    /// assert_eq!(document.shares()[0].base(), 16);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let root: Value = serde_json::from_str(text)?;
        let Value::Object(entries) = root else {
            return Err(DocumentError::NotAnObject);
        };

        let keys = entries
            .get(KEYS_ENTRY)
            .and_then(Value::as_object)
            .ok_or(DocumentError::MissingThreshold)?;
        let threshold_field = keys.get("k").ok_or(DocumentError::MissingThreshold)?;
        let threshold = numeric_field(KEYS_ENTRY, "k", threshold_field)?;
        let threshold = usize::try_from(threshold).map_err(|e| invalid(KEYS_ENTRY, "k", e))?;

        // Informational only
        let declared_total = keys
            .get("n")
            .and_then(|n| numeric_field(KEYS_ENTRY, "n", n).ok());

        let mut keyed = Vec::new();
        for (key, item) in &entries {
            if key == KEYS_ENTRY || key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            let alias = key.len() > 1 && key.starts_with('0');
            keyed.push((alias, parse_share(key, item)?));
        }
        keyed.sort_by_key(|(alias, share)| (share.index(), *alias));
        let shares = keyed.into_iter().map(|(_, share)| share).collect();

        Ok(Self {
            threshold,
            declared_total,
            shares,
        })
    }

    /// Number of shares the secret requires (`keys.k`)
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Total share count the document claims to hold (`keys.n`)
    ///
    /// `None` when `n` is absent or not a non-negative integer.
    #[must_use]
    pub fn declared_total(&self) -> Option<u64> {
        self.declared_total
    }

    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }
}

fn parse_share(key: &str, item: &Value) -> Result<Share, DocumentError> {
    let index = key.parse::<u64>().map_err(|e| invalid(key, "index", e))?;
    let index = ShareIndex::new(index).map_err(|e| invalid(key, "index", e))?;

    let fields = item.as_object();
    let base = required(key, fields, "base")?;
    let value = required(key, fields, "value")?;

    let base = numeric_field(key, "base", base)?;
    let base = u32::try_from(base).map_err(|e| invalid(key, "base", e))?;

    let value = Scalar::deserialize(value)
        .map_err(|_| invalid(key, "value", "expected a digit string"))?
        .into_text();

    Ok(Share::new(index, base, value))
}

fn required<'a>(
    entry: &str,
    fields: Option<&'a Map<String, Value>>,
    field: &'static str,
) -> Result<&'a Value, DocumentError> {
    fields
        .and_then(|f| f.get(field))
        .ok_or_else(|| DocumentError::MissingField {
            entry: entry.to_string(),
            field,
        })
}

fn numeric_field(entry: &str, field: &'static str, value: &Value) -> Result<u64, DocumentError> {
    Scalar::deserialize(value)
        .ok()
        .and_then(|scalar| scalar.to_u64())
        .ok_or_else(|| invalid(entry, field, "expected a non-negative integer"))
}

fn invalid(entry: &str, field: &'static str, reason: impl ToString) -> DocumentError {
    DocumentError::InvalidField {
        entry: entry.to_string(),
        field,
        reason: reason.to_string(),
    }
}
