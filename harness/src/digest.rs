//! Canonical JSON bytes and domain-separated content digests.
//!
//! Every digest in the harness is
//! `"sha256:" + hex(sha256(domain_prefix || canonical_bytes))`.
//!
//! Canonical JSON here means compact output with object keys in byte order.
//! `serde_json::Map` is `BTreeMap`-backed unless the `preserve_order` feature
//! is enabled, which this workspace never does. Non-integer numbers are
//! rejected so float formatting can never leak into a digest.

use sha2::{Digest, Sha256};

/// Domain prefix for search report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"LODESTAR::SEARCH_REPORT::V1\0";

/// Domain prefix for search policy digests.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"LODESTAR::SEARCH_POLICY::V1\0";

/// Domain prefix for rendered diagram digests.
pub const DOMAIN_DIAGRAM: &[u8] = b"LODESTAR::DIAGRAM::V1\0";

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to write the value.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "JSON serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64` or
/// `u64`, or [`CanonError::Serialize`] if `serde_json` fails.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    reject_non_integers(value)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn reject_non_integers(value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        serde_json::Value::Array(items) => items.iter().try_for_each(reject_non_integers),
        serde_json::Value::Object(map) => map.values().try_for_each(reject_non_integers),
        _ => Ok(()),
    }
}

/// Compute `"sha256:<hex>"` over `domain || data`.
#[must_use]
pub fn content_digest(domain: &[u8], data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
