//! Typed frontier errors.
//!
//! Removal from an empty frontier is the only failure the core defines.
//! Node construction, `add`, membership tests, path reconstruction and tree
//! tracing cannot fail on well-formed input.

use crate::frontier::FrontierKind;

/// Failure returned by [`crate::frontier::Frontier::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `remove()` was called while the frontier held no nodes.
    Empty { kind: FrontierKind },
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { kind } => {
                write!(f, "cannot remove from an empty {} frontier", kind.as_str())
            }
        }
    }
}

impl std::error::Error for FrontierError {}
