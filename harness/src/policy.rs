//! Search policy: strategy choice and run budgets.
//!
//! The policy is the harness's configuration surface. It can be built in code
//! (`SearchPolicy { .. }` / `Default`) or loaded from a JSON document, and it is
//! committed to every report through its digest.

use lodestar_search::FrontierKind;

use crate::digest::{canonical_json_bytes, content_digest, CanonError, DOMAIN_SEARCH_POLICY};

/// Schema tag written into the policy projection.
pub const SEARCH_POLICY_SCHEMA: &str = "search_policy.v1";

const DEFAULT_MAX_EXPANSIONS: u64 = 10_000;
const DEFAULT_MAX_DEPTH: u32 = 1_000;

/// Keys accepted by [`SearchPolicy::from_json_bytes`].
const KNOWN_FIELDS: &[&str] = &["max_depth", "max_expansions", "schema_version", "strategy"];

/// Strategy and budget configuration for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Frontier ordering: `Stack` for depth-first, `Queue` for breadth-first.
    pub strategy: FrontierKind,
    /// Hard cap on frontier removals.
    pub max_expansions: u64,
    /// Nodes at this depth are goal-tested but never expanded.
    pub max_depth: u32,
}

/// Error building or validating a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The document is not valid JSON.
    Parse { detail: String },
    /// The document is valid JSON but not an object.
    NotAnObject,
    /// The document contains a key the policy does not define.
    UnknownField { field: String },
    /// A field has the wrong type or an unsupported value.
    InvalidField { field: &'static str, detail: String },
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { detail } => write!(f, "policy JSON parse error: {detail}"),
            Self::NotAnObject => write!(f, "policy document must be a JSON object"),
            Self::UnknownField { field } => write!(f, "unknown policy field: {field}"),
            Self::InvalidField { field, detail } => {
                write!(f, "invalid policy field {field}: {detail}")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            strategy: FrontierKind::Queue,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SearchPolicy {
    /// Depth-first policy with default budgets.
    #[must_use]
    pub fn depth_first() -> Self {
        Self {
            strategy: FrontierKind::Stack,
            ..Self::default()
        }
    }

    /// Breadth-first policy with default budgets.
    #[must_use]
    pub fn breadth_first() -> Self {
        Self {
            strategy: FrontierKind::Queue,
            ..Self::default()
        }
    }

    /// Check that the budgets allow at least one removal.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidField`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_expansions == 0 {
            return Err(PolicyError::InvalidField {
                field: "max_expansions",
                detail: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON projection used for reports and digests.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
            "schema_version": SEARCH_POLICY_SCHEMA,
            "strategy": self.strategy.as_str(),
        })
    }

    /// Digest of the canonical policy projection.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<String, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(content_digest(DOMAIN_SEARCH_POLICY, &bytes))
    }

    /// Load a policy from a JSON object.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    /// The result is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] on malformed JSON, unknown keys, wrongly typed
    /// or out-of-range values, or a policy that fails [`Self::validate`].
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, PolicyError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| PolicyError::Parse {
                detail: e.to_string(),
            })?;
        let obj = value.as_object().ok_or(PolicyError::NotAnObject)?;

        if let Some(unknown) = obj.keys().find(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
            return Err(PolicyError::UnknownField {
                field: unknown.clone(),
            });
        }

        if let Some(schema) = obj.get("schema_version") {
            if schema.as_str() != Some(SEARCH_POLICY_SCHEMA) {
                return Err(PolicyError::InvalidField {
                    field: "schema_version",
                    detail: format!("expected {SEARCH_POLICY_SCHEMA:?}, got {schema}"),
                });
            }
        }

        let mut policy = Self::default();

        if let Some(strategy) = obj.get("strategy") {
            let name = strategy.as_str().ok_or_else(|| PolicyError::InvalidField {
                field: "strategy",
                detail: format!("expected string, got {strategy}"),
            })?;
            policy.strategy =
                FrontierKind::parse(name).ok_or_else(|| PolicyError::InvalidField {
                    field: "strategy",
                    detail: format!("unknown strategy: {name}"),
                })?;
        }

        if let Some(max_expansions) = obj.get("max_expansions") {
            policy.max_expansions = field_u64(max_expansions, "max_expansions")?;
        }

        if let Some(max_depth) = obj.get("max_depth") {
            let raw = field_u64(max_depth, "max_depth")?;
            policy.max_depth = u32::try_from(raw).map_err(|_| PolicyError::InvalidField {
                field: "max_depth",
                detail: format!("{raw} exceeds u32::MAX"),
            })?;
        }

        policy.validate()?;
        Ok(policy)
    }
}

fn field_u64(value: &serde_json::Value, field: &'static str) -> Result<u64, PolicyError> {
    value.as_u64().ok_or_else(|| PolicyError::InvalidField {
        field,
        detail: format!("expected non-negative integer, got {value}"),
    })
}
