//! `SearchReport`: canonical JSON record of one search run.
//!
//! Node ids are process-local and never serialized; the solution path is
//! recorded by depth, action and rendered state, so identical runs produce
//! identical bytes in any process.

use std::fmt;

use crate::digest::{canonical_json_bytes, content_digest, CanonError, DOMAIN_SEARCH_REPORT};
use crate::policy::SearchPolicy;
use crate::runner::{SearchOutcome, SearchStats, Termination};

/// Schema tag written into every report.
pub const SEARCH_REPORT_SCHEMA: &str = "search_report.v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    value: serde_json::Value,
}

impl SearchReport {
    /// Build the report for a finished run.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the policy digest cannot be computed.
    pub fn from_outcome<S: fmt::Display>(
        problem_id: &str,
        policy: &SearchPolicy,
        outcome: &SearchOutcome<S>,
    ) -> Result<Self, CanonError> {
        let solution: Vec<serde_json::Value> = outcome
            .path()
            .iter()
            .map(|node| {
                serde_json::json!({
                    "action": node.action(),
                    "depth": node.depth(),
                    "state": node.state().to_string(),
                })
            })
            .collect();

        let termination = termination_to_json(&outcome.termination, outcome);

        let value = serde_json::json!({
            "policy": policy.to_json_value(),
            "policy_digest": policy.digest()?,
            "problem_id": problem_id,
            "schema_version": SEARCH_REPORT_SCHEMA,
            "solution": solution,
            "stats": stats_to_json(&outcome.stats),
            "termination_reason": termination,
        });

        Ok(Self { value })
    }

    #[must_use]
    pub fn as_json(&self) -> &serde_json::Value {
        &self.value
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.value)
    }

    /// Digest of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<String, CanonError> {
        Ok(content_digest(
            DOMAIN_SEARCH_REPORT,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

fn termination_to_json<S>(t: &Termination, outcome: &SearchOutcome<S>) -> serde_json::Value {
    match t {
        Termination::GoalReached { .. } => serde_json::json!({
            "goal_depth": outcome.goal.as_ref().map(|g| g.depth()),
            "type": t.as_str(),
        }),
        Termination::FrontierExhausted | Termination::ExpansionBudgetExceeded => {
            serde_json::json!({"type": t.as_str()})
        }
    }
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "depth_limited": s.depth_limited,
        "duplicates_suppressed": s.duplicates_suppressed,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "generated": s.generated,
    })
}
