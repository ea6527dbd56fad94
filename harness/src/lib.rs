//! Lodestar Harness: client-side orchestration around the search core.
//!
//! The harness owns the generic search loop, its policy, and everything a
//! run produces afterwards: the canonical report, the DOT diagram of the
//! explored tree, and the artifact directory. Problems provide states and
//! successors only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod artifacts;
pub mod contract;
pub mod diagram;
pub mod digest;
pub mod policy;
pub mod problems;
pub mod report;
pub mod runner;
