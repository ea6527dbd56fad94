//! Generic fixture problems for tests, fixtures and benchmarks.
//!
//! Neither carries domain semantics: one is an explicit transition table,
//! the other an implicit complete binary tree over integers.

pub mod binary_tree;
pub mod transition_table;
