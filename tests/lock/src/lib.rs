//! Shared fixtures for the lock tests and the `search_fixture` binary.

#![forbid(unsafe_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use lodestar_harness::problems::transition_table::TransitionTable;
use lodestar_search::{Node, NodeRef};

/// The canonical four-node chain `R -> A -> B -> C`.
pub struct Chain {
    pub r: NodeRef<&'static str>,
    pub a: NodeRef<&'static str>,
    pub b: NodeRef<&'static str>,
    pub c: NodeRef<&'static str>,
}

#[must_use]
pub fn chain() -> Chain {
    let r = Node::root("R");
    let a = Node::child(&r, "move-right", "A");
    let b = Node::child(&a, "move-down", "B");
    let c = Node::child(&b, "move-left", "C");
    Chain { r, a, b, c }
}

/// Two routes to the goal of different lengths.
///
/// ```text
/// S -north-> A -east-> G
/// S -east--> B -north-> D -east-> G
/// ```
///
/// Breadth-first finds the two-step route; depth-first takes the
/// most recently added branch and returns the three-step route.
#[must_use]
pub fn two_route_problem() -> TransitionTable {
    TransitionTable::new("two_route", "S")
        .with_transition("S", "north", "A")
        .with_transition("S", "east", "B")
        .with_transition("A", "east", "G")
        .with_transition("B", "north", "D")
        .with_transition("D", "east", "G")
        .with_goal("G")
}

/// A table containing a cycle `S <-> A`, with a goal reachable only via `B`.
#[must_use]
pub fn cyclic_problem() -> TransitionTable {
    TransitionTable::new("cyclic", "S")
        .with_transition("S", "a", "A")
        .with_transition("A", "back", "S")
        .with_transition("A", "b", "B")
        .with_transition("B", "back", "A")
        .with_transition("B", "goal", "G")
        .with_goal("G")
}

/// Environment variables cleared before spawning a fixture, so each run
/// starts from the same locale and log filter.
pub const SCRUBBED_ENV: &[&str] = &["LC_ALL", "LC_COLLATE", "LANG", "LANGUAGE", "RUST_LOG"];

/// Path of a binary built next to the running test executable.
///
/// # Errors
///
/// Returns an error if the current executable cannot be resolved or does
/// not sit in a `target/<profile>/deps` directory.
pub fn sibling_binary(name: &str) -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let profile_dir = exe
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| io::Error::other(format!("no profile dir above {}", exe.display())))?;
    Ok(profile_dir.join(name))
}

/// The workspace root, two levels above this crate's manifest.
#[must_use]
pub fn workspace_root() -> PathBuf {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .unwrap_or(manifest)
        .to_path_buf()
}

/// Run `bin` in `work_dir` with a scrubbed environment plus `overrides`.
///
/// # Errors
///
/// Returns the spawn error if the process could not be started.
pub fn run_scrubbed(bin: &Path, work_dir: &Path, overrides: &[(&str, &str)]) -> io::Result<Output> {
    let mut command = Command::new(bin);
    command.current_dir(work_dir);
    for key in SCRUBBED_ENV {
        command.env_remove(key);
    }
    command.envs(overrides.iter().copied());
    command.output()
}
