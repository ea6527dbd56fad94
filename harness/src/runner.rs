//! Generic search loop over any [`SearchProblem`].
//!
//! One loop serves depth-first and breadth-first search: the policy picks the
//! frontier ordering and everything else is shared.
//!
//! Each iteration removes one node, goal-tests it, marks its state explored,
//! and (unless the depth budget is reached) adds every successor whose state
//! is neither explored nor already waiting in the frontier.

use std::collections::HashSet;
use std::rc::Rc;

use lodestar_search::{
    path_actions, reconstruct_path, trace, trace_all, ExploredTree, FrontierError, FrontierKind,
    Node, NodeId, NodeRef,
};
use tracing::{debug, info, info_span, warn};

use crate::contract::{SearchProblem, Successor};
use crate::policy::{PolicyError, SearchPolicy};

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A removed node satisfied the goal test.
    GoalReached { node_id: NodeId },
    /// The frontier emptied before a goal was found.
    FrontierExhausted,
    /// `max_expansions` removals happened without finding a goal.
    ExpansionBudgetExceeded,
}

impl Termination {
    /// Stable snake-case tag used in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Counters gathered during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier.
    pub expansions: u64,
    /// Nodes created, root included.
    pub generated: u64,
    /// Successors dropped because their state was explored or queued.
    pub duplicates_suppressed: u64,
    /// Removed nodes left unexpanded because they sat at `max_depth`.
    pub depth_limited: u64,
    /// Largest frontier length observed.
    pub frontier_high_water: u64,
}

/// Result of a search run.
///
/// Always carries the explored nodes, whatever the termination reason, so a
/// failed run can still be traced and rendered.
#[derive(Debug)]
pub struct SearchOutcome<S> {
    pub strategy: FrontierKind,
    pub termination: Termination,
    /// The goal node, when one was reached.
    pub goal: Option<NodeRef<S>>,
    /// Every node removed from the frontier, in removal order.
    pub explored: Vec<NodeRef<S>>,
    pub stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, Termination::GoalReached { .. })
    }

    /// Root-to-goal path. Empty when no goal was reached.
    #[must_use]
    pub fn path(&self) -> Vec<NodeRef<S>> {
        self.goal.as_ref().map(reconstruct_path).unwrap_or_default()
    }

    /// Actions along the solution path. Empty when no goal was reached.
    #[must_use]
    pub fn solution_actions(&self) -> Vec<String> {
        self.goal.as_ref().map(path_actions).unwrap_or_default()
    }

    /// The goal's ancestor chain as a tree.
    #[must_use]
    pub fn goal_tree(&self) -> Option<ExploredTree<S>> {
        self.goal.as_ref().map(trace)
    }

    /// Union of the ancestor chains of every removed node.
    #[must_use]
    pub fn explored_tree(&self) -> ExploredTree<S> {
        trace_all(&self.explored)
    }
}

/// Error running a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Policy validation failed before any node was created.
    InvalidPolicy(PolicyError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy(e) => write!(f, "invalid search policy: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPolicy(e) => Some(e),
        }
    }
}

/// Run an uninformed search over `problem` under `policy`.
///
/// Goal, exhaustion and budget terminations all return `Ok`; inspect
/// [`SearchOutcome::termination`] for the reason.
///
/// # Errors
///
/// Returns [`RunError::InvalidPolicy`] if the policy fails validation.
pub fn run_search<P: SearchProblem>(
    problem: &P,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::State>, RunError> {
    policy.validate().map_err(RunError::InvalidPolicy)?;

    let span = info_span!(
        "search",
        problem = problem.problem_id(),
        strategy = policy.strategy.as_str()
    );
    let _entered = span.enter();

    let mut frontier = policy.strategy.new_frontier::<P::State>();
    let mut explored_states: HashSet<P::State> = HashSet::new();
    let mut explored: Vec<NodeRef<P::State>> = Vec::new();
    let mut stats = SearchStats::default();

    frontier.add(Node::root(problem.initial_state()));
    stats.generated += 1;

    let (termination, goal) = loop {
        if frontier.is_empty() {
            break (Termination::FrontierExhausted, None);
        }
        if stats.expansions >= policy.max_expansions {
            break (Termination::ExpansionBudgetExceeded, None);
        }

        let node = match frontier.remove() {
            Ok(node) => node,
            Err(FrontierError::Empty { .. }) => break (Termination::FrontierExhausted, None),
        };
        stats.expansions += 1;
        explored.push(Rc::clone(&node));
        debug!(
            node = node.id().get(),
            depth = node.depth(),
            frontier_len = frontier.len(),
            "removed node"
        );

        if problem.is_goal(node.state()) {
            break (
                Termination::GoalReached { node_id: node.id() },
                Some(node),
            );
        }
        explored_states.insert(node.state().clone());

        if node.depth() >= policy.max_depth {
            stats.depth_limited += 1;
            continue;
        }

        for Successor { action, state } in problem.successors(node.state()) {
            if explored_states.contains(&state) || frontier.has_state(&state) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            frontier.add(Node::child(&node, action, state));
            stats.generated += 1;
        }
    };

    stats.frontier_high_water = u64::try_from(frontier.high_water()).unwrap_or(u64::MAX);

    match (&termination, &goal) {
        (Termination::GoalReached { .. }, Some(goal)) => info!(
            expansions = stats.expansions,
            generated = stats.generated,
            depth = goal.depth(),
            "goal reached"
        ),
        (Termination::ExpansionBudgetExceeded, _) => warn!(
            expansions = stats.expansions,
            frontier_len = frontier.len(),
            "expansion budget exceeded"
        ),
        _ => info!(
            expansions = stats.expansions,
            termination = termination.as_str(),
            "search finished without a goal"
        ),
    }

    Ok(SearchOutcome {
        strategy: policy.strategy,
        termination,
        goal,
        explored,
        stats,
    })
}
