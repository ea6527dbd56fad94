//! Strategy behaviour of the generic search loop on fixed tables.

use lock_tests::{cyclic_problem, two_route_problem};
use lodestar_harness::contract::SearchProblem;
use lodestar_harness::diagram::{render_diagram, Rankdir};
use lodestar_harness::policy::SearchPolicy;
use lodestar_harness::problems::binary_tree::BinaryTreeProblem;
use lodestar_harness::report::SearchReport;
use lodestar_harness::runner::{run_search, SearchOutcome, Termination};
use lodestar_search::FrontierKind;

fn removal_order(outcome: &SearchOutcome<String>) -> Vec<&str> {
    outcome.explored.iter().map(|n| n.state().as_str()).collect()
}

#[test]
fn breadth_first_finds_shortest_route() {
    let outcome = run_search(&two_route_problem(), &SearchPolicy::breadth_first()).unwrap();
    assert!(outcome.is_goal_reached());
    assert_eq!(outcome.strategy, FrontierKind::Queue);
    assert_eq!(removal_order(&outcome), vec!["S", "A", "B", "G"]);
    assert_eq!(outcome.solution_actions(), vec!["north", "east"]);
}

#[test]
fn depth_first_takes_latest_branch() {
    let outcome = run_search(&two_route_problem(), &SearchPolicy::depth_first()).unwrap();
    assert!(outcome.is_goal_reached());
    assert_eq!(outcome.strategy, FrontierKind::Stack);
    assert_eq!(removal_order(&outcome), vec!["S", "B", "D", "G"]);
    assert_eq!(outcome.solution_actions(), vec!["east", "north", "east"]);
}

#[test]
fn goal_node_matches_termination_id() {
    let outcome = run_search(&two_route_problem(), &SearchPolicy::default()).unwrap();
    let goal = outcome.goal.as_ref().unwrap();
    assert_eq!(
        outcome.termination,
        Termination::GoalReached { node_id: goal.id() }
    );
    assert_eq!(goal.state(), "G");
}

#[test]
fn explored_set_breaks_cycles() {
    for policy in [SearchPolicy::breadth_first(), SearchPolicy::depth_first()] {
        let outcome = run_search(&cyclic_problem(), &policy).unwrap();
        assert!(outcome.is_goal_reached(), "{:?}", policy.strategy);
        assert_eq!(outcome.stats.expansions, 4);
        assert_eq!(outcome.stats.duplicates_suppressed, 2);
        assert_eq!(outcome.solution_actions(), vec!["a", "b", "goal"]);
    }
}

#[test]
fn explored_tree_covers_every_removed_node() {
    let outcome = run_search(&two_route_problem(), &SearchPolicy::breadth_first()).unwrap();
    let tree = outcome.explored_tree();
    for node in &outcome.explored {
        assert!(tree.contains_node(node.id()));
    }
    let diagram = render_diagram(&tree, Rankdir::TopToBottom);
    assert_eq!(diagram.action_count(), tree.node_count() - 1);
}

#[test]
fn binary_tree_bfs_reaches_target_at_expected_depth() {
    // Node 13 sits at depth 3: 0 -> 2 -> 6 -> 13.
    let problem = BinaryTreeProblem::new(31, 13);
    let outcome = run_search(&problem, &SearchPolicy::breadth_first()).unwrap();
    assert!(outcome.is_goal_reached());
    assert_eq!(outcome.solution_actions(), vec!["right", "right", "left"]);
    assert_eq!(outcome.stats.expansions, 14);
}

#[test]
fn binary_tree_dfs_budget_terminates() {
    let problem = BinaryTreeProblem::new(1 << 20, u32::MAX);
    let policy = SearchPolicy {
        max_expansions: 500,
        ..SearchPolicy::depth_first()
    };
    let outcome = run_search(&problem, &policy).unwrap();
    assert_eq!(outcome.termination, Termination::ExpansionBudgetExceeded);
    assert_eq!(outcome.stats.expansions, 500);
    assert!(outcome.path().is_empty());
}

#[test]
fn report_is_stable_in_process() {
    let problem = two_route_problem();
    let policy = SearchPolicy::depth_first();
    let digest = || {
        let outcome = run_search(&problem, &policy).unwrap();
        SearchReport::from_outcome(problem.problem_id(), &policy, &outcome)
            .unwrap()
            .digest()
            .unwrap()
    };
    let first = digest();
    for _ in 1..10 {
        assert_eq!(first, digest(), "report digest differs across runs");
    }
}

#[test]
fn strategies_produce_distinct_reports() {
    let problem = two_route_problem();
    let digest = |policy: SearchPolicy| {
        let outcome = run_search(&problem, &policy).unwrap();
        SearchReport::from_outcome(problem.problem_id(), &policy, &outcome)
            .unwrap()
            .digest()
            .unwrap()
    };
    assert_ne!(
        digest(SearchPolicy::breadth_first()),
        digest(SearchPolicy::depth_first())
    );
}
