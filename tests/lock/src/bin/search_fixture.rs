//! Binary that runs the two-route fixture under both strategies and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines on stdout (see source for format). Logs go to
//! stderr and are filtered by `RUST_LOG` (default `warn`).

use lock_tests::two_route_problem;
use lodestar_harness::contract::SearchProblem;
use lodestar_harness::diagram::{render_diagram, Rankdir};
use lodestar_harness::policy::SearchPolicy;
use lodestar_harness::report::SearchReport;
use lodestar_harness::runner::run_search;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let problem = two_route_problem();

    for policy in [SearchPolicy::breadth_first(), SearchPolicy::depth_first()] {
        let strategy = policy.strategy.as_str();
        let outcome = run_search(&problem, &policy).expect("search run failed");
        let report = SearchReport::from_outcome(problem.problem_id(), &policy, &outcome)
            .expect("report build failed");
        let diagram = render_diagram(&outcome.explored_tree(), Rankdir::LeftToRight);

        println!(
            "{strategy}.report_digest={}",
            report.digest().expect("report digest failed")
        );
        println!("{strategy}.diagram_digest={}", diagram.digest());
        println!("{strategy}.termination={}", outcome.termination.as_str());
        println!("{strategy}.expansions={}", outcome.stats.expansions);
        println!(
            "{strategy}.solution={}",
            outcome.solution_actions().join(",")
        );
    }
}
