//! Cross-process determinism: the `search_fixture` binary must print
//! identical output under different working directories and locale settings.

use std::path::Path;
use std::process::Output;

use lock_tests::{run_scrubbed, sibling_binary, workspace_root};

fn run_fixture(work_dir: &Path, overrides: &[(&str, &str)]) -> Output {
    let bin = sibling_binary("search_fixture").expect("can locate search_fixture");
    let output = run_scrubbed(&bin, work_dir, overrides).unwrap_or_else(|e| {
        panic!(
            "failed to spawn {} (work_dir={}, overrides={overrides:?}): {e}",
            bin.display(),
            work_dir.display()
        )
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn fixture_stdout(work_dir: &Path, overrides: &[(&str, &str)]) -> String {
    String::from_utf8(run_fixture(work_dir, overrides).stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = fixture_stdout(&root, &[]);

    assert!(baseline.contains("queue.report_digest=sha256:"));
    assert!(baseline.contains("stack.report_digest=sha256:"));
    assert!(baseline.contains("queue.termination=goal_reached"));
    assert!(baseline.contains("queue.solution=north,east"));
    assert!(baseline.contains("stack.solution=east,north,east"));

    let tmp = std::env::temp_dir();
    let variants: [(&Path, &[(&str, &str)]); 3] = [
        (&tmp, &[]),
        (&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        (&root, &[("RUST_LOG", "debug"), ("LANG", "en_US.UTF-8")]),
    ];

    for (dir, env) in variants {
        let output = fixture_stdout(dir, env);
        assert_eq!(
            baseline,
            output,
            "fixture output differs (dir={}, env={env:?})",
            dir.display()
        );
    }
}

#[test]
fn rust_log_controls_fixture_logging() {
    let root = workspace_root();

    let quiet = run_fixture(&root, &[]);
    assert!(
        quiet.stderr.is_empty(),
        "default filter should hide info logs: {}",
        String::from_utf8_lossy(&quiet.stderr)
    );

    let verbose = run_fixture(&root, &[("RUST_LOG", "debug")]);
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("removed node"), "stderr={stderr}");
    assert!(stderr.contains("goal reached"), "stderr={stderr}");
    assert!(verbose.stdout.starts_with(b"queue."));
}
