//! Selection feeding the dispatch loop over a fixture tree.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use toltec_repeat_core::api::{
    dispatch, path_arg, select_matches, BackendStrategy, DispatchOpts, MatchPattern, PlanError,
    RunOutcome, RunnerError, RunnerPlugin, RunnerStartArgs, SelectOpts,
};

struct ReduceSh;

impl BackendStrategy for ReduceSh {
    fn name(&self) -> &str {
        "reduce.sh"
    }

    fn plan(&self, path: &Path) -> Result<RunnerStartArgs, PlanError> {
        Ok(RunnerStartArgs {
            cmd: "/home/u/kids_bin/reduce.sh".to_string(),
            args: vec![
                path_arg(path)?,
                "-r".to_string(),
                "--output".to_string(),
                "dummy_output".to_string(),
            ],
            envs: HashMap::new(),
        })
    }
}

#[derive(Default)]
struct Recording {
    calls: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl RunnerPlugin for Recording {
    fn name(&self) -> &str {
        "recording"
    }

    async fn run(&self, args: RunnerStartArgs) -> Result<RunOutcome, RunnerError> {
        self.calls.lock().unwrap().push(args.args);
        Ok(RunOutcome {
            exit_code: 0,
            duration: Duration::ZERO,
        })
    }
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in ["toltec_001.nc", "toltec_002.nc", "other.txt"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

#[tokio::test]
async fn selects_both_nc_files_and_dispatches_each() {
    let dir = fixture();
    let matches = select_matches(dir.path().to_path_buf(), MatchPattern::new(None), SelectOpts::default()).await;

    let runner = Recording::default();
    let report = dispatch(&matches, &ReduceSh, &runner, DispatchOpts::default(), &mut std::io::sink()).await;
    assert_eq!(report.invoked, 2);
    assert_eq!(report.succeeded, 2);

    let mut calls = runner.calls.into_inner().unwrap();
    calls.sort();
    let expected: Vec<Vec<String>> = ["toltec_001.nc", "toltec_002.nc"]
        .iter()
        .map(|n| {
            vec![
                dir.path().join(n).display().to_string(),
                "-r".to_string(),
                "--output".to_string(),
                "dummy_output".to_string(),
            ]
        })
        .collect();
    assert_eq!(calls, expected);
}

#[tokio::test]
async fn no_matches_means_no_invocations() {
    let dir = fixture();
    let matches: Vec<PathBuf> = select_matches(
        dir.path().to_path_buf(),
        MatchPattern::new(Some("_999")),
        SelectOpts::default(),
    )
    .await;
    assert!(matches.is_empty());

    let runner = Recording::default();
    let report = dispatch(&matches, &ReduceSh, &runner, DispatchOpts::default(), &mut std::io::sink()).await;
    assert_eq!(report.invoked, 0);
    assert!(runner.calls.into_inner().unwrap().is_empty());
}
