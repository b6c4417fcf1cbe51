use std::io::Write;
use std::path::PathBuf;

use crate::backend::BackendStrategy;
use crate::filename::DataFileInfo;
use crate::runner::{RunOutcome, RunnerPlugin};

#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOpts {
    /// Plan and print each command without running it.
    pub dry_run: bool,
}

/// Tally of one dispatch pass. Never turned into an exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub matches: usize,
    pub planned: usize,
    pub invoked: usize,
    pub succeeded: usize,
    /// Tool exited non-zero or was killed.
    pub failed: usize,
    /// Could not be planned or spawned.
    pub errored: usize,
}

/// Invokes the tool once per match, each run finishing before the next starts.
///
/// Per-match failures are logged and counted, never propagated. `out`
/// receives the dry-run listing.
pub async fn dispatch<W: Write>(
    matches: &[PathBuf],
    strategy: &dyn BackendStrategy,
    runner: &dyn RunnerPlugin,
    opts: DispatchOpts,
    out: &mut W,
) -> DispatchReport {
    let mut report = DispatchReport {
        matches: matches.len(),
        ..Default::default()
    };

    for (idx, path) in matches.iter().enumerate() {
        let info = DataFileInfo::from_path(path);
        let obs = info.as_ref().map(DataFileInfo::obs_label).unwrap_or_default();
        let interface = info.as_ref().map(|i| i.interface.as_str()).unwrap_or_default();
        let kind = info.as_ref().map(|i| i.kind.as_str()).unwrap_or_default();
        let master = info.as_ref().and_then(|i| i.master.as_deref()).unwrap_or_default();

        let plan = match strategy.plan(path) {
            Ok(p) => p,
            Err(e) => {
                report.errored += 1;
                tracing::error!(
                    target: "toltec_repeat.dispatch",
                    path = %path.display(),
                    strategy = strategy.name(),
                    error = %e,
                    "failed to plan command, skipping"
                );
                continue;
            }
        };
        report.planned += 1;

        if opts.dry_run {
            if let Err(e) = writeln!(out, "would run: {plan}") {
                tracing::warn!(target: "toltec_repeat.dispatch", error = %e, "failed to write dry-run line");
            }
            continue;
        }

        tracing::info!(
            target: "toltec_repeat.dispatch",
            index = idx + 1,
            total = matches.len(),
            path = %path.display(),
            obs = %obs,
            interface,
            kind,
            master,
            ut = ?info.as_ref().map(|i| i.ut),
            "reduce with cmd: {}",
            plan
        );

        report.invoked += 1;
        match runner.run(plan).await {
            Ok(outcome) if outcome.success() => {
                report.succeeded += 1;
                tracing::info!(
                    target: "toltec_repeat.dispatch",
                    path = %path.display(),
                    elapsed_ms = elapsed_ms(&outcome),
                    "reduction finished"
                );
            }
            Ok(outcome) => {
                report.failed += 1;
                tracing::warn!(
                    target: "toltec_repeat.dispatch",
                    path = %path.display(),
                    exit_code = outcome.exit_code,
                    elapsed_ms = elapsed_ms(&outcome),
                    "reduction tool exited with failure, continuing"
                );
            }
            Err(e) => {
                report.errored += 1;
                tracing::error!(
                    target: "toltec_repeat.dispatch",
                    path = %path.display(),
                    runner = runner.name(),
                    error = %e,
                    "reduction tool could not be run, continuing"
                );
            }
        }
    }

    tracing::info!(
        target: "toltec_repeat.dispatch",
        matches = report.matches,
        invoked = report.invoked,
        succeeded = report.succeeded,
        failed = report.failed,
        errored = report.errored,
        dry_run = opts.dry_run,
        "dispatch finished"
    );
    report
}

fn elapsed_ms(outcome: &RunOutcome) -> u64 {
    u64::try_from(outcome.duration.as_millis()).unwrap_or(u64::MAX)
}
