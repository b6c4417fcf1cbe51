use std::io::Write;

use toltec_repeat_core::api as core_api;
use toltec_repeat_plugins::factory;

use crate::commands::cli::Args;

/// Prints the pattern and matches to `out`, then dispatches one tool run per
/// match.
pub async fn run_app<W: Write>(
    args: &Args,
    ctx: &core_api::AppContext,
    out: &mut W,
) -> Result<core_api::DispatchReport, core_api::CliError> {
    let strategy = factory::build_strategy(ctx.cfg()).map_err(core_api::CliError::Plugin)?;
    let runner = factory::build_runner();

    let pattern = core_api::MatchPattern::new(args.suffix.as_deref());
    emit(out, &format!("pattern: {pattern}"));

    let root = ctx.root();
    tracing::info!(root = %root.display(), pattern = %pattern, "selecting files");
    let matches = core_api::select_matches(root, pattern, ctx.select_opts()).await;
    for m in &matches {
        emit(out, &m.display().to_string());
    }

    let opts = core_api::DispatchOpts {
        dry_run: args.dry_run,
    };
    let report =
        core_api::dispatch(&matches, strategy.as_ref(), runner.as_ref(), opts, out).await;
    Ok(report)
}

// Diagnostics are best effort; a closed stdout must not abort the run.
fn emit<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
        tracing::debug!(error = %e, "failed to write diagnostics");
    }
}
