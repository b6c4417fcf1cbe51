use clap::Parser;
mod app;
mod commands;
mod logging;
use commands::cli;
use toltec_repeat_core::api as core_api;
use toltec_repeat_core::config;

#[tokio::main]
async fn main() -> Result<(), core_api::CliError> {
    let args = cli::Args::parse();

    let mut cfg = config::load(args.config.as_deref())?;
    args.apply_overrides(&mut cfg);

    let _log_guard = logging::init(&cfg.logging)?;

    let ctx = core_api::AppContext::new(cfg);
    app::run_app(&args, &ctx, &mut std::io::stdout()).await?;

    // Tool failures never change the exit status.
    Ok(())
}
