use anyhow::Result;

use toltec_repeat_core::api as core_api;
use toltec_repeat_core::config::DEFAULT_TOOL_NAME;

use crate::backend::{CommandStrategy, KidsReduceStrategy};
use crate::resolve::resolve_tool;
use crate::runner::ProcessRunnerPlugin;

pub fn build_strategy(cfg: &core_api::AppConfig) -> Result<Box<dyn core_api::BackendStrategy>> {
    build_strategy_with_env(cfg, |key| std::env::var(key).ok())
}

pub fn build_strategy_with_env<F>(
    cfg: &core_api::AppConfig,
    lookup: F,
) -> Result<Box<dyn core_api::BackendStrategy>>
where
    F: Fn(&str) -> Option<String>,
{
    let tool = resolve_tool(&cfg.tool.bin, DEFAULT_TOOL_NAME, lookup)?;
    tracing::info!(
        target: "toltec_repeat.factory",
        provider = ?cfg.tool.provider,
        tool = %tool,
        "reduction tool configured"
    );

    match cfg.tool.provider {
        core_api::ToolProvider::KidsReduce => Ok(Box::new(KidsReduceStrategy::new(
            tool,
            cfg.tool.output.clone(),
        ))),
        core_api::ToolProvider::Command => {
            Ok(Box::new(CommandStrategy::new(tool, cfg.tool.args.clone())?))
        }
    }
}

pub fn build_runner() -> Box<dyn core_api::RunnerPlugin> {
    Box::new(ProcessRunnerPlugin::new())
}
