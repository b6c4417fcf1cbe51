use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;

use toltec_repeat_core::api as core_api;

/// Spawns the tool with inherited stdio and waits for it to exit.
///
/// No timeout and no cancellation: the child runs to completion.
#[derive(Debug, Default)]
pub struct ProcessRunnerPlugin;

impl ProcessRunnerPlugin {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl core_api::RunnerPlugin for ProcessRunnerPlugin {
    fn name(&self) -> &str {
        "process"
    }

    async fn run(
        &self,
        args: core_api::RunnerStartArgs,
    ) -> Result<core_api::RunOutcome, core_api::RunnerError> {
        let started = Instant::now();
        let mut child = Command::new(&args.cmd)
            .args(&args.args)
            .envs(&args.envs)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| core_api::RunnerError::Spawn {
                program: args.cmd.clone(),
                source,
            })?;

        tracing::debug!(
            target: "toltec_repeat.runner",
            pid = ?child.id(),
            program = %args.cmd,
            "child spawned"
        );

        let status = child
            .wait()
            .await
            .map_err(|source| core_api::RunnerError::Wait {
                program: args.cmd.clone(),
                source,
            })?;

        Ok(core_api::RunOutcome {
            exit_code: core_api::normalize_exit(status),
            duration: started.elapsed(),
        })
    }
}
