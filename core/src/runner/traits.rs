use std::time::Duration;

use async_trait::async_trait;

use crate::backend::RunnerStartArgs;
use crate::error::RunnerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub duration: Duration,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs one planned invocation to completion.
#[async_trait]
pub trait RunnerPlugin: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, args: RunnerStartArgs) -> Result<RunOutcome, RunnerError>;
}
