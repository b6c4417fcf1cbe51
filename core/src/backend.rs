use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::PlanError;

/// One planned invocation of the reduction tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerStartArgs {
    pub cmd: String,
    pub args: Vec<String>,
    pub envs: HashMap<String, String>,
}

impl fmt::Display for RunnerStartArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cmd)?;
        for a in &self.args {
            write!(f, " {a}")?;
        }
        Ok(())
    }
}

/// Turns a matched data file into a concrete command line.
pub trait BackendStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn plan(&self, path: &Path) -> Result<RunnerStartArgs, PlanError>;
}

/// The matched path as a command-line argument.
pub fn path_arg(path: &Path) -> Result<String, PlanError> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| PlanError::NonUtf8Path(path.to_string_lossy().into_owned()))
}
