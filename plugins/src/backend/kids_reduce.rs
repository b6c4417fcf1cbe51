use std::collections::HashMap;
use std::path::Path;

use toltec_repeat_core::api as core_api;

/// `<bin> <path> -r --output <output>`, the invocation `reduce.sh` expects.
pub struct KidsReduceStrategy {
    bin: String,
    output: String,
}

impl KidsReduceStrategy {
    pub fn new(bin: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            output: output.into(),
        }
    }
}

impl core_api::BackendStrategy for KidsReduceStrategy {
    fn name(&self) -> &str {
        "kids_reduce"
    }

    fn plan(&self, path: &Path) -> Result<core_api::RunnerStartArgs, core_api::PlanError> {
        let args = vec![
            core_api::path_arg(path)?,
            "-r".to_string(),
            "--output".to_string(),
            self.output.clone(),
        ];
        Ok(core_api::RunnerStartArgs {
            cmd: self.bin.clone(),
            args,
            envs: HashMap::new(),
        })
    }
}
