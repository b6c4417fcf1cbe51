use std::collections::HashMap;
use std::path::Path;

use toltec_repeat_core::api as core_api;
use toltec_repeat_core::config::PATH_PLACEHOLDER;

/// Arbitrary program driven by an argument template.
pub struct CommandStrategy {
    bin: String,
    template: Vec<String>,
}

impl CommandStrategy {
    /// At least one template argument must contain `{path}`.
    pub fn new(bin: impl Into<String>, template: Vec<String>) -> Result<Self, core_api::PlanError> {
        if !template.iter().any(|a| a.contains(PATH_PLACEHOLDER)) {
            return Err(core_api::PlanError::MissingPlaceholder);
        }
        Ok(Self {
            bin: bin.into(),
            template,
        })
    }
}

impl core_api::BackendStrategy for CommandStrategy {
    fn name(&self) -> &str {
        "command"
    }

    fn plan(&self, path: &Path) -> Result<core_api::RunnerStartArgs, core_api::PlanError> {
        let path = core_api::path_arg(path)?;
        let args = self
            .template
            .iter()
            .map(|a| a.replace(PATH_PLACEHOLDER, &path))
            .collect();
        Ok(core_api::RunnerStartArgs {
            cmd: self.bin.clone(),
            args,
            envs: HashMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toltec_repeat_core::api::BackendStrategy;
    use pretty_assertions::assert_eq;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn substitutes_every_placeholder() {
        let s = CommandStrategy::new("citlali", strings(&["--input={path}", "--log", "{path}.log"])).unwrap();
        let plan = s.plan(Path::new("/d/toltec1_5.nc")).unwrap();
        assert_eq!(plan.cmd, "citlali");
        assert_eq!(plan.args, strings(&["--input=/d/toltec1_5.nc", "--log", "/d/toltec1_5.nc.log"]));
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = CommandStrategy::new("true", strings(&["-r"])).err();
        assert!(matches!(err, Some(toltec_repeat_core::api::PlanError::MissingPlaceholder)));
    }
}
