use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::AppConfig;

pub const ENV_ROOT: &str = "TOLTEC_REPEAT_ROOT";
pub const ENV_TOOL: &str = "TOLTEC_REPEAT_TOOL";
pub const ENV_LOG: &str = "TOLTEC_REPEAT_LOG";

const LOCAL_CONFIG: &str = "config.toml";
const APP_DIR: &str = "toltec-repeat";

/// Loads the config and applies environment overrides.
///
/// An explicit path must exist. Without one, `./config.toml` is tried first,
/// then `<config_dir>/toltec-repeat/config.toml`, then built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut cfg = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            load_from_path(path)?
        }
        None => match discover() {
            Some(path) => load_from_path(&path)?,
            None => {
                tracing::debug!(target: "toltec_repeat.config", "no config file found, using defaults");
                AppConfig::default()
            }
        },
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let cfg = toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(target: "toltec_repeat.config", path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get(ENV_ROOT) {
        cfg.select.root = v;
    }
    if let Some(v) = get(ENV_TOOL) {
        cfg.tool.bin = v;
    }
    if let Some(v) = get(ENV_LOG) {
        cfg.logging.level = v;
    }
}

fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join(APP_DIR).join(LOCAL_CONFIG);
    user.exists().then_some(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ToolProvider, DEFAULT_OUTPUT, DEFAULT_ROOT, DEFAULT_TOOL_BIN};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.select.root, DEFAULT_ROOT);
        assert!(!cfg.select.follow_links);
        assert_eq!(cfg.tool.bin, DEFAULT_TOOL_BIN);
        assert_eq!(cfg.tool.provider, ToolProvider::KidsReduce);
        assert_eq!(cfg.tool.output, DEFAULT_OUTPUT);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_tool_table_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [tool]
            provider = "command"
            bin = "/opt/bin/reduce"
            args = ["--in", "{path}"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.tool.provider, ToolProvider::Command);
        assert_eq!(cfg.tool.bin, "/opt/bin/reduce");
        assert_eq!(cfg.tool.args, vec!["--in".to_string(), "{path}".to_string()]);
        assert_eq!(cfg.tool.output, DEFAULT_OUTPUT);
        assert_eq!(cfg.select.root, DEFAULT_ROOT);
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = toml::from_str::<AppConfig>("[tool]\nprovider = \"citlali\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn env_overrides_skip_blank_values() {
        let vars: HashMap<&str, &str> = [(ENV_ROOT, "/tmp/repeat"), (ENV_TOOL, "   ")]
            .into_iter()
            .collect();
        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.select.root, "/tmp/repeat");
        assert_eq!(cfg.tool.bin, DEFAULT_TOOL_BIN);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        match load(Some(missing.as_path())) {
            Err(ConfigError::NotFound(p)) => assert!(p.ends_with("nope.toml")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn explicit_path_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repeat.toml");
        std::fs::write(&path, "[select]\nroot = \"/data/x\"\nfollow_links = true\n").unwrap();

        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.select.root, "/data/x");
        assert!(cfg.select.follow_links);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[select\nroot = 1").unwrap();

        match load_from_path(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert!(p.ends_with("bad.toml")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
