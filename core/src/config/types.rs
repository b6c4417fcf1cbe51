use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOT: &str = "/data_toltec/repeat";
pub const DEFAULT_TOOL_BIN: &str = "$HOME/kids_bin/reduce.sh";
pub const DEFAULT_TOOL_NAME: &str = "reduce.sh";
pub const DEFAULT_OUTPUT: &str = "dummy_output";
pub const PATH_PLACEHOLDER: &str = "{path}";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub select: SelectConfig,

    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default = "default_root")]
    pub root: String,

    #[serde(default)]
    pub follow_links: bool,
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub provider: ToolProvider,

    #[serde(default = "default_tool_bin")]
    pub bin: String,

    /// Output name handed to `kids_reduce`.
    #[serde(default = "default_output")]
    pub output: String,

    /// Argument template for `command`; `{path}` is replaced by the match.
    #[serde(default = "default_command_args")]
    pub args: Vec<String>,
}

/// How a matched path is turned into a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolProvider {
    /// `<bin> <path> -r --output <output>`
    #[default]
    KidsReduce,
    /// `<bin> <args...>`
    Command,
}

fn default_tool_bin() -> String {
    DEFAULT_TOOL_BIN.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_command_args() -> Vec<String> {
    vec![
        PATH_PLACEHOLDER.to_string(),
        "-r".to_string(),
        "--output".to_string(),
        DEFAULT_OUTPUT.to_string(),
    ]
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            provider: ToolProvider::default(),
            bin: default_tool_bin(),
            output: default_output(),
            args: default_command_args(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Non-empty: also write a daily rolling log file into this directory.
    #[serde(default)]
    pub directory: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
        }
    }
}
