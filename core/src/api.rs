//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `toltec_repeat_core::api` instead of reaching into internal modules.

pub use crate::backend::{path_arg, BackendStrategy, RunnerStartArgs};
pub use crate::config::{AppConfig, LoggingConfig, SelectConfig, ToolConfig, ToolProvider};
pub use crate::context::AppContext;
pub use crate::dispatch::{dispatch, DispatchOpts, DispatchReport};
pub use crate::error::{CliError, ConfigError, PlanError, RunnerError};
pub use crate::filename::DataFileInfo;
pub use crate::pattern::MatchPattern;
pub use crate::runner::{normalize_exit, RunOutcome, RunnerPlugin};
pub use crate::select::{select_matches, select_matches_blocking, SelectOpts};
