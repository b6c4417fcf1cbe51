//! Configuration is split into:
//! - `types.rs` (data structures + defaults)
//! - `load.rs`  (IO: file lookup + env overrides)

pub mod load;
pub mod types;

pub use load::{apply_env_overrides, load, load_from_path, ENV_LOG, ENV_ROOT, ENV_TOOL};
pub use types::*;
