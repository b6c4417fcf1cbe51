pub mod exit;
mod traits;

pub use exit::normalize_exit;
pub use traits::{RunOutcome, RunnerPlugin};
