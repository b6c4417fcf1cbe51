pub mod api;
pub mod backend;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod filename;
pub mod pattern;
pub mod runner;
pub mod select;

pub use context::AppContext;
