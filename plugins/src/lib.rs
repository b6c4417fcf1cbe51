pub mod backend;
pub mod factory;
pub mod resolve;
pub mod runner;
