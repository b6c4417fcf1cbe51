pub mod command;
pub mod kids_reduce;

pub use command::CommandStrategy;
pub use kids_reduce::KidsReduceStrategy;
