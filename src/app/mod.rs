mod factory;
mod runner;

pub use factory::KarmaRunnerFactory;
pub use runner::{ExecutionStrategy, KarmaRunner};
