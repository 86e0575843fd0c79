mod fake_file_system;
mod spy_process_runner;

pub use fake_file_system::FakeFileSystem;
pub use spy_process_runner::{Invocation, SpyProcessRunner};
