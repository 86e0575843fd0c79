mod file_system;
mod process;

pub use file_system::FileSystemPort;
pub use process::{ProcessOutput, ProcessRunnerPort};
