mod host_file_system;
mod shell_process_runner;

pub use host_file_system::HostFileSystem;
pub use shell_process_runner::ShellProcessRunner;
