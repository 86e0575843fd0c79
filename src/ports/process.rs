use std::path::Path;

use crate::domain::{ArgumentBuilder, KarmaError};

/// Exit code and captured output of a finished process, passed through
/// to the caller without interpretation.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Process-invocation collaborator.
///
/// The implementation performs executable discovery across the ordered
/// candidate list (first found wins), spawns the executable with the
/// given arguments, and blocks until it exits.
pub trait ProcessRunnerPort {
    fn run(
        &self,
        candidates: &[&str],
        working_dir: &Path,
        args: &ArgumentBuilder,
    ) -> Result<ProcessOutput, KarmaError>;
}
