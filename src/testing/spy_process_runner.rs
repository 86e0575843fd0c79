use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{ArgumentBuilder, KarmaError};
use crate::ports::{ProcessOutput, ProcessRunnerPort};

/// One recorded call to the process runner.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub candidates: Vec<String>,
    pub working_dir: PathBuf,
    pub rendered_args: String,
}

/// Process runner that records every invocation and returns a canned
/// zero-exit output instead of spawning anything.
#[derive(Default)]
pub struct SpyProcessRunner {
    invocations: Mutex<Vec<Invocation>>,
}

impl SpyProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// The rendered argument line of the single recorded invocation.
    pub fn single_arg_line(&self) -> String {
        let invocations = self.invocations.lock().unwrap();
        assert_eq!(invocations.len(), 1, "expected exactly one process invocation");
        invocations[0].rendered_args.clone()
    }
}

impl ProcessRunnerPort for SpyProcessRunner {
    fn run(
        &self,
        candidates: &[&str],
        working_dir: &Path,
        args: &ArgumentBuilder,
    ) -> Result<ProcessOutput, KarmaError> {
        self.invocations.lock().unwrap().push(Invocation {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            working_dir: working_dir.to_path_buf(),
            rendered_args: args.render(),
        });
        Ok(ProcessOutput { exit_code: 0, stdout: String::new(), stderr: String::new() })
    }
}
