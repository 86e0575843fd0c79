use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::{ArgumentBuilder, KarmaError};
use crate::ports::{ProcessOutput, ProcessRunnerPort};

/// Process runner backed by `std::process::Command`.
///
/// Executable discovery walks the candidate names in order; each
/// candidate is probed in the working directory first and then in every
/// `PATH` entry. The first hit wins.
#[derive(Debug, Clone, Default)]
pub struct ShellProcessRunner;

impl ShellProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn search_dirs(working_dir: &Path) -> Vec<PathBuf> {
        let mut dirs = vec![working_dir.to_path_buf()];
        if let Some(path) = env::var_os("PATH") {
            dirs.extend(env::split_paths(&path));
        }
        dirs
    }
}

fn locate_in(dirs: &[PathBuf], candidates: &[&str]) -> Option<PathBuf> {
    for candidate in candidates {
        for dir in dirs {
            let probe = dir.join(candidate);
            if probe.is_file() {
                return Some(probe);
            }
        }
    }
    None
}

impl ProcessRunnerPort for ShellProcessRunner {
    fn run(
        &self,
        candidates: &[&str],
        working_dir: &Path,
        args: &ArgumentBuilder,
    ) -> Result<ProcessOutput, KarmaError> {
        let dirs = Self::search_dirs(working_dir);
        let executable =
            locate_in(&dirs, candidates).ok_or_else(|| KarmaError::ToolNotFound {
                candidates: candidates.iter().map(|c| c.to_string()).collect(),
            })?;

        let output = Command::new(&executable)
            .args(args.to_args())
            .current_dir(working_dir)
            .output()?;

        Ok(ProcessOutput {
            // A missing code means the child was killed by a signal.
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
