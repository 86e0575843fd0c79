use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::settings::RunMode;

/// Library-wide error type for karmactl operations.
///
/// Every validation failure surfaces before a process is spawned;
/// nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum KarmaError {
    /// No config file was specified in the settings.
    #[error("A config file must be specified")]
    MissingConfigFile,

    /// The specified config file does not exist.
    #[error("Cannot find the specified config file: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },

    /// The karma CLI entry script for a local run does not exist.
    #[error("Cannot find the karma CLI file for a local run: {}", path.display())]
    CliFileNotFound { path: PathBuf },

    /// A runner was used with settings that specify the other run mode.
    #[error("Runner for {expected} run mode used, but the settings specify {actual}")]
    RunModeMismatch { expected: RunMode, actual: RunMode },

    /// None of the candidate executables could be located.
    #[error("Could not locate any of [{}] on PATH or in the working directory", candidates.join(", "))]
    ToolNotFound { candidates: Vec<String> },

    /// Underlying I/O failure while spawning or capturing the process.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_errors_carry_the_resolved_path() {
        let err = KarmaError::ConfigFileNotFound { path: PathBuf::from("/work/karma.conf.js") };
        assert!(err.to_string().contains("/work/karma.conf.js"));

        let err = KarmaError::CliFileNotFound { path: PathBuf::from("/work/karma-cli") };
        assert!(err.to_string().contains("/work/karma-cli"));
    }

    #[test]
    fn tool_not_found_lists_all_candidates() {
        let err = KarmaError::ToolNotFound {
            candidates: vec!["karma.cmd".to_string(), "karma".to_string()],
        };
        assert!(err.to_string().contains("karma.cmd, karma"));
    }

    #[test]
    fn run_mode_mismatch_names_both_modes() {
        let err = KarmaError::RunModeMismatch { expected: RunMode::Local, actual: RunMode::Global };
        let message = err.to_string();
        assert!(message.contains("local"));
        assert!(message.contains("global"));
    }
}
