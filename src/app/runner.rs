use std::path::{Path, PathBuf};

use crate::domain::{
    ArgumentBuilder, CommandSettings, DEFAULT_LOCAL_KARMA_CLI, KarmaError, RunMode,
};
use crate::ports::{FileSystemPort, ProcessOutput, ProcessRunnerPort};

/// How a runner invokes karma: which executables to probe, which run
/// mode the settings must carry, and whether the local CLI entry script
/// is prepended to the argument vector.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionStrategy {
    executable_candidates: &'static [&'static str],
    required_run_mode: RunMode,
    prepend_cli_entry: bool,
}

impl ExecutionStrategy {
    /// Globally installed karma, invoked directly.
    pub fn global() -> Self {
        Self {
            executable_candidates: &["karma.cmd", "karma"],
            required_run_mode: RunMode::Global,
            prepend_cli_entry: false,
        }
    }

    /// Project-local karma, invoked through node with the CLI entry
    /// script as first argument.
    pub fn local() -> Self {
        Self {
            executable_candidates: &["node.exe", "node", "nodejs"],
            required_run_mode: RunMode::Local,
            prepend_cli_entry: true,
        }
    }

    pub fn for_mode(mode: RunMode) -> Self {
        match mode {
            RunMode::Global => Self::global(),
            _ => Self::local(),
        }
    }
}

/// Validates karma settings, builds the argument vector, and delegates
/// to the process-invocation collaborator. One `execute` call produces
/// exactly one blocking process invocation.
pub struct KarmaRunner<'a, F, P> {
    file_system: &'a F,
    process_runner: &'a P,
    working_dir: &'a Path,
    strategy: ExecutionStrategy,
}

impl<'a, F, P> KarmaRunner<'a, F, P>
where
    F: FileSystemPort,
    P: ProcessRunnerPort,
{
    pub fn new(
        file_system: &'a F,
        process_runner: &'a P,
        working_dir: &'a Path,
        strategy: ExecutionStrategy,
    ) -> Self {
        Self { file_system, process_runner, working_dir, strategy }
    }

    /// Execute karma with the given settings.
    ///
    /// Validation happens entirely before the spawn: config file
    /// presence and existence, run-mode match, and (locally) CLI entry
    /// existence. The file checks and the spawn are not transactional;
    /// a file deleted in between fails through the process runner.
    pub fn execute<S: CommandSettings>(&self, settings: &S) -> Result<ProcessOutput, KarmaError> {
        let cli_entry = self.validate(settings)?;

        let mut args = ArgumentBuilder::new();
        if let Some(cli) = &cli_entry {
            args.append_quoted(cli.to_string_lossy());
        }
        args.append(settings.command());
        settings.evaluate(&mut args);

        self.process_runner.run(self.strategy.executable_candidates, self.working_dir, &args)
    }

    /// Execute karma with settings produced by mutating a default value.
    pub fn execute_with<S>(&self, configure: impl FnOnce(&mut S)) -> Result<ProcessOutput, KarmaError>
    where
        S: CommandSettings + Default,
    {
        let mut settings = S::default();
        configure(&mut settings);
        self.execute(&settings)
    }

    /// Returns the effective CLI entry path when one must be prepended.
    fn validate<S: CommandSettings>(&self, settings: &S) -> Result<Option<PathBuf>, KarmaError> {
        let base = settings.base();

        let config = base.config_file.as_ref().ok_or(KarmaError::MissingConfigFile)?;
        if !self.file_system.exists(config) {
            return Err(KarmaError::ConfigFileNotFound {
                path: self.file_system.resolve_absolute(config),
            });
        }

        if base.run_mode != self.strategy.required_run_mode {
            return Err(KarmaError::RunModeMismatch {
                expected: self.strategy.required_run_mode,
                actual: base.run_mode,
            });
        }

        if !self.strategy.prepend_cli_entry {
            return Ok(None);
        }

        let cli = base.local_cli.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOCAL_KARMA_CLI));
        if !self.file_system.exists(&cli) {
            return Err(KarmaError::CliFileNotFound {
                path: self.file_system.resolve_absolute(&cli),
            });
        }
        Ok(Some(cli))
    }
}
