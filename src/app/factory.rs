use std::path::PathBuf;

use crate::app::runner::{ExecutionStrategy, KarmaRunner};
use crate::domain::{
    CommandSettings, KarmaError, KarmaRunSettings, KarmaSettings, KarmaStartSettings, RunMode,
};
use crate::ports::{FileSystemPort, ProcessOutput, ProcessRunnerPort};

/// Chooses the runner variant based on run mode and exposes one entry
/// point per karma command.
///
/// Owns the collaborators; runners borrow them per invocation and hold
/// no state of their own.
pub struct KarmaRunnerFactory<F, P> {
    file_system: F,
    process_runner: P,
    working_dir: PathBuf,
}

impl<F, P> KarmaRunnerFactory<F, P>
where
    F: FileSystemPort,
    P: ProcessRunnerPort,
{
    pub fn new(file_system: F, process_runner: P, working_dir: impl Into<PathBuf>) -> Self {
        Self { file_system, process_runner, working_dir: working_dir.into() }
    }

    /// Create a runner for the given run mode: `Global` yields the
    /// global strategy, anything else the local one.
    pub fn create_runner(&self, run_mode: RunMode) -> KarmaRunner<'_, F, P> {
        KarmaRunner::new(
            &self.file_system,
            &self.process_runner,
            &self.working_dir,
            ExecutionStrategy::for_mode(run_mode),
        )
    }

    /// Run `karma start` with pre-built settings.
    pub fn start(&self, settings: &KarmaStartSettings) -> Result<ProcessOutput, KarmaError> {
        self.dispatch(settings)
    }

    /// Run `karma run` with pre-built settings.
    pub fn run(&self, settings: &KarmaRunSettings) -> Result<ProcessOutput, KarmaError> {
        self.dispatch(settings)
    }

    /// Run `karma init` with pre-built settings.
    pub fn init(&self, settings: &KarmaSettings) -> Result<ProcessOutput, KarmaError> {
        self.dispatch(settings)
    }

    /// Run `karma start`, configuring default settings with a closure.
    pub fn start_with(
        &self,
        configure: impl FnOnce(&mut KarmaStartSettings),
    ) -> Result<ProcessOutput, KarmaError> {
        self.dispatch_with(configure)
    }

    /// Run `karma run`, configuring default settings with a closure.
    pub fn run_with(
        &self,
        configure: impl FnOnce(&mut KarmaRunSettings),
    ) -> Result<ProcessOutput, KarmaError> {
        self.dispatch_with(configure)
    }

    /// Run `karma init`, configuring default settings with a closure.
    pub fn init_with(
        &self,
        configure: impl FnOnce(&mut KarmaSettings),
    ) -> Result<ProcessOutput, KarmaError> {
        self.dispatch_with(configure)
    }

    fn dispatch<S: CommandSettings>(&self, settings: &S) -> Result<ProcessOutput, KarmaError> {
        self.create_runner(settings.base().run_mode).execute(settings)
    }

    fn dispatch_with<S>(
        &self,
        configure: impl FnOnce(&mut S),
    ) -> Result<ProcessOutput, KarmaError>
    where
        S: CommandSettings + Default,
    {
        let mut settings = S::default();
        configure(&mut settings);
        self.dispatch(&settings)
    }
}
