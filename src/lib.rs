//! karmactl: invoke the Karma test runner from typed settings.
//!
//! A settings object (one per karma command: `init`, `run`, `start`) is
//! serialized into an ordered argument line and handed to the karma
//! executable — either a global install, or a project-local install
//! invoked through node. File existence is validated before anything is
//! spawned; the child's exit code and output are passed through
//! untouched.
//!
//! ```no_run
//! use karmactl::{KarmaStartSettings, RunMode, karma_start_with};
//!
//! let _output = karma_start_with(|settings| {
//!     settings.base.config_file = Some("karma.conf.js".into());
//!     settings.base.run_mode = RunMode::Local;
//!     settings.single_run = true;
//! })?;
//! # Ok::<(), karmactl::KarmaError>(())
//! ```

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::env;

use services::{HostFileSystem, ShellProcessRunner};

pub use app::{ExecutionStrategy, KarmaRunner, KarmaRunnerFactory};
pub use domain::{
    ArgumentBuilder, CommandSettings, DEFAULT_LOCAL_KARMA_CLI, KarmaError, KarmaRunSettings,
    KarmaSettings, KarmaStartSettings, LogLevel, Reporter, RunMode, ServerSettings,
};
pub use ports::{FileSystemPort, ProcessOutput, ProcessRunnerPort};

/// Factory wired to the real file system and process runner, rooted at
/// the current working directory.
pub fn host_factory()
-> Result<KarmaRunnerFactory<HostFileSystem, ShellProcessRunner>, KarmaError> {
    let working_dir = env::current_dir()?;
    Ok(KarmaRunnerFactory::new(
        HostFileSystem::new(&working_dir),
        ShellProcessRunner::new(),
        working_dir,
    ))
}

/// Run `karma start` with pre-built settings.
pub fn karma_start(settings: &KarmaStartSettings) -> Result<ProcessOutput, KarmaError> {
    host_factory()?.start(settings)
}

/// Run `karma start`, configuring default settings with a closure.
pub fn karma_start_with(
    configure: impl FnOnce(&mut KarmaStartSettings),
) -> Result<ProcessOutput, KarmaError> {
    host_factory()?.start_with(configure)
}

/// Run `karma run` with pre-built settings.
pub fn karma_run(settings: &KarmaRunSettings) -> Result<ProcessOutput, KarmaError> {
    host_factory()?.run(settings)
}

/// Run `karma run`, configuring default settings with a closure.
pub fn karma_run_with(
    configure: impl FnOnce(&mut KarmaRunSettings),
) -> Result<ProcessOutput, KarmaError> {
    host_factory()?.run_with(configure)
}

/// Run `karma init` with pre-built settings.
pub fn karma_init(settings: &KarmaSettings) -> Result<ProcessOutput, KarmaError> {
    host_factory()?.init(settings)
}

/// Run `karma init`, configuring default settings with a closure.
pub fn karma_init_with(
    configure: impl FnOnce(&mut KarmaSettings),
) -> Result<ProcessOutput, KarmaError> {
    host_factory()?.init_with(configure)
}
