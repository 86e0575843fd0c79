use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::domain::args::ArgumentBuilder;

/// Relative CLI entry script of a project-local karma install, used when
/// no explicit path is configured in [`RunMode::Local`].
pub const DEFAULT_LOCAL_KARMA_CLI: &str = "node_modules/karma-cli/bin/karma";

/// Whether karma is invoked from a global install or through a local
/// project install fronted by node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    Local,
    #[default]
    Global,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Local => write!(f, "local"),
            RunMode::Global => write!(f, "global"),
        }
    }
}

/// Karma logging levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum LogLevel {
    /// No logging.
    Disable,
    /// Log errors.
    Error,
    /// Log warnings.
    Warn,
    /// Log info.
    Info,
    /// Log diagnostics.
    Debug,
}

impl LogLevel {
    /// Flag value: the lowercased variant name.
    pub fn flag_value(&self) -> &'static str {
        match self {
            LogLevel::Disable => "disable",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

/// Karma reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum Reporter {
    Dots,
    Progress,
    JUnit,
    Growl,
    Coverage,
}

impl Reporter {
    /// Flag value: the lowercased variant name.
    pub fn flag_value(&self) -> &'static str {
        match self {
            Reporter::Dots => "dots",
            Reporter::Progress => "progress",
            Reporter::JUnit => "junit",
            Reporter::Growl => "growl",
            Reporter::Coverage => "coverage",
        }
    }
}

/// Settings common across all karma commands. Doubles as the settings
/// for `karma init`, which has no flags of its own.
///
/// Opposite boolean pairs (`colors` / `no_colors`, and the pairs on the
/// command settings below) are independent: setting both emits both
/// flags, matching karma's own CLI surface.
#[derive(Debug, Clone, Default)]
pub struct KarmaSettings {
    /// Run karma locally or globally. Defaults to [`RunMode::Global`].
    pub run_mode: RunMode,
    /// The karma.conf.js file to use. Required; must exist on disk.
    pub config_file: Option<PathBuf>,
    /// Path to the karma CLI entry script for local runs. Defaults to
    /// [`DEFAULT_LOCAL_KARMA_CLI`] when unset.
    pub local_cli: Option<PathBuf>,
    /// Level of logging.
    pub log_level: Option<LogLevel>,
    /// Use colors when reporting or printing logs.
    pub colors: bool,
    /// Do not use colors when reporting or printing logs.
    pub no_colors: bool,
}

/// Flags shared by the `run` and `start` commands.
#[derive(Debug, Clone, Default)]
pub struct ServerSettings {
    /// Port where the server is listening.
    pub port: Option<u16>,
    /// Fail on empty test suite.
    pub fail_on_empty_test_suite: bool,
    /// Do not fail on empty test suite.
    pub no_fail_on_empty_test_suite: bool,
}

impl ServerSettings {
    fn append_flags(&self, args: &mut ArgumentBuilder) {
        if let Some(port) = self.port {
            args.append_switch("--port", port);
        }
        if self.fail_on_empty_test_suite {
            args.append("--fail-on-empty-test-suite");
        }
        if self.no_fail_on_empty_test_suite {
            args.append("--no-fail-on-empty-test-suite");
        }
    }
}

/// Settings for `karma run`.
#[derive(Debug, Clone, Default)]
pub struct KarmaRunSettings {
    pub base: KarmaSettings,
    pub server: ServerSettings,
    /// Do not re-glob all the patterns.
    pub no_refresh: bool,
}

/// Settings for `karma start`.
#[derive(Debug, Clone, Default)]
pub struct KarmaStartSettings {
    pub base: KarmaSettings,
    pub server: ServerSettings,
    /// Auto watch source files and run on change.
    pub auto_watch: bool,
    /// Do not watch source files.
    pub no_auto_watch: bool,
    /// Detach the server.
    pub detached: bool,
    /// Run the tests once the browsers are captured, then exit.
    pub single_run: bool,
    /// Disable single-run.
    pub no_single_run: bool,
    /// Kill a browser that does not capture within the given time (ms).
    pub capture_timeout: Option<u32>,
    /// Report tests slower than the given time (ms).
    pub report_slower_than: Option<u32>,
    /// Reporters to enable.
    pub reporters: Vec<Reporter>,
    /// Browsers to start.
    pub browsers: Vec<String>,
}

/// A command-specific settings bag: names its karma subcommand and knows
/// how to append its own flags after the shared ones.
pub trait CommandSettings {
    /// The karma subcommand this settings type drives.
    fn command(&self) -> &'static str;

    /// The settings shared by every command.
    fn base(&self) -> &KarmaSettings;

    /// Append command-specific flags. Called after the shared flags.
    fn append_flags(&self, _args: &mut ArgumentBuilder) {}

    /// Serialize this settings bag into CLI arguments, in fixed order:
    /// quoted config file, log level, color flags, then command flags.
    ///
    /// Assumes `config_file` was validated beforehand; a missing config
    /// file appends nothing for that slot.
    fn evaluate(&self, args: &mut ArgumentBuilder) {
        let base = self.base();

        if let Some(config) = &base.config_file {
            args.append_quoted(config.to_string_lossy());
        }

        if let Some(level) = base.log_level {
            args.append_switch("--log-level", level.flag_value());
        }

        if base.colors {
            args.append("--colors");
        }
        if base.no_colors {
            args.append("--no-colors");
        }

        self.append_flags(args);
    }
}

impl CommandSettings for KarmaSettings {
    fn command(&self) -> &'static str {
        "init"
    }

    fn base(&self) -> &KarmaSettings {
        self
    }
}

impl CommandSettings for KarmaRunSettings {
    fn command(&self) -> &'static str {
        "run"
    }

    fn base(&self) -> &KarmaSettings {
        &self.base
    }

    fn append_flags(&self, args: &mut ArgumentBuilder) {
        self.server.append_flags(args);

        if self.no_refresh {
            args.append("--no-refresh");
        }
    }
}

impl CommandSettings for KarmaStartSettings {
    fn command(&self) -> &'static str {
        "start"
    }

    fn base(&self) -> &KarmaSettings {
        &self.base
    }

    fn append_flags(&self, args: &mut ArgumentBuilder) {
        self.server.append_flags(args);

        if self.auto_watch {
            args.append("--auto-watch");
        }
        if self.no_auto_watch {
            args.append("--no-auto-watch");
        }
        if self.detached {
            args.append("--detached");
        }
        if self.single_run {
            args.append("--single-run");
        }
        if self.no_single_run {
            args.append("--no-single-run");
        }
        if let Some(timeout) = self.capture_timeout {
            args.append_switch("--capture-timeout", timeout);
        }
        if let Some(threshold) = self.report_slower_than {
            args.append_switch("--report-slower-than", threshold);
        }
        if !self.reporters.is_empty() {
            let joined: Vec<&str> = self.reporters.iter().map(Reporter::flag_value).collect();
            args.append_switch("--reporters", joined.join(","));
        }
        if !self.browsers.is_empty() {
            args.append_switch("--browsers", self.browsers.join(","));
        }
    }
}
