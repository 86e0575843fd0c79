use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use clap::{Args, Parser, Subcommand};
use karmactl::{
    KarmaError, KarmaRunSettings, KarmaSettings, KarmaStartSettings, LogLevel, ProcessOutput,
    Reporter, RunMode, ServerSettings, karma_init, karma_run, karma_start,
};

#[derive(Parser)]
#[command(name = "karmactl")]
#[command(version)]
#[command(about = "Invoke the Karma test runner from a global or local install", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a karma server
    Start {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        server: ServerArgs,
        /// Auto watch source files and run on change
        #[arg(long)]
        auto_watch: bool,
        /// Do not watch source files
        #[arg(long)]
        no_auto_watch: bool,
        /// Detach the server
        #[arg(long)]
        detached: bool,
        /// Run the tests once the browsers are captured, then exit
        #[arg(long)]
        single_run: bool,
        /// Disable single-run
        #[arg(long)]
        no_single_run: bool,
        /// Kill a browser that does not capture within the given time (ms)
        #[arg(long, value_name = "MS")]
        capture_timeout: Option<u32>,
        /// Report tests slower than the given time (ms)
        #[arg(long, value_name = "MS")]
        report_slower_than: Option<u32>,
        /// Reporters to enable
        #[arg(long, value_delimiter = ',')]
        reporters: Vec<Reporter>,
        /// Browsers to start
        #[arg(long, value_delimiter = ',')]
        browsers: Vec<String>,
    },
    /// Trigger a run on a running karma server
    Run {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        server: ServerArgs,
        /// Do not re-glob all the patterns
        #[arg(long)]
        no_refresh: bool,
    },
    /// Initialize a karma config file
    Init {
        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Flags shared by every karma command.
#[derive(Args)]
struct CommonArgs {
    /// The karma.conf.js file to use
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Use a project-local karma install through node
    #[arg(long)]
    local: bool,
    /// Path to the karma CLI entry script for local runs
    #[arg(long, value_name = "FILE", requires = "local")]
    local_cli: Option<PathBuf>,
    /// Level of logging
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
    /// Use colors when reporting or printing logs
    #[arg(long)]
    colors: bool,
    /// Do not use colors when reporting or printing logs
    #[arg(long)]
    no_colors: bool,
}

impl CommonArgs {
    fn into_settings(self) -> KarmaSettings {
        KarmaSettings {
            run_mode: if self.local { RunMode::Local } else { RunMode::Global },
            config_file: self.config,
            local_cli: self.local_cli,
            log_level: self.log_level,
            colors: self.colors,
            no_colors: self.no_colors,
        }
    }
}

/// Flags shared by the run and start commands.
#[derive(Args)]
struct ServerArgs {
    /// Port where the server is listening
    #[arg(long)]
    port: Option<u16>,
    /// Fail on empty test suite
    #[arg(long)]
    fail_on_empty_test_suite: bool,
    /// Do not fail on empty test suite
    #[arg(long)]
    no_fail_on_empty_test_suite: bool,
}

impl ServerArgs {
    fn into_settings(self) -> ServerSettings {
        ServerSettings {
            port: self.port,
            fail_on_empty_test_suite: self.fail_on_empty_test_suite,
            no_fail_on_empty_test_suite: self.no_fail_on_empty_test_suite,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result: Result<ProcessOutput, KarmaError> = match cli.command {
        Commands::Start {
            common,
            server,
            auto_watch,
            no_auto_watch,
            detached,
            single_run,
            no_single_run,
            capture_timeout,
            report_slower_than,
            reporters,
            browsers,
        } => karma_start(&KarmaStartSettings {
            base: common.into_settings(),
            server: server.into_settings(),
            auto_watch,
            no_auto_watch,
            detached,
            single_run,
            no_single_run,
            capture_timeout,
            report_slower_than,
            reporters,
            browsers,
        }),
        Commands::Run { common, server, no_refresh } => karma_run(&KarmaRunSettings {
            base: common.into_settings(),
            server: server.into_settings(),
            no_refresh,
        }),
        Commands::Init { common } => karma_init(&common.into_settings()),
    };

    match result {
        Ok(output) => {
            // Relay the child's streams and exit code unmodified.
            print!("{}", output.stdout);
            eprint!("{}", output.stderr);
            let _ = std::io::stdout().flush();
            exit(output.exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
