pub mod args;
pub mod error;
pub mod settings;

pub use args::ArgumentBuilder;
pub use error::KarmaError;
pub use settings::{
    CommandSettings, DEFAULT_LOCAL_KARMA_CLI, KarmaRunSettings, KarmaSettings, KarmaStartSettings,
    LogLevel, Reporter, RunMode, ServerSettings,
};
