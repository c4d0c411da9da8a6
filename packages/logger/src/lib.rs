//! Structured logging for lighthouse errors
//!
//! Provides an `env_logger`-backed [`Logger`] with three stages:
//! - [`Stage::Local`]: readable lines for a terminal
//! - [`Stage::Dev`]: JSON lines, debug and above
//! - [`Stage::Prod`]: JSON lines, errors only
//!
//! Every error handed to a logger is first normalized with
//! [`lighthouse_core::ensure`] and rendered through
//! [`lighthouse_core::hooks::fields`].

pub mod config;
mod format;
pub mod logger;
pub mod stage;

pub use config::{ConfigError, LoggerConfig};
pub use logger::{Logger, Output, TARGET};
pub use stage::{ParseStageError, Stage};

/// Install a global `env_logger` for test environments
///
/// Lets `log` records emitted by library code show up in test output.
/// Safe to call from every test.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
