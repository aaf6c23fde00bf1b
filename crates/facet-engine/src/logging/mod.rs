//! Logging setup.
//!
//! The crate logs through the `log` facade; `init_logging` installs
//! `env_logger` for binaries that do not bring their own backend.

mod init;

pub use init::{init_logging, LoggingConfig};
