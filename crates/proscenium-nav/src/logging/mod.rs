//! Logging utilities.
//!
//! The library only ever emits through the `log` facade; this module
//! centralizes the `env_logger` backend setup for binaries that want it.

mod init;

pub use init::{LoggingConfig, init_logging};
