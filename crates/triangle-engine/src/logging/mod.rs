//! Logger bootstrap.
//!
//! Everything in the workspace logs through the `log` facade; this module
//! installs the `env_logger` backend exactly once.

mod init;

pub use init::{LoggingConfig, init_logging};
