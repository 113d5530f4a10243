//! Logging utilities.
//!
//! Every diagnostic the engine raises goes through the `log` facade; this
//! module only owns backend initialization for binaries and tests.

mod init;

pub use init::{init_logging, LoggingConfig};
